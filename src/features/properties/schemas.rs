use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use shared::schemas::PaginationMeta;
use validator::{Validate, ValidationError};

use crate::features::properties::models::LAND_CATEGORY;

// -- =====================
// -- OUT
// -- =====================
#[derive(Serialize, Deserialize, Clone, PartialEq, Default, Debug)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub coordinates: Coordinates,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct Specs {
    pub net_size: Option<f64>,
    pub gross_size: Option<f64>,
    pub rooms: Option<String>,
    pub bathrooms: Option<i32>,
    pub age: Option<i32>,
    pub floor: Option<String>,
    pub total_floors: Option<i32>,
    pub heating: Option<String>,
    pub furnishing: Option<String>,
    pub balcony_count: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
pub struct Category {
    pub main: String,
    pub sub: String,
}

impl Category {
    pub fn is_land(&self) -> bool {
        self.main == LAND_CATEGORY
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub photo: Option<String>,
    pub company: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyDetails {
    pub usage_status: Option<String>,
    pub deed_status: Option<String>,
    pub from_who: Option<String>,
    pub is_settlement: bool,
    pub credit_eligible: bool,
    pub exchange_available: bool,
    pub in_site: bool,
    pub monthly_fee: Option<i64>,
    pub has_debt: bool,
    pub debt_amount: Option<i64>,
    pub is_rent_guaranteed: bool,
    pub rent_guarantee_amount: Option<i64>,
    pub is_new_building: bool,
    pub is_suitable_for_office: bool,
    pub has_business_license: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct InteriorFeatures {
    pub kitchen_type: Option<String>,
    pub has_built_in_kitchen: bool,
    pub has_built_in_wardrobe: bool,
    pub has_laminate: bool,
    pub has_parquet: bool,
    pub has_ceramic: bool,
    pub has_marble: bool,
    pub has_wallpaper: bool,
    pub has_painted_walls: bool,
    pub has_spot_lighting: bool,
    pub has_hilton_bathroom: bool,
    pub has_jacuzzi: bool,
    pub has_shower_cabin: bool,
    pub has_american_door: bool,
    pub has_steel_door: bool,
    pub has_intercom: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct ExteriorFeatures {
    pub has_balcony: bool,
    pub has_terrace: bool,
    pub has_garden: bool,
    pub has_garden_use: bool,
    pub has_sea_view: bool,
    pub has_city_view: bool,
    pub has_nature_view: bool,
    pub has_pool_view: bool,
    pub facade: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildingFeatures {
    pub has_elevator: bool,
    pub has_car_park: bool,
    pub has_closed_car_park: bool,
    pub has_open_car_park: bool,
    pub has_security: bool,
    #[serde(rename = "has24HourSecurity")]
    pub has_24_hour_security: bool,
    pub has_camera_system: bool,
    pub has_concierge: bool,
    pub has_pool: bool,
    pub has_gym: bool,
    pub has_sauna: bool,
    pub has_turkish_bath: bool,
    pub has_playground: bool,
    pub has_basketball_court: bool,
    pub has_tennis_court: bool,
    pub has_generator: bool,
    pub has_fire_escape: bool,
    pub has_fire_detector: bool,
    pub has_water_booster: bool,
    pub has_satellite_system: bool,
    pub has_wifi: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct LandDetails {
    pub zoning_status: Option<String>,
    pub price_per_square_meter: Option<i64>,
    pub block_number: Option<String>,
    pub parcel_number: Option<String>,
    pub sheet_number: Option<String>,
    pub floor_area_ratio: Option<String>,
    pub building_height: Option<String>,
    pub credit_eligibility: Option<String>,
}

/// Land records carry `landDetails`; building records carry nothing extra.
/// Flattened into [`Property`], so the wire shape only gains a `landDetails`
/// key for land.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum PropertyKind {
    Land {
        #[serde(rename = "landDetails")]
        land_details: LandDetails,
    },
    Building {},
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i64,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub location: Location,
    pub specs: Specs,
    pub category: Category,
    pub images: Vec<String>,
    pub agent: Agent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub sahibinden_link: Option<String>,
    #[serde(default)]
    pub property_details: PropertyDetails,
    #[serde(default)]
    pub interior_features: InteriorFeatures,
    #[serde(default)]
    pub exterior_features: ExteriorFeatures,
    #[serde(default)]
    pub building_features: BuildingFeatures,
    #[serde(flatten)]
    pub kind: PropertyKind,
}

impl Property {
    pub fn land_details(&self) -> Option<&LandDetails> {
        match &self.kind {
            PropertyKind::Land { land_details } => Some(land_details),
            PropertyKind::Building {} => None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug)]
pub struct Facets {
    pub cities: Vec<String>,
    pub districts: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub properties: Vec<Property>,
    pub pagination: PaginationMeta,
    pub facets: Facets,
}

// -- =====================
// -- IN
// -- =====================
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }

    /// Path segment of the server-rendered pages.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ListingType::Sale => "satilik",
            ListingType::Rent => "kiralik",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(ListingType::Sale),
            "rent" => Ok(ListingType::Rent),
            other => Err(format!("unknown listing type '{other}'")),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    SizeDesc,
}

impl Sort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Newest => "newest",
            Sort::PriceAsc => "price_asc",
            Sort::PriceDesc => "price_desc",
            Sort::SizeDesc => "size_desc",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Sort::Newest),
            "price_asc" => Ok(Sort::PriceAsc),
            "price_desc" => Ok(Sort::PriceDesc),
            "size_desc" => Ok(Sort::SizeDesc),
            other => Err(format!("unknown sort '{other}'")),
        }
    }
}

#[serde_as]
#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "validate_ranges"))]
pub struct SearchParams {
    #[serde(rename = "type")]
    #[serde_as(as = "NoneAsEmptyString")]
    pub listing_type: Option<ListingType>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub category_main: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub category_sub: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub city: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub district: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(range(min = 0))]
    pub min_price: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(range(min = 0))]
    pub max_price: Option<i64>,

    #[serde_as(as = "NoneAsEmptyString")]
    pub rooms: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(range(min = 0.0))]
    pub min_size: Option<f64>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(range(min = 0.0))]
    pub max_size: Option<f64>,

    #[serde_as(as = "NoneAsEmptyString")]
    pub kitchen_type: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub heating_type: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub furnishing: Option<String>,

    #[serde(deserialize_with = "deserialize_flag")]
    pub has_parking: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub has_elevator: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_furnished: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub has_balcony: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub in_site: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub credit_eligible: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub exchange_available: bool,

    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 100))]
    pub search: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub sort: Option<Sort>,

    #[serde_as(as = "NoneAsEmptyString")]
    pub page: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub limit: Option<i64>,
}

/// Only "true" and "1" switch a flag on; anything else leaves it off.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(matches!(
        String::deserialize(deserializer)?.as_str(),
        "true" | "1"
    ))
}

fn validate_ranges(params: &SearchParams) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (params.min_price, params.max_price)
        && min > max
    {
        return Err(ValidationError::new("price_range")
            .with_message("Minimum price cannot exceed maximum price".into()));
    }

    if let (Some(min), Some(max)) = (params.min_size, params.max_size)
        && min > max
    {
        return Err(ValidationError::new("size_range")
            .with_message("Minimum size cannot exceed maximum size".into()));
    }

    Ok(())
}

impl SearchParams {
    pub fn trimmed_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

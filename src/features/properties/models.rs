use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// `category_main` value marking a record as land.
pub const LAND_CATEGORY: &str = "Arsa";

/// One row of the `properties` table, exactly as stored.
#[derive(FromRow, Clone, PartialEq, Default, Debug)]
#[sqlx(default)]
pub struct PropertyRecord {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i64,
    #[sqlx(rename = "type")]
    pub listing_type: String,
    pub status: String,

    // location
    pub city: String,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub coordinates_lat: Option<f64>,
    pub coordinates_lng: Option<f64>,

    // specs
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

    // category
    pub category_main: String,
    pub category_sub: String,

    pub images: Option<String>,

    // agent
    pub agent_id: Option<i64>,
    pub agent_name: String,
    pub agent_phone: String,
    pub agent_email: String,
    pub agent_photo: Option<String>,
    pub agent_company: Option<String>,

    pub sahibinden_link: Option<String>,

    // property details
    pub usage_status: Option<String>,
    pub deed_status: Option<String>,
    pub from_who: Option<String>,
    pub is_settlement: Option<bool>,
    pub credit_eligible: Option<bool>,
    pub exchange_available: Option<bool>,
    pub in_site: Option<bool>,
    pub monthly_fee: Option<i64>,
    pub has_debt: Option<bool>,
    pub debt_amount: Option<i64>,
    pub is_rent_guaranteed: Option<bool>,
    pub rent_guarantee_amount: Option<i64>,
    pub is_new_building: Option<bool>,
    pub is_suitable_for_office: Option<bool>,
    pub has_business_license: Option<bool>,

    // interior features
    pub kitchen_type: Option<String>,
    pub has_built_in_kitchen: Option<bool>,
    pub has_built_in_wardrobe: Option<bool>,
    pub has_laminate: Option<bool>,
    pub has_parquet: Option<bool>,
    pub has_ceramic: Option<bool>,
    pub has_marble: Option<bool>,
    pub has_wallpaper: Option<bool>,
    pub has_painted_walls: Option<bool>,
    pub has_spot_lighting: Option<bool>,
    pub has_hilton_bathroom: Option<bool>,
    pub has_jacuzzi: Option<bool>,
    pub has_shower_cabin: Option<bool>,
    pub has_american_door: Option<bool>,
    pub has_steel_door: Option<bool>,
    pub has_intercom: Option<bool>,

    // exterior features
    pub has_balcony: Option<bool>,
    pub has_terrace: Option<bool>,
    pub has_garden: Option<bool>,
    pub has_garden_use: Option<bool>,
    pub has_sea_view: Option<bool>,
    pub has_city_view: Option<bool>,
    pub has_nature_view: Option<bool>,
    pub has_pool_view: Option<bool>,
    pub facade: Option<String>,

    // building features
    pub has_elevator: Option<bool>,
    pub has_car_park: Option<bool>,
    pub has_closed_car_park: Option<bool>,
    pub has_open_car_park: Option<bool>,
    pub has_security: Option<bool>,
    pub has_24_hour_security: Option<bool>,
    pub has_camera_system: Option<bool>,
    pub has_concierge: Option<bool>,
    pub has_pool: Option<bool>,
    pub has_gym: Option<bool>,
    pub has_sauna: Option<bool>,
    pub has_turkish_bath: Option<bool>,
    pub has_playground: Option<bool>,
    pub has_basketball_court: Option<bool>,
    pub has_tennis_court: Option<bool>,
    pub has_generator: Option<bool>,
    pub has_fire_escape: Option<bool>,
    pub has_fire_detector: Option<bool>,
    pub has_water_booster: Option<bool>,
    pub has_satellite_system: Option<bool>,
    pub has_wifi: Option<bool>,

    // land details
    pub zoning_status: Option<String>,
    pub price_per_square_meter: Option<i64>,
    pub block_number: Option<String>,
    pub parcel_number: Option<String>,
    pub sheet_number: Option<String>,
    pub floor_area_ratio: Option<String>,
    pub building_height: Option<String>,
    pub credit_eligibility: Option<String>,

    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropertyRecord {
    pub fn is_land(&self) -> bool {
        self.category_main == LAND_CATEGORY
    }
}

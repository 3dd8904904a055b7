use tracing::warn;

use crate::features::properties::{
    models::PropertyRecord,
    schemas::{
        Agent, BuildingFeatures, Category, Coordinates, ExteriorFeatures, Facets,
        InteriorFeatures, LandDetails, Location, Property, PropertyDetails, PropertyKind, Specs,
    },
};

/// Decodes the JSON-encoded image column. An absent or blank column is an
/// empty gallery; malformed content is reported to the caller.
pub fn parse_images(raw: Option<&str>) -> Result<Vec<String>, serde_json::Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(vec![]),
        Some(raw) => serde_json::from_str::<Option<Vec<String>>>(raw).map(Option::unwrap_or_default),
    }
}

impl From<PropertyRecord> for Property {
    fn from(row: PropertyRecord) -> Self {
        let images = parse_images(row.images.as_deref()).unwrap_or_else(|e| {
            warn!(
                property_id = row.id,
                slug = %row.slug,
                "Malformed image data, serving an empty gallery: {e}"
            );
            vec![]
        });

        let kind = if row.is_land() {
            PropertyKind::Land {
                land_details: LandDetails {
                    zoning_status: row.zoning_status,
                    price_per_square_meter: row.price_per_square_meter,
                    block_number: row.block_number,
                    parcel_number: row.parcel_number,
                    sheet_number: row.sheet_number,
                    floor_area_ratio: row.floor_area_ratio,
                    building_height: row.building_height,
                    credit_eligibility: row.credit_eligibility,
                },
            }
        } else {
            PropertyKind::Building {}
        };

        Property {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            price: row.price,
            listing_type: row.listing_type,
            location: Location {
                city: row.city,
                district: row.district,
                neighborhood: row.neighborhood,
                address: row.address,
                coordinates: Coordinates {
                    lat: row.coordinates_lat,
                    lng: row.coordinates_lng,
                },
            },
            specs: Specs {
                net_size: row.net_size,
                gross_size: row.gross_size,
                rooms: row.rooms,
                bathrooms: row.bathrooms,
                age: row.age,
                floor: row.floor,
                total_floors: row.total_floors,
                heating: row.heating,
                furnishing: row.furnishing,
                balcony_count: row.balcony_count,
            },
            category: Category {
                main: row.category_main,
                sub: row.category_sub,
            },
            images,
            agent: Agent {
                id: row.agent_id,
                name: row.agent_name,
                phone: row.agent_phone,
                email: row.agent_email,
                photo: row.agent_photo,
                company: row.agent_company,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
            view_count: row.view_count,
            status: row.status,
            sahibinden_link: row.sahibinden_link,
            property_details: PropertyDetails {
                usage_status: row.usage_status,
                deed_status: row.deed_status,
                from_who: row.from_who,
                is_settlement: row.is_settlement.unwrap_or_default(),
                credit_eligible: row.credit_eligible.unwrap_or_default(),
                exchange_available: row.exchange_available.unwrap_or_default(),
                in_site: row.in_site.unwrap_or_default(),
                monthly_fee: row.monthly_fee,
                has_debt: row.has_debt.unwrap_or_default(),
                debt_amount: row.debt_amount,
                is_rent_guaranteed: row.is_rent_guaranteed.unwrap_or_default(),
                rent_guarantee_amount: row.rent_guarantee_amount,
                is_new_building: row.is_new_building.unwrap_or_default(),
                is_suitable_for_office: row.is_suitable_for_office.unwrap_or_default(),
                has_business_license: row.has_business_license.unwrap_or_default(),
            },
            interior_features: InteriorFeatures {
                kitchen_type: row.kitchen_type,
                has_built_in_kitchen: row.has_built_in_kitchen.unwrap_or_default(),
                has_built_in_wardrobe: row.has_built_in_wardrobe.unwrap_or_default(),
                has_laminate: row.has_laminate.unwrap_or_default(),
                has_parquet: row.has_parquet.unwrap_or_default(),
                has_ceramic: row.has_ceramic.unwrap_or_default(),
                has_marble: row.has_marble.unwrap_or_default(),
                has_wallpaper: row.has_wallpaper.unwrap_or_default(),
                has_painted_walls: row.has_painted_walls.unwrap_or_default(),
                has_spot_lighting: row.has_spot_lighting.unwrap_or_default(),
                has_hilton_bathroom: row.has_hilton_bathroom.unwrap_or_default(),
                has_jacuzzi: row.has_jacuzzi.unwrap_or_default(),
                has_shower_cabin: row.has_shower_cabin.unwrap_or_default(),
                has_american_door: row.has_american_door.unwrap_or_default(),
                has_steel_door: row.has_steel_door.unwrap_or_default(),
                has_intercom: row.has_intercom.unwrap_or_default(),
            },
            exterior_features: ExteriorFeatures {
                has_balcony: row.has_balcony.unwrap_or_default(),
                has_terrace: row.has_terrace.unwrap_or_default(),
                has_garden: row.has_garden.unwrap_or_default(),
                has_garden_use: row.has_garden_use.unwrap_or_default(),
                has_sea_view: row.has_sea_view.unwrap_or_default(),
                has_city_view: row.has_city_view.unwrap_or_default(),
                has_nature_view: row.has_nature_view.unwrap_or_default(),
                has_pool_view: row.has_pool_view.unwrap_or_default(),
                facade: row.facade,
            },
            building_features: BuildingFeatures {
                has_elevator: row.has_elevator.unwrap_or_default(),
                has_car_park: row.has_car_park.unwrap_or_default(),
                has_closed_car_park: row.has_closed_car_park.unwrap_or_default(),
                has_open_car_park: row.has_open_car_park.unwrap_or_default(),
                has_security: row.has_security.unwrap_or_default(),
                has_24_hour_security: row.has_24_hour_security.unwrap_or_default(),
                has_camera_system: row.has_camera_system.unwrap_or_default(),
                has_concierge: row.has_concierge.unwrap_or_default(),
                has_pool: row.has_pool.unwrap_or_default(),
                has_gym: row.has_gym.unwrap_or_default(),
                has_sauna: row.has_sauna.unwrap_or_default(),
                has_turkish_bath: row.has_turkish_bath.unwrap_or_default(),
                has_playground: row.has_playground.unwrap_or_default(),
                has_basketball_court: row.has_basketball_court.unwrap_or_default(),
                has_tennis_court: row.has_tennis_court.unwrap_or_default(),
                has_generator: row.has_generator.unwrap_or_default(),
                has_fire_escape: row.has_fire_escape.unwrap_or_default(),
                has_fire_detector: row.has_fire_detector.unwrap_or_default(),
                has_water_booster: row.has_water_booster.unwrap_or_default(),
                has_satellite_system: row.has_satellite_system.unwrap_or_default(),
                has_wifi: row.has_wifi.unwrap_or_default(),
            },
            kind,
        }
    }
}

impl Facets {
    /// Distinct cities of `properties` in first-seen order, plus the distinct
    /// districts within `selected_city` when one is given.
    pub fn collect(properties: &[Property], selected_city: Option<&str>) -> Self {
        let mut cities: Vec<String> = vec![];
        for property in properties {
            if !property.location.city.is_empty() && !cities.contains(&property.location.city) {
                cities.push(property.location.city.clone());
            }
        }

        let mut districts: Vec<String> = vec![];
        if let Some(selected_city) = selected_city {
            for property in properties
                .iter()
                .filter(|p| p.location.city == selected_city)
            {
                if let Some(district) = property.location.district.as_deref()
                    && !district.is_empty()
                    && !districts.iter().any(|d| d == district)
                {
                    districts.push(district.to_string());
                }
            }
        }

        Self { cities, districts }
    }
}

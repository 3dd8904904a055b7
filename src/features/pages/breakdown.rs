use crate::features::{
    pages::{
        feature_table::FeatureTable,
        format::{format_area, format_price},
    },
    properties::schemas::{LandDetails, Property, PropertyKind},
};

/// The feature panels of a detail page. Land and building listings get
/// disjoint panel sets; panels with no visible rows are dropped.
pub fn panels(property: &Property) -> Vec<FeatureTable> {
    let panels = match &property.kind {
        PropertyKind::Land { land_details } => land_panels(property, land_details),
        PropertyKind::Building {} => building_panels(property),
    };

    panels.into_iter().filter(|p| !p.is_empty()).collect()
}

fn land_panels(property: &Property, land: &LandDetails) -> Vec<FeatureTable> {
    let sub = &property.category.sub;
    let details = &property.property_details;

    vec![
        FeatureTable::new(format!("{sub} Özellikleri"))
            .value("İmar Durumu", land.zoning_status.as_deref())
            .value_with("m²", property.specs.net_size, |v| format_area(*v))
            .value_with("m² Fiyatı", land.price_per_square_meter, |v| {
                format_price(*v)
            })
            .value("Ada No", land.block_number.as_deref())
            .value("Parsel No", land.parcel_number.as_deref())
            .value("Pafta No", land.sheet_number.as_deref())
            .value("Kaks (Emsal)", land.floor_area_ratio.as_deref())
            .value("Gabari", land.building_height.as_deref())
            .value("Krediye Uygunluk", land.credit_eligibility.as_deref()),
        FeatureTable::new(format!("{sub} Detayları"))
            .value("Tapu Durumu", details.deed_status.as_deref())
            .value("Kimden", details.from_who.as_deref())
            .flag("Takas", details.exchange_available),
    ]
}

fn building_panels(property: &Property) -> Vec<FeatureTable> {
    let specs = &property.specs;
    let interior = &property.interior_features;
    let exterior = &property.exterior_features;
    let building = &property.building_features;
    let details = &property.property_details;

    vec![
        FeatureTable::new("Temel Özellikler")
            .value("Oda Sayısı", specs.rooms.as_deref())
            .value("Banyo Sayısı", specs.bathrooms)
            .value_with("Net Alan", specs.net_size, |v| format_area(*v))
            .value_with("Brüt Alan", specs.gross_size, |v| format_area(*v))
            .value_with("Bina Yaşı", specs.age, |v| format!("{v} yıl"))
            .value("Kat", specs.floor.as_deref())
            .value("Toplam Kat", specs.total_floors)
            .value("Isıtma", specs.heating.as_deref())
            .value("Eşyalı Durumu", specs.furnishing.as_deref())
            .value("Balkon Sayısı", specs.balcony_count),
        FeatureTable::new("İç Özellikler")
            .value("Mutfak Tipi", interior.kitchen_type.as_deref())
            .flag("Ankastre Mutfak", interior.has_built_in_kitchen)
            .flag("Gömme Dolap", interior.has_built_in_wardrobe)
            .flag("Laminat", interior.has_laminate)
            .flag("Parke", interior.has_parquet)
            .flag("Seramik", interior.has_ceramic)
            .flag("Mermer", interior.has_marble)
            .flag("Duvar Kağıdı", interior.has_wallpaper)
            .flag("Boyalı Duvarlar", interior.has_painted_walls)
            .flag("Spot Aydınlatma", interior.has_spot_lighting)
            .flag("Hilton Banyo", interior.has_hilton_bathroom)
            .flag("Jakuzi", interior.has_jacuzzi)
            .flag("Duşakabin", interior.has_shower_cabin)
            .flag("Amerikan Kapı", interior.has_american_door)
            .flag("Çelik Kapı", interior.has_steel_door)
            .flag("Görüntülü Diafon", interior.has_intercom),
        FeatureTable::new("Dış Özellikler")
            .value("Cephe", exterior.facade.as_deref())
            .flag("Balkon", exterior.has_balcony)
            .flag("Teras", exterior.has_terrace)
            .flag("Bahçe", exterior.has_garden)
            .flag("Bahçe Kullanımı", exterior.has_garden_use)
            .flag("Deniz Manzarası", exterior.has_sea_view)
            .flag("Şehir Manzarası", exterior.has_city_view)
            .flag("Doğa Manzarası", exterior.has_nature_view)
            .flag("Havuz Manzarası", exterior.has_pool_view),
        FeatureTable::new("Bina Özellikleri")
            .flag("Asansör", building.has_elevator)
            .flag("Otopark", building.has_car_park)
            .flag("Kapalı Otopark", building.has_closed_car_park)
            .flag("Açık Otopark", building.has_open_car_park)
            .flag("Güvenlik", building.has_security)
            .flag("24 Saat Güvenlik", building.has_24_hour_security)
            .flag("Kamera Sistemi", building.has_camera_system)
            .flag("Kapıcı", building.has_concierge)
            .flag("Havuz", building.has_pool)
            .flag("Spor Salonu", building.has_gym)
            .flag("Sauna", building.has_sauna)
            .flag("Türk Hamamı", building.has_turkish_bath)
            .flag("Çocuk Oyun Alanı", building.has_playground)
            .flag("Basketbol Sahası", building.has_basketball_court)
            .flag("Tenis Kortu", building.has_tennis_court)
            .flag("Jeneratör", building.has_generator)
            .flag("Yangın Merdiveni", building.has_fire_escape)
            .flag("Yangın Algılama", building.has_fire_detector)
            .flag("Su Deposu", building.has_water_booster)
            .flag("Uydu Sistemi", building.has_satellite_system)
            .flag("Kablosuz İnternet", building.has_wifi),
        FeatureTable::new("Emlak Detayları")
            .value("Kullanım Durumu", details.usage_status.as_deref())
            .value("Tapu Durumu", details.deed_status.as_deref())
            .value("Kimden", details.from_who.as_deref())
            .value_with("Aylık Aidat", details.monthly_fee, |v| format_price(*v))
            .value_with("Borç Miktarı", details.debt_amount, |v| format_price(*v))
            .value_with("Kira Garanti Miktarı", details.rent_guarantee_amount, |v| {
                format_price(*v)
            })
            .flag("İskanlı", details.is_settlement)
            .flag("Krediye Uygun", details.credit_eligible)
            .flag("Takas Yapılır", details.exchange_available)
            .flag("Site İçerisinde", details.in_site)
            .flag("Borç Var", details.has_debt)
            .flag("Kira Garantili", details.is_rent_guaranteed)
            .flag("Yeni Bina", details.is_new_building)
            .flag("Ofis Kullanımına Uygun", details.is_suitable_for_office)
            .flag("İş Yeri Ruhsatlı", details.has_business_license),
    ]
}

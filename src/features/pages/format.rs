use crate::features::properties::schemas::Location;

/// Groups digits in threes with `.` the way tr-TR does.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_price(price: i64) -> String {
    format!("{} ₺", group_thousands(price))
}

/// Whole areas print without decimals; fractions use a decimal comma.
pub fn format_area(size: f64) -> String {
    let rounded = (size * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{} m²", group_thousands(rounded as i64))
    } else {
        let text = format!("{rounded:.2}");
        let text = text.trim_end_matches('0');
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let whole: i64 = whole.parse().unwrap_or_default();
        format!("{},{} m²", group_thousands(whole), fraction)
    }
}

/// "Neighborhood, District, City" with empty parts left out.
pub fn format_location(location: &Location) -> String {
    [
        location.neighborhood.as_deref(),
        location.district.as_deref(),
        Some(location.city.as_str()),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_turkish_grouping() {
        assert_eq!(format_price(1_250_000), "1.250.000 ₺");
        assert_eq!(format_price(950), "950 ₺");
        assert_eq!(format_price(1_000), "1.000 ₺");
        assert_eq!(format_price(0), "0 ₺");
    }

    #[test]
    fn areas_drop_trailing_zero_decimals() {
        assert_eq!(format_area(120.0), "120 m²");
        assert_eq!(format_area(1450.5), "1.450,5 m²");
        assert_eq!(format_area(85.25), "85,25 m²");
    }

    #[test]
    fn location_skips_missing_parts() {
        let location = Location {
            city: "İzmir".to_string(),
            district: Some("Karşıyaka".to_string()),
            neighborhood: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(format_location(&location), "Karşıyaka, İzmir");
    }
}

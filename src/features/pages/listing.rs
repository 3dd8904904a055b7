use url::form_urlencoded;

use crate::features::{
    pages::{
        format::{format_area, format_location},
        html::{html_escape, price_label, wrap_page},
    },
    properties::schemas::{ListingType, Property, SearchParams, SearchResponse, Sort},
};

const SORT_OPTIONS: [(Sort, &str); 4] = [
    (Sort::Newest, "En Yeni"),
    (Sort::PriceAsc, "Fiyat (Düşük-Yüksek)"),
    (Sort::PriceDesc, "Fiyat (Yüksek-Düşük)"),
    (Sort::SizeDesc, "Büyükten Küçüğe"),
];

pub fn render_listing_page(
    listing_type: ListingType,
    params: &SearchParams,
    response: &SearchResponse,
) -> String {
    let title = match listing_type {
        ListingType::Sale => "Satılık İlanlar",
        ListingType::Rent => "Kiralık İlanlar",
    };

    let cards: String = response
        .properties
        .iter()
        .map(|property| render_card(property, listing_type))
        .collect();
    let cards = if cards.is_empty() {
        r#"<p class="error">Aramanıza uygun ilan bulunamadı.</p>"#.to_string()
    } else {
        format!(r#"<div class="grid">{cards}</div>"#)
    };

    let content = format!(
        r#"<div class="container">
<h1>{title}</h1>
{filters}
<p>{total} ilan bulundu</p>
{cards}
{pager}
</div>"#,
        filters = render_filters(listing_type, params, response),
        total = response.pagination.total_results,
        pager = render_pager(listing_type, params, response),
    );

    wrap_page(title, &content)
}

fn render_card(property: &Property, listing_type: ListingType) -> String {
    let image = property
        .images
        .first()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" loading="lazy">"#,
                html_escape(src),
                html_escape(&property.title)
            )
        })
        .unwrap_or_default();

    let mut facts = Vec::new();
    if let Some(rooms) = property.specs.rooms.as_deref().filter(|r| !r.trim().is_empty()) {
        facts.push(html_escape(rooms));
    }
    if let Some(size) = property.specs.net_size.filter(|s| *s > 0.0) {
        facts.push(format_area(size));
    }

    format!(
        r#"<a class="card listing" href="/{segment}/{slug}">
{image}
<h3>{title}</h3>
<p>{location}</p>
<p>{facts}</p>
<div class="price">{price}</div>
</a>"#,
        segment = listing_type.path_segment(),
        slug = html_escape(&property.slug),
        title = html_escape(&property.title),
        location = html_escape(&format_location(&property.location)),
        facts = facts.join(" · "),
        price = html_escape(&price_label(property.price, listing_type)),
    )
}

fn render_options(values: &[String], selected: Option<&str>, empty_label: &str) -> String {
    let mut options = format!(r#"<option value="">{}</option>"#, html_escape(empty_label));
    for value in values {
        let marker = if Some(value.as_str()) == selected {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{v}"{marker}>{v}</option>"#,
            v = html_escape(value)
        ));
    }
    options
}

fn render_filters(
    listing_type: ListingType,
    params: &SearchParams,
    response: &SearchResponse,
) -> String {
    let current_sort = params.sort.unwrap_or_default();
    let sort_options: String = SORT_OPTIONS
        .iter()
        .map(|(sort, label)| {
            let marker = if *sort == current_sort { " selected" } else { "" };
            format!(r#"<option value="{sort}"{marker}>{label}</option>"#)
        })
        .collect();

    let number = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_default();

    format!(
        r#"<form class="card filters" method="get" action="/{segment}">
<input type="search" name="search" value="{search}" placeholder="İlan no, konut tipi veya lokasyon ara...">
<select name="city">{cities}</select>
<select name="district">{districts}</select>
<input type="number" name="minPrice" value="{min_price}" placeholder="En az fiyat" min="0">
<input type="number" name="maxPrice" value="{max_price}" placeholder="En çok fiyat" min="0">
<input type="text" name="rooms" value="{rooms}" placeholder="Oda sayısı">
<label><input type="checkbox" name="hasElevator" value="true"{elevator}> Asansör</label>
<label><input type="checkbox" name="hasParking" value="true"{parking}> Otopark</label>
<select name="sort">{sort_options}</select>
<button class="button call" type="submit">Ara</button>
</form>"#,
        segment = listing_type.path_segment(),
        search = html_escape(params.search.as_deref().unwrap_or_default()),
        cities = render_options(&response.facets.cities, params.city.as_deref(), "Tüm Şehirler"),
        districts = render_options(
            &response.facets.districts,
            params.district.as_deref(),
            "Tüm İlçeler"
        ),
        min_price = number(params.min_price),
        max_price = number(params.max_price),
        rooms = html_escape(params.rooms.as_deref().unwrap_or_default()),
        elevator = if params.has_elevator { " checked" } else { "" },
        parking = if params.has_parking { " checked" } else { "" },
    )
}

/// Query string of the current filters pointed at another page.
fn page_query(params: &SearchParams, page: i64) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let text_filters = [
        ("search", params.search.as_deref()),
        ("categoryMain", params.category_main.as_deref()),
        ("categorySub", params.category_sub.as_deref()),
        ("city", params.city.as_deref()),
        ("district", params.district.as_deref()),
        ("rooms", params.rooms.as_deref()),
        ("kitchenType", params.kitchen_type.as_deref()),
        ("heatingType", params.heating_type.as_deref()),
        ("furnishing", params.furnishing.as_deref()),
    ];
    for (key, value) in text_filters {
        if let Some(value) = value {
            query.append_pair(key, value);
        }
    }

    let number_filters = [
        ("minPrice", params.min_price.map(|v| v.to_string())),
        ("maxPrice", params.max_price.map(|v| v.to_string())),
        ("minSize", params.min_size.map(|v| v.to_string())),
        ("maxSize", params.max_size.map(|v| v.to_string())),
        ("limit", params.limit.map(|v| v.to_string())),
        ("sort", params.sort.map(|v| v.to_string())),
    ];
    for (key, value) in number_filters {
        if let Some(value) = value {
            query.append_pair(key, &value);
        }
    }

    let flags = [
        ("hasParking", params.has_parking),
        ("hasElevator", params.has_elevator),
        ("isFurnished", params.is_furnished),
        ("hasBalcony", params.has_balcony),
        ("inSite", params.in_site),
        ("creditEligible", params.credit_eligible),
        ("exchangeAvailable", params.exchange_available),
    ];
    for (key, on) in flags {
        if on {
            query.append_pair(key, "true");
        }
    }

    query.append_pair("page", &page.to_string());
    query.finish()
}

fn render_pager(
    listing_type: ListingType,
    params: &SearchParams,
    response: &SearchResponse,
) -> String {
    let pagination = &response.pagination;
    if pagination.total_pages <= 1 {
        return String::new();
    }

    let segment = listing_type.path_segment();
    let prev = if pagination.has_prev_page {
        format!(
            r#"<a href="/{segment}?{}">Önceki</a>"#,
            html_escape(&page_query(params, pagination.current_page - 1))
        )
    } else {
        String::new()
    };
    let next = if pagination.has_next_page {
        format!(
            r#"<a href="/{segment}?{}">Sonraki</a>"#,
            html_escape(&page_query(params, pagination.current_page + 1))
        )
    } else {
        String::new()
    };

    format!(
        r#"<nav class="pager">{prev}<span>{} / {}</span>{next}</nav>"#,
        pagination.current_page, pagination.total_pages
    )
}

#[cfg(test)]
mod tests {
    use shared::schemas::PaginationMeta;

    use super::*;
    use crate::features::properties::schemas::Facets;

    fn response(properties: Vec<Property>, page: i64, total: i64) -> SearchResponse {
        SearchResponse {
            properties,
            pagination: PaginationMeta::new(page, 12, total),
            facets: Facets {
                cities: vec!["İzmir".to_string(), "Ankara".to_string()],
                districts: Vec::new(),
            },
        }
    }

    fn property() -> Property {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Kiralık 2+1",
            "slug": "kiralik-2-1",
            "description": null,
            "price": 18000,
            "type": "rent",
            "location": {"city": "İzmir", "district": "Bornova"},
            "specs": {"rooms": "2+1", "netSize": 90.0},
            "category": {"main": "Daire", "sub": "Kiralık Daire"},
            "images": [],
            "agent": {"name": "Ayşe", "phone": "", "email": ""},
            "createdAt": "2025-06-01T00:00:00Z",
            "updatedAt": "2025-06-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn cards_link_to_detail_pages() {
        let params = SearchParams {
            listing_type: Some(ListingType::Rent),
            ..Default::default()
        };
        let html = render_listing_page(ListingType::Rent, &params, &response(vec![property()], 1, 1));

        assert!(html.contains(r#"href="/kiralik/kiralik-2-1""#));
        assert!(html.contains("18.000 ₺ aylık"));
        assert!(html.contains("2+1 · 90 m²"));
        assert!(html.contains("1 ilan bulundu"));
        assert!(!html.contains(r#"class="pager""#));
    }

    #[test]
    fn selected_city_is_marked() {
        let params = SearchParams {
            city: Some("Ankara".to_string()),
            ..Default::default()
        };
        let html = render_listing_page(ListingType::Sale, &params, &response(Vec::new(), 1, 0));

        assert!(html.contains(r#"<option value="Ankara" selected>Ankara</option>"#));
        assert!(html.contains(r#"<option value="İzmir">İzmir</option>"#));
        assert!(html.contains("Aramanıza uygun ilan bulunamadı."));
    }

    #[test]
    fn pager_keeps_filters() {
        let params = SearchParams {
            city: Some("İzmir".to_string()),
            has_elevator: true,
            page: Some(2),
            ..Default::default()
        };
        let html = render_listing_page(ListingType::Sale, &params, &response(Vec::new(), 2, 40));

        assert!(html.contains("2 / 4"));
        assert!(html.contains("hasElevator=true&amp;page=1"));
        assert!(html.contains("hasElevator=true&amp;page=3"));
        assert!(html.contains("city=%C4%B0zmir"));
    }
}

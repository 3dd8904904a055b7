use std::time::Duration;

use url::form_urlencoded;

use crate::features::{
    pages::{
        breakdown,
        detail_view::ViewError,
        feature_table::{FeatureTable, Row},
        format::{format_location, format_price},
        gallery::{GRID_THUMBNAILS, Gallery},
    },
    properties::schemas::{ListingType, Property},
};

const STYLE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; line-height: 1.5; }
a { color: inherit; }
.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.hero { position: relative; min-height: 18rem; background: #1f2937 center/cover no-repeat; color: #fff; display: flex; align-items: flex-end; }
.hero .cover { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.hero .shade { position: relative; width: 100%; padding: 2rem 0; background: linear-gradient(transparent, rgba(0,0,0,.7)); }
.hero .badge { display: inline-block; background: #f97316; border-radius: 9999px; padding: .25rem .75rem; font-size: .875rem; }
.gallery { display: grid; grid-template-columns: 1fr 1fr; gap: .25rem; margin: 1rem 0; }
.gallery .main img { width: 100%; aspect-ratio: 4/3; object-fit: cover; border-radius: .5rem; }
.gallery .thumbs { display: grid; grid-template-columns: repeat(3, 1fr); gap: .5rem; }
.gallery .thumb { position: relative; }
.gallery .thumb img { width: 100%; aspect-ratio: 3/2; object-fit: cover; border-radius: .5rem; }
.gallery .more { position: absolute; inset: 0; background: rgba(0,0,0,.5); color: #fff; display: flex; align-items: center; justify-content: center; font-weight: 600; }
.layout { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; padding: 3rem 0; }
.card { background: #fff; border: 1px solid #f3f4f6; border-radius: .75rem; padding: 1.5rem; margin-bottom: 1.5rem; }
.panels { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.row { display: flex; justify-content: space-between; padding: .75rem 0; border-bottom: 1px solid #f3f4f6; font-size: .875rem; }
.row .check { color: #22c55e; }
.price { font-size: 1.5rem; font-weight: 700; }
.button { display: block; text-align: center; padding: .75rem 1.5rem; border-radius: .75rem; margin-top: .75rem; text-decoration: none; font-weight: 500; }
.call { background: #f97316; color: #fff; }
.whatsapp { background: #22c55e; color: #fff; }
.mail { background: #f3f4f6; }
.listings { background: #3b82f6; color: #fff; }
.sahibinden { background: #fff200; color: #000; font-weight: 600; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.listing img { width: 100%; aspect-ratio: 4/3; object-fit: cover; border-radius: .5rem; }
.filters { display: flex; flex-wrap: wrap; gap: .75rem; align-items: end; }
.pager { display: flex; gap: 1rem; justify-content: center; padding: 2rem 0; }
.error { text-align: center; padding: 6rem 0; }
"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub fn wrap_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="tr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE_CSS}</style>
</head>
<body>
<main>
{content}
</main>
</body>
</html>"#,
        title = html_escape(title),
    )
}

/// Price as shown on pages, with the monthly marker for rentals.
pub fn price_label(price: i64, listing_type: ListingType) -> String {
    match listing_type {
        ListingType::Sale => format_price(price),
        ListingType::Rent => format!("{} aylık", format_price(price)),
    }
}

pub fn render_detail_page(
    property: &Property,
    listing_type: ListingType,
    gallery: &Gallery,
    auto_advance: Duration,
    page_url: &str,
) -> String {
    let content = format!(
        r#"{hero}
<div class="container">
{gallery}
<div class="layout">
<div>
{header}
{description}
<div class="panels">
{panels}
</div>
</div>
<aside>
{agent}
{sahibinden}
<div class="card" style="text-align:center"><div>İlan No</div><strong>{id}</strong></div>
</aside>
</div>
</div>"#,
        hero = render_hero(property, listing_type, gallery.images().first()),
        gallery = render_gallery(gallery, auto_advance),
        header = render_header(property, listing_type),
        description = render_description(property),
        panels = render_panels(&breakdown::panels(property)),
        agent = render_agent_card(property, listing_type, page_url),
        sahibinden = render_sahibinden_link(property),
        id = property.id,
    );

    wrap_page(&property.title, &content)
}

fn render_hero(property: &Property, listing_type: ListingType, cover: Option<&String>) -> String {
    let cover = cover
        .map(|url| format!(r#"<img class="cover" src="{}" alt="">"#, html_escape(url)))
        .unwrap_or_default();
    let badge = match listing_type {
        ListingType::Sale => "Satılık",
        ListingType::Rent => "Kiralık",
    };

    format!(
        r#"<section class="hero">
{cover}
<div class="shade"><div class="container">
<span class="badge">{badge} {category}</span>
<h1>{title}</h1>
<p>{location}</p>
</div></div>
</section>"#,
        category = html_escape(&property.category.sub),
        title = html_escape(&property.title),
        location = html_escape(&format_location(&property.location)),
    )
}

/// Main image plus up to six thumbnails. The last thumbnail carries a
/// "+N" overlay for images that did not fit. Nothing for an empty gallery.
/// Galleries that rotate carry their period in `data-auto-advance-ms`.
pub fn render_gallery(gallery: &Gallery, auto_advance: Duration) -> String {
    let Some(main) = gallery.images().first() else {
        return String::new();
    };

    let overflow = gallery.overflow_count();
    let thumbs: String = gallery
        .images()
        .iter()
        .enumerate()
        .skip(1)
        .take(GRID_THUMBNAILS)
        .map(|(index, image)| {
            let more = if index == GRID_THUMBNAILS && overflow > 0 {
                format!(r#"<div class="more">+{overflow}</div>"#)
            } else {
                String::new()
            };
            format!(
                r#"<div class="thumb" data-index="{index}"><img src="{src}" alt="Emlak görseli {number}" loading="lazy">{more}</div>"#,
                src = html_escape(image),
                number = index + 1,
            )
        })
        .collect();

    let rotation = if gallery.len() > 1 && !auto_advance.is_zero() {
        format!(r#" data-auto-advance-ms="{}""#, auto_advance.as_millis())
    } else {
        String::new()
    };

    format!(
        r#"<div class="gallery" data-count="{count}"{rotation}>
<div class="main" data-index="0"><img src="{src}" alt="Ana emlak görseli"></div>
<div class="thumbs">{thumbs}</div>
</div>"#,
        count = gallery.len(),
        src = html_escape(main),
    )
}

fn render_header(property: &Property, listing_type: ListingType) -> String {
    format!(
        r#"<div class="card">
<h1>{title}</h1>
<p>{location}</p>
<div class="price">{price}</div>
</div>"#,
        title = html_escape(&property.title),
        location = html_escape(&format_location(&property.location)),
        price = html_escape(&price_label(property.price, listing_type)),
    )
}

fn render_description(property: &Property) -> String {
    match property.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => format!(
            r#"<div class="card"><h2>Açıklama</h2><p>{}</p></div>"#,
            html_escape(description)
        ),
        _ => String::new(),
    }
}

pub fn render_panels(panels: &[FeatureTable]) -> String {
    panels
        .iter()
        .map(|panel| {
            let rows: String = panel
                .rows()
                .into_iter()
                .map(|row| match row {
                    Row::Value { label, value } => format!(
                        r#"<div class="row"><span>{}</span><strong>{}</strong></div>"#,
                        html_escape(label),
                        html_escape(value)
                    ),
                    Row::Flag { label } => format!(
                        r#"<div class="row"><span>{}</span><span class="check">✓</span></div>"#,
                        html_escape(label)
                    ),
                })
                .collect();

            format!(
                r#"<div class="card"><h3>{}</h3>{rows}</div>"#,
                html_escape(panel.title())
            )
        })
        .collect()
}

/// `https://wa.me/<digits>?text=<message>` for the listing's agent.
pub fn whatsapp_link(property: &Property, listing_type: ListingType, page_url: &str) -> String {
    let phone: String = property
        .agent
        .phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let monthly = match listing_type {
        ListingType::Sale => "",
        ListingType::Rent => "/ay",
    };
    let message = format!(
        "Merhaba {agent},\n\n🏠 İlan: {title}\n📍 Konum: {location}\n💰 Fiyat: {price}{monthly}\n🆔 İlan No: {id}\n\n🔗 İlan Linki: {page_url}\n\nBu ilan hakkında detaylı bilgi almak istiyorum. Müsait olduğunuzda görüşebilir miyiz?\n\nTeşekkürler.",
        agent = property.agent.name,
        title = property.title,
        location = format_location(&property.location),
        price = format_price(property.price),
        id = property.id,
    );
    let text: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();

    format!("https://wa.me/{phone}?text={text}")
}

/// `/agent/<name>` with the name lowercased and whitespace runs dashed.
pub fn agent_listings_path(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("/agent/{slug}")
}

fn render_agent_card(property: &Property, listing_type: ListingType, page_url: &str) -> String {
    let agent = &property.agent;
    let photo = agent
        .photo
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(|p| {
            format!(
                r#"<img src="{}" alt="{}" width="96" height="96">"#,
                html_escape(p),
                html_escape(&agent.name)
            )
        })
        .unwrap_or_default();
    let company = agent
        .company
        .as_deref()
        .map(|c| format!("<p>{}</p>", html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<div class="card" style="text-align:center">
{photo}
<h3>{name}</h3>
{company}
<a class="button call" href="tel:{phone}">Danışmanı Ara</a>
<a class="button whatsapp" href="{whatsapp}" target="_blank" rel="noopener noreferrer">WhatsApp</a>
<a class="button mail" href="mailto:{email}">E-posta Gönder</a>
<a class="button listings" href="{listings}">Tüm İlanlarını Gör</a>
</div>"#,
        name = html_escape(&agent.name),
        phone = html_escape(&agent.phone),
        whatsapp = html_escape(&whatsapp_link(property, listing_type, page_url)),
        email = html_escape(&agent.email),
        listings = html_escape(&agent_listings_path(&agent.name)),
    )
}

fn render_sahibinden_link(property: &Property) -> String {
    match property.sahibinden_link.as_deref() {
        Some(link) if !link.trim().is_empty() => format!(
            r#"<div class="card"><a class="button sahibinden" href="{}" target="_blank" rel="noopener noreferrer">sahibinden.com'da görüntüle</a></div>"#,
            html_escape(link)
        ),
        _ => String::new(),
    }
}

pub fn render_error_page(error: ViewError, listing_type: ListingType) -> String {
    let (heading, back) = match listing_type {
        ListingType::Sale => ("Satılık ilanlara dön", "/satilik"),
        ListingType::Rent => ("Kiralık ilanlara dön", "/kiralik"),
    };

    let content = format!(
        r#"<div class="container error">
<h1>{message}</h1>
<a class="button call" href="{back}">{heading}</a>
</div>"#,
        message = html_escape(error.message()),
    );

    wrap_page(error.message(), &content)
}

pub fn render_loading_page() -> String {
    wrap_page(
        "Yükleniyor",
        r#"<div class="container error"><p>Yükleniyor...</p></div>"#,
    )
}

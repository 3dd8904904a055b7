use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::features::properties::{
    models::PropertyRecord,
    schemas::{SearchParams, Sort},
};

/// A page of search results before shaping.
#[derive(Debug, Default)]
pub struct SearchPage {
    pub records: Vec<PropertyRecord>,
    pub total: i64,
}

#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Exact, case-sensitive match on the unique `slug` column.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PropertyRecord>, sqlx::Error>;

    async fn increment_view_count(&self, id: i64) -> Result<(), sqlx::Error>;

    async fn search(
        &self,
        params: &SearchParams,
        offset: i64,
        limit: i64,
    ) -> Result<SearchPage, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgPropertyStore {
    pool: PgPool,
}

impl PgPropertyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyStore for PgPropertyStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PropertyRecord>, sqlx::Error> {
        sqlx::query_as::<_, PropertyRecord>("SELECT * FROM properties WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
    }

    async fn increment_view_count(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE properties SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn search(
        &self,
        params: &SearchParams,
        offset: i64,
        limit: i64,
    ) -> Result<SearchPage, sqlx::Error> {
        let mut listing_qb = QueryBuilder::new("SELECT * FROM properties p WHERE p.status = 'active'");
        let mut count_qb =
            QueryBuilder::new("SELECT COUNT(*) FROM properties p WHERE p.status = 'active'");

        push_filters(&mut listing_qb, params);
        push_filters(&mut count_qb, params);

        match params.sort.unwrap_or_default() {
            Sort::Newest => listing_qb.push(" ORDER BY p.created_at DESC, p.id DESC"),
            Sort::PriceAsc => listing_qb.push(" ORDER BY p.price ASC, p.id DESC"),
            Sort::PriceDesc => listing_qb.push(" ORDER BY p.price DESC, p.id DESC"),
            Sort::SizeDesc => listing_qb.push(" ORDER BY p.net_size DESC NULLS LAST, p.id DESC"),
        };

        listing_qb.push(" OFFSET ").push_bind(offset);
        listing_qb.push(" LIMIT ").push_bind(limit);

        debug!("search sql: {}", listing_qb.sql());

        let total = count_qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let records = listing_qb
            .build_query_as::<PropertyRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(SearchPage { records, total })
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, params: &SearchParams) {
    if let Some(listing_type) = params.listing_type {
        qb.push(" AND p.\"type\" = ")
            .push_bind(listing_type.as_str().to_string());
    }

    if let Some(category_main) = &params.category_main {
        qb.push(" AND p.category_main = ")
            .push_bind(category_main.clone());
    }

    if let Some(category_sub) = &params.category_sub {
        qb.push(" AND p.category_sub = ")
            .push_bind(category_sub.clone());
    }

    if let Some(city) = &params.city {
        qb.push(" AND p.city = ").push_bind(city.clone());
    }

    if let Some(district) = &params.district {
        qb.push(" AND p.district = ").push_bind(district.clone());
    }

    if let Some(min_price) = params.min_price {
        qb.push(" AND p.price >= ").push_bind(min_price);
    }

    if let Some(max_price) = params.max_price {
        qb.push(" AND p.price <= ").push_bind(max_price);
    }

    if let Some(rooms) = &params.rooms {
        qb.push(" AND p.rooms = ").push_bind(rooms.clone());
    }

    if let Some(min_size) = params.min_size {
        qb.push(" AND p.net_size >= ").push_bind(min_size);
    }

    if let Some(max_size) = params.max_size {
        qb.push(" AND p.net_size <= ").push_bind(max_size);
    }

    if let Some(kitchen_type) = &params.kitchen_type {
        qb.push(" AND p.kitchen_type = ")
            .push_bind(kitchen_type.clone());
    }

    if let Some(heating_type) = &params.heating_type {
        qb.push(" AND p.heating = ").push_bind(heating_type.clone());
    }

    if let Some(furnishing) = &params.furnishing {
        qb.push(" AND p.furnishing = ").push_bind(furnishing.clone());
    }

    // Boolean filters
    if params.has_parking {
        qb.push(" AND (p.has_car_park OR p.has_closed_car_park OR p.has_open_car_park)");
    }

    if params.has_elevator {
        qb.push(" AND p.has_elevator");
    }

    if params.is_furnished {
        qb.push(" AND p.furnishing = ").push_bind("Eşyalı");
    }

    if params.has_balcony {
        qb.push(" AND p.has_balcony");
    }

    if params.in_site {
        qb.push(" AND p.in_site");
    }

    if params.credit_eligible {
        qb.push(" AND p.credit_eligible");
    }

    if params.exchange_available {
        qb.push(" AND p.exchange_available");
    }

    if let Some(search) = params.trimmed_search() {
        let pattern = format!("%{}%", escape_like(search));
        qb.push(" AND (p.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.city ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.district ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.neighborhood ILIKE ")
            .push_bind(pattern)
            .push(" OR CAST(p.id AS TEXT) = ")
            .push_bind(search.to_string())
            .push(")");
    }
}

/// Escapes LIKE wildcards so user text only matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::properties::schemas::ListingType;

    #[test]
    fn filters_are_bound_not_interpolated() {
        let params = SearchParams {
            listing_type: Some(ListingType::Rent),
            city: Some("İzmir'; DROP TABLE properties; --".to_string()),
            min_price: Some(1000),
            has_elevator: true,
            search: Some("  deniz  ".to_string()),
            ..Default::default()
        };

        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM properties p WHERE 1=1");
        push_filters(&mut qb, &params);
        let sql = qb.sql();

        assert!(!sql.contains("DROP TABLE"));
        assert!(sql.contains("p.city = $2"));
        assert!(sql.contains("p.price >= $3"));
        assert!(sql.contains("AND p.has_elevator"));
        assert!(sql.contains("p.title ILIKE $4"));
    }

    #[test]
    fn no_filters_leaves_the_base_query_untouched() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1");
        push_filters(&mut qb, &SearchParams::default());
        assert_eq!(qb.sql(), "SELECT 1");
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%_sure\\"), "100\\%\\_sure\\\\");
    }
}

use async_trait::async_trait;
use shared::utilities::errors::{AppError, LOOKUP_FAILED_MESSAGE, PROPERTY_NOT_FOUND_MESSAGE};
use tracing::debug;

use crate::features::properties::{schemas::Property, service::PropertyService};

/// Where the detail view gets its listing from.
#[async_trait]
pub trait PropertySource: Send + Sync {
    async fn fetch_by_slug(&self, slug: &str) -> Result<Property, AppError>;
}

#[async_trait]
impl PropertySource for PropertyService {
    async fn fetch_by_slug(&self, slug: &str) -> Result<Property, AppError> {
        self.get_property_by_slug(slug).await
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewError {
    NotFound,
    Failed,
}

impl ViewError {
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::NotFound => PROPERTY_NOT_FOUND_MESSAGE,
            ViewError::Failed => LOOKUP_FAILED_MESSAGE,
        }
    }
}

impl From<&AppError> for ViewError {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::PropertyNotFound => ViewError::NotFound,
            _ => ViewError::Failed,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ViewState {
    Loading,
    Loaded(Box<Property>),
    Errored(ViewError),
}

/// Identifies one load. Only the newest ticket may settle the view.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ticket {
    generation: u64,
    slug: String,
}

impl Ticket {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug)]
pub struct DetailView {
    generation: u64,
    state: ViewState,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// A new slug always starts over in `Loading`, whatever the view showed.
    pub fn begin(&mut self, slug: &str) -> Ticket {
        self.generation += 1;
        self.state = ViewState::Loading;

        Ticket {
            generation: self.generation,
            slug: slug.to_string(),
        }
    }

    /// Settles the view with a fetch result. Results for superseded tickets
    /// are discarded and `false` is returned.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<Property, AppError>) -> bool {
        if ticket.generation != self.generation {
            debug!("discarding stale result for slug {}", ticket.slug);
            return false;
        }

        self.state = match result {
            Ok(property) => ViewState::Loaded(Box::new(property)),
            Err(e) => ViewState::Errored(ViewError::from(&e)),
        };
        true
    }

    pub async fn load(&mut self, source: &dyn PropertySource, slug: &str) -> &ViewState {
        let ticket = self.begin(slug);
        let result = source.fetch_by_slug(ticket.slug()).await;
        self.resolve(&ticket, result);

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<Property, ViewError>);

    #[async_trait]
    impl PropertySource for FixedSource {
        async fn fetch_by_slug(&self, slug: &str) -> Result<Property, AppError> {
            match &self.0 {
                Ok(property) => Ok(property.clone()),
                Err(ViewError::NotFound) => Err(AppError::PropertyNotFound),
                Err(ViewError::Failed) => Err(AppError::LookupFailed {
                    slug: slug.to_string(),
                }),
            }
        }
    }

    fn property(slug: &str) -> Property {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Bahçeli villa",
            "slug": slug,
            "description": "Geniş bahçe",
            "price": 9500000,
            "type": "sale",
            "location": {"city": "Muğla", "district": "Bodrum"},
            "specs": {},
            "category": {"main": "Villa", "sub": "Satılık Villa"},
            "images": ["/a.jpg"],
            "agent": {"name": "Mehmet", "phone": "0555 111 22 33", "email": "m@example.com"},
            "createdAt": "2025-06-01T00:00:00Z",
            "updatedAt": "2025-06-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn starts_loading() {
        assert_eq!(DetailView::new().state(), &ViewState::Loading);
    }

    #[tokio::test]
    async fn loads_a_property() {
        let mut view = DetailView::new();
        let source = FixedSource(Ok(property("villa")));

        match view.load(&source, "villa").await {
            ViewState::Loaded(p) => assert_eq!(p.slug, "villa"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_and_failure_are_distinguished() {
        let mut view = DetailView::new();

        let state = view.load(&FixedSource(Err(ViewError::NotFound)), "x").await;
        assert_eq!(state, &ViewState::Errored(ViewError::NotFound));

        let state = view.load(&FixedSource(Err(ViewError::Failed)), "x").await;
        assert_eq!(state, &ViewState::Errored(ViewError::Failed));
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut view = DetailView::new();
        let first = view.begin("first");
        let second = view.begin("second");

        assert!(!view.resolve(&first, Ok(property("first"))));
        assert_eq!(view.state(), &ViewState::Loading);

        assert!(view.resolve(&second, Err(AppError::PropertyNotFound)));
        assert_eq!(view.state(), &ViewState::Errored(ViewError::NotFound));
    }

    #[test]
    fn new_slug_resets_a_settled_view() {
        let mut view = DetailView::new();
        let ticket = view.begin("a");
        view.resolve(&ticket, Err(AppError::SearchFailed));
        assert_eq!(view.state(), &ViewState::Errored(ViewError::Failed));

        view.begin("b");
        assert_eq!(view.state(), &ViewState::Loading);
    }

    #[test]
    fn error_messages_are_turkish() {
        assert_eq!(ViewError::NotFound.message(), "Emlak bulunamadı");
        assert_eq!(
            ViewError::Failed.message(),
            "Emlak detayları yüklenirken bir hata oluştu"
        );
    }
}

use axum::{
    Json, extract::rejection::QueryRejection, http::StatusCode, response::IntoResponse,
    response::Response,
};
use serde_json::json;

pub const PROPERTY_NOT_FOUND_MESSAGE: &str = "Emlak bulunamadı";
pub const LOOKUP_FAILED_MESSAGE: &str = "Emlak detayları yüklenirken bir hata oluştu";
pub const SEARCH_FAILED_MESSAGE: &str = "Emlaklar yüklenirken bir hata oluştu";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Environment variable {0} is not set")]
    EnvironmentVariableNotSetError(String),
    #[error("File read error, {0}")]
    FileReadError(String),
    #[error("Database url parsing error")]
    DatabaseParsingError,
    #[error("Database connection error")]
    DatabaseConnectionError,
    #[error("Sqlx error: {0}")]
    SqlxError(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
    #[error("Property not found")]
    PropertyNotFound,
    #[error("Property lookup failed for slug {slug}")]
    LookupFailed { slug: String },
    #[error("Property search failed")]
    SearchFailed,
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Validation error, {0}")]
    ValidationError(String),
    #[error("Validation errors, {0}")]
    ValidatorValidationErrors(#[from] validator::ValidationErrors),
    #[error("Invalid query, {0}")]
    QueryRejection(#[from] QueryRejection),
    #[error("Serde json error")]
    SerdejsonError(#[from] serde_json::Error),
    #[error("IO error, {0}")]
    IoError(#[from] std::io::Error),
    #[error("Internal error, {0}")]
    InternalError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PropertyNotFound => StatusCode::NOT_FOUND,
            Self::ValidationError(_)
            | Self::ValidatorValidationErrors(_)
            | Self::QueryRejection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SerdejsonError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            Self::EnvironmentVariableNotSetError(name) => {
                format!("Environment variable {name} is not set")
            }
            Self::FileReadError(e) => e,
            Self::DatabaseParsingError => "Database url parsing error".to_string(),
            Self::DatabaseConnectionError => "Database connection error".to_string(),
            // Raw driver messages stay in the logs.
            Self::SqlxError(_) | Self::MigrationError(_) => LOOKUP_FAILED_MESSAGE.to_string(),
            Self::PropertyNotFound => PROPERTY_NOT_FOUND_MESSAGE.to_string(),
            Self::LookupFailed { .. } => LOOKUP_FAILED_MESSAGE.to_string(),
            Self::SearchFailed => SEARCH_FAILED_MESSAGE.to_string(),
            Self::Request(e) => e.to_string(),
            Self::ValidationError(e) => e,
            Self::ValidatorValidationErrors(e) => e.to_string(),
            Self::QueryRejection(e) => e.body_text(),
            Self::SerdejsonError(e) => e.to_string(),
            Self::IoError(e) => e.to_string(),
            Self::InternalError(e) => e,
        };

        let body = Json(json!({"error": error_message}));

        (status, body).into_response()
    }
}

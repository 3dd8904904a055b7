use serde::{Deserialize, Serialize};

use crate::utilities::errors::AppError;

#[derive(Deserialize, Serialize, Clone, Copy, Debug)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    pub limit: Option<i64>,
}

fn default_page() -> i64 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: None,
        }
    }
}

impl Pagination {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page < 1 {
            return Err(AppError::ValidationError(
                "Page must be positive".to_string(),
            ));
        }

        if let Some(limit) = self.limit {
            if limit < 0 {
                return Err(AppError::ValidationError("Limit must positive".to_string()));
            } else if limit == 0 {
                return Err(AppError::ValidationError(
                    "Limit must not be zero!".to_string(),
                ));
            }

            if limit > 100 {
                return Err(AppError::ValidationError(
                    "Limit cannot exceed 100".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn limit_or(&self, default_limit: i64) -> i64 {
        self.limit.unwrap_or(default_limit)
    }

    /// Rows to skip for this page. Pages whose offset does not fit in an
    /// `i64` are rejected like any other invalid page.
    pub fn offset(&self, limit: i64) -> Result<i64, AppError> {
        (self.page - 1)
            .checked_mul(limit)
            .ok_or_else(|| AppError::ValidationError("Page is out of range".to_string()))
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_results: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total_results: i64) -> Self {
        let total_pages = if total_results == 0 {
            0
        } else {
            (total_results + limit - 1) / limit
        };

        Self {
            current_page: page,
            total_pages,
            total_results,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
            limit,
        }
    }
}

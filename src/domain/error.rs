//! Domain errors

use thiserror::Error;

/// Failures of a page lookup.
///
/// Both variants are client errors; neither is ever fatal for the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The `page` parameter is not an integer.
    #[error("Invalid page parameter: {0:?}")]
    InvalidParameter(String),

    /// The page number parsed but lies outside `1..=total_pages`.
    #[error("Page {page} not found (total pages: {total_pages})")]
    PageNotFound { page: i64, total_pages: u32 },
}

/// Result type for pagination operations
pub type PaginationResult<T> = Result<T, PaginationError>;

//! Application services

mod pagination;
mod search;

pub use pagination::PaginationService;
pub use search::SearchService;

//! Shared HTTP building blocks

pub mod query_params;
pub mod response;

pub use query_params::QueryParams;
pub use response::{page_response, search_response, ApiResponse};

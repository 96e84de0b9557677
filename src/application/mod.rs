pub mod services;

pub use services::{PaginationService, SearchService};

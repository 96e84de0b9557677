//! Domain layer
//!
//! Hero entity, the catalog repository seam and the pagination errors.

pub mod error;
pub mod hero;

pub use error::{PaginationError, PaginationResult};
pub use hero::{Hero, HeroRepository};

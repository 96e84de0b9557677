//! Catalog storage

mod memory;
mod seed;

pub use memory::{InMemoryHeroRepository, DEFAULT_PAGE_SIZE};
pub use seed::reference_heroes;

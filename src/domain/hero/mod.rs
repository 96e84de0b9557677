//! Hero aggregate
//!
//! Contains the Hero entity and the read-only catalog repository interface.

pub mod model;
pub mod repository;

pub use model::Hero;
pub use repository::HeroRepository;

//! HTTP REST API interfaces
//!
//! - `common`: response envelope and outcome-to-status mapping
//! - `modules`: request handlers, middleware and their DTOs
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};

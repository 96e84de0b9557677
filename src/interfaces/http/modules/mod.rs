pub mod health;
pub mod heroes;
pub mod metrics;
pub mod request_id;
pub mod root;

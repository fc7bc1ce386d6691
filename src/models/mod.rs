pub mod config;
pub mod envelope;
pub mod query;
pub mod schema;

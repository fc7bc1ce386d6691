use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::{
    envelope::{Envelope, Record},
    query::QueryContext,
};

pub mod mock;

/// CRUD surface of a single table. Every call resolves to an envelope; failures
/// are reported through `success`/`code` rather than as errors.
#[async_trait]
pub trait CrudClient {
    async fn select(&self, query: QueryContext) -> Envelope;
    async fn insert(&self, record: Record) -> Envelope;
    async fn update(&self, keys: &[Value], record: Record) -> Envelope;
    async fn delete(&self, keys: &[Value]) -> Envelope;
}

/// Stand-in for network latency.
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

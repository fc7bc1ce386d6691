use db::{mock::MockCrudClient, simulate_latency};
use errors::MockError;
use log::info;
use models::config::MockConfig;
use models::envelope::{Envelope, EnvelopeData, CODE_AUTH_FAILED};
use rand::rngs::StdRng;
use rand::SeedableRng;
use schema::{SchemaRegistry, SchemaSource};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod db;
pub mod errors;
pub mod generator;
pub mod models;
pub mod schema;

const MOCK_USER: &str = "admin";
const MOCK_PASSWORD: &str = "admin";

/// Entry point of the mock API: session-level calls plus one cached CRUD
/// client per table.
pub struct MockSession {
    config: MockConfig,
    schemas: Arc<dyn SchemaSource + Send + Sync>,
    tables: Arc<Mutex<HashMap<String, Arc<MockCrudClient>>>>,
}

impl MockSession {
    pub fn new(config: MockConfig, schemas: Arc<dyn SchemaSource + Send + Sync>) -> Self {
        MockSession {
            config,
            schemas,
            tables: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Builds a session whose schemas are read from `config.schema_dir`.
    pub fn from_config(config: MockConfig) -> Result<Self, MockError> {
        let registry = SchemaRegistry::from_dir(&config.schema_dir)?;
        Ok(Self::new(config, Arc::new(registry)))
    }

    /// CRUD client for `table_name`, created on first use and reused afterwards.
    pub async fn crud(&self, table_name: &str) -> Arc<MockCrudClient> {
        let mut tables = self.tables.lock().await;
        if let Some(client) = tables.get(table_name) {
            return Arc::clone(client);
        }

        info!("creating mock client for table {}", table_name);
        let client = Arc::new(MockCrudClient::new(
            table_name,
            Arc::clone(&self.schemas),
            self.config.latency,
            self.new_rng(),
        ));
        tables.insert(table_name.to_string(), Arc::clone(&client));
        client
    }

    pub async fn login(&self, username: &str, password: &str) -> Envelope {
        simulate_latency(self.config.latency).await;

        if username == MOCK_USER && password == MOCK_PASSWORD {
            Envelope::ok(EnvelopeData::Text(MOCK_USER.to_string()))
        } else {
            Envelope::failure(CODE_AUTH_FAILED, "invalid username or password")
        }
    }

    pub async fn get_current_user(&self) -> Envelope {
        simulate_latency(self.config.latency).await;
        Envelope::ok(EnvelopeData::Text(MOCK_USER.to_string()))
    }

    fn new_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use csv::Writer;
use log::{debug, error};
use rand::rngs::StdRng;
use rand::Rng;
use serde_json::Value;

use crate::{
    errors::MockError,
    generator,
    models::envelope::{Envelope, EnvelopeData, Record, CODE_SCHEMA_NOT_FOUND},
    models::query::QueryContext,
    models::schema::Schema,
    schema::SchemaSource,
};

use super::{simulate_latency, CrudClient};

/// Upper bound (exclusive) of the page used to fake a primary key on insert.
const INSERT_PAGE_RANGE: u64 = 10000;

/// Fake data-access client for one table. Nothing is stored; every call
/// synthesizes fresh rows from the table's schema.
pub struct MockCrudClient {
    table_name: String,
    schemas: Arc<dyn SchemaSource + Send + Sync>,
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl MockCrudClient {
    pub fn new(
        table_name: &str,
        schemas: Arc<dyn SchemaSource + Send + Sync>,
        latency: Duration,
        rng: StdRng,
    ) -> Self {
        Self {
            table_name: table_name.to_string(),
            schemas,
            latency,
            rng: Mutex::new(rng),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Synthesizes one page of rows without the artificial delay.
    pub fn mock_rows(&self, query: &QueryContext) -> Result<Vec<Record>, MockError> {
        let schema = self.load_schema()?;
        Ok(self.mock_rows_with(&schema, query))
    }

    fn load_schema(&self) -> Result<Arc<Schema>, MockError> {
        debug!("begin to mock data for table {}", self.table_name);
        self.schemas.load(&self.table_name).inspect_err(|e| {
            error!("{}", e);
        })
    }

    fn mock_rows_with(&self, schema: &Schema, query: &QueryContext) -> Vec<Record> {
        let now = Local::now().naive_local();
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        generator::synthesize(schema, query, &mut *rng, now)
    }

    /// Writes one synthesized page to a CSV file, header first. Returns the number of rows.
    pub fn export_csv(
        &self,
        query: &QueryContext,
        file_path: impl AsRef<Path>,
    ) -> Result<usize, MockError> {
        let schema = self.load_schema()?;
        let rows = self.mock_rows_with(&schema, query);

        let mut wtr =
            Writer::from_path(file_path).map_err(|e| MockError::Export(e.to_string()))?;
        wtr.write_record(schema.keys())
            .map_err(|e| MockError::Export(e.to_string()))?;

        for row in &rows {
            let csv_row: Vec<String> = schema
                .keys()
                .map(|key| match row.get(key) {
                    None | Some(Value::Null) => String::new(),
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                })
                .collect();
            wtr.write_record(&csv_row)
                .map_err(|e| MockError::Export(e.to_string()))?;
        }

        wtr.flush().map_err(|e| MockError::Export(e.to_string()))?;

        Ok(rows.len())
    }

    fn schema_failure(&self, err: MockError) -> Envelope {
        Envelope::failure(CODE_SCHEMA_NOT_FOUND, err.to_string())
    }
}

#[async_trait]
impl CrudClient for MockCrudClient {
    async fn select(&self, query: QueryContext) -> Envelope {
        simulate_latency(self.latency).await;

        match self.mock_rows(&query) {
            Ok(rows) => Envelope::ok(EnvelopeData::Records(rows)),
            Err(e) => self.schema_failure(e),
        }
    }

    async fn insert(&self, record: Record) -> Envelope {
        simulate_latency(self.latency).await;

        let page = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_range(0..INSERT_PAGE_RANGE)
        };
        // A single synthesized row stands in for the generated primary key.
        let rows = match self.mock_rows(&QueryContext::new(page, 1)) {
            Ok(rows) => rows,
            Err(e) => return self.schema_failure(e),
        };

        let mut merged = rows.into_iter().next().unwrap_or_default();
        for (key, value) in record {
            merged.insert(key, value);
        }
        Envelope::ok(EnvelopeData::Record(merged))
    }

    async fn update(&self, keys: &[Value], _record: Record) -> Envelope {
        simulate_latency(self.latency).await;
        Envelope::ok(EnvelopeData::Count(keys.len()))
    }

    async fn delete(&self, keys: &[Value]) -> Envelope {
        simulate_latency(self.latency).await;
        Envelope::ok(EnvelopeData::Count(keys.len()))
    }
}

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::errors::MockError;
use crate::models::schema::Schema;

/// File name suffix for schema files inside a schema directory.
pub const SCHEMA_FILE_SUFFIX: &str = ".dataSchema.json";

/// Resolves a table name to its column schema.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSource {
    fn load(&self, table_name: &str) -> Result<Arc<Schema>, MockError>;
}

/// In-memory table name to schema map, filled at startup.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, table_name: &str, schema: Schema) -> Result<(), MockError> {
        validate(table_name, &schema)?;
        debug!(
            "registered schema for table {} ({} columns)",
            table_name,
            schema.columns.len()
        );
        self.schemas
            .insert(table_name.to_string(), Arc::new(schema));
        Ok(())
    }

    pub fn with_schema(mut self, table_name: &str, schema: Schema) -> Result<Self, MockError> {
        self.register(table_name, schema)?;
        Ok(self)
    }

    /// Loads every `<table>.dataSchema.json` file in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, MockError> {
        let dir = dir.as_ref();
        let mut registry = Self::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(table_name) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_suffix(SCHEMA_FILE_SUFFIX))
            else {
                continue;
            };
            if table_name.is_empty() || !path.is_file() {
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            let schema: Schema = serde_json::from_str(&contents)?;
            registry.register(table_name, schema)?;
        }

        info!(
            "loaded {} table schemas from {}",
            registry.len(),
            dir.display()
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemas.keys().cloned().collect();
        names.sort();
        names
    }
}

impl SchemaSource for SchemaRegistry {
    fn load(&self, table_name: &str) -> Result<Arc<Schema>, MockError> {
        self.schemas
            .get(table_name)
            .cloned()
            .ok_or_else(|| MockError::SchemaNotFound(table_name.to_string()))
    }
}

fn validate(table_name: &str, schema: &Schema) -> Result<(), MockError> {
    let mut seen = HashSet::new();
    for column in &schema.columns {
        if !seen.insert(column.key.as_str()) {
            return Err(MockError::InvalidSchema(format!(
                "table {}: duplicate column key {}",
                table_name, column.key
            )));
        }
        if column.show_type.is_choice() && column.options.is_empty() {
            return Err(MockError::InvalidSchema(format!(
                "table {}: column {} is a {:?} without options",
                table_name, column.key, column.show_type
            )));
        }
    }
    Ok(())
}

use thiserror::Error;

/// Error type for schema loading and the setup paths around the mock client.
#[derive(Error, Debug)]
pub enum MockError {
    /// No schema is registered under the requested table name.
    #[error("can not find dataSchema file for table {0}")]
    SchemaNotFound(String),
    /// A schema was found but breaks a column invariant (duplicate keys, missing options).
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration error (e.g., a non-numeric latency in the environment).
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Export error: {0}")]
    Export(String),
}

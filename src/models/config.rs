use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::MockError;

pub const DEFAULT_LATENCY_MS: u64 = 2000;
pub const DEFAULT_SCHEMA_DIR: &str = "schema";

#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    /// Artificial delay applied before every operation resolves. Zero disables it.
    pub latency: Duration,
    pub schema_dir: PathBuf,
    /// Fixed RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            schema_dir: PathBuf::from(DEFAULT_SCHEMA_DIR),
            seed: None,
        }
    }
}

impl MockConfig {
    /// Zero latency, fixed seed. Meant for tests.
    pub fn instant(seed: u64) -> Self {
        Self {
            latency: Duration::ZERO,
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Reads `MOCK_LATENCY_MS`, `MOCK_SCHEMA_DIR` and `MOCK_SEED`, falling back to defaults.
    pub fn from_env() -> Result<Self, MockError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, MockError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("MOCK_LATENCY_MS") {
            let ms = parse_u64("MOCK_LATENCY_MS", &raw)?;
            config.latency = Duration::from_millis(ms);
        }
        if let Some(dir) = lookup("MOCK_SCHEMA_DIR") {
            config.schema_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("MOCK_SEED") {
            config.seed = Some(parse_u64("MOCK_SEED", &raw)?);
        }

        Ok(config)
    }
}

fn parse_u64(name: &str, raw: &str) -> Result<u64, MockError> {
    raw.trim()
        .parse()
        .map_err(|e| MockError::Config(format!("{name}={raw:?}: {e}")))
}

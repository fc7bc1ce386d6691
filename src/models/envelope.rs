use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A generated row: column key to value.
pub type Record = Map<String, Value>;

pub const CODE_OK: i32 = 0;
pub const CODE_AUTH_FAILED: i32 = 100;
pub const CODE_SCHEMA_NOT_FOUND: i32 = 200;

pub const DEFAULT_MESSAGE: &str = "just a mock ;) ";
pub const DEFAULT_TOTAL: u64 = 10000;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum EnvelopeData {
    Records(Vec<Record>),
    Record(Record),
    Count(usize),
    Text(String),
    #[default]
    Empty,
}

/// Uniform response wrapper. Every operation builds its own.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Envelope {
    pub success: bool,
    pub code: i32,
    pub message: String,
    pub total: u64,
    pub data: EnvelopeData,
}

impl Envelope {
    pub fn ok(data: EnvelopeData) -> Self {
        Self {
            success: true,
            code: CODE_OK,
            message: DEFAULT_MESSAGE.to_string(),
            total: DEFAULT_TOTAL,
            data,
        }
    }

    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            message: message.into(),
            total: DEFAULT_TOTAL,
            data: EnvelopeData::Empty,
        }
    }

    pub fn records(&self) -> Option<&[Record]> {
        match &self.data {
            EnvelopeData::Records(rows) => Some(rows.as_slice()),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&Record> {
        match &self.data {
            EnvelopeData::Record(row) => Some(row),
            _ => None,
        }
    }

    pub fn count(&self) -> Option<usize> {
        match self.data {
            EnvelopeData::Count(n) => Some(n),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.data {
            EnvelopeData::Text(s) => Some(s),
            _ => None,
        }
    }
}

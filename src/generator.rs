//! Schema-driven record synthesis.
//!
//! Each column is filled according to its widget hint first and its storage
//! type second:
//!
//! - `select` / `radio` - one option key picked uniformly at random
//! - `checkbox` / `multiSelect` - a random-length prefix of the option keys (at least one)
//! - `textarea` - `"mock page={page} {i}"`
//! - otherwise by data type: `int` is `1000 * page + i`, `float` is
//!   `2.0 * page + i * 0.1` with two decimals, `varchar` is the textarea
//!   pattern, `datetime` is `now` plus `i` days
//!
//! Columns with an unsupported data type are logged and left out of the row.
//! The RNG and the clock are passed in so a seeded `StdRng` and a fixed
//! timestamp give reproducible output.

use chrono::{Duration, NaiveDateTime};
use log::{debug, error, warn};
use rand::Rng;
use serde_json::Value;

use crate::models::envelope::Record;
use crate::models::query::QueryContext;
use crate::models::schema::{ColumnDescriptor, ColumnOption, DataType, Schema, ShowType};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generate one page of records for `schema`.
pub fn synthesize<R: Rng>(
    schema: &Schema,
    query: &QueryContext,
    rng: &mut R,
    now: NaiveDateTime,
) -> Vec<Record> {
    let page = query.page();
    let page_size = query.page_size();
    if query.is_clamped() {
        warn!(
            "pageSize {:?} exceeds the limit, generating {} rows",
            query.page_size, page_size
        );
    }
    debug!(
        "mocking {} rows for page {} ({} columns)",
        page_size,
        page,
        schema.columns.len()
    );

    (0..page_size)
        .map(|i| {
            let mut record = Record::new();
            for column in &schema.columns {
                if let Some(value) = generate_field(column, page, i, rng, now) {
                    record.insert(column.key.clone(), value);
                }
            }
            record
        })
        .collect()
}

/// Value for a single column at row `i` of `page`, or `None` when the column
/// cannot be generated.
pub fn generate_field<R: Rng>(
    column: &ColumnDescriptor,
    page: u64,
    i: u64,
    rng: &mut R,
    now: NaiveDateTime,
) -> Option<Value> {
    match column.show_type {
        ShowType::Select | ShowType::Radio => pick_option(rng, &column.options).or_else(|| {
            error!("column {} has no options to pick from", column.key);
            None
        }),
        ShowType::Checkbox | ShowType::MultiSelect => pick_option_prefix(rng, &column.options)
            .or_else(|| {
                error!("column {} has no options to pick from", column.key);
                None
            }),
        ShowType::Textarea => Some(Value::String(mock_text(page, i))),
        ShowType::Other => generate_by_data_type(&column.data_type, page, i, now),
    }
}

fn generate_by_data_type(
    data_type: &DataType,
    page: u64,
    i: u64,
    now: NaiveDateTime,
) -> Option<Value> {
    match data_type {
        DataType::Int => Some(Value::from(mock_int(page, i))),
        DataType::Float => Some(Value::String(mock_float(page, i))),
        DataType::Varchar => Some(Value::String(mock_text(page, i))),
        DataType::Datetime => match mock_datetime(now, i) {
            Some(s) => Some(Value::String(s)),
            None => {
                error!("datetime out of range at row {}", i);
                None
            }
        },
        DataType::Other(tag) => {
            error!("unsupported dataType {}", tag);
            None
        }
    }
}

/// One option key, chosen uniformly.
pub fn pick_option<R: Rng>(rng: &mut R, options: &[ColumnOption]) -> Option<Value> {
    if options.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..options.len());
    Some(options[idx].key.clone())
}

/// Keys `0..=r` for a random `r`, so the result is never empty.
pub fn pick_option_prefix<R: Rng>(rng: &mut R, options: &[ColumnOption]) -> Option<Value> {
    if options.is_empty() {
        return None;
    }
    let last = rng.gen_range(0..options.len());
    Some(Value::Array(
        options[..=last].iter().map(|o| o.key.clone()).collect(),
    ))
}

pub fn mock_text(page: u64, i: u64) -> String {
    format!("mock page={page} {i}")
}

pub fn mock_int(page: u64, i: u64) -> u64 {
    page.saturating_mul(1000).saturating_add(i)
}

pub fn mock_float(page: u64, i: u64) -> String {
    format!("{:.2}", 2.0 * page as f64 + i as f64 * 0.1)
}

pub fn mock_datetime(now: NaiveDateTime, i: u64) -> Option<String> {
    let days = i64::try_from(i).ok()?;
    now.checked_add_signed(Duration::try_days(days)?)
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
}

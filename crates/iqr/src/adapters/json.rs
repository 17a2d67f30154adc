//! JSON table loader.
//!
//! ## Purpose
//!
//! This module reads JSON documents into a [`Table`]. Two layouts are
//! accepted:
//!
//! * **Records**: `[{"a": 1, "b": "x"}, {"a": 2}]`
//! * **Columns**: `{"a": [1, 2], "b": ["x", null]}`
//!
//! ## Design notes
//!
//! * **Key order**: Record keys are unioned in first-seen order; absent keys are missing.
//! * **Typing**: Numbers are numeric, strings are categorical, `null` is missing,
//!   booleans become the text `"true"` / `"false"`. Mixed columns are categorical.
//!
//! ## Non-goals
//!
//! * This module does not flatten nested objects or arrays; they are rejected.

// External dependencies
use num_traits::Float;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

// Internal dependencies
use crate::adapters::infer::{build_column, RawCell};
use crate::primitives::errors::IqrError;
use crate::primitives::table::Table;

/// JSON reader for record and columnar layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLoader;

impl JsonLoader {
    /// Create a loader.
    pub fn new() -> Self {
        Self
    }

    /// Load a table from a file.
    pub fn load_path<T: Float, P: AsRef<Path>>(&self, path: P) -> Result<Table<T>, IqrError> {
        let file = File::open(path.as_ref())?;
        self.load_reader(BufReader::new(file))
    }

    /// Load a table from an in-memory string.
    pub fn load_str<T: Float>(&self, input: &str) -> Result<Table<T>, IqrError> {
        let value: Value = serde_json::from_str(input)?;
        self.load_value(value)
    }

    /// Load a table from any reader.
    pub fn load_reader<T: Float, R: Read>(&self, reader: R) -> Result<Table<T>, IqrError> {
        let value: Value = serde_json::from_reader(reader)?;
        self.load_value(value)
    }

    /// Convert an already parsed document.
    pub fn load_value<T: Float>(&self, value: Value) -> Result<Table<T>, IqrError> {
        let table = match value {
            Value::Array(records) => from_records(records)?,
            Value::Object(columns) => from_columns(columns)?,
            _ => {
                return Err(IqrError::Parse {
                    line: 0,
                    message: "expected an array of records or an object of columns".to_owned(),
                })
            }
        };
        info!(
            rows = table.n_rows(),
            columns = table.n_cols(),
            "loaded json table"
        );
        Ok(table)
    }
}

fn from_records<T: Float>(records: Vec<Value>) -> Result<Table<T>, IqrError> {
    let n = records.len();
    let mut names: Vec<String> = Vec::new();
    let mut columns: Vec<Vec<RawCell>> = Vec::new();

    for (i, record) in records.into_iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(IqrError::Parse {
                line: i + 1,
                message: "record is not an object".to_owned(),
            });
        };
        for (key, value) in fields {
            let slot = match names.iter().position(|n| *n == key) {
                Some(slot) => slot,
                None => {
                    names.push(key);
                    // Earlier records lacked this key.
                    columns.push(vec![RawCell::Missing; i]);
                    columns.len() - 1
                }
            };
            columns[slot].push(raw_cell(value, i + 1)?);
        }
        // Records that lack a known key.
        for cells in columns.iter_mut() {
            if cells.len() == i {
                cells.push(RawCell::Missing);
            }
        }
    }
    debug_assert!(columns.iter().all(|c| c.len() == n));

    Table::from_columns(
        names
            .into_iter()
            .zip(columns)
            .map(|(name, cells)| build_column(name, cells))
            .collect(),
    )
}

fn from_columns<T: Float>(columns: Map<String, Value>) -> Result<Table<T>, IqrError> {
    let mut built = Vec::with_capacity(columns.len());
    for (name, value) in columns {
        let Value::Array(items) = value else {
            return Err(IqrError::Parse {
                line: 0,
                message: format!("column '{name}' is not an array"),
            });
        };
        let cells = items
            .into_iter()
            .enumerate()
            .map(|(i, v)| raw_cell(v, i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        built.push(build_column(name, cells));
    }
    Table::from_columns(built)
}

fn raw_cell(value: Value, line: usize) -> Result<RawCell, IqrError> {
    match value {
        Value::Null => Ok(RawCell::Missing),
        Value::Number(n) => Ok(match n.as_f64() {
            Some(v) => RawCell::Number {
                value: v,
                text: n.to_string(),
            },
            None => RawCell::Missing,
        }),
        Value::String(s) => Ok(RawCell::Text(s)),
        Value::Bool(b) => Ok(RawCell::Text(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(IqrError::Parse {
            line,
            message: "nested values are not supported".to_owned(),
        }),
    }
}

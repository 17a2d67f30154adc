//! Column type inference shared by the loaders.
//!
//! A column is numeric iff every present cell is a number; otherwise it is
//! categorical and numbers keep their source text.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::table::{Column, ColumnData};

/// A parsed but untyped cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Missing value.
    Missing,
    /// Numeric value and the text it was read from.
    Number {
        /// Parsed value.
        value: f64,
        /// Source text.
        text: String,
    },
    /// Non-numeric text.
    Text(String),
}

impl RawCell {
    /// Classify a text cell: missing token, number, or text.
    pub fn from_text(text: &str, missing_tokens: &[String]) -> Self {
        if missing_tokens.iter().any(|t| t == text) {
            return Self::Missing;
        }
        match text.parse::<f64>() {
            Ok(value) => Self::Number {
                value,
                text: text.to_owned(),
            },
            Err(_) => Self::Text(text.to_owned()),
        }
    }
}

/// Build a typed column from raw cells.
pub fn build_column<T: Float>(name: String, cells: Vec<RawCell>) -> Column<T> {
    let numeric = cells.iter().all(|c| !matches!(c, RawCell::Text(_)));
    let data = if numeric {
        ColumnData::Numeric(
            cells
                .into_iter()
                .map(|c| match c {
                    RawCell::Number { value, .. } => T::from(value),
                    _ => None,
                })
                .collect(),
        )
    } else {
        ColumnData::Categorical(
            cells
                .into_iter()
                .map(|c| match c {
                    RawCell::Missing => None,
                    RawCell::Number { text, .. } | RawCell::Text(text) => Some(text),
                })
                .collect(),
        )
    };
    Column::new(name, data)
}

//! CSV table loader.
//!
//! ## Purpose
//!
//! This module reads delimited text into a [`Table`], inferring for each
//! column whether it is numeric or categorical.
//!
//! ## Design notes
//!
//! * **Tokenising**: Quoting and escaping are handled by the `csv` crate.
//! * **Strict shape**: Every record must have the same number of fields.
//! * **Missing tokens**: Configurable; defaults cover the usual spellings of "no value".
//! * **Builder**: Options are set fluently, each at most once.
//!
//! ## Invariants
//!
//! * Column order equals field order; row order equals record order.
//! * Headerless input gets names `column_0`, `column_1`, ...
//! * A blank header cell is named by position, with a numeric suffix when
//!   that name is already a header (`column_1_2`).
//!
//! ## Non-goals
//!
//! * This module does not guess delimiters or encodings.

// External dependencies
use num_traits::Float;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

// Internal dependencies
use crate::adapters::infer::{build_column, RawCell};
use crate::engine::validator::Validator;
use crate::primitives::errors::IqrError;
use crate::primitives::table::Table;

/// Cell spellings treated as missing by default.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

// ============================================================================
// CSV Loader
// ============================================================================

/// Builder-style CSV reader.
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    /// Field delimiter (default `,`).
    pub delimiter: Option<u8>,

    /// Whether the first record holds column names (default true).
    pub has_headers: Option<bool>,

    /// Cell values treated as missing (default [`DEFAULT_MISSING_TOKENS`]).
    pub missing_tokens: Option<Vec<String>>,

    /// Trim surrounding whitespace from fields and headers (default true).
    pub trim: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl CsvLoader {
    /// Create a loader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        if self.delimiter.is_some() {
            self.duplicate_param = Some("delimiter");
        }
        self.delimiter = Some(delimiter);
        self
    }

    /// Set whether the first record holds column names.
    pub fn has_headers(mut self, has_headers: bool) -> Self {
        if self.has_headers.is_some() {
            self.duplicate_param = Some("has_headers");
        }
        self.has_headers = Some(has_headers);
        self
    }

    /// Replace the set of missing-value tokens.
    pub fn missing_tokens<S: Into<String>>(mut self, tokens: impl IntoIterator<Item = S>) -> Self {
        if self.missing_tokens.is_some() {
            self.duplicate_param = Some("missing_tokens");
        }
        self.missing_tokens = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Set whether to trim whitespace around fields.
    pub fn trim(mut self, trim: bool) -> Self {
        if self.trim.is_some() {
            self.duplicate_param = Some("trim");
        }
        self.trim = Some(trim);
        self
    }

    // ========================================================================
    // Sources
    // ========================================================================

    /// Load a table from a file.
    pub fn load_path<T: Float, P: AsRef<Path>>(&self, path: P) -> Result<Table<T>, IqrError> {
        let file = File::open(path.as_ref())?;
        self.load_reader(file)
    }

    /// Load a table from an in-memory string.
    pub fn load_str<T: Float>(&self, input: &str) -> Result<Table<T>, IqrError> {
        self.load_reader(input.as_bytes())
    }

    /// Load a table from any reader.
    pub fn load_reader<T: Float, R: Read>(&self, reader: R) -> Result<Table<T>, IqrError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let has_headers = self.has_headers.unwrap_or(true);
        let missing_tokens: Vec<String> = match &self.missing_tokens {
            Some(tokens) => tokens.clone(),
            None => DEFAULT_MISSING_TOKENS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        };

        let mut rdr = ::csv::ReaderBuilder::new()
            .delimiter(self.delimiter.unwrap_or(b','))
            .has_headers(has_headers)
            .trim(if self.trim.unwrap_or(true) {
                ::csv::Trim::All
            } else {
                ::csv::Trim::None
            })
            .from_reader(reader);

        let mut names: Vec<String> = if has_headers {
            name_headers(rdr.headers()?)
        } else {
            Vec::new()
        };

        let mut columns: Vec<Vec<RawCell>> = vec![Vec::new(); names.len()];
        for record in rdr.records() {
            let record = record?;
            if names.is_empty() && columns.is_empty() {
                names = (0..record.len()).map(|i| format!("column_{i}")).collect();
                columns = vec![Vec::new(); record.len()];
            }
            for (cells, field) in columns.iter_mut().zip(record.iter()) {
                cells.push(RawCell::from_text(field, &missing_tokens));
            }
        }

        let table = Table::from_columns(
            names
                .into_iter()
                .zip(columns)
                .map(|(name, cells)| build_column(name, cells))
                .collect(),
        )?;

        info!(
            rows = table.n_rows(),
            columns = table.n_cols(),
            "loaded csv table"
        );
        Ok(table)
    }
}

/// Header names, with blank cells named after their position.
fn name_headers(headers: &::csv::StringRecord) -> Vec<String> {
    let taken: HashSet<&str> = headers.iter().filter(|h| !h.is_empty()).collect();
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if !h.is_empty() {
                return h.to_owned();
            }
            let base = format!("column_{i}");
            let mut name = base.clone();
            let mut suffix = 1;
            while taken.contains(name.as_str()) {
                suffix += 1;
                name = format!("{base}_{suffix}");
            }
            name
        })
        .collect()
}

//! Descriptive statistics per column.
//!
//! ## Purpose
//!
//! This module produces the "describe" view of a table: location, spread
//! and quartiles for numeric columns, and frequency information for
//! categorical columns.
//!
//! ## Design notes
//!
//! * **Missing-aware**: Statistics use only present values; the missing count is reported.
//! * **Sample statistics**: Standard deviation uses the `n - 1` denominator.
//! * **Order**: Summaries follow table column order.
//!
//! ## Key concepts
//!
//! * **Numeric**: count, missing, mean, std, min, Q1, median, Q3, max.
//! * **Categorical**: count, missing, unique, top (most frequent), freq.
//!
//! ## Invariants
//!
//! * `count + missing` equals the table's row count for every column.
//! * `min <= q1 <= median <= q3 <= max` whenever they are defined.
//! * Ties for `top` are resolved in favour of the value seen first.
//!
//! ## Non-goals
//!
//! * This module does not flag outliers (see the engine layer).

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;
use serde::Serialize;
use std::collections::HashMap;

// Internal dependencies
use crate::algorithms::fence::Quartiles;
use crate::math::moments::{mean, min_max, sample_std};
use crate::math::quantile::QuantileMethod;
use crate::primitives::errors::IqrError;
use crate::primitives::sorting::{sort_in_place, Observations};
use crate::primitives::table::{Column, ColumnData, Table};

// ============================================================================
// Summary Structures
// ============================================================================

/// Summary of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary<T> {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub count: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Arithmetic mean.
    pub mean: Option<T>,
    /// Sample standard deviation (`None` when `count < 2`).
    pub std: Option<T>,
    /// Minimum.
    pub min: Option<T>,
    /// 25th percentile.
    pub q1: Option<T>,
    /// 50th percentile.
    pub median: Option<T>,
    /// 75th percentile.
    pub q3: Option<T>,
    /// Maximum.
    pub max: Option<T>,
}

/// Summary of a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub count: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Number of distinct values.
    pub unique: usize,
    /// Most frequent value.
    pub top: Option<String>,
    /// Frequency of `top`.
    pub freq: usize,
}

/// Summary of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnSummary<T> {
    /// Numeric column summary.
    Numeric(NumericSummary<T>),
    /// Categorical column summary.
    Categorical(CategoricalSummary),
}

impl<T> ColumnSummary<T> {
    /// Column name.
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric(s) => &s.name,
            Self::Categorical(s) => &s.name,
        }
    }
}

/// Summaries of every column of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary<T> {
    /// Row count of the table.
    pub n_rows: usize,
    /// One summary per column, in table order.
    pub columns: Vec<ColumnSummary<T>>,
}

// ============================================================================
// Computation
// ============================================================================

impl<T: Float> NumericSummary<T> {
    /// Summarize numeric cells.
    pub fn compute(name: &str, cells: &[Option<T>], method: QuantileMethod) -> Self {
        let mut obs = Observations::extract(cells);
        let count = obs.len();
        let missing = obs.missing;

        let mean = mean(&obs.values);
        let std = sample_std(&obs.values);
        let range = min_max(&obs.values);

        sort_in_place(&mut obs.values);
        let quartiles = Quartiles::from_sorted(&obs.values, method);

        Self {
            name: name.to_owned(),
            count,
            missing,
            mean,
            std,
            min: range.map(|r| r.0),
            q1: quartiles.map(|q| q.q1),
            median: quartiles.map(|q| q.median),
            q3: quartiles.map(|q| q.q3),
            max: range.map(|r| r.1),
        }
    }
}

impl CategoricalSummary {
    /// Summarize categorical cells.
    pub fn compute(name: &str, cells: &[Option<String>]) -> Self {
        // value -> (frequency, first position)
        let mut freqs: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut count = 0;
        for (i, cell) in cells.iter().enumerate() {
            if let Some(value) = cell {
                count += 1;
                freqs.entry(value.as_str()).or_insert((0, i)).0 += 1;
            }
        }

        let top = freqs
            .iter()
            .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
            .map(|(value, &(freq, _))| ((*value).to_owned(), freq));

        Self {
            name: name.to_owned(),
            count,
            missing: cells.len() - count,
            unique: freqs.len(),
            freq: top.as_ref().map_or(0, |t| t.1),
            top: top.map(|t| t.0),
        }
    }
}

impl<T: Float> ColumnSummary<T> {
    /// Summarize one column.
    pub fn compute(column: &Column<T>, method: QuantileMethod) -> Self {
        match column.data() {
            ColumnData::Numeric(cells) => {
                Self::Numeric(NumericSummary::compute(column.name(), cells, method))
            }
            ColumnData::Categorical(cells) => {
                Self::Categorical(CategoricalSummary::compute(column.name(), cells))
            }
        }
    }
}

impl<T: Float> TableSummary<T> {
    /// Summarize every column of `table`.
    pub fn compute(table: &Table<T>, method: QuantileMethod) -> Result<Self, IqrError> {
        if table.n_cols() == 0 {
            return Err(IqrError::EmptyInput);
        }
        Ok(Self {
            n_rows: table.n_rows(),
            columns: table
                .columns()
                .iter()
                .map(|c| ColumnSummary::compute(c, method))
                .collect(),
        })
    }

    /// Look up the summary of a column.
    pub fn get(&self, name: &str) -> Option<&ColumnSummary<T>> {
        self.columns.iter().find(|s| s.name() == name)
    }

    /// Numeric column summaries in order.
    pub fn numeric(&self) -> impl Iterator<Item = &NumericSummary<T>> {
        self.columns.iter().filter_map(|s| match s {
            ColumnSummary::Numeric(n) => Some(n),
            ColumnSummary::Categorical(_) => None,
        })
    }

    /// Categorical column summaries in order.
    pub fn categorical(&self) -> impl Iterator<Item = &CategoricalSummary> {
        self.columns.iter().filter_map(|s| match s {
            ColumnSummary::Categorical(c) => Some(c),
            ColumnSummary::Numeric(_) => None,
        })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

struct Opt<T>(Option<T>);

impl<T: Float + Display> Display for Opt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            Some(v) => write!(f, "{:>12.4}", v),
            None => write!(f, "{:>12}", "NA"),
        }
    }
}

impl<T: Float + Display> Display for TableSummary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Rows:    {}", self.n_rows)?;
        writeln!(f, "  Columns: {}", self.columns.len())?;

        let numeric: Vec<_> = self.numeric().collect();
        if !numeric.is_empty() {
            writeln!(f)?;
            writeln!(f, "Numeric Columns:")?;
            writeln!(
                f,
                "{:>16} {:>7} {:>7} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
                "Column", "Count", "Missing", "Mean", "Std", "Min", "Q1", "Median", "Q3", "Max"
            )?;
            writeln!(f, "{:-<width$}", "", width = 16 + 2 * 8 + 7 * 13)?;
            for s in numeric {
                writeln!(
                    f,
                    "{:>16} {:>7} {:>7} {} {} {} {} {} {} {}",
                    s.name,
                    s.count,
                    s.missing,
                    Opt(s.mean),
                    Opt(s.std),
                    Opt(s.min),
                    Opt(s.q1),
                    Opt(s.median),
                    Opt(s.q3),
                    Opt(s.max)
                )?;
            }
        }

        let categorical: Vec<_> = self.categorical().collect();
        if !categorical.is_empty() {
            writeln!(f)?;
            writeln!(f, "Categorical Columns:")?;
            writeln!(
                f,
                "{:>16} {:>7} {:>7} {:>7} {:>16} {:>7}",
                "Column", "Count", "Missing", "Unique", "Top", "Freq"
            )?;
            writeln!(f, "{:-<width$}", "", width = 16 + 4 * 8 + 17)?;
            for s in categorical {
                writeln!(
                    f,
                    "{:>16} {:>7} {:>7} {:>7} {:>16} {:>7}",
                    s.name,
                    s.count,
                    s.missing,
                    s.unique,
                    s.top.as_deref().unwrap_or("NA"),
                    s.freq
                )?;
            }
        }

        Ok(())
    }
}

//! Pairwise Pearson correlation between numeric columns.
//!
//! ## Purpose
//!
//! This module computes the correlation matrix behind a heatmap view of a
//! table.
//!
//! ## Design notes
//!
//! * **Pairwise-complete**: Each pair uses only rows where both cells are present.
//! * **Undefined entries**: `None` when fewer than 2 complete pairs exist or a
//!   side has zero variance.
//!
//! ## Invariants
//!
//! * The matrix is square and symmetric.
//! * Defined entries lie in `[-1, 1]`; defined diagonal entries are exactly 1.
//!
//! ## Non-goals
//!
//! * This module does not compute rank correlations or significance tests.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;
use serde::Serialize;

// Internal dependencies
use crate::math::moments::pearson;
use crate::primitives::errors::IqrError;
use crate::primitives::table::Table;

/// Symmetric matrix of Pearson coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix<T> {
    /// Numeric column names, in table order.
    pub columns: Vec<String>,

    /// Row-major coefficients; `values[i][j]` pairs `columns[i]` with `columns[j]`.
    pub values: Vec<Vec<Option<T>>>,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Compute the matrix over every numeric column of `table`.
    pub fn compute(table: &Table<T>) -> Result<Self, IqrError> {
        let numeric: Vec<(&str, &[Option<T>])> = table
            .numeric_columns()
            .filter_map(|c| c.as_numeric().map(|cells| (c.name(), cells)))
            .collect();
        if numeric.is_empty() {
            return Err(IqrError::EmptyInput);
        }

        let k = numeric.len();
        let mut values = vec![vec![None; k]; k];
        for i in 0..k {
            for j in i..k {
                let r = if i == j {
                    let (x, _) = complete_pairs(numeric[i].1, numeric[i].1);
                    pearson(&x, &x).map(|_| T::one())
                } else {
                    let (x, y) = complete_pairs(numeric[i].1, numeric[j].1);
                    pearson(&x, &y)
                };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self {
            columns: numeric.iter().map(|(name, _)| (*name).to_owned()).collect(),
            values,
        })
    }

    /// Coefficient between two named columns.
    pub fn get(&self, a: &str, b: &str) -> Option<T> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

fn complete_pairs<T: Float>(a: &[Option<T>], b: &[Option<T>]) -> (Vec<T>, Vec<T>) {
    a.iter()
        .zip(b)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
            _ => None,
        })
        .unzip()
}

impl<T: Float + Display> Display for CorrelationMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Correlation Matrix:")?;
        write!(f, "{:>16}", "")?;
        for name in &self.columns {
            write!(f, " {:>12}", name)?;
        }
        writeln!(f)?;
        writeln!(f, "{:-<width$}", "", width = 16 + 13 * self.columns.len())?;
        for (name, row) in self.columns.iter().zip(&self.values) {
            write!(f, "{:>16}", name)?;
            for value in row {
                match value {
                    Some(r) => write!(f, " {:>12.4}", r)?,
                    None => write!(f, " {:>12}", "NA")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

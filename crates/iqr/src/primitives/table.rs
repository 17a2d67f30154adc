//! In-memory columnar table.
//!
//! ## Purpose
//!
//! This module defines the `Table` consumed by every analysis in the crate:
//! an ordered set of uniquely named columns whose rows line up positionally.
//!
//! ## Design notes
//!
//! * **Column-major**: Each column owns a single `Vec`, tagged numeric or categorical.
//! * **Missing-aware**: Cells are `Option`s; non-finite numbers also count as missing.
//! * **Read-only analysis**: Scans borrow the table and never mutate it.
//! * **Generics**: Numeric cells are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Column names are unique within a table.
//! * Every column has exactly `n_rows` cells.
//! * `take` preserves the order of the indices it is given.
//!
//! ## Non-goals
//!
//! * This module does not parse files (see the adapters layer).
//! * This module does not provide joins, grouping, or mutation of cells.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

// Internal dependencies
use crate::primitives::errors::IqrError;

// ============================================================================
// Column Data
// ============================================================================

/// Scalar type carried by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Floating point values.
    Numeric,
    /// Free text / labels.
    Categorical,
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Categorical => write!(f, "categorical"),
        }
    }
}

/// Cell storage for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData<T> {
    /// Numeric cells; `None` or non-finite values are missing.
    Numeric(Vec<Option<T>>),
    /// Categorical cells; `None` is missing.
    Categorical(Vec<Option<String>>),
}

impl<T: Float> ColumnData<T> {
    /// Number of cells.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Check if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind tag of this column.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Numeric(_) => ColumnKind::Numeric,
            Self::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Check whether the cell at `row` is missing.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Self::Numeric(v) => !matches!(v.get(row), Some(Some(x)) if x.is_finite()),
            Self::Categorical(v) => !matches!(v.get(row), Some(Some(_))),
        }
    }

    /// Count missing cells.
    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_missing(i)).count()
    }

    fn take(&self, indices: &[usize]) -> Self {
        match self {
            Self::Numeric(v) => Self::Numeric(indices.iter().map(|&i| v[i]).collect()),
            Self::Categorical(v) => {
                Self::Categorical(indices.iter().map(|&i| v[i].clone()).collect())
            }
        }
    }
}

// ============================================================================
// Column
// ============================================================================

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    name: String,
    data: ColumnData<T>,
}

impl<T: Float> Column<T> {
    /// Create a column from raw cell storage.
    pub fn new(name: impl Into<String>, data: ColumnData<T>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Numeric column with no missing cells.
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
        Self::new(
            name,
            ColumnData::Numeric(values.into_iter().map(Some).collect()),
        )
    }

    /// Numeric column where `None` marks a missing cell.
    pub fn numeric_opt(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<T>>,
    ) -> Self {
        Self::new(name, ColumnData::Numeric(values.into_iter().collect()))
    }

    /// Categorical column with no missing cells.
    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            ColumnData::Categorical(values.into_iter().map(|s| Some(s.into())).collect()),
        )
    }

    /// Categorical column where `None` marks a missing cell.
    pub fn categorical_opt<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        Self::new(
            name,
            ColumnData::Categorical(values.into_iter().map(|s| s.map(Into::into)).collect()),
        )
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying cell storage.
    pub fn data(&self) -> &ColumnData<T> {
        &self.data
    }

    /// Kind tag of this column.
    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Numeric cells, or `None` for a categorical column.
    pub fn as_numeric(&self) -> Option<&[Option<T>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Categorical(_) => None,
        }
    }

    /// Categorical cells, or `None` for a numeric column.
    pub fn as_categorical(&self) -> Option<&[Option<String>]> {
        match &self.data {
            ColumnData::Categorical(v) => Some(v),
            ColumnData::Numeric(_) => None,
        }
    }

    /// Count missing cells.
    pub fn missing_count(&self) -> usize {
        self.data.missing_count()
    }

    /// Cell at `row`.
    pub fn cell(&self, row: usize) -> Option<Cell<'_, T>> {
        if row >= self.len() {
            return None;
        }
        let cell = match &self.data {
            ColumnData::Numeric(v) => match v[row] {
                Some(x) if x.is_finite() => Cell::Number(x),
                _ => Cell::Missing,
            },
            ColumnData::Categorical(v) => match &v[row] {
                Some(s) => Cell::Text(s),
                None => Cell::Missing,
            },
        };
        Some(cell)
    }
}

// ============================================================================
// Table
// ============================================================================

/// Ordered collection of named columns with aligned rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    columns: Vec<Column<T>>,
    n_rows: usize,
}

impl<T: Float> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Table<T> {
    /// Create a table with no columns.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            n_rows: 0,
        }
    }

    /// Build a table from columns, checking names and lengths.
    pub fn from_columns(columns: Vec<Column<T>>) -> Result<Self, IqrError> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Append a column. The first column fixes the row count.
    pub fn push_column(&mut self, column: Column<T>) -> Result<(), IqrError> {
        if self.column(column.name()).is_some() {
            return Err(IqrError::DuplicateColumn(column.name().to_owned()));
        }
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(IqrError::MismatchedLengths {
                column: column.name().to_owned(),
                expected: self.n_rows,
                got: column.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Builder-style variant of [`Table::push_column`].
    pub fn with_column(mut self, column: Column<T>) -> Result<Self, IqrError> {
        self.push_column(column)?;
        Ok(self)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Numeric columns in order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns
            .iter()
            .filter(|c| c.kind() == ColumnKind::Numeric)
    }

    /// Row at position `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_, T>> {
        (index < self.n_rows).then_some(Row { table: self, index })
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, T>> {
        (0..self.n_rows).map(move |index| Row { table: self, index })
    }

    /// New table holding the rows at `indices`, in that order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn take(&self, indices: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    data: c.data.take(indices),
                })
                .collect(),
            n_rows: indices.len(),
        }
    }
}

// ============================================================================
// Row Access
// ============================================================================

/// A single cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a, T> {
    /// Finite numeric value.
    Number(T),
    /// Categorical value.
    Text(&'a str),
    /// Missing value.
    Missing,
}

impl<T: Display> Display for Cell<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Missing => write!(f, "NA"),
        }
    }
}

/// Borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a, T> {
    table: &'a Table<T>,
    index: usize,
}

impl<'a, T: Float> Row<'a, T> {
    /// Position of this row in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell in the named column.
    pub fn get(&self, column: &str) -> Option<Cell<'a, T>> {
        self.table.column(column).and_then(|c| c.cell(self.index))
    }

    /// `(column name, cell)` pairs in column order.
    pub fn cells(&self) -> impl Iterator<Item = (&'a str, Cell<'a, T>)> + 'a {
        let index = self.index;
        self.table
            .columns
            .iter()
            .map(move |c| (c.name(), c.cell(index).unwrap_or(Cell::Missing)))
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl<T: Float + Serialize> Serialize for Cell<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(x) => x.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Missing => serializer.serialize_none(),
        }
    }
}

impl<T: Float + Serialize> Serialize for Row<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.n_cols()))?;
        for (name, cell) in self.cells() {
            map.serialize_entry(name, &cell)?;
        }
        map.end()
    }
}

/// Serialized as an array of row objects.
impl<T: Float + Serialize> Serialize for Table<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.n_rows))?;
        for row in self.rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

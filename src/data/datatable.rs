use crate::data::data_provider::DataProvider;
use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// Represents the data type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Mixed, // For columns with mixed types
}

impl DataType {
    /// Infer type from a string value
    pub fn infer_from_string(value: &str) -> Self {
        if value.is_empty() {
            return DataType::Null;
        }

        if value == "true" || value == "false" {
            return DataType::Boolean;
        }

        if value.parse::<i64>().is_ok() {
            return DataType::Integer;
        }

        if value.parse::<f64>().is_ok() {
            return DataType::Float;
        }

        DataType::String
    }

    /// Merge two types (for columns with mixed types)
    pub fn merge(&self, other: &DataType) -> DataType {
        if self == other {
            return *self;
        }

        match (self, other) {
            (DataType::Null, t) | (t, DataType::Null) => *t,
            (DataType::Integer, DataType::Float) | (DataType::Float, DataType::Integer) => {
                DataType::Float
            }
            _ => DataType::Mixed,
        }
    }
}

/// Column metadata and definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataColumn {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub null_count: usize,
}

impl DataColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::String,
            nullable: true,
            null_count: 0,
        }
    }

    pub fn with_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }
}

/// Ordered, typed column definitions with unique names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<DataColumn>,
}

impl Schema {
    pub fn new(columns: Vec<DataColumn>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DashError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub(crate) fn from_validated(columns: Vec<DataColumn>) -> Self {
        Self { columns }
    }

    /// Schema where every column is typed as a string
    pub fn untyped<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(DataColumn::new).collect())
    }

    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// A single cell value in the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl DataValue {
    pub fn from_string(s: &str, data_type: &DataType) -> Self {
        if s.is_empty() {
            return DataValue::Null;
        }

        match data_type {
            DataType::String => DataValue::String(s.to_string()),
            DataType::Integer => s
                .parse::<i64>()
                .map(DataValue::Integer)
                .unwrap_or_else(|_| DataValue::String(s.to_string())),
            DataType::Float => s
                .parse::<f64>()
                .map(DataValue::Float)
                .unwrap_or_else(|_| DataValue::String(s.to_string())),
            DataType::Boolean => match s {
                "true" => DataValue::Boolean(true),
                "false" => DataValue::Boolean(false),
                _ => DataValue::String(s.to_string()),
            },
            DataType::Null => DataValue::Null,
            DataType::Mixed => {
                // Try to infer for mixed columns, keeping text such as "007"
                // whose typed form would print differently
                let inferred = DataType::infer_from_string(s);
                let value = Self::from_string(s, &inferred);
                if value.to_string() == s {
                    value
                } else {
                    DataValue::String(s.to_string())
                }
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            DataValue::String(_) => DataType::String,
            DataValue::Integer(_) => DataType::Integer,
            DataValue::Float(_) => DataType::Float,
            DataValue::Boolean(_) => DataType::Boolean,
            DataValue::Null => DataType::Null,
        }
    }

    /// Type this cell would take if it were read from text
    fn inferred_type(&self) -> DataType {
        match self {
            DataValue::String(s) => DataType::infer_from_string(s),
            other => other.data_type(),
        }
    }

    /// Convert a cell into the representation used by a column of `data_type`
    fn coerce_to(self, data_type: &DataType) -> DataValue {
        match (self, data_type) {
            (DataValue::String(s), _) => DataValue::from_string(&s, data_type),
            (DataValue::Integer(i), DataType::Float) => DataValue::Float(i as f64),
            (value, _) => value,
        }
    }

    /// Numeric value, if this cell holds one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Integer(i) => Some(*i as f64),
            DataValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Integer(value)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Float(value)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Boolean(value)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::String(s) => write!(f, "{}", s),
            DataValue::Integer(i) => write!(f, "{}", i),
            // Whole floats keep a ".0" so they re-parse as floats
            DataValue::Float(fl) if fl.is_finite() && fl.fract() == 0.0 && fl.abs() < 1e15 => {
                write!(f, "{:.1}", fl)
            }
            DataValue::Float(fl) => write!(f, "{}", fl),
            DataValue::Boolean(b) => write!(f, "{}", b),
            DataValue::Null => write!(f, ""),
        }
    }
}

/// A row of data in the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub values: Vec<DataValue>,
}

impl DataRow {
    pub fn new(values: Vec<DataValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&DataValue> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The main DataTable structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub name: String,
    pub columns: Vec<DataColumn>,
    pub rows: Vec<DataRow>,
}

impl DataTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create an empty table whose header is the given schema
    pub fn with_schema(name: impl Into<String>, schema: &Schema) -> Self {
        Self {
            name: name.into(),
            columns: schema.columns().to_vec(),
            rows: Vec::new(),
        }
    }

    /// Build a table from name-keyed records. Every record must carry
    /// exactly the declared columns.
    pub fn from_records(
        name: impl Into<String>,
        schema: &Schema,
        records: Vec<HashMap<String, DataValue>>,
    ) -> Result<Self> {
        let mut table = Self::with_schema(name, schema);

        for (row_idx, mut record) in records.into_iter().enumerate() {
            let found = record.len();
            let mut values = Vec::with_capacity(schema.len());
            for column in schema.columns() {
                match record.remove(&column.name) {
                    Some(value) => values.push(value),
                    None => {
                        return Err(DashError::MalformedRow {
                            row: row_idx,
                            expected: schema.len(),
                            found,
                        })
                    }
                }
            }
            if !record.is_empty() {
                return Err(DashError::MalformedRow {
                    row: row_idx,
                    expected: schema.len(),
                    found,
                });
            }
            table.add_row(DataRow::new(values))?;
        }

        Ok(table)
    }

    pub fn add_column(&mut self, column: DataColumn) -> Result<&mut Self> {
        if self.get_column_index(&column.name).is_some() {
            return Err(DashError::DuplicateColumn {
                column: column.name,
            });
        }
        self.columns.push(column);
        Ok(self)
    }

    /// Append a row. Empty strings are stored as Null, the same cell an
    /// empty CSV field loads as.
    pub fn add_row(&mut self, mut row: DataRow) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(DashError::MalformedRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        for value in &mut row.values {
            if matches!(value, DataValue::String(s) if s.is_empty()) {
                *value = DataValue::Null;
            }
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn get_column(&self, name: &str) -> Option<&DataColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get column names as a vector
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn schema(&self) -> Schema {
        Schema::from_validated(self.columns.clone())
    }

    /// Infer and update column types based on data, converting every
    /// cell to its column's type. Text cells are parsed the way CSV
    /// fields are.
    pub fn infer_column_types(&mut self) {
        for (col_idx, column) in self.columns.iter_mut().enumerate() {
            let inferred_type = self
                .rows
                .iter()
                .filter_map(|row| row.get(col_idx))
                .fold(DataType::Null, |acc, value| acc.merge(&value.inferred_type()));

            column.data_type = inferred_type;
            for row in &mut self.rows {
                if let Some(value) = row.values.get_mut(col_idx) {
                    let cell = std::mem::replace(value, DataValue::Null);
                    *value = cell.coerce_to(&inferred_type);
                }
            }
        }
        self.infer_null_counts();

        debug!(
            "Inferred column types for '{}': {:?}",
            self.name,
            self.columns
                .iter()
                .map(|c| (c.name.as_str(), c.data_type))
                .collect::<Vec<_>>()
        );
    }

    /// Refresh per-column null statistics without changing declared types
    pub(crate) fn infer_null_counts(&mut self) {
        for (col_idx, column) in self.columns.iter_mut().enumerate() {
            let null_count = self
                .rows
                .iter()
                .filter(|row| row.get(col_idx).map_or(true, DataValue::is_null))
                .count();
            column.null_count = null_count;
            column.nullable = null_count > 0;
        }
    }

    /// Get a value at specific row and column
    pub fn get_value(&self, row: usize, col: usize) -> Option<&DataValue> {
        self.rows.get(row)?.get(col)
    }

    /// Get a value by row index and column name
    pub fn get_value_by_name(&self, row: usize, col_name: &str) -> Option<&DataValue> {
        let col_idx = self.get_column_index(col_name)?;
        self.get_value(row, col_idx)
    }
}

impl DataProvider for DataTable {
    fn get_row(&self, index: usize) -> Option<Vec<String>> {
        self.rows
            .get(index)
            .map(|row| row.values.iter().map(|v| v.to_string()).collect())
    }

    fn get_column_names(&self) -> Vec<String> {
        self.column_names()
    }

    fn get_row_count(&self) -> usize {
        self.row_count()
    }

    fn get_column_count(&self) -> usize {
        self.column_count()
    }
}

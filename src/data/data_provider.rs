//! Data provider trait for abstracting row access
//!
//! Exporters and renderers read through this trait so they work the same
//! over a full `DataTable` or a projected, sorted `DataView`.

use std::fmt::Debug;

/// Sort order for columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Ascending)
    }
}

/// Core trait for read-only data access
pub trait DataProvider: Send + Sync + Debug {
    /// Get a single row by index, formatted for display/export.
    /// Returns None if the index is out of bounds
    fn get_row(&self, index: usize) -> Option<Vec<String>>;

    /// Get the column names/headers
    fn get_column_names(&self) -> Vec<String>;

    /// Get the total number of rows
    fn get_row_count(&self) -> usize;

    /// Get the total number of columns
    fn get_column_count(&self) -> usize;
}

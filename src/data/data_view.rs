use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::data::data_provider::{DataProvider, SortOrder};
use crate::data::datatable::{DataColumn, DataRow, DataTable, DataValue, Schema};
use crate::data::datavalue_compare::compare_for_type;
use crate::error::{DashError, Result};

/// Which columns to show and how to order the rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Columns to show, in display order. Empty means every column
    pub selected_columns: Vec<String>,

    /// Column to sort on. Defaults to the first selected column
    pub sort_column: Option<String>,

    pub sort_ascending: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            selected_columns: Vec::new(),
            sort_column: None,
            sort_ascending: true,
        }
    }
}

impl ViewConfig {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.sort_column = Some(column.into());
        self.sort_ascending = ascending;
        self
    }
}

/// A view over a DataTable that projects columns and sorts rows
/// without modifying the underlying data
#[derive(Debug, Clone)]
pub struct DataView {
    /// The underlying immutable data source
    source: Arc<DataTable>,

    /// Row indices in display order
    visible_rows: Vec<usize>,

    /// Column indices in display order
    visible_columns: Vec<usize>,

    /// Source index of the sort column, if sorted
    sort_column: Option<usize>,
    sort_order: SortOrder,
}

/// Project and sort `dataset` according to `config`
pub fn build_view(dataset: Arc<DataTable>, config: &ViewConfig) -> Result<DataView> {
    DataView::build(dataset, config)
}

impl DataView {
    /// Create a new view showing all data from the table in source order
    pub fn new(source: Arc<DataTable>) -> Self {
        let row_count = source.row_count();
        let col_count = source.column_count();

        Self {
            source,
            visible_rows: (0..row_count).collect(),
            visible_columns: (0..col_count).collect(),
            sort_column: None,
            sort_order: SortOrder::Ascending,
        }
    }

    /// Build a projected, sorted view from a config
    pub fn build(source: Arc<DataTable>, config: &ViewConfig) -> Result<Self> {
        let view = Self::new(source).with_columns(&config.selected_columns)?;

        let sort_column = match &config.sort_column {
            Some(name) => name.clone(),
            None => match view.column_names().into_iter().next() {
                Some(first) => first,
                // A table without columns has nothing to sort
                None => return Ok(view),
            },
        };

        view.sort_by(&sort_column, config.sort_ascending)
    }

    /// Restrict the view to the named columns, in the given order.
    /// An empty list keeps every column; repeated names keep their first position.
    pub fn with_columns<S: AsRef<str>>(mut self, columns: &[S]) -> Result<Self> {
        if columns.is_empty() {
            self.visible_columns = (0..self.source.column_count()).collect();
            return Ok(self);
        }

        let mut indices = Vec::with_capacity(columns.len());
        for name in columns {
            let name = name.as_ref();
            let idx = self
                .source
                .get_column_index(name)
                .ok_or_else(|| DashError::invalid_column(name))?;
            if indices.contains(&idx) {
                debug!(target: "data_view", "Ignoring repeated column '{}'", name);
                continue;
            }
            indices.push(idx);
        }

        self.visible_columns = indices;
        Ok(self)
    }

    /// Stable-sort rows by a visible column
    pub fn sort_by(mut self, column_name: &str, ascending: bool) -> Result<Self> {
        let column_index = self
            .source
            .get_column_index(column_name)
            .filter(|idx| self.visible_columns.contains(idx))
            .ok_or_else(|| DashError::invalid_column(column_name))?;

        let data_type = self.source.columns[column_index].data_type;
        debug!(
            target: "data_view",
            "Sorting {} rows by '{}' ({:?}, ascending={})",
            self.visible_rows.len(),
            column_name,
            data_type,
            ascending
        );

        let source = &self.source;
        // sort_by is stable, so ties keep their source order in both directions
        self.visible_rows.sort_by(|&a, &b| {
            let val_a = source.get_value(a, column_index).unwrap_or(&DataValue::Null);
            let val_b = source.get_value(b, column_index).unwrap_or(&DataValue::Null);

            let cmp = compare_for_type(val_a, val_b, &data_type);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        self.sort_column = Some(column_index);
        self.sort_order = SortOrder::from_ascending(ascending);
        Ok(self)
    }

    /// Get the number of visible rows
    pub fn row_count(&self) -> usize {
        self.visible_rows.len()
    }

    /// Get the number of visible columns
    pub fn column_count(&self) -> usize {
        self.visible_columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_rows.is_empty()
    }

    /// Get column names for visible columns
    pub fn column_names(&self) -> Vec<String> {
        self.visible_columns
            .iter()
            .map(|&idx| self.source.columns[idx].name.clone())
            .collect()
    }

    /// Column definitions of the visible columns, in view order
    pub fn schema(&self) -> Schema {
        let columns: Vec<DataColumn> = self
            .visible_columns
            .iter()
            .map(|&idx| self.source.columns[idx].clone())
            .collect();
        // Projection of a valid table cannot repeat a column
        Schema::from_validated(columns)
    }

    /// Get a row by view position
    pub fn get_row(&self, index: usize) -> Option<DataRow> {
        let row_idx = *self.visible_rows.get(index)?;

        let values = self
            .visible_columns
            .iter()
            .map(|&col_idx| {
                self.source
                    .get_value(row_idx, col_idx)
                    .cloned()
                    .unwrap_or(DataValue::Null)
            })
            .collect();

        Some(DataRow::new(values))
    }

    /// Get all visible rows
    pub fn get_rows(&self) -> Vec<DataRow> {
        (0..self.row_count()).filter_map(|i| self.get_row(i)).collect()
    }

    /// Materialize the view as a standalone table
    pub fn to_table(&self) -> DataTable {
        let mut table = DataTable::with_schema(self.source.name.clone(), &self.schema());
        table.rows = self.get_rows();
        table
    }

    /// Get the source DataTable
    pub fn source(&self) -> &DataTable {
        &self.source
    }

    /// Name of the column the rows are ordered by
    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column
            .map(|idx| self.source.columns[idx].name.as_str())
    }

    pub fn is_ascending(&self) -> bool {
        self.sort_order.is_ascending()
    }

    /// Get visible row indices into the source table
    pub fn visible_row_indices(&self) -> &[usize] {
        &self.visible_rows
    }
}

impl DataProvider for DataView {
    fn get_row(&self, index: usize) -> Option<Vec<String>> {
        DataView::get_row(self, index)
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

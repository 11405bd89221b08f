//! Column selection, stable sorting and CSV export over tabular datasets,
//! plus renderer-neutral chart specifications for the foreign-resident
//! financial product dashboard.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod table_display;

pub use data::csv_loader::{parse_csv, CsvLoader};
pub use data::data_exporter::{export_csv, CsvDownload, DataExporter};
pub use data::data_view::{build_view, DataView, ViewConfig};
pub use data::datatable::{DataColumn, DataRow, DataTable, DataType, DataValue, Schema};
pub use error::{DashError, Result};

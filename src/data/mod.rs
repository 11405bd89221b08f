//! Data layer for the DataTable/DataView architecture
//!
//! This module separates data storage (`DataTable`) from presentation
//! (`DataView`): a view projects and orders rows without copying them.

pub mod csv_loader;
pub mod data_exporter;
pub mod data_provider;
pub mod data_view;
pub mod datatable;
pub mod datavalue_compare;

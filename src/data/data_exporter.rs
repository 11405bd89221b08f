use crate::data::data_provider::DataProvider;
use crate::data::data_view::DataView;
use crate::error::{DashError, Result};
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

pub const CSV_MIME: &str = "text/csv";

/// An exported file ready to hand to a download surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvDownload {
    pub file_name: String,
    pub mime: String,
    pub data: Vec<u8>,
}

/// Handles exporting views to CSV
pub struct DataExporter;

impl DataExporter {
    /// Export data to CSV text using the DataProvider trait.
    /// Refuses to export when there are no rows.
    pub fn export_provider_to_csv(provider: &dyn DataProvider) -> Result<String> {
        let row_count = provider.get_row_count();
        if row_count == 0 {
            return Err(DashError::EmptyDataset);
        }

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(provider.get_column_names())?;
        for i in 0..row_count {
            if let Some(row) = provider.get_row(i) {
                writer.write_record(&row)?;
            }
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        let text =
            String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        info!(target: "export", "Exported {} rows to CSV", row_count);
        Ok(text)
    }

    /// Export a view and wrap it for download under `file_name`
    pub fn export_download(view: &DataView, file_name: &str, mime: &str) -> Result<CsvDownload> {
        let text = Self::export_provider_to_csv(view)?;
        Ok(CsvDownload {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            data: text.into_bytes(),
        })
    }

    /// Export a view to a file, returning the number of rows written
    pub fn export_to_path<P: AsRef<Path>>(view: &DataView, path: P) -> Result<usize> {
        let path = path.as_ref();
        let text = Self::export_provider_to_csv(view)?;
        fs::write(path, text)?;
        info!(target: "export", "Wrote {} rows to {}", view.row_count(), path.display());
        Ok(view.row_count())
    }

    /// File name with a local timestamp, e.g. `view_20241231_235959.csv`
    pub fn timestamped_file_name(prefix: &str) -> String {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        format!("{}_{}.csv", prefix, timestamp)
    }
}

/// Serialize a view to CSV text
pub fn export_csv(view: &DataView) -> Result<String> {
    DataExporter::export_provider_to_csv(view)
}

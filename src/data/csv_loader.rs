/// CSV to DataTable loader
use crate::data::datatable::{DataRow, DataTable, DataValue, Schema};
use crate::error::{DashError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub struct CsvLoader;

impl CsvLoader {
    /// Load a CSV file, inferring one type per column
    pub fn load_csv<P: AsRef<Path>>(path: P, table_name: &str) -> Result<DataTable> {
        let path = path.as_ref();
        info!(target: "csv_loader", "Loading {} into DataTable", path.display());

        let file = File::open(path)?;
        let table = Self::from_reader(file, table_name)?;

        info!(
            target: "csv_loader",
            "CSV load complete: {} rows, {} columns",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    /// Load a CSV file against a declared schema
    pub fn load_csv_with_schema<P: AsRef<Path>>(
        path: P,
        table_name: &str,
        schema: &Schema,
    ) -> Result<DataTable> {
        let path = path.as_ref();
        info!(
            target: "csv_loader",
            "Loading {} with a {}-column schema",
            path.display(),
            schema.len()
        );
        let file = File::open(path)?;
        Self::from_reader_with_schema(file, table_name, schema)
    }

    /// Read CSV from any reader, inferring column types
    pub fn from_reader<R: Read>(reader: R, table_name: &str) -> Result<DataTable> {
        let (headers, records) = Self::read_raw(reader)?;

        // Validate header names before touching the data
        let schema = Schema::untyped(headers.iter().cloned())?;

        let mut table = DataTable::with_schema(table_name, &schema);
        for record in records {
            let values = record.into_iter().map(DataValue::String).collect();
            table.add_row(DataRow::new(values))?;
        }

        table.infer_column_types();
        Ok(table)
    }

    /// Read CSV from any reader using the types declared by `schema`.
    /// The header must name exactly the schema's columns, in any order.
    pub fn from_reader_with_schema<R: Read>(
        reader: R,
        table_name: &str,
        schema: &Schema,
    ) -> Result<DataTable> {
        let (headers, records) = Self::read_raw(reader)?;
        Schema::untyped(headers.iter().cloned())?;

        if let Some(extra) = headers.iter().find(|h| schema.index_of(h).is_none()) {
            return Err(DashError::invalid_column(extra.as_str()));
        }

        let positions = schema
            .columns()
            .iter()
            .map(|column| {
                headers
                    .iter()
                    .position(|h| *h == column.name)
                    .ok_or_else(|| DashError::invalid_column(column.name.as_str()))
            })
            .collect::<Result<Vec<usize>>>()?;

        let mut table = DataTable::with_schema(table_name, schema);
        for record in records {
            let values = positions
                .iter()
                .zip(schema.columns())
                .map(|(&pos, column)| DataValue::from_string(&record[pos], &column.data_type))
                .collect();
            table.add_row(DataRow::new(values))?;
        }

        table.infer_null_counts();
        debug!(
            target: "csv_loader",
            "Parsed {} rows against schema for '{}'",
            table.row_count(),
            table_name
        );
        Ok(table)
    }

    /// Read headers and raw string records, checking that every record
    /// has as many fields as the header
    fn read_raw<R: Read>(reader: R) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() != headers.len() {
                return Err(DashError::MalformedRow {
                    row: row_idx,
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok((headers, records))
    }
}

/// Parse exported CSV text back into a table typed by `schema`
pub fn parse_csv(text: &str, schema: &Schema) -> Result<DataTable> {
    CsvLoader::from_reader_with_schema(text.as_bytes(), "parsed", schema)
}

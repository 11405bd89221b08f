use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::chart::pie::PieDetailRow;
use crate::data::data_provider::DataProvider;
use crate::data::datatable::DataValue;
use crate::data::data_view::DataView;

/// Render up to `limit` rows of a view as a terminal table
pub fn render_view(view: &DataView, limit: Option<usize>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<Cell> = view
        .column_names()
        .into_iter()
        .map(|name| {
            let marker = if view.sort_column() == Some(name.as_str()) {
                if view.is_ascending() {
                    " ▲"
                } else {
                    " ▼"
                }
            } else {
                ""
            };
            Cell::new(format!("{}{}", name, marker)).add_attribute(Attribute::Bold)
        })
        .collect();
    table.set_header(headers);

    let count = limit.unwrap_or(view.row_count()).min(view.row_count());
    for i in 0..count {
        if let Some(row) = view.get_row(i) {
            let cells: Vec<Cell> = row.values.iter().map(value_cell).collect();
            table.add_row(cells);
        }
    }

    table
}

fn value_cell(value: &DataValue) -> Cell {
    match value {
        DataValue::Integer(_) | DataValue::Float(_) => {
            Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
        }
        DataValue::Null => Cell::new("NULL").add_attribute(Attribute::Dim),
        _ => Cell::new(value.to_string()),
    }
}

/// Side table listing each pie slice with its share and count
pub fn render_pie_details(rows: &[PieDetailRow]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("").add_attribute(Attribute::Bold),
        Cell::new("비율(%)").add_attribute(Attribute::Bold),
        Cell::new("인원수(만명)").add_attribute(Attribute::Bold),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(&row.percentage).set_alignment(CellAlignment::Right),
            Cell::new(&row.count).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Row-count summary line, e.g. "12,345 rows"
pub fn row_summary(provider: &dyn DataProvider) -> String {
    format!("{} rows", format_thousands(provider.get_row_count()))
}

/// Group digits in threes for display, e.g. 1234567 -> "1,234,567"
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finrec_dash::{build_view, DataColumn, DataRow, DataTable, DataType, DataValue, ViewConfig};
use std::sync::Arc;

fn create_test_data(rows: usize) -> DataTable {
    let mut table = DataTable::new("customers");

    table.add_column(DataColumn::new("visa")).unwrap();
    table
        .add_column(DataColumn::new("income").with_type(DataType::Integer))
        .unwrap();
    table
        .add_column(DataColumn::new("deposit").with_type(DataType::Float))
        .unwrap();

    let visa_codes = ["D-2", "D-10", "E-7", "E-9", "F-2", "F-5", "F-6", "H-2"];

    for i in 0..rows {
        let row = DataRow::new(vec![
            DataValue::String(visa_codes[i % visa_codes.len()].to_string()),
            DataValue::Integer(((i * 7919) % 600) as i64),
            DataValue::Float((i % 1000) as f64 * 1.5),
        ]);
        table.add_row(row).unwrap();
    }

    table
}

fn bench_view_sort(c: &mut Criterion) {
    let table = Arc::new(create_test_data(50_000));

    c.bench_function("sort 50k rows by string", |b| {
        let config = ViewConfig::default().sorted_by("visa", true);
        b.iter(|| build_view(black_box(table.clone()), &config).unwrap())
    });

    c.bench_function("sort 50k rows by integer desc", |b| {
        let config = ViewConfig::new(["income", "visa"]).sorted_by("income", false);
        b.iter(|| build_view(black_box(table.clone()), &config).unwrap())
    });
}

criterion_group!(benches, bench_view_sort);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frame::{Column, Datum, Frame};
use style_engine::{
    style_pivot, Labels, PivotMeta, PivotTable, StatFormatter, StyleOptions, ZebraStyle,
};

/// A wide crosstab with `groups` row groups, two stat rows per group and
/// four generated value columns.
fn build_crosstab(groups: usize) -> PivotTable {
    let rows = groups * 2;
    let value_columns = ["A", "B", "C", "D"];

    let mut group_col: Vec<Datum> = Vec::with_capacity(rows);
    let mut stats_col: Vec<Datum> = Vec::with_capacity(rows);
    for i in 0..groups {
        let label = format!("G{:05}", i);
        group_col.push(label.clone().into());
        group_col.push(label.into());
        stats_col.push("n".into());
        stats_col.push("p".into());
    }

    let mut columns = vec![
        Column::new("group", group_col),
        Column::new("stats", stats_col),
    ];
    for (c, name) in value_columns.iter().enumerate() {
        let mut values: Vec<Datum> = Vec::with_capacity(rows);
        for i in 0..groups {
            values.push(((i * 7 + c * 3) as f64).into());
            values.push((100.0 * (c + 1) as f64 / (i + 2) as f64).into());
        }
        columns.push(Column::new(*name, values));
    }

    let meta = PivotMeta::wide(
        vec!["group".to_string()],
        "treatment",
        value_columns.iter().map(|s| s.to_string()).collect(),
        "stats",
    );
    PivotTable::new(Frame::from_columns(columns), meta)
}

fn bench_layout_derivation(c: &mut Criterion) {
    let labels = Labels::default();
    let formatter = StatFormatter::default();
    let options = StyleOptions {
        zebra: ZebraStyle::Stats,
        ..StyleOptions::default()
    };

    let mut group = c.benchmark_group("layout_derivation");
    for groups in [100usize, 1_000, 10_000] {
        let table = build_crosstab(groups);
        group.bench_with_input(BenchmarkId::new("grouped", groups), &table, |b, table| {
            b.iter(|| {
                let styled =
                    style_pivot(table.clone(), &labels, &formatter, &options).unwrap();
                black_box(styled);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout_derivation);
criterion_main!(benches);

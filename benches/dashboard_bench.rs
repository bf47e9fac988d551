//! Benchmarks for the dashboard startup path
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use predator_dashboard::dashboard::{render_page, PageOptions};
use predator_dashboard::data::load_predator_data_from_reader;
use predator_dashboard::{create_predator_control_chart, prepare_predator_chart_data};

fn create_test_csv(rows: usize) -> String {
    let mut csv = String::from("Year,Number of Active Traps,Pests Caught,Catch Rate\n");
    for i in 0..rows {
        let traps = 1000 + (i % 7000);
        let pests = 800 + (i % 5000);
        csv.push_str(&format!(
            "{},{},{},{:.2}\n",
            1900 + i,
            traps,
            pests,
            pests as f64 / traps as f64
        ));
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [10, 100, 1000] {
        let csv = create_test_csv(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("csv_{}", size), |b| {
            b.iter(|| load_predator_data_from_reader(black_box(csv.as_bytes())).unwrap())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let table = load_predator_data_from_reader(create_test_csv(100).as_bytes()).unwrap();
    let series = prepare_predator_chart_data(&table);
    let figure = create_predator_control_chart(&series);
    let options = PageOptions::default();

    group.bench_function("chart_100", |b| {
        b.iter(|| create_predator_control_chart(black_box(&series)))
    });

    group.bench_function("page_100", |b| {
        b.iter(|| render_page(black_box(&figure), &options).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_render);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lumbung::{
    executor::{ExecuteResult, insert::execute_insert, select::execute_select},
    storage::node::LEAF_NODE_MAX_CELLS,
    types::row::Row,
    utils::mock::TempDatabase,
};

fn fill_table(table: &mut lumbung::storage::table::Table, rows: usize) {
    for key in 0..rows as u32 {
        let row = Row::new(key, &format!("user{}", key), &format!("user{}@example.com", key));
        execute_insert(table, &row).unwrap();
    }
}

fn benchmark_insert_to_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_to_capacity");
    group.throughput(Throughput::Elements(LEAF_NODE_MAX_CELLS as u64));
    group.bench_function("fill_root_leaf", |b| {
        b.iter(|| {
            let temp_db = TempDatabase::with_prefix("bench_insert");
            let mut table = temp_db.open_table().unwrap();
            fill_table(&mut table, black_box(LEAF_NODE_MAX_CELLS));
            table.close().unwrap();
        })
    });
    group.finish();
}

fn benchmark_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");
    let temp_db = TempDatabase::with_prefix("bench_scan");
    let mut table = temp_db.open_table().unwrap();
    fill_table(&mut table, LEAF_NODE_MAX_CELLS);

    group.throughput(Throughput::Elements(LEAF_NODE_MAX_CELLS as u64));
    group.bench_function("select_all", |b| {
        b.iter(|| {
            let result = execute_select(black_box(&mut table)).unwrap();
            match result {
                ExecuteResult::Success(rows) => assert_eq!(rows.len(), LEAF_NODE_MAX_CELLS),
                other => panic!("unexpected result: {:?}", other),
            }
        })
    });
    group.finish();
    table.close().unwrap();
}

criterion_group!(benches, benchmark_insert_to_capacity, benchmark_full_scan);
criterion_main!(benches);

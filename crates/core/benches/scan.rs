use balance_probe_core::{CheckpointTable, scan_text};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn jsx_like_source(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 4 {
            0 => "      <div className=\"tab\">{items.map((item) => (\n",
            1 => "        <span>{item.label}</span>\n",
            2 => "      ))}</div>\n",
            _ => "      {/* spacer */}\n",
        })
        .collect()
}

fn bench_scan(c: &mut Criterion) {
    let source = jsx_like_source(3_000);
    let table = CheckpointTable::admin_page();

    c.bench_function("scan_admin_page_sized_input", |b| {
        b.iter(|| scan_text(black_box(&source), black_box(&table)));
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);

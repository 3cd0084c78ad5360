use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panelkit_widgets::{label, GridLayoutStrategy, LayoutStrategy, VerticalStackStrategy};

fn bench_grid_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_assembly");

    for count in [10usize, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut grid = GridLayoutStrategy::new(0, 3);
                for i in 0..count {
                    grid.add(label().text(format!("Item {}", i)).finalize());
                    if i % 10 == 9 {
                        grid.add_separator();
                    }
                }
                let panel = grid.build();
                let rows = panel.read().effective_rows();
                black_box(rows)
            });
        });
    }

    group.finish();
}

fn bench_stack_assembly(c: &mut Criterion) {
    c.bench_function("stack_assembly_100", |b| {
        b.iter(|| {
            let mut stack = VerticalStackStrategy::with_spacing(4);
            for i in 0..100 {
                stack.add(label().text(format!("Row {}", i)).finalize());
                stack.add_gap(black_box(6));
            }
            black_box(stack.spacer_height())
        });
    });
}

criterion_group!(benches, bench_grid_assembly, bench_stack_assembly);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{Grid, GridConfig, Offset, PathWaypoint, Point, SnappingMode};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapping");
    let grid = Grid::new(GridConfig::default()).unwrap();
    let point = Point::new(1234.5, -678.9);

    let center = SnappingMode::builder().center().build();
    group.bench_function("center", |b| {
        b.iter(|| grid.snapped_point(black_box(point), center, 1))
    });
    let everything =
        SnappingMode::from_bits(SnappingMode::VALID_BITS).unwrap();
    group.bench_function("every feature", |b| {
        b.iter(|| grid.snapped_point(black_box(point), everything, 1))
    });
    group.bench_function("every feature, resolution 4", |b| {
        b.iter(|| grid.snapped_point(black_box(point), everything, 4))
    });
    group.finish();

    let mut group = c.benchmark_group("path");
    let waypoints = [
        PathWaypoint::new(Offset::new(0, 0)),
        PathWaypoint::new(Offset::new(40, 25)),
        PathWaypoint::new(Offset::new(-10, 60)),
    ];
    group.bench_function("measure with cost", |b| {
        b.iter(|| {
            grid.measure_path_with_cost(black_box(&waypoints), |_, _, d| d)
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

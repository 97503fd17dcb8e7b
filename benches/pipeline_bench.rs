use contour_bridge::simplify::simplify;
use contour_bridge::{convert_shapes, ConversionConfig, Path, Shape};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_types::Coord;

// A grid of "O" glyphs: each path holds an outline and a counter as separate subpaths.
fn generate_glyphs(n: usize) -> Vec<Shape<Path>> {
    let mut shapes = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let center = Coord { x: col as f64 * 30.0, y: row as f64 * 30.0 };
            let path = Path::builder().circle(center, 12.0).circle(center, 6.0).build();
            shapes.push(Shape::filled(path));
        }
    }
    shapes
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    let config = ConversionConfig::new()
        .with_scale(1.0)
        .with_tolerance(Some(0.02))
        .with_subsampling(4.0)
        .with_trace_width(0.2);

    for size in [2, 5, 10].iter() {
        group.bench_with_input(BenchmarkId::new("glyph_grid", size), size, |b, &size| {
            let shapes = generate_glyphs(size);
            b.iter(|| convert_shapes(&shapes, &config).unwrap());
        });
    }
    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let points: Vec<Coord<f64>> = (0..10_000)
        .map(|i| {
            let t = i as f64 * 0.01;
            Coord { x: t, y: (t * 3.0).sin() * 5.0 }
        })
        .collect();

    let mut group = c.benchmark_group("simplify");
    group.bench_function("prefiltered", |b| b.iter(|| simplify(&points, 0.01, false)));
    group.bench_function("high_quality", |b| b.iter(|| simplify(&points, 0.01, true)));
    group.finish();
}

criterion_group!(benches, bench_convert, bench_simplify);
criterion_main!(benches);

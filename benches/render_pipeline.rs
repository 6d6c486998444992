use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_canvas::{
    ColourSchemeKinds, FractalKinds, FractalRenderer, RasterSurface, RenderParameters,
    SurfaceSize,
};

fn renderer(kind: FractalKinds, depth: u32) -> FractalRenderer<RasterSurface> {
    let parameters = RenderParameters::new(kind, depth, ColourSchemeKinds::Rainbow, 1.0)
        .expect("benchmark parameters are valid");

    FractalRenderer::with_surface(RasterSurface::new(SurfaceSize::default()))
        .with_parameters(parameters)
}

/// Benchmark: full Mandelbrot pass on the default 800x600 surface
fn bench_mandelbrot_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandelbrot_pass");
    group.sample_size(10);

    for depth in [2, 5, 10] {
        let mut renderer = renderer(FractalKinds::Mandelbrot, depth);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(renderer.render().expect("surface is attached")))
        });
    }

    group.finish();
}

/// Benchmark: full Koch pass, 4^depth segments rasterised
fn bench_koch_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("koch_pass");

    for depth in [3, 5, 7] {
        let mut renderer = renderer(FractalKinds::Koch, depth);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(renderer.render().expect("surface is attached")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mandelbrot_pass, bench_koch_pass);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use fractal_viewer::{
    EscapeEngine, FractalKind, HueRampColourMap, PixelBuffer, ViewTransform, render_frame,
};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const MAX_ITERATIONS: u32 = 150;

fn bench_render_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pipeline");

    for &kind in FractalKind::ALL {
        group.bench_function(kind.display_name(), |b| {
            let engine = EscapeEngine::default();
            let colour_map = HueRampColourMap::new(MAX_ITERATIONS).unwrap();
            let mut buffer = PixelBuffer::new(WIDTH, HEIGHT).unwrap();

            b.iter(|| {
                let mut view = ViewTransform::centered(WIDTH, HEIGHT);
                render_frame(
                    black_box(&mut view),
                    &engine,
                    kind,
                    MAX_ITERATIONS,
                    &colour_map,
                    &mut buffer,
                )
                .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);

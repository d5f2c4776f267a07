#[macro_use]
extern crate criterion;
extern crate spirobrot;

use criterion::Criterion;
use spirobrot::{CurveParams, FractalRenderer, PixelBuffer, SpiroRenderer};

fn mandel_sweep(c: &mut Criterion) {
    let renderer = FractalRenderer::default();
    let mut buffer = PixelBuffer::new(256, 256).unwrap();
    c.bench_function("mandel 256x256", move |b| b.iter(|| renderer.render(&mut buffer)));
}

fn mandel_sweep_threaded(c: &mut Criterion) {
    let renderer = FractalRenderer::default();
    let mut buffer = PixelBuffer::new(256, 256).unwrap();
    c.bench_function("mandel 256x256 threaded", move |b| {
        b.iter(|| renderer.render_threaded(&mut buffer, 4).unwrap())
    });
}

fn spiro_exposure(c: &mut Criterion) {
    let renderer = SpiroRenderer::new(
        CurveParams {
            period: 2,
            ..CurveParams::default()
        },
        Default::default(),
    );
    let mut buffer = PixelBuffer::new(512, 512).unwrap();
    c.bench_function("spiro 40000 samples", move |b| {
        b.iter(|| {
            buffer.clear();
            renderer.render(&mut buffer).unwrap()
        })
    });
}

criterion_group!(benches, mandel_sweep, mandel_sweep_threaded, spiro_exposure);
criterion_main!(benches);

//! Criterion benchmarks for `deskview` transitions, easing and overlay placement.

// criterion builder methods return `&mut Self` and its macros generate undocumented fns.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deskview::camera::{CameraModeId, CameraPose, CameraTransition};
use deskview::overlay::ScreenSync;
use deskview::util::easing::EasingFunction;
use deskview::viewport::Viewport;
use glam::{Vec2, Vec3};
use std::time::Duration;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::QuadraticInOut;
    c.bench_function("quadratic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn transition_sample_benchmark(c: &mut Criterion) {
    let transition = CameraTransition::new(
        CameraPose::looking_at(Vec3::new(0.0, 5.0, 9.0), Vec3::new(0.0, 3.5, 0.0)),
        CameraPose::looking_at(Vec3::new(0.0, 3.5, 1.2), Vec3::new(0.0, 3.5, 0.0)),
        CameraModeId::Screen,
        0.0,
        Duration::from_millis(1000),
        EasingFunction::DEFAULT,
    );
    c.bench_function("transition_sample", |b| {
        b.iter(|| black_box(transition.sample(black_box(420.0))))
    });
}

fn overlay_place_benchmark(c: &mut Criterion) {
    let sync = ScreenSync::default();
    let mut group = c.benchmark_group("overlay_place");
    for (w, h) in [(1920.0, 1080.0), (800.0, 600.0), (30.0, 30.0)] {
        let viewport = Viewport::new(w, h);
        group.bench_function(format!("{w}x{h}"), |b| {
            b.iter(|| {
                black_box(sync.place(black_box(Vec2::new(w * 0.9, h * 0.1)), &viewport))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    transition_sample_benchmark,
    overlay_place_benchmark
);
criterion_main!(benches);

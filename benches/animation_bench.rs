//! Benchmarks for easing evaluation, phased folder sampling and full engine
//! frames.
#![allow(missing_docs)]

use cabinet::animation::{PhasedMotion, PhasedMotionConfig};
use cabinet::engine::command::CabinetCommand;
use cabinet::scene::{ItemId, SceneNodes};
use cabinet::util::easing::EasingFunction;
use cabinet::CabinetEngine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    let _ = c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn phased_sample_benchmark(c: &mut Criterion) {
    let motion = PhasedMotion::new(
        Vec3::new(0.0, 0.0, -0.3),
        PhasedMotionConfig::default(),
    );

    let mut group = c.benchmark_group("phased_sample");
    for p in [0.2_f32, 0.55, 0.85] {
        let _ = group.bench_function(format!("forward_{p}"), |b| {
            b.iter(|| black_box(motion.sample(black_box(p))));
        });
        let _ = group.bench_function(format!("reverse_{p}"), |b| {
            b.iter(|| black_box(motion.sample_reverse(black_box(p))));
        });
    }
    group.finish();
}

fn engine_tick_benchmark(c: &mut Criterion) {
    let mut engine = CabinetEngine::new();
    let mut scene = SceneNodes::from_layout(engine.layout());
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 1 });
    let _ = engine.execute(CabinetCommand::ToggleFolder {
        id: ItemId::new(1, 1),
    });

    let _ = c.bench_function("engine_tick", |b| {
        b.iter(|| black_box(engine.tick(black_box(1.0 / 60.0), &mut scene)));
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    phased_sample_benchmark,
    engine_tick_benchmark
);
criterion_main!(benches);

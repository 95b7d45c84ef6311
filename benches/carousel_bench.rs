//! Benchmarks for layout math and a simulated carousel cycle.
#![allow(missing_docs)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use vitrine::carousel::CarouselController;
use vitrine::content::Palette;
use vitrine::layout::{visible_window, Breakpoint, Geometry, Viewport};
use vitrine::options::{CarouselOptions, LayoutOptions};
use vitrine::schedule::ManualScheduler;
use vitrine::view::TrackView;

fn geometry_benchmark(c: &mut Criterion) {
    let layout = LayoutOptions::default();
    let _ = c.bench_function("geometry_compute", |b| {
        b.iter(|| {
            Geometry::compute(
                black_box(Breakpoint::Desktop),
                black_box(1920.0),
                &layout,
            )
        });
    });
}

fn window_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_window");
    for side_count in [3_usize, 6, 12] {
        let _ = group.bench_function(format!("{side_count}_per_side"), |b| {
            b.iter(|| visible_window(black_box(5), 8, side_count));
        });
    }
    group.finish();
}

fn cycle_benchmark(c: &mut Criterion) {
    let palette = Palette::brand();
    let _ = c.bench_function("carousel_ten_cycles", |b| {
        b.iter(|| {
            let mut sched = ManualScheduler::immediate_frames();
            let mut carousel = CarouselController::new(
                palette.len(),
                Viewport::new(1440.0, Breakpoint::Desktop),
                CarouselOptions::default(),
                LayoutOptions::default(),
            );
            carousel.mount(&mut sched);
            sched.advance(Duration::from_secs(24), &mut carousel);
            black_box(carousel.hero_index())
        });
    });

    let carousel = CarouselController::new(
        palette.len(),
        Viewport::new(1440.0, Breakpoint::Desktop),
        CarouselOptions::default(),
        LayoutOptions::default(),
    );
    let _ = c.bench_function("track_view_build", |b| {
        b.iter(|| TrackView::build(&carousel, &palette, black_box(Duration::ZERO)));
    });
}

criterion_group!(benches, geometry_benchmark, window_benchmark, cycle_benchmark);
criterion_main!(benches);

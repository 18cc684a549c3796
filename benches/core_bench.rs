use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floor_plan_editor::{
    extrude, snap_to_grid, AppController, AppState, PlanBuilder, SegmentStore, WallSegment,
};
use glam::Vec2;
use std::hint::black_box;

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 1000) as f32 + 0.37;
            let y = ((i * 7) % 1000) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

/// Offene Zickzack-Kette ohne Rückkehr zum Startpunkt.
fn build_synthetic_walls(count: usize) -> Vec<WallSegment> {
    (0..count)
        .map(|i| {
            let x = i as f32 * 20.0;
            let y = if i % 2 == 0 { 0.0 } else { 40.0 };
            WallSegment::new(Vec2::new(x, y), Vec2::new(x + 20.0, 40.0 - y))
        })
        .collect()
}

fn bench_snapping(c: &mut Criterion) {
    let points = build_query_points(1024);

    c.bench_function("snap_to_grid_batch", |b| {
        b.iter(|| {
            let mut sum = Vec2::ZERO;
            for point in &points {
                sum += snap_to_grid(black_box(*point), black_box(20.0));
            }
            black_box(sum)
        })
    });
}

fn bench_plan_builder(c: &mut Criterion) {
    let clicks: Vec<Vec2> = (0..1000)
        .map(|i| Vec2::new(i as f32 * 20.0 + 3.0, ((i % 2) * 40) as f32 + 1.0))
        .collect();

    c.bench_function("plan_builder_1000_clicks", |b| {
        b.iter(|| {
            let mut builder = PlanBuilder::new();
            let mut store = SegmentStore::new();
            for click in &clicks {
                builder.add_point(black_box(*click), &mut store);
            }
            black_box(store.len())
        })
    });
}

fn bench_extrusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrusion");

    for &wall_count in &[100usize, 10_000usize] {
        let walls = build_synthetic_walls(wall_count);
        group.bench_with_input(BenchmarkId::new("extrude", wall_count), &walls, |b, walls| {
            b.iter(|| black_box(extrude(black_box(walls), 250.0).len()))
        });
    }

    group.finish();
}

fn bench_render_scene(c: &mut Criterion) {
    let mut state = AppState::new();
    for wall in build_synthetic_walls(1000) {
        state.segments.append(wall);
    }
    let controller = AppController::new();

    c.bench_function("render_scene_1000_walls", |b| {
        b.iter(|| black_box(controller.build_render_scene(black_box(&state)).labels.len()))
    });
}

criterion_group!(
    core_benches,
    bench_snapping,
    bench_plan_builder,
    bench_extrusion,
    bench_render_scene
);
criterion_main!(core_benches);

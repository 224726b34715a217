mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use mag_seed::prelude::*;

fn film_mesh(n: usize) -> MeshGeometry {
    MeshGeometry::new([n, n, 1], DVec3::new(4e-9, 4e-9, 3e-9))
}

fn sweep<F: Field + ?Sized>(field: &F, positions: &[DVec3]) -> DVec3 {
    let mut acc = DVec3::ZERO;
    for &p in positions {
        acc += field.at(black_box(p));
    }
    acc
}

fn stacked_vortex(mesh: &MeshGeometry, depth: usize) -> BoxedField {
    let mut field: BoxedField = Vortex::new(mesh, 1, 1).boxed();
    for i in 0..depth {
        let offset = DVec3::new(2e-9 * (i + 1) as f64, -1e-9, 0.0);
        field = field.translate(offset).rotate_z(0.35).boxed();
    }
    field
}

fn texture_benches(c: &mut Criterion) {
    let mesh = film_mesh(64);
    let positions: Vec<DVec3> = mesh.cell_centers().collect();

    let mut group = c.benchmark_group("texture/at");
    group.throughput(common::elements_throughput(positions.len()));

    let uniform = Uniform::new(DVec3::X);
    group.bench_function("uniform", |b| {
        b.iter(|| black_box(sweep(&uniform, &positions)));
    });

    let vortex = Vortex::new(&mesh, 1, 1);
    group.bench_function("vortex", |b| {
        b.iter(|| black_box(sweep(&vortex, &positions)));
    });

    let skyrmion = NeelSkyrmion::new(&mesh, 1, 1);
    group.bench_function("neel_skyrmion", |b| {
        b.iter(|| black_box(sweep(&skyrmion, &positions)));
    });

    let helical = Helical::new(70e-9, 1.0, 0.0);
    group.bench_function("helical", |b| {
        b.iter(|| black_box(sweep(&helical, &positions)));
    });

    let hashed = HashedRandomTexture::new(42);
    group.bench_function("hashed_random", |b| {
        b.iter(|| black_box(sweep(&hashed, &positions)));
    });

    group.finish();
}

fn combinator_benches(c: &mut Criterion) {
    let mesh = film_mesh(64);
    let positions: Vec<DVec3> = mesh.cell_centers().collect();

    let mut group = c.benchmark_group("combinator/stack");
    group.throughput(common::elements_throughput(positions.len()));

    for &depth in &[1usize, 2, 4, 8] {
        let field = stacked_vortex(&mesh, depth);
        group.bench_with_input(
            BenchmarkId::new("translate_rotate", depth),
            &depth,
            |b, _| {
                b.iter(|| black_box(sweep(field.as_ref(), &positions)));
            },
        );
    }

    let pair = Vortex::new(&mesh, 1, 1)
        .translate(DVec3::new(-60e-9, 0.0, 0.0))
        .superpose(
            1.0,
            Vortex::new(&mesh, -1, -1).translate(DVec3::new(60e-9, 0.0, 0.0)),
        );
    group.bench_function("superposed_pair", |b| {
        b.iter(|| black_box(sweep(&pair, &positions)));
    });

    group.finish();
}

fn sample_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample/grid");

    for &n in &[32usize, 64, 128] {
        let mesh = film_mesh(n);
        group.throughput(common::cells_throughput(&mesh));

        let field = Vortex::new(&mesh, 1, 1);
        group.bench_with_input(BenchmarkId::new("vortex", n), &n, |b, _| {
            let mut buffer = SampleBuffer::zeroed(mesh.cells);
            b.iter(|| {
                sample_into(&field, &mesh, &mut buffer).expect("sample ok");
                black_box(buffer.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = texture_benches, combinator_benches, sample_benches
}
criterion_main!(benches);

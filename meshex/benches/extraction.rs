//! Criterion benchmarks for surface extraction throughput.

use burn::backend::NdArray;
use burn::prelude::*;
use burn::tensor::TensorData;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use meshex::prelude::*;

type BenchBackend = NdArray;

/// Sphere SDF samples over a resolved grid.
fn sphere_field(octree_resolution: usize) -> Tensor<BenchBackend, 3> {
    let stats = Bounds::Symmetric(1.0).resolve(octree_resolution).unwrap();
    let [rx, ry, rz] = stats.grid_size;

    let mut values = Vec::with_capacity(stats.sample_count());
    for x in 0..rx {
        for y in 0..ry {
            for z in 0..rz {
                let p = stats.grid_to_world(Point3::new(x as f32, y as f32, z as f32));
                values.push(p.length() - 0.5);
            }
        }
    }
    Tensor::from_data(TensorData::new(values, [rx, ry, rz]), &Default::default())
}

fn bench_marching_cubes(c: &mut Criterion) {
    let mut group = c.benchmark_group("marching_cubes");

    for resolution in [32usize, 64, 128] {
        let field = sphere_field(resolution);
        let params = ExtractParams::new(resolution).with_bounds(1.0);
        let cells = resolution * resolution * resolution;

        group.throughput(Throughput::Elements(cells as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |b, _| {
                let mut extractor = McExtractor::new();
                b.iter(|| {
                    black_box(
                        SurfaceExtractor::<BenchBackend>::extract(
                            &mut extractor,
                            black_box(&field),
                            &params,
                        )
                        .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let resolution = 32usize;
    let field = sphere_field(resolution);
    let r = resolution + 1;
    let batch: Tensor<BenchBackend, 4> = Tensor::stack::<4>(vec![field.clone(), field.clone(), field], 0);
    let params = ExtractParams::new(resolution).with_bounds(1.0);

    c.bench_function("batch_of_three", |b| {
        let mut driver = BatchExtractor::<BenchBackend>::new(Algorithm::MarchingCubes);
        b.iter(|| black_box(driver.run_batch(black_box(&batch), &params)))
    });

    assert_eq!(batch.dims(), [3, r, r, r]);
}

criterion_group!(benches, bench_marching_cubes, bench_batch);
criterion_main!(benches);

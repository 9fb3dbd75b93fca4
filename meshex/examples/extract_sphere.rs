//! Example: Extracting meshes from a batch of analytic scalar fields.
//!
//! This example demonstrates the full extraction workflow:
//! 1. Sample a batch of sphere SDFs onto dense grids (standing in for the
//!    output of an upstream model)
//! 2. Configure a batch driver from a named algorithm
//! 3. Run the batch, with one deliberately degenerate item
//! 4. Inspect per-item outcomes
//!
//! # Usage
//!
//! ```bash
//! cargo run -p meshex --example extract_sphere
//! ```

use burn::backend::NdArray;
use burn::prelude::*;
use burn::tensor::TensorData;

use meshex::prelude::*;

type MyBackend = NdArray;

fn sphere_values(stats: &GridStatistics, radius: f32) -> Vec<f32> {
    let [rx, ry, rz] = stats.grid_size;
    let mut values = Vec::with_capacity(stats.sample_count());
    for x in 0..rx {
        for y in 0..ry {
            for z in 0..rz {
                let p = stats.grid_to_world(Point3::new(x as f32, y as f32, z as f32));
                values.push(p.length() - radius);
            }
        }
    }
    values
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = ExtractorConfig::new("dmc".to_string(), 64)
        .with_bounds(1.0)
        .with_mc_level(0.0);
    let params = config.params();
    let stats = params.bounds.resolve(params.octree_resolution).unwrap();
    let [rx, ry, rz] = stats.grid_size;

    // Two valid spheres plus one field with no surface crossing.
    let items = vec![
        sphere_values(&stats, 0.5),
        sphere_values(&stats, 0.25),
        vec![1.0; stats.sample_count()],
    ];
    let n = items.len();
    let values: Vec<f32> = items.into_iter().flatten().collect();
    let batch = Tensor::<MyBackend, 4>::from_data(
        TensorData::new(values, [n, rx, ry, rz]),
        &Default::default(),
    );

    let mut driver = BatchExtractor::<MyBackend>::from_config(&config).unwrap();
    println!(
        "Running `{}` extraction over a batch of {n} fields ({rx}x{ry}x{rz})",
        driver.algorithm()
    );

    for outcome in driver.run_batch(&batch, &params) {
        match outcome {
            ExtractionOutcome::Mesh(mesh) => {
                let (min, max) = mesh.bbox().unwrap();
                println!(
                    "  mesh: {} vertices, {} faces, bbox {:?} .. {:?}",
                    mesh.vertex_count(),
                    mesh.face_count(),
                    min.as_array(),
                    max.as_array()
                );
            }
            ExtractionOutcome::Failed(failure) => {
                println!("  item {} failed: {}", failure.index, failure.error);
            }
        }
    }
}

//! Integration tests for batch extraction and per-item failure isolation.

use burn::backend::NdArray;
use burn::prelude::*;
use burn::tensor::TensorData;

use meshex::prelude::*;

type TestBackend = NdArray;

/// Sphere SDF samples (negative inside) for one batch item.
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

/// Stack per-item sample buffers into an `[N, R, R, R]` batch tensor.
fn stack_batch(stats: &GridStatistics, items: Vec<Vec<f32>>) -> Tensor<TestBackend, 4> {
    let [rx, ry, rz] = stats.grid_size;
    let n = items.len();
    let values: Vec<f32> = items.into_iter().flatten().collect();
    Tensor::from_data(
        TensorData::new(values, [n, rx, ry, rz]),
        &Default::default(),
    )
}

#[test]
fn test_failing_item_does_not_abort_the_batch() {
    // Item 1 is an all-zero field with no iso-crossing; items 0 and 2 are
    // valid spheres. The batch must return three outcomes in order, with
    // only item 1 marked failed.
    let stats = Bounds::Symmetric(1.0).resolve(16).unwrap();
    let batch = stack_batch(
        &stats,
        vec![
            sphere_values(&stats, 0.5),
            vec![0.0; stats.sample_count()],
            sphere_values(&stats, 0.3),
        ],
    );
    let params = ExtractParams::new(16).with_bounds(1.0);

    let mut driver = BatchExtractor::<TestBackend>::new(Algorithm::MarchingCubes);
    let outcomes = driver.run_batch(&batch, &params);

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_mesh());
    assert!(!outcomes[1].is_mesh());
    assert!(outcomes[2].is_mesh());

    for outcome in [&outcomes[0], &outcomes[2]] {
        let mesh = outcome.mesh().unwrap();
        assert!(!mesh.is_empty());
        mesh.validate().unwrap();
    }

    // The failure carries its position and reason, not just a marker.
    let failure = outcomes[1].failure().unwrap();
    assert_eq!(failure.index, 1);
    assert!(matches!(
        failure.error,
        ExtractError::Core(CoreError::EmptySurface)
    ));
}

#[test]
fn test_degenerate_field_returns_failure_marker() {
    // An all-positive field never crosses the iso-level; the batch call
    // still returns.
    let stats = Bounds::Symmetric(1.0).resolve(8).unwrap();
    let batch = stack_batch(&stats, vec![vec![1.0; stats.sample_count()]]);
    let params = ExtractParams::new(8).with_bounds(1.0);

    let mut driver = BatchExtractor::<TestBackend>::new(Algorithm::MarchingCubes);
    let outcomes = driver.run_batch(&batch, &params);

    assert_eq!(outcomes.len(), 1);
    let failure = outcomes[0].failure().unwrap();
    assert!(matches!(
        failure.error,
        ExtractError::Core(CoreError::NoSurfaceCrossing { .. })
    ));
}

#[test]
fn test_outcomes_preserve_input_order() {
    // Spheres of distinct radii come back in submission order.
    let stats = Bounds::Symmetric(1.0).resolve(16).unwrap();
    let radii = [0.3f32, 0.5, 0.7];
    let batch = stack_batch(
        &stats,
        radii.iter().map(|&r| sphere_values(&stats, r)).collect(),
    );
    let params = ExtractParams::new(16).with_bounds(1.0);

    let mut driver = BatchExtractor::<TestBackend>::new(Algorithm::MarchingCubes);
    let outcomes = driver.run_batch(&batch, &params);

    let mut last_extent = 0.0f32;
    for outcome in &outcomes {
        let (min, max) = outcome.mesh().unwrap().bbox().unwrap();
        let extent = (max - min).length();
        assert!(
            extent > last_extent,
            "radii should increase with batch order"
        );
        last_extent = extent;
    }
}

#[test]
fn test_driver_from_config() {
    let stats = Bounds::Symmetric(1.0).resolve(16).unwrap();
    let batch = stack_batch(&stats, vec![sphere_values(&stats, 0.5)]);

    let config = ExtractorConfig::new("mc".to_string(), 16).with_bounds(1.0);
    let mut driver = BatchExtractor::<TestBackend>::from_config(&config).unwrap();
    assert_eq!(driver.algorithm(), Algorithm::MarchingCubes);

    let outcomes = driver.run_batch(&batch, &config.params());
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_mesh());
}

#[test]
fn test_config_rejects_unknown_algorithm() {
    let config = ExtractorConfig::new("octree".to_string(), 16);
    assert!(BatchExtractor::<TestBackend>::from_config(&config).is_err());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_batch_matches_sequential() {
    let stats = Bounds::Symmetric(1.0).resolve(16).unwrap();
    let batch = stack_batch(
        &stats,
        vec![
            sphere_values(&stats, 0.5),
            vec![1.0; stats.sample_count()],
            sphere_values(&stats, 0.3),
        ],
    );
    let params = ExtractParams::new(16).with_bounds(1.0);

    let mut driver = BatchExtractor::<TestBackend>::new(Algorithm::MarchingCubes);
    let sequential = driver.run_batch(&batch, &params);
    let parallel = driver.run_batch_parallel(&batch, &params);

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.is_mesh(), p.is_mesh());
        if let (Some(sm), Some(pm)) = (s.mesh(), p.mesh()) {
            assert_eq!(sm, pm);
        }
    }
}

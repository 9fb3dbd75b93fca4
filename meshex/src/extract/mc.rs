//! Classic marching cubes extractor.

use burn::prelude::*;

use crate::error::Result;
use crate::extract::{ExtractParams, SurfaceExtractor};
use crate::field;
use meshex_core::{extract_indexed, MeshBuffers, Point3};

/// Classic marching cubes over a dense scalar field.
///
/// Runs the table-driven kernel at `iso_level`, then remaps the grid-index
/// vertices into world space through the resolved bounds. Faces pass through
/// unchanged into owned storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct McExtractor;

impl McExtractor {
    /// Create a classic marching cubes extractor.
    pub fn new() -> Self {
        Self
    }
}

impl<B: Backend> SurfaceExtractor<B> for McExtractor {
    fn extract(&mut self, field: &Tensor<B, 3>, params: &ExtractParams) -> Result<MeshBuffers> {
        let stats = params.bounds.resolve(params.octree_resolution)?;
        field::expect_cubic(field, stats.grid_size[0])?;

        let values = field::read_field(field)?;
        let mut mesh = extract_indexed(&values, stats.grid_size, params.iso_level)?;

        for v in &mut mesh.vertices {
            *v = stats.grid_to_world(Point3::from(*v)).as_array();
        }

        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use burn::backend::NdArray;
    use burn::tensor::TensorData;

    type TestBackend = NdArray;

    #[test]
    fn test_shape_mismatch_is_reported() {
        let device = Default::default();
        let field = Tensor::<TestBackend, 3>::zeros([4, 4, 4], &device);
        let params = ExtractParams::new(8);

        let err = SurfaceExtractor::extract(&mut McExtractor::new(), &field, &params).unwrap_err();
        assert!(matches!(err, ExtractError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_vertices_are_remapped_to_world_space() {
        // Plane x = 1.5 in a 3x3x3 grid with symmetric bounds 1.0: world
        // x = 1.5 / 3 * 2 - 1 = 0.0.
        let device = Default::default();
        let r = 3;
        let mut values = vec![0.0f32; r * r * r];
        for x in 0..r {
            for y in 0..r {
                for z in 0..r {
                    values[(x * r + y) * r + z] = x as f32 - 1.5;
                }
            }
        }
        let field =
            Tensor::<TestBackend, 3>::from_data(TensorData::new(values, [r, r, r]), &device);
        let params = ExtractParams::new(2).with_bounds(1.0);

        let mesh = SurfaceExtractor::extract(&mut McExtractor::new(), &field, &params).unwrap();
        assert!(!mesh.is_empty());
        for v in &mesh.vertices {
            assert!(v[0].abs() < 1e-6, "expected world x = 0, got {}", v[0]);
        }
    }
}

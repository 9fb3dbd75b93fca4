//! Surface extraction over tensor scalar fields.
//!
//! Every algorithm variant implements [`SurfaceExtractor`] and receives the
//! same [`ExtractParams`], ignoring whatever it does not need. This is what
//! lets the batch driver treat variants polymorphically.

pub mod dmc;
pub mod mc;
pub mod registry;

use burn::prelude::*;

use crate::error::Result;
use meshex_core::{Bounds, MeshBuffers};

pub use dmc::{DmcExtractor, DmcPath};
pub use mc::McExtractor;
pub use registry::{Algorithm, ALGORITHMS};

/// Parameters forwarded uniformly to every extractor variant.
///
/// Variants accept the full set and ignore fields they do not use: the
/// classic marching cubes path reads `iso_level` and `bounds`, the dual
/// marching cubes path only `octree_resolution`. Its fallback needs
/// `bounds`, and which path runs is only known after the first call, so
/// callers should always populate everything.
#[derive(Debug, Clone)]
pub struct ExtractParams {
    /// Iso-level defining the extracted surface (classic marching cubes).
    pub iso_level: f32,
    /// Bounding box of the sampled volume.
    pub bounds: Bounds,
    /// Number of octree cells per axis; the grid has one more vertex.
    pub octree_resolution: usize,
}

impl ExtractParams {
    /// Create parameters with the pipeline defaults: iso-level `0.0` and a
    /// symmetric `1.01` box.
    pub fn new(octree_resolution: usize) -> Self {
        Self {
            iso_level: 0.0,
            bounds: Bounds::Symmetric(1.01),
            octree_resolution,
        }
    }

    /// Set the iso-level.
    pub fn with_iso_level(mut self, iso_level: f32) -> Self {
        self.iso_level = iso_level;
        self
    }

    /// Set the bounding box.
    pub fn with_bounds(mut self, bounds: impl Into<Bounds>) -> Self {
        self.bounds = bounds.into();
        self
    }

    /// Number of grid vertices per axis implied by the resolution.
    #[inline]
    pub fn grid_vertices(&self) -> usize {
        self.octree_resolution + 1
    }
}

/// A surface extraction algorithm over a single scalar field.
///
/// Takes `&mut self` because the dual marching cubes variant memoizes its
/// backend probe on the instance.
pub trait SurfaceExtractor<B: Backend> {
    /// Extract a triangle mesh from one scalar field of shape `[R, R, R]`
    /// with `R = octree_resolution + 1`.
    fn extract(&mut self, field: &Tensor<B, 3>, params: &ExtractParams) -> Result<MeshBuffers>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = ExtractParams::new(32);
        assert_eq!(params.iso_level, 0.0);
        assert_eq!(params.bounds, Bounds::Symmetric(1.01));
        assert_eq!(params.grid_vertices(), 33);
    }

    #[test]
    fn test_params_builders() {
        let params = ExtractParams::new(16)
            .with_iso_level(0.5)
            .with_bounds([-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]);

        assert_eq!(params.iso_level, 0.5);
        assert!(matches!(params.bounds, Bounds::Aabb(_)));
    }
}

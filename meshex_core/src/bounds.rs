//! Bounding-box resolution and grid-to-world coordinate mapping.
//!
//! A scalar field is sampled on a regular lattice of grid *vertices*; the
//! bounding box states where that lattice sits in world space. This module
//! resolves a bounds specification into [`GridStatistics`] and maps positions
//! from grid-index space into world coordinates.

use crate::error::CoreError;
use crate::types::Point3;

/// A bounding-box specification for the sampled volume.
///
/// Either a single scalar `b`, interpreted as the symmetric box
/// `[-b, -b, -b, b, b, b]`, or an explicit axis-aligned box given as
/// `[minx, miny, minz, maxx, maxy, maxz]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// Symmetric box `[-b, b]` on every axis.
    Symmetric(f32),
    /// Explicit box `[minx, miny, minz, maxx, maxy, maxz]`.
    Aabb([f32; 6]),
}

impl Bounds {
    /// Expand to the explicit 6-component form.
    #[inline]
    pub fn to_aabb(self) -> [f32; 6] {
        match self {
            Bounds::Symmetric(b) => [-b, -b, -b, b, b, b],
            Bounds::Aabb(aabb) => aabb,
        }
    }

    /// Resolve this specification against an octree resolution.
    ///
    /// The grid has `octree_resolution + 1` sample points per axis: marching
    /// cubes operates on grid vertices, one more than the number of cells.
    ///
    /// # Errors
    /// [`CoreError::ZeroResolution`] if `octree_resolution` is zero, and
    /// [`CoreError::DegenerateBounds`] if some axis has `max <= min`.
    pub fn resolve(self, octree_resolution: usize) -> Result<GridStatistics, CoreError> {
        if octree_resolution == 0 {
            return Err(CoreError::ZeroResolution);
        }

        let aabb = self.to_aabb();
        for axis in 0..3 {
            if aabb[axis + 3] <= aabb[axis] {
                return Err(CoreError::DegenerateBounds {
                    axis,
                    min: aabb[axis],
                    max: aabb[axis + 3],
                });
            }
        }

        let r = octree_resolution + 1;
        let bbox_min = Point3::new(aabb[0], aabb[1], aabb[2]);
        let bbox_max = Point3::new(aabb[3], aabb[4], aabb[5]);

        Ok(GridStatistics {
            grid_size: [r, r, r],
            bbox_min,
            bbox_size: bbox_max - bbox_min,
        })
    }
}

impl From<f32> for Bounds {
    #[inline]
    fn from(b: f32) -> Self {
        Bounds::Symmetric(b)
    }
}

impl From<[f32; 6]> for Bounds {
    #[inline]
    fn from(aabb: [f32; 6]) -> Self {
        Bounds::Aabb(aabb)
    }
}

/// Derived, read-only grid placement statistics.
///
/// Computed fresh per call from a [`Bounds`] and an octree resolution; never
/// cached across calls with different inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStatistics {
    /// Number of grid vertices per axis (`octree_resolution + 1`).
    pub grid_size: [usize; 3],
    /// World-space position of grid index `(0, 0, 0)`.
    pub bbox_min: Point3,
    /// World-space extent of the box on each axis.
    pub bbox_size: Point3,
}

impl GridStatistics {
    /// Map a position from grid-index space into world coordinates.
    ///
    /// The mapping is `world = index / grid_size * bbox_size + bbox_min`
    /// elementwise. The divisor is the vertex count `grid_size`, not
    /// `grid_size - 1`: grid-index extent `[0, grid_size)` maps linearly onto
    /// `[bbox_min, bbox_min + bbox_size)`, so the last grid vertex lands
    /// slightly inside `bbox_max`.
    #[inline]
    pub fn grid_to_world(&self, index: Point3) -> Point3 {
        Point3::new(
            index.x / self.grid_size[0] as f32 * self.bbox_size.x + self.bbox_min.x,
            index.y / self.grid_size[1] as f32 * self.bbox_size.y + self.bbox_min.y,
            index.z / self.grid_size[2] as f32 * self.bbox_size.z + self.bbox_min.z,
        )
    }

    /// Total number of grid vertices.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.grid_size[0] * self.grid_size[1] * self.grid_size[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_expansion() {
        let stats = Bounds::Symmetric(1.0).resolve(32).unwrap();

        assert_eq!(stats.grid_size, [33, 33, 33]);
        assert_eq!(stats.bbox_min, Point3::splat(-1.0));
        assert_eq!(stats.bbox_size, Point3::splat(2.0));
    }

    #[test]
    fn test_aabb_passthrough() {
        let stats = Bounds::Aabb([-1.0, -2.0, 0.0, 1.0, 2.0, 4.0])
            .resolve(8)
            .unwrap();

        assert_eq!(stats.grid_size, [9, 9, 9]);
        assert_eq!(stats.bbox_min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(stats.bbox_size, Point3::new(2.0, 4.0, 4.0));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let err = Bounds::Aabb([0.0, 0.0, 0.0, 1.0, 0.0, 1.0])
            .resolve(8)
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::DegenerateBounds {
                axis: 1,
                min: 0.0,
                max: 0.0,
            }
        );

        // A negative scalar produces an inverted box on every axis.
        assert!(Bounds::Symmetric(-1.0).resolve(8).is_err());
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert_eq!(
            Bounds::Symmetric(1.0).resolve(0).unwrap_err(),
            CoreError::ZeroResolution
        );
    }

    #[test]
    fn test_grid_to_world_origin_maps_to_bbox_min() {
        let stats = Bounds::Symmetric(1.0).resolve(32).unwrap();

        let world = stats.grid_to_world(Point3::splat(0.0));
        assert_eq!(world, stats.bbox_min);
    }

    #[test]
    fn test_grid_to_world_last_vertex_stays_inside_bbox_max() {
        // The divisor is R, not R-1: the last grid vertex maps to
        // bbox_min + bbox_size * (R-1)/R, strictly inside bbox_max.
        let stats = Bounds::Symmetric(1.0).resolve(32).unwrap();
        let r = stats.grid_size[0] as f32;

        let world = stats.grid_to_world(Point3::splat(r - 1.0));
        let expected = -1.0 + 2.0 * (r - 1.0) / r;

        assert!((world.x - expected).abs() < 1e-6);
        assert!(world.x < 1.0);
    }

    #[test]
    fn test_statistics_recomputed_per_call() {
        let a = Bounds::Symmetric(1.0).resolve(16).unwrap();
        let b = Bounds::Symmetric(2.0).resolve(16).unwrap();

        assert_ne!(a, b);
        assert_eq!(a.grid_size, b.grid_size);
    }
}

//! Owned triangle-mesh buffers and numeric post-processing.
//!
//! [`MeshBuffers`] is the output type of every extraction path: a flat vertex
//! buffer plus `u32` index triples. The buffers are exclusively owned and
//! never alias the input field.

use crate::alloc_prelude::Vec;
use crate::error::CoreError;
use crate::types::Point3;

/// An indexed triangle mesh.
///
/// Invariant: every face index is `< vertices.len()`. Use [`validate`] to
/// check buffers that were produced by an untrusted source.
///
/// [`validate`]: MeshBuffers::validate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions, one `[x, y, z]` triple per vertex.
    pub vertices: Vec<[f32; 3]>,
    /// Triangle faces, each a triple of indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Create mesh buffers from existing vertex and face storage.
    #[inline]
    pub fn new(vertices: Vec<[f32; 3]>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check that every face index points into the vertex buffer.
    pub fn validate(&self) -> Result<(), CoreError> {
        let vertex_count = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertex_count {
                    return Err(CoreError::FaceIndexOutOfBounds {
                        face,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Axis-aligned bounding box of the vertices, or `None` for an empty
    /// vertex buffer.
    pub fn bbox(&self) -> Option<(Point3, Point3)> {
        let mut iter = self.vertices.iter();
        let first = Point3::from(*iter.next()?);

        let mut min = first;
        let mut max = first;
        for &v in iter {
            let p = Point3::from(v);
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }

    /// Translate the vertices so the bounding box is centered at the origin.
    ///
    /// Returns the translation that was applied, or zero for an empty mesh.
    pub fn center(&mut self) -> Point3 {
        let Some((min, max)) = self.bbox() else {
            return Point3::splat(0.0);
        };

        let offset = (min + max) * 0.5;
        for v in &mut self.vertices {
            let p = Point3::from(*v) - offset;
            *v = p.as_array();
        }
        -offset
    }

    /// Reverse the winding order of every face, `(a, b, c) -> (c, b, a)`.
    ///
    /// Flips the implied normal direction of each triangle.
    pub fn flip_winding(&mut self) {
        for face in &mut self.faces {
            face.swap(0, 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc_prelude::Vec;

    fn quad() -> MeshBuffers {
        let vertices: Vec<[f32; 3]> = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 2.0, 0.0],
            [0.0, 2.0, 0.0],
        ]
        .into_iter()
        .collect();
        let faces: Vec<[u32; 3]> = [[0, 1, 2], [0, 2, 3]].into_iter().collect();
        MeshBuffers::new(vertices, faces)
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert!(!mesh.is_empty());
        assert!(MeshBuffers::default().is_empty());
    }

    #[test]
    fn test_validate_catches_out_of_bounds_index() {
        let mut mesh = quad();
        assert!(mesh.validate().is_ok());

        mesh.faces.push([0, 1, 9]);
        assert_eq!(
            mesh.validate().unwrap_err(),
            CoreError::FaceIndexOutOfBounds {
                face: 2,
                index: 9,
                vertex_count: 4,
            }
        );
    }

    #[test]
    fn test_bbox() {
        let mesh = quad();
        let (min, max) = mesh.bbox().unwrap();

        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 2.0, 0.0));
        assert!(MeshBuffers::default().bbox().is_none());
    }

    #[test]
    fn test_center_moves_bbox_to_origin() {
        let mut mesh = quad();
        let applied = mesh.center();

        assert_eq!(applied, Point3::new(-0.5, -1.0, 0.0));

        let (min, max) = mesh.bbox().unwrap();
        let center = (min + max) * 0.5;
        assert!(center.length() < 1e-6);
    }

    #[test]
    fn test_center_empty_mesh_is_noop() {
        let mut mesh = MeshBuffers::default();
        assert_eq!(mesh.center(), Point3::splat(0.0));
    }

    #[test]
    fn test_flip_winding_reverses_every_face() {
        let mut mesh = quad();
        mesh.flip_winding();
        assert_eq!(mesh.faces[0], [2, 1, 0]);
        assert_eq!(mesh.faces[1], [3, 2, 0]);

        // Flipping twice restores the original orientation.
        mesh.flip_winding();
        assert_eq!(mesh.faces, quad().faces);
    }
}

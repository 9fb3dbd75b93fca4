//! Dense-grid marching cubes extraction.

#[cfg(feature = "std")]
use crate::error::CoreError;
use crate::types::Point3;

use super::tables::{CORNER_OFFSETS, EDGE_ANCHORS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};

/// Interpolate the position along an edge where the field crosses the
/// iso-level.
///
/// # Arguments
/// * `p0` - Position of the first endpoint
/// * `p1` - Position of the second endpoint
/// * `v0` - Field value at the first endpoint
/// * `v1` - Field value at the second endpoint
/// * `iso_level` - The iso-surface value
///
/// # Returns
/// The interpolated position where the surface crosses the edge.
#[inline]
pub fn interpolate_vertex(p0: Point3, p1: Point3, v0: f32, v1: f32, iso_level: f32) -> Point3 {
    // Avoid division by zero for degenerate cases
    let denom = v1 - v0;
    if libm::fabsf(denom) < 1e-10 {
        return p0.lerp(p1, 0.5);
    }

    let t = (iso_level - v0) / denom;

    // Clamp to [0, 1] to handle numerical errors
    let t = t.clamp(0.0, 1.0);

    p0.lerp(p1, t)
}

/// Compute the cube configuration index from corner field values.
///
/// # Returns
/// An 8-bit index where bit i is set if corner i is below the iso-level.
#[inline]
fn compute_cube_index(corner_values: &[f32; 8], iso_level: f32) -> usize {
    let mut index = 0;
    for (i, &val) in corner_values.iter().enumerate() {
        if val < iso_level {
            index |= 1 << i;
        }
    }
    index
}

/// Extract an indexed triangle mesh from a dense scalar field.
///
/// The field is a C-order buffer of `dims[0] * dims[1] * dims[2]` samples
/// (x-major, z fastest). Vertices are produced in grid-index space, one
/// shared vertex per sign-crossing lattice edge; faces index into the vertex
/// buffer. Normals are not computed.
///
/// # Errors
/// * [`CoreError::FieldSizeMismatch`] if the buffer does not match `dims`
/// * [`CoreError::GridTooSmall`] if some axis has fewer than two samples
/// * [`CoreError::NoSurfaceCrossing`] if `iso_level` is outside the field's
///   value range (an all-above or all-below field has no surface)
/// * [`CoreError::EmptySurface`] if the sweep produced no triangles
#[cfg(feature = "std")]
pub fn extract_indexed(
    field: &[f32],
    dims: [usize; 3],
    iso_level: f32,
) -> Result<crate::mesh::MeshBuffers, CoreError> {
    use std::collections::HashMap;
    use std::vec::Vec;

    let expected = dims[0] * dims[1] * dims[2];
    if field.len() != expected {
        return Err(CoreError::FieldSizeMismatch {
            expected,
            actual: field.len(),
        });
    }
    if dims.iter().any(|&d| d < 2) {
        return Err(CoreError::GridTooSmall { dims });
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in field {
        min = min.min(v);
        max = max.max(v);
    }
    if iso_level < min || iso_level > max {
        return Err(CoreError::NoSurfaceCrossing {
            iso_level,
            min,
            max,
        });
    }

    let sample = |x: usize, y: usize, z: usize| field[(x * dims[1] + y) * dims[2] + z];
    // Global lattice-edge key: sample index times 3, plus the edge axis.
    let edge_key =
        |x: usize, y: usize, z: usize, axis: usize| ((x * dims[1] + y) * dims[2] + z) * 3 + axis;

    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();
    let mut edge_to_vertex: HashMap<usize, u32> = HashMap::new();

    for x in 0..dims[0] - 1 {
        for y in 0..dims[1] - 1 {
            for z in 0..dims[2] - 1 {
                let mut corner_values = [0.0f32; 8];
                for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
                    corner_values[i] = sample(x + offset[0], y + offset[1], z + offset[2]);
                }

                let cube_index = compute_cube_index(&corner_values, iso_level);
                let edge_flags = EDGE_TABLE[cube_index];
                if edge_flags == 0 {
                    continue;
                }

                // Resolve each intersected edge to a shared vertex index.
                let mut edge_vertex_ids = [0u32; 12];
                for edge in 0..12 {
                    if (edge_flags & (1 << edge)) == 0 {
                        continue;
                    }

                    let (anchor, axis) = EDGE_ANCHORS[edge];
                    let a = CORNER_OFFSETS[anchor];
                    let key = edge_key(x + a[0], y + a[1], z + a[2], axis);

                    let next_id = vertices.len() as u32;
                    let id = *edge_to_vertex.entry(key).or_insert_with(|| {
                        let (c0, c1) = EDGE_CORNERS[edge];
                        let o0 = CORNER_OFFSETS[c0];
                        let o1 = CORNER_OFFSETS[c1];
                        let p0 = Point3::new(
                            (x + o0[0]) as f32,
                            (y + o0[1]) as f32,
                            (z + o0[2]) as f32,
                        );
                        let p1 = Point3::new(
                            (x + o1[0]) as f32,
                            (y + o1[1]) as f32,
                            (z + o1[2]) as f32,
                        );
                        let p = interpolate_vertex(
                            p0,
                            p1,
                            corner_values[c0],
                            corner_values[c1],
                            iso_level,
                        );
                        vertices.push(p.as_array());
                        next_id
                    });
                    edge_vertex_ids[edge] = id;
                }

                let tri_list = &TRI_TABLE[cube_index];
                let mut i = 0;
                while i < 16 && tri_list[i] != -1 {
                    faces.push([
                        edge_vertex_ids[tri_list[i] as usize],
                        edge_vertex_ids[tri_list[i + 1] as usize],
                        edge_vertex_ids[tri_list[i + 2] as usize],
                    ]);
                    i += 3;
                }
            }
        }
    }

    if faces.is_empty() {
        return Err(CoreError::EmptySurface);
    }

    Ok(crate::mesh::MeshBuffers::new(vertices, faces))
}

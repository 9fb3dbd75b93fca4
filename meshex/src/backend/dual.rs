//! Dense dual-grid isosurface kernel.
//!
//! One vertex per sign-crossing cell, placed at the mean of the cell's edge
//! intersections; one quad per interior sign-crossing lattice edge, split
//! into two triangles oriented by the edge's sign direction.

use std::collections::HashMap;

use meshex_core::marching_cubes::{CORNER_OFFSETS, EDGE_CORNERS};
use meshex_core::Point3;

use super::BackendError;

#[inline]
fn inside(v: f32) -> bool {
    v < 0.0
}

/// Extract the zero level set of a cubic signed distance field.
///
/// Returns vertices normalized into the canonical unit box (grid coordinates
/// divided by the per-axis sample count) and triangle index triples. Empty
/// buffers mean the field never crosses zero.
pub(super) fn isosurface_dense(
    sdf: &[f32],
    dims: [usize; 3],
) -> Result<(Vec<[f32; 3]>, Vec<[u32; 3]>), BackendError> {
    let r = dims[0];
    let expected = r * r * r;
    if sdf.len() != expected {
        return Err(BackendError::Fatal {
            message: format!("field length {} does not match grid size {}", sdf.len(), expected),
        });
    }
    if r < 2 {
        return Ok((Vec::new(), Vec::new()));
    }

    let sample = |x: usize, y: usize, z: usize| sdf[(x * r + y) * r + z];
    let cells = r - 1;
    let cell_key = |x: usize, y: usize, z: usize| (x * cells + y) * cells + z;

    // One dual vertex per sign-crossing cell, at the mean of its edge
    // intersections.
    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut cell_to_vertex: HashMap<usize, u32> = HashMap::new();

    for x in 0..cells {
        for y in 0..cells {
            for z in 0..cells {
                let mut corner_values = [0.0f32; 8];
                let mut mask = 0u8;
                for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
                    let v = sample(x + offset[0], y + offset[1], z + offset[2]);
                    corner_values[i] = v;
                    if inside(v) {
                        mask |= 1 << i;
                    }
                }
                if mask == 0 || mask == 0xFF {
                    continue;
                }

                let mut sum = Point3::splat(0.0);
                let mut crossings = 0;
                for &(c0, c1) in &EDGE_CORNERS {
                    let (v0, v1) = (corner_values[c0], corner_values[c1]);
                    if inside(v0) == inside(v1) {
                        continue;
                    }
                    let t = v0 / (v0 - v1);
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
                    sum = sum + p0.lerp(p1, t);
                    crossings += 1;
                }

                let dual = sum / crossings as f32;
                cell_to_vertex.insert(cell_key(x, y, z), vertices.len() as u32);
                vertices.push((dual / r as f32).as_array());
            }
        }
    }

    // One quad per interior sign-crossing lattice edge, connecting the four
    // cells that share the edge. Cyclic axis pairs keep the orientation
    // globally consistent.
    let mut faces: Vec<[u32; 3]> = Vec::new();
    let mut quad = |cells4: [usize; 4], flip: bool| -> Result<(), BackendError> {
        let mut ids = [0u32; 4];
        for (slot, key) in cells4.iter().enumerate() {
            ids[slot] = *cell_to_vertex
                .get(key)
                .ok_or_else(|| BackendError::Fatal {
                    message: "cell adjacent to a crossing edge has no dual vertex".into(),
                })?;
        }
        if flip {
            ids.swap(1, 3);
        }
        faces.push([ids[0], ids[1], ids[2]]);
        faces.push([ids[0], ids[2], ids[3]]);
        Ok(())
    };

    for axis in 0..3 {
        let (b_axis, c_axis) = ((axis + 1) % 3, (axis + 2) % 3);
        // The edge's own axis spans every cell; the two cross axes need an
        // interior position so all four neighbor cells exist.
        let mut extent = [0usize; 3];
        extent[axis] = cells;
        extent[b_axis] = r.saturating_sub(2);
        extent[c_axis] = r.saturating_sub(2);

        for a in 0..extent[0] {
            for b in 0..extent[1] {
                for c in 0..extent[2] {
                    let mut base = [a, b, c];
                    base[b_axis] += 1;
                    base[c_axis] += 1;

                    let mut tip = base;
                    tip[axis] += 1;

                    let v0 = sample(base[0], base[1], base[2]);
                    let v1 = sample(tip[0], tip[1], tip[2]);
                    if inside(v0) == inside(v1) {
                        continue;
                    }

                    let neighbor = |db: usize, dc: usize| {
                        let mut cell = base;
                        cell[b_axis] -= db;
                        cell[c_axis] -= dc;
                        cell_key(cell[0], cell[1], cell[2])
                    };

                    // Wound toward the interior; consumers flip to their own
                    // convention.
                    quad(
                        [neighbor(1, 1), neighbor(0, 1), neighbor(0, 0), neighbor(1, 0)],
                        inside(v0),
                    )?;
                }
            }
        }
    }

    Ok((vertices, faces))
}

//! Differentiable dual marching cubes extractor with classic-MC fallback.

use burn::prelude::*;

use crate::backend::{self, BackendError, DiffDmc};
use crate::error::{ExtractError, Result};
use crate::extract::mc::McExtractor;
use crate::extract::{ExtractParams, SurfaceExtractor};
use crate::field;
use meshex_core::{CoreError, MeshBuffers};

/// Which path a [`DmcExtractor`] resolved to on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmcPath {
    /// The differentiable dual marching cubes backend is in use.
    Backend,
    /// The extractor permanently delegates to classic marching cubes.
    Fallback,
}

/// Probe state, written at most once per instance.
enum BackendState<B: Backend> {
    Unprobed,
    Ready(DiffDmc<B>),
    Fallback(McExtractor),
}

/// Dual marching cubes over a signed-distance reinterpretation of the field,
/// falling back to classic marching cubes when the backend is unavailable.
///
/// The backend probe runs once, on the first `extract` call, against that
/// field's device. A recoverable probe failure (backend not linked, or a
/// narrowly-scoped initialization error) logs a warning and pins the
/// fallback path for the lifetime of the instance; the probe is never
/// repeated, even if a later call's conditions differ. Any other probe
/// failure propagates.
///
/// Because the resolved path is only known after first use, callers should
/// populate `bounds` on every call: the fallback requires it even though the
/// primary path ignores it.
///
/// A single instance is not safe for concurrent probing from multiple
/// threads; use one instance per thread.
pub struct DmcExtractor<B: Backend> {
    state: BackendState<B>,
}

impl<B: Backend> DmcExtractor<B> {
    /// Create an extractor that probes for the backend on first use.
    pub fn new() -> Self {
        Self {
            state: BackendState::Unprobed,
        }
    }

    /// Create an extractor pinned to the classic-MC fallback, skipping the
    /// probe entirely. Useful for diagnostics and for exercising fallback
    /// behavior in tests.
    pub fn with_fallback_forced() -> Self {
        Self {
            state: BackendState::Fallback(McExtractor::new()),
        }
    }

    /// The path this instance resolved to, or `None` before the first call.
    pub fn resolved_path(&self) -> Option<DmcPath> {
        match self.state {
            BackendState::Unprobed => None,
            BackendState::Ready(_) => Some(DmcPath::Backend),
            BackendState::Fallback(_) => Some(DmcPath::Fallback),
        }
    }

    fn ensure_probed(&mut self, device: &B::Device) -> Result<()> {
        if !matches!(self.state, BackendState::Unprobed) {
            return Ok(());
        }

        match backend::probe::<B>(device) {
            Ok(dmc) => {
                log::info!("dual marching cubes backend ready on {device:?}");
                self.state = BackendState::Ready(dmc);
            }
            Err(err) if err.is_recoverable() => {
                log::warn!("{err}; falling back to classic marching cubes");
                self.state = BackendState::Fallback(McExtractor::new());
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

impl<B: Backend> Default for DmcExtractor<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> SurfaceExtractor<B> for DmcExtractor<B> {
    fn extract(&mut self, field: &Tensor<B, 3>, params: &ExtractParams) -> Result<MeshBuffers> {
        self.ensure_probed(&field.device())?;

        match &mut self.state {
            BackendState::Ready(dmc) => {
                field::expect_cubic(field, params.grid_vertices())?;

                // Signed-distance convention: sign flip plus
                // resolution-normalized scale, in the backend's units.
                let sdf = field
                    .clone()
                    .neg()
                    .div_scalar(params.octree_resolution as f32);

                let (vertices, faces) = dmc.isosurface(&sdf)?;
                let mut mesh = MeshBuffers::new(vertices, faces);
                if mesh.is_empty() {
                    return Err(CoreError::EmptySurface.into());
                }

                mesh.center();
                mesh.flip_winding();
                Ok(mesh)
            }
            BackendState::Fallback(mc) => mc.extract(field, params),
            BackendState::Unprobed => Err(ExtractError::Backend(BackendError::Fatal {
                message: "backend probe left the extractor unresolved".into(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::TensorData;

    type TestBackend = NdArray;

    fn sphere_logits(octree_resolution: usize) -> Tensor<TestBackend, 3> {
        let r = octree_resolution + 1;
        let center = (r - 1) as f32 * 0.5;
        let radius = r as f32 * 0.3;
        let mut values = Vec::with_capacity(r * r * r);
        for x in 0..r {
            for y in 0..r {
                for z in 0..r {
                    let dx = x as f32 - center;
                    let dy = y as f32 - center;
                    let dz = z as f32 - center;
                    // Positive inside, negative outside (occupancy logits).
                    values.push(radius - (dx * dx + dy * dy + dz * dz).sqrt());
                }
            }
        }
        Tensor::from_data(TensorData::new(values, [r, r, r]), &Default::default())
    }

    #[test]
    fn test_path_is_unresolved_before_first_call() {
        let extractor = DmcExtractor::<TestBackend>::new();
        assert_eq!(extractor.resolved_path(), None);
    }

    #[test]
    fn test_forced_fallback_extracts_without_probing() {
        let mut extractor = DmcExtractor::<TestBackend>::with_fallback_forced();
        assert_eq!(extractor.resolved_path(), Some(DmcPath::Fallback));

        let field = sphere_logits(16);
        let params = ExtractParams::new(16).with_bounds(1.0);
        let mesh = extractor.extract(&field, &params).unwrap();

        assert!(!mesh.is_empty());
        assert_eq!(extractor.resolved_path(), Some(DmcPath::Fallback));
    }
}

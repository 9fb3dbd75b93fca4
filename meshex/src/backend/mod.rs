//! Optional differentiable dual marching cubes backend.
//!
//! Linkage is decided at compile time by the `diffdmc` cargo feature;
//! [`probe`] is the explicit capability check extractors call at run time.
//! When the feature is absent the probe reports [`BackendError::NotLinked`]
//! and callers degrade to classic marching cubes instead of failing.

use burn::prelude::*;
use thiserror::Error;

#[cfg(feature = "diffdmc")]
mod dual;

/// Errors from backend probing or invocation.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is not compiled into this build.
    #[error("dual marching cubes backend is not linked (enable the `diffdmc` feature)")]
    NotLinked,

    /// Backend construction failed in a recoverable way (bad argument,
    /// device/environment mismatch).
    #[error("backend initialization failed: {message}")]
    Init {
        /// Description of the initialization failure.
        message: String,
    },

    /// Any other backend failure. Never downgraded to a fallback.
    #[error("backend failure: {message}")]
    Fatal {
        /// Description of the failure.
        message: String,
    },
}

impl BackendError {
    /// Whether this error belongs to the narrowly recoverable set that
    /// callers downgrade to a warning plus permanent fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BackendError::NotLinked | BackendError::Init { .. })
    }
}

/// Probe for the dual marching cubes backend on the given device.
///
/// Returns a ready [`DiffDmc`] handle, or the error callers use to decide
/// between fallback (recoverable) and fail-fast (anything else).
pub fn probe<B: Backend>(device: &B::Device) -> Result<DiffDmc<B>, BackendError> {
    DiffDmc::new(device)
}

/// Handle to the differentiable dual marching cubes kernel, bound to a
/// compute device.
#[cfg(feature = "diffdmc")]
#[derive(Debug, Clone)]
pub struct DiffDmc<B: Backend> {
    device: B::Device,
}

#[cfg(feature = "diffdmc")]
impl<B: Backend> DiffDmc<B> {
    /// Bind the kernel to a device.
    pub fn new(device: &B::Device) -> Result<Self, BackendError> {
        Ok(Self {
            device: device.clone(),
        })
    }

    /// The device this handle is bound to.
    pub fn device(&self) -> &B::Device {
        &self.device
    }

    /// Run dual marching cubes over a signed distance field at the zero
    /// level set.
    ///
    /// The field must be cubic. Values are read back as canonical `f32` in
    /// owned contiguous storage before the sweep. Output is triangles only
    /// (no quads), with vertices normalized into the canonical unit box
    /// `[0, 1]^3`; no deformation field is applied.
    pub fn isosurface(
        &self,
        sdf: &Tensor<B, 3>,
    ) -> Result<(Vec<[f32; 3]>, Vec<[u32; 3]>), BackendError> {
        let dims = sdf.dims();
        if dims[0] != dims[1] || dims[1] != dims[2] {
            return Err(BackendError::Fatal {
                message: format!("expected a cubic field, got {dims:?}"),
            });
        }

        let values: Vec<f32> = sdf
            .to_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| BackendError::Fatal {
                message: format!("tensor readback failed: {e:?}"),
            })?;

        dual::isosurface_dense(&values, dims)
    }
}

/// Stub handle compiled when the backend is not linked. It cannot be
/// constructed; [`probe`] reports [`BackendError::NotLinked`] instead.
#[cfg(not(feature = "diffdmc"))]
#[derive(Debug, Clone)]
pub struct DiffDmc<B: Backend> {
    _backend: core::marker::PhantomData<B>,
}

#[cfg(not(feature = "diffdmc"))]
impl<B: Backend> DiffDmc<B> {
    /// Always reports [`BackendError::NotLinked`].
    pub fn new(_device: &B::Device) -> Result<Self, BackendError> {
        Err(BackendError::NotLinked)
    }

    /// Unreachable without a constructed handle; reports
    /// [`BackendError::NotLinked`] for completeness.
    pub fn isosurface(
        &self,
        _sdf: &Tensor<B, 3>,
    ) -> Result<(Vec<[f32; 3]>, Vec<[u32; 3]>), BackendError> {
        Err(BackendError::NotLinked)
    }
}

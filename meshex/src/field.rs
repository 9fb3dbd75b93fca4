//! Tensor readback helpers for scalar fields.

use burn::prelude::*;

use crate::error::{ExtractError, Result};

/// Read a scalar field back to host memory as canonical `f32`.
///
/// The returned buffer is owned and contiguous in C order (x-major, z
/// fastest), matching the layout the extraction kernels expect.
pub(crate) fn read_field<B: Backend>(field: &Tensor<B, 3>) -> Result<Vec<f32>> {
    field
        .to_data()
        .convert::<f32>()
        .to_vec::<f32>()
        .map_err(|e| ExtractError::InvalidData {
            message: format!("tensor readback failed: {e:?}"),
        })
}

/// Check that a field is cubic with `r` samples per axis.
pub(crate) fn expect_cubic<B: Backend>(field: &Tensor<B, 3>, r: usize) -> Result<()> {
    let dims = field.dims();
    if dims != [r, r, r] {
        return Err(ExtractError::ShapeMismatch {
            expected: vec![r, r, r],
            got: dims.to_vec(),
        });
    }
    Ok(())
}

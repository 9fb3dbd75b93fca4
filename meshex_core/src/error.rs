//! Error types for meshex_core operations.
//!
//! Provides a simple error enum with no external dependencies for no_std compatibility.

use core::fmt;

/// Error types that can occur during meshex_core operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoreError {
    /// A bounding-box axis has a maximum not strictly greater than its minimum.
    DegenerateBounds {
        /// The axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// The minimum coordinate on that axis.
        min: f32,
        /// The maximum coordinate on that axis.
        max: f32,
    },
    /// The octree resolution was zero.
    ZeroResolution,
    /// The grid has fewer than two samples along some axis, so no cell exists.
    GridTooSmall {
        /// The offending grid dimensions.
        dims: [usize; 3],
    },
    /// The scalar-field buffer length does not match the grid dimensions.
    FieldSizeMismatch {
        /// The expected number of samples (product of the grid dimensions).
        expected: usize,
        /// The number of samples actually provided.
        actual: usize,
    },
    /// The iso-level lies outside the value range of the field, so the
    /// surface cannot cross it anywhere.
    NoSurfaceCrossing {
        /// The requested iso-level.
        iso_level: f32,
        /// The minimum value in the field.
        min: f32,
        /// The maximum value in the field.
        max: f32,
    },
    /// The sweep completed without producing a single triangle.
    EmptySurface,
    /// A face references a vertex index beyond the vertex buffer.
    FaceIndexOutOfBounds {
        /// The face index.
        face: usize,
        /// The offending vertex index.
        index: u32,
        /// The number of vertices in the buffer.
        vertex_count: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::DegenerateBounds { axis, min, max } => {
                write!(
                    f,
                    "degenerate bounds on axis {}: max {} is not greater than min {}",
                    axis, max, min
                )
            }
            CoreError::ZeroResolution => {
                write!(f, "octree resolution must be positive")
            }
            CoreError::GridTooSmall { dims } => {
                write!(
                    f,
                    "grid {}x{}x{} has no cells to march",
                    dims[0], dims[1], dims[2]
                )
            }
            CoreError::FieldSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "field length {} does not match grid size {}",
                    actual, expected
                )
            }
            CoreError::NoSurfaceCrossing {
                iso_level,
                min,
                max,
            } => {
                write!(
                    f,
                    "iso-level {} is outside the field value range [{}, {}]",
                    iso_level, min, max
                )
            }
            CoreError::EmptySurface => {
                write!(f, "extraction produced no triangles")
            }
            CoreError::FaceIndexOutOfBounds {
                face,
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "face {} references vertex {} but only {} vertices exist",
                    face, index, vertex_count
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        use std::format;

        let err = CoreError::DegenerateBounds {
            axis: 1,
            min: 1.0,
            max: -1.0,
        };
        assert_eq!(
            format!("{}", err),
            "degenerate bounds on axis 1: max -1 is not greater than min 1"
        );

        let err = CoreError::NoSurfaceCrossing {
            iso_level: 0.0,
            min: 0.5,
            max: 2.0,
        };
        assert_eq!(
            format!("{}", err),
            "iso-level 0 is outside the field value range [0.5, 2]"
        );

        let err = CoreError::FieldSizeMismatch {
            expected: 27,
            actual: 8,
        };
        assert_eq!(
            format!("{}", err),
            "field length 8 does not match grid size 27"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = CoreError::ZeroResolution;
        let err2 = CoreError::ZeroResolution;
        let err3 = CoreError::EmptySurface;

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}

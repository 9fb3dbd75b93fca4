//! Marching cubes mesh extraction.
//!
//! This module provides the marching cubes algorithm for extracting indexed
//! triangle meshes from dense scalar fields. It includes:
//!
//! - Compile-time lookup tables for cube configurations
//! - Edge-vertex interpolation
//! - A dense-grid sweep with shared-vertex deduplication (requires `std`)
//!
//! # Example
//!
//! ```ignore
//! use meshex_core::marching_cubes::extract_indexed;
//!
//! // `field` holds R*R*R samples in C order, x-major.
//! let mesh = extract_indexed(&field, [r, r, r], 0.0)?;
//! ```

mod algorithm;
mod tables;

pub use algorithm::interpolate_vertex;
pub use tables::{CORNER_OFFSETS, EDGE_ANCHORS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};

#[cfg(feature = "std")]
pub use algorithm::extract_indexed;

//! # meshex_core
//!
//! Pure isosurface-extraction algorithms for dense scalar fields.
//!
//! This crate provides the algorithmic foundation for the meshex ecosystem:
//! turning a dense 3D grid of scalar samples (occupancy logits or signed
//! distances) into an indexed triangle mesh.
//!
//! ## Features
//!
//! - **no_std compatible**: Works without the standard library via the `alloc`
//!   feature (the dense extraction entry point itself requires `std`)
//! - **Pure algorithms**: No tensor types, no device handling, just math
//! - **Indexed output**: Shared vertices per lattice edge, `u32` face triples
//! - **Compile-time lookup tables**: The edge table is derived from the
//!   triangle table in a `const fn`
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables standard library support
//! - `alloc`: Enables heap allocation (Vec, etc.) without full std
//!
//! ## Modules
//!
//! - [`types`]: Core data types ([`Point3`])
//! - [`bounds`]: Bounding-box resolution and grid-to-world coordinate mapping
//! - [`mesh`]: Owned mesh buffers and numeric post-processing
//! - [`marching_cubes`]: Dense-grid marching cubes extraction
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```ignore
//! use meshex_core::prelude::*;
//!
//! let stats = Bounds::Symmetric(1.0).resolve(32)?;
//! let mut mesh = extract_indexed(&field, stats.grid_size, 0.0)?;
//! for v in &mut mesh.vertices {
//!     *v = stats.grid_to_world(Point3::from(*v)).as_array();
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Conditional std/alloc support
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal alloc prelude for conditional compilation
#[cfg(feature = "std")]
mod alloc_prelude {
    pub use std::vec::Vec;
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
mod alloc_prelude {
    pub use alloc::vec::Vec;
}

pub mod bounds;
pub mod error;
pub mod marching_cubes;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod mesh;
pub mod types;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::bounds::{Bounds, GridStatistics};
    pub use crate::error::CoreError;
    pub use crate::marching_cubes::interpolate_vertex;
    pub use crate::types::Point3;

    #[cfg(feature = "std")]
    pub use crate::marching_cubes::extract_indexed;
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::mesh::MeshBuffers;
}

// Re-export everything at crate root for convenience
pub use bounds::{Bounds, GridStatistics};
pub use error::CoreError;
#[cfg(feature = "std")]
pub use marching_cubes::extract_indexed;
pub use marching_cubes::interpolate_vertex;
#[cfg(any(feature = "std", feature = "alloc"))]
pub use mesh::MeshBuffers;
pub use types::Point3;

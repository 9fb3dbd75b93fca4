//! # meshex
//!
//! Surface extraction from tensor scalar fields for the meshex ecosystem.
//!
//! This crate turns dense volumetric scalar fields (occupancy logits or
//! signed distances produced by an upstream model, delivered as Burn
//! tensors) into indexed triangle meshes, building on the pure kernels in
//! `meshex_core`.
//!
//! ## Features
//!
//! - **Two algorithm variants**: classic marching cubes, and differentiable
//!   dual marching cubes with a permanent per-instance fallback to classic
//!   MC when the backend is unavailable
//! - **Batch isolation**: one failing field never aborts the rest of a batch
//! - **Registry-driven selection**: variants chosen by name at configuration
//!   time
//! - **Device-generic**: works with any Burn backend
//!
//! ## Quick Start
//!
//! ```ignore
//! use meshex::prelude::*;
//! use burn::backend::NdArray;
//!
//! let config = ExtractorConfig::new("dmc".to_string(), 256);
//! let mut driver = BatchExtractor::<NdArray>::from_config(&config)?;
//!
//! // `fields` has shape [N, R, R, R] with R = octree_resolution + 1.
//! let outcomes = driver.run_batch(&fields, &config.params());
//! for outcome in &outcomes {
//!     if let Some(mesh) = outcome.mesh() {
//!         println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! meshex_core (pure kernels)
//!     │
//!     ▼
//! meshex ── extract::{mc, dmc} ── backend (optional, `diffdmc`)
//!     │
//!     └── batch / registry / config
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `diffdmc`: Links the differentiable dual marching cubes backend;
//!   without it the DMC variant always falls back to classic MC
//! - `parallel`: Parallel batch extraction via rayon
//! - `ndarray`, `wgpu`: Re-exposed Burn backends

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod batch;
pub mod config;
pub mod error;
pub mod extract;

mod field;

// Re-export key types for convenience
pub use batch::{BatchExtractor, ExtractionFailure, ExtractionOutcome};
pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extract::{
    Algorithm, DmcExtractor, DmcPath, ExtractParams, McExtractor, SurfaceExtractor, ALGORITHMS,
};

// Re-export from meshex_core for convenience
pub use meshex_core::{Bounds, CoreError, GridStatistics, MeshBuffers, Point3};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::backend::BackendError;
    pub use crate::batch::{BatchExtractor, ExtractionFailure, ExtractionOutcome};
    pub use crate::config::ExtractorConfig;
    pub use crate::error::{ExtractError, Result};
    pub use crate::extract::{
        Algorithm, DmcExtractor, DmcPath, ExtractParams, McExtractor, SurfaceExtractor,
        ALGORITHMS,
    };

    pub use meshex_core::{Bounds, CoreError, GridStatistics, MeshBuffers, Point3};
}

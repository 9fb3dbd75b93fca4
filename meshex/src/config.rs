//! Extraction configuration.

use burn::config::Config;
use burn::prelude::*;

use crate::error::ExtractError;
use crate::error::Result as ExtractResult;
use crate::extract::{Algorithm, ExtractParams, SurfaceExtractor};

/// Configuration for surface extraction.
#[derive(Config, Debug)]
pub struct ExtractorConfig {
    /// Extraction algorithm name, as registered (`"mc"` or `"dmc"`).
    pub algorithm: String,

    /// Number of octree cells per axis; the sampled grid has one more
    /// vertex per axis.
    pub octree_resolution: usize,

    /// Iso-level for the classic marching cubes path.
    #[config(default = 0.0)]
    pub mc_level: f32,

    /// Symmetric world-space half-extent of the sampled volume.
    #[config(default = 1.01)]
    pub bounds: f32,
}

impl ExtractorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.octree_resolution == 0 {
            return Err(ExtractError::InvalidConfig {
                message: "octree_resolution must be positive".to_string(),
            });
        }
        if self.bounds <= 0.0 {
            return Err(ExtractError::InvalidConfig {
                message: "bounds must be positive".to_string(),
            });
        }
        self.kind()?;
        Ok(())
    }

    /// Resolve the configured algorithm name against the registry.
    pub fn kind(&self) -> ExtractResult<Algorithm> {
        self.algorithm.parse()
    }

    /// The per-call parameters this configuration implies.
    pub fn params(&self) -> ExtractParams {
        ExtractParams::new(self.octree_resolution)
            .with_iso_level(self.mc_level)
            .with_bounds(self.bounds)
    }

    /// Construct the configured extractor.
    pub fn build<B: Backend>(&self) -> ExtractResult<Box<dyn SurfaceExtractor<B>>> {
        self.validate()?;
        Ok(self.kind()?.build::<B>())
    }
}

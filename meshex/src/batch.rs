//! Batch extraction with per-item failure isolation.

use burn::prelude::*;

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::extract::{Algorithm, ExtractParams, SurfaceExtractor};
use meshex_core::MeshBuffers;

/// The result of extracting one batch item.
#[derive(Debug)]
pub enum ExtractionOutcome {
    /// Extraction succeeded.
    Mesh(MeshBuffers),
    /// Extraction failed; the failure detail is attached.
    Failed(ExtractionFailure),
}

/// Failure detail for one batch item.
#[derive(Debug)]
pub struct ExtractionFailure {
    /// Position of the item in the input batch.
    pub index: usize,
    /// The error that failed the item.
    pub error: ExtractError,
}

impl ExtractionOutcome {
    /// Whether this outcome carries a mesh.
    pub fn is_mesh(&self) -> bool {
        matches!(self, ExtractionOutcome::Mesh(_))
    }

    /// The mesh, if extraction succeeded.
    pub fn mesh(&self) -> Option<&MeshBuffers> {
        match self {
            ExtractionOutcome::Mesh(mesh) => Some(mesh),
            ExtractionOutcome::Failed(_) => None,
        }
    }

    /// Consume the outcome, returning the mesh if extraction succeeded.
    pub fn into_mesh(self) -> Option<MeshBuffers> {
        match self {
            ExtractionOutcome::Mesh(mesh) => Some(mesh),
            ExtractionOutcome::Failed(_) => None,
        }
    }

    /// The failure detail, if extraction failed.
    pub fn failure(&self) -> Option<&ExtractionFailure> {
        match self {
            ExtractionOutcome::Mesh(_) => None,
            ExtractionOutcome::Failed(failure) => Some(failure),
        }
    }
}

/// Drives one extractor over a batch of scalar fields.
///
/// Items are processed independently, in input order; a failing item is
/// logged, recorded as [`ExtractionOutcome::Failed`], and never aborts the
/// rest of the batch.
pub struct BatchExtractor<B: Backend> {
    algorithm: Algorithm,
    extractor: Box<dyn SurfaceExtractor<B>>,
}

impl<B: Backend> BatchExtractor<B> {
    /// Create a driver for the given algorithm variant.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            extractor: algorithm.build(),
        }
    }

    /// Create a driver from a validated configuration.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.kind()?))
    }

    /// The algorithm this driver runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Extract one mesh per leading-dimension slice of `fields`.
    ///
    /// The returned sequence always has one entry per batch item, in input
    /// order. `params` is forwarded uniformly to the extractor for every
    /// item; fields the active variant does not need are ignored.
    pub fn run_batch(
        &mut self,
        fields: &Tensor<B, 4>,
        params: &ExtractParams,
    ) -> Vec<ExtractionOutcome> {
        let [n, rx, ry, rz] = fields.dims();

        (0..n)
            .map(|index| {
                let field: Tensor<B, 3> = fields
                    .clone()
                    .slice([index..index + 1, 0..rx, 0..ry, 0..rz])
                    .reshape([rx, ry, rz]);

                match self.extractor.extract(&field, params) {
                    Ok(mesh) => ExtractionOutcome::Mesh(mesh),
                    Err(error) => {
                        log::error!("extraction failed for batch item {index}: {error}");
                        ExtractionOutcome::Failed(ExtractionFailure { index, error })
                    }
                }
            })
            .collect()
    }

    /// Parallel variant of [`run_batch`](Self::run_batch).
    ///
    /// Result order and per-item isolation are preserved. Because a single
    /// extractor instance must not be shared across threads, every item gets
    /// a fresh instance; the dual-MC path therefore probes its backend once
    /// per item rather than once per driver.
    #[cfg(feature = "parallel")]
    pub fn run_batch_parallel(
        &self,
        fields: &Tensor<B, 4>,
        params: &ExtractParams,
    ) -> Vec<ExtractionOutcome> {
        use rayon::prelude::*;

        let [n, rx, ry, rz] = fields.dims();
        let items: Vec<Tensor<B, 3>> = (0..n)
            .map(|index| {
                fields
                    .clone()
                    .slice([index..index + 1, 0..rx, 0..ry, 0..rz])
                    .reshape([rx, ry, rz])
            })
            .collect();

        let algorithm = self.algorithm;
        items
            .into_par_iter()
            .enumerate()
            .map(|(index, field)| {
                let mut extractor = algorithm.build::<B>();
                match extractor.extract(&field, params) {
                    Ok(mesh) => ExtractionOutcome::Mesh(mesh),
                    Err(error) => {
                        log::error!("extraction failed for batch item {index}: {error}");
                        ExtractionOutcome::Failed(ExtractionFailure { index, error })
                    }
                }
            })
            .collect()
    }
}

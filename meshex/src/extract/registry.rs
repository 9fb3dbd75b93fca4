//! Algorithm registry: configuration-time selection of extractor variants.

use core::fmt;
use core::str::FromStr;

use burn::prelude::*;

use crate::error::ExtractError;
use crate::extract::{DmcExtractor, McExtractor, SurfaceExtractor};

/// The extraction algorithm variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Classic marching cubes.
    MarchingCubes,
    /// Differentiable dual marching cubes with classic-MC fallback.
    DualMarchingCubes,
}

/// Static name table for configuration-driven selection. Never mutated at
/// runtime.
pub const ALGORITHMS: [(&str, Algorithm); 2] = [
    ("mc", Algorithm::MarchingCubes),
    ("dmc", Algorithm::DualMarchingCubes),
];

impl Algorithm {
    /// The registered name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MarchingCubes => "mc",
            Algorithm::DualMarchingCubes => "dmc",
        }
    }

    /// Construct a boxed extractor for this variant.
    pub fn build<B: Backend>(self) -> Box<dyn SurfaceExtractor<B>> {
        match self {
            Algorithm::MarchingCubes => Box::new(McExtractor::new()),
            Algorithm::DualMarchingCubes => Box::new(DmcExtractor::<B>::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALGORITHMS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, algorithm)| algorithm)
            .ok_or_else(|| ExtractError::UnknownAlgorithm { name: s.into() })
    }
}

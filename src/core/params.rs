use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::processing::blur::DEFAULT_KERNEL_SIZE;
use crate::core::processing::noise::DEFAULT_NOISE_AMOUNT;
use crate::core::processing::segment::DEFAULT_NUM_SEGMENTS;
use crate::error::Result;
use crate::types::{ConcatDirection, FilterKind, Scaling};

/// Suffix inserted before the extension of persisted images.
pub const DEFAULT_SUFFIX: &str = "_filtered";

fn default_kernel_size() -> usize {
    DEFAULT_KERNEL_SIZE
}

fn default_amount() -> f64 {
    DEFAULT_NOISE_AMOUNT
}

fn default_num_segments() -> usize {
    DEFAULT_NUM_SEGMENTS
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

/// One transformation in a pipeline, tagged by `"op"` in config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterStep {
    Blur {
        #[serde(default = "default_kernel_size")]
        kernel_size: usize,
    },
    Contour,
    Rotate,
    SaltNPepper {
        #[serde(default = "default_amount")]
        amount: f64,
    },
    Concat {
        other: PathBuf,
        #[serde(default)]
        direction: ConcatDirection,
    },
    Segment {
        #[serde(default = "default_num_segments")]
        num_segments: usize,
    },
}

impl FilterStep {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterStep::Blur { .. } => FilterKind::Blur,
            FilterStep::Contour => FilterKind::Contour,
            FilterStep::Rotate => FilterKind::Rotate,
            FilterStep::SaltNPepper { .. } => FilterKind::SaltNPepper,
            FilterStep::Concat { .. } => FilterKind::Concat,
            FilterStep::Segment { .. } => FilterKind::Segment,
        }
    }
}

/// Pipeline parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    pub steps: Vec<FilterStep>,
    pub scaling: Scaling,
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Seed for the noise source; None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            scaling: Scaling::MinMax,
            suffix: default_suffix(),
            seed: None,
        }
    }
}

impl PipelineParams {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

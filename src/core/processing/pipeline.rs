use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, info};

use crate::core::matrix::{ImageMatrix, PersistOptions, Segments};
use crate::core::params::FilterStep;
use crate::error::{Error, Result};

/// Result of a pipeline run: one matrix, or row bands when the run ended in
/// a `segment` step.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutput {
    Single(ImageMatrix),
    Segments(Segments),
}

impl PipelineOutput {
    /// Persist either shape; a single matrix yields one path.
    pub fn persist_with(&self, options: &PersistOptions) -> Result<Vec<PathBuf>> {
        match self {
            PipelineOutput::Single(matrix) => Ok(vec![matrix.persist_with(options)?]),
            PipelineOutput::Segments(segments) => segments.persist_with(options),
        }
    }
}

fn apply_step<R: Rng + ?Sized>(
    matrix: &ImageMatrix,
    step: &FilterStep,
    rng: &mut R,
) -> Result<PipelineOutput> {
    let next = match step {
        FilterStep::Blur { kernel_size } => matrix.blur(*kernel_size)?,
        FilterStep::Contour => matrix.contour(),
        FilterStep::Rotate => matrix.rotate(),
        FilterStep::SaltNPepper { amount } => matrix.salt_and_pepper(*amount, rng)?,
        FilterStep::Concat { other, direction } => {
            let other = ImageMatrix::decode(other)?;
            matrix.concat(&other, *direction)?
        }
        FilterStep::Segment { num_segments } => {
            return Ok(PipelineOutput::Segments(matrix.segment(*num_segments)?));
        }
    };
    Ok(PipelineOutput::Single(next))
}

/// Run `steps` in order. `segment` is terminal: any step after it is rejected
/// before work starts.
pub fn apply_steps<R: Rng + ?Sized>(
    matrix: ImageMatrix,
    steps: &[FilterStep],
    rng: &mut R,
) -> Result<PipelineOutput> {
    if let Some(pos) = steps
        .iter()
        .position(|s| matches!(s, FilterStep::Segment { .. }))
    {
        if pos + 1 != steps.len() {
            return Err(Error::InvalidArgument {
                arg: "steps",
                value: format!(
                    "segment must be the final step, found {} after it",
                    steps[pos + 1].kind()
                ),
            });
        }
    }

    info!(
        "Running {} step(s) on {:?} ({}x{})",
        steps.len(),
        matrix.source_path(),
        matrix.width(),
        matrix.height()
    );

    let mut current = matrix;
    for step in steps {
        debug!("apply_steps: {}", step.kind());
        match apply_step(&current, step, rng)? {
            PipelineOutput::Single(next) => current = next,
            segments @ PipelineOutput::Segments(_) => return Ok(segments),
        }
    }
    Ok(PipelineOutput::Single(current))
}

//! High-level, ergonomic library API: run a filter pipeline on one file or on
//! every image in a directory, and load pipeline parameters from JSON. Prefer
//! these entrypoints over the low-level processing modules when integrating
//! grayfilter.
use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::core::matrix::{ImageMatrix, PersistOptions};
use crate::core::params::PipelineParams;
use crate::core::processing::pipeline::{PipelineOutput, apply_steps};
use crate::error::Result;
use crate::io::is_supported_extension;

/// Noise source for a run: seeded when a seed is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn load_params(path: &Path) -> Result<PipelineParams> {
    PipelineParams::from_json_file(path)
}

/// Paths written by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistedOutput {
    Single(PathBuf),
    Segments(Vec<PathBuf>),
}

impl PersistedOutput {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            PersistedOutput::Single(p) => vec![p.as_path()],
            PersistedOutput::Segments(ps) => ps.iter().map(|p| p.as_path()).collect(),
        }
    }
}

/// Run the pipeline in memory without writing anything.
pub fn process_file_to_output(input: &Path, params: &PipelineParams) -> Result<PipelineOutput> {
    let matrix = ImageMatrix::decode(input)?;
    let mut rng = make_rng(params.seed);
    apply_steps(matrix, &params.steps, &mut rng)
}

/// Decode `input`, apply `params.steps` and persist next to the input.
pub fn process_file_to_path(input: &Path, params: &PipelineParams) -> Result<PersistedOutput> {
    let output = process_file_to_output(input, params)?;
    let options = PersistOptions {
        suffix: params.suffix.clone(),
        scaling: params.scaling,
    };
    let mut paths = output.persist_with(&options)?;
    Ok(match output {
        PipelineOutput::Single(_) => PersistedOutput::Single(paths.remove(0)),
        PipelineOutput::Segments(_) => PersistedOutput::Segments(paths),
    })
}

/// Summary of a directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// True for `{stem}{suffix}` and band outputs `{stem}{suffix}_{i}`.
fn is_previous_output(path: &Path, suffix: &str) -> bool {
    if suffix.is_empty() {
        return false;
    }
    let Some(stem) = path.file_stem() else {
        return false;
    };
    let stem = stem.to_string_lossy();
    if stem.ends_with(suffix) {
        return true;
    }
    match stem.rsplit_once('_') {
        Some((head, index)) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) => {
            head.ends_with(suffix)
        }
        _ => false,
    }
}

/// Process every supported image in `input_dir`, in file-name order.
///
/// Directories, unsupported extensions and files that already carry the output
/// suffix are skipped. With `continue_on_error` false the first failure is
/// returned; otherwise it is logged and counted.
pub fn process_directory_to_path(
    input_dir: &Path,
    params: &PipelineParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut entries: Vec<PathBuf> = fs::read_dir(input_dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::result::Result<_, _>>()?;
    entries.sort();

    info!("Starting batch processing from directory: {:?}", input_dir);
    let mut report = BatchReport::default();

    for path in entries {
        if !path.is_file()
            || !is_supported_extension(&path)
            || is_previous_output(&path, &params.suffix)
        {
            info!("Skipping: {:?}", path);
            report.skipped += 1;
            continue;
        }

        match process_file_to_path(&path, params) {
            Ok(out) => {
                info!("Successfully processed: {:?} -> {:?}", path, out.paths());
                report.processed += 1;
            }
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Batch processing complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_output_detection() {
        assert!(is_previous_output(Path::new("a_filtered.png"), "_filtered"));
        assert!(is_previous_output(Path::new("a_filtered_3.png"), "_filtered"));
        assert!(!is_previous_output(Path::new("a.png"), "_filtered"));
        assert!(!is_previous_output(Path::new("a.png"), ""));
        assert!(!is_previous_output(Path::new("my_filtered_cat.png"), "_filtered"));
        assert!(!is_previous_output(Path::new("a_filtered_x.png"), "_filtered"));
        assert!(!is_previous_output(Path::new("scan_2.png"), "_filtered"));
        assert!(is_previous_output(Path::new("a_edges_12.tif"), "_edges"));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let a: u64 = make_rng(Some(5)).random();
        let b: u64 = make_rng(Some(5)).random();
        assert_eq!(a, b);
    }
}

use clap::Parser;
use std::path::PathBuf;

use grayfilter::{ConcatDirection, FilterKind, Scaling};

#[derive(Parser, Debug)]
#[command(name = "grayfilter", version, about = "Grayscale image filter CLI")]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Filter to apply; repeat to chain filters in order
    #[arg(short = 'f', long = "filter", value_enum)]
    pub filters: Vec<FilterKind>,

    /// JSON pipeline config. Replaces --filter and the per-filter options
    #[arg(long)]
    pub pipeline: Option<PathBuf>,

    /// Blur window size
    #[arg(long, default_value_t = 16)]
    pub kernel_size: usize,

    /// Salt-and-pepper probability
    #[arg(long, default_value_t = 0.05)]
    pub amount: f64,

    /// Second image for concat
    #[arg(long)]
    pub other: Option<PathBuf>,

    /// Concat direction
    #[arg(long, value_enum, default_value_t = ConcatDirection::Horizontal)]
    pub direction: ConcatDirection,

    /// Number of row bands for segment
    #[arg(long, default_value_t = 4)]
    pub segments: usize,

    /// Mapping of samples to 8-bit on save (min-max or clamp)
    #[arg(long, value_enum, default_value_t = Scaling::MinMax)]
    pub scaling: Scaling,

    /// Suffix inserted before the output extension
    #[arg(long, default_value = "_filtered")]
    pub suffix: String,

    /// Seed for salt-and-pepper noise
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue with other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

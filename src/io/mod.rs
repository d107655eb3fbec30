//! I/O layer: the `reader` decode collaborator and the `writers` encode
//! collaborators (JPEG, TIFF and generic raster outputs).
pub mod reader;
pub use reader::{is_supported_extension, read_rgb_samples};

pub mod writers;
pub use writers::{derive_band_path, derive_output_path, write_gray};

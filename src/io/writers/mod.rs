//! Encode collaborators: grayscale JPEG, TIFF and generic `image` outputs,
//! plus derivation of output paths from the source path.
pub mod jpeg;
pub mod raster;
pub mod tiff;

use std::path::{Path, PathBuf};

use ndarray::ArrayView2;
use tracing::info;

use crate::core::processing::autoscale::autoscale_to_u8;
use crate::error::{Error, Result};
use crate::types::Scaling;

/// `dir/stem.ext` -> `dir/stem{suffix}.ext`. Paths without an extension just
/// get the suffix appended.
pub fn derive_output_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    source.with_file_name(name)
}

/// Output path of band `index` after segmentation: `dir/stem{suffix}_{index}.ext`.
pub fn derive_band_path(source: &Path, suffix: &str, index: usize) -> PathBuf {
    derive_output_path(source, &format!("{}_{}", suffix, index))
}

/// Scale `data` to 8-bit and write it as a single-channel image. The encoder is
/// chosen from the extension of `output`.
pub fn write_gray(output: &Path, data: ArrayView2<f64>, scaling: Scaling) -> Result<()> {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return Err(Error::persist(
            output,
            format!("cannot encode an empty {}x{} image", cols, rows),
        ));
    }

    let luma = autoscale_to_u8(data, scaling);
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let written = match ext.as_str() {
        "jpg" | "jpeg" => jpeg::write_gray_jpeg(output, cols, rows, &luma),
        "tif" | "tiff" => tiff::write_tiff_u8(output, cols, rows, &luma),
        _ => raster::write_gray_image(output, cols, rows, luma),
    };
    written.map_err(|e| Error::persist(output, e))?;

    info!("Saved {}x{} grayscale image to {:?}", cols, rows, output);
    Ok(())
}

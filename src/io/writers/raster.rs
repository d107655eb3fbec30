use image::GrayImage;
use std::path::Path;

/// Any format the `image` crate can infer from the output extension.
pub fn write_gray_image(
    output: &Path,
    cols: usize,
    rows: usize,
    data: Vec<u8>,
) -> Result<(), Box<dyn std::error::Error>> {
    let img = GrayImage::from_raw(u32::try_from(cols)?, u32::try_from(rows)?, data)
        .ok_or("buffer length does not match image dimensions")?;
    img.save(output)?;
    Ok(())
}

use ::tiff::encoder::{TiffEncoder, colortype};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_tiff_u8(
    output: &Path,
    cols: usize,
    rows: usize,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let width = u32::try_from(cols)?;
    let height = u32::try_from(rows)?;
    let file = File::create(output)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    encoder.write_image::<colortype::Gray8>(width, height, data)?;
    Ok(())
}

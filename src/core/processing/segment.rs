use ndarray::{Array2, ArrayView2, s};

use crate::error::{Error, Result};

pub const DEFAULT_NUM_SEGMENTS: usize = 4;

/// Row ranges `[start, end)` of each band. All bands but the last are
/// `rows / num_segments` tall; the last one absorbs the remainder. With more
/// bands than rows the leading bands are empty.
pub fn band_ranges(rows: usize, num_segments: usize) -> Result<Vec<(usize, usize)>> {
    if num_segments == 0 {
        return Err(Error::InvalidArgument {
            arg: "num_segments",
            value: num_segments.to_string(),
        });
    }

    let segment_height = rows / num_segments;
    Ok((0..num_segments)
        .map(|i| {
            let start = i * segment_height;
            let end = if i == num_segments - 1 {
                rows
            } else {
                start + segment_height
            };
            (start, end)
        })
        .collect())
}

/// Split into contiguous row bands.
pub fn split_rows(src: ArrayView2<f64>, num_segments: usize) -> Result<Vec<Array2<f64>>> {
    Ok(band_ranges(src.nrows(), num_segments)?
        .into_iter()
        .map(|(start, end)| src.slice(s![start..end, ..]).to_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;

    use super::*;

    #[test]
    fn test_band_heights() -> Result<()> {
        for (rows, n) in [(10, 4), (12, 4), (7, 7), (9, 2), (100, 3)] {
            let ranges = band_ranges(rows, n)?;
            assert_eq!(ranges.len(), n);
            let total: usize = ranges.iter().map(|(s, e)| e - s).sum();
            assert_eq!(total, rows);
            for &(s, e) in &ranges[..n - 1] {
                assert_eq!(e - s, rows / n);
            }
        }
        Ok(())
    }

    #[test]
    fn test_last_band_absorbs_remainder() -> Result<()> {
        assert_eq!(band_ranges(10, 4)?, vec![(0, 2), (2, 4), (4, 6), (6, 10)]);
        Ok(())
    }

    #[test]
    fn test_split_rows_contents() -> Result<()> {
        let src = Array2::from_shape_fn((5, 2), |(i, j)| (i * 2 + j) as f64);
        let bands = split_rows(src.view(), 2)?;
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0], src.slice(s![0..2, ..]));
        assert_eq!(bands[1], src.slice(s![2..5, ..]));
        Ok(())
    }

    #[test]
    fn test_invalid_segment_counts() {
        assert!(matches!(
            band_ranges(4, 0),
            Err(Error::InvalidArgument { arg: "num_segments", .. })
        ));
        assert!(matches!(
            split_rows(Array2::<f64>::zeros((3, 2)).view(), 0),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_more_segments_than_rows() -> Result<()> {
        assert_eq!(band_ranges(3, 4)?, vec![(0, 0), (0, 0), (0, 0), (0, 3)]);

        let bands = split_rows(Array2::<f64>::zeros((3, 2)).view(), 4)?;
        let heights: Vec<usize> = bands.iter().map(|b| b.nrows()).collect();
        assert_eq!(heights, vec![0, 0, 0, 3]);
        assert!(bands.iter().all(|b| b.ncols() == 2));
        Ok(())
    }
}

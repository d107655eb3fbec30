use ndarray::{Array2, ArrayView2, Axis, concatenate, s};

use crate::error::{Error, Result};
use crate::types::ConcatDirection;

/// Join two matrices after cropping both to their common top-left overlap.
///
/// With `height = min(rows)` and `width = min(cols)`, horizontal output is
/// `height x 2*width` and vertical output is `2*height x width`.
pub fn concat_cropped(
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    direction: ConcatDirection,
) -> Result<Array2<f64>> {
    let height = a.nrows().min(b.nrows());
    let width = a.ncols().min(b.ncols());

    let a = a.slice(s![..height, ..width]);
    let b = b.slice(s![..height, ..width]);

    let axis = match direction {
        ConcatDirection::Horizontal => Axis(1),
        ConcatDirection::Vertical => Axis(0),
    };
    concatenate(axis, &[a, b]).map_err(|e| Error::dimension("concat", e.to_string()))
}

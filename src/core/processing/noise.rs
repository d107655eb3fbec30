use ndarray::Array2;
use rand::Rng;

use crate::error::{Error, Result};

pub const DEFAULT_NOISE_AMOUNT: f64 = 0.05;
pub const PEPPER: f64 = 0.0;
pub const SALT: f64 = 255.0;

/// Salt-and-pepper noise in place.
///
/// Each cell draws once: below `amount` it becomes pepper. Otherwise it draws
/// again and becomes salt below `amount`. Salt therefore lands with probability
/// `amount * (1 - amount)`. Cells are visited column by column so a seeded
/// source reproduces the same pattern.
pub fn salt_and_pepper_inplace<R: Rng + ?Sized>(
    data: &mut Array2<f64>,
    amount: f64,
    rng: &mut R,
) -> Result<()> {
    if !(0.0..=1.0).contains(&amount) {
        return Err(Error::InvalidArgument {
            arg: "amount",
            value: amount.to_string(),
        });
    }

    let (rows, cols) = data.dim();
    for x in 0..cols {
        for y in 0..rows {
            if rng.random::<f64>() < amount {
                data[[y, x]] = PEPPER;
            } else if rng.random::<f64>() < amount {
                data[[y, x]] = SALT;
            }
        }
    }
    Ok(())
}

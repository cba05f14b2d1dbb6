use crate::utils::error::{ExampleError, Result};
use rand::Rng;

/// Large constant exposed by the API, used as the default upper sampling
/// bound.
pub const BIG_NUMBER: i32 = 124356;

/// Returns a uniformly distributed integer inside `[min, max]`, both ends
/// inclusive.
///
/// Not suitable for cryptographic use. An inverted range (`min > max`) is
/// rejected with [`ExampleError::RangeError`].
pub fn random_number(min: i32, max: i32) -> Result<i32> {
    draw(&mut rand::thread_rng(), min, max)
}

fn draw<R: Rng>(rng: &mut R, min: i32, max: i32) -> Result<i32> {
    if min > max {
        return Err(ExampleError::RangeError { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

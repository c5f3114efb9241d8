use crate::error::{ToolError, ToolResult};
use num_traits::{PrimInt, Signed};
use rand::distributions::uniform::SampleUniform;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use std::fmt::Display;

/// Returns a uniformly distributed integer in `[min, max)`, drawn from a
/// generator seeded by the operating system.
pub fn rand_int<N>(min: N, max: N) -> ToolResult<N>
where
    N: PrimInt + Signed + SampleUniform + Display,
{
    if min >= max {
        return Err(ToolError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }

    let mut rng = StdRng::from_rng(OsRng)?;
    Ok(rng.gen_range(min..max))
}

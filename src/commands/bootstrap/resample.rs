use rand::Rng;

use crate::{
    error::BootstrapError,
    types::{Line, Replicate, ReplicateSet},
};

/// Draws `nreps` bootstrap replicates from `data`.
///
/// Each replicate has `data.len()` positions drawn uniformly with
/// replacement. Drawing any replicate from an empty population is an error;
/// zero replicates always succeed.
pub fn resample<R: Rng>(
    data: &[Line],
    nreps: usize,
    rng: &mut R,
) -> Result<ReplicateSet, BootstrapError> {
    if data.is_empty() && nreps > 0 {
        return Err(BootstrapError::EmptyPopulation { replicates: nreps });
    }
    let set = (0..nreps)
        .map(|index| {
            let draws = (0..data.len())
                .map(|_| rng.random_range(0..data.len()))
                .collect();
            Replicate::new(index, draws)
        })
        .collect();
    Ok(set)
}

//! Continuity-corrected normal approximation of the Poisson distribution.

use std::f64::consts::FRAC_1_SQRT_2;

use frequency::prelude::*;
use statrs::function::erf::erf;

use crate::{Result, distributions::validate_rate};

/// `P(k - 0.5 < X < k + 0.5)` for `X ~ Normal(lambda, lambda)`.
///
/// This approximates the Poisson probability mass at `k`. Fails with
/// [`Error::InvalidParameter`](crate::Error::InvalidParameter) unless lambda is positive.
pub fn pmf(k: usize, lambda: f64) -> Result<f64> {
    let lambda = validate_rate(lambda)?;
    Ok(bucket_mass(k, lambda, lambda.sqrt()))
}

fn bucket_mass(k: usize, lambda: f64, sigma: f64) -> f64 {
    let k = k as f64;
    let z1 = (k - 0.5 - lambda) / sigma;
    let z2 = (k + 0.5 - lambda) / sigma;
    // erf(z / sqrt(2)) = 2 * Phi(z) - 1
    let mass = 0.5 * (erf(z2 * FRAC_1_SQRT_2) - erf(z1 * FRAC_1_SQRT_2));
    mass.max(0.0)
}

/// Expected counts of a Normal(lambda, lambda) sample of size `n` bucketed on `0..=max_value`.
///
/// The raw masses miss the tails below 0 and above `max_value`, so the table is rescaled to sum
/// to exactly `n`. If every bucket has zero mass the all-zero table is returned.
pub fn expected_counts(max_value: usize, lambda: f64, n: usize) -> Result<FrequencyTable<f64>> {
    let lambda = validate_rate(lambda)?;
    let mut table = FrequencyTable::<f64>::zeroed(max_value)?;
    if n == 0 {
        return Ok(table);
    }

    let sigma = lambda.sqrt();
    let n = n as f64;
    for (k, slot) in table.counts_mut().iter_mut().enumerate() {
        *slot = bucket_mass(k, lambda, sigma) * n;
    }

    let total = table.total();
    if total <= 0.0 {
        log::warn!("normal approximation has no mass on 0..={max_value} for lambda = {lambda}");
        return Ok(FrequencyTable::zeroed(max_value)?);
    }

    let scale_factor = n / total;
    log::debug!("rescaling expected counts by {scale_factor:.6}");
    for slot in table.counts_mut() {
        *slot *= scale_factor;
    }
    Ok(table)
}

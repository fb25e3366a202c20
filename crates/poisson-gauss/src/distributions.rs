use rand::{Rng, SeedableRng, distr::Distribution, rngs::SmallRng};

use crate::{Error, Result};

/// Uniform random source driving every draw of a run.
///
/// It is created once by the caller and passed down by reference, so a fixed seed reproduces a
/// whole simulation.
pub type VariateSource = SmallRng;

/// Create the uniform source for one run, from `seed` if given, otherwise from the OS.
pub fn variate_source(seed: Option<u64>) -> VariateSource {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Rates above this make Knuth's method noticeably slow.
///
/// Past roughly 745, `exp(-lambda)` underflows to zero and the loop only stops once the product
/// of uniforms underflows too, so the draws are no longer Poisson distributed.
pub const KNUTH_RATE_LIMIT: f64 = 30.0;

/// Check that `lambda` can be used as a Poisson rate.
pub fn validate_rate(lambda: f64) -> Result<f64> {
    if lambda.is_finite() && lambda > 0.0 {
        Ok(lambda)
    } else {
        Err(Error::InvalidParameter {
            name: "lambda",
            value: lambda,
        })
    }
}

/// A Poisson distribution sampler using Knuth's algorithm.
///
/// Expected cost per draw is `O(lambda + 1)` uniform draws, so this is only suitable for small
/// rates. Larger rates are accepted but logged, see [`KNUTH_RATE_LIMIT`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoissonKnuth {
    exp_lambda: f64,
}

impl PoissonKnuth {
    /// Create a new Poisson distribution with the given lambda.
    ///
    /// Returns [`Error::InvalidParameter`] if lambda is not positive and finite.
    pub fn new(lambda: f64) -> Result<Self> {
        let lambda = validate_rate(lambda)?;
        if lambda > KNUTH_RATE_LIMIT {
            log::warn!("lambda = {lambda} is large for Knuth's method, sampling will be slow");
        }
        let exp_lambda = (-lambda).exp();
        Ok(Self { exp_lambda })
    }
}

impl Distribution<u32> for PoissonKnuth {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> u32 {
        // Knuth algorithm, at least one uniform is drawn even when exp(-lambda) rounds to 1
        let mut k = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= rng.random::<f64>();
            if p <= self.exp_lambda {
                break k - 1;
            }
        }
    }
}

/// Draw a single Poisson variate with rate `lambda`.
pub fn sample_poisson<G: Rng + ?Sized>(lambda: f64, rng: &mut G) -> Result<u32> {
    Ok(PoissonKnuth::new(lambda)?.sample(rng))
}

/// Draw `size` independent Poisson variates with rate `lambda`.
pub fn simulate<G: Rng + ?Sized>(lambda: f64, size: usize, rng: &mut G) -> Result<Vec<u32>> {
    let poisson = PoissonKnuth::new(lambda)?;
    let mut data = Vec::new();
    data.try_reserve_exact(size)?;
    data.extend((0..size).map(|_| poisson.sample(rng)));
    log::debug!("drew {size} Poisson({lambda:.3}) variates");
    Ok(data)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use rand::{SeedableRng, distr::Distribution, rngs::SmallRng};

    use super::*;
    use crate::stats::{mean, variance};

    #[test]
    fn test_poisson_new() {
        assert!(PoissonKnuth::new(1.5).is_ok());
        assert!(PoissonKnuth::new(40.0).is_ok());
        assert!(matches!(
            PoissonKnuth::new(0.0),
            Err(Error::InvalidParameter { name: "lambda", .. })
        ));
        assert!(PoissonKnuth::new(-1.0).is_err());
        assert!(PoissonKnuth::new(f64::NAN).is_err());
        assert!(PoissonKnuth::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sample_poisson_rejects_bad_rate() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(matches!(
            sample_poisson(0.0, &mut rng),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            sample_poisson(-3.0, &mut rng),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(sample_poisson(3.0, &mut rng).is_ok());
    }

    const SAMPLE_SIZE: usize = 100_000;

    #[test]
    fn test_poisson_distribution_stats() {
        // For Poisson distribution, mean and variance both equal lambda
        let lambda = 3.0;
        let poisson = PoissonKnuth::new(lambda).unwrap();
        let rng = SmallRng::seed_from_u64(2024);

        let samples = poisson
            .sample_iter(rng)
            .take(SAMPLE_SIZE)
            .collect::<Vec<u32>>();

        let m = mean(&samples).unwrap();
        assert!((m - lambda).abs() < 0.05);

        let v = variance(&samples, m).unwrap();
        assert!((v - lambda).abs() < 0.2);
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let a = simulate(4.0, 1000, &mut variate_source(Some(7))).unwrap();
        let b = simulate(4.0, 1000, &mut variate_source(Some(7))).unwrap();
        assert_eq!(a.len(), 1000);
        assert_eq!(a, b);

        assert!(simulate(4.0, 0, &mut variate_source(Some(7))).unwrap().is_empty());
        assert!(simulate(0.0, 10, &mut variate_source(Some(7))).is_err());
    }

    #[test]
    fn test_rate_below_f64_resolution() {
        // exp(-1e-17) is exactly 1.0
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!((-1e-17f64).exp(), 1.0);
        for _ in 0..1000 {
            assert_eq!(sample_poisson(1e-17, &mut rng).unwrap(), 0);
        }
        assert!(simulate(1e-17, 500, &mut rng).unwrap().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_tiny_rate_is_mostly_zero() {
        let data = simulate(0.01, 10_000, &mut variate_source(Some(3))).unwrap();
        let zeros = data.iter().filter(|&&x| x == 0).count();
        assert!(zeros > 9_800);
    }
}

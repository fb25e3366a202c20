//! Sample moments of count sequences.

use crate::{Error, Result};

/// Arithmetic mean of `values`.
pub fn mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput { what: "mean" });
    }
    let sum: f64 = values.iter().map(|&x| x.into()).sum();
    Ok(sum / values.len() as f64)
}

/// Population variance of `values` around a given `mean` (divides by `n`, not `n - 1`).
///
/// Taking the mean as an argument keeps it identical to the one reported next to the variance.
pub fn variance<T: Copy + Into<f64>>(values: &[T], mean: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput { what: "variance" });
    }
    let sum_of_squares: f64 = values
        .iter()
        .map(|&x| {
            let deviation = x.into() - mean;
            deviation * deviation
        })
        .sum();
    Ok(sum_of_squares / values.len() as f64)
}

/// Mean and population variance of one dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
}

impl Summary {
    pub fn of<T: Copy + Into<f64>>(values: &[T]) -> Result<Self> {
        let mean = mean(values)?;
        let variance = variance(values, mean)?;
        Ok(Self { mean, variance })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1u32, 2, 3, 6]).unwrap(), 3.0);
        assert_eq!(mean(&[5u32]).unwrap(), 5.0);
    }

    #[test]
    fn test_variance() {
        let data: Vec<u32> = vec![2, 4, 4, 4, 5, 5, 7, 9];
        assert_eq!(variance(&data, 5.0).unwrap(), 4.0);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<u32> = vec![];
        assert!(matches!(
            mean(&empty),
            Err(Error::EmptyInput { what: "mean" })
        ));
        assert!(matches!(
            variance(&empty, 0.0),
            Err(Error::EmptyInput { what: "variance" })
        ));
        assert!(Summary::of(&empty).is_err());
    }

    #[test]
    fn test_summary() {
        let summary = Summary::of(&[2u32, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.variance, 4.0);
    }
}

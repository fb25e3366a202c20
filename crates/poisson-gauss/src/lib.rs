#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Simulate Poisson count data from a rate estimated on a small sample and compare it with the
//! continuity-corrected normal approximation, side by side as ASCII histograms.

mod error;
pub use error::{Error, Result};

pub mod dataset;
pub mod distributions;
pub mod gaussian;
pub mod histogram;
pub mod pipeline;
pub mod stats;

pub mod prelude {
    pub use super::{
        Error, Result,
        distributions::{PoissonKnuth, VariateSource, sample_poisson, simulate, variate_source},
        gaussian::{expected_counts, pmf},
        histogram::{DisplayCount, Histogram, HistogramRenderer, HistogramRow, MAX_STARS},
        pipeline::{Analysis, Config, Estimate, Report, run},
        stats::{Summary, mean, variance},
    };
    pub use frequency::prelude::*;
}

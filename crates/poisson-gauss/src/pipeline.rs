//! Estimate, simulate, tabulate, approximate and render, in that order.

use std::{fmt, path::PathBuf};

use frequency::prelude::*;
use rand::Rng;

use crate::{
    Result, dataset,
    distributions::{simulate, validate_rate, variate_source},
    gaussian::expected_counts,
    histogram::{DisplayCount, Histogram, HistogramRenderer, MAX_STARS},
    stats::{Summary, mean},
};

/// Small-sample size of the reference use case.
pub const DEFAULT_SAMPLE_SIZE: usize = 32;

/// Everything one run needs.
#[derive(Clone, Debug)]
pub struct Config {
    /// File holding the small observed sample.
    pub input: PathBuf,
    /// File the simulated dataset is written to.
    pub output: PathBuf,
    pub description: String,
    /// Maximum number of observations read from `input`.
    pub sample_size: usize,
    /// Number of values to simulate.
    pub size: usize,
    pub seed: Option<u64>,
    pub max_stars: usize,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, size: usize) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            description: String::new(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            size,
            seed: None,
            max_stars: MAX_STARS,
        }
    }
}

/// The small sample and the Poisson rate estimated from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub sample: Vec<u32>,
    pub lambda: f64,
}

impl Estimate {
    /// Estimate the rate as the sample mean.
    ///
    /// Fails on an empty sample, and on an all-zero sample since a zero rate cannot be simulated.
    pub fn from_sample(sample: Vec<u32>) -> Result<Self> {
        let lambda = validate_rate(mean(&sample)?)?;
        log::info!(
            "estimated lambda = {lambda:.3} from {} observations",
            sample.len()
        );
        Ok(Self { sample, lambda })
    }
}

/// Comparison of a simulated dataset with its normal approximation.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub size: usize,
    pub summary: Summary,
    pub observed: FrequencyTable<usize>,
    pub expected: FrequencyTable<f64>,
    pub poisson: Histogram,
    pub gaussian: Histogram,
}

impl Analysis {
    /// Analyse `data` against Normal(`lambda`, `lambda`).
    pub fn of(data: &[u32], lambda: f64, renderer: &HistogramRenderer) -> Result<Self> {
        let summary = Summary::of(data)?;
        let observed = FrequencyTable::<usize>::build(data)?;
        let expected = expected_counts(observed.max_value(), lambda, data.len())?;
        log::debug!(
            "tabulated {} values on 0..={}",
            data.len(),
            observed.max_value()
        );

        let poisson = renderer.render(&observed, "Poisson");
        let gaussian = renderer.render(&expected, "Gaussian");
        Ok(Self {
            size: data.len(),
            summary,
            observed,
            expected,
            poisson,
            gaussian,
        })
    }
}

/// Simulate `size` values from the estimated rate and analyse them.
///
/// Returns the simulated data together with its analysis.
pub fn simulate_and_compare<G: Rng + ?Sized>(
    estimate: &Estimate,
    size: usize,
    renderer: &HistogramRenderer,
    rng: &mut G,
) -> Result<(Vec<u32>, Analysis)> {
    let data = simulate(estimate.lambda, size, rng)?;
    let analysis = Analysis::of(&data, estimate.lambda, renderer)?;
    Ok((data, analysis))
}

/// Run the whole pipeline described by `config`.
///
/// The simulated dataset is written to `config.output` and read back before it is analysed, so
/// the report always describes the file on disk.
pub fn run(config: &Config) -> Result<Report> {
    let sample = dataset::read_sample(&config.input, config.sample_size)?;
    if !sample.is_empty() && sample.len() < config.sample_size {
        log::warn!(
            "{} holds only {} of {} requested observations",
            config.input.display(),
            sample.len(),
            config.sample_size
        );
    }
    let estimate = Estimate::from_sample(sample)?;

    let mut rng = variate_source(config.seed);
    let data = simulate(estimate.lambda, config.size, &mut rng)?;
    dataset::write_counts(&config.output, &data)?;
    let data = dataset::read_counts(&config.output)?;

    let renderer = HistogramRenderer::new(config.max_stars);
    let analysis = Analysis::of(&data, estimate.lambda, &renderer)?;

    Ok(Report {
        description: config.description.clone(),
        output: config.output.clone(),
        estimate,
        analysis,
    })
}

/// Printable result of [`run`].
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub description: String,
    pub output: PathBuf,
    pub estimate: Estimate,
    pub analysis: Analysis,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            description,
            output,
            estimate,
            analysis,
        } = self;

        writeln!(f, "=== SMALL DATASET ===")?;
        writeln!(f, "Description: {description}")?;
        writeln!(f, "Size: {}", estimate.sample.len())?;
        for value in &estimate.sample {
            writeln!(f, "{value}")?;
        }

        writeln!(f, "\n=== SUMMARY STATISTICS ===")?;
        writeln!(f, "Estimated parameter lambda = {:.3}", estimate.lambda)?;
        writeln!(
            f,
            "\nGenerating {} Poisson({:.3}) samples...",
            analysis.size, estimate.lambda
        )?;
        writeln!(
            f,
            "Sample mean of large dataset: {:.3}",
            analysis.summary.mean
        )?;
        writeln!(
            f,
            "Sample variance of large dataset: {:.3}",
            analysis.summary.variance
        )?;

        writeln!(f, "\n=== FREQUENCY TABLE ===")?;
        writeln!(f, "\nFrequency Table:")?;
        write!(f, "{}", TableView(&analysis.observed))?;

        writeln!(f, "\n=== GAUSSIAN APPROXIMATION ===\n")?;
        write!(f, "{}", TableView(&analysis.expected))?;

        writeln!(f, "\n=== POISSON HISTOGRAM (from simulation) ===\n")?;
        write!(f, "{}", analysis.poisson)?;

        writeln!(f, "\n=== GAUSSIAN HISTOGRAM (theoretical approximation) ===\n")?;
        write!(f, "{}", analysis.gaussian)?;

        writeln!(f, "\n=== PROGRAM COMPLETE ===")?;
        writeln!(f, "Data saved to: {}", output.display())
    }
}

/// "Value | Frequency" listing of the visible entries of a table.
pub struct TableView<'a, C>(pub &'a FrequencyTable<C>);

impl<C: DisplayCount> fmt::Display for TableView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Value | Frequency")?;
        writeln!(f, "------|----------")?;
        for (value, count) in self.0.iter().filter(|&(_, count)| count.is_visible()) {
            writeln!(f, "{value:>5} | {:>9}", count.label())?;
        }
        Ok(())
    }
}

use std::{
    io::{self, BufRead, Write},
    ops::RangeInclusive,
    path::PathBuf,
};

use clap::Parser;
use poisson_gauss::{
    Error, Result,
    histogram::MAX_STARS,
    pipeline::{Config, DEFAULT_SAMPLE_SIZE},
};

/// Accepted sizes of the simulated dataset.
const SIZE_RANGE: RangeInclusive<usize> = 10_000..=20_000;

/// Estimate a Poisson rate from a small sample, simulate a large dataset from it and compare the
/// result with the normal approximation.
///
/// Description, size and output file are asked for interactively when not given.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// File with the small sample, integers separated by commas or whitespace
    #[arg(short, long, default_value = "number_of_likes_per_min.csv")]
    pub input: PathBuf,

    /// Description of the small dataset
    #[arg(short, long)]
    pub description: Option<String>,

    /// Size of the simulated dataset (10000 - 20000)
    #[arg(short = 'n', long, value_parser = dataset_size)]
    pub size: Option<usize>,

    /// File the simulated dataset is written to, one value per line
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of observations read from the input file
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE, value_parser = positive)]
    pub sample_size: usize,

    /// Seed for a reproducible simulation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Width of the tallest histogram bar
    #[arg(long, default_value_t = MAX_STARS, value_parser = positive)]
    pub max_stars: usize,
}

impl Args {
    /// Fill in whatever was not given on the command line by asking through `prompter`.
    pub fn into_config<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Config> {
        let description = match self.description {
            Some(description) => description,
            None => prompter.description()?,
        };
        let size = match self.size {
            Some(size) => size,
            None => prompter.size()?,
        };
        let output = match self.output {
            Some(output) => output,
            None => prompter.output()?,
        };

        Ok(Config {
            input: self.input,
            output,
            description,
            sample_size: self.sample_size,
            size,
            seed: self.seed,
            max_stars: self.max_stars,
        })
    }
}

fn dataset_size(s: &str) -> std::result::Result<usize, String> {
    let size: usize = s.trim().parse().map_err(|_| format!("{s:?} is not a number"))?;
    if SIZE_RANGE.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "{size} is not in {}..={}",
            SIZE_RANGE.start(),
            SIZE_RANGE.end()
        ))
    }
}

fn positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_owned()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Asks questions on `output` and reads the answers line by line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").map_err(Error::Prompt)?;
        self.output.flush().map_err(Error::Prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(Error::Prompt)? == 0 {
            return Err(Error::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    pub fn description(&mut self) -> Result<String> {
        self.ask("Enter description of the small dataset: ")
    }

    /// Ask until the answer is a size within range.
    pub fn size(&mut self) -> Result<usize> {
        loop {
            let answer = self.ask("Enter an N for a large dataset version (10000 - 20000): ")?;
            match dataset_size(&answer) {
                Ok(size) => return Ok(size),
                Err(e) => log::warn!("invalid size: {e}"),
            }
        }
    }

    /// Ask until the answer is non-empty; only its first word is used.
    pub fn output(&mut self) -> Result<PathBuf> {
        loop {
            let answer = self.ask("Enter output filename (e.g., simulated.txt): ")?;
            if let Some(name) = answer.split_whitespace().next() {
                return Ok(PathBuf::from(name));
            }
        }
    }
}

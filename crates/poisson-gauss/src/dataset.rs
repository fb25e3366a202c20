//! Plain-text count files.
//!
//! Small samples are read from a CSV-like file: non-negative integers separated by commas
//! and/or whitespace, across any number of lines. Simulated datasets are written one integer per
//! line.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Error, Result};

/// Read at most `limit` counts from the file at `path`.
pub fn read_sample(path: &Path, limit: usize) -> Result<Vec<u32>> {
    let file = File::open(path).map_err(Error::io(path))?;
    parse_counts(BufReader::new(file), path, limit)
}

/// Read every count from the file at `path`.
pub fn read_counts(path: &Path) -> Result<Vec<u32>> {
    read_sample(path, usize::MAX)
}

/// Parse at most `limit` counts from `reader`; `path` is only used in error messages.
///
/// Anything after the first `limit` counts is not looked at.
pub fn parse_counts<R: BufRead>(reader: R, path: &Path, limit: usize) -> Result<Vec<u32>> {
    let mut counts = Vec::new();
    if limit == 0 {
        return Ok(counts);
    }

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::io(path))?;
        let tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let count = token.parse::<u32>().map_err(|_| Error::Parse {
                path: path.to_owned(),
                line: index + 1,
                token: token.to_owned(),
            })?;
            counts.push(count);
            if counts.len() == limit {
                return Ok(counts);
            }
        }
    }
    Ok(counts)
}

/// Write `counts` to `path`, one per line, replacing any existing file.
pub fn write_counts(path: &Path, counts: &[u32]) -> Result<()> {
    let file = File::create(path).map_err(Error::io(path))?;
    let mut writer = BufWriter::new(file);
    for count in counts {
        writeln!(writer, "{count}").map_err(Error::io(path))?;
    }
    writer.flush().map_err(Error::io(path))?;
    log::debug!("wrote {} counts to {}", counts.len(), path.display());
    Ok(())
}

//! Dense frequency tables indexed directly by value.

use std::collections::TryReserveError;

use crate::num_traits::*;

/// A frequency table covering every value in `0..=max_value`.
///
/// Values that were never observed are still present with a zero count, so the table can be
/// walked as one contiguous range. The dense layout assumes the largest value is known before
/// allocation and that the range is small; for sparse or unbounded values a `HashMap<usize, C>`
/// would be the better container.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyTable<C> {
    counts: Vec<C>,
}

impl<C: Count> FrequencyTable<C> {
    /// Create a table for `0..=max_value` with every count set to zero.
    ///
    /// Fails instead of aborting if the memory for the table cannot be reserved.
    pub fn zeroed(max_value: usize) -> Result<Self, TryReserveError> {
        let len = max_value.checked_add(1).unwrap_or(usize::MAX);
        let mut counts = Vec::new();
        counts.try_reserve_exact(len)?;
        counts.resize(len, C::ZERO);
        Ok(Self { counts })
    }

    /// Wrap existing dense counts. An empty vector becomes the single-entry table `[0]`.
    pub fn from_counts(mut counts: Vec<C>) -> Self {
        if counts.is_empty() {
            counts.push(C::ZERO);
        }
        Self { counts }
    }

    /// Count every value in `values`.
    ///
    /// The table spans `0..=max(values)`; an empty slice gives the all-zero table of size one.
    ///
    /// # Example
    ///
    /// ```
    /// use frequency::prelude::*;
    ///
    /// let table: FrequencyTable<usize> = FrequencyTable::build(&[1u32, 3, 1]).unwrap();
    /// assert_eq!(table.max_value(), 3);
    /// assert_eq!(table.counts(), &[0, 2, 0, 1]);
    /// ```
    pub fn build<T: ToUsize + Copy>(values: &[T]) -> Result<Self, TryReserveError> {
        let max_value = values.iter().map(|&v| v.to_usize()).max().unwrap_or(0);
        let mut table = Self::zeroed(max_value)?;
        for &value in values {
            table.counts[value.to_usize()] += C::ONE;
        }
        Ok(table)
    }

    /// The largest value covered by the table.
    pub fn max_value(&self) -> usize {
        self.counts.len() - 1
    }

    /// Count of `value`, zero when it lies beyond the table.
    pub fn get(&self, value: usize) -> C {
        self.counts.get(value).copied().unwrap_or(C::ZERO)
    }

    pub fn counts(&self) -> &[C] {
        &self.counts
    }

    pub fn counts_mut(&mut self) -> &mut [C] {
        &mut self.counts
    }

    /// Iterate over `(value, count)` pairs in ascending value order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, C)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    /// Sum of all counts.
    pub fn total(&self) -> C {
        self.counts.iter().fold(C::ZERO, |mut acc, &c| {
            acc += c;
            acc
        })
    }

    /// The largest single count, `ZERO` for an all-zero table.
    pub fn max_count(&self) -> C {
        self.counts
            .iter()
            .fold(C::ZERO, |acc, &c| if c > acc { c } else { acc })
    }
}

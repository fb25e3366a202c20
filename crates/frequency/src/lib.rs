#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Dense frequency tables for small non-negative integer values.
//!
//! Counts can be integers (observed occurrences) or floats (expected counts), so the same table
//! type carries both an empirical distribution and a theoretical one over the same value range.

pub mod prelude {
    //! Import of useful traits and types from the crate

    pub use crate::{num_traits::*, table::*};
}

pub mod num_traits;
pub mod table;

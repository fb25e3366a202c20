//! This module contains some number traits used in frequency counting

/// A trait for safely and infallibly converting a type to a usize.
///
/// The converted value is used directly as an index into a dense table, so two values
/// converting to the same usize are counted as the same element.
///
/// This trait is currently only implemented for unsigned integers whose bit width is less than or
/// equal to the system's pointer width. So this trait is not implemented for `u64` on 32 bits
/// systems, which would otherwise lead to wrong results due to truncation.
pub trait ToUsize {
    fn to_usize(self) -> usize;
}

macro_rules! impl_to_usize {
    ($($uint_type:ty),*) => {
        $(
            impl ToUsize for $uint_type {
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_to_usize!(u8, u16, usize);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_to_usize!(u32);

#[cfg(target_pointer_width = "64")]
impl_to_usize!(u64);

/// A trait representing a type that can be stored as a count in a frequency table
///
/// It's implemented for unsigned integers (observed occurrences) and floating-point numbers
/// (expected or weighted counts).
pub trait Count: std::ops::AddAssign + Sized + Copy + PartialEq + PartialOrd {
    const ZERO: Self;
    const ONE: Self;

    /// Lossy conversion used for scaling and display.
    fn to_f64(self) -> f64;
}

macro_rules! impl_count_for_int {
    ($($int_type:ty),*) => {
        $(
            impl Count for $int_type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_count_for_int!(u8, u16, u32, u64, usize);

macro_rules! impl_count_for_float {
    ($($float_type:ty),*) => {
        $(
            impl Count for $float_type {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_count_for_float!(f32, f64);

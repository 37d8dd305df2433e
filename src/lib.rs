//! Fixed-size, real-to-complex FFT using the iterative radix-2 Cooley-Tukey algorithm.
//!
//! A [`Planner`] is built once for a power-of-two size `N`. Building it pre-computes the bit
//! reversal table and one twiddle factor per stage; every call to [`Planner::transform`] then
//! reuses those tables to turn `N` real samples into `N` complex coefficients in `O(N log N)`.
//!
//! ```
//! use radix2fft::planner::Planner64;
//!
//! let planner = Planner64::new(8);
//! let spectrum = planner.transform(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
//! assert_eq!(spectrum[0].re, 8.0);
//!
//! let magnitudes = planner.magnitude(&spectrum, true);
//! assert_eq!(magnitudes.len(), 5);
//! ```
#![forbid(unsafe_code)]

use num_complex::{Complex32, Complex64};

use crate::planner::{Planner32, Planner64};

pub mod bit_reversal;
pub mod error;
mod fft;
mod kernels;
pub mod planner;
pub mod twiddles;

pub use crate::error::PlanError;
pub use crate::planner::Planner;

/// Exact base 2 logarithm of `n`.
///
/// Returns `None` unless `n` is a power of two.
pub fn log2(n: usize) -> Option<u32> {
    if n.is_power_of_two() {
        Some(n.trailing_zeros())
    } else {
        None
    }
}

macro_rules! impl_fft_for {
    ($func_name:ident, $precision:ty, $planner:ty, $complex:ty) => {
        /// FFT of a real signal in a single call.
        ///
        /// This plans a transform sized to `input`, so prefer building a [`Planner`] once when
        /// transforming many signals of the same length.
        ///
        /// # Panics
        ///
        /// Panics if `input.len()` is zero or __not__ a power of 2
        pub fn $func_name(input: &[$precision]) -> Vec<$complex> {
            let planner = <$planner>::new(input.len());
            planner.transform(input)
        }
    };
}

impl_fft_for!(fft_32, f32, Planner32, Complex32);
impl_fft_for!(fft_64, f64, Planner64, Complex64);

#[cfg(test)]
mod tests {
    use utilities::{assert_complex_closeness, reference_fft_64};

    use super::*;

    #[test]
    fn log2_of_powers_of_two() {
        for k in 0..usize::BITS {
            assert_eq!(log2(1usize << k), Some(k));
        }
    }

    #[test]
    fn log2_rejects_other_values() {
        for n in [0, 3, 5, 6, 7, 9, 1000, usize::MAX] {
            assert_eq!(log2(n), None);
        }
    }

    #[test]
    fn fft_64_one_shot() {
        let signal: Vec<f64> = (0..64).map(|i| (f64::from(i) * 0.3).cos()).collect();
        let actual = fft_64(&signal);
        let expected = reference_fft_64(&signal);

        assert_eq!(actual.len(), 64);
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_complex_closeness(*a, *e, 1e-9);
        }
    }

    #[test]
    fn fft_32_one_shot() {
        let spectrum = fft_32(&[0.0, 1.0, 0.0, 0.0]);
        // x[n] = δ[n - 1] gives X[k] = exp(-2πik / 4)
        let expected = [
            Complex32::new(1.0, 0.0),
            Complex32::new(0.0, -1.0),
            Complex32::new(-1.0, 0.0),
            Complex32::new(0.0, 1.0),
        ];
        for (a, e) in spectrum.iter().zip(expected.iter()) {
            assert_complex_closeness(*a, *e, 1e-6);
        }
    }

    #[test]
    #[should_panic(expected = "not a power of 2")]
    fn fft_64_rejects_odd_length() {
        fft_64(&[1.0, 2.0, 3.0]);
    }
}

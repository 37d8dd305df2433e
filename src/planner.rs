//! The planner module provides the transform configuration for a fixed-size FFT.
//! Building a planner validates the size once and pre-computes the bit reversal table
//! and the per-stage twiddle factors, which are then reused by every transform.
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::bit_reversal::reversed_indexes;
use crate::error::PlanError;
use crate::log2;
use crate::twiddles::stage_twiddles;

/// The planner is responsible for pre-computing and storing the tables for all the
/// `log_2(N)` stages of the FFT.
///
/// Both tables are immutable once built, so a single planner can be shared across threads
/// that run independent transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct Planner<T> {
    num_points: usize,
    log_n: u32,
    reversed_indexes: Vec<usize>,
    twiddles: Vec<Complex<T>>,
    /// `num_points` in the working precision, used to normalize magnitudes
    scale: T,
}

/// Single precision planner
pub type Planner32 = Planner<f32>;
/// Double precision planner
pub type Planner64 = Planner<f64>;

impl<T: Float + FloatConst> Planner<T> {
    /// Create a `Planner` for an FFT of size `num_points`.
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 1` or if `num_points` is __not__ a power of 2.
    /// Use [`Planner::try_new`] to handle the error instead.
    pub fn new(num_points: usize) -> Self {
        match Self::try_new(num_points) {
            Ok(planner) => planner,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a `Planner` for an FFT of size `num_points`, or report why that size is not
    /// supported.
    pub fn try_new(num_points: usize) -> Result<Self, PlanError> {
        if num_points == 0 {
            return Err(PlanError::Empty);
        }
        let log_n = log2(num_points).ok_or(PlanError::NotPowerOfTwo { num_points })?;

        let reversed_indexes = reversed_indexes(log_n);
        let twiddles = stage_twiddles(log_n);
        assert_eq!(reversed_indexes.len(), num_points);
        assert_eq!(twiddles.len(), log_n as usize);

        // Powers of two are exact in any binary floating point type
        let scale = (0..log_n).fold(T::one(), |acc, _| acc + acc);

        Ok(Self {
            num_points,
            log_n,
            reversed_indexes,
            twiddles,
            scale,
        })
    }
}

impl<T> Planner<T> {
    /// The size `N` of the transforms this planner runs
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// `log_2(N)`, which is also the number of butterfly stages
    pub fn log_n(&self) -> u32 {
        self.log_n
    }

    /// Entry `i` is the position the `i`-th input sample is scattered to
    pub fn reversed_indexes(&self) -> &[usize] {
        &self.reversed_indexes
    }

    /// Entry `s - 1` is the primitive root of unity `exp(-2πi / 2^s)` of stage `s`
    pub fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }

    pub(crate) fn scale(&self) -> &T {
        &self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_planner_tables {
        ($test_name:ident, $planner:ty, $precision:ty) => {
            #[test]
            fn $test_name() {
                for log_n in 0..12 {
                    let num_points = 1 << log_n;
                    let planner = <$planner>::new(num_points);
                    assert_eq!(planner.num_points(), num_points);
                    assert_eq!(planner.log_n(), log_n);
                    assert_eq!(planner.reversed_indexes(), reversed_indexes(log_n).as_slice());
                    assert_eq!(planner.twiddles(), stage_twiddles::<$precision>(log_n).as_slice());
                    assert_eq!(f64::from(*planner.scale()), num_points as f64);
                }
            }
        };
    }

    test_planner_tables!(tables_64, Planner64, f64);
    test_planner_tables!(tables_32, Planner32, f32);

    #[test]
    fn rejects_zero() {
        assert_eq!(Planner64::try_new(0), Err(PlanError::Empty));
    }

    #[test]
    fn rejects_non_power_of_two() {
        for num_points in [3, 6, 7, 12, 100, 1023] {
            assert_eq!(
                Planner32::try_new(num_points),
                Err(PlanError::NotPowerOfTwo { num_points })
            );
        }
    }

    #[test]
    #[should_panic(expected = "not a power of 2")]
    fn new_panics_on_bad_size() {
        Planner64::new(12);
    }

    #[test]
    fn single_point() {
        let planner = Planner64::new(1);
        assert_eq!(planner.reversed_indexes(), &[0]);
        assert!(planner.twiddles().is_empty());
    }

    #[test]
    fn planner_is_send_and_sync() {
        fn assert_send_sync<P: Send + Sync>() {}
        assert_send_sync::<Planner32>();
        assert_send_sync::<Planner64>();
    }
}

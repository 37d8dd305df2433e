//! Forward real-to-complex FFT and magnitude reduction for a configured [`Planner`].
use num_complex::Complex;
use num_traits::Float;

use crate::kernels::{fft_dit_chunk_2, fft_dit_chunk_n, scatter_bit_reversed};
use crate::planner::Planner;

impl<T: Float> Planner<T> {
    /// FFT -- Decimation in Time
    ///
    /// The input samples are scattered into bit reversed order, then `log_2(N)` butterfly
    /// stages combine them from the smallest chunks up to the whole buffer.
    /// The output is in natural order, index 0 being the DC component.
    ///
    /// # Panics
    ///
    /// Panics if `input.len() != self.num_points()`
    pub fn transform(&self, input: &[T]) -> Vec<Complex<T>> {
        assert_eq!(
            input.len(),
            self.num_points(),
            "input length must match the planned transform size"
        );

        let mut result = vec![Complex::new(T::zero(), T::zero()); self.num_points()];
        scatter_bit_reversed(input, self.reversed_indexes(), &mut result);

        for (stage, w_m) in self.twiddles().iter().enumerate() {
            let dist = 1 << stage;
            if dist == 1 {
                fft_dit_chunk_2(&mut result);
            } else {
                fft_dit_chunk_n(&mut result, *w_m, dist);
            }
        }

        result
    }

    /// Normalized magnitude of a spectrum produced by [`Planner::transform`].
    ///
    /// Every bin becomes `|spectrum[i]| / N`. With `remove_symmetry == false` all `N` bins are
    /// returned. With `remove_symmetry == true` only bins `0..=N/2` are kept, since for a real
    /// input bin `N - k` is the conjugate of bin `k`.
    ///
    /// # Panics
    ///
    /// Panics if `spectrum.len() != self.num_points()`
    pub fn magnitude(&self, spectrum: &[Complex<T>], remove_symmetry: bool) -> Vec<T> {
        assert_eq!(
            spectrum.len(),
            self.num_points(),
            "spectrum length must match the planned transform size"
        );

        let len = if remove_symmetry {
            (self.num_points() / 2 + 1).min(self.num_points())
        } else {
            self.num_points()
        };

        let scale = *self.scale();
        spectrum[..len].iter().map(|z| z.norm() / scale).collect()
    }
}

//! Decimation-in-time butterfly kernels.
//!
//! Each kernel runs one stage over the whole buffer: the buffer is cut into chunks of
//! `chunk_size = 2 * dist` elements and the two halves of every chunk are combined pairwise.
use num_complex::Complex;
use num_traits::Float;

/// Place each real sample at its bit reversed position, with a zero imaginary part.
pub(crate) fn scatter_bit_reversed<T: Float>(
    input: &[T],
    reversed_indexes: &[usize],
    output: &mut [Complex<T>],
) {
    assert!(input.len() == reversed_indexes.len() && input.len() == output.len());

    input
        .iter()
        .zip(reversed_indexes.iter())
        .for_each(|(x, &rev)| {
            output[rev] = Complex::new(*x, T::zero());
        });
}

/// `chunk_size == 2`, so skip the twiddle multiplication
#[inline]
pub(crate) fn fft_dit_chunk_2<T: Float>(buf: &mut [Complex<T>]) {
    buf.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];

        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// General DIT butterfly for a stage with half-chunk size `dist`.
///
/// `w_m` is the primitive root of unity of the stage. Within a chunk, the `j`-th pair is rotated
/// by `w_m^j`, accumulated by repeated multiplication starting from 1.
#[inline]
pub(crate) fn fft_dit_chunk_n<T: Float>(buf: &mut [Complex<T>], w_m: Complex<T>, dist: usize) {
    let chunk_size = dist << 1;

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);
        let mut w = Complex::new(T::one(), T::zero());

        s0.iter_mut().zip(s1.iter_mut()).for_each(|(z0, z1)| {
            let t = w * *z1;
            let u = *z0;

            *z0 = u + t;
            *z1 = u - t;
            w = w * w_m;
        });
    });
}

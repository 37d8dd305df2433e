//! Bit reversal permutation table used to reorder the input before the butterfly stages.
//!
//! The iterative Cooley-Tukey formulation needs its input in bit-reversed order. Rather than
//! permuting a buffer in place, the [`Planner`](crate::planner::Planner) precomputes the whole
//! table once and the transform scatters each sample straight into its reversed slot.

/// Reverse the low `width` bits of `v`.
///
/// Bit `k` is swapped with bit `width - 1 - k`. When `width` is odd, the middle bit stays where
/// it is. Bits of `v` above `width` are dropped.
///
/// # Panics
///
/// Panics if `width >= usize::BITS`
pub fn bit_rev(v: usize, width: u32) -> usize {
    assert!(width < usize::BITS);
    let mut result = 0;

    for i in 0..width / 2 {
        let shift = width - 1 - 2 * i;
        let lower_mask = 1usize << i;
        let upper_mask = 1usize << (width - 1 - i);
        result |= ((v & lower_mask) << shift) | ((v & upper_mask) >> shift);
    }

    if width % 2 == 1 {
        result |= v & (1usize << (width / 2));
    }

    result
}

/// Generate the bit reversal table for a transform of size `2^log_n`.
///
/// Entry `i` holds `i` with its low `log_n` bits reversed. The table is its own inverse.
///
/// # Panics
///
/// Panics if `log_n >= usize::BITS`
pub fn reversed_indexes(log_n: u32) -> Vec<usize> {
    assert!(log_n < usize::BITS);
    let big_n = 1usize << log_n;
    (0..big_n).map(|i| bit_rev(i, log_n)).collect()
}

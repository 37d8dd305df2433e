use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Generate the per-stage twiddle factors for a transform of size `2^log_n`.
///
/// Entry `s - 1` is the primitive `2^s`-th root of unity `exp(-2πi / 2^s)`, for `s` in
/// `1..=log_n`. The butterfly loop of stage `s` raises it to successive powers.
///
/// The angle starts at `-π` and is halved for every stage, which is exact in binary floating
/// point, so the angle of each entry is as accurate as `T::PI()` itself.
pub fn stage_twiddles<T: Float + FloatConst>(log_n: u32) -> Vec<Complex<T>> {
    let two = T::one() + T::one();
    let mut angle = -T::PI();

    (0..log_n)
        .map(|_| {
            let (sin, cos) = angle.sin_cos();
            angle = angle / two;
            Complex::new(cos, sin)
        })
        .collect()
}

pub extern crate rustfft;

// export rustfft to radix2fft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::{Complex, Complex32, Complex64};
use rustfft::num_traits::Float;
use rustfft::FftPlanner;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex numbers are approximately equal, component by component.
///
/// # Panics
///
/// Panics if either the real or the imaginary parts are too far from each other
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: Complex<T>,
    expected: Complex<T>,
    epsilon: T,
) {
    assert_float_closeness(actual.re, expected.re, epsilon);
    assert_float_closeness(actual.im, expected.im, epsilon);
}

/// Generate a random, real, signal in the provided buffer
pub fn gen_random_signal<T>(reals: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for real in reals.iter_mut() {
        *real = uniform_dist.sample(&mut rng);
    }
}

/// Forward FFT of a real signal computed by `rustfft`, used as the reference result
pub fn reference_fft_64(input: &[f64]) -> Vec<Complex64> {
    let mut buffer: Vec<Complex64> = input.iter().map(|&x| Complex64::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Single precision counterpart of [`reference_fft_64`]
pub fn reference_fft_32(input: &[f32]) -> Vec<Complex32> {
    let mut buffer: Vec<Complex32> = input.iter().map(|&x| Complex32::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

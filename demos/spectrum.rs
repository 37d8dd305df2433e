use std::env;
use std::f64::consts::PI;
use std::str::FromStr;

use radix2fft::planner::Planner64;

fn main() {
    let args: Vec<String> = env::args().collect();
    assert!(args.len() <= 3, "Usage {} [n] [bin]", args[0]);

    let n = args.get(1).map_or(5, |s| usize::from_str(s).unwrap());
    let big_n = 1 << n;
    let bin = args.get(2).map_or(3, |s| usize::from_str(s).unwrap());

    // A pure tone that lands exactly on `bin`
    let signal: Vec<f64> = (0..big_n)
        .map(|i| (2.0 * PI * (bin * i) as f64 / big_n as f64).sin())
        .collect();

    let planner = Planner64::new(big_n);
    let spectrum = planner.transform(&signal);
    let magnitudes = planner.magnitude(&spectrum, true);

    for (k, m) in magnitudes.iter().enumerate() {
        println!("{k:>6} {m:.6}");
    }
}

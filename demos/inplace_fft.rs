//! Transform a ramp sequence, with the length given on the command line

use inplace_fft::fft_radix2;
use num_complex::Complex;

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(8);

    let mut x: Vec<Complex<f64>> = (0..n).map(|i| Complex::new(i as f64, 0.0)).collect();
    println!("input data:");
    for v in &x {
        println!("{}", v);
    }
    println!();

    fft_radix2(&mut x).expect("sequence length must be a power of two");

    println!("output data:");
    for v in &x {
        println!("{}", v);
    }
}

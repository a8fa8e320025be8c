//! Complex FFT Example

use inplace_fft::fft_radix2;
use num_complex::Complex;

fn main() {
    let mut samples = [Complex::new(1.0, 0.0); 8];

    println!("input data: {:?}", samples);
    fft_radix2(&mut samples).unwrap();
    println!("output data: {:?}", samples);
}

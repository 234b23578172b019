use rand::Rng;

use crate::scalar::Real;


// Polar Box-Muller transformation

pub fn randn<T: Real>(rng: &mut impl Rng) -> (T, T) {
  loop {
    let u = rng.gen_range(-T::one(), T::one());
    let v = rng.gen_range(-T::one(), T::one());
    let r = u * u + v * v;
    // Try again if outside interval
    if r == T::zero() || r >= T::one() { continue }
    let c = (T::from(-2.0).unwrap() * r.ln() / r).sqrt();
    return (u * c, v * c)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{ SeedableRng, rngs::StdRng };

  #[test]
  fn seeded_pairs_repeat() {
    let a: (f64, f64) = randn(&mut StdRng::seed_from_u64(7));
    let b: (f64, f64) = randn(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
  }

  #[test]
  fn roughly_standard() {
    let mut rng = StdRng::seed_from_u64(1);
    let n = 5000;
    let (mut sum, mut sqr) = (0.0, 0.0);
    for _ in 0..n {
      let (a, b): (f64, f64) = randn(&mut rng);
      sum += a + b;
      sqr += a * a + b * b;
    }
    let mean = sum / (2 * n) as f64;
    let var = sqr / (2 * n) as f64 - mean * mean;
    assert!(mean.abs() < 0.05);
    assert!((var - 1.0).abs() < 0.1);
  }
}

use std::f64::consts::PI;

use rand::{Rng, distr::Distribution};

/// A normal distribution, both sampled and evaluated in closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    pub mean: f64,
    pub std_dev: f64,
}

impl Gaussian {
    /// The fixed comparison baseline, Normal(0, 1).
    pub const REFERENCE: Gaussian = Gaussian {
        mean: 0.0,
        std_dev: 1.0,
    };

    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let exponent = -(x - self.mean).powi(2) / (2.0 * self.std_dev * self.std_dev);
        (1.0 / (self.std_dev * (2.0 * PI).sqrt())) * exponent.exp()
    }

    /// Draw `n` independent samples.
    ///
    /// `std_dev` is clamped positive by the control layer, so construction
    /// cannot fail here.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        let normal = rand_distr::Normal::new(self.mean, self.std_dev).unwrap();
        (0..n).map(|_| normal.sample(rng)).collect()
    }
}

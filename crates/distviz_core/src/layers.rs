//! Per-render-cycle chart layer computation.
//!
//! This is the compute half of the renderer: everything here is a pure
//! function of the parameter set and the caller's RNG. Styling and layout
//! belong to the UI crate.

use rand::Rng;

use crate::distribution::Gaussian;
use crate::histogram::{DOMAIN, Histogram};
use crate::params::ParameterSet;

/// Samples drawn per distribution per render cycle.
pub const SAMPLE_COUNT: usize = 10_000;
/// Points per density curve.
pub const CURVE_POINTS: usize = 1000;

/// Evenly spaced grid over the plotting domain, both endpoints included.
pub fn density_grid() -> Vec<f64> {
    let span = DOMAIN.1 - DOMAIN.0;
    (0..CURVE_POINTS)
        .map(|i| DOMAIN.0 + span * i as f64 / (CURVE_POINTS - 1) as f64)
        .collect()
}

/// The data layers of one rendered chart: up to two histograms and two
/// density curves, gated by the display flags.
#[derive(Debug, Clone, Default)]
pub struct ChartLayers {
    pub reference_histogram: Option<Vec<(f64, f64)>>,
    pub dynamic_histogram: Option<Vec<(f64, f64)>>,
    pub reference_curve: Option<Vec<(f64, f64)>>,
    pub dynamic_curve: Option<Vec<(f64, f64)>>,
}

impl ChartLayers {
    /// One full render cycle: resample both distributions, evaluate both
    /// densities over the grid, and bin the samples. Both distributions are
    /// resampled even when the histogram layer is hidden, so toggling it
    /// back on shows data from the same cycle.
    pub fn compute<R: Rng + ?Sized>(params: &ParameterSet, rng: &mut R) -> Self {
        let reference = Gaussian::REFERENCE;
        let dynamic = Gaussian::new(params.mean, params.std_dev);

        let reference_samples = reference.sample_n(rng, SAMPLE_COUNT);
        let dynamic_samples = dynamic.sample_n(rng, SAMPLE_COUNT);

        let (reference_histogram, dynamic_histogram) = if params.show_histogram {
            (
                Some(Histogram::from_samples(&reference_samples, params.bin_width).series()),
                Some(Histogram::from_samples(&dynamic_samples, params.bin_width).series()),
            )
        } else {
            (None, None)
        };

        let (reference_curve, dynamic_curve) = if params.show_density_curve {
            let grid = density_grid();
            (
                Some(grid.iter().map(|&x| (x, reference.pdf(x))).collect()),
                Some(grid.iter().map(|&x| (x, dynamic.pdf(x))).collect()),
            )
        } else {
            (None, None)
        };

        Self {
            reference_histogram,
            dynamic_histogram,
            reference_curve,
            dynamic_curve,
        }
    }

    pub fn layer_count(&self) -> usize {
        [
            self.reference_histogram.is_some(),
            self.dynamic_histogram.is_some(),
            self.reference_curve.is_some(),
            self.dynamic_curve.is_some(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }

    /// Largest density across all visible layers; used for the y-axis upper
    /// bound. Falls back to 1.0 when no layer is shown so the empty chart
    /// keeps a sensible axis.
    pub fn y_max(&self) -> f64 {
        let max = [
            &self.reference_histogram,
            &self.dynamic_histogram,
            &self.reference_curve,
            &self.dynamic_curve,
        ]
        .into_iter()
        .flatten()
        .flat_map(|series| series.iter().map(|&(_, y)| y))
        .fold(0.0_f64, f64::max);

        if max > 0.0 { max } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn compute(params: &ParameterSet, seed: u64) -> ChartLayers {
        let mut rng = SmallRng::seed_from_u64(seed);
        ChartLayers::compute(params, &mut rng)
    }

    #[test]
    fn grid_spans_the_domain_with_even_spacing() {
        let grid = density_grid();
        assert_eq!(grid.len(), CURVE_POINTS);
        assert_eq!(grid[0], DOMAIN.0);
        assert_eq!(*grid.last().unwrap(), DOMAIN.1);

        let step = (DOMAIN.1 - DOMAIN.0) / (CURVE_POINTS - 1) as f64;
        for pair in grid.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn flags_gate_the_layers() {
        let mut params = ParameterSet::default();
        assert_eq!(compute(&params, 1).layer_count(), 4);

        params.show_histogram = false;
        let layers = compute(&params, 1);
        assert_eq!(layers.layer_count(), 2);
        assert!(layers.reference_histogram.is_none());
        assert!(layers.dynamic_histogram.is_none());
        assert!(layers.reference_curve.is_some());

        params.show_density_curve = false;
        assert_eq!(compute(&params, 1).layer_count(), 0);

        params.show_histogram = true;
        let layers = compute(&params, 1);
        assert_eq!(layers.layer_count(), 2);
        assert!(layers.dynamic_histogram.is_some());
        assert!(layers.dynamic_curve.is_none());
    }

    #[test]
    fn curves_have_the_fixed_resolution() {
        let layers = compute(&ParameterSet::default(), 3);
        assert_eq!(layers.reference_curve.unwrap().len(), CURVE_POINTS);
        assert_eq!(layers.dynamic_curve.unwrap().len(), CURVE_POINTS);
    }

    #[test]
    fn reference_curve_ignores_the_parameters() {
        let baseline = compute(&ParameterSet::default(), 5);

        let mut shifted = ParameterSet::default();
        shifted.set_mean(7.0);
        shifted.set_std_dev(0.3);
        shifted.set_bin_width(1.5);
        let other = compute(&shifted, 9);

        assert_eq!(baseline.reference_curve, other.reference_curve);
    }

    #[test]
    fn default_parameters_make_the_curves_coincide() {
        // Dynamic == Normal(0, 1) == reference.
        let layers = compute(&ParameterSet::default(), 11);
        assert_eq!(layers.reference_curve, layers.dynamic_curve);
    }

    #[test]
    fn narrow_dynamic_distribution_concentrates_away_from_the_reference() {
        let mut params = ParameterSet::default();
        params.set_mean(5.0);
        params.set_std_dev(0.1);
        let layers = compute(&params, 13);

        let curve = layers.dynamic_curve.unwrap();
        let (peak_x, peak_y) = curve
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert!((peak_x - 5.0).abs() < 0.05);
        assert!(peak_y > 3.9);

        // Nearly all dynamic mass sits in bins near x = 5.
        let hist = layers.dynamic_histogram.unwrap();
        let near: f64 = hist
            .iter()
            .filter(|(x, _)| (x - 5.0).abs() < 1.0)
            .map(|&(_, d)| d * params.bin_width)
            .sum();
        assert!(near > 0.99, "mass near 5 was {near}");

        // While the reference stays centered at 0.
        let reference = layers.reference_histogram.unwrap();
        let near_zero: f64 = reference
            .iter()
            .filter(|(x, _)| x.abs() < 4.0)
            .map(|&(_, d)| d * params.bin_width)
            .sum();
        assert!(near_zero > 0.99);
    }

    #[test]
    fn y_max_tracks_the_tallest_layer() {
        let mut params = ParameterSet::default();
        params.set_std_dev(0.1);
        params.show_histogram = false;
        let layers = compute(&params, 17);
        // Peak of Normal(0, 0.1) is ~3.989 and the grid lands close to it.
        assert!(layers.y_max() > 3.9);

        params.show_density_curve = false;
        let empty = compute(&params, 17);
        assert_eq!(empty.y_max(), 1.0);
    }

    #[test]
    fn histograms_cover_both_distributions_every_cycle() {
        let layers = compute(&ParameterSet::default(), 23);
        let reference = layers.reference_histogram.unwrap();
        let dynamic = layers.dynamic_histogram.unwrap();
        assert_eq!(reference.len(), dynamic.len());
        // Normal(0, 1) samples all land inside [-10, 9.5], so each
        // histogram's area is 1.
        let area: f64 = reference.iter().map(|&(_, d)| d * 0.5).sum();
        assert!((area - 1.0).abs() < 1e-9);
    }
}

//! The user-adjustable parameter set.
//!
//! Ranges and steps match the on-screen controls; the setters clamp, so a
//! `ParameterSet` that went through them is always inside the documented
//! ranges and the sampling/density routines downstream cannot fail.

/// Allowed range for the dynamic distribution's mean.
pub const MEAN_RANGE: (f64, f64) = (-10.0, 10.0);
/// Allowed range for the dynamic distribution's standard deviation.
pub const STD_DEV_RANGE: (f64, f64) = (0.1, 5.0);
/// Allowed range for the histogram bin width.
pub const BIN_WIDTH_RANGE: (f64, f64) = (0.1, 2.0);
/// Increment applied by a single control adjustment.
pub const STEP: f64 = 0.1;

/// Current values of the five controls, snapshotted per render cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub mean: f64,
    pub std_dev: f64,
    pub show_histogram: bool,
    pub show_density_curve: bool,
    pub bin_width: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            show_histogram: true,
            show_density_curve: true,
            bin_width: 0.5,
        }
    }
}

/// Clamp to a range and snap to the 0.1 control grid so repeated
/// adjustments don't accumulate float drift.
fn snap(value: f64, range: (f64, f64)) -> f64 {
    let snapped = (value * 10.0).round() / 10.0;
    snapped.clamp(range.0, range.1)
}

impl ParameterSet {
    pub fn set_mean(&mut self, value: f64) {
        self.mean = snap(value, MEAN_RANGE);
    }

    pub fn set_std_dev(&mut self, value: f64) {
        self.std_dev = snap(value, STD_DEV_RANGE);
    }

    pub fn set_bin_width(&mut self, value: f64) {
        self.bin_width = snap(value, BIN_WIDTH_RANGE);
    }

    pub fn toggle_histogram(&mut self) {
        self.show_histogram = !self.show_histogram;
    }

    pub fn toggle_density_curve(&mut self) {
        self.show_density_curve = !self.show_density_curve;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_controls() {
        let params = ParameterSet::default();
        assert_eq!(params.mean, 0.0);
        assert_eq!(params.std_dev, 1.0);
        assert!(params.show_histogram);
        assert!(params.show_density_curve);
        assert_eq!(params.bin_width, 0.5);
    }

    #[test]
    fn setters_clamp_to_ranges() {
        let mut params = ParameterSet::default();

        params.set_mean(99.0);
        assert_eq!(params.mean, MEAN_RANGE.1);
        params.set_mean(-99.0);
        assert_eq!(params.mean, MEAN_RANGE.0);

        params.set_std_dev(0.0);
        assert_eq!(params.std_dev, STD_DEV_RANGE.0);
        params.set_std_dev(-3.0);
        assert_eq!(params.std_dev, STD_DEV_RANGE.0);
        params.set_std_dev(50.0);
        assert_eq!(params.std_dev, STD_DEV_RANGE.1);

        params.set_bin_width(0.01);
        assert_eq!(params.bin_width, BIN_WIDTH_RANGE.0);
        params.set_bin_width(10.0);
        assert_eq!(params.bin_width, BIN_WIDTH_RANGE.1);
    }

    #[test]
    fn repeated_steps_stay_on_grid() {
        let mut params = ParameterSet::default();
        // 0.1 is not exactly representable; thirty steps would drift without
        // snapping.
        for _ in 0..30 {
            params.set_mean(params.mean + STEP);
        }
        assert_eq!(params.mean, 3.0);
    }

    #[test]
    fn toggles_flip_only_their_flag() {
        let mut params = ParameterSet::default();
        params.toggle_histogram();
        assert!(!params.show_histogram);
        assert!(params.show_density_curve);
        params.toggle_density_curve();
        assert!(!params.show_density_curve);
        params.toggle_histogram();
        assert!(params.show_histogram);
    }
}

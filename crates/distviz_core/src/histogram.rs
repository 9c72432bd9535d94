//! Density-normalized histograms over the fixed plotting domain.

/// The plotted x-domain shared by histograms and density curves.
pub const DOMAIN: (f64, f64) = (-10.0, 10.0);

/// Bin edges starting at the left end of the domain and stepping by
/// `bin_width` while strictly inside it. Consecutive edges delimit one bin,
/// so the covered range ends at the last edge below the domain's right end.
pub fn bin_edges(bin_width: f64) -> Vec<f64> {
    let mut edges = Vec::new();
    let mut i = 0usize;
    loop {
        let edge = DOMAIN.0 + i as f64 * bin_width;
        if edge >= DOMAIN.1 {
            break;
        }
        edges.push(edge);
        i += 1;
    }
    edges
}

/// A binned sample set, scaled so the area over the covered range is 1.
#[derive(Debug, Clone)]
pub struct Histogram {
    bin_width: f64,
    edges: Vec<f64>,
    densities: Vec<f64>,
}

impl Histogram {
    /// Bin `samples` into half-open bins; the last bin is closed on the
    /// right. Samples outside the covered range are dropped and do not
    /// count toward the normalization.
    pub fn from_samples(samples: &[f64], bin_width: f64) -> Self {
        let edges = bin_edges(bin_width);
        let bins = edges.len().saturating_sub(1);
        let lo = DOMAIN.0;
        let hi = *edges.last().unwrap_or(&lo);

        let mut counts = vec![0usize; bins];
        let mut total = 0usize;
        for &sample in samples {
            if sample < lo || sample > hi {
                continue;
            }
            let mut index = ((sample - lo) / bin_width) as usize;
            if index >= bins {
                index = bins - 1;
            }
            counts[index] += 1;
            total += 1;
        }

        let densities = counts
            .iter()
            .map(|&count| {
                if total == 0 {
                    0.0
                } else {
                    count as f64 / (total as f64 * bin_width)
                }
            })
            .collect();

        Self {
            bin_width,
            edges,
            densities,
        }
    }

    pub fn bin_count(&self) -> usize {
        self.densities.len()
    }

    /// Sum of density times width, 1 whenever any sample landed in a bin.
    pub fn area(&self) -> f64 {
        self.densities.iter().sum::<f64>() * self.bin_width
    }

    /// (bin center, density) pairs, ready to plot.
    pub fn series(&self) -> Vec<(f64, f64)> {
        self.edges
            .iter()
            .zip(self.densities.iter())
            .map(|(&left, &density)| (left + self.bin_width / 2.0, density))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_construction_stops_short_of_the_right_end() {
        let edges = bin_edges(0.5);
        assert_eq!(edges.len(), 40);
        assert_eq!(edges[0], -10.0);
        assert_eq!(*edges.last().unwrap(), 9.5);

        // A width that doesn't divide the domain evenly.
        let edges = bin_edges(0.3);
        assert_eq!(edges.len(), 67);
        assert!(*edges.last().unwrap() < DOMAIN.1);
    }

    #[test]
    fn in_range_area_is_one() {
        let samples: Vec<f64> = (0..1000).map(|i| -3.0 + 6.0 * i as f64 / 999.0).collect();
        let hist = Histogram::from_samples(&samples, 0.5);
        assert_eq!(hist.bin_count(), 39);
        assert!((hist.area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_samples_do_not_dilute_the_density() {
        // One in-range sample plus two far outside; normalization uses only
        // the in-range count.
        let hist = Histogram::from_samples(&[0.25, 100.0, -100.0], 0.5);
        assert!((hist.area() - 1.0).abs() < 1e-9);
        let peak = hist
            .series()
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert_eq!(peak.0, 0.25);
        assert!((peak.1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn last_bin_is_closed_on_the_right() {
        // With width 0.5 the covered range ends at 9.5; a sample exactly on
        // that edge lands in the final bin instead of being dropped.
        let hist = Histogram::from_samples(&[9.5], 0.5);
        assert!((hist.area() - 1.0).abs() < 1e-9);
        let series = hist.series();
        assert!(series.last().unwrap().1 > 0.0);
    }

    #[test]
    fn empty_samples_yield_zero_densities() {
        let hist = Histogram::from_samples(&[], 0.5);
        assert_eq!(hist.bin_count(), 39);
        assert_eq!(hist.area(), 0.0);
    }

    #[test]
    fn series_reports_bin_centers() {
        // Width 1.0: edges run -10..=9, so 19 bins centered -9.5..=8.5.
        let hist = Histogram::from_samples(&[0.0], 1.0);
        let series = hist.series();
        assert_eq!(series.len(), 19);
        assert_eq!(series[0].0, -9.5);
        assert_eq!(series.last().unwrap().0, 8.5);
    }
}

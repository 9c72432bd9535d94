//! Distribution comparison library
//!
//! This crate computes everything the terminal UI draws, without drawing any
//! of it: sample sets, density curves, and density-normalized histograms for
//! a fixed Normal(0, 1) reference distribution and a user-parameterized
//! dynamic distribution. The UI crate owns the parameters and the RNG and
//! asks for a fresh [`ChartLayers`] on every parameter change.

pub mod distribution;
pub mod histogram;
pub mod layers;
pub mod params;

pub use distribution::Gaussian;
pub use histogram::{DOMAIN, Histogram, bin_edges};
pub use layers::{CURVE_POINTS, ChartLayers, SAMPLE_COUNT, density_grid};
pub use params::ParameterSet;

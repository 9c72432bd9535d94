use distviz_core::params::STEP;
use distviz_core::{ChartLayers, ParameterSet};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// The five controls, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Mean,
    StdDev,
    ShowDensityCurve,
    ShowHistogram,
    BinWidth,
}

impl ControlId {
    pub const ALL: [ControlId; 5] = [
        ControlId::Mean,
        ControlId::StdDev,
        ControlId::ShowDensityCurve,
        ControlId::ShowHistogram,
        ControlId::BinWidth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ControlId::Mean => "Mean (μ)",
            ControlId::StdDev => "Std Dev (σ)",
            ControlId::ShowDensityCurve => "Show Density Curve",
            ControlId::ShowHistogram => "Show Histogram",
            ControlId::BinWidth => "Bin Width",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self, ControlId::ShowDensityCurve | ControlId::ShowHistogram)
    }
}

/// Everything the event loop owns: the current parameters, the layers
/// computed from them, and the RNG feeding the sampler.
pub struct AppState {
    pub params: ParameterSet,
    pub layers: ChartLayers,
    pub selected: ControlId,
    pub exit: bool,
    pub error_message: Option<String>,
    rng: SmallRng,
}

impl AppState {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        tracing::info!(seed, "app state created");

        let mut state = Self {
            params: ParameterSet::default(),
            layers: ChartLayers::default(),
            selected: ControlId::Mean,
            exit: false,
            error_message: None,
            rng: SmallRng::seed_from_u64(seed),
        };
        state.refresh_layers();
        state
    }

    /// One render cycle: resample both distributions and rebuild every
    /// visible layer from the current parameters.
    pub fn refresh_layers(&mut self) {
        self.layers = ChartLayers::compute(&self.params, &mut self.rng);
        tracing::debug!(
            mean = self.params.mean,
            std_dev = self.params.std_dev,
            bin_width = self.params.bin_width,
            layers = self.layers.layer_count(),
            "layers recomputed"
        );
    }

    /// Step the selected numeric control by `steps` increments; on a toggle
    /// row this flips the toggle instead.
    pub fn adjust_selected(&mut self, steps: f64) {
        match self.selected {
            ControlId::Mean => self.params.set_mean(self.params.mean + steps * STEP),
            ControlId::StdDev => self.params.set_std_dev(self.params.std_dev + steps * STEP),
            ControlId::BinWidth => self.params.set_bin_width(self.params.bin_width + steps * STEP),
            ControlId::ShowDensityCurve | ControlId::ShowHistogram => {
                self.toggle_selected();
                return;
            }
        }
        self.refresh_layers();
    }

    /// Flip the selected toggle; numeric rows are unaffected.
    pub fn toggle_selected(&mut self) {
        match self.selected {
            ControlId::ShowDensityCurve => self.params.toggle_density_curve(),
            ControlId::ShowHistogram => self.params.toggle_histogram(),
            _ => return,
        }
        self.refresh_layers();
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!(message = %message, "status bar error");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

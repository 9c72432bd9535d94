//! Terminal UI for comparing a fixed Normal(0, 1) reference distribution
//! against a user-parameterized normal distribution.
//!
//! The computation lives in `distviz_core`; this crate owns the terminal,
//! the parameter controls, and the styling.

pub mod app;
pub mod components;
pub mod logging;
pub mod state;
pub mod theme;

pub use app::App;
pub use logging::init_logging;
pub use state::{AppState, ControlId};

//! UI modules for the sandbox window.

mod control_panel;
mod energy_plot;
mod readouts;
mod scene_view;

pub use control_panel::{ControlPanel, PanelResponse};
pub use energy_plot::EnergyPlotWindow;
pub use readouts::render_readouts;
pub use scene_view::SceneView;

//! Post-run energy-vs-time chart.
//!
//! Opens when a run is reset and its record is non-empty; stays up until
//! the user closes it.

use egui::Context;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::history::EnergyHistory;

pub struct EnergyPlotWindow {
    run: Option<EnergyHistory>,
    open: bool,
}

impl EnergyPlotWindow {
    pub fn new() -> Self {
        Self {
            run: None,
            open: false,
        }
    }

    /// Show the chart for a finished run. Empty records are dropped.
    pub fn open_with(&mut self, run: EnergyHistory) {
        if !run.is_empty() {
            self.run = Some(run);
            self.open = true;
        }
    }

    pub fn show(&mut self, ctx: &Context) {
        let Some(run) = &self.run else {
            return;
        };

        let kinetic: PlotPoints = run
            .time
            .iter()
            .zip(run.kinetic.iter())
            .map(|(&t, &e)| [t as f64, e as f64])
            .collect();
        let gravitational: PlotPoints = run
            .time
            .iter()
            .zip(run.gravitational.iter())
            .map(|(&t, &e)| [t as f64, e as f64])
            .collect();

        let mut open = self.open;
        egui::Window::new("Energy vs time")
            .open(&mut open)
            .default_size([520.0, 320.0])
            .show(ctx, |ui| {
                Plot::new("energy_history")
                    .legend(Legend::default())
                    .x_axis_label("t (s)")
                    .y_axis_label("E (J)")
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new(kinetic).name("Kinetic"));
                        plot_ui.line(Line::new(gravitational).name("Gravitational"));
                    });
            });
        self.open = open;

        if !self.open {
            self.run = None;
        }
    }
}

impl Default for EnergyPlotWindow {
    fn default() -> Self {
        Self::new()
    }
}

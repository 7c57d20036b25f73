//! The eframe application: panel layout and frame driving.

use eframe::egui;

use crate::config::SceneConfig;
use crate::session::Session;
use crate::ui::{render_readouts, ControlPanel, EnergyPlotWindow, SceneView};

pub struct MachineApp {
    session: Session,
    panel: ControlPanel,
    scene_view: SceneView,
    plot: EnergyPlotWindow,
}

impl MachineApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SceneConfig) -> Self {
        // A light theme: the stage is white with dark geometry.
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            session: Session::new(config),
            panel: ControlPanel::new(),
            scene_view: SceneView::new(),
            plot: EnergyPlotWindow::new(),
        }
    }
}

impl eframe::App for MachineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let delta = ctx.input(|i| i.stable_dt);
        self.session.advance(delta);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            let response = self.panel.show(ui, &mut self.session);
            ui.add_space(4.0);

            if let Some(run) = response.finished_run {
                if self.session.config().energy_plot {
                    self.plot.open_with(run);
                }
            }
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("State: {}", self.session.phase().label()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.0} FPS", 1.0 / delta.max(1e-6)));
                    ui.separator();
                    ui.label(format!("t = {:.2} s", self.session.sim_time()));
                });
            });
        });

        egui::SidePanel::right("readouts")
            .min_width(260.0)
            .show(ctx, |ui| render_readouts(ui, &self.session));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.scene_view.show(ui, &mut self.session);
            });

        self.plot.show(ctx);

        // Physics keeps moving without input events.
        ctx.request_repaint();
    }
}

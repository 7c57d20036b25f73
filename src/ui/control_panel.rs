//! The slider-and-button control panel.

use egui::Ui;

use crate::history::EnergyHistory;
use crate::params::Param;
use crate::session::{Phase, Session};
use crate::widgets::{Button, Slider};

/// What the panel did this frame that the app needs to react to.
#[derive(Default)]
pub struct PanelResponse {
    /// Set when Reset was pressed: the finished run's energy record.
    pub finished_run: Option<EnergyHistory>,
}

pub struct ControlPanel {
    stiffness: Slider,
    displacement: Slider,
    mass: Slider,
    radius: Slider,
    gravity: Slider,
    start: Button,
    reset: Button,
    fix_origin: Button,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            stiffness: Slider::for_param(Param::Stiffness),
            displacement: Slider::for_param(Param::Displacement),
            mass: Slider::for_param(Param::Mass),
            radius: Slider::for_param(Param::Radius),
            gravity: Slider::for_param(Param::Gravity),
            start: Button::new("Start"),
            reset: Button::new("Reset"),
            fix_origin: Button::new("Fix Origin"),
        }
    }

    /// Pull slider positions back from the session, e.g. after a reset.
    pub fn sync(&mut self, session: &Session) {
        let params = session.params();
        self.stiffness.value = params.stiffness;
        self.displacement.value = params.displacement;
        self.mass.value = params.mass;
        self.radius.value = params.radius;
        self.gravity.value = params.gravity;
    }

    pub fn show(&mut self, ui: &mut Ui, session: &mut Session) -> PanelResponse {
        let mut response = PanelResponse::default();
        let editable = session.can_edit();

        // The start button stays lit from first start until reset.
        self.start.clicked = session.phase() != Phase::WaitingToStart;

        ui.horizontal(|ui| {
            if self.stiffness.ui(ui, editable) {
                session.set_param(Param::Stiffness, self.stiffness.value);
            }
            ui.add_space(24.0);
            if self.displacement.ui(ui, editable) {
                session.set_param(Param::Displacement, self.displacement.value);
            }
            ui.add_space(24.0);
            if self.mass.ui(ui, editable) {
                session.set_param(Param::Mass, self.mass.value);
            }
        });

        ui.horizontal(|ui| {
            if self.radius.ui(ui, editable) {
                session.set_param(Param::Radius, self.radius.value);
            }
            ui.add_space(24.0);
            if self.gravity.ui(ui, editable) {
                session.set_param(Param::Gravity, self.gravity.value);
            }
            ui.add_space(24.0);

            if self.start.ui(ui) {
                session.toggle_run();
            }
            ui.add_space(8.0);
            if self.reset.ui(ui) {
                response.finished_run = Some(session.reset());
                self.sync(session);
            }
            if session.config().origin_frame && !session.origin().is_fixed() {
                ui.add_space(8.0);
                if self.fix_origin.ui(ui) {
                    session.fix_origin();
                }
            }
        });

        response
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

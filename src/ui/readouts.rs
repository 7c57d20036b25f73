//! Live readouts: energies, forces, and positions.

use egui::Ui;

use crate::session::Session;

pub fn render_readouts(ui: &mut Ui, session: &Session) {
    let r = session.readouts();

    ui.heading("Energy");
    ui.monospace(format!("Spring PE:        {:8.1} J", r.spring_energy));
    ui.monospace(format!("Gravitational PE: {:8.1} J", r.gravitational));
    ui.monospace(format!("Kinetic:          {:8.1} J", r.kinetic));

    ui.separator();
    ui.heading("Forces");
    ui.monospace(format!("Spring impulse:   {:8.1}", r.impulse));
    ui.monospace(format!("Weight:           {:8.1} N", r.weight));

    ui.separator();
    ui.heading("Ball");
    ui.monospace(format!(
        "Position: ({:7.1}, {:7.1})",
        r.ball_user_pos.x, r.ball_user_pos.y
    ));
    ui.monospace(format!("Height:   {:8.1}", r.height));
    ui.monospace(format!("Speed:    {:8.1}", r.speed));

    if session.config().origin_frame {
        ui.separator();
        ui.heading("Origin");
        let origin = session.origin();
        let state = if origin.is_fixed() { " [fixed]" } else { "" };
        ui.monospace(format!(
            "({:6.0}, {:6.0}){}",
            origin.offset().x,
            origin.offset().y,
            state
        ));
    }

    let dominoes = session.dominoes();
    if !dominoes.is_empty() {
        ui.separator();
        ui.heading("Dominoes");
        for (i, (pos, _)) in dominoes.iter().enumerate() {
            let user = session.origin().to_user(*pos);
            ui.monospace(format!("#{}: ({:7.1}, {:7.1})", i + 1, user.x, user.y));
        }
    }
}

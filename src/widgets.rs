//! Hand-drawn control widgets.
//!
//! The sandbox keeps the original demo's chunky slider-and-button look
//! instead of stock widgets. The pointer-to-value mapping lives in plain
//! methods so it can be tested without a UI context; `ui` only does
//! hit-testing and painting.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Ui};

use crate::params::{Param, ParamRange};

pub const TRACK_WIDTH: f32 = 200.0;
const TRACK_HEIGHT: f32 = 10.0;
const KNOB_WIDTH: f32 = 20.0;
/// The knob sticks out above and below the track, as in the original.
const KNOB_OVERHANG: f32 = 10.0;
const LABEL_HEIGHT: f32 = 18.0;

const TRACK_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
const KNOB_COLOR: Color32 = Color32::from_rgb(20, 20, 20);
const BUTTON_IDLE: Color32 = Color32::from_rgb(220, 60, 60);
const BUTTON_ACTIVE: Color32 = Color32::from_rgb(60, 190, 60);

/// A horizontal slider mapping a track position linearly to `[min, max]`.
#[derive(Clone, Debug)]
pub struct Slider {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub value: f32,
    /// True while the knob is being dragged.
    pub active: bool,
}

impl Slider {
    pub fn new(label: &'static str, range: ParamRange) -> Self {
        Self {
            label,
            min: range.min,
            max: range.max,
            default: range.default,
            value: range.default,
            active: false,
        }
    }

    pub fn for_param(param: Param) -> Self {
        Self::new(param.label(), param.range())
    }

    /// Fraction of the track the current value sits at, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    /// Map a pointer x coordinate onto the value range. The pointer is
    /// clamped to the track, so out-of-bounds drags pin to min or max.
    pub fn set_from_pointer(&mut self, x: f32, track_min: f32, track_max: f32) {
        let x = x.clamp(track_min, track_max);
        let span = track_max - track_min;
        let t = if span > 0.0 { (x - track_min) / span } else { 0.0 };
        self.value = self.min + t * (self.max - self.min);
    }

    pub fn reset(&mut self) {
        self.value = self.default;
        self.active = false;
    }

    fn knob_rect(&self, track: Rect) -> Rect {
        let cx = track.min.x + self.fraction() * track.width();
        Rect::from_center_size(
            Pos2::new(cx, track.center().y),
            egui::vec2(KNOB_WIDTH, TRACK_HEIGHT + 2.0 * KNOB_OVERHANG),
        )
    }

    /// Draw the slider and handle dragging. Returns true when the value
    /// changed this frame. While `editable` is false drags are ignored.
    pub fn ui(&mut self, ui: &mut Ui, editable: bool) -> bool {
        let desired = egui::vec2(TRACK_WIDTH, LABEL_HEIGHT + TRACK_HEIGHT + 2.0 * KNOB_OVERHANG);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

        let track = Rect::from_min_size(
            Pos2::new(rect.min.x, rect.min.y + LABEL_HEIGHT + KNOB_OVERHANG),
            egui::vec2(TRACK_WIDTH, TRACK_HEIGHT),
        );

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                if self.knob_rect(track).expand(2.0).contains(pos) {
                    self.active = true;
                }
            }
        }
        if response.drag_stopped() {
            self.active = false;
        }

        let mut changed = false;
        if self.active && editable {
            if let Some(pos) = response.interact_pointer_pos() {
                let before = self.value;
                self.set_from_pointer(pos.x, track.min.x, track.max.x);
                changed = self.value != before;
            }
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(track, CornerRadius::ZERO, TRACK_COLOR);
            painter.rect_filled(self.knob_rect(track), CornerRadius::ZERO, KNOB_COLOR);
            painter.text(
                rect.min,
                Align2::LEFT_TOP,
                format!("{}: {:.1}", self.label, self.value),
                FontId::proportional(14.0),
                ui.visuals().text_color(),
            );
        }

        changed
    }
}

/// A push button with a toggled visual state.
#[derive(Clone, Debug)]
pub struct Button {
    pub label: &'static str,
    /// Toggled visual state: green when set, red otherwise.
    pub clicked: bool,
}

impl Button {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            clicked: false,
        }
    }

    /// Draw the button; returns true when pressed this frame.
    pub fn ui(&mut self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(100.0, 40.0), Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if self.clicked { BUTTON_ACTIVE } else { BUTTON_IDLE };
            let painter = ui.painter();
            painter.rect_filled(rect, CornerRadius::ZERO, fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(16.0),
                Color32::BLACK,
            );
        }

        response.clicked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn slider() -> Slider {
        Slider::new("K (N/m)", ParamRange::new(0.0, 15.0, 7.5))
    }

    #[test]
    fn pointer_maps_linearly() {
        let mut s = slider();
        s.set_from_pointer(50.0, 0.0, 200.0);
        assert!((s.value - 3.75).abs() < 1e-5);

        s.set_from_pointer(200.0, 0.0, 200.0);
        assert_eq!(s.value, 15.0);

        s.set_from_pointer(0.0, 0.0, 200.0);
        assert_eq!(s.value, 0.0);
    }

    #[test]
    fn pointer_outside_track_clamps() {
        let mut s = slider();
        s.set_from_pointer(-500.0, 100.0, 300.0);
        assert_eq!(s.value, 0.0);

        s.set_from_pointer(5000.0, 100.0, 300.0);
        assert_eq!(s.value, 15.0);
    }

    #[test]
    fn random_pointers_stay_in_range() {
        let mut rng = rand::thread_rng();
        let mut s = slider();
        for _ in 0..1000 {
            let x: f32 = rng.gen_range(-10_000.0..10_000.0);
            s.set_from_pointer(x, 100.0, 300.0);
            assert!(s.value >= s.min && s.value <= s.max);
        }
    }

    #[test]
    fn fraction_round_trips() {
        let mut s = slider();
        s.set_from_pointer(150.0, 100.0, 300.0);
        assert!((s.fraction() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn reset_restores_default_and_clears_drag() {
        let mut s = slider();
        s.set_from_pointer(300.0, 100.0, 300.0);
        s.active = true;
        s.reset();
        assert_eq!(s.value, 7.5);
        assert!(!s.active);
    }

    #[test]
    fn degenerate_track_pins_to_min() {
        let mut s = slider();
        s.set_from_pointer(42.0, 100.0, 100.0);
        assert_eq!(s.value, 0.0);
    }

    #[test]
    fn param_slider_inherits_range() {
        let s = Slider::for_param(Param::Gravity);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 2000.0);
        assert_eq!(s.value, 980.0);
        assert_eq!(s.label, "Gravity");
    }
}

//! Scene painting and origin-marker dragging.
//!
//! Draws the machine with egui painter primitives in stage coordinates
//! (1 unit = 1 pixel, y down), anchored at the view's top-left corner.

use egui::{Color32, CornerRadius, Pos2, Rect, Sense, Shape, Stroke, Ui};
use glam::Vec2;

use crate::session::{Phase, Session};

const STAGE_COLOR: Color32 = Color32::WHITE;
const INK: Color32 = Color32::BLACK;
const BALL_COLOR: Color32 = Color32::from_rgb(40, 70, 220);
const ORIGIN_FREE: Color32 = Color32::from_rgb(220, 60, 60);
const ORIGIN_FIXED: Color32 = Color32::from_rgb(60, 190, 60);

const SEGMENT_STROKE: f32 = 4.0;
const SPRING_STROKE: f32 = 2.0;
const ORIGIN_GRAB_RADIUS: f32 = 16.0;

pub struct SceneView {
    dragging_origin: bool,
}

impl SceneView {
    pub fn new() -> Self {
        Self {
            dragging_origin: false,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, session: &mut Session) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let to_screen = |p: Vec2| Pos2::new(rect.min.x + p.x, rect.min.y + p.y);

        self.handle_origin_drag(&response, rect, session, to_screen);

        if !ui.is_rect_visible(rect) {
            return;
        }
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, CornerRadius::ZERO, STAGE_COLOR);

        let config = session.config();
        let segment_stroke = Stroke::new(SEGMENT_STROKE, INK);

        for ramp in &config.ramps {
            for pair in ramp.points.windows(2) {
                painter.line_segment(
                    [
                        to_screen(Vec2::from_array(pair[0])),
                        to_screen(Vec2::from_array(pair[1])),
                    ],
                    segment_stroke,
                );
            }
        }

        if let Some(arc) = &config.arc {
            let points = arc.sample_points();
            for pair in points.windows(2) {
                painter.line_segment(
                    [
                        to_screen(Vec2::from_array(pair[0])),
                        to_screen(Vec2::from_array(pair[1])),
                    ],
                    segment_stroke,
                );
            }
        }

        let ball = session.ball_position();

        // Launcher housing and, until the spring has fired, its coil.
        let housing = config.spring.housing;
        painter.rect_filled(
            Rect::from_min_size(
                to_screen(Vec2::new(housing[0], housing[1])),
                egui::vec2(housing[2], housing[3]),
            ),
            CornerRadius::ZERO,
            INK,
        );
        if !session.fired() {
            if let Some(ball) = ball {
                let spring = &config.spring;
                let anchor = Vec2::new(spring.anchor_x, ball.y);
                let coils = spring.coils.max(2);
                let mut previous = anchor;
                for i in 1..=coils {
                    let t = i as f32 / coils as f32;
                    let mut point = Vec2::new(anchor.x + spring.rest_length * t, anchor.y);
                    if i < coils {
                        point.y += if i % 2 == 1 {
                            spring.amplitude
                        } else {
                            -spring.amplitude
                        };
                    }
                    painter.line_segment(
                        [to_screen(previous), to_screen(point)],
                        Stroke::new(SPRING_STROKE, INK),
                    );
                    previous = point;
                }
            }
        }

        for (pos, angle) in session.dominoes() {
            let d = &config.dominoes;
            painter.add(Shape::convex_polygon(
                box_corners(pos, Vec2::new(d.width / 2.0, d.height / 2.0), angle)
                    .into_iter()
                    .map(to_screen)
                    .collect(),
                INK,
                Stroke::NONE,
            ));
        }

        if let Some(ball) = ball {
            painter.circle_filled(to_screen(ball), session.params().radius, BALL_COLOR);
        }

        if config.origin_frame {
            let color = if session.origin().is_fixed() {
                ORIGIN_FIXED
            } else {
                ORIGIN_FREE
            };
            let center = to_screen(session.origin().offset());
            let stroke = Stroke::new(2.0, color);
            painter.line_segment(
                [center - egui::vec2(12.0, 0.0), center + egui::vec2(12.0, 0.0)],
                stroke,
            );
            painter.line_segment(
                [center - egui::vec2(0.0, 12.0), center + egui::vec2(0.0, 12.0)],
                stroke,
            );
            painter.circle_stroke(center, 6.0, stroke);
        }
    }

    fn handle_origin_drag(
        &mut self,
        response: &egui::Response,
        rect: Rect,
        session: &mut Session,
        to_screen: impl Fn(Vec2) -> Pos2,
    ) {
        if !session.config().origin_frame {
            return;
        }

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let marker = to_screen(session.origin().offset());
                if pos.distance(marker) <= ORIGIN_GRAB_RADIUS
                    && session.phase() == Phase::WaitingToStart
                    && !session.origin().is_fixed()
                {
                    self.dragging_origin = true;
                }
            }
        }
        if response.drag_stopped() {
            self.dragging_origin = false;
        }
        if self.dragging_origin {
            if let Some(pos) = response.interact_pointer_pos() {
                session.move_origin(Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
            }
        }
    }
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new()
    }
}

/// Corners of a rotated box, counter-clockwise.
fn box_corners(center: Vec2, half: Vec2, angle: f32) -> [Vec2; 4] {
    let (sin, cos) = angle.sin_cos();
    let rotate = |p: Vec2| Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + center;
    [
        rotate(Vec2::new(-half.x, -half.y)),
        rotate(Vec2::new(half.x, -half.y)),
        rotate(Vec2::new(half.x, half.y)),
        rotate(Vec2::new(-half.x, half.y)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_corners_unrotated() {
        let corners = box_corners(Vec2::new(10.0, 20.0), Vec2::new(5.0, 30.0), 0.0);
        assert_eq!(corners[0], Vec2::new(5.0, -10.0));
        assert_eq!(corners[2], Vec2::new(15.0, 50.0));
    }

    #[test]
    fn box_corners_quarter_turn() {
        let corners = box_corners(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            std::f32::consts::FRAC_PI_2,
        );
        // (-1, -2) rotates to (2, -1).
        assert!((corners[0] - Vec2::new(2.0, -1.0)).length() < 1e-5);
    }
}

//! Scene layout configuration.
//!
//! A [`SceneConfig`] captures everything that varied between the historical
//! revisions of the demo: ramp point lists, the circular arc, the domino
//! row, the movable reference origin, and the post-run energy plot. All of
//! them are data here, so one binary covers every variant. Configs can be
//! serialized to JSON and loaded back with `--scene`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Stage width in world units (1 unit = 1 pixel at 1:1 zoom).
pub const STAGE_WIDTH: f32 = 1280.0;
/// Stage height in world units.
pub const STAGE_HEIGHT: f32 = 720.0;

/// A polyline ramp of static segments.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RampConfig {
    /// Consecutive points; each adjacent pair becomes one segment.
    pub points: Vec<[f32; 2]>,
    pub friction: f32,
    pub restitution: f32,
}

/// A circular arc approximated by straight segments.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArcConfig {
    pub center: [f32; 2],
    pub radius: f32,
    /// Start angle in radians.
    pub start_angle: f32,
    /// End angle in radians; may be smaller than `start_angle`.
    pub end_angle: f32,
    pub segments: usize,
    pub friction: f32,
    pub restitution: f32,
}

impl ArcConfig {
    /// Sample the arc into `segments + 1` points.
    ///
    /// Used both for collider construction and for drawing, so the painted
    /// arc always matches what the ball actually rolls on.
    pub fn sample_points(&self) -> Vec<[f32; 2]> {
        let n = self.segments.max(1);
        (0..=n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let angle = self.start_angle + (self.end_angle - self.start_angle) * t;
                [
                    self.center[0] + self.radius * angle.cos(),
                    self.center[1] + self.radius * angle.sin(),
                ]
            })
            .collect()
    }
}

/// A row of dynamic domino boxes. `count == 0` disables the feature.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DominoConfig {
    pub count: usize,
    pub width: f32,
    pub height: f32,
    /// Horizontal gap between neighbouring dominoes.
    pub spacing: f32,
    /// Center of the first domino.
    pub first: [f32; 2],
    pub mass: f32,
    pub friction: f32,
}

/// Geometry of the launcher spring drawing. Purely visual: the launch
/// itself is an impulse, not a simulated spring.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpringConfig {
    /// Housing rectangle as `[x, y, width, height]`.
    pub housing: [f32; 4],
    /// X coordinate of the coil anchor; its Y tracks the ball center.
    pub anchor_x: f32,
    pub rest_length: f32,
    /// Number of zigzag half-coils.
    pub coils: usize,
    pub amplitude: f32,
}

/// Display-scale divisors applied in the energy readouts.
///
/// These are deliberate visual-tuning constants inherited from the original
/// demo, not physical ones; they are configurable rather than hard-coded so
/// a layout file can retune the readouts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScaleConfig {
    /// Slider gravity is divided by this before entering weight/energy.
    pub gravity_divisor: f32,
    /// Ball speed is divided by this before entering kinetic energy.
    pub speed_divisor: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            gravity_divisor: 100.0,
            speed_divisor: 10.0,
        }
    }
}

/// Full scene layout.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    pub name: String,
    pub ramps: Vec<RampConfig>,
    pub arc: Option<ArcConfig>,
    pub dominoes: DominoConfig,
    /// Half-thickness of all static segments.
    pub segment_radius: f32,
    /// Point on the launch platform where the ball rests; the ball center
    /// spawns at `(x, y - radius)`.
    pub ball_start: [f32; 2],
    pub ball_friction: f32,
    pub ball_restitution: f32,
    pub spring: SpringConfig,
    /// Enable the movable reference-origin feature.
    pub origin_frame: bool,
    /// Show the energy-vs-time chart after each run.
    pub energy_plot: bool,
    pub scales: ScaleConfig,
}

impl Default for SceneConfig {
    /// The richest historical layout: three ramps, the quarter-pipe arc,
    /// five dominoes, origin frame and energy plot enabled.
    fn default() -> Self {
        Self {
            name: "goldberg".to_string(),
            ramps: vec![
                RampConfig {
                    points: vec![[50.0, 200.0], [200.0, 200.0]],
                    friction: 10.0,
                    restitution: 0.5,
                },
                RampConfig {
                    points: vec![[200.0, 202.0], [400.0, 350.0], [500.0, 350.0]],
                    friction: 10.0,
                    restitution: 0.5,
                },
                RampConfig {
                    points: vec![[700.0, 300.0], [400.0, 550.0], [100.0, 550.0]],
                    friction: 1.0,
                    restitution: 0.5,
                },
            ],
            arc: Some(ArcConfig {
                center: [645.0, 215.0],
                radius: 100.0,
                start_angle: 1.0,
                end_angle: -2.5,
                segments: 20,
                friction: 1.0,
                restitution: 0.5,
            }),
            dominoes: DominoConfig {
                count: 5,
                width: 10.0,
                height: 60.0,
                spacing: 10.0,
                first: [150.0, 515.0],
                mass: 1.0,
                friction: 0.5,
            },
            segment_radius: 4.0,
            ball_start: [50.0, 202.0],
            ball_friction: 1.0,
            ball_restitution: 0.5,
            spring: SpringConfig {
                housing: [0.0, 150.0, 20.0, 50.0],
                anchor_x: 10.0,
                rest_length: 30.0,
                coils: 14,
                amplitude: 20.0,
            },
            origin_frame: true,
            energy_plot: true,
            scales: ScaleConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Total number of static segment colliders this layout produces.
    pub fn static_segment_count(&self) -> usize {
        let ramp_segments: usize = self
            .ramps
            .iter()
            .map(|r| r.points.len().saturating_sub(1))
            .sum();
        let arc_segments = self.arc.as_ref().map_or(0, |a| a.segments.max(1));
        ramp_segments + arc_segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_census() {
        let config = SceneConfig::default();
        // 1 + 2 + 2 ramp segments plus 20 arc segments.
        assert_eq!(config.static_segment_count(), 25);
        assert_eq!(config.dominoes.count, 5);
        assert!(config.origin_frame);
        assert!(config.energy_plot);
    }

    #[test]
    fn arc_sampling_endpoints() {
        let arc = ArcConfig {
            center: [645.0, 215.0],
            radius: 100.0,
            start_angle: 1.0,
            end_angle: -2.5,
            segments: 20,
            friction: 1.0,
            restitution: 0.5,
        };
        let points = arc.sample_points();
        assert_eq!(points.len(), 21);

        let first = points.first().unwrap();
        assert!((first[0] - (645.0 + 100.0 * 1.0_f32.cos())).abs() < 1e-4);
        assert!((first[1] - (215.0 + 100.0 * 1.0_f32.sin())).abs() < 1e-4);

        let last = points.last().unwrap();
        assert!((last[0] - (645.0 + 100.0 * (-2.5_f32).cos())).abs() < 1e-4);
        assert!((last[1] - (215.0 + 100.0 * (-2.5_f32).sin())).abs() < 1e-4);
    }

    #[test]
    fn json_round_trip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

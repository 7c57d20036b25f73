//! Derived-quantity calculator.
//!
//! Pure formulas over the current slider values and the ball's state.
//! All inputs arrive pre-clamped, so every function is total.

use crate::config::ScaleConfig;

/// Spring energy (and therefore launch impulse) ceiling. Energy above this
/// is clamped, not an error.
pub const SPRING_ENERGY_CAP: f32 = 1200.0;

/// Subtracted from the measured height so the readout is zero while the
/// ball rests on the reference surface.
pub const HEIGHT_SURFACE_OFFSET: f32 = 8.0;

/// Calculator carrying the display-scale divisors.
#[derive(Clone, Copy, Debug)]
pub struct Energetics {
    gravity_divisor: f32,
    speed_divisor: f32,
}

impl From<ScaleConfig> for Energetics {
    fn from(scales: ScaleConfig) -> Self {
        Self {
            gravity_divisor: scales.gravity_divisor,
            speed_divisor: scales.speed_divisor,
        }
    }
}

impl Energetics {
    /// Elastic potential energy `0.5 k x^2`, capped at [`SPRING_ENERGY_CAP`].
    pub fn spring_potential(&self, stiffness: f32, displacement: f32) -> f32 {
        (0.5 * stiffness * displacement * displacement).min(SPRING_ENERGY_CAP)
    }

    /// Magnitude of the one-shot launch impulse: the capped spring energy,
    /// applied along +x at the ball's local origin.
    pub fn launch_impulse(&self, stiffness: f32, displacement: f32) -> f32 {
        self.spring_potential(stiffness, displacement)
    }

    /// Weight readout `m * (g / gravity_divisor)`.
    pub fn weight(&self, mass: f32, gravity: f32) -> f32 {
        mass * (gravity / self.gravity_divisor)
    }

    /// Ball height above the reference origin, in a y-up frame.
    ///
    /// Both coordinates are engine-frame (y-down); the radius and the fixed
    /// surface offset are subtracted so a ball resting at the origin level
    /// reads zero. Never negative.
    pub fn reference_height(&self, origin_y: f32, ball_y: f32, radius: f32) -> f32 {
        ((origin_y - ball_y) - radius - HEIGHT_SURFACE_OFFSET).max(0.0)
    }

    /// Gravitational potential energy `m * (g / gravity_divisor) * h`.
    pub fn gravitational_potential(&self, mass: f32, gravity: f32, height: f32) -> f32 {
        self.weight(mass, gravity) * height
    }

    /// Kinetic energy `0.5 m v^2` with `v = speed / speed_divisor`.
    pub fn kinetic(&self, mass: f32, speed: f32) -> f32 {
        let v = speed / self.speed_divisor;
        0.5 * mass * v * v
    }
}

impl Default for Energetics {
    fn default() -> Self {
        ScaleConfig::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_potential_below_cap() {
        let e = Energetics::default();
        // Default sliders: 0.5 * 7.5 * 7.5^2
        let expected = 0.5 * 7.5 * 7.5 * 7.5;
        assert!((e.spring_potential(7.5, 7.5) - expected).abs() < 1e-4);
    }

    #[test]
    fn spring_potential_clamps_at_cap() {
        let e = Energetics::default();
        // Raw 0.5 * 15 * 225 = 1687.5 exceeds the ceiling.
        assert_eq!(e.spring_potential(15.0, 15.0), 1200.0);
        assert_eq!(e.launch_impulse(15.0, 15.0), 1200.0);
    }

    #[test]
    fn zero_spring_is_zero_impulse() {
        let e = Energetics::default();
        assert_eq!(e.spring_potential(0.0, 0.0), 0.0);
        assert_eq!(e.launch_impulse(0.0, 0.0), 0.0);
        assert_eq!(e.spring_potential(0.0, 15.0), 0.0);
        assert_eq!(e.spring_potential(15.0, 0.0), 0.0);
    }

    #[test]
    fn weight_uses_gravity_divisor() {
        let e = Energetics::default();
        assert!((e.weight(1.0, 980.0) - 9.8).abs() < 1e-5);
        assert_eq!(e.weight(2.0, 0.0), 0.0);
    }

    #[test]
    fn weight_monotone_in_mass_and_gravity() {
        let e = Energetics::default();
        let masses = [0.5, 1.0, 2.5, 5.0];
        let gravities = [0.0, 500.0, 980.0, 2000.0];
        for window in masses.windows(2) {
            for &g in &gravities {
                assert!(e.weight(window[0], g) <= e.weight(window[1], g));
            }
        }
        for window in gravities.windows(2) {
            for &m in &masses {
                assert!(e.weight(m, window[0]) <= e.weight(m, window[1]));
            }
        }
    }

    #[test]
    fn reference_height_clamps_below_origin() {
        let e = Energetics::default();
        // Ball below the origin line reads zero height.
        assert_eq!(e.reference_height(720.0, 750.0, 20.0), 0.0);
        // Ball well above: 720 - 200 - 20 - 8.
        assert!((e.reference_height(720.0, 200.0, 20.0) - 492.0).abs() < 1e-4);
        // Near the origin line the offsets dominate.
        assert_eq!(e.reference_height(720.0, 700.0, 20.0), 0.0);
    }

    #[test]
    fn gravitational_potential_zero_at_reference() {
        let e = Energetics::default();
        assert_eq!(e.gravitational_potential(3.0, 980.0, 0.0), 0.0);
        let gpe = e.gravitational_potential(1.0, 980.0, 100.0);
        assert!((gpe - 980.0).abs() < 1e-3);
    }

    #[test]
    fn kinetic_uses_speed_divisor() {
        let e = Energetics::default();
        // speed 100 -> display v 10 -> 0.5 * 1 * 100
        assert!((e.kinetic(1.0, 100.0) - 50.0).abs() < 1e-4);
        assert_eq!(e.kinetic(5.0, 0.0), 0.0);
    }

    #[test]
    fn custom_scales_respected() {
        let e: Energetics = ScaleConfig {
            gravity_divisor: 10.0,
            speed_divisor: 1.0,
        }
        .into();
        assert!((e.weight(1.0, 980.0) - 98.0).abs() < 1e-4);
        assert!((e.kinetic(2.0, 3.0) - 9.0).abs() < 1e-4);
    }
}

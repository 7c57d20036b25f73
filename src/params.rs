//! Bounded simulation parameters.
//!
//! The five user-tunable quantities behind the control sliders. Every write
//! clamps to the declared range, so downstream code never validates.

/// Inclusive value range with a default, as exposed by one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Identifies one tunable parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    /// Spring constant k, N/m.
    Stiffness,
    /// Spring compression x, m.
    Displacement,
    /// Ball mass m.
    Mass,
    /// Ball radius r, world units.
    Radius,
    /// Gravity magnitude g (world units, y-down).
    Gravity,
}

impl Param {
    pub const fn range(self) -> ParamRange {
        match self {
            Param::Stiffness => ParamRange::new(0.0, 15.0, 7.5),
            Param::Displacement => ParamRange::new(0.0, 15.0, 7.5),
            Param::Mass => ParamRange::new(0.5, 5.0, 1.0),
            Param::Radius => ParamRange::new(10.0, 40.0, 20.0),
            Param::Gravity => ParamRange::new(0.0, 2000.0, 980.0),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Param::Stiffness => "K (N/m)",
            Param::Displacement => "X (m)",
            Param::Mass => "Mass",
            Param::Radius => "Radius",
            Param::Gravity => "Gravity",
        }
    }
}

/// Current values of all tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub stiffness: f32,
    pub displacement: f32,
    pub mass: f32,
    pub radius: f32,
    pub gravity: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            stiffness: Param::Stiffness.range().default,
            displacement: Param::Displacement.range().default,
            mass: Param::Mass.range().default,
            radius: Param::Radius.range().default,
            gravity: Param::Gravity.range().default,
        }
    }
}

impl SimulationParameters {
    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::Stiffness => self.stiffness,
            Param::Displacement => self.displacement,
            Param::Mass => self.mass,
            Param::Radius => self.radius,
            Param::Gravity => self.gravity,
        }
    }

    /// Set a parameter, clamped to its declared range.
    pub fn set(&mut self, param: Param, value: f32) {
        let value = param.range().clamp(value);
        match param {
            Param::Stiffness => self.stiffness = value,
            Param::Displacement => self.displacement = value,
            Param::Mass => self.mass = value,
            Param::Radius => self.radius = value,
            Param::Gravity => self.gravity = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_declared() {
        let params = SimulationParameters::default();
        assert_eq!(params.stiffness, 7.5);
        assert_eq!(params.displacement, 7.5);
        assert_eq!(params.mass, 1.0);
        assert_eq!(params.radius, 20.0);
        assert_eq!(params.gravity, 980.0);
    }

    #[test]
    fn writes_clamp_to_range() {
        let mut params = SimulationParameters::default();

        params.set(Param::Mass, 100.0);
        assert_eq!(params.mass, 5.0);

        params.set(Param::Mass, -3.0);
        assert_eq!(params.mass, 0.5);

        params.set(Param::Gravity, 2500.0);
        assert_eq!(params.gravity, 2000.0);

        params.set(Param::Stiffness, 3.25);
        assert_eq!(params.stiffness, 3.25);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut params = SimulationParameters::default();
        params.set(Param::Stiffness, 1.0);
        params.set(Param::Radius, 35.0);
        params.reset();
        assert_eq!(params, SimulationParameters::default());
    }
}

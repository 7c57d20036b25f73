//! Fixed-timestep accumulation.
//!
//! The physics engine advances in constant 1/60 s steps regardless of the
//! actual frame rate. [`FixedStep`] converts variable frame deltas into a
//! whole number of steps, carrying the remainder between frames.

/// The physics timestep in seconds.
pub const PHYSICS_DT: f32 = 1.0 / 60.0;

/// Accumulates frame time and yields fixed-size physics steps.
#[derive(Debug)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    /// Catch-up ceiling per frame; beyond it the backlog is dropped rather
    /// than spiralling.
    max_steps: u32,
}

impl FixedStep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_steps: 8,
        }
    }

    /// The fixed step size in seconds.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's delta time; returns how many fixed steps to run.
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.accumulator += delta.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        // A frame stall longer than the ceiling sheds its backlog.
        if steps == self.max_steps {
            self.accumulator = 0.0;
        }

        steps
    }

    /// Drop any accumulated remainder.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(PHYSICS_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiples_yield_exact_steps() {
        let mut stepper = FixedStep::new(0.25);
        assert_eq!(stepper.advance(0.5), 2);
        assert_eq!(stepper.advance(0.25), 1);
        assert_eq!(stepper.advance(0.0), 0);
    }

    #[test]
    fn remainder_carries_between_frames() {
        let mut stepper = FixedStep::new(1.0 / 60.0);
        // Two 1/120 s frames add up to one step.
        assert_eq!(stepper.advance(1.0 / 120.0), 0);
        assert_eq!(stepper.advance(1.0 / 120.0), 1);
    }

    #[test]
    fn catch_up_is_capped() {
        let mut stepper = FixedStep::new(1.0 / 60.0);
        // A 10 s stall must not produce 600 steps.
        assert_eq!(stepper.advance(10.0), 8);
        // And the backlog is gone.
        assert_eq!(stepper.advance(0.0), 0);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut stepper = FixedStep::new(1.0 / 60.0);
        assert_eq!(stepper.advance(-1.0), 0);
        assert_eq!(stepper.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn reset_drops_remainder() {
        let mut stepper = FixedStep::new(1.0 / 60.0);
        stepper.advance(0.9 / 60.0);
        stepper.reset();
        assert_eq!(stepper.advance(0.5 / 60.0), 0);
    }
}

//! The simulation session.
//!
//! [`Session`] is the single owned context object behind the whole sandbox:
//! it holds the physics world, the tunable parameters, the phase state
//! machine, the scene handles, the reference origin, and the energy record.
//! The UI layer only ever talks to it through commands (start/pause, reset,
//! parameter edits) and read-only queries.

use glam::Vec2;

use crate::config::{SceneConfig, STAGE_HEIGHT};
use crate::energy::Energetics;
use crate::history::EnergyHistory;
use crate::origin::OriginFrame;
use crate::params::{Param, SimulationParameters};
use crate::physics::PhysicsWorld;
use crate::scene::{self, SceneHandles};
use crate::time::{FixedStep, PHYSICS_DT};

/// Run state of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    WaitingToStart,
    Running,
    Paused,
}

impl Phase {
    pub const fn label(self) -> &'static str {
        match self {
            Phase::WaitingToStart => "Waiting to start",
            Phase::Running => "Running",
            Phase::Paused => "Paused",
        }
    }
}

/// Snapshot of every derived quantity shown in the readout panel.
#[derive(Clone, Copy, Debug)]
pub struct Readouts {
    pub spring_energy: f32,
    pub impulse: f32,
    pub weight: f32,
    pub gravitational: f32,
    pub kinetic: f32,
    pub height: f32,
    pub speed: f32,
    /// Ball center translated into the user frame (origin-relative, y-up).
    pub ball_user_pos: Vec2,
}

pub struct Session {
    config: SceneConfig,
    params: SimulationParameters,
    world: PhysicsWorld,
    handles: SceneHandles,
    origin: OriginFrame,
    energetics: Energetics,
    stepper: FixedStep,
    phase: Phase,
    fired: bool,
    sim_time: f32,
    history: EnergyHistory,
}

impl Session {
    pub fn new(config: SceneConfig) -> Self {
        let params = SimulationParameters::default();
        let mut world = PhysicsWorld::new(params.gravity, PHYSICS_DT);
        let handles = scene::build(&mut world, &config, &params);
        let energetics = Energetics::from(config.scales);

        tracing::debug!(
            bodies = world.body_count(),
            colliders = world.collider_count(),
            "scene built"
        );

        Self {
            config,
            params,
            world,
            handles,
            origin: OriginFrame::new(Vec2::new(0.0, STAGE_HEIGHT)),
            energetics,
            stepper: FixedStep::default(),
            phase: Phase::WaitingToStart,
            fired: false,
            sim_time: 0.0,
            history: EnergyHistory::default(),
        }
    }

    // ========== Queries ==========

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Parameter edits are accepted except while running.
    #[inline]
    pub fn can_edit(&self) -> bool {
        self.phase != Phase::Running
    }

    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn origin(&self) -> &OriginFrame {
        &self.origin
    }

    #[inline]
    pub fn fired(&self) -> bool {
        self.fired
    }

    #[inline]
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    #[inline]
    pub fn history(&self) -> &EnergyHistory {
        &self.history
    }

    pub fn ball_position(&self) -> Option<Vec2> {
        self.handles
            .ball
            .handle()
            .and_then(|h| self.world.position(h))
    }

    pub fn ball_velocity(&self) -> Option<Vec2> {
        self.handles
            .ball
            .handle()
            .and_then(|h| self.world.velocity(h))
    }

    pub fn ball_speed(&self) -> f32 {
        self.ball_velocity().map_or(0.0, |v| v.length())
    }

    /// Positions and rotations of the domino row, in scene order.
    pub fn dominoes(&self) -> Vec<(Vec2, f32)> {
        self.handles
            .dominoes
            .iter()
            .filter_map(|&h| {
                let pos = self.world.position(h)?;
                let angle = self.world.rotation(h)?;
                Some((pos, angle))
            })
            .collect()
    }

    /// Compute every derived quantity from the current state.
    pub fn readouts(&self) -> Readouts {
        let ball = self.ball_position().unwrap_or_default();
        let speed = self.ball_speed();
        let height =
            self.energetics
                .reference_height(self.origin.offset().y, ball.y, self.params.radius);

        Readouts {
            spring_energy: self
                .energetics
                .spring_potential(self.params.stiffness, self.params.displacement),
            impulse: self
                .energetics
                .launch_impulse(self.params.stiffness, self.params.displacement),
            weight: self.energetics.weight(self.params.mass, self.params.gravity),
            gravitational: self.energetics.gravitational_potential(
                self.params.mass,
                self.params.gravity,
                height,
            ),
            kinetic: self.energetics.kinetic(self.params.mass, speed),
            height,
            speed,
            ball_user_pos: self.origin.to_user(ball),
        }
    }

    // ========== Commands ==========

    /// The start/pause command: waiting starts the run (launching once),
    /// running pauses, paused resumes.
    pub fn toggle_run(&mut self) {
        self.phase = match self.phase {
            Phase::WaitingToStart => {
                self.fire_spring();
                tracing::info!("run started");
                Phase::Running
            }
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
        };
    }

    /// Apply the launch impulse. One-shot: guarded so repeated start
    /// presses within a run never re-fire.
    fn fire_spring(&mut self) {
        if self.fired {
            return;
        }
        let impulse = self
            .energetics
            .launch_impulse(self.params.stiffness, self.params.displacement);
        if let Some(handle) = self.handles.ball.handle() {
            self.world.apply_impulse(handle, Vec2::new(impulse, 0.0));
        }
        self.fired = true;
        tracing::info!(impulse, "spring fired");
    }

    /// Tear the world down and rebuild it from defaults.
    ///
    /// Returns the energy record of the finished run so the caller can hand
    /// it to the chart.
    pub fn reset(&mut self) -> EnergyHistory {
        let finished = std::mem::take(&mut self.history);

        self.world.clear();
        self.handles.ball.forget();
        self.params.reset();
        self.world.set_gravity(self.params.gravity);
        self.handles = scene::build(&mut self.world, &self.config, &self.params);
        self.origin.reset();
        self.stepper.reset();
        self.fired = false;
        self.sim_time = 0.0;
        self.phase = Phase::WaitingToStart;

        tracing::info!(samples = finished.len(), "reset to defaults");
        finished
    }

    /// Edit one parameter. Silently ignored while running. Mass and radius
    /// edits respawn the ball; gravity edits retune the world immediately.
    pub fn set_param(&mut self, param: Param, value: f32) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.params.set(param, value);
        match param {
            Param::Mass | Param::Radius => {
                self.handles
                    .ball
                    .replace(&mut self.world, &self.config, &self.params);
            }
            Param::Gravity => self.world.set_gravity(self.params.gravity),
            Param::Stiffness | Param::Displacement => {}
        }
        true
    }

    /// Drag the reference origin. Only before the run starts, and only
    /// while it has not been fixed.
    pub fn move_origin(&mut self, position: Vec2) -> bool {
        if !self.config.origin_frame || self.phase != Phase::WaitingToStart {
            return false;
        }
        self.origin.move_to(position)
    }

    /// Promote the origin to fixed (one-way until reset).
    pub fn fix_origin(&mut self) {
        if self.config.origin_frame && !self.origin.is_fixed() {
            self.origin.fix();
            tracing::debug!(offset = ?self.origin.offset(), "origin fixed");
        }
    }

    // ========== Frame driving ==========

    /// Feed one frame's wall-clock delta; steps physics while running and
    /// records one energy sample per step.
    pub fn advance(&mut self, frame_delta: f32) {
        if self.phase != Phase::Running {
            return;
        }
        for _ in 0..self.stepper.advance(frame_delta) {
            self.world.step();
            self.sim_time += PHYSICS_DT;
            self.record_sample();
        }
    }

    fn record_sample(&mut self) {
        let readouts = self.readouts();
        self.history
            .push(self.sim_time, readouts.kinetic, readouts.gravitational);
    }
}

//! # Goldberg
//!
//! An interactive 2D "Rube Goldberg machine" teaching demo: drag sliders to
//! configure a spring constant, displacement, mass, radius, and gravity,
//! fire a spring-launched ball along ramp geometry, and watch the energy
//! and position readouts update live.
//!
//! Rigid-body dynamics are delegated to rapier2d and all drawing goes
//! through egui/eframe; this crate contributes the glue the demo actually
//! consists of:
//!
//! - the derived-quantity formulas ([`energy`])
//! - the start/pause/reset state machine around a one-shot launch
//!   ([`session`])
//! - parameterized scene construction ([`config`], [`scene`])
//! - the movable reference origin for height measurements ([`origin`])
//! - hand-drawn slider/button widgets ([`widgets`])
//!
//! ## Quick start
//!
//! ```ignore
//! use goldberg::{SceneConfig, Session};
//!
//! let mut session = Session::new(SceneConfig::default());
//! session.toggle_run();            // fire the spring, start simulating
//! session.advance(1.0 / 60.0);     // one frame's worth of physics
//! let readouts = session.readouts();
//! println!("kinetic energy: {:.1} J", readouts.kinetic);
//! ```

pub mod app;
pub mod config;
pub mod energy;
pub mod error;
pub mod history;
pub mod origin;
pub mod params;
pub mod physics;
pub mod scene;
pub mod session;
pub mod time;
pub mod ui;
pub mod widgets;

pub use config::{SceneConfig, STAGE_HEIGHT, STAGE_WIDTH};
pub use glam::Vec2;
pub use energy::{Energetics, SPRING_ENERGY_CAP};
pub use error::ConfigError;
pub use history::EnergyHistory;
pub use origin::OriginFrame;
pub use params::{Param, ParamRange, SimulationParameters};
pub use physics::PhysicsWorld;
pub use session::{Phase, Readouts, Session};
pub use time::{FixedStep, PHYSICS_DT};
pub use widgets::{Button, Slider};

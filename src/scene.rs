//! Scene construction.
//!
//! Turns a [`SceneConfig`] into physics bodies: static ramp and arc
//! segments, the domino row, and the ball. The ball lives in a single-slot
//! handle that is released and re-acquired whenever mass or radius changes,
//! so stale handles never outlive their body.

use glam::Vec2;
use rapier2d::prelude::RigidBodyHandle;

use crate::config::SceneConfig;
use crate::params::SimulationParameters;
use crate::physics::PhysicsWorld;

/// Single-slot owner of the ball's body handle.
#[derive(Debug, Default)]
pub struct BallSlot {
    handle: Option<RigidBodyHandle>,
}

impl BallSlot {
    pub fn handle(&self) -> Option<RigidBodyHandle> {
        self.handle
    }

    /// Remove the previous ball (if any) and spawn a fresh one from the
    /// current parameters.
    pub fn replace(
        &mut self,
        world: &mut PhysicsWorld,
        config: &SceneConfig,
        params: &SimulationParameters,
    ) -> RigidBodyHandle {
        if let Some(old) = self.handle.take() {
            world.remove_body(old);
        }

        let center = Vec2::new(config.ball_start[0], config.ball_start[1] - params.radius);
        let handle = world.add_ball(
            center,
            params.radius,
            params.mass,
            config.ball_friction,
            config.ball_restitution,
        );
        self.handle = Some(handle);
        handle
    }

    /// Forget the handle without touching the world. Used right after a
    /// wholesale world clear, when the body is already gone.
    pub fn forget(&mut self) {
        self.handle = None;
    }
}

/// Handles to the dynamic parts of a built scene.
#[derive(Debug, Default)]
pub struct SceneHandles {
    pub ball: BallSlot,
    pub dominoes: Vec<RigidBodyHandle>,
}

/// Build the static geometry, domino row, and ball into `world`.
pub fn build(
    world: &mut PhysicsWorld,
    config: &SceneConfig,
    params: &SimulationParameters,
) -> SceneHandles {
    for ramp in &config.ramps {
        for pair in ramp.points.windows(2) {
            world.add_static_segment(
                Vec2::from_array(pair[0]),
                Vec2::from_array(pair[1]),
                config.segment_radius,
                ramp.friction,
                ramp.restitution,
            );
        }
    }

    if let Some(arc) = &config.arc {
        let points = arc.sample_points();
        for pair in points.windows(2) {
            world.add_static_segment(
                Vec2::from_array(pair[0]),
                Vec2::from_array(pair[1]),
                config.segment_radius,
                arc.friction,
                arc.restitution,
            );
        }
    }

    let d = &config.dominoes;
    let dominoes = (0..d.count)
        .map(|i| {
            let center = Vec2::new(d.first[0] + i as f32 * (d.width + d.spacing), d.first[1]);
            world.add_box(
                center,
                Vec2::new(d.width / 2.0, d.height / 2.0),
                d.mass,
                d.friction,
            )
        })
        .collect();

    let mut ball = BallSlot::default();
    ball.replace(world, config, params);

    SceneHandles { ball, dominoes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::PHYSICS_DT;

    fn test_world(params: &SimulationParameters) -> PhysicsWorld {
        PhysicsWorld::new(params.gravity, PHYSICS_DT)
    }

    #[test]
    fn default_scene_census() {
        let config = SceneConfig::default();
        let params = SimulationParameters::default();
        let mut world = test_world(&params);

        let handles = build(&mut world, &config, &params);

        // Ball plus five dominoes are the only bodies; statics are
        // parentless colliders.
        assert_eq!(world.body_count(), 6);
        assert_eq!(
            world.collider_count(),
            config.static_segment_count() + 1 + config.dominoes.count
        );
        assert!(handles.ball.handle().is_some());
        assert_eq!(handles.dominoes.len(), 5);
    }

    #[test]
    fn ball_spawns_on_launch_platform() {
        let config = SceneConfig::default();
        let params = SimulationParameters::default();
        let mut world = test_world(&params);

        let handles = build(&mut world, &config, &params);
        let pos = world.position(handles.ball.handle().unwrap()).unwrap();
        assert!((pos.x - 50.0).abs() < 1e-5);
        assert!((pos.y - (202.0 - params.radius)).abs() < 1e-5);
    }

    #[test]
    fn replace_swaps_handle_without_leaking_bodies() {
        let config = SceneConfig::default();
        let mut params = SimulationParameters::default();
        let mut world = test_world(&params);

        let mut handles = build(&mut world, &config, &params);
        let before = handles.ball.handle().unwrap();
        let bodies_before = world.body_count();

        params.set(crate::params::Param::Radius, 35.0);
        let after = handles.ball.replace(&mut world, &config, &params);

        assert_ne!(before, after);
        assert_eq!(world.body_count(), bodies_before);
        assert!(world.position(before).is_none());
        let pos = world.position(after).unwrap();
        assert!((pos.y - (202.0 - 35.0)).abs() < 1e-5);
    }

    #[test]
    fn zero_domino_config_builds_none() {
        let mut config = SceneConfig::default();
        config.dominoes.count = 0;
        let params = SimulationParameters::default();
        let mut world = test_world(&params);

        let handles = build(&mut world, &config, &params);
        assert!(handles.dominoes.is_empty());
        assert_eq!(world.body_count(), 1);
    }
}

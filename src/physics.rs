//! Ownership wrapper over the rapier2d world.
//!
//! Rigid-body dynamics, collision detection and resolution are entirely
//! rapier's job; this module only owns the engine state, exposes the few
//! operations the sandbox needs, and keeps handle bookkeeping in one place.
//! Coordinates are screen-like: x right, y down, gravity positive-y.

use glam::Vec2;
use rapier2d::prelude::*;

pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
}

impl PhysicsWorld {
    pub fn new(gravity_y: f32, dt: f32) -> Self {
        let mut integration_params = IntegrationParameters::default();
        integration_params.dt = dt;

        Self {
            gravity: vector![0.0, gravity_y],
            integration_params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
        }
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        self.gravity = vector![0.0, gravity_y];
    }

    pub fn gravity_y(&self) -> f32 {
        self.gravity.y
    }

    /// Advance the world by one fixed timestep.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    /// Drop every body and collider by replacing the engine containers.
    ///
    /// All previously issued handles become dead with the sets they pointed
    /// into, so nothing can act on a destroyed body afterwards.
    pub fn clear(&mut self) {
        self.islands = IslandManager::new();
        self.broad_phase = BroadPhase::new();
        self.narrow_phase = NarrowPhase::new();
        self.bodies = RigidBodySet::new();
        self.colliders = ColliderSet::new();
        self.impulse_joints = ImpulseJointSet::new();
        self.multibody_joints = MultibodyJointSet::new();
        self.ccd = CCDSolver::new();
    }

    /// Static thick segment (capsule) between two points.
    pub fn add_static_segment(
        &mut self,
        a: Vec2,
        b: Vec2,
        half_thickness: f32,
        friction: f32,
        restitution: f32,
    ) -> ColliderHandle {
        let shape = SharedShape::capsule(point![a.x, a.y], point![b.x, b.y], half_thickness);
        let collider = ColliderBuilder::new(shape)
            .friction(friction)
            .restitution(restitution)
            .build();
        self.colliders.insert(collider)
    }

    /// Dynamic ball with an explicit mass.
    pub fn add_ball(
        &mut self,
        center: Vec2,
        radius: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![center.x, center.y])
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::ball(radius)
            .mass(mass)
            .friction(friction)
            .restitution(restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    /// Dynamic axis-aligned box (used for dominoes).
    pub fn add_box(
        &mut self,
        center: Vec2,
        half_extents: Vec2,
        mass: f32,
        friction: f32,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![center.x, center.y])
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .mass(mass)
            .friction(friction)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    /// Remove a body together with its attached colliders.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    pub fn apply_impulse(&mut self, handle: RigidBodyHandle, impulse: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.apply_impulse(vector![impulse.x, impulse.y], true);
        }
    }

    pub fn position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }

    pub fn rotation(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(handle).map(|body| body.rotation().angle())
    }

    pub fn velocity(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
    }

    pub fn speed(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.velocity(handle).map(|v| v.length())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

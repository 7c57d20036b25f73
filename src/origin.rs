//! The movable reference origin.
//!
//! Heights (and thus gravitational potential energy) are measured from a
//! user-positioned origin rather than the engine frame. The origin can be
//! dragged while the run has not started and promoted to "fixed" exactly
//! once; fixing is irreversible until reset.

use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct OriginFrame {
    offset: Vec2,
    home: Vec2,
    fixed: bool,
}

impl OriginFrame {
    pub fn new(home: Vec2) -> Self {
        Self {
            offset: home,
            home,
            fixed: false,
        }
    }

    /// Current origin position in the engine frame.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Move the origin. Ignored once fixed; returns whether it applied.
    pub fn move_to(&mut self, position: Vec2) -> bool {
        if self.fixed {
            return false;
        }
        self.offset = position;
        true
    }

    /// Promote the origin to fixed. One-way until [`OriginFrame::reset`].
    pub fn fix(&mut self) {
        self.fixed = true;
    }

    /// Restore the default position and clear the fixed flag (new run).
    pub fn reset(&mut self) {
        self.offset = self.home;
        self.fixed = false;
    }

    /// Translate an engine-frame point into the user frame: origin-relative,
    /// y growing upward.
    pub fn to_user(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x - self.offset.x, self.offset.y - world.y)
    }
}

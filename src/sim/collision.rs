//! Axis-aligned collision helpers
//!
//! Everything in the arena is a box: the ball sprite, the paddle, the blocks
//! and the world itself. Collision is open-interval overlap, so two boxes that
//! only share an edge do not touch.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Same rectangle moved by `delta`
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }
}

/// Check whether two rectangles overlap (touching edges don't count)
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.right() > b.left() && a.left() < b.right() && a.bottom() > b.top() && a.top() < b.bottom()
}

/// Side of the world a rectangle has crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Report the first world side `rect` sticks out of.
///
/// Sides are checked left, right, top, bottom; a box poking out of a corner
/// reports only the first of the two.
pub fn boundary_violation(rect: &Rect, world: &Rect) -> Option<Side> {
    if rect.left() < world.left() {
        Some(Side::Left)
    } else if rect.right() > world.right() {
        Some(Side::Right)
    } else if rect.top() < world.top() {
        Some(Side::Top)
    } else if rect.bottom() > world.bottom() {
        Some(Side::Bottom)
    } else {
        None
    }
}

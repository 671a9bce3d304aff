//! Collision tests and response vectors
//!
//! Detection is discrete: positions are compared once per tick, with no
//! sweep between frames.

use glam::Vec2;

use super::table::Table;

/// One of the four table edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bumper {
    Right,
    Left,
    Top,
    Bottom,
}

impl Bumper {
    /// Check order; a ball in a corner only bounces off the first one hit
    pub const ORDER: [Bumper; 4] = [Bumper::Right, Bumper::Left, Bumper::Top, Bumper::Bottom];

    /// Unit normal pointing back onto the felt
    pub fn inward_normal(self) -> Vec2 {
        match self {
            Bumper::Right => Vec2::NEG_X,
            Bumper::Left => Vec2::X,
            Bumper::Top => Vec2::Y,
            Bumper::Bottom => Vec2::NEG_Y,
        }
    }

    /// Whether a ball's leading edge is on or past this bumper
    pub fn touches(self, pos: Vec2, radius: f32, table: &Table) -> bool {
        match self {
            Bumper::Right => pos.x + radius >= table.felt_right(),
            Bumper::Left => pos.x - radius <= table.felt_left,
            Bumper::Top => pos.y - radius <= table.felt_top,
            Bumper::Bottom => pos.y + radius >= table.felt_bottom(),
        }
    }
}

/// First bumper (in check order) the ball is touching, if any
pub fn bumper_hit(pos: Vec2, radius: f32, table: &Table) -> Option<Bumper> {
    Bumper::ORDER
        .into_iter()
        .find(|bumper| bumper.touches(pos, radius, table))
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Whether two balls overlap or touch (inclusive)
#[inline]
pub fn balls_touch(a: Vec2, b: Vec2, diameter: f32) -> bool {
    a.distance(b) <= diameter
}

/// Impulse pushed from `from` onto `to`, scaled by the striking ball's speed
///
/// Applied to `to` as-is and to `from` negated.
#[inline]
pub fn contact_force(from: Vec2, to: Vec2, striker_speed: f32, scale: f32) -> Vec2 {
    scale * (to - from) * striker_speed
}

//! Table geometry
//!
//! The felt is an axis-aligned rectangle in table space (y grows downward).
//! Bumpers sit on its four edges; their drawn width lives in `consts`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playing surface bounds and ball size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub felt_left: f32,
    pub felt_top: f32,
    pub felt_width: f32,
    pub felt_height: f32,
    pub ball_diameter: f32,
}

impl Table {
    pub const STANDARD: Table = Table {
        felt_left: FELT_LEFT,
        felt_top: FELT_TOP,
        felt_width: FELT_WIDTH,
        felt_height: FELT_HEIGHT,
        ball_diameter: BALL_DIAMETER,
    };

    #[inline]
    pub fn felt_right(&self) -> f32 {
        self.felt_left + self.felt_width
    }

    #[inline]
    pub fn felt_bottom(&self) -> f32 {
        self.felt_top + self.felt_height
    }

    #[inline]
    pub fn ball_radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }

    /// Center of the felt
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.felt_left + self.felt_width / 2.0,
            self.felt_top + self.felt_height / 2.0,
        )
    }

    /// Whether a ball center at `pos` is clear of every bumper
    pub fn contains_ball(&self, pos: Vec2) -> bool {
        let r = self.ball_radius();
        pos.x - r > self.felt_left
            && pos.x + r < self.felt_right()
            && pos.y - r > self.felt_top
            && pos.y + r < self.felt_bottom()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::STANDARD
    }
}

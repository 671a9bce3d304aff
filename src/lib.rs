//! Billiards - a real-time 2D pool table simulation
//!
//! Core modules:
//! - `sim`: Frame-driven physics (bodies, timed forces, collisions, friction)
//! - `settings`: Physics tuning and table geometry
//! - `appearance`: Visual handles resolved once per ball type
//! - `session`: Run loop wiring intents, ticks and rendering together
//! - `autoplay`: Seeded demo player that produces shots

pub mod appearance;
pub mod autoplay;
pub mod error;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::SetupError;
pub use settings::Settings;

/// Fixed layout and physics constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: u32 = 1100;
    pub const WINDOW_HEIGHT: u32 = 600;

    /// Table layout (table-space pixels)
    pub const BUMPER_WIDTH: f32 = 50.0;
    pub const FELT_LEFT: f32 = BUMPER_WIDTH * 2.0;
    pub const FELT_TOP: f32 = 100.0;
    pub const FELT_WIDTH: f32 = 800.0;
    pub const FELT_HEIGHT: f32 = 400.0;
    pub const BALL_DIAMETER: f32 = 35.0;

    /// Shot power gauge, drawn to the right of the table
    pub const POWER_BAR_LEFT: f32 = FELT_WIDTH + BUMPER_WIDTH + 150.0;
    pub const POWER_BAR_TOP: f32 = FELT_TOP;
    pub const POWER_BAR_HEIGHT: f32 = FELT_HEIGHT;
    pub const POWER_BAR_WIDTH: f32 = 40.0;
    pub const POWER_BAR_BORDER_WIDTH: f32 = 10.0;

    /// Ball mass used for every F = ma conversion
    pub const BALL_MASS: f32 = 15.0;
    pub const FRICTION_COEFFICIENT: f32 = 0.04;
    /// Below this speed a ball is snapped to rest
    pub const STATIC_FRICTION_THRESHOLD: f32 = 0.002;
    /// Ball-ball impulse scale
    pub const COLLISION_SCALE: f32 = 0.01;
    /// Converts simulation time units into pixel travel
    pub const POSITION_SCALE: f32 = 1000.0;
    pub const SHOT_POWER_MULTIPLIER: f32 = 0.05;

    /// Simulation clock advance per rendered frame (not wall-clock time)
    pub const CLOCK_STEP: f32 = 0.001;
    /// Pause between frames
    pub const FRAME_DELAY_MS: u64 = 2;
    /// Angular frequency of the shot power oscillation
    pub const SHOT_POWER_FREQUENCY: f32 = 8.0;
}

/// Shot power for a given simulation clock, oscillating in [0, 1]
#[inline]
pub fn shot_power_at(clock: f32) -> f32 {
    0.5 * ((consts::SHOT_POWER_FREQUENCY * clock).sin() + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_power_range() {
        for i in 0..2000 {
            let p = shot_power_at(i as f32 * consts::CLOCK_STEP);
            assert!((0.0..=1.0).contains(&p));
        }
        assert!((shot_power_at(0.0) - 0.5).abs() < 1e-6);
        let peak = std::f32::consts::PI / 16.0;
        assert!((shot_power_at(peak) - 1.0).abs() < 1e-6);
    }
}

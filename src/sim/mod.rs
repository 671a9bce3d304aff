//! Billiards physics
//!
//! All table physics lives here:
//! - Discrete per-frame collision tests (no sweeping)
//! - Timed forces referencing bodies by index
//! - Clock advanced by a fixed step per frame
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod layout;
pub mod state;
pub mod table;
pub mod tick;

pub use collision::{Bumper, balls_touch, bumper_hit, contact_force, reflect_velocity};
pub use input::{Flow, HELP, Intent, apply_intent};
pub use layout::{cue_position, rack_position, rack_slot, starting_positions};
pub use state::{BallType, Body, BodyId, CUE, Simulation, TimedForce};
pub use table::Table;
pub use tick::tick;

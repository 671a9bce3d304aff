//! Ball appearance
//!
//! The simulation never draws anything. It asks a resolver once per ball
//! type for an opaque handle and hands that handle back to renderers.

use crate::error::SetupError;
use crate::sim::BallType;

/// Produces the visual handle stored on each body
pub trait VisualResolver {
    type Handle: Clone;

    /// Called once per ball type while the simulation is being built
    fn resolve(&mut self, ball: BallType) -> Result<Self::Handle, SetupError>;
}

/// Colour profile of a ball sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallAppearance {
    pub rgb: [u8; 3],
    /// White bands on both sides
    pub striped: bool,
}

/// Resolver yielding the classic pool colour set
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette;

impl Palette {
    pub fn appearance(ball: BallType) -> BallAppearance {
        use BallType::*;
        let rgb = match ball {
            Cue => [255, 255, 255],
            Black => [0, 0, 0],
            Yellow | YellowStripe => [255, 204, 0],
            Blue | BlueStripe => [0, 51, 153],
            Red | RedStripe => [255, 0, 0],
            Purple | PurpleStripe => [61, 0, 153],
            Orange | OrangeStripe => [255, 51, 0],
            Green | GreenStripe => [0, 77, 0],
            Maroon | MaroonStripe => [153, 0, 0],
        };
        BallAppearance {
            rgb,
            striped: ball.is_striped(),
        }
    }
}

impl VisualResolver for Palette {
    type Handle = BallAppearance;

    fn resolve(&mut self, ball: BallType) -> Result<BallAppearance, SetupError> {
        let appearance = Self::appearance(ball);
        log::debug!("Resolved {:?} -> {:?}", ball, appearance);
        Ok(appearance)
    }
}

/// Resolver for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVisuals;

impl VisualResolver for NoVisuals {
    type Handle = ();

    fn resolve(&mut self, _ball: BallType) -> Result<(), SetupError> {
        Ok(())
    }
}

//! Player intents
//!
//! Raw window/mouse/keyboard events are decoded elsewhere; the simulation
//! only sees these four intents.

use glam::Vec2;

use super::state::{CUE, Simulation, TimedForce};

/// Printed once at startup
pub const HELP: &str = "\
How to Play:
-----------------------------------------------------------------------
 - To launch the cue-ball, place the cursor over the intended
   direction, then left-click. The power of the shot is determined
   by the bar on the right-hand side of the screen.

 - Press \"R\" to reset the balls to their starting positions.

 - Press \"F\" to freeze the balls in their tracks!

 - Right-click or press \"Escape\" to exit.
";

/// A decoded player action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Strike the cue ball toward a table-space point
    Shoot { point: Vec2 },
    Reset,
    Freeze,
    Quit,
}

/// Whether the run loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl<H> Simulation<H> {
    /// Strike the cue ball toward `point`, scaled by the current shot power.
    ///
    /// # Panics
    /// If there are no bodies; a constructed simulation always has the cue.
    pub fn apply_shot(&mut self, point: Vec2) {
        let cue = self.bodies[CUE.0].pos;
        let force = (point - cue) * (self.settings.shot_power_multiplier * self.shot_power);
        self.forces.push(TimedForce::one_tick(CUE, force));
        log::debug!(
            "Shot toward {} at power {:.2}: force={}",
            point,
            self.shot_power,
            force
        );
    }
}

/// Apply one intent to the simulation
pub fn apply_intent<H: Clone>(sim: &mut Simulation<H>, intent: Intent) -> Flow {
    match intent {
        Intent::Shoot { point } => sim.apply_shot(point),
        Intent::Reset => sim.reset(),
        Intent::Freeze => sim.freeze(),
        Intent::Quit => {
            log::info!("Quit requested");
            return Flow::Quit;
        }
    }
    Flow::Continue
}

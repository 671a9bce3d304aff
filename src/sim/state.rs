//! Simulation state and core types
//!
//! Bodies live in a single ordered list that is rebuilt wholesale on reset.
//! Timed forces point at bodies by index into that list, never by reference.

use glam::Vec2;

use super::layout;
use crate::appearance::VisualResolver;
use crate::error::SetupError;
use crate::settings::Settings;

/// Identity of a ball on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BallType {
    Cue,
    Black,

    Yellow,
    Blue,
    Red,
    Purple,
    Orange,
    Green,
    Maroon,

    YellowStripe,
    BlueStripe,
    RedStripe,
    PurpleStripe,
    OrangeStripe,
    GreenStripe,
    MaroonStripe,
}

impl BallType {
    pub const COUNT: usize = 16;

    /// Every ball, in body-list order (Cue first)
    pub const ALL: [BallType; BallType::COUNT] = [
        BallType::Cue,
        BallType::Black,
        BallType::Yellow,
        BallType::Blue,
        BallType::Red,
        BallType::Purple,
        BallType::Orange,
        BallType::Green,
        BallType::Maroon,
        BallType::YellowStripe,
        BallType::BlueStripe,
        BallType::RedStripe,
        BallType::PurpleStripe,
        BallType::OrangeStripe,
        BallType::GreenStripe,
        BallType::MaroonStripe,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_striped(self) -> bool {
        matches!(
            self,
            BallType::YellowStripe
                | BallType::BlueStripe
                | BallType::RedStripe
                | BallType::PurpleStripe
                | BallType::OrangeStripe
                | BallType::GreenStripe
                | BallType::MaroonStripe
        )
    }
}

/// Index of a body in the simulation's body list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// The cue ball is always first in the body list
pub const CUE: BodyId = BodyId(0);

/// A ball on the table
#[derive(Debug, Clone, PartialEq)]
pub struct Body<H> {
    pub kind: BallType,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Appearance handle, shared with every other body of this kind
    pub visual: H,
}

impl<H> Body<H> {
    pub fn new(kind: BallType, pos: Vec2, visual: H) -> Self {
        Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            visual,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// A force applied to one body until its remaining time runs out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedForce {
    pub target: BodyId,
    pub force: Vec2,
    /// Time left; 0.0 means exactly one tick
    pub remaining: f32,
}

impl TimedForce {
    pub fn new(target: BodyId, force: Vec2, remaining: f32) -> Self {
        Self {
            target,
            force,
            remaining,
        }
    }

    /// A force that is integrated once and then expires
    pub fn one_tick(target: BodyId, force: Vec2) -> Self {
        Self::new(target, force, 0.0)
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct Simulation<H> {
    pub(crate) settings: Settings,
    /// Resolved appearance per ball type, indexed by `BallType::index`
    visuals: Vec<H>,
    /// Bodies (Cue at index 0)
    pub(crate) bodies: Vec<Body<H>>,
    /// Active timed forces
    pub(crate) forces: Vec<TimedForce>,
    /// Oscillating shot strength in [0, 1]
    pub(crate) shot_power: f32,
    /// Accumulated simulation clock
    pub(crate) clock: f32,
    /// Clock value at the end of the previous tick
    pub(crate) last_clock: f32,
    /// Ticks run so far
    pub(crate) ticks: u64,
}

impl<H: Clone> Simulation<H> {
    /// Resolve every ball's appearance and rack the table.
    ///
    /// Fails without producing an engine if the settings are unusable or
    /// any appearance cannot be created.
    pub fn new<R>(settings: Settings, resolver: &mut R) -> Result<Self, SetupError>
    where
        R: VisualResolver<Handle = H>,
    {
        settings.validate()?;

        let visuals = BallType::ALL
            .iter()
            .map(|&ball| resolver.resolve(ball))
            .collect::<Result<Vec<_>, _>>()?;

        let mut sim = Self {
            settings,
            visuals,
            bodies: Vec::with_capacity(BallType::COUNT),
            forces: Vec::new(),
            shot_power: 0.0,
            clock: 0.0,
            last_clock: 0.0,
            ticks: 0,
        };
        sim.create_bodies();

        log::info!("Simulation ready with {} balls", sim.bodies.len());
        Ok(sim)
    }

    /// Discard all bodies and forces and rebuild the starting rack
    pub fn reset(&mut self) {
        self.forces.clear();
        self.bodies.clear();
        self.create_bodies();
        log::info!("Table reset");
    }

    fn create_bodies(&mut self) {
        for (kind, pos) in layout::starting_positions(&self.settings.table) {
            let visual = self.visuals[kind.index()].clone();
            self.bodies.push(Body::new(kind, pos, visual));
        }
    }
}

impl<H> Simulation<H> {
    /// Stop every ball in place and drop all pending forces
    pub fn freeze(&mut self) {
        for body in &mut self.bodies {
            body.vel = Vec2::ZERO;
        }
        self.forces.clear();
        log::info!("Table frozen");
    }

    pub fn bodies(&self) -> &[Body<H>] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body<H>> {
        self.bodies.get(id.0)
    }

    /// The cue ball
    ///
    /// # Panics
    /// If the body list is empty, which construction never allows.
    pub fn cue(&self) -> &Body<H> {
        &self.bodies[CUE.0]
    }

    pub fn forces(&self) -> &[TimedForce] {
        &self.forces
    }

    /// Register a force to be integrated on the next tick
    pub fn add_force(&mut self, force: TimedForce) {
        debug_assert!(force.target.0 < self.bodies.len());
        self.forces.push(force);
    }

    pub fn shot_power(&self) -> f32 {
        self.shot_power
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// True when no ball is moving and no force is pending
    pub fn is_settled(&self) -> bool {
        self.forces.is_empty() && self.bodies.iter().all(Body::is_at_rest)
    }
}

#[cfg(test)]
impl Simulation<()> {
    /// Bare simulation holding exactly the given bodies, for physics tests
    pub(crate) fn with_bodies(bodies: Vec<Body<()>>) -> Self {
        Self {
            settings: Settings::default(),
            visuals: vec![(); BallType::COUNT],
            bodies,
            forces: Vec::new(),
            shot_power: 0.0,
            clock: 0.0,
            last_clock: 0.0,
            ticks: 0,
        }
    }
}

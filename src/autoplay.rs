//! Demo player
//!
//! Stands in for the mouse: waits for the table to come to rest, times the
//! power gauge, and fires at a random point on the felt. Seeded, so a run is
//! reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::session::IntentSource;
use crate::sim::{Intent, Simulation};

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    /// Shots left before quitting
    shots_left: u32,
    /// Shoot anyway after waiting this many frames for the table to settle
    patience: u32,
    /// Gauge level to wait for before shooting
    min_power: f32,
    waited: u32,
    done: bool,
}

impl AutoPlayer {
    pub fn new(seed: u64, shots: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            shots_left: shots,
            patience: 3000,
            min_power: 0.7,
            waited: 0,
            done: false,
        }
    }

    pub fn with_patience(mut self, frames: u32) -> Self {
        self.patience = frames;
        self
    }

    pub fn with_min_power(mut self, power: f32) -> Self {
        self.min_power = power.clamp(0.0, 1.0);
        self
    }

    pub fn shots_left(&self) -> u32 {
        self.shots_left
    }

    /// Random ball-center point on the felt
    fn pick_target<H>(&mut self, sim: &Simulation<H>) -> Vec2 {
        let table = &sim.settings().table;
        let r = table.ball_radius();
        Vec2::new(
            self.rng.random_range(table.felt_left + r..table.felt_right() - r),
            self.rng.random_range(table.felt_top + r..table.felt_bottom() - r),
        )
    }
}

impl<H> IntentSource<H> for AutoPlayer {
    fn drain(&mut self, sim: &Simulation<H>) -> Vec<Intent> {
        if self.done {
            return Vec::new();
        }

        let ready = sim.is_settled() || self.waited >= self.patience;
        if !ready || sim.shot_power() < self.min_power {
            self.waited = self.waited.saturating_add(1);
            return Vec::new();
        }

        if self.shots_left == 0 {
            self.done = true;
            return vec![Intent::Quit];
        }

        let point = self.pick_target(sim);
        self.shots_left -= 1;
        self.waited = 0;
        log::debug!("Autoplay shot toward {} ({} left)", point, self.shots_left);
        vec![Intent::Shoot { point }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::NoVisuals;
    use crate::session::{Renderer, Session};
    use crate::settings::Settings;
    use crate::sim::{apply_intent, tick};
    use std::time::Duration;

    fn record(seed: u64) -> Vec<Intent> {
        let settings = Settings::default();
        let mut sim = Simulation::new(settings.clone(), &mut NoVisuals).unwrap();
        let mut player = AutoPlayer::new(seed, 2).with_patience(50);
        let mut seen = Vec::new();
        for _ in 0..400 {
            for intent in player.drain(&sim) {
                seen.push(intent);
                apply_intent(&mut sim, intent);
            }
            tick(&mut sim, settings.clock_step);
        }
        seen
    }

    #[test]
    fn test_same_seed_same_shots() {
        let a = record(7);
        let b = record(7);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_targets_on_felt() {
        let table = Settings::default().table;
        for intent in record(42) {
            if let Intent::Shoot { point } = intent {
                let r = table.ball_radius();
                assert!(point.x >= table.felt_left + r && point.x < table.felt_right() - r);
                assert!(point.y >= table.felt_top + r && point.y < table.felt_bottom() - r);
            }
        }
    }

    #[test]
    fn test_waits_for_power() {
        let sim = Simulation::new(Settings::default(), &mut NoVisuals).unwrap();
        // Fresh simulation has zero shot power
        let mut player = AutoPlayer::new(1, 3);
        assert!(player.drain(&sim).is_empty());
        assert_eq!(player.shots_left(), 3);
    }

    struct Nop;

    impl<H> Renderer<H> for Nop {
        fn render(&mut self, _sim: &Simulation<H>) {}
    }

    #[test]
    fn test_session_ends_after_shots() {
        let settings = Settings::default();
        let mut sim = Simulation::new(settings.clone(), &mut NoVisuals).unwrap();
        let mut player = AutoPlayer::new(3, 2).with_patience(100).with_min_power(0.5);
        let session = Session::new(&settings)
            .with_frame_delay(Duration::ZERO)
            .with_max_frames(10_000);

        let frames = session.run(&mut sim, &mut player, &mut Nop);

        assert!(frames < 10_000);
        assert_eq!(player.shots_left(), 0);
    }
}

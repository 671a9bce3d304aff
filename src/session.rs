//! Frame-driven run loop
//!
//! drain intents → tick → render → short sleep, until a quit intent has
//! been seen. A frame that observed quit still ticks and renders.

use std::collections::VecDeque;
use std::time::Duration;

use crate::settings::Settings;
use crate::sim::{Flow, Intent, Simulation, apply_intent, tick};

/// Supplies the intents decoded since the previous frame
pub trait IntentSource<H> {
    fn drain(&mut self, sim: &Simulation<H>) -> Vec<Intent>;
}

/// Presents the current table; must not mutate it
pub trait Renderer<H> {
    fn render(&mut self, sim: &Simulation<H>);
}

/// Run loop configuration
#[derive(Debug, Clone)]
pub struct Session {
    clock_step: f32,
    frame_delay: Duration,
    /// Stop after this many frames even without a quit intent
    max_frames: Option<u64>,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            clock_step: settings.clock_step,
            frame_delay: Duration::from_millis(settings.frame_delay_ms),
            max_frames: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    /// Run until quit (or the frame cap); returns the number of frames run
    pub fn run<H, I, R>(&self, sim: &mut Simulation<H>, input: &mut I, renderer: &mut R) -> u64
    where
        H: Clone,
        I: IntentSource<H>,
        R: Renderer<H>,
    {
        let mut frames = 0;
        let mut running = true;

        while running {
            if self.max_frames.is_some_and(|max| frames >= max) {
                log::info!("Frame limit reached after {} frames", frames);
                break;
            }

            for intent in input.drain(sim) {
                if apply_intent(sim, intent) == Flow::Quit {
                    running = false;
                }
            }

            tick(sim, self.clock_step);
            renderer.render(sim);
            frames += 1;

            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        }

        log::info!("Session ended after {} frames", frames);
        frames
    }
}

/// Replays intents at fixed frame numbers
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    /// (frame, intent), sorted by frame
    queue: VecDeque<(u64, Intent)>,
    frame: u64,
}

impl Scripted {
    pub fn new(mut script: Vec<(u64, Intent)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        Self {
            queue: script.into(),
            frame: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<H> IntentSource<H> for Scripted {
    fn drain(&mut self, _sim: &Simulation<H>) -> Vec<Intent> {
        let mut due = Vec::new();
        while let Some(&(frame, intent)) = self.queue.front() {
            if frame > self.frame {
                break;
            }
            due.push(intent);
            self.queue.pop_front();
        }
        self.frame += 1;
        due
    }
}

/// Headless renderer that logs a short table summary
#[derive(Debug, Clone)]
pub struct LogRenderer {
    /// Log every n-th frame
    every: u64,
    frames: u64,
    was_settled: bool,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            was_settled: true,
        }
    }
}

impl<H> Renderer<H> for LogRenderer {
    fn render(&mut self, sim: &Simulation<H>) {
        self.frames += 1;

        let settled = sim.is_settled();
        if settled && !self.was_settled {
            log::info!("Table at rest after {} ticks", sim.ticks());
        }
        self.was_settled = settled;

        if self.frames.is_multiple_of(self.every) {
            let moving = sim.bodies().iter().filter(|b| !b.is_at_rest()).count();
            log::debug!(
                "frame {}: cue at {} moving={} forces={} power={:.2}",
                self.frames,
                sim.cue().pos,
                moving,
                sim.forces().len(),
                sim.shot_power()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::NoVisuals;
    use glam::Vec2;

    #[derive(Default)]
    struct CountingRenderer {
        frames: u64,
        cue_positions: Vec<Vec2>,
    }

    impl<H> Renderer<H> for CountingRenderer {
        fn render(&mut self, sim: &Simulation<H>) {
            self.frames += 1;
            self.cue_positions.push(sim.cue().pos);
        }
    }

    fn setup() -> (Simulation<()>, Session) {
        let settings = Settings::default();
        let sim = Simulation::new(settings.clone(), &mut NoVisuals).unwrap();
        let session = Session::new(&settings).with_frame_delay(Duration::ZERO);
        (sim, session)
    }

    #[test]
    fn test_quit_frame_still_completes() {
        let (mut sim, session) = setup();
        let mut input = Scripted::new(vec![(3, Intent::Quit)]);
        let mut renderer = CountingRenderer::default();

        let frames = session.run(&mut sim, &mut input, &mut renderer);

        // Frames 0..=3 run, the quit frame included
        assert_eq!(frames, 4);
        assert_eq!(renderer.frames, 4);
        assert_eq!(sim.ticks(), 4);
        assert!(input.is_empty());
    }

    #[test]
    fn test_frame_cap() {
        let (mut sim, session) = setup();
        let session = session.with_max_frames(10);
        let mut input = Scripted::default();
        let mut renderer = CountingRenderer::default();

        assert_eq!(session.run(&mut sim, &mut input, &mut renderer), 10);
        assert!((sim.clock() - 10.0 * sim.settings().clock_step).abs() < 1e-6);
    }

    #[test]
    fn test_intents_apply_before_tick() {
        let (mut sim, session) = setup();
        // Wait for a non-zero shot power, then shoot and freeze later
        let script = vec![
            (20, Intent::Shoot {
                point: Vec2::new(420.0, 300.0),
            }),
            (40, Intent::Freeze),
            (41, Intent::Quit),
        ];
        let mut input = Scripted::new(script);
        let mut renderer = CountingRenderer::default();

        session.run(&mut sim, &mut input, &mut renderer);

        let start = renderer.cue_positions[0];
        // Cue moves on the very frame the shot lands
        assert_eq!(renderer.cue_positions[19], start);
        assert!(renderer.cue_positions[20].x > start.x);
        // Frozen from frame 40 on
        assert_eq!(renderer.cue_positions[40], renderer.cue_positions[41]);
        assert!(sim.is_settled());
    }

    #[test]
    fn test_reset_mid_session() {
        let (mut sim, session) = setup();
        let start = sim.cue().pos;
        let script = vec![
            (5, Intent::Shoot {
                point: Vec2::new(600.0, 250.0),
            }),
            (60, Intent::Reset),
            (61, Intent::Quit),
        ];
        let mut input = Scripted::new(script);
        let mut renderer = CountingRenderer::default();

        session.run(&mut sim, &mut input, &mut renderer);

        assert_ne!(renderer.cue_positions[59], start);
        // Reset happens before frame 60's tick; a resting rack stays put
        assert_eq!(renderer.cue_positions[60], start);
        assert_eq!(sim.cue().pos, start);
    }
}

//! Platform glue: frame scheduling and event delivery
//!
//! The host calls [`Runner::frame`] once per display refresh with the elapsed
//! wall-clock time. Two clocks run off that:
//! - the simulation, one tick per refresh plus catch-up ticks for long frames
//! - the ball sprite animation, advanced by raw elapsed time
//!
//! They touch disjoint state, so neither waits on the other. The runner asks
//! to be scheduled again only while the session has not finished.

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameState, Outcome, tick};

/// Slack for float drift when counting whole ticks in the accumulator
const TICK_EPSILON: f32 = 1e-3;

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Continue,
    Stop,
}

/// Receives the single end-of-game notification
pub trait Lifecycle {
    fn game_over(&mut self, outcome: Outcome);
}

/// Fixed-timestep driver for one session
pub struct Runner {
    audio: AudioManager,
    accumulator: f32,
    frames: u64,
}

impl Runner {
    pub fn new(audio: AudioManager) -> Self {
        Self {
            audio,
            accumulator: 0.0,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one display frame: ticks, animation, then event delivery.
    ///
    /// Returns the number of ticks run alongside the scheduling decision.
    pub fn frame(
        &mut self,
        state: &mut GameState,
        dt: f32,
        lifecycle: &mut dyn Lifecycle,
    ) -> (u32, Schedule) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.frames += 1;

        let mut substeps = 0;
        if state.is_running() {
            self.accumulator += dt;
            // Every refresh gets its update; long frames catch up in whole ticks
            let due = (self.accumulator / SIM_DT + TICK_EPSILON).floor() as u32;
            let steps = due.clamp(1, MAX_SUBSTEPS);
            while substeps < steps {
                tick(state);
                substeps += 1;
                if !state.is_running() {
                    break;
                }
            }
            self.accumulator = (self.accumulator - substeps as f32 * SIM_DT).max(0.0);
            if due > MAX_SUBSTEPS || !state.is_running() {
                self.accumulator = 0.0;
            }
        }

        state.animate(dt);

        for event in state.drain_events() {
            match event {
                GameEvent::Bump => self.audio.play(SoundEffect::Bump),
                GameEvent::Ended { outcome } => {
                    log::info!("{}", outcome.message());
                    lifecycle.game_over(outcome);
                }
                GameEvent::BlockDestroyed { .. } | GameEvent::Launched => {}
            }
        }

        let schedule = if state.phase.is_terminal() {
            Schedule::Stop
        } else {
            Schedule::Continue
        };
        (substeps, schedule)
    }
}

//! Frame driver
//!
//! Bridges a host's variable-rate frame callback to the fixed 60 Hz tick.
//! Commands queued between frames are applied once, at the start of the
//! next frame, before any tick runs.

use super::command::{Command, CommandQueue};
use super::snapshot::Snapshot;
use super::state::SessionState;
use super::tick::{TickEvent, tick};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::settings::Settings;

/// What one host frame produced
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Simulation ticks run this frame
    pub ticks: u32,
    /// Restarts triggered by queued commands
    pub restarts: usize,
    pub events: Vec<TickEvent>,
}

/// Owns the session and its command queue; the host only pushes commands and
/// calls `frame`.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    state: SessionState,
    commands: CommandQueue,
    accumulator: f32,
}

impl FrameDriver {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Session initialized with seed: {}", seed);
        Self {
            state: SessionState::new(settings, seed),
            commands: CommandQueue::new(),
            accumulator: 0.0,
        }
    }

    /// Queue a command for the next frame
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Advance by `dt` seconds of host time
    pub fn frame(&mut self, dt: f32) -> FrameReport {
        let mut report = FrameReport {
            restarts: self.commands.drain_into(&mut self.state),
            ..Default::default()
        };
        if report.restarts > 0 {
            self.accumulator = 0.0;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        while self.accumulator >= SIM_DT && report.ticks < MAX_SUBSTEPS {
            report.events.extend(tick(&mut self.state));
            self.accumulator -= SIM_DT;
            report.ticks += 1;
        }

        if self.accumulator >= SIM_DT {
            log::warn!(
                "Dropping {:.1} ms of simulation backlog",
                self.accumulator * 1000.0
            );
            self.accumulator = 0.0;
        }

        report
    }

    /// Run exactly one tick, bypassing the clock (headless hosts and tests)
    pub fn step(&mut self) -> FrameReport {
        let restarts = self.commands.drain_into(&mut self.state);
        FrameReport {
            ticks: 1,
            restarts,
            events: tick(&mut self.state),
        }
    }
}

//! Player commands
//!
//! Host input events are queued as `Command`s and drained once per frame, so
//! input arrival time never interleaves with a simulation step.

use std::collections::VecDeque;

use super::state::SessionState;

/// A single player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Overwrite the sprite's velocity with the impulse constant
    Impulse,
    /// Start a new session, only while the game is over
    RestartIfOver,
}

/// Apply one command. Returns true if a restart happened.
pub fn apply_command(state: &mut SessionState, command: Command) -> bool {
    match command {
        Command::Impulse => {
            // Accepted in every phase; frozen physics makes it inert after game over
            state.sprite.vel = state.settings.impulse;
            false
        }
        Command::RestartIfOver => {
            if state.is_game_over() {
                state.reset();
                log::info!("Session restarted");
                true
            } else {
                false
            }
        }
    }
}

/// FIFO of commands waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every queued command in arrival order. Returns the number of restarts.
    pub fn drain_into(&mut self, state: &mut SessionState) -> usize {
        self.pending
            .drain(..)
            .filter(|&command| apply_command(state, command))
            .count()
    }
}

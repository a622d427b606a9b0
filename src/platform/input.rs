//! Host input translation

use crate::sim::Command;

/// Raw input as delivered by the host, before any game interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// `KeyboardEvent.code` of a key press (e.g. "Space", "Enter")
    KeyDown(String),
    TouchStart,
    TouchEnd,
    /// Primary mouse button pressed on the canvas
    MouseDown,
}

/// Map a host event to the command it triggers, if any
pub fn command_for(event: &HostEvent) -> Option<Command> {
    match event {
        HostEvent::KeyDown(code) => match code.as_str() {
            "Space" | "ArrowUp" | "KeyW" => Some(Command::Impulse),
            "Enter" | "NumpadEnter" => Some(Command::RestartIfOver),
            _ => None,
        },
        HostEvent::TouchStart | HostEvent::MouseDown => Some(Command::Impulse),
        HostEvent::TouchEnd => Some(Command::RestartIfOver),
    }
}

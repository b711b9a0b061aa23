//! Input sources for the headless host.

use glam::Vec2;

use swarmfall_core::types::unit;

/// One frame of input: a movement axis and the raw pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub movement: Vec2,
    pub pointer: Vec2,
}

pub trait InputSource {
    /// Read input for the frame at `elapsed_secs` of wall time.
    fn poll(&mut self, elapsed_secs: f64) -> InputFrame;
}

/// No input at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl InputSource for Idle {
    fn poll(&mut self, _elapsed_secs: f64) -> InputFrame {
        InputFrame::default()
    }
}

/// Walks in a slow circle, steering by `turn_rate` radians per second.
#[derive(Debug, Clone, Copy)]
pub struct CircleStrafe {
    pub turn_rate: f32,
    pub pointer: Vec2,
}

impl Default for CircleStrafe {
    fn default() -> Self {
        Self {
            turn_rate: 0.5,
            pointer: Vec2::ZERO,
        }
    }
}

impl InputSource for CircleStrafe {
    fn poll(&mut self, elapsed_secs: f64) -> InputFrame {
        InputFrame {
            movement: unit(elapsed_secs as f32 * self.turn_rate),
            pointer: self.pointer,
        }
    }
}

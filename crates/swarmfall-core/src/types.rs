//! Fundamental geometric and simulation types.
//!
//! Positions and velocities are `glam::Vec2` in world units, y pointing down
//! (screen convention). Angles are radians measured from +x toward +y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose top-left corner is `origin`.
    pub fn from_origin(origin: Vec2, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// Square centred on `center` with half-extent `half`.
    pub fn centered(center: Vec2, half: f32) -> Self {
        Self::new(center.x - half, center.y - half, half * 2.0, half * 2.0)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// 8-bit RGB color used by render views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const BACKGROUND: Color = Color::rgb(0x22, 0x22, 0x22);
    pub const PLAYER: Color = Color::rgb(0xeb, 0x40, 0x34);
    pub const ENEMY: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const BOSS: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const PROJECTILE: Color = Color::rgb(0xff, 0xff, 0x00);
    pub const XP: Color = Color::rgb(0x00, 0xcc, 0xff);
    pub const GOLD: Color = Color::rgb(0xff, 0xcc, 0x00);
    pub const HEALTH_BAR_BACK: Color = Color::rgb(0xcc, 0x00, 0x00);
    pub const HEALTH_BAR_FILL: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const HUD_BACK: Color = Color::rgb(0x44, 0x44, 0x44);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Converts host frame timestamps into tick deltas.
///
/// Deltas are clamped to `max_delta` so a stalled host never produces a
/// runaway catch-up tick. After [`FrameClock::reset`] the next frame yields
/// a zero delta: pauses leave no backlog.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_secs: Option<f64>,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_secs: None,
            max_delta,
        }
    }

    /// Seconds since the previous call, clamped to `[0, max_delta]`.
    pub fn delta(&mut self, now_secs: f64) -> f32 {
        let dt = match self.last_secs {
            Some(last) => (now_secs - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_secs = Some(now_secs);
        dt.min(self.max_delta)
    }

    /// Drop the baseline; the next frame starts a fresh delta.
    pub fn reset(&mut self) {
        self.last_secs = None;
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

/// Unit vector for an angle in radians.
pub fn unit(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of the vector from `from` to `to` in radians.
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

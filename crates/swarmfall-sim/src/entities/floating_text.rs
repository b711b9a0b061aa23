//! Short-lived combat text.

use glam::Vec2;

use swarmfall_core::constants::*;
use swarmfall_core::state::FloatingTextView;
use swarmfall_core::types::Color;

use crate::pool::Poolable;

#[derive(Debug, Clone)]
pub struct FloatingText {
    pub position: Vec2,
    pub text: String,
    pub color: Color,
    /// Seconds since spawn.
    pub life: f32,
    pub marked_for_deletion: bool,
}

impl Default for FloatingText {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            text: String::new(),
            color: Color::WHITE,
            life: 0.0,
            marked_for_deletion: false,
        }
    }
}

impl FloatingText {
    pub fn reset(&mut self, position: Vec2, text: &str, color: Color) {
        self.position = position;
        self.text.clear();
        self.text.push_str(text);
        self.color = color;
        self.life = 0.0;
        self.marked_for_deletion = false;
    }

    pub fn update(&mut self, dt: f32) {
        self.life += dt;
        if self.life > FLOATING_TEXT_DURATION {
            self.marked_for_deletion = true;
            return;
        }
        self.position.y -= FLOATING_TEXT_RISE_SPEED * dt;
    }

    /// Opaque for the first half of the lifetime, then a linear fade.
    pub fn alpha(&self) -> f32 {
        let half = FLOATING_TEXT_DURATION * 0.5;
        if self.life <= half {
            1.0
        } else {
            (1.0 - (self.life - half) / half).max(0.0)
        }
    }

    /// Pops from 1.0 to the full scale over the first moments of life.
    pub fn scale(&self) -> f32 {
        if self.life < FLOATING_TEXT_POP_TIME {
            1.0 + (self.life / FLOATING_TEXT_POP_TIME) * (FLOATING_TEXT_POP_SCALE - 1.0)
        } else {
            FLOATING_TEXT_POP_SCALE
        }
    }

    pub fn view(&self) -> FloatingTextView {
        FloatingTextView {
            position: self.position,
            text: self.text.clone(),
            color: self.color,
            alpha: self.alpha(),
            scale: self.scale(),
        }
    }
}

impl Poolable for FloatingText {
    fn on_release(&mut self) {
        self.text.clear();
        self.marked_for_deletion = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> FloatingText {
        let mut t = FloatingText::default();
        t.reset(Vec2::new(0.0, 100.0), "15", Color::WHITE);
        t
    }

    #[test]
    fn test_rises_and_expires() {
        let mut t = text();
        t.update(0.1);
        assert!((t.position.y - 95.0).abs() < 1e-4);
        for _ in 0..6 {
            t.update(0.1);
        }
        assert!(!t.marked_for_deletion);
        t.update(0.2);
        assert!(t.marked_for_deletion);
    }

    #[test]
    fn test_alpha_fades_in_second_half() {
        let mut t = text();
        t.life = 0.3;
        assert_eq!(t.alpha(), 1.0);
        t.life = 0.6;
        assert!((t.alpha() - 0.5).abs() < 1e-5);
        t.life = 0.8;
        assert!(t.alpha().abs() < 1e-5);
    }

    #[test]
    fn test_scale_pops() {
        let mut t = text();
        assert_eq!(t.scale(), 1.0);
        t.life = 0.05;
        assert!((t.scale() - 1.25).abs() < 1e-5);
        t.life = 0.5;
        assert_eq!(t.scale(), FLOATING_TEXT_POP_SCALE);
    }
}

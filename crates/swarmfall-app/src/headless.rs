//! A canvas that draws nothing and counts what it was asked to draw.

use glam::Vec2;

use swarmfall_core::types::{Color, Rect};
use swarmfall_sim::render::{Canvas, SpriteSheet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub rects: u64,
    pub paths: u64,
    pub blits: u64,
    pub texts: u64,
}

#[derive(Debug, Clone, Default)]
pub struct StatsCanvas {
    pub stats: DrawStats,
}

impl Canvas for StatsCanvas {
    fn set_origin(&mut self, _origin: Vec2) {}

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.stats.rects += 1;
    }

    fn fill_path(&mut self, _points: &[Vec2], _color: Color) {
        self.stats.paths += 1;
    }

    fn blit(&mut self, _sheet: &SpriteSheet, _frame: Rect, _dest: Rect, _flip_x: bool) {
        self.stats.blits += 1;
    }

    fn draw_text(&mut self, _text: &str, _at: Vec2, _size: f32, _color: Color, _alpha: f32) {
        self.stats.texts += 1;
    }
}

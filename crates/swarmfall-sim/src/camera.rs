//! Smoothed follow camera.
//!
//! The camera position is the top-left corner of the visible area. Each tick
//! it covers a fixed fraction of the distance to its destination, regardless
//! of the tick delta.

use glam::Vec2;

use swarmfall_core::constants::CAMERA_SMOOTHING;
use swarmfall_core::state::CameraView;
use swarmfall_core::types::Rect;

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec2,
    pub view_width: f32,
    pub view_height: f32,
    pub smoothing: f32,
}

impl Camera {
    pub fn new(view_width: f32, view_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            view_width,
            view_height,
            smoothing: CAMERA_SMOOTHING,
        }
    }

    fn half_view(&self) -> Vec2 {
        Vec2::new(self.view_width, self.view_height) * 0.5
    }

    /// Step toward centring `target`.
    pub fn update(&mut self, target: Vec2) {
        let destination = target - self.half_view();
        self.position += (destination - self.position) * self.smoothing;
    }

    /// Centre on `target` immediately.
    pub fn snap_to(&mut self, target: Vec2) {
        self.position = target - self.half_view();
    }

    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin(self.position, self.view_width, self.view_height)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.position
    }

    /// Pixel-aligned translation for drawing.
    pub fn render_offset(&self) -> Vec2 {
        self.position.floor()
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            view_width: self.view_width,
            view_height: self.view_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_geometrically() {
        let mut cam = Camera::new(800.0, 600.0);
        let target = Vec2::new(1000.0, -500.0);
        let destination = target - Vec2::new(400.0, 300.0);
        let start = destination.distance(cam.position);
        // 0.9^n * start < 1  =>  n > ln(start) / -ln(0.9)
        let bound = (start.ln() / -(0.9f32).ln()).ceil() as usize + 1;
        let mut ticks = 0;
        while cam.position.distance(destination) >= 1.0 {
            let before = cam.position.distance(destination);
            cam.update(target);
            let after = cam.position.distance(destination);
            assert!(after <= before * 0.9 + 1e-3);
            ticks += 1;
            assert!(ticks <= bound, "camera failed to converge in {bound} ticks");
        }
    }

    #[test]
    fn test_screen_to_world_and_offset() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.position = Vec2::new(10.5, -3.25);
        assert_eq!(cam.screen_to_world(Vec2::new(5.0, 5.0)), Vec2::new(15.5, 1.75));
        assert_eq!(cam.render_offset(), Vec2::new(10.0, -4.0));
    }

    #[test]
    fn test_snap_centres_target() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.snap_to(Vec2::new(50.0, 50.0));
        assert_eq!(cam.visible_rect().center(), Vec2::new(50.0, 50.0));
    }
}

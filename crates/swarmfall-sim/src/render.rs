//! Rendering seam.
//!
//! The simulation never draws directly. [`draw_frame`] walks a snapshot and
//! issues primitive calls on a host-provided [`Canvas`], back to front:
//! background, loot, player, enemies, projectiles, effects, HUD.

use std::collections::BTreeMap;
use std::f32::consts::TAU;
use std::sync::Arc;

use glam::Vec2;

use swarmfall_core::state::{EnemyView, GameStateSnapshot};
use swarmfall_core::types::{Color, Rect};
use swarmfall_core::enums::PickupKind;

/// Sprite key for the player sheet.
pub const PLAYER_SHEET: &str = "player";

/// Primitive 2D drawing surface.
pub trait Canvas {
    /// World point drawn at the surface's top-left corner. `Vec2::ZERO`
    /// draws in screen space.
    fn set_origin(&mut self, origin: Vec2);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_path(&mut self, points: &[Vec2], color: Color);
    /// Copy `frame` of `sheet` into `dest`, mirrored horizontally when `flip_x`.
    fn blit(&mut self, sheet: &SpriteSheet, frame: Rect, dest: Rect, flip_x: bool);
    fn draw_text(&mut self, text: &str, at: Vec2, size: f32, color: Color, alpha: f32);
}

/// A decoded sprite sheet laid out as a grid of equal frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub name: String,
    pub frame_width: f32,
    pub frame_height: f32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheet {
    /// Source rectangle of a frame. Columns wrap.
    pub fn frame(&self, column: u32, row: u32) -> Rect {
        let column = if self.columns == 0 { 0 } else { column % self.columns };
        Rect::new(
            column as f32 * self.frame_width,
            row.min(self.rows.saturating_sub(1)) as f32 * self.frame_height,
            self.frame_width,
            self.frame_height,
        )
    }
}

/// Sprite sheets that have finished loading.
///
/// Loading happens off the tick thread; the host publishes a new book by
/// swapping an `Arc<SpriteBook>`. A sheet that is not in the book yet draws
/// as a primitive shape instead.
#[derive(Debug, Clone, Default)]
pub struct SpriteBook {
    sheets: BTreeMap<String, Arc<SpriteSheet>>,
}

impl SpriteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this book with `sheet` added.
    pub fn with_sheet(&self, sheet: SpriteSheet) -> Self {
        let mut next = self.clone();
        next.sheets.insert(sheet.name.clone(), Arc::new(sheet));
        next
    }

    pub fn get(&self, name: &str) -> Option<&SpriteSheet> {
        self.sheets.get(name).map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Draw one complete frame.
pub fn draw_frame(canvas: &mut dyn Canvas, snapshot: &GameStateSnapshot, sprites: &SpriteBook) {
    let camera = &snapshot.camera;
    let origin = camera.position.floor();
    canvas.set_origin(origin);

    // Background
    canvas.fill_rect(
        Rect::from_origin(origin, camera.view_width, camera.view_height),
        Color::BACKGROUND,
    );

    // Loot
    for pickup in &snapshot.pickups {
        let color = match pickup.kind {
            PickupKind::Xp => Color::XP,
            PickupKind::Gold | PickupKind::Health => Color::GOLD,
        };
        canvas.fill_path(&diamond(pickup.position, swarmfall_core::constants::PICKUP_SIZE), color);
    }

    // Player
    let player = &snapshot.player;
    let size = swarmfall_core::constants::PLAYER_SIZE;
    let dest = Rect::centered(player.position, size * 0.5);
    match sprites.get(PLAYER_SHEET) {
        Some(sheet) => canvas.blit(
            sheet,
            sheet.frame(player.anim_frame, player.anim.row()),
            dest,
            player.facing_left,
        ),
        None => canvas.fill_rect(dest, Color::PLAYER),
    }

    // Enemies
    for enemy in &snapshot.enemies {
        draw_enemy(canvas, enemy, sprites);
    }

    // Projectiles
    for projectile in &snapshot.projectiles {
        canvas.fill_path(&circle(projectile.position, projectile.radius, 8), Color::PROJECTILE);
    }

    // Effects
    for text in &snapshot.texts {
        canvas.draw_text(&text.text, text.position, 20.0 * text.scale, text.color, text.alpha);
    }

    // HUD
    canvas.set_origin(Vec2::ZERO);
    draw_hud(canvas, snapshot);
}

fn draw_enemy(canvas: &mut dyn Canvas, enemy: &EnemyView, sprites: &SpriteBook) {
    let dest = Rect::centered(enemy.position, enemy.size * 0.5);
    let facing_left = enemy.heading.cos() < 0.0;
    match sprites.get(enemy.kind.name()) {
        Some(sheet) => canvas.blit(sheet, sheet.frame(enemy.anim_frame, 0), dest, facing_left),
        None => {
            let color = if enemy.kind.is_boss() {
                Color::BOSS
            } else {
                Color::ENEMY
            };
            canvas.fill_rect(dest, color);
        }
    }
    if enemy.kind.is_boss() {
        let bar = Rect::new(enemy.position.x - 30.0, enemy.position.y - 45.0, 60.0, 6.0);
        canvas.fill_rect(bar, Color::HEALTH_BAR_BACK);
        canvas.fill_rect(
            Rect::new(bar.x, bar.y, bar.width * enemy.hp_ratio(), bar.height),
            Color::HEALTH_BAR_FILL,
        );
    }
}

fn draw_hud(canvas: &mut dyn Canvas, snapshot: &GameStateSnapshot) {
    let player = &snapshot.player;
    let width = snapshot.camera.view_width;

    let health = Rect::new(10.0, 10.0, 200.0, 12.0);
    canvas.fill_rect(health, Color::HEALTH_BAR_BACK);
    let fill = if player.max_health > 0.0 {
        (player.health / player.max_health).clamp(0.0, 1.0)
    } else {
        0.0
    };
    canvas.fill_rect(
        Rect::new(health.x, health.y, health.width * fill, health.height),
        Color::HEALTH_BAR_FILL,
    );

    let xp = Rect::new(0.0, 0.0, width, 4.0);
    canvas.fill_rect(xp, Color::HUD_BACK);
    if player.next_level_xp > 0 {
        let fraction = (player.xp as f32 / player.next_level_xp as f32).min(1.0);
        canvas.fill_rect(Rect::new(0.0, 0.0, width * fraction, 4.0), Color::XP);
    }

    let status = format!(
        "Score: {}  Lv {}  {:02}:{:02}",
        snapshot.score.score,
        player.level,
        (snapshot.wave.elapsed_secs / 60.0) as u32,
        (snapshot.wave.elapsed_secs % 60.0) as u32,
    );
    canvas.draw_text(&status, Vec2::new(10.0, 40.0), 18.0, Color::WHITE, 1.0);
}

fn diamond(center: Vec2, size: f32) -> [Vec2; 4] {
    [
        center + Vec2::new(0.0, -size),
        center + Vec2::new(size, 0.0),
        center + Vec2::new(0.0, size),
        center + Vec2::new(-size, 0.0),
    ]
}

fn circle(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarmfall_core::enums::EnemyKind;
    use swarmfall_core::state::{CameraView, FloatingTextView, PickupView, ProjectileView};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Origin(Vec2),
        Rect(Color),
        Path(Color),
        Blit(String),
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn set_origin(&mut self, origin: Vec2) {
            self.ops.push(Op::Origin(origin));
        }
        fn fill_rect(&mut self, _rect: Rect, color: Color) {
            self.ops.push(Op::Rect(color));
        }
        fn fill_path(&mut self, _points: &[Vec2], color: Color) {
            self.ops.push(Op::Path(color));
        }
        fn blit(&mut self, sheet: &SpriteSheet, _frame: Rect, _dest: Rect, _flip_x: bool) {
            self.ops.push(Op::Blit(sheet.name.clone()));
        }
        fn draw_text(&mut self, text: &str, _at: Vec2, _size: f32, _color: Color, _alpha: f32) {
            self.ops.push(Op::Text(text.to_string()));
        }
    }

    fn snapshot() -> GameStateSnapshot {
        GameStateSnapshot {
            camera: CameraView {
                position: Vec2::new(10.6, 20.2),
                view_width: 800.0,
                view_height: 600.0,
            },
            pickups: vec![PickupView::default()],
            enemies: vec![EnemyView {
                kind: EnemyKind::MonsterRed,
                size: 16.0,
                ..Default::default()
            }],
            projectiles: vec![ProjectileView::default()],
            texts: vec![FloatingTextView {
                text: "15".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn sheet(name: &str) -> SpriteSheet {
        SpriteSheet {
            name: name.into(),
            frame_width: 32.0,
            frame_height: 32.0,
            columns: 6,
            rows: 4,
        }
    }

    #[test]
    fn test_draw_order_back_to_front() {
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &snapshot(), &SpriteBook::new());
        let ops = &canvas.ops;
        assert_eq!(ops[0], Op::Origin(Vec2::new(10.0, 20.0)));
        assert_eq!(ops[1], Op::Rect(Color::BACKGROUND));
        assert_eq!(ops[2], Op::Path(Color::XP));
        assert_eq!(ops[3], Op::Rect(Color::PLAYER));
        assert_eq!(ops[4], Op::Rect(Color::ENEMY));
        assert_eq!(ops[5], Op::Path(Color::PROJECTILE));
        assert_eq!(ops[6], Op::Text("15".into()));
        assert_eq!(ops[7], Op::Origin(Vec2::ZERO));
        assert!(matches!(ops.last(), Some(Op::Text(s)) if s.starts_with("Score")));
    }

    #[test]
    fn test_loaded_sheets_replace_fallback_shapes() {
        let book = SpriteBook::new()
            .with_sheet(sheet(PLAYER_SHEET))
            .with_sheet(sheet("monster_red"));
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &snapshot(), &book);
        assert_eq!(canvas.ops[3], Op::Blit(PLAYER_SHEET.into()));
        assert_eq!(canvas.ops[4], Op::Blit("monster_red".into()));
    }

    #[test]
    fn test_boss_gets_health_bar() {
        let mut snap = snapshot();
        snap.enemies = vec![EnemyView {
            kind: EnemyKind::BossDemon,
            size: 64.0,
            hp: 10.0,
            max_hp: 20.0,
            ..Default::default()
        }];
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &snap, &SpriteBook::new());
        assert_eq!(canvas.ops[4], Op::Rect(Color::BOSS));
        assert_eq!(canvas.ops[5], Op::Rect(Color::HEALTH_BAR_BACK));
        assert_eq!(canvas.ops[6], Op::Rect(Color::HEALTH_BAR_FILL));
    }

    #[test]
    fn test_sheet_frame_wraps_columns() {
        let s = sheet("x");
        assert_eq!(s.frame(7, 1), Rect::new(32.0, 32.0, 32.0, 32.0));
        assert_eq!(s.frame(0, 9).y, 96.0);
    }

    #[test]
    fn test_publishing_keeps_old_book_intact() {
        let old = Arc::new(SpriteBook::new());
        let new = Arc::new(old.with_sheet(sheet(PLAYER_SHEET)));
        assert!(old.is_empty());
        assert_eq!(new.len(), 1);
    }
}

//! The player character: movement, stats, leveling and animation state.

use glam::Vec2;

use swarmfall_core::constants::*;
use swarmfall_core::enums::AnimState;
use swarmfall_core::state::PlayerView;

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    /// Units per tick, from the last update.
    pub velocity: Vec2,
    /// Latest movement axis from input.
    input: Vec2,
    pub size: f32,
    pub health: f32,
    pub max_health: f32,
    pub move_speed: f32,
    pub pickup_radius: f32,
    pub xp: u32,
    pub level: u32,
    pub next_level_xp: u32,
    /// Seconds of attack pose left. Set by the driver when a weapon fires.
    attack_timer: f32,
    anim_state: AnimState,
    anim_timer: f32,
    anim_frame: u32,
    facing_left: bool,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            input: Vec2::ZERO,
            size: PLAYER_SIZE,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            move_speed: PLAYER_MOVE_SPEED,
            pickup_radius: PLAYER_PICKUP_RADIUS,
            xp: 0,
            level: 1,
            next_level_xp: PLAYER_FIRST_LEVEL_XP,
            attack_timer: 0.0,
            anim_state: AnimState::Idle,
            anim_timer: 0.0,
            anim_frame: 0,
            facing_left: false,
        }
    }

    pub fn set_input(&mut self, axis: Vec2) {
        self.input = if axis.is_finite() { axis } else { Vec2::ZERO };
    }

    /// Move one tick along the input axis and advance the animation clock.
    pub fn update(&mut self, dt: f32) {
        // Diagonals come in as length sqrt(2); cap to unit length.
        let axis = self.input.clamp_length_max(1.0);
        self.velocity = axis * self.move_speed;
        self.position += self.velocity;

        if self.velocity.x < 0.0 {
            self.facing_left = true;
        } else if self.velocity.x > 0.0 {
            self.facing_left = false;
        }

        self.attack_timer = (self.attack_timer - dt).max(0.0);

        let state = self.anim_state();
        if state != self.anim_state {
            self.anim_state = state;
            self.anim_frame = 0;
            self.anim_timer = 0.0;
        }
        self.anim_timer += dt;
        while self.anim_timer >= ANIM_FRAME_SECS {
            self.anim_timer -= ANIM_FRAME_SECS;
            self.anim_frame = (self.anim_frame + 1) % state.frame_count();
        }
    }

    /// Hold the attack pose for the standard duration.
    pub fn trigger_attack(&mut self) {
        self.attack_timer = PLAYER_ATTACK_DURATION;
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Derived from the movement flag and the attack timer only.
    pub fn anim_state(&self) -> AnimState {
        match (self.is_moving(), self.attack_timer > 0.0) {
            (false, false) => AnimState::Idle,
            (true, false) => AnimState::Walk,
            (false, true) => AnimState::Throw,
            (true, true) => AnimState::WalkAttack,
        }
    }

    /// Add experience. Returns the new level when this gain crossed the threshold.
    pub fn gain_xp(&mut self, amount: u32) -> Option<u32> {
        self.xp = self.xp.saturating_add(amount);
        if self.xp >= self.next_level_xp {
            self.level_up();
            return Some(self.level);
        }
        None
    }

    /// Spend the threshold, grow it and fully heal. Remainder XP carries over.
    pub fn level_up(&mut self) {
        self.xp -= self.next_level_xp.min(self.xp);
        self.level += 1;
        self.next_level_xp = (self.next_level_xp as f32 * LEVEL_XP_GROWTH).floor() as u32;
        self.health = self.max_health;
    }

    /// Returns `true` when this hit leaves the player at zero health.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health = (self.health - amount.max(0.0)).max(0.0);
        self.health <= 0.0
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount.max(0.0)).min(self.max_health);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            velocity: self.velocity,
            health: self.health,
            max_health: self.max_health,
            move_speed: self.move_speed,
            pickup_radius: self.pickup_radius,
            xp: self.xp,
            next_level_xp: self.next_level_xp,
            level: self.level,
            anim: self.anim_state,
            anim_frame: self.anim_frame,
            facing_left: self.facing_left,
        }
    }
}

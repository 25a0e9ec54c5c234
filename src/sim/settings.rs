//! Game tunables
//!
//! Static values hold for the whole process; dynamic values reset to their
//! base at every round start and only scale upward within a round.

use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Settings {
    // Screen
    pub screen_width: i32,
    pub screen_height: i32,

    // Bullets
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullets_allowed: usize,

    // Fleet
    pub fleet_drop_speed: f32,

    // Ship
    pub ship_limit: u32,

    // Scaling applied on every full fleet clear
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Dynamic values, reset each round
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// +1 marches right, -1 marches left
    pub fleet_direction: i32,
    pub alien_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullets_allowed: BULLETS_ALLOWED,
            fleet_drop_speed: FLEET_DROP_SPEED,
            ship_limit: SHIP_LIMIT,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1,
            alien_points: 0,
        };
        settings.reset_dynamic();
        settings
    }
}

impl Settings {
    /// Restore every dynamic value to its round-start base.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = 1;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Scale speeds and the kill value. Called once per full fleet clear;
    /// growth is unbounded across levels.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}

//! Session state and entity models
//!
//! Everything the session owns lives here: tunables, round stats, the ship,
//! the projectile and fleet collections, and the play/pause bookkeeping. The
//! session owns all of it exclusively; entities never reference each other.

use glam::Vec2;

use super::fleet;
use super::rect::Rect;
use super::settings::Settings;
use crate::consts::*;

/// Sprite footprints supplied by the asset layer. The simulation only needs
/// bounding geometry; pixel content never enters the core.
#[derive(Debug, Clone, Copy)]
pub struct SpriteMetrics {
    pub ship: (i32, i32),
    pub alien: (i32, i32),
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            ship: (SHIP_WIDTH, SHIP_HEIGHT),
            alien: (ALIEN_WIDTH, ALIEN_HEIGHT),
        }
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    /// Sub-pixel position; only x ever moves
    pub pos: Vec2,
    pub size: (i32, i32),
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings, metrics: &SpriteMetrics) -> Self {
        let mut ship = Self {
            pos: Vec2::ZERO,
            size: metrics.ship,
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    /// Grid-space footprint, derived from the float position by truncation
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, self.size.0, self.size.1)
    }

    /// Horizontally centered, bottom-aligned
    pub fn center(&mut self, settings: &Settings) {
        self.pos.x = ((settings.screen_width - self.size.0) / 2) as f32;
        self.pos.y = (settings.screen_height - self.size.1) as f32;
    }

    /// Apply the movement flags. The two checks are independent: with both
    /// flags set, each direction is evaluated against its own edge clamp.
    pub fn update(&mut self, settings: &Settings) {
        let rect = self.rect();
        if self.moving_right && rect.right() < settings.screen_width {
            self.pos.x += settings.ship_speed;
        }
        if self.moving_left && rect.left() > 0 {
            self.pos.x -= settings.ship_speed;
        }
    }
}

/// A projectile, spawned at the ship's top center
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: (i32, i32),
}

impl Bullet {
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let (mid_x, top_y) = ship.rect().midtop();
        Self {
            pos: Vec2::new((mid_x - settings.bullet_width / 2) as f32, top_y as f32),
            size: (settings.bullet_width, settings.bullet_height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, self.size.0, self.size.1)
    }

    /// Move up the screen
    pub fn update(&mut self, settings: &Settings) {
        self.pos.y -= settings.bullet_speed;
    }

    /// Fully above the top edge; culled once per tick after the update pass
    pub fn off_screen(&self) -> bool {
        self.rect().bottom() <= 0
    }
}

/// One enemy in the fleet
#[derive(Debug, Clone)]
pub struct Alien {
    pub pos: Vec2,
    pub size: (i32, i32),
}

impl Alien {
    pub fn new(x: f32, y: f32, size: (i32, i32)) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, self.size.0, self.size.1)
    }

    /// Touching either horizontal screen edge
    pub fn at_edge(&self, settings: &Settings) -> bool {
        let rect = self.rect();
        rect.right() >= settings.screen_width || rect.left() <= 0
    }

    /// Horizontal march in the current fleet direction
    pub fn update(&mut self, settings: &Settings) {
        self.pos.x += settings.alien_speed * settings.fleet_direction as f32;
    }
}

/// Round statistics. The high score survives resets and never decreases.
#[derive(Debug, Clone)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 0,
            high_score: 0,
        };
        stats.reset(settings);
        stats
    }

    /// Reset the per-round values; the high score is left untouched.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Pre-game or game over; entities hold still and the play prompt shows
    Inactive,
    /// Simulation advances every tick
    Active,
}

/// Complete session state. Owns every entity and stat exclusively.
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub metrics: SpriteMetrics,
    pub stats: GameStats,
    pub phase: GamePhase,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    /// Centered play control; a click inside it requests a round start
    pub play_button: Rect,
    /// Post-hit breather: while nonzero, entity updates are suspended
    pub recovery_ticks: u32,
    /// Pointer affordance for the frontend (shown while inactive)
    pub cursor_visible: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: Settings, metrics: SpriteMetrics) -> Self {
        let ship = Ship::new(&settings, &metrics);
        let mut play_button = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        play_button.center_on(settings.screen_width / 2, settings.screen_height / 2);

        let mut state = Self {
            stats: GameStats::new(&settings),
            settings,
            metrics,
            phase: GamePhase::Inactive,
            ship,
            bullets: Vec::new(),
            aliens: Vec::new(),
            play_button,
            recovery_ticks: 0,
            cursor_visible: true,
            time_ticks: 0,
        };

        // Show the formation behind the play prompt before the first round
        state.aliens = fleet::build_fleet(&state.settings, &state.metrics);
        state
    }

    /// Fire request; silently ignored once the allowance is reached.
    pub fn fire_bullet(&mut self) {
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::new(&self.settings, &self.ship));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default(), SpriteMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_starts_centered_at_bottom() {
        let settings = Settings::default();
        let ship = Ship::new(&settings, &SpriteMetrics::default());
        let rect = ship.rect();
        assert_eq!(rect.x, (settings.screen_width - rect.w) / 2);
        assert_eq!(rect.bottom(), settings.screen_height);
    }

    #[test]
    fn test_ship_moves_and_clamps_right() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings, &SpriteMetrics::default());
        ship.moving_right = true;

        let start_x = ship.pos.x;
        ship.update(&settings);
        assert!(ship.pos.x > start_x);

        // Park the ship against the right edge; further updates are ignored
        ship.pos.x = (settings.screen_width - ship.size.0) as f32;
        let parked = ship.pos.x;
        ship.update(&settings);
        assert_eq!(ship.pos.x, parked);
    }

    #[test]
    fn test_ship_clamps_left() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings, &SpriteMetrics::default());
        ship.moving_left = true;
        ship.pos.x = 0.0;
        ship.update(&settings);
        assert_eq!(ship.pos.x, 0.0);
    }

    #[test]
    fn test_ship_both_flags_cancel_mid_screen() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings, &SpriteMetrics::default());
        ship.moving_left = true;
        ship.moving_right = true;
        let start_x = ship.pos.x;
        ship.update(&settings);
        assert_eq!(ship.pos.x, start_x);
    }

    #[test]
    fn test_bullet_spawns_at_ship_midtop() {
        let settings = Settings::default();
        let ship = Ship::new(&settings, &SpriteMetrics::default());
        let bullet = Bullet::new(&settings, &ship);
        let (mid_x, top_y) = ship.rect().midtop();
        assert_eq!(bullet.rect().midtop().0, mid_x);
        assert_eq!(bullet.rect().top(), top_y);
    }

    #[test]
    fn test_bullet_moves_up_and_leaves_screen() {
        let settings = Settings::default();
        let ship = Ship::new(&settings, &SpriteMetrics::default());
        let mut bullet = Bullet::new(&settings, &ship);
        let start_y = bullet.pos.y;
        bullet.update(&settings);
        assert!(bullet.pos.y < start_y);

        assert!(!bullet.off_screen());
        bullet.pos.y = -(bullet.size.1 as f32);
        assert!(bullet.off_screen());
    }

    #[test]
    fn test_fire_respects_allowance() {
        let mut state = GameState::default();
        for _ in 0..state.settings.bullets_allowed + 5 {
            state.fire_bullet();
        }
        assert_eq!(state.bullets.len(), state.settings.bullets_allowed);
    }

    #[test]
    fn test_alien_edge_detection() {
        let settings = Settings::default();
        let mut alien = Alien::new(100.0, 58.0, (ALIEN_WIDTH, ALIEN_HEIGHT));
        assert!(!alien.at_edge(&settings));

        alien.pos.x = (settings.screen_width - ALIEN_WIDTH) as f32;
        assert!(alien.at_edge(&settings));

        alien.pos.x = 0.0;
        assert!(alien.at_edge(&settings));
    }

    #[test]
    fn test_stats_reset_preserves_high_score() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.score = 900;
        stats.high_score = 900;
        stats.level = 4;
        stats.reset(&settings);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.ships_left, settings.ship_limit);
        assert_eq!(stats.high_score, 900);
    }

    #[test]
    fn test_new_session_is_inactive_with_fleet() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Inactive);
        assert!(state.cursor_visible);
        assert!(!state.aliens.is_empty());
        assert!(state.bullets.is_empty());
    }
}

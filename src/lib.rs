//! Alien Invasion - a fixed-camera fleet shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fleet, collisions, session state)
//! - `renderer`: Terminal rendering adapter
//!
//! The simulation plays on a fixed virtual screen; the renderer scales that
//! screen onto whatever terminal grid it is handed. All gameplay decisions
//! (layout, collisions, clamping) happen in virtual pixels.

pub mod renderer;
pub mod sim;

pub use sim::settings::Settings;
pub use sim::state::{GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICK_RATE: u32 = 30;

    /// Virtual screen the simulation plays on
    pub const SCREEN_WIDTH: i32 = 960;
    pub const SCREEN_HEIGHT: i32 = 540;

    /// Sprite footprints (virtual pixels); only the bounding geometry matters
    pub const SHIP_WIDTH: i32 = 60;
    pub const SHIP_HEIGHT: i32 = 48;
    pub const ALIEN_WIDTH: i32 = 60;
    pub const ALIEN_HEIGHT: i32 = 58;

    /// Bullet geometry and allowance
    pub const BULLET_WIDTH: i32 = 3;
    pub const BULLET_HEIGHT: i32 = 15;
    pub const BULLETS_ALLOWED: usize = 3;

    /// Round-start dynamics (units per tick)
    pub const BASE_SHIP_SPEED: f32 = 1.5;
    pub const BASE_BULLET_SPEED: f32 = 1.0;
    pub const BASE_ALIEN_SPEED: f32 = 1.0;

    /// Scoring
    pub const BASE_ALIEN_POINTS: u32 = 50;

    /// Difficulty scaling applied on every full fleet clear
    pub const SPEEDUP_SCALE: f32 = 1.1;
    pub const SCORE_SCALE: f32 = 1.5;

    /// Vertical advance of the whole fleet on an edge reversal
    pub const FLEET_DROP_SPEED: f32 = 10.0;

    /// Ships per round
    pub const SHIP_LIMIT: u32 = 3;

    /// Play-button footprint, centered on screen while inactive
    pub const BUTTON_WIDTH: i32 = 200;
    pub const BUTTON_HEIGHT: i32 = 50;

    /// Post-hit recovery pause (~1 second of simulated time)
    pub const SHIP_RECOVERY_TICKS: u32 = TICK_RATE;
}

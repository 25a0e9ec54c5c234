//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module is pure and fixed-step:
//! - One full update per external tick, no internal timing
//! - No rendering or platform dependencies
//! - Collections compact once per pass, never mid-iteration

pub mod collision;
pub mod fleet;
pub mod rect;
pub mod settings;
pub mod state;
pub mod tick;

pub use fleet::FleetLayout;
pub use rect::Rect;
pub use settings::Settings;
pub use state::{Alien, Bullet, GamePhase, GameState, GameStats, Ship, SpriteMetrics};
pub use tick::{TickInput, tick};

//! Fixed-rate session tick
//!
//! One call advances the whole session by a single step: input application,
//! entity updates, collision resolution, and the Inactive/Active state
//! machine. The caller drives this at a stable rate and owns quitting;
//! nothing in here ever blocks.

use super::collision;
use super::fleet;
use super::state::{GamePhase, GameState};

/// Input gathered by the frontend for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction keys currently held
    pub left: bool,
    pub right: bool,
    /// Fire key pressed this tick
    pub fire: bool,
    /// Start control activated this tick
    pub start: bool,
    /// Pointer click position in virtual coordinates, if any
    pub click: Option<(i32, i32)>,
}

/// Advance the session by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Inactive {
        if start_requested(state, input) {
            start_round(state);
        }
        return;
    }

    state.time_ticks += 1;

    // Post-hit breather: the field holds still, but the caller keeps
    // polling input so a quit request is never delayed
    if state.recovery_ticks > 0 {
        state.recovery_ticks -= 1;
        return;
    }

    state.ship.moving_left = input.left;
    state.ship.moving_right = input.right;
    state.ship.update(&state.settings);

    if input.fire {
        state.fire_bullet();
    }

    // Projectiles move first; whatever ended fully above the screen on a
    // previous pass is culled here, not at the moment of crossing
    for bullet in &mut state.bullets {
        bullet.update(&state.settings);
    }
    state.bullets.retain(|b| !b.off_screen());

    collision::handle_bullet_alien_collisions(state);

    fleet::update_fleet(state);

    collision::handle_ship_alien_collisions(state);
}

/// The play control accepts a keyboard activation or a click inside its rect;
/// clicks anywhere else are ignored.
fn start_requested(state: &GameState, input: &TickInput) -> bool {
    if input.start {
        return true;
    }
    match input.click {
        Some((x, y)) => state.play_button.contains(x, y),
        None => false,
    }
}

/// Inactive -> Active: base dynamics, fresh stats, fresh field.
fn start_round(state: &mut GameState) {
    state.settings.reset_dynamic();
    state.stats.reset(&state.settings);

    state.bullets.clear();
    state.aliens = fleet::build_fleet(&state.settings, &state.metrics);
    state.ship.center(&state.settings);

    state.recovery_ticks = 0;
    state.phase = GamePhase::Active;
    state.cursor_visible = false;
    log::info!("round started with {} ships", state.stats.ships_left);
}

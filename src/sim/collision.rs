//! Collision resolution and scoring
//!
//! Removal is mark-then-compact: overlaps are recorded against mark vectors
//! while the collections are scanned, and each collection is compacted once
//! per pass. Nothing is removed mid-iteration.

use super::fleet;
use super::state::{GamePhase, GameState};
use crate::consts::SHIP_RECOVERY_TICKS;

/// Resolve projectile/enemy overlaps and apply scoring. A projectile that
/// overlaps several enemies destroys all of them and scores for each; every
/// destroyed pair is one-shot. Clearing the last enemy advances the level.
pub fn handle_bullet_alien_collisions(state: &mut GameState) {
    let mut dead_bullets = vec![false; state.bullets.len()];
    let mut dead_aliens = vec![false; state.aliens.len()];

    for (bi, bullet) in state.bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        let mut kills: u32 = 0;
        for (ai, alien) in state.aliens.iter().enumerate() {
            if dead_aliens[ai] {
                continue;
            }
            if bullet_rect.intersects(&alien.rect()) {
                dead_aliens[ai] = true;
                dead_bullets[bi] = true;
                kills += 1;
            }
        }
        if kills > 0 {
            state.stats.score += state.settings.alien_points * kills;
        }
    }

    let mut i = 0;
    state.bullets.retain(|_| {
        let dead = dead_bullets[i];
        i += 1;
        !dead
    });
    let mut i = 0;
    state.aliens.retain(|_| {
        let dead = dead_aliens[i];
        i += 1;
        !dead
    });

    if state.stats.score > state.stats.high_score {
        state.stats.high_score = state.stats.score;
    }

    if state.aliens.is_empty() {
        // Full clear: wipe the remaining shots, speed the round up, and
        // repopulate for the next level
        state.bullets.clear();
        state.settings.increase_speed();
        state.stats.level += 1;
        state.aliens = fleet::build_fleet(&state.settings, &state.metrics);
        log::info!("fleet cleared, level {} begins", state.stats.level);
    }
}

/// Ship/enemy overlap and an enemy reaching the bottom of the screen both
/// count as a ship hit.
pub fn handle_ship_alien_collisions(state: &mut GameState) {
    let ship_rect = state.ship.rect();
    if state.aliens.iter().any(|a| a.rect().intersects(&ship_rect)) {
        ship_hit(state);
        return;
    }

    let bottom = state.settings.screen_height;
    if state.aliens.iter().any(|a| a.rect().bottom() >= bottom) {
        ship_hit(state);
    }
}

/// Lose a ship. With ships remaining the field resets and a short breather
/// starts; with none the session goes inactive.
pub fn ship_hit(state: &mut GameState) {
    state.stats.ships_left = state.stats.ships_left.saturating_sub(1);

    if state.stats.ships_left == 0 {
        state.phase = GamePhase::Inactive;
        state.cursor_visible = true;
        state.recovery_ticks = 0;
        log::info!("out of ships: game over at score {}", state.stats.score);
        return;
    }

    state.bullets.clear();
    state.aliens = fleet::build_fleet(&state.settings, &state.metrics);
    state.ship.center(&state.settings);
    state.recovery_ticks = SHIP_RECOVERY_TICKS;
    log::debug!("ship hit, {} left", state.stats.ships_left);
}

//! Fleet construction and marching
//!
//! The grid is deterministic: column and row counts fall out of the screen
//! and sprite dimensions alone, so every repopulation reproduces the same
//! starting layout.

use super::settings::Settings;
use super::state::{Alien, GameState, SpriteMetrics};

/// Grid dimensions for a given screen and sprite footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: i32,
    pub rows: i32,
}

/// Columns: one alien-width of margin at each screen edge, one alien-width
/// of gap between columns. Rows: one alien-height of top margin, two above
/// the ship, and a three-height band kept clear at the bottom.
pub fn layout(settings: &Settings, metrics: &SpriteMetrics) -> FleetLayout {
    let (alien_w, alien_h) = metrics.alien;
    let (_, ship_h) = metrics.ship;

    let available_x = settings.screen_width - 2 * alien_w;
    let columns = available_x / (2 * alien_w);

    let available_y = settings.screen_height - 3 * alien_h - ship_h;
    let rows = available_y / (2 * alien_h);

    FleetLayout { columns, rows }
}

/// Build the full grid at its starting position. Rows advance by two alien
/// heights, columns by two alien widths.
pub fn build_fleet(settings: &Settings, metrics: &SpriteMetrics) -> Vec<Alien> {
    let FleetLayout { columns, rows } = layout(settings, metrics);
    let (alien_w, alien_h) = metrics.alien;

    let mut aliens = Vec::with_capacity((columns * rows).max(0) as usize);
    for row in 0..rows {
        for col in 0..columns {
            let x = alien_w + 2 * alien_w * col;
            let y = alien_h + 2 * alien_h * row;
            aliens.push(Alien::new(x as f32, y as f32, metrics.alien));
        }
    }
    log::debug!("fleet built: {columns} columns x {rows} rows");
    aliens
}

/// Advance the fleet one tick. The edge scan runs before any movement, so
/// the direction flips at most once per tick no matter how many aliens sit
/// on an edge; a flip also drops the whole fleet by the fixed increment.
pub fn update_fleet(state: &mut GameState) {
    if state.aliens.iter().any(|a| a.at_edge(&state.settings)) {
        for alien in &mut state.aliens {
            alien.pos.y += state.settings.fleet_drop_speed;
        }
        state.settings.fleet_direction *= -1;
    }

    for alien in &mut state.aliens {
        alien.update(&state.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_layout_from_default_dimensions() {
        let grid = layout(&Settings::default(), &SpriteMetrics::default());
        // 960 wide: (960 - 2*60) / (2*60) columns
        assert_eq!(grid.columns, 7);
        // 540 tall: (540 - 3*58 - 48) / (2*58) rows
        assert_eq!(grid.rows, 2);
    }

    #[test]
    fn test_layout_scales_with_screen() {
        let mut settings = Settings::default();
        settings.screen_width = 1920;
        settings.screen_height = 1080;
        let grid = layout(&settings, &SpriteMetrics::default());
        assert_eq!(grid.columns, 15);
        assert_eq!(grid.rows, 7);
    }

    #[test]
    fn test_build_fleet_positions() {
        let settings = Settings::default();
        let metrics = SpriteMetrics::default();
        let aliens = build_fleet(&settings, &metrics);
        assert_eq!(aliens.len(), 14);

        // First alien sits one footprint in from the top-left corner
        assert_eq!(aliens[0].rect().x, ALIEN_WIDTH);
        assert_eq!(aliens[0].rect().y, ALIEN_HEIGHT);

        // Second column is two widths over; second row two heights down
        assert_eq!(aliens[1].rect().x, 3 * ALIEN_WIDTH);
        assert_eq!(aliens[7].rect().y, 3 * ALIEN_HEIGHT);

        // The last column still leaves the right-hand margin
        let rightmost = aliens.iter().map(|a| a.rect().right()).max();
        assert_eq!(rightmost, Some(settings.screen_width - 2 * ALIEN_WIDTH));
    }

    #[test]
    fn test_rebuild_reproduces_layout() {
        let settings = Settings::default();
        let metrics = SpriteMetrics::default();
        let first = build_fleet(&settings, &metrics);
        let second = build_fleet(&settings, &metrics);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.rect(), b.rect());
        }
    }

    #[test]
    fn test_fleet_marches_in_direction() {
        let mut state = GameState::default();
        let start: Vec<f32> = state.aliens.iter().map(|a| a.pos.x).collect();
        update_fleet(&mut state);
        for (alien, x0) in state.aliens.iter().zip(&start) {
            assert_eq!(alien.pos.x, x0 + state.settings.alien_speed);
        }
    }

    #[test]
    fn test_edge_reverses_and_drops_once() {
        let mut state = GameState::default();
        // Park two aliens on the right edge at once
        let edge_x = (state.settings.screen_width - ALIEN_WIDTH) as f32;
        state.aliens[0].pos.x = edge_x;
        state.aliens[1].pos.x = edge_x;
        let start_y: Vec<f32> = state.aliens.iter().map(|a| a.pos.y).collect();

        update_fleet(&mut state);

        // One flip, one drop, regardless of how many aliens touched
        assert_eq!(state.settings.fleet_direction, -1);
        for (alien, y0) in state.aliens.iter().zip(&start_y) {
            assert_eq!(alien.pos.y, y0 + FLEET_DROP_SPEED);
        }

        // Everyone already marched back leftward on the same tick
        assert_eq!(
            state.aliens[0].pos.x,
            edge_x - state.settings.alien_speed
        );
    }

    #[test]
    fn test_left_edge_reverses_back() {
        let mut state = GameState::default();
        state.settings.fleet_direction = -1;
        state.aliens[0].pos.x = 0.0;
        update_fleet(&mut state);
        assert_eq!(state.settings.fleet_direction, 1);
    }
}

//! Idle/demo player
//!
//! Produces pointer positions the way a distracted player would: ease toward
//! the shuttle, overshoot a little, and drift more as the rally speeds up.

use super::state::{Direction, GameState};
use crate::consts::*;

/// Pointer x the demo player moves to this tick
///
/// `lag` is the fraction of the remaining distance covered per tick
/// (0 = frozen, 1 = snaps onto the shuttle).
pub fn demo_target(state: &GameState, lag: f32) -> f32 {
    let lag = lag.clamp(0.0, 1.0);

    // Add oscillating offset based on time so rallies end eventually
    let time_factor = state.ticks as f32 * 0.05;
    let wobble = time_factor.sin() * 4.0 + (time_factor * 0.37).sin() * 3.0;
    let sloppiness = (state.speed - BASE_SPEED) * 10.0;

    let aim = match state.direction {
        Direction::Descending => state.shuttle.x + wobble * (1.0 + sloppiness),
        // Nothing to catch on the way up: drift back toward the middle
        Direction::Ascending => (state.shuttle.x + RACKET_START_X) * 0.5,
    };

    state.racket_x + (aim - state.racket_x) * lag
}

//! Racket hit detection and scoring
//!
//! A hit needs two things: the shuttle inside the open hit band near the
//! racket row, and the racket center closer than `RACKET_REACH` along x.

use super::state::{Direction, GameState};
use crate::consts::*;

/// Whether y lies strictly inside the hit band (both edges excluded)
#[inline]
pub fn in_hit_band(y: f32) -> bool {
    y > HIT_BAND_TOP && y < HIT_BAND_BOTTOM
}

/// Whether the racket at `racket_x` reaches a shuttle at `shuttle_x`
///
/// An offset of exactly `RACKET_REACH` is a miss.
#[inline]
pub fn racket_reaches(shuttle_x: f32, racket_x: f32) -> bool {
    (shuttle_x - racket_x).abs() < RACKET_REACH
}

/// Apply the hit rule to a state whose shuttle is inside the band
///
/// On a hit the score goes up, the shuttle turns upward and the speed ramps.
/// Returns `true` if the racket connected. Nothing changes on a miss.
pub fn resolve_hit(state: &mut GameState) -> bool {
    if !racket_reaches(state.shuttle.x, state.racket_x) {
        return false;
    }

    state.score += 1;
    state.direction = Direction::Ascending;
    state.speed += SPEED_STEP;
    true
}

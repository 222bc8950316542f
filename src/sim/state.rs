//! Game state and core simulation types
//!
//! Everything a session needs to be replayed from its seed lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Vertical travel direction of the shuttle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Falling toward the racket (y grows)
    #[default]
    Descending,
    /// Flying back up after a hit (y shrinks)
    Ascending,
}

impl Direction {
    /// Sign applied to speed when advancing y
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Descending => 1.0,
            Direction::Ascending => -1.0,
        }
    }
}

/// Notable things that happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Racket returned the shuttle
    Hit { score: u32, speed: f32 },
    /// Shuttle reached the top of the court and turned around
    Bounce,
    /// Shuttle fell past the bottom edge
    GameOver { score: u32 },
}

/// Complete game state (deterministic, serializable)
///
/// Small enough to copy; transitions return a new value and leave the
/// input untouched, so any holder of a previous copy sees a stable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed the spawn position was drawn from
    pub seed: u64,
    /// Successful hits this session
    pub score: u32,
    /// Set once the shuttle drops past the bottom edge
    pub is_over: bool,
    /// Shuttle position in court percent. y may overshoot 100 on a miss
    pub shuttle: Vec2,
    /// Racket center x, always within [RACKET_MIN_X, RACKET_MAX_X]
    pub racket_x: f32,
    pub direction: Direction,
    /// Court units per tick. Only grows within a session
    pub speed: f32,
    /// Simulation tick counter
    pub ticks: u64,
}

impl GameState {
    /// Create a fresh session with the shuttle at a seeded random x on the top edge
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_x = rng.random_range(SPAWN_MIN_X..=SPAWN_MAX_X);

        Self {
            seed,
            score: 0,
            is_over: false,
            shuttle: Vec2::new(spawn_x, COURT_MIN),
            racket_x: RACKET_START_X,
            direction: Direction::Descending,
            speed: BASE_SPEED,
            ticks: 0,
        }
    }

    /// Horizontal distance between shuttle and racket center
    #[inline]
    pub fn racket_offset(&self) -> f32 {
        (self.shuttle.x - self.racket_x).abs()
    }
}

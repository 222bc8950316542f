//! Shuttle Rally - a one-racket badminton rally game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shuttle motion, racket hits, game state)
//! - `game`: Session owner driving the simulation from a tick source
//! - `platform`: Tick source and pointer input abstractions
//! - `renderer`: Presenter contract and a text presenter
//! - `settings`: Tunable loop parameters

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use settings::Settings;

/// Game configuration constants
///
/// All positions are percentages of the court: x runs left to right,
/// y runs top (0) to bottom (100).
pub mod consts {
    /// Default tick period in milliseconds
    pub const TICK_PERIOD_MS: f64 = 50.0;
    /// Maximum ticks applied per pump to prevent a catch-up burst
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Court extent
    pub const COURT_MIN: f32 = 0.0;
    pub const COURT_MAX: f32 = 100.0;

    /// Racket travel limits and starting position
    pub const RACKET_MIN_X: f32 = 10.0;
    pub const RACKET_MAX_X: f32 = 90.0;
    pub const RACKET_START_X: f32 = 50.0;
    /// Horizontal distance below which the racket reaches the shuttle (strict)
    pub const RACKET_REACH: f32 = 10.0;

    /// Shuttle spawn range along x
    pub const SPAWN_MIN_X: f32 = 10.0;
    pub const SPAWN_MAX_X: f32 = 90.0;

    /// Open y interval where a hit is checked
    pub const HIT_BAND_TOP: f32 = 80.0;
    pub const HIT_BAND_BOTTOM: f32 = 90.0;

    /// Shuttle speed in court units per tick
    pub const BASE_SPEED: f32 = 1.0;
    /// Speed added by every successful hit
    pub const SPEED_STEP: f32 = 0.1;
}

/// Clamp a pointer x into the racket's travel range
///
/// Returns `None` for NaN so callers can keep the previous position.
#[inline]
pub fn clamp_racket_x(x: f32) -> Option<f32> {
    if x.is_nan() {
        None
    } else {
        Some(x.clamp(consts::RACKET_MIN_X, consts::RACKET_MAX_X))
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod collision;
pub mod state;
pub mod tick;

pub use autoplay::demo_target;
pub use collision::{in_hit_band, racket_reaches, resolve_hit};
pub use state::{Direction, GameEvent, GameState};
pub use tick::{Step, advance, handle_pointer_input, initialize, reset, tick};

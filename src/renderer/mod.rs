//! Presentation contract
//!
//! Presenters receive read-only [`Frame`] snapshots and never touch the game
//! state. The only thing flowing back is a restart request.

pub mod text;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

pub use text::TextPresenter;

/// Everything a presenter needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub shuttle: Vec2,
    pub racket_x: f32,
    pub score: u32,
    pub is_over: bool,
}

impl From<&GameState> for Frame {
    fn from(state: &GameState) -> Self {
        Self {
            shuttle: state.shuttle,
            racket_x: state.racket_x,
            score: state.score,
            is_over: state.is_over,
        }
    }
}

impl Frame {
    /// Whether the shuttle and racket are on screen (the end screen hides them)
    pub fn shows_court(&self) -> bool {
        !self.is_over
    }
}

/// Draw sink for game frames
pub trait Presenter {
    fn present(&mut self, frame: &Frame);

    /// Whether the player asked to restart since the last call (restart hook)
    fn take_restart_request(&mut self) -> bool {
        false
    }
}

//! Platform abstraction layer
//!
//! The simulation never talks to a timer or an input device directly. Hosts
//! plug in:
//! - a [`TickSource`] deciding when a fixed step is due
//! - an [`InputAdapter`] turning raw pointer coordinates into court percent

pub mod input;
pub mod time;

pub use input::{AreaInput, InputAdapter};
pub use time::{FixedTicker, ManualTicker, TickSource};

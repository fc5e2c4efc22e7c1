//! Platform abstraction layer
//!
//! Bridges terminal realities to what the simulation wants: a held-state
//! query for the direction keys and a queue of discrete events.

pub mod input;

pub use input::{InputEvent, InputPump};

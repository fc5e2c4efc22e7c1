//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one call)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{mask_offset, masks_overlap};
pub use sprite::{Sprite, SpriteMask, SpriteSheet, VisualState};
pub use state::{Carrot, GamePhase, GameState, Platform, Player};
pub use tick::{TickInput, tick};

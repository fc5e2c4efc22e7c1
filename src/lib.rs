//! Doodle Hop - a bounce-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, mask collision, game state)
//! - `render`: Terminal rendering surface and frame composition
//! - `platform`: Input event pump over the terminal
//! - `settings`: Presentation preferences

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size in pixels
    pub const WIN_WIDTH: f32 = 500.0;
    pub const WIN_HEIGHT: f32 = 800.0;

    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Terminal-velocity cap on per-tick vertical displacement (pixels)
    pub const GRAVITY: f32 = 8.0;
    /// Quadratic coefficient of the per-tick displacement curve
    pub const GRAVITY_ACCEL: f32 = 0.35;
    /// Extra upward pixels per tick while rising (snappier jumps)
    pub const RISE_BOOST: f32 = 2.0;
    /// Horizontal speed while a direction key is held (pixels per tick)
    pub const X_SPEED: f32 = 5.0;
    /// Upward velocity magnitude set by a platform bounce
    pub const JUMP_FORCE: f32 = 4.75;

    /// Sprite-cell to logical-pixel scale. The terminal draws one art cell
    /// per character cell; masks expand the same art into pixel space.
    pub const CELL_W: u32 = 10;
    pub const CELL_H: u32 = 32;
}

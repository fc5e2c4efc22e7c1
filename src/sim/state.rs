//! Game state and entity types
//!
//! One `GameState` is one session: spawned on start, mutated by ticks,
//! replaced wholesale on restart.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::sprite::{SpriteSheet, VisualState};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// The player fell off the bottom; waiting for a restart key
    Ended,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    /// Position of the sprite's top-left corner in logical pixels
    pub pos: Vec2,
    /// Ticks elapsed since the last jump (or spawn)
    pub tick_count: u32,
    /// Vertical velocity set at the last jump (negative = upward)
    pub velocity: f32,
    /// Active animation frame; also selects the collision footprint
    pub visual: VisualState,
    /// Horizontal speed while a direction key is held
    pub x_speed: f32,
    /// Terminal-velocity cap on per-tick displacement
    pub gravity: f32,
    /// Upward velocity magnitude of a bounce
    pub jump_force: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            tick_count: 0,
            velocity: 0.0,
            visual: VisualState::Falling,
            x_speed: X_SPEED,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
        }
    }

    /// Bounce: restart the displacement curve moving upward. The rising
    /// frame is forced immediately so the same tick renders and collides
    /// with the jump footprint.
    pub fn jump(&mut self) {
        self.velocity = -self.jump_force;
        self.tick_count = 0;
        self.visual = VisualState::Rising;
    }
}

/// The bounce platform. Vertical position is fixed; only x ever changes.
#[derive(Debug, Clone)]
pub struct Platform {
    pub pos: Vec2,
}

impl Platform {
    pub fn new(x: f32, sprites: &SpriteSheet) -> Self {
        let player_height = sprites.player(VisualState::Falling).size().y;
        Self {
            pos: Vec2::new(x, WIN_HEIGHT - player_height),
        }
    }

    /// Re-randomize x uniformly over `[0, WIN_WIDTH - platform_width)`.
    /// The new x may coincide with the old one; y is untouched.
    pub fn relocate(&mut self, rng: &mut Pcg32, sprites: &SpriteSheet) {
        let span = WIN_WIDTH as u32 - sprites.platform.mask.width();
        self.pos.x = rng.random_range(0..span) as f32;
    }
}

/// A collectible carrot. At most one exists at a time.
#[derive(Debug, Clone)]
pub struct Carrot {
    pub pos: Vec2,
}

impl Carrot {
    /// Spawn at a random x on the fixed mid-screen line
    pub fn spawn(rng: &mut Pcg32, sprites: &SpriteSheet) -> Self {
        let player_height = sprites.player(VisualState::Falling).size().y;
        let span = WIN_WIDTH as u32 - sprites.carrot.mask.width();
        Self {
            pos: Vec2::new(
                rng.random_range(0..span) as f32,
                WIN_HEIGHT / 2.0 - player_height,
            ),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source in the simulation
    pub rng: Pcg32,
    /// Carrots collected this session. Only ever increases.
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player character
    pub player: Player,
    /// Bounce platform
    pub platform: Platform,
    /// Active carrot, if any
    pub carrot: Option<Carrot>,
}

impl GameState {
    /// Create a fresh session: player at screen center, platform centered
    /// at the bottom, no carrot, score zero.
    pub fn new(seed: u64, sprites: &SpriteSheet) -> Self {
        let player_size = sprites.player(VisualState::Falling).size();
        let platform_width = sprites.platform.size().x;

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(Vec2::new(
                WIN_WIDTH / 2.0 - player_size.x / 2.0,
                WIN_HEIGHT / 2.0 - player_size.y / 2.0,
            )),
            platform: Platform::new(WIN_WIDTH / 2.0 - platform_width / 2.0, sprites),
            carrot: None,
        }
    }
}

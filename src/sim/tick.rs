//! Per-tick state machine
//!
//! Advances one session by one fixed timestep: motion, platform bounce,
//! carrot collection, then the fall-off-bottom check.

use rand::Rng;

use super::collision::{mask_offset, masks_overlap};
use super::motion;
use super::sprite::SpriteSheet;
use super::state::{Carrot, GamePhase, GameState};
use crate::consts::WIN_HEIGHT;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left direction key currently held
    pub left_held: bool,
    /// Right direction key currently held
    pub right_held: bool,
    /// Any key was pressed this tick (only consumed while Ended)
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, sprites: &SpriteSheet) {
    if state.phase == GamePhase::Ended {
        // Gameplay input is ignored; a key press starts a fresh session,
        // reseeded from this one's RNG so runs stay reproducible end to end.
        if input.restart {
            let seed = state.rng.random();
            log::info!("restarting session (seed {seed})");
            *state = GameState::new(seed, sprites);
        }
        return;
    }

    state.time_ticks += 1;
    motion::step(&mut state.player, input, sprites);

    // Platform bounce: jump, move the platform, and make sure a carrot is
    // out there to chase.
    let player_sprite = sprites.player(state.player.visual);
    let platform_hit = masks_overlap(
        &player_sprite.mask,
        &sprites.platform.mask,
        mask_offset(state.player.pos, state.platform.pos),
    );
    if platform_hit {
        state.player.jump();
        state.platform.relocate(&mut state.rng, sprites);
        if state.carrot.is_none() {
            state.carrot = Some(Carrot::spawn(&mut state.rng, sprites));
        }
    }

    // Carrot collection. The jump above may have switched the footprint,
    // so look the sprite up again.
    let player_sprite = sprites.player(state.player.visual);
    if let Some(carrot) = &state.carrot {
        if masks_overlap(
            &player_sprite.mask,
            &sprites.carrot.mask,
            mask_offset(state.player.pos, carrot.pos),
        ) {
            state.carrot = None;
            state.score += 1;
            log::info!("carrot collected, score {}", state.score);
        }
    }

    // Loss check runs last; once it fires the session is over for good.
    if state.player.pos.y > WIN_HEIGHT + player_sprite.size().y {
        state.phase = GamePhase::Ended;
        log::info!(
            "fell off the bottom after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
    }
}

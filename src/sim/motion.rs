//! Player motion model
//!
//! Vertical motion follows a per-tick displacement curve seeded by the last
//! jump; horizontal motion applies held directions with boundary clamps.

use super::sprite::{SpriteSheet, VisualState};
use super::state::Player;
use super::tick::TickInput;
use crate::consts::{GRAVITY_ACCEL, RISE_BOOST, WIN_WIDTH};

/// Displacement for tick `t` of the curve started with velocity `v`,
/// after the terminal-velocity clamp but before the rise adjustment:
/// `d = v*t + 0.5 * 0.35 * t^2`, clamped to `|d| <= gravity`.
#[inline]
pub fn vertical_displacement(velocity: f32, tick_count: u32, gravity: f32) -> f32 {
    let t = tick_count as f32;
    let d = velocity * t + 0.5 * GRAVITY_ACCEL * t * t;
    if d.abs() >= gravity {
        d.signum() * gravity
    } else {
        d
    }
}

/// Advance the player by one tick: vertical displacement, visual-state
/// selection, then held-key horizontal movement with clamping.
pub fn step(player: &mut Player, input: &TickInput, sprites: &SpriteSheet) {
    player.tick_count += 1;

    let mut d = vertical_displacement(player.velocity, player.tick_count, player.gravity);
    if d < 0.0 {
        // Still rising: snappier ascent, show the jump frame
        d -= RISE_BOOST;
        player.visual = VisualState::Rising;
    } else {
        player.visual = VisualState::Falling;
    }
    player.pos.y += d;

    // Left then right, applied sequentially. When both directions are held
    // the right key runs second and wins; this precedence is intentional.
    let width = sprites.player(player.visual).size().x;
    if input.left_held {
        player.pos.x = (player.pos.x - player.x_speed).max(0.0);
    }
    if input.right_held {
        player.pos.x = (player.pos.x + player.x_speed).min(WIN_WIDTH - width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRAVITY, JUMP_FORCE};
    use glam::Vec2;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y))
    }

    #[test]
    fn test_first_tick_after_jump() {
        // v = -4.75, t = 1: d = -4.75 + 0.175 = -4.575, rising, minus the
        // rise boost of 2 -> the player climbs 6.575 pixels.
        let sprites = SpriteSheet::bundled();
        let mut player = player_at(100.0, 400.0);
        player.jump();

        step(&mut player, &TickInput::default(), &sprites);
        assert!((player.pos.y - (400.0 - 6.575)).abs() < 1e-4);
        assert_eq!(player.visual, VisualState::Rising);
    }

    #[test]
    fn test_fall_reaches_terminal_velocity() {
        let sprites = SpriteSheet::bundled();
        let mut player = player_at(100.0, 0.0);

        // From rest the quadratic term dominates; after enough ticks every
        // step moves exactly GRAVITY pixels down.
        for _ in 0..10 {
            step(&mut player, &TickInput::default(), &sprites);
        }
        let before = player.pos.y;
        step(&mut player, &TickInput::default(), &sprites);
        assert_eq!(player.pos.y - before, GRAVITY);
        assert_eq!(player.visual, VisualState::Falling);
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let sprites = SpriteSheet::bundled();
        let mut player = player_at(200.0, 0.0);
        let x_before = player.pos.x;

        let input = TickInput {
            left_held: true,
            right_held: true,
            ..Default::default()
        };
        step(&mut player, &input, &sprites);

        // Sequential application: left moves -5, right moves +5 from there,
        // net zero but the right clamp is the one that ran last.
        assert_eq!(player.pos.x, x_before);

        // At the right edge, both held still pins to the right bound.
        let width = sprites.player(player.visual).size().x;
        player.pos.x = WIN_WIDTH - width;
        step(&mut player, &input, &sprites);
        assert_eq!(player.pos.x, WIN_WIDTH - width);
    }

    proptest! {
        /// |d| never exceeds the gravity cap, for any velocity and tick
        #[test]
        fn prop_displacement_capped(v in -50.0f32..50.0, t in 0u32..10_000) {
            let d = vertical_displacement(v, t, GRAVITY);
            prop_assert!(d.abs() <= GRAVITY);
        }

        /// The player's x never leaves [0, WIN_WIDTH - sprite_width] no
        /// matter which keys are held over an arbitrary tick sequence
        #[test]
        fn prop_x_stays_in_bounds(
            start_x in 0.0f32..450.0,
            keys in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..300),
        ) {
            let sprites = SpriteSheet::bundled();
            let mut player = player_at(start_x, 300.0);
            player.velocity = -JUMP_FORCE;

            for (left, right) in keys {
                let input = TickInput {
                    left_held: left,
                    right_held: right,
                    ..Default::default()
                };
                step(&mut player, &input, &sprites);

                let width = sprites.player(player.visual).size().x;
                prop_assert!(player.pos.x >= 0.0);
                prop_assert!(player.pos.x <= WIN_WIDTH - width);
            }
        }
    }
}

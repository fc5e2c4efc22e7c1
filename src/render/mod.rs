//! Terminal rendering
//!
//! The simulation knows nothing about drawing; everything here consumes
//! `&GameState` plus the sprite sheet and talks to a [`Surface`]. Frames are
//! composed in the fixed order background, carrot, player, platform, score.

pub mod terminal;

pub use terminal::TerminalSurface;

use crossterm::style::Color;
use glam::Vec2;

use crate::consts::{CELL_H, CELL_W, WIN_HEIGHT, WIN_WIDTH};
use crate::sim::{GameState, Sprite, SpriteSheet};

/// Playfield size in terminal cells
pub const COLS: u16 = (WIN_WIDTH as u32 / CELL_W) as u16;
pub const ROWS: u16 = (WIN_HEIGHT as u32 / CELL_H) as u16;

/// A frame target: sprite/text draws into a back buffer, then one present
pub trait Surface {
    /// Reset the back buffer to the background
    fn clear(&mut self);
    /// Draw a sprite with its top-left corner at a logical pixel position
    fn draw_sprite(&mut self, sprite: &Sprite, pos: Vec2, color: Color);
    /// Draw a text overlay at a cell position
    fn draw_text(&mut self, col: u16, row: u16, text: &str, color: Color);
    /// Flush the composed frame to the screen
    fn present(&mut self) -> std::io::Result<()>;
}

/// Compose one gameplay frame
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    state: &GameState,
    sprites: &SpriteSheet,
    fps: Option<u32>,
) {
    surface.clear();

    if let Some(carrot) = &state.carrot {
        surface.draw_sprite(&sprites.carrot, carrot.pos, Color::DarkYellow);
    }
    surface.draw_sprite(
        sprites.player(state.player.visual),
        state.player.pos,
        Color::White,
    );
    surface.draw_sprite(&sprites.platform, state.platform.pos, Color::Green);

    surface.draw_text(1, 0, &format!("Score: {}", state.score), Color::Yellow);
    if let Some(fps) = fps {
        let label = format!("{fps} fps");
        let col = COLS.saturating_sub(label.len() as u16 + 1);
        surface.draw_text(col, 0, &label, Color::DarkGrey);
    }
}

/// Compose the game-over screen
pub fn draw_game_over<S: Surface>(surface: &mut S, score: u32) {
    surface.clear();

    let lines = [
        ("Game Over :(".to_string(), Color::Red),
        (format!("Score: {score}"), Color::Yellow),
        ("Press any key to restart".to_string(), Color::White),
    ];

    let top = ROWS / 2 - lines.len() as u16 / 2;
    for (i, (text, color)) in lines.iter().enumerate() {
        let col = COLS.saturating_sub(text.len() as u16) / 2;
        surface.draw_text(col, top + i as u16, text, *color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Carrot, SpriteSheet};

    /// Records draw calls for order checks
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push("clear".into());
        }

        fn draw_sprite(&mut self, sprite: &Sprite, _pos: Vec2, _color: Color) {
            self.ops.push(format!("sprite:{}", sprite.art[0]));
        }

        fn draw_text(&mut self, _col: u16, _row: u16, text: &str, _color: Color) {
            self.ops.push(format!("text:{text}"));
        }

        fn present(&mut self) -> std::io::Result<()> {
            self.ops.push("present".into());
            Ok(())
        }
    }

    #[test]
    fn test_frame_draw_order() {
        let sprites = SpriteSheet::bundled();
        let mut state = GameState::new(1, &sprites);
        state.carrot = Some(Carrot {
            pos: Vec2::new(10.0, 10.0),
        });
        state.score = 3;

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, &sprites, None);

        let ops: Vec<&str> = surface.ops.iter().map(String::as_str).collect();
        assert_eq!(
            ops,
            [
                "clear",
                "sprite:\\|/",
                "sprite: \\ / ",
                "sprite:[==========]",
                "text:Score: 3",
            ]
        );
    }

    #[test]
    fn test_frame_without_carrot_draws_none() {
        let sprites = SpriteSheet::bundled();
        let state = GameState::new(1, &sprites);

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, &sprites, None);
        assert!(!surface.ops.iter().any(|op| op == "sprite:\\|/"));
    }

    #[test]
    fn test_game_over_screen_contents() {
        let mut surface = RecordingSurface::default();
        draw_game_over(&mut surface, 12);

        assert!(surface.ops.iter().any(|op| op == "text:Game Over :("));
        assert!(surface.ops.iter().any(|op| op == "text:Score: 12"));
        assert!(
            surface
                .ops
                .iter()
                .any(|op| op == "text:Press any key to restart")
        );
    }
}

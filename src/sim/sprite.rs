//! Sprites, opaque-pixel masks, and the player's visual states
//!
//! Sprites are embedded ASCII art: every non-space cell is opaque. Each art
//! cell covers CELL_W x CELL_H logical pixels, so the simulation keeps
//! working in the 500x800 pixel space while the terminal draws the art 1:1
//! in character cells. Collision uses the pixel masks, never the art.

use glam::Vec2;

use crate::consts::{CELL_H, CELL_W};

/// Which animation frame the player shows. Cosmetic, but it also selects the
/// collision footprint through [`SpriteSheet::player`], so motion and
/// collision always agree on the sprite in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Moving upward after a bounce (ears up, legs tucked)
    Rising,
    /// Falling under gravity (ears out, legs spread)
    Falling,
}

const PLAYER_FALLING_ART: &[&str] = &[
    r" \ / ",
    r"(o.o)",
    r"(   )",
    r"^   ^",
];

const PLAYER_RISING_ART: &[&str] = &[
    r" | | ",
    r"(o.o)",
    r"( _ )",
    r"  W  ",
];

const PLATFORM_ART: &[&str] = &[r"[==========]"];

const CARROT_ART: &[&str] = &[
    r"\|/",
    r" V ",
];

/// An opaque-pixel mask in logical pixel space
#[derive(Debug, Clone)]
pub struct SpriteMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl SpriteMask {
    /// Build a mask from art rows, expanding each cell to `cell` pixels.
    /// All rows must have the same width.
    pub fn from_art(rows: &[&str], cell: (u32, u32)) -> Self {
        let (cell_w, cell_h) = cell;
        let cols = rows.first().map_or(0, |r| r.len());
        debug_assert!(rows.iter().all(|r| r.len() == cols));

        let width = cols as u32 * cell_w;
        let height = rows.len() as u32 * cell_h;
        let mut bits = vec![false; (width * height) as usize];

        for (row, art) in rows.iter().enumerate() {
            for (col, ch) in art.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                for dy in 0..cell_h {
                    let y = row as u32 * cell_h + dy;
                    for dx in 0..cell_w {
                        let x = col as u32 * cell_w + dx;
                        bits[(y * width + x) as usize] = true;
                    }
                }
            }
        }

        Self {
            width,
            height,
            bits,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is collision surface
    #[inline]
    pub fn opaque(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }
}

/// An ASCII-art sprite plus its pixel mask
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Art rows for the renderer (space = transparent)
    pub art: &'static [&'static str],
    /// Opaque-pixel footprint for collision
    pub mask: SpriteMask,
}

impl Sprite {
    fn from_art(art: &'static [&'static str]) -> Self {
        Self {
            art,
            mask: SpriteMask::from_art(art, (CELL_W, CELL_H)),
        }
    }

    /// Sprite size in logical pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.mask.width() as f32, self.mask.height() as f32)
    }
}

/// All sprites the game uses, built once at startup and passed by reference
/// into the loop and state machine.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub player_falling: Sprite,
    pub player_rising: Sprite,
    pub platform: Sprite,
    pub carrot: Sprite,
}

impl SpriteSheet {
    /// Build the bundled sprite set
    pub fn bundled() -> Self {
        Self {
            player_falling: Sprite::from_art(PLAYER_FALLING_ART),
            player_rising: Sprite::from_art(PLAYER_RISING_ART),
            platform: Sprite::from_art(PLATFORM_ART),
            carrot: Sprite::from_art(CARROT_ART),
        }
    }

    /// Player sprite for the given visual state
    pub fn player(&self, visual: VisualState) -> &Sprite {
        match visual {
            VisualState::Rising => &self.player_rising,
            VisualState::Falling => &self.player_falling,
        }
    }
}

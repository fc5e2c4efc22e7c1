//! Terminal input pump
//!
//! Most terminal emulators report key repeats but no key-up, so "is the key
//! held" cannot be read directly. Each press or repeat latches its direction
//! for a short hold window; repeats keep refreshing the window, and real
//! Release events (terminals that support them) clear it early.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Discrete input events the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Any key was pressed (restart trigger on the game-over screen)
    KeyPressed,
    /// The player asked to quit (q, Esc, Ctrl-C, terminal gone)
    Quit,
}

/// A latched direction key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// How long one press/repeat counts as "held". Typical repeat delay is
/// ~500ms before repeats stream in every ~30ms, so the window has to cover
/// the initial gap without making taps feel sticky.
const HOLD_WINDOW: Duration = Duration::from_millis(550);

/// Held-direction latch, separate from the crossterm pump for testability
#[derive(Debug, Default)]
struct HeldKeys {
    left_until: Option<Instant>,
    right_until: Option<Instant>,
}

impl HeldKeys {
    fn press(&mut self, dir: Direction, now: Instant) {
        let until = Some(now + HOLD_WINDOW);
        match dir {
            Direction::Left => self.left_until = until,
            Direction::Right => self.right_until = until,
        }
    }

    fn release(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.left_until = None,
            Direction::Right => self.right_until = None,
        }
    }

    fn is_held(&self, dir: Direction, now: Instant) -> bool {
        let until = match dir {
            Direction::Left => self.left_until,
            Direction::Right => self.right_until,
        };
        until.is_some_and(|t| now < t)
    }
}

/// Polls crossterm events and maintains the held-direction state
#[derive(Debug, Default)]
pub struct InputPump {
    held: HeldKeys,
}

impl InputPump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all pending terminal events, returning the discrete ones.
    /// Called once at the start of every tick.
    pub fn pump(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let now = Instant::now();

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    match key.code {
                        KeyCode::Left => self.held.press(Direction::Left, now),
                        KeyCode::Right => self.held.press(Direction::Right, now),
                        _ => {}
                    }

                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                        events.push(InputEvent::Quit);
                    } else if key.kind == KeyEventKind::Press {
                        events.push(InputEvent::KeyPressed);
                    }
                }
                KeyEventKind::Release => match key.code {
                    KeyCode::Left => self.held.release(Direction::Left),
                    KeyCode::Right => self.held.release(Direction::Right),
                    _ => {}
                },
            }
        }

        Ok(events)
    }

    /// Whether the left direction key currently counts as held
    pub fn left_held(&self) -> bool {
        self.held.is_held(Direction::Left, Instant::now())
    }

    /// Whether the right direction key currently counts as held
    pub fn right_held(&self) -> bool {
        self.held.is_held(Direction::Right, Instant::now())
    }
}

//! Doodle Hop entry point
//!
//! Owns the fixed-rate game loop: pump input, tick the simulation, draw,
//! present, sleep off the rest of the frame budget.

use std::io;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use doodle_hop::Settings;
use doodle_hop::consts::TICK_RATE;
use doodle_hop::platform::{InputEvent, InputPump};
use doodle_hop::render::{self, Surface, TerminalSurface};
use doodle_hop::sim::{GamePhase, GameState, SpriteSheet, TickInput, tick};

/// Rolling frame counter over the last 60 presented frames
struct FpsCounter {
    times: [Option<Instant>; 60],
    index: usize,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            times: [None; 60],
            index: 0,
        }
    }

    fn record(&mut self, now: Instant) {
        self.times[self.index] = Some(now);
        self.index = (self.index + 1) % self.times.len();
    }

    fn current(&self) -> u32 {
        // The slot about to be overwritten holds the oldest sample
        match self.times[self.index] {
            Some(oldest) => {
                let elapsed = oldest.elapsed().as_secs_f32();
                if elapsed > 0.0 {
                    (self.times.len() as f32 / elapsed).round() as u32
                } else {
                    0
                }
            }
            None => 0,
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let sprites = SpriteSheet::bundled();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    log::info!("Doodle Hop starting (seed {seed})");

    let mut surface = TerminalSurface::new(&settings)?;
    let mut pump = InputPump::new();
    let mut state = GameState::new(seed, &sprites);
    let mut fps = FpsCounter::new();

    let frame_budget = Duration::from_micros(1_000_000 / TICK_RATE as u64);

    'game: loop {
        let frame_start = Instant::now();

        let mut key_pressed = false;
        for event in pump.pump()? {
            match event {
                InputEvent::Quit => break 'game,
                InputEvent::KeyPressed => key_pressed = true,
            }
        }

        let input = TickInput {
            left_held: pump.left_held(),
            right_held: pump.right_held(),
            restart: key_pressed,
        };
        let was_playing = state.phase == GamePhase::Playing;
        tick(&mut state, &input, &sprites);

        match state.phase {
            GamePhase::Playing => {
                let fps_label = settings.show_fps.then(|| fps.current());
                render::draw_frame(&mut surface, &state, &sprites, fps_label);
                surface.present()?;
            }
            // The tick that loses skips its draw; the game-over screen
            // starts on the next iteration.
            GamePhase::Ended if was_playing => {}
            GamePhase::Ended => {
                render::draw_game_over(&mut surface, state.score);
                surface.present()?;
            }
        }

        fps.record(frame_start);
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }

    log::info!("quit, final score {}", state.score);
    Ok(())
}

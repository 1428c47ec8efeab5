use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::core::game::{Flow, Game};
use crate::games::wheel::renderer;
use crate::games::wheel::round::RoundEngine;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

/// How long a solved board stays up before the next puzzle.
pub const SOLVED_PAUSE: Duration = Duration::from_secs(3);

/// Terminal host around a [`RoundEngine`]: maps keys to engine calls and paces the wheel.
pub struct WheelGame {
    round: RoundEngine,
    tick_rate: Duration,
    next_puzzle_in: Option<Duration>,
}

impl WheelGame {
    pub fn new(round: RoundEngine, fps: u32) -> Self {
        Self {
            round,
            tick_rate: Duration::from_secs(1) / fps.clamp(MIN_FPS, MAX_FPS),
            next_puzzle_in: None,
        }
    }

    pub fn round(&self) -> &RoundEngine {
        &self.round
    }

    /// Time left on the solved board, if one is showing.
    pub fn next_puzzle_in(&self) -> Option<Duration> {
        self.next_puzzle_in
    }

    fn start_next_puzzle(&mut self) {
        self.next_puzzle_in = None;
        self.round.new_puzzle();
    }
}

impl Game for WheelGame {
    fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    fn handle_input(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        match key.code {
            KeyCode::Esc => self.start_next_puzzle(),
            // The solved board is on display; only a new puzzle gets through
            _ if self.next_puzzle_in.is_some() => {}
            KeyCode::Char(' ') => {
                let _ = self.round.spin();
            }
            KeyCode::Tab => {
                let _ = self.round.buy_vowel();
            }
            KeyCode::Enter => {
                let _ = self.round.solve();
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if let Ok(outcome) = self.round.guess(c) {
                    if outcome.solved() {
                        info!(score = self.round.score(), "showing solved board");
                        self.next_puzzle_in = Some(SOLVED_PAUSE);
                    }
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_tick(&mut self, dt: Duration) {
        if let Some(remaining) = self.next_puzzle_in {
            match remaining.checked_sub(dt) {
                Some(left) if !left.is_zero() => self.next_puzzle_in = Some(left),
                _ => self.start_next_puzzle(),
            }
            return;
        }
        self.round.advance_wheel();
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, &self.round, self.next_puzzle_in);
    }
}

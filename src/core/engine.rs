use crate::core::game::{Flow, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tracing::info;

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let tick_rate = self.game.tick_rate();
        let mut frames = tokio::time::interval(tick_rate);
        frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut last_tick = Instant::now();

        info!(?tick_rate, "frame loop started");
        loop {
            frames.tick().await;

            // INPUT: drain everything queued since the last frame
            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.game.handle_input(key) == Flow::Quit {
                        info!("quit requested");
                        return Ok(self.game);
                    }
                }
            }

            // TICK
            let dt = last_tick.elapsed();
            last_tick = Instant::now();
            self.game.on_tick(dt);

            // RENDER
            terminal.draw(|f| self.game.render(f))?;
        }
    }
}

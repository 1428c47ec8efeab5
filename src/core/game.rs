/// Core game interface for the wheelterm host
use std::time::Duration;

use crossterm::event::KeyEvent;

/// What the frame loop should do after a key has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A single-player game driven by the frame loop in [`crate::core::engine::Engine`].
///
/// Each frame the engine hands over every pending key, then ticks once, then renders.
pub trait Game {
    /// Frame interval; also the length of one `on_tick`.
    fn tick_rate(&self) -> Duration;

    fn handle_input(&mut self, key: KeyEvent) -> Flow;

    fn on_tick(&mut self, dt: Duration);

    fn render(&self, frame: &mut ratatui::Frame);
}

use rand::Rng;
use rand_core::RngCore;

/// Source of the game's random draws, swappable so rounds can be replayed.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform spin speed in `min..=max`.
    fn spin_speed(&mut self, min: f64, max: f64) -> f64;
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }

    fn spin_speed(&mut self, min: f64, max: f64) -> f64 {
        self.0.random_range(min..=max)
    }
}

/// Replays fixed draws in order, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    speeds: Vec<f64>,
    next_pick: usize,
    next_speed: usize,
}

impl ScriptedSource {
    pub fn new(picks: Vec<usize>, speeds: Vec<f64>) -> Self {
        Self { picks, speeds, next_pick: 0, next_speed: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        value.min(len.saturating_sub(1))
    }

    fn spin_speed(&mut self, min: f64, max: f64) -> f64 {
        if self.speeds.is_empty() {
            return min;
        }
        let value = self.speeds[self.next_speed % self.speeds.len()];
        self.next_speed += 1;
        value.clamp(min, max)
    }
}

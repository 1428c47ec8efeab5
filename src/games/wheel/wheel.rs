pub const WHEEL_VALUES: [u32; 12] = [500, 550, 600, 650, 700, 750, 800, 850, 900, 300, 400, 450];
pub const SPIN_SPEED_MIN: f64 = 15.0;
pub const SPIN_SPEED_MAX: f64 = 25.0;
pub const DECELERATION: f64 = 0.98;
pub const STOP_THRESHOLD: f64 = 0.1;

const FULL_TURN: f64 = 360.0;

pub fn segment_width() -> f64 {
    FULL_TURN / WHEEL_VALUES.len() as f64
}

/// Segment index for a wheel angle in degrees; any angle, including negative, maps into range.
pub fn segment_at(angle: f64) -> usize {
    let normalized = angle.rem_euclid(FULL_TURN);
    let segment = (normalized / segment_width()).floor() as usize;
    segment.min(WHEEL_VALUES.len() - 1)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelState {
    pub angle: f64,
    pub speed: f64,
    pub spinning: bool,
    /// Dollar value of the last completed spin, zero once consumed.
    pub value: u32,
}

impl WheelState {
    pub fn is_idle(&self) -> bool {
        !self.spinning
    }

    pub fn start(&mut self, speed: f64) {
        self.speed = speed;
        self.spinning = true;
        self.value = 0;
    }

    /// One animation tick. Returns the landed value on the tick the wheel stops.
    pub fn advance(&mut self) -> Option<u32> {
        if !self.spinning {
            return None;
        }

        self.angle += self.speed;
        self.speed *= DECELERATION;

        if self.speed < STOP_THRESHOLD {
            self.spinning = false;
            self.speed = 0.0;
            self.angle = self.angle.rem_euclid(FULL_TURN);
            self.value = WHEEL_VALUES[segment_at(self.angle)];
            return Some(self.value);
        }
        None
    }

    pub fn current_segment(&self) -> usize {
        segment_at(self.angle)
    }

    /// Back to idle with nothing to spend; the angle is kept so the wheel does not jump.
    pub fn reset(&mut self) {
        self.speed = 0.0;
        self.spinning = false;
        self.value = 0;
    }
}

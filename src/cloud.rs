use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;
use crate::animation::{Advance, Animation};
use crate::constants::*;
use crate::state::CloudPhase;

/// Screen dimensions, read once at startup.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pixel dimensions of a cloud sprite.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CloudSize {
    pub width: f32,
    pub height: f32,
}

impl CloudSize {
    pub fn square(side: f32) -> Self {
        Self { width: side, height: side }
    }
}

/// A cloud that waits a random delay, rises through the whole screen,
/// then starts over at a new horizontal position.
pub struct CloudLoop {
    size: CloudSize,
    viewport: Viewport,

    phase: CloudPhase,
    timer: f32,
    delay: f32,

    vertical_offset: f32,   // Distance of the cloud's bottom edge above the screen bottom
    horizontal_offset: f32, // Distance of the cloud's left edge from the screen left

    rng: StdRng,
}

// Uniform draw from [0, upper); degenerate ranges collapse to 0.
fn sample_below(rng: &mut StdRng, upper: f32) -> f32 {
    if upper > 0.0 {
        rng.random_range(0.0..upper)
    } else {
        0.0
    }
}

impl CloudLoop {
    pub fn new(size: CloudSize, viewport: Viewport) -> Self {
        let rng = StdRng::seed_from_u64(rand::rng().random());
        Self::with_rng(size, viewport, rng)
    }

    pub fn with_rng(size: CloudSize, viewport: Viewport, mut rng: StdRng) -> Self {
        let horizontal_offset = sample_below(&mut rng, viewport.width);
        let delay = sample_below(&mut rng, MAX_CLOUD_DELAY);

        Self {
            size,
            viewport,
            phase: CloudPhase::Delaying,
            timer: 0.0,
            delay,
            vertical_offset: -size.height,
            horizontal_offset,
            rng,
        }
    }

    pub fn size(&self) -> CloudSize {
        self.size
    }

    pub fn phase(&self) -> CloudPhase {
        self.phase
    }

    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    /// Delay (seconds) waited before the current cycle's rise.
    pub fn delay(&self) -> f32 {
        self.delay
    }

    fn start_offset(&self) -> f32 {
        -self.size.height
    }

    fn end_offset(&self) -> f32 {
        self.viewport.height + self.size.height
    }

    fn rise_value(&self, t: f32) -> f32 {
        let start = self.start_offset();
        let value = ease::linear_none(t, start, self.end_offset() - start, RISE_DURATION);
        value.clamp(start, self.end_offset())
    }

    fn complete_cycle(&mut self) {
        self.vertical_offset = self.end_offset();
        self.horizontal_offset = sample_below(&mut self.rng, self.size.width);
        self.delay = sample_below(&mut self.rng, MAX_CLOUD_DELAY);
        self.timer = 0.0;
        self.phase = CloudPhase::Delaying;
        log::debug!(
            "cloud {}px finished a rise; next at x={:.1} after {:.2}s",
            self.size.height, self.horizontal_offset, self.delay
        );
    }
}

impl Animation for CloudLoop {
    fn update(&mut self, dt: f32) -> Advance {
        let mut remaining = dt;

        loop {
            match self.phase {
                CloudPhase::Cancelled => return Advance::Cancelled,
                CloudPhase::Delaying => {
                    self.vertical_offset = self.start_offset();
                    let left = self.delay - self.timer;
                    if remaining < left {
                        self.timer += remaining;
                        return Advance::Running;
                    }
                    remaining -= left;
                    self.timer = 0.0;
                    self.phase = CloudPhase::Rising;
                }
                CloudPhase::Rising => {
                    let left = RISE_DURATION - self.timer;
                    if remaining < left {
                        self.timer += remaining;
                        self.vertical_offset = self.rise_value(self.timer);
                        return Advance::Running;
                    }
                    // The rest of this frame is dropped; the next cycle starts on the next update
                    self.complete_cycle();
                    return Advance::Completed;
                }
            }
        }
    }

    fn cancel(&mut self) {
        self.phase = CloudPhase::Cancelled;
    }

    fn is_cancelled(&self) -> bool {
        self.phase == CloudPhase::Cancelled
    }
}

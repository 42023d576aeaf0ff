/// Outcome of advancing an animation by one frame.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Advance {
    /// Still running; values may have changed.
    Running,
    /// A timed leg ran to its end on this frame without interruption.
    Completed,
    /// The animation was cancelled; values are frozen.
    Cancelled,
}

/// A looping, frame-driven animation.
pub trait Animation {
    /// Advance the animation clock by `dt` seconds.
    fn update(&mut self, dt: f32) -> Advance;

    /// Stop the animation. Subsequent updates leave every value untouched.
    fn cancel(&mut self);

    fn is_cancelled(&self) -> bool;
}

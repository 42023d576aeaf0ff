#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CloudPhase {
    Delaying,  // Resting below the screen, waiting out this cycle's delay
    Rising,    // Moving up towards the top edge
    Cancelled, // Interrupted, no further updates
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SwayDirection {
    Forward, // -45 towards +45
    Reverse, // +45 towards -45
}

//! Input events consumed by the frame loop

/// Events the frame loop dispatches on. Anything else the window system
/// reports is dropped before it reaches the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Any pointer button pressed; arms spawning.
    PointerDown,
    /// Any pointer button released; disarms spawning.
    PointerUp,
}

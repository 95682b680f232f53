//! Render steps emitted by the state machine

use heapless::Vec;

/// Upper bound on steps from a single tick (the wraparound tick needs 4)
pub const MAX_STEPS_PER_TICK: usize = 4;

/// Ordered render work for one tick
pub type Steps = Vec<RenderStep, MAX_STEPS_PER_TICK>;

/// One unit of render work, executed in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderStep {
    /// Blank the panel
    Clear,
    /// Draw the stored image at this index of the image list
    Image(usize),
    /// Draw the fractal preset at this index
    Fractal(usize),
}

use crate::sdp::timing::{Repeat, Timing};
use crate::sdp::util::list_property;

/// Represents a time description: one `t=` line and the `r=` lines that follow it.
///
/// Time descriptions are always session-level; `z=` lines are kept on the
/// session because they apply to every time description at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDescription {
    timing: Timing,
    repeats: Option<Vec<Repeat>>, // r= lines in arrival order
}

impl TimeDescription {
    /// Time description with no repeats yet.
    pub const fn new(timing: Timing) -> Self {
        Self {
            timing,
            repeats: Some(Vec::new()),
        }
    }

    /// Unbounded `t=0 0` with no repeats.
    pub const fn new_blank() -> Self {
        Self::new(Timing::new(0, 0))
    }

    // --- GETTERS ---
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }

    // --- SETTERS ---
    pub const fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    list_property!(repeats, repeats_mut, set_repeats, add_repeat, Repeat);
}

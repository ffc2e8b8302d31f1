//! Application state management.
//!
//! State is organized into logical groupings that correspond to different
//! areas of the page. The map lifecycle keeps its own state machine in
//! [`crate::map`].

mod impact;
mod scroll;

pub use impact::{ImpactState, ImpactTab};
pub use scroll::ScrollState;

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Page scroll position and pending section jumps.
    pub scroll: ScrollState,

    /// Impact section tab and count-up animations.
    pub impact: ImpactState,
}

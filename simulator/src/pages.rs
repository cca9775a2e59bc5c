//! Page navigation for the simulator window.
//!
//! Press `L` to toggle between the watch face and the log view.

/// Available pages in the simulator.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The watch face with its status overlay.
    #[default]
    Face,

    /// Recent log entries and paint counters.
    Log,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Log,
            Self::Log => Self::Face,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Log => "log",
        }
    }
}

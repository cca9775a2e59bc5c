//! User-facing display settings and the tick granularity they imply.

/// Which optional elements the face draws.
///
/// Replaced wholesale by each valid configuration message; there is no
/// partial update.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Draw the second hand (and tick every second).
    pub show_seconds: bool,
    /// Draw the digital 12-hour time at the top.
    pub show_weekday: bool,
    /// Draw the day of month at the right edge.
    pub show_date: bool,
    /// Draw the weekday abbreviation at the left edge.
    pub show_month_abbrev: bool,
}

impl Settings {
    pub const DEFAULT: Self = Self {
        show_seconds: true,
        show_weekday: true,
        show_date: false,
        show_month_abbrev: false,
    };

    /// Tick granularity needed to keep the face current.
    pub const fn tick_unit(&self) -> TickUnit {
        if self.show_seconds {
            TickUnit::Second
        } else {
            TickUnit::Minute
        }
    }
}

impl Default for Settings {
    fn default() -> Self { Self::DEFAULT }
}

/// Granularity of the periodic tick. Second and minute subscriptions are
/// mutually exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickUnit {
    Second,
    Minute,
}

impl TickUnit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
        }
    }
}

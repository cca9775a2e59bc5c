//! Wall-clock time and the text formats drawn on the face.
//!
//! Formatting writes into fixed-size `heapless::String`s through
//! `core::fmt::Write`, so nothing here allocates.

use core::fmt::Write;

use heapless::String;

/// Capacity of the formatted time text (`"12:59pm"` is 7 bytes).
pub const TIME_TEXT_LEN: usize = 8;

/// Capacity of the day-of-month and weekday texts.
pub const SHORT_TEXT_LEN: usize = 4;

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Local wall-clock time broken into the fields the face needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Day of week, Sunday = 0.
    pub weekday: u8,
}

impl WallTime {
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            day: 1,
            weekday: 0,
        }
    }

    /// Same time of day on a given calendar day.
    #[must_use]
    pub const fn on_day(
        self,
        day: u8,
        weekday: u8,
    ) -> Self {
        Self { day, weekday, ..self }
    }

    /// Hour on a 12-hour dial, 1-12.
    pub const fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub const fn is_pm(&self) -> bool { self.hour >= 12 }
}

/// Source of the current wall-clock time.
///
/// The face samples the clock when it paints, never when the repaint is
/// requested.
pub trait Clock {
    fn now(&self) -> WallTime;
}

/// Clock that always reports the same time. Used by tests and previews.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub WallTime);

impl Clock for FixedClock {
    fn now(&self) -> WallTime { self.0 }
}

/// Format as space-padded 12-hour time with lowercase period, e.g. `" 9:05am"`.
pub fn format_time_12h(time: &WallTime) -> String<TIME_TEXT_LEN> {
    let mut text = String::new();
    let period = if time.is_pm() { "pm" } else { "am" };
    let _ = write!(text, "{:>2}:{:02}{}", time.hour12(), time.minute % 60, period);
    text
}

/// Format the zero-padded day of month, e.g. `"07"`.
pub fn format_day(time: &WallTime) -> String<SHORT_TEXT_LEN> {
    let mut text = String::new();
    let _ = write!(text, "{:02}", time.day % 100);
    text
}

/// Format the weekday abbreviation with its first letter lowercased, e.g. `"fri"`.
pub fn format_weekday(time: &WallTime) -> String<SHORT_TEXT_LEN> {
    let name = WEEKDAY_ABBREVIATIONS[usize::from(time.weekday % 7)];
    let mut text = String::new();
    let _ = text.push_str(name);
    lowercase_first(&mut text);
    text
}

/// Lowercase the first character if it is ASCII. Anything else is left alone.
pub fn lowercase_first<const N: usize>(text: &mut String<N>) {
    let mut lowered: String<N> = String::new();
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        let _ = lowered.push(first.to_ascii_lowercase());
        let _ = lowered.push_str(chars.as_str());
        *text = lowered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_morning() {
        assert_eq!(format_time_12h(&WallTime::new(10, 5, 30)).as_str(), "10:05am");
    }

    #[test]
    fn test_format_time_space_padded() {
        assert_eq!(format_time_12h(&WallTime::new(21, 7, 0)).as_str(), " 9:07pm");
    }

    #[test]
    fn test_format_time_midnight_and_noon() {
        assert_eq!(format_time_12h(&WallTime::new(0, 0, 0)).as_str(), "12:00am");
        assert_eq!(format_time_12h(&WallTime::new(12, 30, 0)).as_str(), "12:30pm");
    }

    #[test]
    fn test_format_day_zero_padded() {
        let time = WallTime::new(8, 0, 0).on_day(7, 3);
        assert_eq!(format_day(&time).as_str(), "07");
        let time = WallTime::new(8, 0, 0).on_day(31, 3);
        assert_eq!(format_day(&time).as_str(), "31");
    }

    #[test]
    fn test_format_weekday_lowercases_first_letter() {
        let friday = WallTime::new(8, 0, 0).on_day(16, 5);
        assert_eq!(format_weekday(&friday).as_str(), "fri");
        let sunday = WallTime::new(8, 0, 0).on_day(18, 0);
        assert_eq!(format_weekday(&sunday).as_str(), "sun");
    }

    #[test]
    fn test_lowercase_first_ignores_non_ascii() {
        let mut text: String<8> = String::new();
        text.push_str("Ätt").unwrap();
        lowercase_first(&mut text);
        assert_eq!(text.as_str(), "Ätt");
    }

    #[test]
    fn test_lowercase_first_empty() {
        let mut text: String<8> = String::new();
        lowercase_first(&mut text);
        assert!(text.is_empty());
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(WallTime::new(1, 2, 3));
        assert_eq!(clock.now(), WallTime::new(1, 2, 3));
    }
}

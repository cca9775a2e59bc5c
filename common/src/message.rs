//! Inbound configuration messages.
//!
//! A message is a dictionary of `(key, value)` tuples as delivered by the
//! companion app. Four integer keys select the optional face elements:
//!
//! | Key | Setting |
//! |-----|---------|
//! | 0 | `show_seconds` |
//! | 1 | `show_weekday` |
//! | 2 | `show_date` |
//! | 3 | `show_month_abbrev` |
//!
//! Only the integer `1` means "on". A message missing any of the four keys is
//! rejected as a whole so settings never end up half-applied.

use crate::error::ConfigError;
use crate::settings::Settings;

pub const KEY_SECONDS: u32 = 0;
pub const KEY_WEEKDAY: u32 = 1;
pub const KEY_DATE: u32 = 2;
pub const KEY_MONTH: u32 = 3;

/// Value carried by a message tuple.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TupleValue<'a> {
    Int(i32),
    UInt(u32),
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl TupleValue<'_> {
    /// Integer view of the value. `UInt` values above `i32::MAX` are not 1, so
    /// wrapping them is harmless.
    pub const fn as_int(&self) -> Option<i32> {
        match *self {
            Self::Int(v) => Some(v),
            Self::UInt(v) => Some(v as i32),
            Self::Text(_) | Self::Bytes(_) => None,
        }
    }
}

/// One key/value entry of a message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tuple<'a> {
    pub key: u32,
    pub value: TupleValue<'a>,
}

impl<'a> Tuple<'a> {
    pub const fn int(
        key: u32,
        value: i32,
    ) -> Self {
        Self {
            key,
            value: TupleValue::Int(value),
        }
    }

    pub const fn new(
        key: u32,
        value: TupleValue<'a>,
    ) -> Self {
        Self { key, value }
    }
}

/// Borrowed view over the tuples of one inbound message.
#[derive(Clone, Copy, Debug)]
pub struct Dictionary<'a> {
    tuples: &'a [Tuple<'a>],
}

impl<'a> Dictionary<'a> {
    pub const fn new(tuples: &'a [Tuple<'a>]) -> Self { Self { tuples } }

    /// First tuple with the given key.
    pub fn find(
        &self,
        key: u32,
    ) -> Option<&'a Tuple<'a>> {
        self.tuples.iter().find(|t| t.key == key)
    }

    pub const fn len(&self) -> usize { self.tuples.len() }

    pub const fn is_empty(&self) -> bool { self.tuples.is_empty() }

    fn flag(
        &self,
        key: u32,
    ) -> Result<bool, ConfigError> {
        let tuple = self.find(key).ok_or(ConfigError::MissingKey(key))?;
        let value = tuple.value.as_int().ok_or(ConfigError::NotAnInteger(key))?;
        Ok(value == 1)
    }
}

/// Decode a full [`Settings`] from a configuration message.
pub fn parse_settings(dict: &Dictionary<'_>) -> Result<Settings, ConfigError> {
    Ok(Settings {
        show_seconds: dict.flag(KEY_SECONDS)?,
        show_weekday: dict.flag(KEY_WEEKDAY)?,
        show_date: dict.flag(KEY_DATE)?,
        show_month_abbrev: dict.flag(KEY_MONTH)?,
    })
}

/// Encode settings as the four tuples a companion app would send.
pub const fn settings_tuples(settings: &Settings) -> [Tuple<'static>; 4] {
    [
        Tuple::int(KEY_SECONDS, settings.show_seconds as i32),
        Tuple::int(KEY_WEEKDAY, settings.show_weekday as i32),
        Tuple::int(KEY_DATE, settings.show_date as i32),
        Tuple::int(KEY_MONTH, settings.show_month_abbrev as i32),
    ]
}

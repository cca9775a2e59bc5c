//! Error types for configuration ingest and asset validation.
//!
//! Variants carry only fixed-size data so the types stay `Copy` and
//! `no_std`. With the `defmt` feature they also implement `defmt::Format`.

use core::fmt;

/// Inbound configuration message rejected. The previous settings stay in
/// effect.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A required key was absent from the message.
    MissingKey(u32),
    /// A required key carried a non-integer value.
    NotAnInteger(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::MissingKey(key) => write!(f, "config key {key} missing"),
            Self::NotAnInteger(key) => write!(f, "config key {key} not an int"),
        }
    }
}

/// Which image an [`AssetError`] refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetKind {
    Background,
    Battery,
    BatteryCharging,
    Bluetooth,
}

impl AssetKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Battery => "battery",
            Self::BatteryCharging => "battery_charging",
            Self::Bluetooth => "bluetooth",
        }
    }
}

/// Image data does not match the dimensions the layout expects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    WrongSize {
        asset: AssetKind,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for AssetError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::WrongSize {
                asset,
                expected,
                actual,
            } => write!(
                f,
                "{} image is {actual} bytes, expected {expected}",
                asset.name()
            ),
        }
    }
}

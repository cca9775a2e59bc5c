//! Device status (battery, bluetooth) and the overlay state derived from it.
//!
//! [`Status`] holds what the platform reported. [`StatusOverlay`] holds what
//! the status layers currently show. The two differ on purpose: a full
//! battery always shows the normal icon, and a 100% report leaves the gauge
//! visibility untouched.

use crate::config::GAUGE_MAX_WIDTH;

/// One battery report from the platform.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryCharge {
    /// State of charge, 0-100.
    pub percent: u8,
    pub charging: bool,
}

impl BatteryCharge {
    pub const fn new(
        percent: u8,
        charging: bool,
    ) -> Self {
        Self { percent, charging }
    }

    /// Full battery. Shown as full even while still plugged in.
    pub const fn is_full(&self) -> bool { self.percent >= 100 }
}

/// Last reported device status.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    pub battery_percent: u8,
    pub is_charging: bool,
    pub bluetooth_connected: bool,
}

/// Battery image shown in the battery layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryIcon {
    #[default]
    Normal,
    Charging,
}

/// Visible state of the battery and bluetooth layers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusOverlay {
    pub battery_icon: BatteryIcon,
    /// Gauge bar hidden (the charging icon speaks for itself).
    pub gauge_hidden: bool,
    pub bluetooth_icon_hidden: bool,
}

impl StatusOverlay {
    /// Apply a battery report.
    ///
    /// At 100% only the icon changes (forced to normal); gauge visibility keeps
    /// whatever the previous report set.
    pub fn apply_battery(
        &mut self,
        charge: BatteryCharge,
    ) {
        if charge.is_full() {
            self.battery_icon = BatteryIcon::Normal;
            return;
        }

        self.gauge_hidden = charge.charging;
        self.battery_icon = if charge.charging {
            BatteryIcon::Charging
        } else {
            BatteryIcon::Normal
        };
    }

    /// Apply a bluetooth report. The icon only shows while disconnected.
    pub fn apply_bluetooth(
        &mut self,
        connected: bool,
    ) {
        self.bluetooth_icon_hidden = connected;
    }
}

/// Gauge bar width for a battery percentage, rounded to the nearest pixel.
pub const fn gauge_width(percent: u8) -> u32 {
    let percent = if percent > 100 { 100 } else { percent as u32 };
    (percent * GAUGE_MAX_WIDTH + 50) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_width_bounds() {
        assert_eq!(gauge_width(0), 0);
        assert_eq!(gauge_width(100), GAUGE_MAX_WIDTH);
        assert_eq!(gauge_width(255), GAUGE_MAX_WIDTH);
    }

    #[test]
    fn test_gauge_width_rounds() {
        // 50% of 11 = 5.5
        assert_eq!(gauge_width(50), 6);
        // 4% of 11 = 0.44
        assert_eq!(gauge_width(4), 0);
        // 5% of 11 = 0.55
        assert_eq!(gauge_width(5), 1);
    }

    #[test]
    fn test_gauge_width_monotonic() {
        let mut prev = 0;
        for percent in 0..=100 {
            let width = gauge_width(percent);
            assert!(width >= prev, "width dropped at {percent}%");
            prev = width;
        }
    }

    #[test]
    fn test_charging_hides_gauge() {
        let mut overlay = StatusOverlay::default();
        overlay.apply_battery(BatteryCharge::new(40, true));
        assert_eq!(overlay.battery_icon, BatteryIcon::Charging);
        assert!(overlay.gauge_hidden);

        overlay.apply_battery(BatteryCharge::new(40, false));
        assert_eq!(overlay.battery_icon, BatteryIcon::Normal);
        assert!(!overlay.gauge_hidden);
    }

    #[test]
    fn test_full_battery_forces_normal_icon() {
        let mut overlay = StatusOverlay::default();
        overlay.apply_battery(BatteryCharge::new(99, true));
        overlay.apply_battery(BatteryCharge::new(100, true));
        assert_eq!(overlay.battery_icon, BatteryIcon::Normal);
        assert!(overlay.gauge_hidden, "100% keeps the previous visibility");
    }

    #[test]
    fn test_full_battery_from_cold_start_shows_gauge() {
        let mut overlay = StatusOverlay::default();
        overlay.apply_battery(BatteryCharge::new(100, true));
        assert_eq!(overlay.battery_icon, BatteryIcon::Normal);
        assert!(!overlay.gauge_hidden);
    }

    #[test]
    fn test_bluetooth_icon_only_when_disconnected() {
        let mut overlay = StatusOverlay::default();
        overlay.apply_bluetooth(true);
        assert!(overlay.bluetooth_icon_hidden);
        overlay.apply_bluetooth(false);
        assert!(!overlay.bluetooth_icon_hidden);
    }
}

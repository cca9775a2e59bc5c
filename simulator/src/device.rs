//! Simulated platform services: battery and bluetooth sources and the
//! companion app that sends configuration messages.

use watchface_common::message::{KEY_DATE, settings_tuples};
use watchface_common::{BatteryCharge, Event, Settings, Tuple, TupleValue};

/// Battery level at start-up.
const INITIAL_PERCENT: u8 = 80;

/// Source of battery and bluetooth state, driven from the keyboard.
#[derive(Debug)]
pub struct Device {
    battery: BatteryCharge,
    bluetooth_connected: bool,
}

impl Device {
    pub const fn new() -> Self {
        Self {
            battery: BatteryCharge::new(INITIAL_PERCENT, false),
            bluetooth_connected: true,
        }
    }

    /// Synchronous peek used at start-up.
    pub const fn peek(&self) -> (BatteryCharge, bool) { (self.battery, self.bluetooth_connected) }

    /// Change the charge by `delta` percent, clamped to 0..=100.
    pub fn adjust_battery(
        &mut self,
        delta: i16,
    ) -> Event {
        let percent = (i16::from(self.battery.percent) + delta).clamp(0, 100) as u8;
        self.battery = BatteryCharge::new(percent, self.battery.charging);
        Event::BatteryChanged(self.battery)
    }

    pub fn toggle_charging(&mut self) -> Event {
        self.battery = BatteryCharge::new(self.battery.percent, !self.battery.charging);
        Event::BatteryChanged(self.battery)
    }

    pub fn toggle_bluetooth(&mut self) -> Event {
        self.bluetooth_connected = !self.bluetooth_connected;
        Event::BluetoothChanged(self.bluetooth_connected)
    }
}

impl Default for Device {
    fn default() -> Self { Self::new() }
}

/// Complete config message for `settings` with the flag at `key` flipped.
pub fn toggled_message(
    settings: &Settings,
    key: u32,
) -> [Tuple<'static>; 4] {
    let mut tuples = settings_tuples(settings);
    for tuple in tuples.iter_mut().filter(|t| t.key == key) {
        let on = tuple.value == TupleValue::Int(1);
        *tuple = Tuple::int(key, i32::from(!on));
    }
    tuples
}

/// Config message for `settings` with the date key left out.
pub fn malformed_message(settings: &Settings) -> Vec<Tuple<'static>> {
    settings_tuples(settings).into_iter().filter(|t| t.key != KEY_DATE).collect()
}

//! Keyboard bindings.
//!
//! | Key | Action |
//! |-----|--------|
//! | `U` / `D` | Battery +5 % / -5 % |
//! | `C` | Toggle charging |
//! | `B` | Toggle bluetooth connection |
//! | `S` `W` `T` `M` | Send config with seconds / weekday / date / month toggled |
//! | `X` | Send a config message missing the date key |
//! | `L` | Toggle face / log page |

use embedded_graphics_simulator::sdl2::Keycode;
use watchface_common::message::{KEY_DATE, KEY_MONTH, KEY_SECONDS, KEY_WEEKDAY};

/// Battery change per key press, in percent.
pub const BATTERY_STEP: i16 = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    AdjustBattery(i16),
    ToggleCharging,
    ToggleBluetooth,
    /// Send a complete config message with the flag at this key flipped.
    ToggleSetting(u32),
    SendMalformedConfig,
    TogglePage,
}

pub fn command_for(keycode: Keycode) -> Option<Command> {
    let command = match keycode {
        Keycode::U => Command::AdjustBattery(BATTERY_STEP),
        Keycode::D => Command::AdjustBattery(-BATTERY_STEP),
        Keycode::C => Command::ToggleCharging,
        Keycode::B => Command::ToggleBluetooth,
        Keycode::S => Command::ToggleSetting(KEY_SECONDS),
        Keycode::W => Command::ToggleSetting(KEY_WEEKDAY),
        Keycode::T => Command::ToggleSetting(KEY_DATE),
        Keycode::M => Command::ToggleSetting(KEY_MONTH),
        Keycode::X => Command::SendMalformedConfig,
        Keycode::L => Command::TogglePage,
        _ => return None,
    };
    Some(command)
}

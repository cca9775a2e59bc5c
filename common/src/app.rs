//! Application state and the single event-driven transition function.
//!
//! Every callback the platform delivers becomes an [`Event`]. [`AppState::update`]
//! is the only writer of settings and status, and it returns a [`Transition`]
//! telling the event loop what to do next: which layers to repaint, whether
//! to vibrate, and whether to change the tick subscription. Nothing is drawn
//! here; repaints are deferred to the loop's paint pass.
//!
//! | Event | Writes | Effects |
//! |-------|--------|---------|
//! | `Tick` | nothing | repaint face |
//! | `ConfigReceived` | settings | resubscribe tick, repaint face |
//! | `BatteryChanged` | battery status, battery overlay | repaint battery layers |
//! | `BluetoothChanged` | bluetooth status, bluetooth overlay | repaint bluetooth layer, vibrate on disconnect |

use crate::log_buffer::LogBuffer;
use crate::message::{Dictionary, parse_settings};
use crate::settings::{Settings, TickUnit};
use crate::status::{BatteryCharge, Status, StatusOverlay};
use crate::{log_debug, log_info, log_warn};

/// Input to the state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Periodic timer fired.
    Tick,
    /// A validated configuration message arrived.
    ConfigReceived(Settings),
    /// Battery subscription callback.
    BatteryChanged(BatteryCharge),
    /// Bluetooth subscription callback.
    BluetoothChanged(bool),
}

/// Layers that need repainting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Redraw {
    pub face: bool,
    pub battery: bool,
    pub bluetooth: bool,
}

impl Redraw {
    pub const ALL: Self = Self {
        face: true,
        battery: true,
        bluetooth: true,
    };

    pub const fn any(&self) -> bool { self.face || self.battery || self.bluetooth }

    /// Union of two requests.
    #[must_use]
    pub const fn merge(
        self,
        other: Self,
    ) -> Self {
        Self {
            face: self.face || other.face,
            battery: self.battery || other.battery,
            bluetooth: self.bluetooth || other.bluetooth,
        }
    }
}

/// What the event loop must do after an event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub redraw: Redraw,
    /// Fire one long vibration pulse.
    pub vibrate: bool,
    /// Replace the tick subscription with this unit.
    pub resubscribe: Option<TickUnit>,
}

impl Transition {
    pub const fn render_requested(&self) -> bool { self.redraw.any() }
}

/// Everything the face knows, owned by the top-level controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppState {
    pub settings: Settings,
    pub status: Status,
    pub overlay: StatusOverlay,
}

impl AppState {
    /// Start-up: apply the synchronous battery and bluetooth peeks and
    /// subscribe to second ticks. The initial peek never vibrates.
    pub fn boot(
        battery: BatteryCharge,
        bluetooth_connected: bool,
    ) -> (Self, Transition) {
        let mut state = Self {
            settings: Settings::default(),
            status: Status::default(),
            overlay: StatusOverlay::default(),
        };
        state.apply_bluetooth(bluetooth_connected);
        state.apply_battery(battery);

        let transition = Transition {
            redraw: Redraw::ALL,
            vibrate: false,
            resubscribe: Some(TickUnit::Second),
        };
        (state, transition)
    }

    /// Apply one event.
    pub fn update(
        &mut self,
        event: Event,
    ) -> Transition {
        match event {
            Event::Tick => Transition {
                redraw: Redraw {
                    face: true,
                    ..Redraw::default()
                },
                ..Transition::default()
            },
            Event::ConfigReceived(settings) => {
                self.settings = settings;
                Transition {
                    redraw: Redraw {
                        face: true,
                        ..Redraw::default()
                    },
                    vibrate: false,
                    resubscribe: Some(settings.tick_unit()),
                }
            }
            Event::BatteryChanged(charge) => {
                self.apply_battery(charge);
                Transition {
                    redraw: Redraw {
                        battery: true,
                        ..Redraw::default()
                    },
                    ..Transition::default()
                }
            }
            Event::BluetoothChanged(connected) => {
                let was_connected = self.status.bluetooth_connected;
                self.apply_bluetooth(connected);
                Transition {
                    redraw: Redraw {
                        bluetooth: true,
                        ..Redraw::default()
                    },
                    vibrate: was_connected && !connected,
                    resubscribe: None,
                }
            }
        }
    }

    /// Config ingest: validate an inbound message and apply it. A malformed
    /// message is logged and dropped; settings stay as they were.
    pub fn ingest(
        &mut self,
        dict: &Dictionary<'_>,
        log: &mut LogBuffer,
    ) -> Transition {
        log_info!(log, "inbox: {} tuples", dict.len());
        match parse_settings(dict) {
            Ok(settings) => {
                log_debug!(
                    log,
                    "cfg s={} w={} d={} m={}",
                    settings.show_seconds,
                    settings.show_weekday,
                    settings.show_date,
                    settings.show_month_abbrev
                );
                self.update(Event::ConfigReceived(settings))
            }
            Err(err) => {
                log_warn!(log, "config ignored: {}", err);
                Transition::default()
            }
        }
    }

    fn apply_battery(
        &mut self,
        charge: BatteryCharge,
    ) {
        self.status.battery_percent = charge.percent.min(100);
        self.status.is_charging = charge.charging;
        self.overlay.apply_battery(charge);
    }

    fn apply_bluetooth(
        &mut self,
        connected: bool,
    ) {
        self.status.bluetooth_connected = connected;
        self.overlay.apply_bluetooth(connected);
    }
}

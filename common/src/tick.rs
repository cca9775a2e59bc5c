//! Periodic tick subscription.
//!
//! Emulates a platform tick service on top of a polled clock: the event loop
//! calls [`TickTimer::poll`] with the current time and gets `true` once each
//! time the subscribed unit rolls over. Only one subscription exists at a
//! time; subscribing again replaces (cancels) the previous one.

use crate::settings::TickUnit;
use crate::time::WallTime;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Mark {
    hour: u8,
    minute: u8,
    second: Option<u8>,
}

impl Mark {
    const fn of(
        time: &WallTime,
        unit: TickUnit,
    ) -> Self {
        Self {
            hour: time.hour,
            minute: time.minute,
            second: match unit {
                TickUnit::Second => Some(time.second),
                TickUnit::Minute => None,
            },
        }
    }
}

/// Single tick subscription at second or minute granularity.
#[derive(Debug, Default)]
pub struct TickTimer {
    unit: Option<TickUnit>,
    last: Option<Mark>,
}

impl TickTimer {
    pub const fn new() -> Self { Self { unit: None, last: None } }

    /// Subscribe at `unit`, cancelling any previous subscription. The next
    /// poll arms the timer; the first tick fires at the following boundary.
    pub fn subscribe(
        &mut self,
        unit: TickUnit,
    ) {
        self.unit = Some(unit);
        self.last = None;
    }

    pub fn unsubscribe(&mut self) {
        self.unit = None;
        self.last = None;
    }

    pub const fn unit(&self) -> Option<TickUnit> { self.unit }

    /// Returns `true` when `now` crossed a boundary of the subscribed unit
    /// since the previous poll.
    pub fn poll(
        &mut self,
        now: &WallTime,
    ) -> bool {
        let Some(unit) = self.unit else {
            return false;
        };
        let mark = Mark::of(now, unit);
        match self.last.replace(mark) {
            None => false,
            Some(previous) => previous != mark,
        }
    }
}

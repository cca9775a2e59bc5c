//! Wall clock backed by the host's local time zone.

use chrono::{Datelike, Local, Timelike};
use watchface_common::{Clock, WallTime};

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
            .on_day(now.day() as u8, now.weekday().num_days_from_sunday() as u8)
    }
}

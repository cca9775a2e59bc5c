//! Analog hand geometry.
//!
//! Angles use the fixed-point convention of small watch platforms: a full
//! turn is [`TRIG_MAX_ANGLE`] units and trig results are scaled to
//! [`TRIG_MAX_RATIO`]. Angle 0 points straight up and grows clockwise, so a
//! hand tip is `center + (len * sin, -len * cos)`.
//!
//! # Thick hands
//!
//! Minute and hour hands are drawn as two parallel 1px lines. A 2px stroke
//! rotated badly, so the twin line is shifted one pixel either sideways or
//! down depending on which quarter the hand points into:
//!
//! | Hand | Horizontal `(+1, 0)` | Vertical `(0, +1)` |
//! |------|----------------------|--------------------|
//! | Minute | `m < 10`, `20 < m < 40`, `m > 50` | otherwise |
//! | Hour | `h < 2`, `4 <= h <= 8`, `h > 10` | otherwise |
//!
//! The hour rule works on the raw 0-23 hour, exactly as the buckets above
//! read. It is a coarse stand-in for a perpendicular offset and is kept as-is
//! because the face is tuned around it.

use core::f32::consts::TAU;

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Line;
use heapless::Vec;

use crate::config::{HAND_CENTER, HOUR_HAND_LENGTH, MINUTE_HAND_LENGTH, SECOND_HAND_LENGTH};
use crate::time::WallTime;

/// Angle units in one full turn.
pub const TRIG_MAX_ANGLE: i32 = 0x1_0000;

/// Scale of [`sin_lookup`] / [`cos_lookup`] results (1.0 == `TRIG_MAX_RATIO`).
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// Most lines the face strokes: second, minute, hour, minute twin, hour twin.
pub const MAX_HAND_LINES: usize = 5;

// =============================================================================
// Angles
// =============================================================================

/// Second hand angle, one step per second.
pub const fn second_angle(second: u8) -> i32 { TRIG_MAX_ANGLE * second as i32 / 60 }

/// Minute hand angle, one step per minute.
pub const fn minute_angle(minute: u8) -> i32 { TRIG_MAX_ANGLE * minute as i32 / 60 }

/// Hour hand angle.
///
/// The dial is split into 72 steps (6 per hour), so the hand advances every
/// ten minutes instead of jumping once per hour.
pub const fn hour_angle(
    hour: u8,
    minute: u8,
) -> i32 {
    let steps = (hour as i32 % 12) * 6 + minute as i32 / 10;
    TRIG_MAX_ANGLE * steps / (12 * 6)
}

/// Convert fixed-point angle units to radians.
pub fn angle_to_radians(angle: i32) -> f32 { angle as f32 * TAU / TRIG_MAX_ANGLE as f32 }

/// Sine of a fixed-point angle, scaled to `TRIG_MAX_RATIO`.
pub fn sin_lookup(angle: i32) -> i32 {
    libm::roundf(libm::sinf(angle_to_radians(angle)) * TRIG_MAX_RATIO as f32) as i32
}

/// Cosine of a fixed-point angle, scaled to `TRIG_MAX_RATIO`.
pub fn cos_lookup(angle: i32) -> i32 {
    libm::roundf(libm::cosf(angle_to_radians(angle)) * TRIG_MAX_RATIO as f32) as i32
}

/// Tip of a hand of `length` pixels at `angle`. Integer division truncates
/// toward zero, matching the platform's fixed-point math.
pub fn hand_endpoint(
    center: Point,
    angle: i32,
    length: i32,
) -> Point {
    let x = sin_lookup(angle) * length / TRIG_MAX_RATIO;
    let y = -cos_lookup(angle) * length / TRIG_MAX_RATIO;
    Point::new(center.x + x, center.y + y)
}

// =============================================================================
// Thickening
// =============================================================================

/// Direction of the twin line next to a thick hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TwinOffset {
    Horizontal,
    Vertical,
}

impl TwinOffset {
    pub const fn delta(self) -> Point {
        match self {
            Self::Horizontal => Point::new(1, 0),
            Self::Vertical => Point::new(0, 1),
        }
    }
}

/// Twin line direction for the minute hand.
pub const fn minute_twin_offset(minute: u8) -> TwinOffset {
    if (minute > 20 && minute < 40) || minute < 10 || minute > 50 {
        TwinOffset::Horizontal
    } else {
        TwinOffset::Vertical
    }
}

/// Twin line direction for the hour hand (raw 0-23 hour).
pub const fn hour_twin_offset(hour: u8) -> TwinOffset {
    if (hour >= 4 && hour <= 8) || hour < 2 || hour > 10 {
        TwinOffset::Horizontal
    } else {
        TwinOffset::Vertical
    }
}

// =============================================================================
// Hand Lines
// =============================================================================

/// Tips of all three hands for a given time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandTips {
    pub second: Point,
    pub minute: Point,
    pub hour: Point,
}

impl HandTips {
    pub fn at(time: &WallTime) -> Self {
        Self {
            second: hand_endpoint(HAND_CENTER, second_angle(time.second), SECOND_HAND_LENGTH),
            minute: hand_endpoint(HAND_CENTER, minute_angle(time.minute), MINUTE_HAND_LENGTH),
            hour: hand_endpoint(HAND_CENTER, hour_angle(time.hour, time.minute), HOUR_HAND_LENGTH),
        }
    }
}

/// Lines to stroke, in drawing order: second (optional), minute, hour, then
/// the minute and hour twins.
pub fn hand_lines(
    time: &WallTime,
    show_seconds: bool,
) -> Vec<Line, MAX_HAND_LINES> {
    let tips = HandTips::at(time);
    let mut lines = Vec::new();

    if show_seconds {
        let _ = lines.push(Line::new(HAND_CENTER, tips.second));
    }
    let _ = lines.push(Line::new(HAND_CENTER, tips.minute));
    let _ = lines.push(Line::new(HAND_CENTER, tips.hour));

    let minute_delta = minute_twin_offset(time.minute).delta();
    let _ = lines.push(Line::new(HAND_CENTER + minute_delta, tips.minute + minute_delta));

    let hour_delta = hour_twin_offset(time.hour).delta();
    let _ = lines.push(Line::new(HAND_CENTER + hour_delta, tips.hour + hour_delta));

    lines
}

//! Display geometry and layout constants.
//!
//! Every position on the face is fixed at compile time. Layer frames and text
//! boxes are expressed as `const Rectangle` values so drawing code never builds
//! them per frame.
//!
//! # Compile-Time Validation
//!
//! Each group ends with `const` assertions (hand lengths ordered, frames on
//! screen). A bad edit fails the build instead of drawing off-screen.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Full-screen rectangle, used for the background blit and the face layer.
pub const SCREEN_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

// =============================================================================
// Hands
// =============================================================================

/// Shared pivot of all three hands. Sits below the screen center to leave room
/// for the digital time at the top.
pub const HAND_CENTER: Point = Point::new(71, 99);

/// Second hand length in pixels.
pub const SECOND_HAND_LENGTH: i32 = 66;

/// Minute hand length in pixels.
pub const MINUTE_HAND_LENGTH: i32 = 60;

/// Hour hand length in pixels.
pub const HOUR_HAND_LENGTH: i32 = 34;

const _: () = assert!(HOUR_HAND_LENGTH < MINUTE_HAND_LENGTH);
const _: () = assert!(MINUTE_HAND_LENGTH < SECOND_HAND_LENGTH);
const _: () = assert!(HAND_CENTER.y + SECOND_HAND_LENGTH < SCREEN_HEIGHT as i32);
const _: () = assert!(HAND_CENTER.x + SECOND_HAND_LENGTH < SCREEN_WIDTH as i32);
const _: () = assert!(HAND_CENTER.x - SECOND_HAND_LENGTH >= 0);

// =============================================================================
// Digital Text Boxes
// =============================================================================

/// Box for the 12-hour time text. Starts above the screen so the font's
/// internal leading is clipped away.
pub const TIME_TEXT_BOX: Rectangle = Rectangle::new(Point::new(0, -6), Size::new(SCREEN_WIDTH, 100));

/// Box for the day-of-month at the right edge.
pub const DATE_TEXT_BOX: Rectangle = Rectangle::new(Point::new(124, 86), Size::new(23, 30));

/// Box for the weekday abbreviation at the left edge.
pub const WEEKDAY_TEXT_BOX: Rectangle = Rectangle::new(Point::new(0, 88), Size::new(16, 25));

/// Ellipsis appended when text overflows its box.
pub const ELLIPSIS: &str = "...";

// =============================================================================
// Status Layers
// =============================================================================

/// Battery icon image size.
pub const BATTERY_ICON_SIZE: Size = Size::new(16, 9);

/// Battery layer frame. Icon and gauge share it, gauge on top.
pub const BATTERY_FRAME: Rectangle = Rectangle::new(Point::new(63, 27), BATTERY_ICON_SIZE);

/// Gauge bar offset inside the battery frame.
pub const GAUGE_OFFSET: Point = Point::new(2, 2);

/// Gauge bar width at 100%.
pub const GAUGE_MAX_WIDTH: u32 = 11;

/// Gauge bar height.
pub const GAUGE_HEIGHT: u32 = 5;

/// Bluetooth icon image size.
pub const BLUETOOTH_ICON_SIZE: Size = Size::new(9, 11);

/// Bluetooth layer frame, bottom center.
pub const BLUETOOTH_FRAME: Rectangle = Rectangle::new(Point::new(67, 157), BLUETOOTH_ICON_SIZE);

const _: () = assert!(GAUGE_OFFSET.x as u32 + GAUGE_MAX_WIDTH <= BATTERY_ICON_SIZE.width);
const _: () = assert!(GAUGE_OFFSET.y as u32 + GAUGE_HEIGHT <= BATTERY_ICON_SIZE.height);
const _: () = assert!(BATTERY_FRAME.top_left.x as u32 + BATTERY_ICON_SIZE.width <= SCREEN_WIDTH);
const _: () = assert!(BLUETOOTH_FRAME.top_left.y as u32 + BLUETOOTH_ICON_SIZE.height <= SCREEN_HEIGHT);
const _: () = assert!(BLUETOOTH_FRAME.top_left.x as u32 + BLUETOOTH_ICON_SIZE.width <= SCREEN_WIDTH);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_lengths_ordered() {
        assert!(HOUR_HAND_LENGTH < MINUTE_HAND_LENGTH);
        assert!(MINUTE_HAND_LENGTH < SECOND_HAND_LENGTH);
    }

    #[test]
    fn test_second_hand_stays_on_screen() {
        let bounds = SCREEN_RECT;
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let tip = HAND_CENTER + Point::new(dx * SECOND_HAND_LENGTH, dy * SECOND_HAND_LENGTH);
            assert!(bounds.contains(tip), "tip {tip:?} off screen");
        }
    }

    #[test]
    fn test_status_frames_on_screen() {
        assert!(SCREEN_RECT.contains(BATTERY_FRAME.bottom_right().unwrap()));
        assert!(SCREEN_RECT.contains(BLUETOOTH_FRAME.bottom_right().unwrap()));
    }
}

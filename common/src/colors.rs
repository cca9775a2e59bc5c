//! Color constants for the two-color display.
//!
//! The face draws lit strokes and text on an unlit background.

use embedded_graphics::pixelcolor::BinaryColor;

/// Foreground: hands, text, gauge bar.
pub const FOREGROUND: BinaryColor = BinaryColor::On;

/// Background: window fill behind the face.
pub const BACKGROUND: BinaryColor = BinaryColor::Off;

//! Pre-computed static text and stroke styles.
//!
//! `MonoTextStyle`, `TextStyle` and `PrimitiveStyle` are all const-constructible
//! in embedded-graphics 0.8, so none of them are rebuilt per frame.
//!
//! | Text | Font | Box |
//! |------|------|-----|
//! | Time | ProFont 24pt | [`TIME_TEXT_BOX`](crate::config::TIME_TEXT_BOX) |
//! | Date | ProFont 14pt | [`DATE_TEXT_BOX`](crate::config::DATE_TEXT_BOX) |
//! | Weekday | 5x8 ASCII | [`WEEKDAY_TEXT_BOX`](crate::config::WEEKDAY_TEXT_BOX) |

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_5X8},
    pixelcolor::BinaryColor,
    primitives::PrimitiveStyle,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};

use crate::colors::FOREGROUND;

/// Centered, top-aligned text. All text boxes on the face use it.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned, top-aligned text for log lines.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

pub const TIME_FONT: &MonoFont<'static> = &PROFONT_24_POINT;
pub const DATE_FONT: &MonoFont<'static> = &PROFONT_14_POINT;
pub const WEEKDAY_FONT: &MonoFont<'static> = &FONT_5X8;
pub const LOG_FONT: &MonoFont<'static> = &FONT_5X8;

pub const TIME_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(TIME_FONT, FOREGROUND);
pub const DATE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(DATE_FONT, FOREGROUND);
pub const WEEKDAY_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(WEEKDAY_FONT, FOREGROUND);
pub const LOG_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(LOG_FONT, FOREGROUND);

/// 1px stroke for hands. Thick hands are two of these side by side.
pub const HAND_STROKE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(FOREGROUND, 1);

/// Solid fill for the battery gauge bar.
pub const GAUGE_FILL: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(FOREGROUND);

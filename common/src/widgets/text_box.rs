//! Text drawn inside a fixed box: centered, top-aligned, clipped, with a
//! trailing ellipsis when it does not fit.
//!
//! Fonts are monospace, so fitting is a character count: the box holds
//! `width / advance` glyphs. Overflowing text keeps as many leading glyphs as
//! fit next to [`ELLIPSIS`]. A box too narrow for the ellipsis gets the
//! text hard-cut instead.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use heapless::String;

use crate::config::ELLIPSIS;
use crate::styles::CENTERED_TOP;

/// Longest text a box can hold after fitting.
pub const MAX_BOX_TEXT: usize = 32;

/// Horizontal advance of one glyph.
pub const fn glyph_advance(font: &MonoFont<'_>) -> u32 { font.character_size.width + font.character_spacing }

/// Number of whole glyphs that fit in `width` pixels. The last glyph needs
/// no trailing spacing.
pub const fn glyphs_that_fit(
    font: &MonoFont<'_>,
    width: u32,
) -> usize {
    let advance = glyph_advance(font);
    if advance == 0 {
        return 0;
    }
    ((width + font.character_spacing) / advance) as usize
}

/// Fit `text` into `max_glyphs` characters with trailing-ellipsis overflow.
pub fn fit_text(
    text: &str,
    max_glyphs: usize,
) -> String<MAX_BOX_TEXT> {
    let max_glyphs = max_glyphs.min(MAX_BOX_TEXT);
    let mut fitted = String::new();
    let glyphs = text.chars().count();

    if glyphs <= max_glyphs {
        for c in text.chars().take(MAX_BOX_TEXT) {
            let _ = fitted.push(c);
        }
        return fitted;
    }

    let ellipsis_len = ELLIPSIS.len();
    if max_glyphs < ellipsis_len {
        for c in text.chars().take(max_glyphs) {
            let _ = fitted.push(c);
        }
        return fitted;
    }

    for c in text.chars().take(max_glyphs - ellipsis_len) {
        let _ = fitted.push(c);
    }
    let _ = fitted.push_str(ELLIPSIS);
    fitted
}

/// Draw `text` centered at the top of `bounds`, clipped to it.
pub fn draw_text_box<D>(
    display: &mut D,
    text: &str,
    bounds: Rectangle,
    style: MonoTextStyle<'_, BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let fitted = fit_text(text, glyphs_that_fit(style.font, bounds.size.width));
    let anchor = Point::new(bounds.top_left.x + (bounds.size.width / 2) as i32, bounds.top_left.y);

    let mut clipped = display.clipped(&bounds);
    Text::with_text_style(&fitted, anchor, style, CENTERED_TOP)
        .draw(&mut clipped)
        .ok();
}

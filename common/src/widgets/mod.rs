//! Drawing for the watch face and its status layers.
//!
//! All widgets are generic over `DrawTarget<Color = BinaryColor>` for platform independence.

mod face;
mod status;
mod text_box;

#[cfg(test)]
pub(crate) mod test_canvas;

pub use face::{Face, draw_face};
pub use status::{draw_battery_gauge, draw_battery_icon, draw_bluetooth_icon, draw_status_overlay, gauge_rect};
pub use text_box::{MAX_BOX_TEXT, draw_text_box, fit_text, glyph_advance, glyphs_that_fit};

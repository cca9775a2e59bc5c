//! Log page: paint counters and the most recent log entries.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Line;
use embedded_graphics::text::Text;
use heapless::String;
use watchface_common::colors::BACKGROUND;
use watchface_common::config::SCREEN_WIDTH;
use watchface_common::styles::{HAND_STROKE, LEFT_TOP, LOG_STYLE};
use watchface_common::{LogBuffer, RenderState};

const HEADER_Y: i32 = 1;
const DIVIDER_Y: i32 = 10;
const LOG_Y: i32 = 13;
const LOG_LINE_HEIGHT: i32 = 9;
const LOG_X: i32 = 1;

pub fn draw_log_page<D>(
    display: &mut D,
    render: &RenderState,
    log: &LogBuffer,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BACKGROUND).ok();

    let mut header: String<32> = String::new();
    let _ = write!(header, "LOG {} F:{} O:{}", log.total(), render.face_paints(), render.overlay_paints());
    Text::with_text_style(&header, Point::new(LOG_X, HEADER_Y), LOG_STYLE, LEFT_TOP)
        .draw(display)
        .ok();

    Line::new(Point::new(0, DIVIDER_Y), Point::new(SCREEN_WIDTH as i32 - 1, DIVIDER_Y))
        .into_styled(HAND_STROKE)
        .draw(display)
        .ok();

    let mut y = LOG_Y;
    for entry in log.iter() {
        let mut line: String<48> = String::new();
        let _ = write!(line, "{} {}", entry.level.prefix(), entry.message);
        Text::with_text_style(&line, Point::new(LOG_X, y), LOG_STYLE, LEFT_TOP)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}

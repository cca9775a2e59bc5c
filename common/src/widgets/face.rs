//! Watch face layer: background, digital overlays and the three hands.
//!
//! Paint order matters; later steps draw over earlier ones:
//!
//! 1. Background bitmap over the whole screen
//! 2. 12-hour time text (when `show_weekday`)
//! 3. Day of month (when `show_date`)
//! 4. Weekday abbreviation (when `show_month_abbrev`)
//! 5. Second hand (when `show_seconds`)
//! 6. Minute and hour hands, each followed by its twin line

use embedded_graphics::{image::Image, pixelcolor::BinaryColor, prelude::*};

use crate::assets::FaceAssets;
use crate::config::{DATE_TEXT_BOX, SCREEN_RECT, TIME_TEXT_BOX, WEEKDAY_TEXT_BOX};
use crate::hands::hand_lines;
use crate::settings::Settings;
use crate::styles::{DATE_STYLE, HAND_STROKE, TIME_STYLE, WEEKDAY_STYLE};
use crate::time::{Clock, WallTime, format_day, format_time_12h, format_weekday};
use crate::widgets::text_box::draw_text_box;

/// Draw the full face for `now`.
pub fn draw_face<D>(
    display: &mut D,
    now: &WallTime,
    settings: &Settings,
    assets: &FaceAssets<'_>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Image::new(&assets.background, SCREEN_RECT.top_left).draw(display).ok();

    if settings.show_weekday {
        draw_text_box(display, &format_time_12h(now), TIME_TEXT_BOX, TIME_STYLE);
    }

    if settings.show_date {
        draw_text_box(display, &format_day(now), DATE_TEXT_BOX, DATE_STYLE);
    }

    if settings.show_month_abbrev {
        draw_text_box(display, &format_weekday(now), WEEKDAY_TEXT_BOX, WEEKDAY_STYLE);
    }

    for line in hand_lines(now, settings.show_seconds) {
        line.into_styled(HAND_STROKE).draw(display).ok();
    }
}

/// Face layer bound to its images. Samples the clock at paint time.
pub struct Face<'a> {
    assets: &'a FaceAssets<'a>,
}

impl<'a> Face<'a> {
    pub const fn new(assets: &'a FaceAssets<'a>) -> Self { Self { assets } }

    /// Paint with the current time. Returns the time that was drawn.
    pub fn paint<D, C>(
        &self,
        display: &mut D,
        clock: &C,
        settings: &Settings,
    ) -> WallTime
    where
        D: DrawTarget<Color = BinaryColor>,
        C: Clock + ?Sized,
    {
        let now = clock.now();
        draw_face(display, &now, settings, self.assets);
        now
    }
}

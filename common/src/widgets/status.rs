//! Status layers: battery icon, battery gauge bar and bluetooth icon.
//!
//! The gauge is drawn after the icon so the bar sits inside the battery
//! outline. Hidden layers are skipped entirely.

use embedded_graphics::{image::Image, pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::assets::FaceAssets;
use crate::config::{BATTERY_FRAME, BLUETOOTH_FRAME, GAUGE_HEIGHT, GAUGE_OFFSET};
use crate::status::{StatusOverlay, gauge_width};
use crate::styles::GAUGE_FILL;

/// Gauge bar rectangle for a battery percentage.
pub const fn gauge_rect(percent: u8) -> Rectangle {
    Rectangle::new(
        Point::new(
            BATTERY_FRAME.top_left.x + GAUGE_OFFSET.x,
            BATTERY_FRAME.top_left.y + GAUGE_OFFSET.y,
        ),
        Size::new(gauge_width(percent), GAUGE_HEIGHT),
    )
}

pub fn draw_battery_icon<D>(
    display: &mut D,
    overlay: &StatusOverlay,
    assets: &FaceAssets<'_>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Image::new(assets.battery_image(overlay.battery_icon), BATTERY_FRAME.top_left)
        .draw(display)
        .ok();
}

pub fn draw_battery_gauge<D>(
    display: &mut D,
    overlay: &StatusOverlay,
    percent: u8,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    if overlay.gauge_hidden {
        return;
    }
    gauge_rect(percent).into_styled(GAUGE_FILL).draw(display).ok();
}

pub fn draw_bluetooth_icon<D>(
    display: &mut D,
    overlay: &StatusOverlay,
    assets: &FaceAssets<'_>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    if overlay.bluetooth_icon_hidden {
        return;
    }
    Image::new(&assets.bluetooth, BLUETOOTH_FRAME.top_left).draw(display).ok();
}

/// Draw every status layer in stacking order.
pub fn draw_status_overlay<D>(
    display: &mut D,
    overlay: &StatusOverlay,
    percent: u8,
    assets: &FaceAssets<'_>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_bluetooth_icon(display, overlay, assets);
    draw_battery_icon(display, overlay, assets);
    draw_battery_gauge(display, overlay, percent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::fixtures::assets;
    use crate::status::{BatteryCharge, BatteryIcon};
    use crate::widgets::test_canvas::TestCanvas;

    #[test]
    fn test_gauge_rect_position() {
        let rect = gauge_rect(50);
        assert_eq!(rect.top_left, Point::new(65, 29));
        assert_eq!(rect.size, Size::new(6, 5));
        assert_eq!(gauge_rect(0).size.width, 0);
    }

    #[test]
    fn test_gauge_drawn_when_visible() {
        let mut canvas = TestCanvas::new();
        let overlay = StatusOverlay::default();
        draw_battery_gauge(&mut canvas, &overlay, 100);
        assert_eq!(canvas.lit_count(), 11 * 5);
    }

    #[test]
    fn test_gauge_skipped_when_hidden() {
        let mut canvas = TestCanvas::new();
        let mut overlay = StatusOverlay::default();
        overlay.apply_battery(BatteryCharge::new(60, true));
        draw_battery_gauge(&mut canvas, &overlay, 60);
        assert_eq!(canvas.lit_count(), 0);
    }

    #[test]
    fn test_charging_icon_drawn() {
        // Fixture: normal icon blank, charging icon solid
        let assets = assets();
        let mut overlay = StatusOverlay::default();

        let mut canvas = TestCanvas::new();
        draw_battery_icon(&mut canvas, &overlay, &assets);
        assert_eq!(canvas.lit_inside(&BATTERY_FRAME), 0);

        overlay.battery_icon = BatteryIcon::Charging;
        let mut canvas = TestCanvas::new();
        draw_battery_icon(&mut canvas, &overlay, &assets);
        assert_eq!(canvas.lit_inside(&BATTERY_FRAME), 16 * 9);
    }

    #[test]
    fn test_bluetooth_icon_only_when_disconnected() {
        let assets = assets();
        let mut overlay = StatusOverlay::default();

        overlay.apply_bluetooth(true);
        let mut canvas = TestCanvas::new();
        draw_bluetooth_icon(&mut canvas, &overlay, &assets);
        assert_eq!(canvas.lit_count(), 0);

        overlay.apply_bluetooth(false);
        let mut canvas = TestCanvas::new();
        draw_bluetooth_icon(&mut canvas, &overlay, &assets);
        assert_eq!(canvas.lit_inside(&BLUETOOTH_FRAME), 9 * 11);
    }
}

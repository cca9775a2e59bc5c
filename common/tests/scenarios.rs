//! End-to-end scenarios driven through the public API only.

use std::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PointsIter, Rectangle},
};
use watchface_common::config::{BATTERY_FRAME, BLUETOOTH_FRAME, DATE_TEXT_BOX, SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::hands::{HandTips, TRIG_MAX_ANGLE, hour_angle, minute_angle, second_angle};
use watchface_common::message::{KEY_DATE, KEY_MONTH, KEY_SECONDS, KEY_WEEKDAY};
use watchface_common::widgets::gauge_rect;
use watchface_common::{
    AppState,
    AssetKind,
    BatteryCharge,
    BatteryIcon,
    Dictionary,
    Event,
    FaceAssets,
    FixedClock,
    LogBuffer,
    RenderState,
    Settings,
    Tuple,
    WallTime,
};

static BACKGROUND: [u8; AssetKind::Background.byte_len()] = [0; AssetKind::Background.byte_len()];
static BATTERY: [u8; AssetKind::Battery.byte_len()] = [0; AssetKind::Battery.byte_len()];
static CHARGING: [u8; AssetKind::BatteryCharging.byte_len()] = [0; AssetKind::BatteryCharging.byte_len()];
static BLUETOOTH: [u8; AssetKind::Bluetooth.byte_len()] = [0xFF; AssetKind::Bluetooth.byte_len()];

struct Canvas {
    pixels: Vec<bool>,
}

impl Canvas {
    fn new() -> Self {
        Self {
            pixels: vec![false; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    fn is_lit(
        &self,
        point: Point,
    ) -> bool {
        self.bounding_box().contains(point) && self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize]
    }

    fn lit_inside(
        &self,
        area: &Rectangle,
    ) -> usize {
        area.points().filter(|p| self.is_lit(*p)).count()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.bounding_box().contains(point) {
                self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

/// Blank background and battery images, solid bluetooth icon.
fn assets() -> FaceAssets<'static> { FaceAssets::new(&BACKGROUND, &BATTERY, &CHARGING, &BLUETOOTH).unwrap() }

#[test]
fn test_ten_oh_five_thirty() {
    let now = WallTime::new(10, 5, 30);
    let settings = Settings {
        show_seconds: true,
        show_weekday: true,
        show_date: false,
        show_month_abbrev: false,
    };

    assert_eq!(second_angle(30), TRIG_MAX_ANGLE / 2);
    assert_eq!(minute_angle(5), TRIG_MAX_ANGLE * 5 / 60);
    assert_eq!(hour_angle(10, 5), TRIG_MAX_ANGLE * (10 * 6 + 5 / 10) / 72);

    let (mut app, _) = AppState::boot(BatteryCharge::new(50, false), true);
    app.update(Event::ConfigReceived(settings));

    let mut render = RenderState::new();
    let mut canvas = Canvas::new();
    let drawn = render.paint(&mut canvas, &app, &FixedClock(now), &assets());
    assert_eq!(drawn, Some(now));

    let tips = HandTips::at(&now);
    assert_eq!(tips.second, Point::new(71, 165));
    assert!(canvas.is_lit(tips.second));
    assert!(canvas.is_lit(tips.minute));
    assert!(canvas.is_lit(tips.hour));

    // Digital time at the top, nothing in the date box
    let top = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, 20));
    assert!(canvas.lit_inside(&top) > 0);
    assert_eq!(canvas.lit_inside(&DATE_TEXT_BOX), 0);
}

#[test]
fn test_battery_full_while_charging() {
    let (mut app, _) = AppState::boot(BatteryCharge::new(99, true), true);
    assert_eq!(app.overlay.battery_icon, BatteryIcon::Charging);
    assert!(app.overlay.gauge_hidden);

    let transition = app.update(Event::BatteryChanged(BatteryCharge::new(100, true)));
    assert!(transition.redraw.battery);
    assert_eq!(app.overlay.battery_icon, BatteryIcon::Normal);
    assert!(app.overlay.gauge_hidden);

    // Blank battery image: any lit pixel inside the frame would be the gauge
    let mut render = RenderState::new();
    let mut canvas = Canvas::new();
    render.paint(&mut canvas, &app, &FixedClock(WallTime::new(6, 30, 0)), &assets());
    assert_eq!(canvas.lit_inside(&gauge_rect(100)), 0);
    assert_eq!(canvas.lit_inside(&BATTERY_FRAME), 0);
}

#[test]
fn test_bluetooth_disconnect_callback_vs_boot_peek() {
    let (mut app, boot) = AppState::boot(BatteryCharge::new(50, false), true);
    assert!(!boot.vibrate);

    let pulses = [false, false, true, false]
        .into_iter()
        .map(|connected| app.update(Event::BluetoothChanged(connected)))
        .filter(|t| t.vibrate)
        .count();
    assert_eq!(pulses, 2, "one pulse per connected -> disconnected edge");

    let (peeked, boot) = AppState::boot(BatteryCharge::new(50, false), false);
    assert!(!boot.vibrate);
    assert!(!peeked.overlay.bluetooth_icon_hidden);

    let mut render = RenderState::new();
    let mut canvas = Canvas::new();
    render.paint(&mut canvas, &peeked, &FixedClock(WallTime::new(3, 0, 0)), &assets());
    assert_eq!(canvas.lit_inside(&BLUETOOTH_FRAME), 9 * 11);
}

#[test]
fn test_config_missing_date_key() {
    let (mut app, _) = AppState::boot(BatteryCharge::new(50, false), true);
    let mut log = LogBuffer::new();

    let enable_date = [
        Tuple::int(KEY_SECONDS, 1),
        Tuple::int(KEY_WEEKDAY, 1),
        Tuple::int(KEY_DATE, 1),
        Tuple::int(KEY_MONTH, 0),
    ];
    app.ingest(&Dictionary::new(&enable_date), &mut log);
    assert!(app.settings.show_date);

    let missing_date = [Tuple::int(KEY_SECONDS, 0), Tuple::int(KEY_WEEKDAY, 0), Tuple::int(KEY_MONTH, 1)];
    let transition = app.ingest(&Dictionary::new(&missing_date), &mut log);
    assert!(!transition.render_requested());
    assert!(app.settings.show_date);
    assert!(app.settings.show_seconds);
    assert!(!app.settings.show_month_abbrev);
}

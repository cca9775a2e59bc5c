//! Bitmap assets used by the face and status layers.
//!
//! Images are raw 1 bit-per-pixel data, rows padded to whole bytes, MSB
//! first (the `ImageRaw<BinaryColor>` layout). [`FaceAssets`] only borrows the
//! bytes: whoever loaded them owns them, and the borrow checker keeps every
//! layer from outliving its bitmap.

use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor, prelude::Size};

use crate::config::{BATTERY_ICON_SIZE, BLUETOOTH_ICON_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{AssetError, AssetKind};
use crate::status::BatteryIcon;

impl AssetKind {
    /// Pixel size the layout expects for this image.
    pub const fn size(self) -> Size {
        match self {
            Self::Background => Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            Self::Battery | Self::BatteryCharging => BATTERY_ICON_SIZE,
            Self::Bluetooth => BLUETOOTH_ICON_SIZE,
        }
    }

    /// Byte length of a 1bpp image of this kind.
    pub const fn byte_len(self) -> usize {
        let size = self.size();
        (size.width.div_ceil(8) * size.height) as usize
    }

    /// File name the simulator loads this image from.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Background => "background.raw",
            Self::Battery => "battery.raw",
            Self::BatteryCharging => "battery_charging.raw",
            Self::Bluetooth => "bluetooth.raw",
        }
    }

    pub const ALL: [Self; 4] = [Self::Background, Self::Battery, Self::BatteryCharging, Self::Bluetooth];
}

/// Validate raw image bytes against the expected size of `kind`.
pub fn image<'a>(
    kind: AssetKind,
    data: &'a [u8],
) -> Result<ImageRaw<'a, BinaryColor>, AssetError> {
    let expected = kind.byte_len();
    if data.len() != expected {
        return Err(AssetError::WrongSize {
            asset: kind,
            expected,
            actual: data.len(),
        });
    }
    Ok(ImageRaw::new(data, kind.size().width))
}

/// Every image the face needs, validated.
#[derive(Clone, Copy, Debug)]
pub struct FaceAssets<'a> {
    pub background: ImageRaw<'a, BinaryColor>,
    pub battery: ImageRaw<'a, BinaryColor>,
    pub battery_charging: ImageRaw<'a, BinaryColor>,
    pub bluetooth: ImageRaw<'a, BinaryColor>,
}

impl<'a> FaceAssets<'a> {
    pub fn new(
        background: &'a [u8],
        battery: &'a [u8],
        battery_charging: &'a [u8],
        bluetooth: &'a [u8],
    ) -> Result<Self, AssetError> {
        Ok(Self {
            background: image(AssetKind::Background, background)?,
            battery: image(AssetKind::Battery, battery)?,
            battery_charging: image(AssetKind::BatteryCharging, battery_charging)?,
            bluetooth: image(AssetKind::Bluetooth, bluetooth)?,
        })
    }

    /// Image for the battery layer.
    pub const fn battery_image(
        &self,
        icon: BatteryIcon,
    ) -> &ImageRaw<'a, BinaryColor> {
        match icon {
            BatteryIcon::Normal => &self.battery,
            BatteryIcon::Charging => &self.battery_charging,
        }
    }
}


#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::OriginDimensions;

    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_byte_lengths() {
        assert_eq!(AssetKind::Background.byte_len(), 18 * 168);
        assert_eq!(AssetKind::Battery.byte_len(), 2 * 9);
        assert_eq!(AssetKind::Bluetooth.byte_len(), 2 * 11);
    }

    #[test]
    fn test_valid_assets() {
        let assets = assets();
        assert_eq!(assets.background.size(), Size::new(144, 168));
        assert_eq!(assets.battery.size(), BATTERY_ICON_SIZE);
    }

    #[test]
    fn test_wrong_size_rejected() {
        let short = [0u8; 3];
        let err = FaceAssets::new(&BLANK_BACKGROUND, &short, &SOLID_BATTERY, &SOLID_BLUETOOTH).unwrap_err();
        assert_eq!(
            err,
            AssetError::WrongSize {
                asset: AssetKind::Battery,
                expected: 18,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_battery_image_selection() {
        let assets = assets();
        assert!(core::ptr::eq(assets.battery_image(BatteryIcon::Charging), &assets.battery_charging));
        assert!(core::ptr::eq(assets.battery_image(BatteryIcon::Normal), &assets.battery));
    }
}

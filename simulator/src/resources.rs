//! Asset loading from disk.
//!
//! [`Resources`] owns the raw bitmap bytes for the whole run. The face only
//! ever borrows them through [`FaceAssets`], so nothing that draws can outlive
//! the data, and everything is freed once when `Resources` drops, including
//! when start-up aborts halfway through loading.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use watchface_common::{AssetError, AssetKind, FaceAssets};

/// Directory holding the `.raw` bitmaps.
pub const ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Start-up failure. Fatal: the simulator reports it and exits.
#[derive(Debug)]
pub enum LoadError {
    /// A bitmap file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A bitmap file had the wrong size.
    Asset(AssetError),
}

impl fmt::Display for LoadError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Asset(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Asset(_) => None,
        }
    }
}

impl From<AssetError> for LoadError {
    fn from(err: AssetError) -> Self { Self::Asset(err) }
}

/// Raw bytes of every bitmap.
#[derive(Debug)]
pub struct Resources {
    background: Vec<u8>,
    battery: Vec<u8>,
    battery_charging: Vec<u8>,
    bluetooth: Vec<u8>,
}

impl Resources {
    /// Read every bitmap from `dir`.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            background: read(dir, AssetKind::Background)?,
            battery: read(dir, AssetKind::Battery)?,
            battery_charging: read(dir, AssetKind::BatteryCharging)?,
            bluetooth: read(dir, AssetKind::Bluetooth)?,
        })
    }

    /// Validated views borrowing the loaded bytes.
    pub fn assets(&self) -> Result<FaceAssets<'_>, LoadError> {
        Ok(FaceAssets::new(
            &self.background,
            &self.battery,
            &self.battery_charging,
            &self.bluetooth,
        )?)
    }
}

fn read(
    dir: &Path,
    kind: AssetKind,
) -> Result<Vec<u8>, LoadError> {
    let path = dir.join(kind.file_name());
    fs::read(&path).map_err(|source| LoadError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::OriginDimensions;

    use super::*;

    #[test]
    fn test_bundled_assets_load() {
        let resources = Resources::load(Path::new(ASSET_DIR)).unwrap();
        let assets = resources.assets().unwrap();
        assert_eq!(assets.background.size().width, 144);
    }

    #[test]
    fn test_missing_dir_reports_path() {
        let err = Resources::load(Path::new("/nonexistent/watchface")).unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with(AssetKind::Background.file_name())),
            LoadError::Asset(_) => panic!("expected an I/O error"),
        }
    }

    #[test]
    fn test_wrong_size_is_asset_error() {
        let resources = Resources {
            background: vec![0; AssetKind::Background.byte_len()],
            battery: vec![0; 1],
            battery_charging: vec![0; AssetKind::BatteryCharging.byte_len()],
            bluetooth: vec![0; AssetKind::Bluetooth.byte_len()],
        };
        let err = resources.assets().unwrap_err();
        assert!(matches!(err, LoadError::Asset(AssetError::WrongSize { asset: AssetKind::Battery, .. })));
        assert_eq!(err.to_string(), "battery image is 1 bytes, expected 18");
    }
}

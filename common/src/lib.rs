//! Platform-agnostic core of the analog watch face.
//!
//! Shared between the desktop simulator and any device port:
//!
//! - [`config`]: Screen, hand and layer geometry constants
//! - [`colors`], [`styles`]: Monochrome colors and pre-computed styles
//! - [`time`]: Wall-clock time, the [`Clock`] seam and text formatting
//! - [`hands`]: Fixed-point hand angles, endpoints and twin lines
//! - [`settings`], [`message`]: Face options and config message ingest
//! - [`status`]: Battery and bluetooth state and overlay visibility
//! - [`app`]: Event-driven state machine
//! - [`tick`], [`render`]: Tick subscription and deferred repaint
//! - [`assets`]: Validated 1bpp bitmaps
//! - [`widgets`]: Drawing functions for every layer
//! - [`log_buffer`]: Ring buffer log with optional `defmt` forwarding
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and does no heap allocation.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod assets;
pub mod colors;
pub mod config;
pub mod error;
pub mod hands;
pub mod log_buffer;
pub mod message;
pub mod render;
pub mod settings;
pub mod status;
pub mod styles;
pub mod tick;
pub mod time;
pub mod widgets;

#[cfg(feature = "defmt")]
#[doc(hidden)]
pub use defmt as __defmt;
#[doc(hidden)]
pub use heapless as __heapless;

// Re-export commonly used items
pub use app::{AppState, Event, Redraw, Transition};
pub use assets::FaceAssets;
pub use error::{AssetError, AssetKind, ConfigError};
pub use log_buffer::{LogBuffer, LogEntry, LogLevel};
pub use message::{Dictionary, Tuple, TupleValue};
pub use render::RenderState;
pub use settings::{Settings, TickUnit};
pub use status::{BatteryCharge, BatteryIcon, Status, StatusOverlay};
pub use tick::TickTimer;
pub use time::{Clock, FixedClock, WallTime};

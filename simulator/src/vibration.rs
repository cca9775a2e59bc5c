//! Vibration pulse with time-based expiration.
//!
//! A desktop has no motor, so a pulse inverts the frame until it expires.

use std::time::Instant;

use crate::timing::VIBRATION_DURATION;

/// Active vibration pulse with its start time.
#[derive(Clone, Copy, Debug)]
pub struct Pulse(Instant);

impl Pulse {
    pub fn start() -> Self { Self(Instant::now()) }

    /// Check if this pulse has finished.
    #[inline]
    pub fn is_expired(&self) -> bool { self.0.elapsed() >= VIBRATION_DURATION }
}

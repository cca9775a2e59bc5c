//! Deferred repaint bookkeeping.
//!
//! Event handlers never draw. They hand their [`Redraw`] request to
//! [`RenderState::request`], and the event loop calls [`RenderState::paint`]
//! once per pass. Because the paint reads [`AppState`] at that moment, it
//! always observes the latest committed settings and status.
//!
//! # Update Strategy
//!
//! | Layer | Dirty when | Paint |
//! |-------|------------|-------|
//! | Face | tick, config, first frame, display cleared | background, text, hands |
//! | Battery | battery event | battery icon, gauge |
//! | Bluetooth | bluetooth event | bluetooth icon |
//!
//! Layers overlap, and a hidden layer must reveal what lies beneath it, so
//! any dirty layer repaints the whole stack bottom to top.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::app::{AppState, Redraw};
use crate::assets::FaceAssets;
use crate::time::{Clock, WallTime};
use crate::widgets::{Face, draw_status_overlay};

/// Tracks pending layer repaints between paint passes.
#[derive(Debug)]
pub struct RenderState {
    /// Layers requested since the last paint.
    pending: Redraw,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally (e.g. page switch).
    display_cleared: bool,

    /// Paint passes that redrew the face layer.
    face_paints: u32,

    /// Paint passes triggered only by status layers.
    overlay_paints: u32,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            pending: Redraw {
                face: false,
                battery: false,
                bluetooth: false,
            },
            first_frame: true,
            display_cleared: false,
            face_paints: 0,
            overlay_paints: 0,
        }
    }

    /// Queue layers for the next paint pass.
    pub fn request(
        &mut self,
        redraw: Redraw,
    ) {
        self.pending = self.pending.merge(redraw);
    }

    /// Mark that the display was cleared externally.
    ///
    /// Call this after leaving another page so the next pass repaints
    /// everything.
    pub fn mark_display_cleared(&mut self) { self.display_cleared = true; }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Check if anything needs painting.
    pub const fn needs_paint(&self) -> bool { self.first_frame || self.display_cleared || self.pending.any() }

    /// Drain the pending request. First frame and cleared display count as
    /// every layer dirty.
    pub fn take(&mut self) -> Redraw {
        let redraw = if self.first_frame || self.display_cleared {
            Redraw::ALL
        } else {
            self.pending
        };
        self.pending = Redraw::default();
        self.first_frame = false;
        self.display_cleared = false;
        redraw
    }

    #[inline]
    pub const fn face_paints(&self) -> u32 { self.face_paints }

    #[inline]
    pub const fn overlay_paints(&self) -> u32 { self.overlay_paints }

    /// Paint pass: if anything is dirty, repaint the layer stack from the
    /// current state and return the time drawn on the face.
    pub fn paint<D, C>(
        &mut self,
        display: &mut D,
        state: &AppState,
        clock: &C,
        assets: &FaceAssets<'_>,
    ) -> Option<WallTime>
    where
        D: DrawTarget<Color = BinaryColor>,
        C: Clock + ?Sized,
    {
        if !self.needs_paint() {
            return None;
        }
        let redraw = self.take();
        if redraw.face {
            self.face_paints = self.face_paints.wrapping_add(1);
        } else {
            self.overlay_paints = self.overlay_paints.wrapping_add(1);
        }

        let drawn = Face::new(assets).paint(display, clock, &state.settings);
        draw_status_overlay(display, &state.overlay, state.status.battery_percent, assets);
        Some(drawn)
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

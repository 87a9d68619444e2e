//! Overlay controller for lightboxes and modal viewers.
//!
//! The overlay is either closed or open on one item of a backing
//! collection with a zoom level. Navigation wraps unconditionally; zoom is
//! clamped to configured bounds.

use crate::model::OverlayEvent;
use serde::Deserialize;
use tracing::{debug, trace, warn};

/// Zoom bounds and step.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoomConfig {
    /// Smallest zoom level.
    pub min: f32,
    /// Largest zoom level.
    pub max: f32,
    /// Increment per zoom in/out.
    pub step: f32,
    /// Zoom level on open.
    pub initial: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 3.0,
            step: 0.5,
            initial: 1.0,
        }
    }
}

/// Rejected zoom configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidZoomConfig {
    /// `min > max` or a bound is not finite.
    #[error("zoom bounds must be finite and ordered (got min={min}, max={max})")]
    Bounds {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
    /// Step is zero, negative, or not finite.
    #[error("zoom step must be a positive number (got {0})")]
    Step(f32),
}

impl ZoomConfig {
    /// Validate bounds and step. `initial` is clamped into the bounds.
    pub fn validated(self) -> Result<Self, InvalidZoomConfig> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(InvalidZoomConfig::Bounds {
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(InvalidZoomConfig::Step(self.step));
        }
        Ok(Self {
            initial: self.clamp(self.initial),
            ..self
        })
    }

    /// Clamp a zoom value into `[min, max]`.
    ///
    /// Never panics: inverted bounds are swapped and NaN values fall back
    /// to the lower bound.
    pub fn clamp(&self, zoom: f32) -> f32 {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        if zoom.is_nan() {
            return lo;
        }
        zoom.max(lo).min(hi)
    }
}

/// Open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayState {
    /// Nothing shown.
    #[default]
    Closed,
    /// Showing one item.
    Open {
        /// Index into the backing collection.
        index: usize,
        /// Current zoom level.
        zoom: f32,
    },
}

/// Overlay transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    /// Open on an index.
    Open(usize),
    /// Close.
    Close,
    /// Next item (wraps).
    Next,
    /// Previous item (wraps).
    Previous,
    /// Zoom in one step.
    ZoomIn,
    /// Zoom out one step.
    ZoomOut,
    /// Back to the initial zoom.
    ResetZoom,
}

/// Lightbox controller over a collection of `len` items.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxState {
    state: OverlayState,
    len: usize,
    zoom: ZoomConfig,
}

impl LightboxState {
    /// Closed lightbox over `len` items.
    ///
    /// An invalid `zoom` (see [`ZoomConfig::validated`]) is replaced by
    /// [`ZoomConfig::default`]. Use [`LightboxState::try_new`] to reject it.
    pub fn new(len: usize, zoom: ZoomConfig) -> Self {
        let zoom = zoom.validated().unwrap_or_else(|err| {
            warn!(error = %err, "Invalid zoom config, using defaults");
            ZoomConfig::default()
        });
        Self {
            state: OverlayState::Closed,
            len,
            zoom,
        }
    }

    /// Closed lightbox over `len` items with a validated zoom config.
    pub fn try_new(len: usize, zoom: ZoomConfig) -> Result<Self, InvalidZoomConfig> {
        Ok(Self {
            state: OverlayState::Closed,
            len,
            zoom: zoom.validated()?,
        })
    }

    /// Current open/closed state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    /// Focused index while open.
    pub fn index(&self) -> Option<usize> {
        match self.state {
            OverlayState::Open { index, .. } => Some(index),
            OverlayState::Closed => None,
        }
    }

    /// Zoom level while open.
    pub fn zoom(&self) -> Option<f32> {
        match self.state {
            OverlayState::Open { zoom, .. } => Some(zoom),
            OverlayState::Closed => None,
        }
    }

    /// Zoom configuration.
    pub fn zoom_config(&self) -> &ZoomConfig {
        &self.zoom
    }

    /// Backing collection length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the backing collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Open on `index` at the initial zoom. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> Option<OverlayEvent> {
        if index >= self.len {
            trace!(index, len = self.len, "Ignoring open on out-of-range index");
            return None;
        }
        self.state = OverlayState::Open {
            index,
            zoom: self.zoom.clamp(self.zoom.initial),
        };
        debug!(index, "Overlay opened");
        Some(OverlayEvent::Opened { index })
    }

    /// Close, forgetting index and zoom.
    pub fn close(&mut self) -> Option<OverlayEvent> {
        if !self.is_open() {
            return None;
        }
        self.state = OverlayState::Closed;
        debug!("Overlay closed");
        Some(OverlayEvent::Closed)
    }

    /// Next item, wrapping to the first.
    pub fn show_next(&mut self) -> Option<OverlayEvent> {
        self.navigate(1)
    }

    /// Previous item, wrapping to the last.
    pub fn show_previous(&mut self) -> Option<OverlayEvent> {
        self.navigate(-1)
    }

    /// Zoom in one step, clamped at `max`.
    pub fn zoom_in(&mut self) -> Option<OverlayEvent> {
        let step = self.zoom.step;
        self.zoom_by(step)
    }

    /// Zoom out one step, clamped at `min`.
    pub fn zoom_out(&mut self) -> Option<OverlayEvent> {
        let step = self.zoom.step;
        self.zoom_by(-step)
    }

    /// Back to the initial zoom.
    pub fn reset_zoom(&mut self) -> Option<OverlayEvent> {
        let OverlayState::Open { index, zoom } = self.state else {
            return None;
        };
        let initial = self.zoom.clamp(self.zoom.initial);
        if zoom == initial {
            return None;
        }
        self.state = OverlayState::Open {
            index,
            zoom: initial,
        };
        Some(OverlayEvent::Zoomed { zoom: initial })
    }

    /// Update the backing length. Closes when the collection became empty
    /// and clamps a focused index past the new end.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if let OverlayState::Open { index, zoom } = self.state {
            if len == 0 {
                warn!("Backing collection emptied, closing overlay");
                self.state = OverlayState::Closed;
            } else if index >= len {
                warn!(index, len, "Overlay index past end, clamping");
                self.state = OverlayState::Open {
                    index: len - 1,
                    zoom,
                };
            }
        }
    }

    fn navigate(&mut self, delta: isize) -> Option<OverlayEvent> {
        let OverlayState::Open { index, zoom } = self.state else {
            trace!("Navigation ignored while closed");
            return None;
        };
        if self.len == 0 {
            return None;
        }
        let len = self.len as isize;
        let next = (index as isize + delta).rem_euclid(len) as usize;
        self.state = OverlayState::Open { index: next, zoom };
        Some(OverlayEvent::Navigated { index: next })
    }

    fn zoom_by(&mut self, delta: f32) -> Option<OverlayEvent> {
        let OverlayState::Open { index, zoom } = self.state else {
            trace!("Zoom ignored while closed");
            return None;
        };
        let clamped = self.zoom.clamp(zoom + delta);
        if clamped == zoom {
            return None;
        }
        self.state = OverlayState::Open {
            index,
            zoom: clamped,
        };
        Some(OverlayEvent::Zoomed { zoom: clamped })
    }
}

/// Apply an overlay action.
pub fn handle_overlay_action(
    mut state: LightboxState,
    action: OverlayAction,
) -> (LightboxState, Option<OverlayEvent>) {
    let event = match action {
        OverlayAction::Open(index) => state.open(index),
        OverlayAction::Close => state.close(),
        OverlayAction::Next => state.show_next(),
        OverlayAction::Previous => state.show_previous(),
        OverlayAction::ZoomIn => state.zoom_in(),
        OverlayAction::ZoomOut => state.zoom_out(),
        OverlayAction::ResetZoom => state.reset_zoom(),
    };
    (state, event)
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;

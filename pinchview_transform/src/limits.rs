// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The fixed minimum zoom factor.
///
/// Content never renders below its natural size, so this is not configurable.
pub const MIN_ZOOM: f64 = 1.0;

/// The default maximum zoom factor used by [`ZoomLimits::default`].
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;

/// Zoom limit configuration.
///
/// The minimum zoom is fixed at [`MIN_ZOOM`]; only the maximum is
/// configurable. The constructor normalizes its input so a `ZoomLimits` value
/// always describes a non-empty range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    max_zoom: f64,
}

impl ZoomLimits {
    /// Creates limits with the given maximum zoom factor.
    ///
    /// Values below [`MIN_ZOOM`] are raised to it, and non-finite values fall
    /// back to [`DEFAULT_MAX_ZOOM`].
    #[must_use]
    pub fn new(max_zoom: f64) -> Self {
        let max_zoom = if max_zoom.is_finite() {
            max_zoom.max(MIN_ZOOM)
        } else {
            DEFAULT_MAX_ZOOM
        };
        Self { max_zoom }
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Clamps a zoom factor into `[MIN_ZOOM, max_zoom]`.
    ///
    /// Non-finite input normalizes to [`MIN_ZOOM`].
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if !zoom.is_finite() {
            return MIN_ZOOM;
        }
        zoom.clamp(MIN_ZOOM, self.max_zoom)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MAX_ZOOM, MIN_ZOOM, ZoomLimits};

    #[test]
    fn default_max_is_five() {
        assert_eq!(ZoomLimits::default().max_zoom(), DEFAULT_MAX_ZOOM);
    }

    #[test]
    fn new_normalizes_degenerate_maxima() {
        assert_eq!(ZoomLimits::new(0.5).max_zoom(), MIN_ZOOM);
        assert_eq!(ZoomLimits::new(-3.0).max_zoom(), MIN_ZOOM);
        assert_eq!(ZoomLimits::new(f64::NAN).max_zoom(), DEFAULT_MAX_ZOOM);
        assert_eq!(ZoomLimits::new(f64::INFINITY).max_zoom(), DEFAULT_MAX_ZOOM);
        assert_eq!(ZoomLimits::new(8.0).max_zoom(), 8.0);
    }

    #[test]
    fn clamp_zoom_bounds_both_ends() {
        let limits = ZoomLimits::new(5.0);
        assert_eq!(limits.clamp_zoom(0.1), MIN_ZOOM);
        assert_eq!(limits.clamp_zoom(2.5), 2.5);
        assert_eq!(limits.clamp_zoom(8.0), 5.0);
    }

    #[test]
    fn clamp_zoom_normalizes_non_finite() {
        let limits = ZoomLimits::default();
        assert_eq!(limits.clamp_zoom(f64::NAN), MIN_ZOOM);
        assert_eq!(limits.clamp_zoom(f64::INFINITY), MIN_ZOOM);
        assert_eq!(limits.clamp_zoom(f64::NEG_INFINITY), MIN_ZOOM);
    }
}

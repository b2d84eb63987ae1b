// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use pinchview_gesture::PinchTracker;
use pinchview_transform::{MIN_ZOOM, ZoomLimits, ZoomTransform, clamp_transform};

/// Pinch-zoom-and-pan controller for one host view.
///
/// `PinchZoom` owns the committed [`ZoomTransform`] and the ephemeral gesture
/// session. It is single-owner, synchronous state: feed it touch snapshots in
/// the order they occur and read back the committed transform at any time.
#[derive(Clone, Debug)]
pub struct PinchZoom {
    limits: ZoomLimits,
    committed: ZoomTransform,
    tracker: PinchTracker,
}

impl PinchZoom {
    /// Creates a controller with the default zoom limits (max zoom 5).
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(ZoomLimits::default())
    }

    /// Creates a controller with the given zoom limits.
    #[must_use]
    pub fn with_limits(limits: ZoomLimits) -> Self {
        Self {
            limits,
            committed: ZoomTransform::IDENTITY,
            tracker: PinchTracker::default(),
        }
    }

    /// Feeds the controller one snapshot of all currently active touch points.
    ///
    /// `content` is the natural rendered size of the content at zoom 1, read
    /// from the host per call since its layout may change between gestures.
    ///
    /// When the snapshot is an update within an active two-finger session,
    /// the raw proposal is clamped and committed immediately; the new
    /// transform is visible to the renderer before the next event. All other
    /// snapshots only begin or end sessions and leave the committed transform
    /// untouched, so a finger lifting mid-gesture never snaps the content
    /// back.
    pub fn on_touches_changed(&mut self, points: &[Point], content: Size) {
        let ZoomTransform { zoom, pan } = self.committed;
        if let Some(proposal) = self.tracker.on_touches(points, zoom, pan) {
            self.committed = clamp_transform(
                ZoomTransform::new(proposal.zoom, proposal.pan),
                content,
                self.limits,
            );
        }
    }

    /// Resets the view to its natural, centered state.
    ///
    /// Returns `true` if the transform changed, in which case the host should
    /// animate the transition; gesture-driven updates must track the finger
    /// exactly and are never animated. Returns `false` when the view is
    /// already at natural size, making repeated resets no-ops. Hosts
    /// typically expose the reset affordance only while [`Self::is_zoomed`]
    /// holds.
    pub fn reset(&mut self) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.committed = ZoomTransform::IDENTITY;
        self.tracker.end();
        true
    }

    /// Re-clamps the committed transform against new content dimensions.
    ///
    /// Hosts call this when the content or container resizes outside of any
    /// gesture, so the committed pan cannot leave the content detached from
    /// the viewport.
    pub fn clamp_to_content(&mut self, content: Size) {
        self.committed = clamp_transform(self.committed, content, self.limits);
    }

    /// Replaces the maximum zoom factor, re-clamping the committed transform.
    pub fn set_max_zoom(&mut self, max_zoom: f64, content: Size) {
        self.limits = ZoomLimits::new(max_zoom);
        self.clamp_to_content(content);
    }

    /// Returns the committed transform.
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.committed
    }

    /// Returns the committed zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.committed.zoom
    }

    /// Returns the committed pan offset in unscaled viewport pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.committed.pan
    }

    /// Returns `true` while the content is magnified beyond natural size.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.committed.zoom > MIN_ZOOM
    }

    /// Returns `true` while a two-finger gesture session is live.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Returns the configured zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Snapshot of the current controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PinchZoomDebugInfo {
        PinchZoomDebugInfo {
            transform: self.committed,
            limits: self.limits,
            gesture_active: self.tracker.is_active(),
        }
    }
}

impl Default for PinchZoom {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`PinchZoom`] state.
#[derive(Clone, Copy, Debug)]
pub struct PinchZoomDebugInfo {
    /// The committed transform.
    pub transform: ZoomTransform,
    /// The configured zoom limits.
    pub limits: ZoomLimits,
    /// Whether a two-finger gesture session is live.
    pub gesture_active: bool,
}

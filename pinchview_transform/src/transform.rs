// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// A committed zoom/pan transform over center-anchored content.
///
/// `ZoomTransform` is the state a pinch-zoom view exposes to its renderer: a
/// uniform zoom factor and a pan offset in unscaled viewport pixels. The
/// renderer is expected to compose it as translate-then-scale about the
/// content's own center; [`ZoomTransform::affine_about`] encodes exactly that
/// composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Uniform zoom factor. `1.0` means the content is at its natural size.
    pub zoom: f64,
    /// Pan offset in unscaled viewport pixels.
    pub pan: Vec2,
}

impl ZoomTransform {
    /// The identity transform: natural size, centered.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan: Vec2::ZERO,
    };

    /// Creates a transform from a zoom factor and pan offset.
    #[must_use]
    pub const fn new(zoom: f64, pan: Vec2) -> Self {
        Self { zoom, pan }
    }

    /// Returns `true` if this is exactly the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.zoom == 1.0 && self.pan == Vec2::ZERO
    }

    /// Returns the affine a renderer should apply, anchored at `center`.
    ///
    /// The composition is `translate(pan) * scale_about(zoom, center)`: the
    /// content is scaled about its own center and then shifted by the pan,
    /// which is defined in unscaled viewport pixel space.
    #[must_use]
    pub fn affine_about(&self, center: Point) -> Affine {
        Affine::translate(self.pan) * Affine::scale_about(self.zoom, center)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

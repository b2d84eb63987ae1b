// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::limits::{MIN_ZOOM, ZoomLimits};
use crate::transform::ZoomTransform;

/// Returns the per-axis pan bound for `zoom` over content of the given size.
///
/// At zoom `z` the content overflows the viewport by `(z - 1)` times its own
/// size, split evenly per side since the transform is anchored at the
/// content's center, so each axis may pan by at most `content * (z - 1) / 2`.
/// Degenerate dimensions (negative or non-finite) are treated as zero,
/// yielding a zero bound on that axis.
#[must_use]
pub fn max_pan(zoom: f64, content: Size) -> Vec2 {
    let overflow = (zoom - MIN_ZOOM).max(0.0);
    Vec2::new(
        finite_or_zero(content.width) * overflow / 2.0,
        finite_or_zero(content.height) * overflow / 2.0,
    )
}

/// Bounds a proposed transform against the zoom limits and content geometry.
///
/// This is a pure, total function with no error conditions:
/// - The zoom clamps into `[1, limits.max_zoom()]`.
/// - A zoom of exactly 1 forces the pan to zero, overriding any proposal:
///   zoomed-out content is always perfectly centered.
/// - Otherwise each pan axis clamps independently into `±`[`max_pan`].
/// - Non-finite zoom or pan components and degenerate content dimensions are
///   normalized rather than rejected.
#[must_use]
pub fn clamp_transform(proposed: ZoomTransform, content: Size, limits: ZoomLimits) -> ZoomTransform {
    let zoom = limits.clamp_zoom(proposed.zoom);
    if zoom <= MIN_ZOOM {
        return ZoomTransform::IDENTITY;
    }
    let bound = max_pan(zoom, content);
    let pan = Vec2::new(
        clamp_axis(proposed.pan.x, bound.x),
        clamp_axis(proposed.pan.y, bound.y),
    );
    ZoomTransform::new(zoom, pan)
}

fn clamp_axis(value: f64, bound: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(-bound, bound)
}

fn finite_or_zero(dimension: f64) -> f64 {
    if dimension.is_finite() {
        dimension.max(0.0)
    } else {
        0.0
    }
}

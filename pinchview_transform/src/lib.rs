// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Transform: zoom transform primitives for pinch-zoom views.
//!
//! This crate provides the small, headless data model shared by the Pinchview
//! crates: a committed zoom/pan transform, configurable zoom limits, and a
//! pure clamping function that bounds a proposed transform against the
//! content's geometry. It focuses on:
//! - The committed transform state ([`ZoomTransform`]).
//! - Zoom limit configuration ([`ZoomLimits`]).
//! - Deterministic clamping of proposed transforms ([`clamp_transform`]).
//!
//! It does **not** track gestures or own any rendering. Callers are expected
//! to:
//! - Produce proposed transforms at a higher layer (for example with
//!   `pinchview_gesture`).
//! - Apply the committed transform to their content via
//!   [`ZoomTransform::affine_about`] or an equivalent composition.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchview_transform::{ZoomLimits, ZoomTransform, clamp_transform};
//!
//! let limits = ZoomLimits::default();
//! let content = Size::new(1000.0, 1000.0);
//!
//! // A pinch proposes zoom 2 with a large rightward pan.
//! let proposed = ZoomTransform::new(2.0, Vec2::new(900.0, 0.0));
//! let committed = clamp_transform(proposed, content, limits);
//!
//! // At zoom 2 the content overflows by 500px per side, so the pan clamps.
//! assert_eq!(committed.zoom, 2.0);
//! assert_eq!(committed.pan, Vec2::new(500.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform is anchored at the content's own center, with the pan
//!   expressed in unscaled viewport pixels. At zoom `z` the content overflows
//!   the viewport by `(z - 1)` times its own size, split evenly per side,
//!   which yields the per-axis pan bound `content * (z - 1) / 2`.
//! - Clamping is a total function: non-finite or negative inputs are
//!   normalized rather than rejected, so there are no error conditions and
//!   the worst case degrades to a centered, non-pannable transform.
//! - The minimum zoom is fixed at `1.0`; content never shrinks below its
//!   natural size and is always perfectly centered when not zoomed.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod limits;
mod transform;

pub use clamp::{clamp_transform, max_pan};
pub use limits::{DEFAULT_MAX_ZOOM, MIN_ZOOM, ZoomLimits};
pub use transform::ZoomTransform;

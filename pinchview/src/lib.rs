// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview: a headless pinch-zoom-and-pan viewport controller.
//!
//! This crate provides [`PinchZoom`], a small, synchronous controller that
//! lets a user magnify and reposition fixed-size content inside a bounded
//! display area with two-finger touch gestures. It composes two headless
//! kernels:
//! - `pinchview_gesture` tracks gesture sessions and derives raw zoom/pan
//!   proposals from a fixed per-session baseline.
//! - `pinchview_transform` clamps each proposal against the content geometry
//!   and the configured zoom limits.
//!
//! It does **not** own any content element, touch capture, or rendering.
//! Callers are expected to:
//! - Deliver touch-point snapshots, in order, to
//!   [`PinchZoom::on_touches_changed`].
//! - Read the committed transform via [`PinchZoom::transform`] and apply it
//!   with [`ZoomTransform::affine_about`] (translate-then-scale about the
//!   content's center).
//! - Use [`PinchZoom::is_gesture_active`] to suppress transition animation
//!   during live tracking and to gate touch passthrough while zoomed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use pinchview::PinchZoom;
//!
//! let mut view = PinchZoom::new();
//! let content = Size::new(1000.0, 1000.0);
//!
//! // Two fingers land 200px apart: a session begins from the baseline.
//! view.on_touches_changed(&[Point::new(400.0, 500.0), Point::new(600.0, 500.0)], content);
//!
//! // They spread to 400px apart: the committed zoom doubles.
//! view.on_touches_changed(&[Point::new(300.0, 500.0), Point::new(700.0, 500.0)], content);
//! assert_eq!(view.zoom(), 2.0);
//! assert_eq!(view.pan(), Vec2::ZERO);
//!
//! // Both fingers lift: the committed transform stays, the session ends.
//! view.on_touches_changed(&[], content);
//! assert!(!view.is_gesture_active());
//! assert!(view.is_zoomed());
//!
//! // Reset returns `true`: the host should animate this transition.
//! assert!(view.reset());
//! assert_eq!(view.zoom(), 1.0);
//! ```
//!
//! ## Design notes
//!
//! - Every mutation is synchronous on the calling thread; the committed
//!   state after an event is a function of the committed state before it and
//!   that event alone. There is no internal concurrency and no queue.
//! - Content dimensions are supplied per call and never cached, since the
//!   host's layout can change between gestures.
//! - All inputs are defensively normalized rather than rejected; every
//!   failure mode degrades to "content stays at its last legal transform".
//!
//! This crate is `no_std`.

#![no_std]

mod controller;

pub use controller::{PinchZoom, PinchZoomDebugInfo};
pub use pinchview_gesture::{PinchBaseline, PinchProposal, PinchTracker};
pub use pinchview_transform::{
    DEFAULT_MAX_ZOOM, MIN_ZOOM, ZoomLimits, ZoomTransform, clamp_transform, max_pan,
};

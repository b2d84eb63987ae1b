// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Gesture: two-finger pinch gesture session tracking.
//!
//! This crate provides [`PinchTracker`], a small state machine that consumes
//! touch-point snapshots and turns them into raw zoom/pan proposals. A
//! gesture session exists only while exactly two touch points are active; the
//! tracker captures a baseline when the second point lands and re-derives
//! every proposal from that fixed baseline, so the math never accumulates
//! drift across touch-move events.
//!
//! The tracker is deliberately ignorant of limits and content geometry: it
//! emits *unclamped* proposals, and a higher layer (`pinchview`) bounds them
//! before committing. It also needs no per-finger identity — inter-point
//! distance and midpoint are symmetric in the unordered pair, so only the
//! point count and the current pair's geometry matter each tick.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use pinchview_gesture::PinchTracker;
//!
//! let mut tracker = PinchTracker::default();
//!
//! // Two fingers land 200px apart: a session begins, no proposal yet.
//! let fingers = [Point::new(400.0, 500.0), Point::new(600.0, 500.0)];
//! assert!(tracker.on_touches(&fingers, 1.0, Vec2::ZERO).is_none());
//! assert!(tracker.is_active());
//!
//! // The fingers spread to 400px apart: the proposal doubles the zoom.
//! let fingers = [Point::new(300.0, 500.0), Point::new(700.0, 500.0)];
//! let proposal = tracker.on_touches(&fingers, 1.0, Vec2::ZERO).unwrap();
//! assert_eq!(proposal.zoom, 2.0);
//! assert_eq!(proposal.pan, Vec2::ZERO);
//!
//! // A third finger lands: the session ends without a proposal.
//! assert!(tracker.on_touches(&[Point::ZERO; 3], 2.0, Vec2::ZERO).is_none());
//! assert!(!tracker.is_active());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod pinch;

pub use pinch::{PinchBaseline, PinchProposal, PinchTracker};

// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session tracking: classify touch snapshots and derive raw proposals.
//!
//! ## Usage
//!
//! 1) On every touch start/move/end, call [`PinchTracker::on_touches`] with
//!    the full set of active touch points and the currently committed
//!    zoom/pan.
//! 2) When the call returns a [`PinchProposal`], clamp it and commit it.
//! 3) Query [`PinchTracker::is_active`] to tell live tracking apart from
//!    rest, for example to suppress transition animation mid-gesture.

use kurbo::{Point, Vec2};

/// Baseline snapshot captured at the start of a pinch session.
///
/// All proposals within a session are computed against this fixed snapshot,
/// never against the previous event, so a session is replayable from any
/// single pair of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchBaseline {
    /// Distance between the two touch points when the session began.
    pub distance: f64,
    /// Midpoint of the two touch points when the session began.
    pub midpoint: Point,
    /// Committed zoom factor when the session began.
    pub zoom: f64,
    /// Committed pan offset when the session began.
    pub pan: Vec2,
}

/// A raw, unclamped zoom/pan proposal produced by a pinch update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchProposal {
    /// Proposed zoom factor: the baseline zoom scaled by the distance ratio.
    pub zoom: f64,
    /// Proposed pan offset: the baseline pan shifted by the midpoint delta.
    pub pan: Vec2,
}

/// Tracks the lifecycle of two-finger pinch gesture sessions.
///
/// A session exists only while exactly two touch points are active. Any
/// transition of the point count away from two ends the session; a later
/// return to exactly two begins a fresh session from the committed state
/// supplied on that call.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchTracker {
    baseline: Option<PinchBaseline>,
}

impl PinchTracker {
    /// Feeds the tracker one snapshot of all currently active touch points.
    ///
    /// `committed_zoom` and `committed_pan` are the committed transform at
    /// the time of the event; they are only read when a new session begins,
    /// to capture the baseline.
    ///
    /// Returns a proposal only for updates within an active session:
    /// - Exactly two points, no session → begins a session and returns
    ///   `None` (the baseline call changes nothing).
    /// - Exactly two points, session active → returns the proposal derived
    ///   from the baseline, or `None` if the baseline distance is zero (two
    ///   fingers reported at the same point; the tick is skipped to avoid a
    ///   division by zero, and tracking resumes once they separate).
    /// - Any other count → ends the session, if any, and returns `None`.
    pub fn on_touches(
        &mut self,
        points: &[Point],
        committed_zoom: f64,
        committed_pan: Vec2,
    ) -> Option<PinchProposal> {
        match points {
            &[a, b] => {
                let distance = a.distance(b);
                let midpoint = a.midpoint(b);
                match self.baseline {
                    None => {
                        self.baseline = Some(PinchBaseline {
                            distance,
                            midpoint,
                            zoom: committed_zoom,
                            pan: committed_pan,
                        });
                        None
                    }
                    Some(baseline) => {
                        if baseline.distance == 0.0 {
                            // A zero-distance baseline cannot produce a ratio.
                            // Skip the tick, and re-anchor the geometry once
                            // the fingers separate so tracking resumes.
                            if distance > 0.0 {
                                self.baseline = Some(PinchBaseline {
                                    distance,
                                    midpoint,
                                    ..baseline
                                });
                            }
                            return None;
                        }
                        Some(PinchProposal {
                            zoom: baseline.zoom * (distance / baseline.distance),
                            pan: baseline.pan + (midpoint - baseline.midpoint),
                        })
                    }
                }
            }
            _ => {
                self.baseline = None;
                None
            }
        }
    }

    /// Returns `true` while a pinch session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// Returns the active session's baseline, if any.
    #[must_use]
    pub fn baseline(&self) -> Option<PinchBaseline> {
        self.baseline
    }

    /// Ends the current session, if any, without touching committed state.
    pub fn end(&mut self) {
        self.baseline = None;
    }
}

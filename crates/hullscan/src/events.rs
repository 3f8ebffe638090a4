//! Progress events emitted while a hull is being built.
//!
//! Engines never hold display state. They report each step as an immutable
//! `HullEvent` to a caller-supplied `HullObserver`; renderers, tracers and
//! tests own whatever they derive from the stream. Passing `&mut ()` discards
//! events, and engines skip building them when the observer is disabled.

use serde::{Deserialize, Serialize};

use crate::geom2::{Edge, Point, Side};

/// Why the brute-force engine turned a candidate pair down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Both endpoints have the same coordinates.
    ZeroLength,
    /// Points were found strictly on both sides of the line.
    MixedSides,
    /// A collinear point lies beyond an endpoint; the pair is part of a longer edge.
    Subsumed,
}

/// One step of hull construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HullEvent {
    /// A directed line `a → b` is under test (brute-force pair, Quickhull task).
    CandidateEdge { a: Point, b: Point },
    /// `point` was classified against the current candidate.
    PointClassified { point: Point, side: Side },
    /// A boundary edge was confirmed (interior on its left).
    EdgeAccepted { edge: Edge },
    /// A brute-force candidate pair was turned down.
    EdgeRejected { a: Point, b: Point, reason: RejectReason },
    /// Quickhull split the input along `a → b`.
    Partition {
        a: Point,
        b: Point,
        upper: usize,
        lower: usize,
    },
    /// Quickhull picked the point farthest from `a → b`.
    FarthestPoint { a: Point, b: Point, point: Point },
    /// `point` fell inside a Quickhull triangle and is out for good.
    PointDiscarded { point: Point },
    /// Graham scan chose its pivot.
    PivotSelected { pivot: Point },
    /// Graham scan pushed `point` onto the stack.
    StackPush { point: Point },
    /// Graham scan popped `popped` because it did not make a left turn towards `against`.
    StackPop { popped: Point, against: Point },
}

/// Sink for `HullEvent`s.
pub trait HullObserver {
    fn observe(&mut self, event: &HullEvent);

    /// Engines skip building events when this is `false`.
    fn enabled(&self) -> bool {
        true
    }
}

impl HullObserver for () {
    #[inline]
    fn observe(&mut self, _event: &HullEvent) {}
    #[inline]
    fn enabled(&self) -> bool {
        false
    }
}

impl HullObserver for Vec<HullEvent> {
    #[inline]
    fn observe(&mut self, event: &HullEvent) {
        self.push(event.clone());
    }
}

impl<F> HullObserver for F
where
    F: FnMut(&HullEvent),
{
    #[inline]
    fn observe(&mut self, event: &HullEvent) {
        self(event)
    }
}

/// Build and deliver an event only if someone listens.
#[inline]
pub(crate) fn emit<O, F>(obs: &mut O, make: F)
where
    O: HullObserver + ?Sized,
    F: FnOnce() -> HullEvent,
{
    if obs.enabled() {
        obs.observe(&make());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn unit_observer_is_disabled() {
        let mut built = false;
        emit(&mut (), || {
            built = true;
            HullEvent::PointDiscarded {
                point: vector![0.0, 0.0],
            }
        });
        assert!(!built);
    }

    #[test]
    fn closure_and_vec_observers_receive_events() {
        let ev = HullEvent::StackPush {
            point: vector![1.0, 2.0],
        };
        let mut log: Vec<HullEvent> = Vec::new();
        emit(&mut log, || ev.clone());
        assert_eq!(log, vec![ev.clone()]);

        let mut count = 0usize;
        let mut counter = |_: &HullEvent| count += 1;
        emit(&mut counter, || ev.clone());
        emit(&mut counter, || ev.clone());
        assert_eq!(count, 2);
    }

    #[test]
    fn events_serialize_with_tag() {
        let ev = HullEvent::EdgeRejected {
            a: vector![0.0, 0.0],
            b: vector![1.0, 0.0],
            reason: RejectReason::MixedSides,
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["event"], "edge_rejected");
        assert_eq!(json["reason"], "mixed_sides");
        assert_eq!(json["b"][0], 1.0);
    }
}

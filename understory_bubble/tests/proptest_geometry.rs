// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for bubble geometry.
//!
//! 1. The outline's bounding box is exactly the input rectangle whenever the
//!    tail fits (T <= H and 2T <= W).
//! 2. The tail apex sits on the rectangle's horizontal midpoint.
//! 3. The tail apex sits on the rectangle's bottom edge.
//! 4. Building a path never panics, whatever the sizes.

use kurbo::{Rect, Shape};
use proptest::prelude::*;
use understory_bubble::{BubbleShape, DEFAULT_TOLERANCE};

const EPS: f64 = 1e-6;

/// Rectangles with a tail that fits inside them: `(rect, radius, tail)`.
fn fitting_inputs() -> impl Strategy<Value = (Rect, f64, f64)> {
    (
        -500.0..500.0_f64,
        -500.0..500.0_f64,
        1.0..400.0_f64,
        1.0..400.0_f64,
        0.0..50.0_f64,
        0.0..1.0_f64,
    )
        .prop_map(|(x, y, w, h, radius, tail_frac)| {
            let tail = tail_frac * h.min(w / 2.0);
            (Rect::new(x, y, x + w, y + h), radius, tail)
        })
}

proptest! {
    #[test]
    fn path_bounds_equal_rect((rect, radius, tail) in fitting_inputs()) {
        let path = BubbleShape::new(radius, tail).path(rect);
        let bbox = path.bounding_box();
        prop_assert!((bbox.width() - rect.width()).abs() < EPS, "width {} vs {}", bbox.width(), rect.width());
        prop_assert!((bbox.height() - rect.height()).abs() < EPS, "height {} vs {}", bbox.height(), rect.height());
        prop_assert!((bbox.x0 - rect.x0).abs() < EPS);
        prop_assert!((bbox.y0 - rect.y0).abs() < EPS);
    }

    #[test]
    fn shape_bounds_match_path_bounds((rect, radius, tail) in fitting_inputs()) {
        let bubble = BubbleShape::new(radius, tail).geometry(rect);
        let from_shape = bubble.bounding_box();
        let from_path = bubble.to_path(DEFAULT_TOLERANCE).bounding_box();
        prop_assert!((from_shape.x0 - from_path.x0).abs() < EPS);
        prop_assert!((from_shape.y0 - from_path.y0).abs() < EPS);
        prop_assert!((from_shape.x1 - from_path.x1).abs() < EPS);
        prop_assert!((from_shape.y1 - from_path.y1).abs() < EPS);
    }

    #[test]
    fn tail_apex_is_centered((rect, radius, tail) in fitting_inputs()) {
        let bubble = BubbleShape::new(radius, tail).geometry(rect);
        let apex = bubble.tail_apex();
        prop_assert!((apex.x - rect.center().x).abs() < EPS);
        prop_assert!((apex.y - rect.y1).abs() < EPS);
        let [left, _, right] = bubble.tail();
        prop_assert!(((apex.x - left.x) - (right.x - apex.x)).abs() < EPS);
    }

    #[test]
    fn any_sizes_build_a_path(
        w in -1000.0..1000.0_f64,
        h in -1000.0..1000.0_f64,
        radius in -100.0..100.0_f64,
        tail in -100.0..1000.0_f64,
    ) {
        let path = BubbleShape::new(radius, tail).path(Rect::new(0.0, 0.0, w, h));
        prop_assert!(!path.elements().is_empty());
    }
}

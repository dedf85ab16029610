// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bubble --heading-base-level=0

//! Understory Bubble: speech-bubble geometry for tooltips and callouts.
//!
//! A bubble is a rounded rectangle body with a small isosceles triangle (the
//! *tail*) hanging from the horizontal center of its bottom edge and pointing
//! down toward whatever the bubble refers to.
//!
//! - [`BubbleShape`] is the small, copyable description of a bubble style:
//!   corner radius and tail size. It maps a bounding rectangle to a path via
//!   [`BubbleShape::path`], or to a resolved [`Bubble`] via
//!   [`BubbleShape::geometry`].
//! - [`Bubble`] is the resolved geometry for one bounding rectangle. It
//!   implements [`kurbo::Shape`], so it can be filled, stroked, measured, and
//!   hit tested like any other Kurbo primitive.
//!
//! Given a bounding rectangle of height `H` and a tail size `T`, the body
//! occupies the top `H - T` of the rectangle and the tail occupies the rest:
//!
//! ```text
//!  ╭──────────────────╮
//!  │       body       │
//!  ╰──────╲    ╱──────╯  <- body bottom
//!          ╲  ╱          } T
//!           ╲╱           <- tail apex, at the rectangle's mid x
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Shape};
//! use understory_bubble::BubbleShape;
//!
//! let shape = BubbleShape::default();
//! let bubble = shape.geometry(Rect::new(0.0, 0.0, 120.0, 40.0));
//!
//! // The tail apex sits on the bottom edge, centered horizontally.
//! assert_eq!(bubble.tail_apex().x, 60.0);
//! assert_eq!(bubble.tail_apex().y, 40.0);
//!
//! // Both the body and the tail count as "inside" for hit testing.
//! assert!(bubble.contains((60.0, 10.0).into()));
//! assert!(bubble.contains((60.0, 36.0).into()));
//! assert!(!bubble.contains((10.0, 38.0).into()));
//! ```
//!
//! ## Degenerate input
//!
//! There are no error conditions. Negative or non-finite radii and tail sizes
//! are treated as zero. Corner radii larger than half the body's shorter side
//! are clamped by [`kurbo::RoundedRect`]. A tail larger than the rectangle is
//! still drawn; the result is visually degenerate but well formed.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `kurbo`.
//! - `libm`: `no_std` float math through `kurbo`'s `libm` support.
//! - `serde`: `Serialize`/`Deserialize` for [`BubbleShape`].
//!
//! This crate is `no_std`.

#![no_std]

use core::array;
use core::f64::consts::SQRT_2;
use core::iter::Chain;

use kurbo::{PathEl, Point, Rect, RoundedRect, Shape};

/// Default corner radius of the bubble body, in local units.
pub const DEFAULT_CORNER_RADIUS: f64 = 8.0;

/// Default tail size, in local units.
///
/// The tail is `2 * tail_size` wide at its base and `tail_size` tall.
pub const DEFAULT_TAIL_SIZE: f64 = 8.0;

/// Default flattening tolerance used by [`BubbleShape::path`].
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Style of a speech bubble: how round the body is and how big the tail is.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BubbleShape {
    /// Radius applied to all four corners of the body.
    pub corner_radius: f64,
    /// Height of the tail, and half the width of its base.
    pub tail_size: f64,
}

impl Default for BubbleShape {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            tail_size: DEFAULT_TAIL_SIZE,
        }
    }
}

impl BubbleShape {
    /// Create a bubble style with the given corner radius and tail size.
    pub const fn new(corner_radius: f64, tail_size: f64) -> Self {
        Self {
            corner_radius,
            tail_size,
        }
    }

    /// Return a copy with a different corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Return a copy with a different tail size.
    #[must_use]
    pub const fn with_tail_size(mut self, tail_size: f64) -> Self {
        self.tail_size = tail_size;
        self
    }

    /// Tail size actually drawn: negative or non-finite sizes become zero.
    pub fn effective_tail_size(&self) -> f64 {
        sanitize(self.tail_size)
    }

    /// Resolve this style against a bounding rectangle.
    pub fn geometry(&self, rect: Rect) -> Bubble {
        Bubble::new(rect, self.corner_radius, self.tail_size)
    }

    /// Build the closed outline of a bubble filling `rect`.
    ///
    /// The path holds two closed subpaths: the rounded body, then the tail
    /// triangle `(mid_x - T, bottom) → (mid_x, bottom + T) → (mid_x + T, bottom)`.
    pub fn path(&self, rect: Rect) -> kurbo::BezPath {
        self.geometry(rect).to_path(DEFAULT_TOLERANCE)
    }
}

/// Resolved bubble geometry for one bounding rectangle.
///
/// Coordinates follow Kurbo's convention (y grows downward), so the tail
/// points toward larger y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    body: RoundedRect,
    body_bottom: f64,
    tail: [Point; 3],
}

impl Bubble {
    /// Compute the bubble filling `rect` with the given corner radius and tail size.
    pub fn new(rect: Rect, corner_radius: f64, tail_size: f64) -> Self {
        let rect = rect.abs();
        let corner_radius = sanitize(corner_radius);
        let tail_size = sanitize(tail_size);

        let body_bottom = rect.y1 - tail_size;
        let body = RoundedRect::from_rect(
            Rect::new(rect.x0, rect.y0, rect.x1, body_bottom),
            corner_radius,
        );
        let mid_x = rect.center().x;
        let tail = [
            Point::new(mid_x - tail_size, body_bottom),
            Point::new(mid_x, body_bottom + tail_size),
            Point::new(mid_x + tail_size, body_bottom),
        ];
        Self {
            body,
            body_bottom,
            tail,
        }
    }

    /// The rounded rectangle body.
    pub fn body(&self) -> RoundedRect {
        self.body
    }

    /// The y coordinate of the body's bottom edge, where the tail starts.
    pub fn body_bottom(&self) -> f64 {
        self.body_bottom
    }

    /// The three tail vertices, in path order: left base, apex, right base.
    pub fn tail(&self) -> [Point; 3] {
        self.tail
    }

    /// The tip of the tail.
    pub fn tail_apex(&self) -> Point {
        self.tail[1]
    }

    /// Size of the tail this bubble was built with.
    pub fn tail_size(&self) -> f64 {
        self.tail[1].y - self.body_bottom
    }

    fn tail_elements(&self) -> [PathEl; 4] {
        let [left, apex, right] = self.tail;
        [
            PathEl::MoveTo(left),
            PathEl::LineTo(apex),
            PathEl::LineTo(right),
            PathEl::ClosePath,
        ]
    }

    /// Signed shoelace area of the tail, following its path orientation.
    fn tail_signed_area(&self) -> f64 {
        let [a, b, c] = self.tail;
        0.5 * ((a.x * b.y - b.x * a.y) + (b.x * c.y - c.x * b.y) + (c.x * a.y - a.x * c.y))
    }

    fn tail_winding(&self, pt: Point) -> i32 {
        let [a, b, c] = self.tail;
        let d0 = cross(a, b, pt);
        let d1 = cross(b, c, pt);
        let d2 = cross(c, a, pt);
        let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        if (has_neg && has_pos) || self.tail_size() <= 0.0 {
            return 0;
        }
        if self.tail_signed_area() < 0.0 { -1 } else { 1 }
    }
}

impl Shape for Bubble {
    type PathElementsIter<'iter> =
        Chain<<RoundedRect as Shape>::PathElementsIter<'iter>, array::IntoIter<PathEl, 4>>;

    fn path_elements(&self, tolerance: f64) -> Self::PathElementsIter<'_> {
        self.body
            .path_elements(tolerance)
            .chain(self.tail_elements())
    }

    /// Signed area of both subpaths.
    ///
    /// The tail winds opposite to Kurbo's rounded rectangle, so it contributes
    /// negatively, exactly as [`kurbo::BezPath::area`] would report for
    /// [`BubbleShape::path`].
    fn area(&self) -> f64 {
        self.body.area() + self.tail_signed_area()
    }

    /// Length of both subpaths, including the tail's base.
    fn perimeter(&self, accuracy: f64) -> f64 {
        let tail = self.tail_size();
        self.body.perimeter(accuracy) + 2.0 * tail + 2.0 * SQRT_2 * tail
    }

    fn winding(&self, pt: Point) -> i32 {
        match self.body.winding(pt) {
            0 => self.tail_winding(pt),
            w => w,
        }
    }

    fn bounding_box(&self) -> Rect {
        let [left, apex, right] = self.tail;
        let tail_bounds = Rect::from_points(left, right).union_pt(apex);
        self.body.bounding_box().union(tail_bounds)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Z component of `(b - a) × (p - a)`.
fn cross(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

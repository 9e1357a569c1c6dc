// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=isocontour --heading-base-level=0

//! Isocontour: the contour of a union of iso-oriented rectangles.
//!
//! Given rectangles with integer coordinates, Isocontour finds every line segment on the
//! boundary of their union, including the boundaries of holes. The result is a set of
//! horizontal segments and a set of vertical segments, each maximal and sorted.
//!
//! - The input is bounded by a frame a small [`FRAME_MARGIN`] wider than the bounding box.
//! - A divide-and-conquer pass over the vertical edges ([`dac::run_dac`]) partitions the
//!   frame into horizontal stripes, each holding the vertical edges visible inside it.
//! - Every TOP and BOTTOM edge is then walked against the stripe next to it
//!   ([`contour::contour_pieces`]) and the exposed pieces are merged.
//!
//! The crate is `no_std` and allocates through `alloc` only.
//!
//! # Example
//!
//! ```rust
//! use isocontour::{Contour, Interval, LineSegment, Rectangle};
//!
//! // Two overlapping squares, given as [x1, x2, y1, y2].
//! let rects = Rectangle::from_bounds([[0, 10, 0, 10], [5, 15, 5, 15]]).unwrap();
//! let contour = Contour::compute(&rects).unwrap();
//!
//! // The union is a staircase with eight sides.
//! assert_eq!(contour.horizontal().len(), 4);
//! assert_eq!(contour.vertical().len(), 4);
//! assert_eq!(contour.horizontal()[0], LineSegment::new(0, Interval::new(0, 10)));
//! assert_eq!(contour.perimeter(), 60);
//! ```
//!
//! The intermediate stripes can be inspected too:
//!
//! ```rust
//! use isocontour::{Rectangle, dac::run_dac};
//!
//! let rects = Rectangle::from_bounds([[0, 4, 0, 4]]).unwrap();
//! let stripes = run_dac(&rects).unwrap();
//! // Below the rectangle, across it, and above it.
//! assert_eq!(stripes.stripes().len(), 3);
//! assert_eq!(stripes.leaves(1).unwrap().len(), 2);
//! ```
//!
//! ## Features
//!
//! - `kurbo`: conversions of rectangles and contours into [Kurbo](https://docs.rs/kurbo)
//!   shapes, for drawing or SVG export.
//! - `std` (default) / `libm`: forwarded to Kurbo when it is enabled.

#![no_std]

extern crate alloc;

pub mod contour;
pub mod dac;
pub mod error;
pub mod frame;
pub mod interval_set;
#[cfg(feature = "kurbo")]
pub mod shapes;
pub mod stripe;
pub mod types;
pub mod xunion;

pub use contour::{Contour, contour_pieces, extract_contours};
pub use dac::{DacStats, run_dac};
pub use error::{ContourError, ValidationError};
pub use frame::{FRAME_MARGIN, compute_frame, compute_frame_with_margin};
pub use interval_set::IntervalSet;
pub use stripe::{Partition, Stripe, StripeSet};
pub use types::{Edge, EdgeKind, Interval, LineSegment, RectId, Rectangle, Side};
pub use xunion::{NodeIdx, XLeaf, XUnionArena};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn seg(c: i64, a: i64, b: i64) -> LineSegment {
        LineSegment::new(c, Interval::new(a, b))
    }

    #[test]
    fn overlapping_squares_form_a_staircase() {
        let rects = Rectangle::from_bounds([[0, 10, 0, 10], [5, 15, 5, 15]]).unwrap();
        let c = Contour::compute(&rects).unwrap();
        assert_eq!(
            c.horizontal(),
            [seg(0, 0, 10), seg(5, 10, 15), seg(10, 0, 5), seg(15, 5, 15)]
        );
        assert_eq!(
            c.vertical(),
            [seg(0, 0, 10), seg(5, 10, 15), seg(10, 0, 5), seg(15, 5, 15)]
        );
    }

    #[test]
    fn contained_rectangle_adds_nothing() {
        let outer = Rectangle::from_bounds([[0, 10, 0, 10]]).unwrap();
        let both = Rectangle::from_bounds([[0, 10, 0, 10], [2, 8, 3, 7]]).unwrap();
        let a = Contour::compute(&outer).unwrap();
        let b = Contour::compute(&both).unwrap();
        assert_eq!(a.horizontal(), b.horizontal());
        assert_eq!(a.vertical(), b.vertical());
    }

    #[test]
    fn corner_touching_squares_join_at_the_corner() {
        let rects = Rectangle::from_bounds([[0, 2, 0, 2], [2, 4, 2, 4]]).unwrap();
        let c = Contour::compute(&rects).unwrap();
        assert_eq!(c.horizontal(), [seg(0, 0, 2), seg(2, 0, 4), seg(4, 2, 4)]);
        assert_eq!(c.vertical(), [seg(0, 0, 2), seg(2, 0, 4), seg(4, 2, 4)]);
        assert_eq!(c.perimeter(), 16);
    }

    #[test]
    fn frame_encloses_input_with_margin() {
        let rects = Rectangle::from_bounds([[-3, 1, 4, 9]]).unwrap();
        let c = Contour::compute(&rects).unwrap();
        assert_eq!(c.frame().x, Interval::new(-5, 3));
        assert_eq!(c.frame().y, Interval::new(2, 11));
        assert_eq!(c.frame().id, RectId::FRAME);
    }

    #[test]
    fn invalid_input_is_reported() {
        let r = Rectangle::new(RectId::new(0), 4, 4, 0, 1);
        assert!(matches!(
            Contour::compute(&[r]),
            Err(ContourError::Invalid(ValidationError::Degenerate { .. }))
        ));
        assert_eq!(
            Contour::compute(&[]),
            Err(ContourError::Invalid(ValidationError::Empty))
        );
    }

    #[test]
    fn stats_follow_the_recursion() {
        let rects: Vec<_> = (0..4).map(|i| [i * 10, i * 10 + 5, 0, 5]).collect();
        let rects = Rectangle::from_bounds(rects).unwrap();
        let stripes = run_dac(&rects).unwrap();
        let stats = stripes.stats();
        assert_eq!(stats.edges, 8);
        assert_eq!(stats.merges, 7);
        assert_eq!(stats.max_depth, 3);
    }
}

// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contour extraction from a finished stripe partition.
//!
//! Horizontal boundary pieces lie on rectangle TOP and BOTTOM edges: a TOP edge is
//! exposed wherever the stripe just above it is uncovered, a BOTTOM edge wherever
//! the stripe just below it is. Vertical pieces are then recovered from the
//! endpoints of the merged horizontal pieces.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use tracing::debug;

use crate::dac::{horizontal_edges, run_dac};
use crate::error::ContourError;
use crate::stripe::StripeSet;
use crate::types::{Edge, EdgeKind, Interval, LineSegment, Rectangle, Side};

/// Exposed sub-intervals of the horizontal edge `h`, left to right.
///
/// # Errors
///
/// [`ContourError::NotHorizontal`] for LEFT/RIGHT edges and
/// [`ContourError::MissingStripe`] when no stripe borders `h`.
pub fn contour_pieces(stripes: &StripeSet, h: &Edge) -> Result<Vec<Interval>, ContourError> {
    let y = h.coordinate;
    let missing = || ContourError::MissingStripe { kind: h.kind, y };
    let stripe = match h.kind {
        EdgeKind::Top => stripes.stripe_above(y),
        EdgeKind::Bottom => stripes.stripe_below(y),
        kind @ (EdgeKind::Left | EdgeKind::Right) => {
            return Err(ContourError::NotHorizontal { kind });
        }
    }
    .ok_or_else(missing)?;

    let (low, high) = (h.span.bottom, h.span.top);
    let leaves = stripes.range_query(stripe, low, high).ok_or_else(missing)?;
    let mut out = Vec::new();
    let mut cursor = low;
    let mut outside = true;
    for leaf in leaves {
        match leaf.side {
            Side::Left => {
                let end = leaf.x.min(high);
                if cursor < end {
                    out.push(Interval::new(cursor, end));
                }
                outside = false;
            }
            Side::Right => {
                if leaf.x >= cursor {
                    cursor = leaf.x;
                    outside = true;
                }
            }
        }
    }
    if outside && cursor < high {
        out.push(Interval::new(cursor, high));
    }
    Ok(out)
}

/// Merge overlapping or touching intervals; the input must be sorted.
pub fn merge_intervals(sorted: &[Interval]) -> Vec<Interval> {
    let mut out: Vec<Interval> = Vec::with_capacity(sorted.len());
    for &cur in sorted {
        match out.last_mut() {
            Some(last) if cur.bottom <= last.top => last.top = last.top.max(cur.top),
            _ => out.push(cur),
        }
    }
    out
}

/// Horizontal and vertical contour segments for the given horizontal edges.
///
/// Horizontal segments are grouped by y and merged; vertical segments pair up
/// consecutive endpoints sharing an x. Both lists come out sorted.
///
/// # Errors
///
/// See [`contour_pieces`]; also [`ContourError::UnpairedVertex`] if an endpoint
/// has no vertical partner.
pub fn extract_contours(
    stripes: &StripeSet,
    horizontal: &[Edge],
) -> Result<(Vec<LineSegment>, Vec<LineSegment>), ContourError> {
    let mut by_y: BTreeMap<i64, Vec<Interval>> = BTreeMap::new();
    for h in horizontal {
        let pieces = contour_pieces(stripes, h)?;
        if !pieces.is_empty() {
            by_y.entry(h.coordinate).or_default().extend(pieces);
        }
    }

    let mut hor = Vec::new();
    for (y, mut pieces) in by_y {
        pieces.sort_unstable();
        hor.extend(
            merge_intervals(&pieces)
                .into_iter()
                .map(|span| LineSegment::new(y, span)),
        );
    }
    let ver = vertical_segments(&hor)?;
    Ok((hor, ver))
}

/// Pair the endpoints of merged horizontal segments into vertical segments.
fn vertical_segments(horizontal: &[LineSegment]) -> Result<Vec<LineSegment>, ContourError> {
    let mut points: Vec<(i64, i64)> = horizontal
        .iter()
        .flat_map(|s| [(s.span.bottom, s.coordinate), (s.span.top, s.coordinate)])
        .collect();
    points.sort_unstable();

    let mut pairs = points.chunks_exact(2);
    let mut out = Vec::with_capacity(points.len() / 2);
    for pair in &mut pairs {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if x0 != x1 {
            return Err(ContourError::UnpairedVertex { x: x0, y: y0 });
        }
        out.push(LineSegment::new(x0, Interval::new(y0, y1)));
    }
    if let &[(x, y)] = pairs.remainder() {
        return Err(ContourError::UnpairedVertex { x, y });
    }
    Ok(out)
}

/// Contour of the union of a set of rectangles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    frame: Rectangle,
    horizontal: Vec<LineSegment>,
    vertical: Vec<LineSegment>,
}

impl Contour {
    /// Run the stripes engine over `rects` and extract the contour.
    ///
    /// # Errors
    ///
    /// Fails on invalid input, or with an internal error if an invariant of the
    /// stripe partition is broken.
    pub fn compute(rects: &[Rectangle]) -> Result<Self, ContourError> {
        let stripes = run_dac(rects)?;
        let (horizontal, vertical) = extract_contours(&stripes, &horizontal_edges(rects))?;
        debug!(
            horizontal = horizontal.len(),
            vertical = vertical.len(),
            "extracted contour"
        );
        Ok(Self {
            frame: stripes.frame(),
            horizontal,
            vertical,
        })
    }

    /// Frame used to bound the computation.
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Horizontal segments, sorted by y then x.
    pub fn horizontal(&self) -> &[LineSegment] {
        &self.horizontal
    }

    /// Vertical segments, sorted by x then y.
    pub fn vertical(&self) -> &[LineSegment] {
        &self.vertical
    }

    /// Total number of segments.
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// True when there are no segments.
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    /// Every segment as `[x1, y1, x2, y2]`, horizontal ones first.
    pub fn endpoints(&self) -> impl Iterator<Item = [i64; 4]> + '_ {
        self.horizontal
            .iter()
            .map(LineSegment::horizontal_endpoints)
            .chain(self.vertical.iter().map(LineSegment::vertical_endpoints))
    }

    /// Total length of the contour.
    pub fn perimeter(&self) -> i128 {
        self.horizontal
            .iter()
            .chain(&self.vertical)
            .map(|s| s.span.length())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RectId;

    fn contour(rows: &[[i64; 4]]) -> Contour {
        Contour::compute(&Rectangle::from_bounds(rows.iter().copied()).unwrap()).unwrap()
    }

    fn seg(c: i64, a: i64, b: i64) -> LineSegment {
        LineSegment::new(c, Interval::new(a, b))
    }

    #[test]
    fn single_rectangle_is_its_own_contour() {
        let c = contour(&[[0, 10, 0, 5]]);
        assert_eq!(c.horizontal(), [seg(0, 0, 10), seg(5, 0, 10)]);
        assert_eq!(c.vertical(), [seg(0, 0, 5), seg(10, 0, 5)]);
        assert_eq!(c.perimeter(), 30);
    }

    #[test]
    fn disjoint_rectangles_keep_all_sides() {
        let c = contour(&[[0, 2, 0, 2], [5, 8, 4, 9]]);
        assert_eq!(c.len(), 8);
        assert_eq!(
            c.horizontal(),
            [seg(0, 0, 2), seg(2, 0, 2), seg(4, 5, 8), seg(9, 5, 8)]
        );
    }

    #[test]
    fn overlapping_rectangles_have_no_seam() {
        let c = contour(&[[0, 10, 0, 10], [5, 15, 0, 10]]);
        assert_eq!(c.horizontal(), [seg(0, 0, 15), seg(10, 0, 15)]);
        assert_eq!(c.vertical(), [seg(0, 0, 10), seg(15, 0, 10)]);
    }

    #[test]
    fn l_shape_has_six_sides() {
        let c = contour(&[[0, 10, 0, 4], [0, 4, 0, 10]]);
        assert_eq!(
            c.horizontal(),
            [seg(0, 0, 10), seg(4, 4, 10), seg(10, 0, 4)]
        );
        assert_eq!(
            c.vertical(),
            [seg(0, 0, 10), seg(4, 4, 10), seg(10, 0, 4)]
        );
    }

    #[test]
    fn hole_produces_inner_boundary() {
        // A ring of four bars around the square [2, 4] x [2, 4].
        let c = contour(&[
            [0, 6, 0, 2],
            [0, 6, 4, 6],
            [0, 2, 0, 6],
            [4, 6, 0, 6],
        ]);
        assert_eq!(
            c.horizontal(),
            [seg(0, 0, 6), seg(2, 2, 4), seg(4, 2, 4), seg(6, 0, 6)]
        );
        assert_eq!(
            c.vertical(),
            [seg(0, 0, 6), seg(2, 2, 4), seg(4, 2, 4), seg(6, 0, 6)]
        );
    }

    #[test]
    fn covered_edge_emits_nothing_even_at_run_boundary() {
        // The top of the small rectangle ends exactly where the cover ends.
        let rects = Rectangle::from_bounds([[0, 10, 0, 5], [-5, 10, 5, 8], [12, 20, 5, 8]]).unwrap();
        let stripes = run_dac(&rects).unwrap();
        let top = rects[0].horizontal_edges()[1];
        assert_eq!(top.kind, EdgeKind::Top);
        assert_eq!(contour_pieces(&stripes, &top).unwrap(), []);
    }

    #[test]
    fn vertical_edges_are_not_walked() {
        let rects = Rectangle::from_bounds([[0, 10, 0, 5]]).unwrap();
        let stripes = run_dac(&rects).unwrap();
        let left = rects[0].vertical_edges()[0];
        assert_eq!(
            contour_pieces(&stripes, &left),
            Err(ContourError::NotHorizontal {
                kind: EdgeKind::Left
            })
        );
    }

    #[test]
    fn edge_off_the_partition_is_an_internal_error() {
        let rects = Rectangle::from_bounds([[0, 10, 0, 5]]).unwrap();
        let stripes = run_dac(&rects).unwrap();
        let stray = Edge::new(EdgeKind::Top, 3, Interval::new(0, 1), RectId::new(0));
        assert_eq!(
            extract_contours(&stripes, &[stray]),
            Err(ContourError::MissingStripe {
                kind: EdgeKind::Top,
                y: 3
            })
        );
    }

    #[test]
    fn merge_joins_overlapping_and_touching() {
        let merged = merge_intervals(&[
            Interval::new(0, 2),
            Interval::new(1, 4),
            Interval::new(4, 5),
            Interval::new(7, 9),
        ]);
        assert_eq!(merged, [Interval::new(0, 5), Interval::new(7, 9)]);
    }

    #[test]
    fn odd_vertex_count_is_reported() {
        let err = vertical_segments(&[seg(0, 0, 4), seg(3, 0, 2)]).unwrap_err();
        assert!(matches!(err, ContourError::UnpairedVertex { .. }));
    }

    #[test]
    fn endpoints_list_horizontal_then_vertical() {
        let c = contour(&[[0, 10, 0, 5]]);
        let rows: Vec<_> = c.endpoints().collect();
        assert_eq!(
            rows,
            [
                [0, 0, 10, 0],
                [0, 5, 10, 5],
                [0, 0, 0, 5],
                [10, 0, 10, 5]
            ]
        );
    }

    #[test]
    fn repeated_runs_give_identical_contours() {
        let rows = [[0, 4, 0, 3], [2, 9, 1, 7], [6, 8, -4, 2], [1, 3, 5, 6]];
        assert_eq!(contour(&rows), contour(&rows));
    }
}

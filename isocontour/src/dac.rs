// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divide-and-conquer stripes engine.
//!
//! The vertical edges, sorted by x, are split at their median index. Each half
//! is solved over its own x-range and the two partial results are merged across
//! the splitting line:
//!
//! - `L`/`R`: edges whose partner lies outside the strip,
//! - `P`: partition points,
//! - `S`: stripes with their x-union trees.
//!
//! A LEFT edge of the left half and a RIGHT edge of the right half with the same
//! interval and owner belong to a rectangle spanning the split; they cancel.
//! Unmatched edges cover the whole opposite half over their interval, so the
//! stripes they contain lose their trees before the halves are joined.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::error::ContourError;
use crate::frame::compute_frame;
use crate::interval_set::IntervalSet;
use crate::stripe::{Partition, Stripe, StripeSet, blacken, concat, refine};
use crate::types::{Edge, Interval, RectId, Rectangle, Side};
use crate::xunion::XUnionArena;

/// Counters collected during one run of the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DacStats {
    /// Vertical edges fed to the engine.
    pub edges: usize,
    /// Merge steps performed.
    pub merges: usize,
    /// Deepest recursion level reached; the root is level 0.
    pub max_depth: usize,
}

/// Partial solution for one vertical strip.
#[derive(Debug)]
struct Partial {
    left: IntervalSet,
    right: IntervalSet,
    points: Partition,
    stripes: Vec<Stripe>,
}

/// LEFT and RIGHT edges of all rectangles, sorted.
pub fn vertical_edges(rects: &[Rectangle]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = rects.iter().flat_map(|r| r.vertical_edges()).collect();
    edges.sort_unstable();
    edges
}

/// BOTTOM and TOP edges of all rectangles, sorted.
pub fn horizontal_edges(rects: &[Rectangle]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = rects.iter().flat_map(|r| r.horizontal_edges()).collect();
    edges.sort_unstable();
    edges
}

/// A LEFT or RIGHT edge as the engine sees it.
#[derive(Copy, Clone, Debug)]
struct Vertical {
    x: i64,
    side: Side,
    span: Interval,
    owner: RectId,
}

impl Vertical {
    fn from_edge(e: &Edge) -> Option<Self> {
        Some(Self {
            x: e.coordinate,
            side: e.kind.side()?,
            span: e.span,
            owner: e.owner,
        })
    }
}

/// Build the final stripe partition of the frame around `rects`.
///
/// # Errors
///
/// Rejects input that fails [`compute_frame`], and reports
/// [`ContourError::UnmatchedEdges`] if some edge never met its partner.
pub fn run_dac(rects: &[Rectangle]) -> Result<StripeSet, ContourError> {
    let frame = compute_frame(rects)?;
    let edges: Vec<Vertical> = vertical_edges(rects)
        .iter()
        .filter_map(Vertical::from_edge)
        .collect();
    let mut engine = Engine {
        arena: XUnionArena::new(),
        y_limits: frame.y,
        stats: DacStats {
            edges: edges.len(),
            ..DacStats::default()
        },
    };
    let root = engine.stripes(&edges, frame.x, 0);
    check_closed(&root)?;
    debug!(
        edges = engine.stats.edges,
        merges = engine.stats.merges,
        depth = engine.stats.max_depth,
        stripes = root.stripes.len(),
        nodes = engine.arena.len(),
        "built stripes"
    );
    Ok(StripeSet::new(frame, root.stripes, engine.arena, engine.stats))
}

/// Across the whole frame every LEFT edge must have met its RIGHT partner.
fn check_closed(root: &Partial) -> Result<(), ContourError> {
    if root.left.is_empty() && root.right.is_empty() {
        Ok(())
    } else {
        Err(ContourError::UnmatchedEdges {
            left: root.left.len(),
            right: root.right.len(),
        })
    }
}

struct Engine {
    arena: XUnionArena,
    y_limits: Interval,
    stats: DacStats,
}

impl Engine {
    /// Partial solution for the strip `x`; `edges` is never empty.
    fn stripes(&mut self, edges: &[Vertical], x: Interval, depth: usize) -> Partial {
        self.stats.max_depth = self.stats.max_depth.max(depth);
        if let [e] = edges {
            return self.base(e, x);
        }
        let (v1, v2) = edges.split_at(edges.len() / 2);
        let xm = v2[0].x;
        let left = self.stripes(v1, Interval::new(x.bottom, xm), depth + 1);
        let right = self.stripes(v2, Interval::new(xm, x.top), depth + 1);
        self.merge(left, right, x, xm)
    }

    fn base(&mut self, e: &Vertical, x: Interval) -> Partial {
        let own = IntervalSet::singleton(e.span, e.owner);
        let (left, right) = match e.side {
            Side::Left => (own, IntervalSet::new()),
            Side::Right => (IntervalSet::new(), own),
        };
        let points = Partition::from_points([
            self.y_limits.bottom,
            e.span.bottom,
            e.span.top,
            self.y_limits.top,
        ]);
        let mut stripes = Vec::with_capacity(points.stripe_count());
        for y in points.intervals() {
            let tree = (y == e.span).then(|| self.arena.leaf(e.x, e.side));
            stripes.push(Stripe { x, y, tree });
        }
        Partial {
            left,
            right,
            points,
            stripes,
        }
    }

    fn merge(&mut self, left: Partial, right: Partial, x: Interval, xm: i64) -> Partial {
        self.stats.merges += 1;

        let lr = left.left.intersect(&right.right);
        let l1lr = left.left.difference(&lr);
        let r2lr = right.right.difference(&lr);
        let l = right.left.union(&l1lr);
        let r = left.right.union(&r2lr);

        let points = left.points.union(&right.points);
        let s_left = refine(left.stripes, &points, Interval::new(x.bottom, xm));
        let s_right = refine(right.stripes, &points, Interval::new(xm, x.top));
        let s_left = blacken(s_left, &r2lr);
        let s_right = blacken(s_right, &l1lr);
        let stripes = concat(&mut self.arena, s_left, s_right, x);

        trace!(
            xm,
            matched = lr.len(),
            open_left = l.len(),
            open_right = r.len(),
            stripes = stripes.len(),
            "merged strips"
        );
        Partial {
            left: l,
            right: r,
            points,
            stripes,
        }
    }
}

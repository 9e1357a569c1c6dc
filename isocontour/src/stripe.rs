// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stripe partitions of the frame and the three ways the engine reshapes them.
//!
//! A stripe is a horizontal band over which the x-union is structurally constant.
//! A stripe list always covers the full vertical extent of the frame, sorted by
//! y, and is consumed by value whenever it is reshaped: a tree handle lives in
//! exactly one list at a time.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::dac::DacStats;
use crate::interval_set::IntervalSet;
use crate::types::{Interval, Rectangle};
use crate::xunion::{NodeIdx, XLeaf, XUnionArena};

/// Sorted, duplicate-free y-coordinates cutting the frame into stripes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    points: Vec<i64>,
}

impl Partition {
    /// Partition from arbitrary points; they are sorted and deduplicated.
    pub fn from_points<I: IntoIterator<Item = i64>>(points: I) -> Self {
        let mut points: Vec<_> = points.into_iter().collect();
        points.sort_unstable();
        points.dedup();
        Self { points }
    }

    /// The cut points, ascending.
    pub fn points(&self) -> &[i64] {
        &self.points
    }

    /// Number of stripes the partition induces.
    pub fn stripe_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Consecutive intervals between the cut points, bottom to top.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.points.windows(2).map(|w| Interval::new(w[0], w[1]))
    }

    /// Points of both partitions, merged in one pass.
    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (&self.points, &other.points);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => {
                    out.push(a[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    out.push(b[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend_from_slice(&a[i..]);
        out.extend_from_slice(&b[j..]);
        Self { points: out }
    }
}

/// One horizontal band of the frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stripe {
    /// x-range of the strip that produced this stripe.
    pub x: Interval,
    /// Vertical extent of the band.
    pub y: Interval,
    /// Visible vertical edges in the band, absent when there are none.
    pub tree: Option<NodeIdx>,
}

/// Rebuild `stripes` against a finer `partition` (the "copy" step).
///
/// Each new stripe takes the tree of the unique old stripe containing it. Every
/// point of the old partition must appear in `partition`.
pub fn refine(stripes: Vec<Stripe>, partition: &Partition, x: Interval) -> Vec<Stripe> {
    let mut out = Vec::with_capacity(partition.stripe_count());
    let mut old = stripes.into_iter().peekable();
    for y in partition.intervals() {
        let mut tree = None;
        while let Some(s) = old.peek() {
            if y.bottom < s.y.bottom {
                break;
            }
            if y.top <= s.y.top {
                tree = s.tree;
                break;
            }
            let _ = old.next();
        }
        out.push(Stripe { x, y, tree });
    }
    out
}

/// Clear the tree of every stripe contained in an interval of `cancelled`.
///
/// Those stripes are covered across the whole strip by a rectangle whose other
/// edge lies outside it, so none of their edges can be visible any more.
pub fn blacken(stripes: Vec<Stripe>, cancelled: &IntervalSet) -> Vec<Stripe> {
    let mut j = cancelled.iter().map(|(i, _)| *i).peekable();
    stripes
        .into_iter()
        .map(|mut s| {
            while let Some(i) = j.peek() {
                if s.y.bottom < i.bottom {
                    break;
                }
                if s.y.top <= i.top {
                    s.tree = None;
                    break;
                }
                let _ = j.next();
            }
            s
        })
        .collect()
}

/// Join two stripe lists sharing one partition into a list spanning `x`.
///
/// Each pair of trees is joined at the left stripe's `x.top`, the split coordinate.
pub fn concat(
    arena: &mut XUnionArena,
    left: Vec<Stripe>,
    right: Vec<Stripe>,
    x: Interval,
) -> Vec<Stripe> {
    debug_assert_eq!(left.len(), right.len(), "stripe lists must share a partition");
    left.into_iter()
        .zip(right)
        .map(|(l, r)| {
            debug_assert_eq!(l.y, r.y, "stripe lists must share a partition");
            Stripe {
                x,
                y: l.y,
                tree: arena.concat(l.tree, r.tree, l.x.top),
            }
        })
        .collect()
}

/// Final stripes of a run together with the arena their trees live in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripeSet {
    frame: Rectangle,
    stripes: Vec<Stripe>,
    arena: XUnionArena,
    stats: DacStats,
}

impl StripeSet {
    pub(crate) fn new(
        frame: Rectangle,
        stripes: Vec<Stripe>,
        arena: XUnionArena,
        stats: DacStats,
    ) -> Self {
        Self {
            frame,
            stripes,
            arena,
            stats,
        }
    }

    /// Frame the stripes partition.
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Stripes, bottom to top.
    pub fn stripes(&self) -> &[Stripe] {
        &self.stripes
    }

    /// Arena holding every tree of the run.
    pub fn arena(&self) -> &XUnionArena {
        &self.arena
    }

    /// Counters collected while the stripes were built.
    pub fn stats(&self) -> DacStats {
        self.stats
    }

    /// The stripe at `index`, counting from the bottom.
    pub fn stripe(&self, index: usize) -> Option<&Stripe> {
        self.stripes.get(index)
    }

    /// Visible vertical edges of the stripe at `index`, in x order.
    pub fn leaves(&self, index: usize) -> Option<Vec<XLeaf>> {
        self.arena.leaves(self.stripe(index)?.tree)
    }

    /// Leaves of the stripe at `index` reachable for the x-range `[low, high]`.
    ///
    /// See [`XUnionArena::range_query`].
    pub fn range_query(&self, index: usize, low: i64, high: i64) -> Option<Vec<XLeaf>> {
        self.arena.range_query(self.stripe(index)?.tree, low, high)
    }

    /// Index of the stripe whose bottom boundary is `y`.
    pub fn stripe_above(&self, y: i64) -> Option<usize> {
        let i = self.stripes.partition_point(|s| s.y.bottom < y);
        self.stripes.get(i).filter(|s| s.y.bottom == y).map(|_| i)
    }

    /// Index of the stripe whose top boundary is `y`.
    pub fn stripe_below(&self, y: i64) -> Option<usize> {
        let i = self.stripes.partition_point(|s| s.y.top < y);
        self.stripes.get(i).filter(|s| s.y.top == y).map(|_| i)
    }
}

// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorted sets of `(interval, owner)` pairs and their merge algebra.
//!
//! The stripes engine tracks, for every vertical strip, which LEFT and RIGHT edges
//! still lack their partner inside the strip. Those edges are kept as sets of
//! `(y-interval, owning rectangle)` pairs sorted by `(bottom, top, owner)`, so the
//! three operations below are single linear merge passes.
//!
//! Owner ids make coincident edges of different rectangles distinct. When two pairs
//! share bounds, the one with the smaller owner id is stepped past first; both
//! [`IntervalSet::intersect`] and [`IntervalSet::difference`] rely on this same order.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::types::{Interval, RectId};

/// A y-interval tagged with the rectangle whose edge produced it.
pub type OwnedInterval = (Interval, RectId);

/// Ordered set of [`OwnedInterval`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalSet {
    items: Vec<OwnedInterval>,
}

/// Merge order: bounds first, then the smaller owner id.
fn merge_order(a: &OwnedInterval, b: &OwnedInterval) -> Ordering {
    match a.0.bottom.cmp(&b.0.bottom) {
        Ordering::Equal => match a.0.top.cmp(&b.0.top) {
            Ordering::Equal => a.1.cmp(&b.1),
            o => o,
        },
        o => o,
    }
}

impl IntervalSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// A set holding one pair.
    pub fn singleton(interval: Interval, owner: RectId) -> Self {
        Self {
            items: alloc::vec![(interval, owner)],
        }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pairs in merge order.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedInterval> + '_ {
        self.items.iter()
    }

    /// Pairs present, with the same owner, in both sets.
    pub fn intersect(&self, other: &Self) -> Self {
        let (a, b) = (&self.items, &other.items);
        let mut out = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match merge_order(&a[i], &b[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        Self { items: out }
    }

    /// Pairs of `self` not cancelled by an identical pair of `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let (a, b) = (&self.items, &other.items);
        let mut out = Vec::with_capacity(a.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match merge_order(&a[i], &b[j]) {
                Ordering::Less => {
                    out.push(a[i]);
                    i += 1;
                }
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend_from_slice(&a[i..]);
        Self { items: out }
    }

    /// All pairs of both sets; identical pairs collapse.
    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (&self.items, &other.items);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match merge_order(&a[i], &b[j]) {
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
        Self { items: out }
    }

    /// Whether some interval of the set contains `y` entirely.
    ///
    /// Reference check for [`blacken`](crate::stripe::blacken), which walks the
    /// stripes and the set together.
    #[cfg(test)]
    pub(crate) fn covers(&self, y: &Interval) -> bool {
        self.items.iter().any(|(i, _)| i.contains(y))
    }
}

impl FromIterator<OwnedInterval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = OwnedInterval>>(iter: I) -> Self {
        let mut items: Vec<_> = iter.into_iter().collect();
        items.sort_by(merge_order);
        items.dedup();
        Self { items }
    }
}

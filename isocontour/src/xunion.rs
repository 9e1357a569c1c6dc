// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena of x-union trees.
//!
//! An x-union tree records, for one stripe, the vertical edges that bound the
//! union inside the stripe's x-range. Leaves are tagged [`Side::Left`] or
//! [`Side::Right`]; join nodes only split the tree at a coordinate and are never
//! reported. An in-order walk of the leaves yields the edges sorted by x.
//!
//! Nodes are immutable once pushed. Subtrees are shared between stripes by handle
//! as the stripes engine splits and rejoins stripes, so the arena is a forest of
//! persistent trees and a [`NodeIdx`] never dangles while the arena lives.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Side;

/// Handle of a node in an [`XUnionArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Kind {
    Leaf(Side),
    Join { left: NodeIdx, right: NodeIdx },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Node {
    x: i64,
    kind: Kind,
}

/// A visible vertical edge reported by a tree walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct XLeaf {
    /// x-coordinate of the edge.
    pub x: i64,
    /// Whether a covered run starts or ends here.
    pub side: Side,
}

/// Storage for every x-union node created during one run of the stripes engine.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct XUnionArena {
    nodes: Vec<Node>,
}

impl XUnionArena {
    /// An empty arena.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no node was allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// A single-leaf tree for a vertical edge at `x`.
    pub fn leaf(&mut self, x: i64, side: Side) -> NodeIdx {
        self.push(Node {
            x,
            kind: Kind::Leaf(side),
        })
    }

    /// Join two trees at `split_x`.
    ///
    /// Every leaf of `left` must lie at or before `split_x` and every leaf of
    /// `right` at or after it. When one side is absent the other is returned
    /// unchanged; no join node ever has a missing child.
    pub fn concat(
        &mut self,
        left: Option<NodeIdx>,
        right: Option<NodeIdx>,
        split_x: i64,
    ) -> Option<NodeIdx> {
        match (left, right) {
            (Some(left), Some(right)) => Some(self.push(Node {
                x: split_x,
                kind: Kind::Join { left, right },
            })),
            (one, None) | (None, one) => one,
        }
    }

    /// Leaves of `root` reachable for the x-range `[low, high]`, in order.
    ///
    /// A join's left subtree is visited only if its split is `>= low`, its right
    /// subtree only if the split is `<= high`. All leaves inside the range are
    /// reported. Leaves just outside the range that lie on a visited path are
    /// reported too; they tell the caller whether `low` opens inside a covered run.
    ///
    /// Returns `None` if the walk reaches a handle this arena never issued.
    pub fn range_query(&self, root: Option<NodeIdx>, low: i64, high: i64) -> Option<Vec<XLeaf>> {
        let mut out = Vec::new();
        let Some(root) = root else {
            return Some(out);
        };
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            let n = self.nodes.get(i.get())?;
            match n.kind {
                Kind::Leaf(side) => out.push(XLeaf { x: n.x, side }),
                Kind::Join { left, right } => {
                    // Right first so the left subtree pops first.
                    if n.x <= high {
                        stack.push(right);
                    }
                    if n.x >= low {
                        stack.push(left);
                    }
                }
            }
        }
        Some(out)
    }

    /// Every leaf of `root`, in order; `None` for a handle from another arena.
    pub fn leaves(&self, root: Option<NodeIdx>) -> Option<Vec<XLeaf>> {
        self.range_query(root, i64::MIN, i64::MAX)
    }
}

impl Debug for XUnionArena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self
            .nodes
            .iter()
            .filter(|n| matches!(n.kind, Kind::Leaf(_)))
            .count();
        f.debug_struct("XUnionArena")
            .field("nodes", &self.nodes.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}

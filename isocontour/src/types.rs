// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: intervals, rectangles, edges and output segments.

use core::fmt;

use crate::error::ValidationError;

/// Closed integer interval `[bottom, top]`.
///
/// Ordered by `bottom`, then by `top`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    /// Smaller coordinate.
    pub bottom: i64,
    /// Larger coordinate.
    pub top: i64,
}

impl Interval {
    /// Create an interval from its two bounds.
    pub const fn new(bottom: i64, top: i64) -> Self {
        Self { bottom, top }
    }

    /// Whether `other` lies entirely within this interval.
    pub const fn contains(&self, other: &Self) -> bool {
        self.bottom <= other.bottom && other.top <= self.top
    }

    /// Whether `x` lies within this interval (bounds included).
    pub const fn contains_point(&self, x: i64) -> bool {
        self.bottom <= x && x <= self.top
    }

    /// Length of the interval, widened so extreme coordinates cannot overflow.
    pub const fn length(&self) -> i128 {
        self.top as i128 - self.bottom as i128
    }

    /// True when `bottom < top`, i.e. the interval has positive length.
    pub const fn is_proper(&self) -> bool {
        self.bottom < self.top
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.bottom, self.top)
    }
}

/// Stable identifier of an input rectangle, assigned by input order from 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RectId(pub(crate) u32);

impl RectId {
    /// Identifier carried by the bounding frame, which is not an input rectangle.
    pub const FRAME: Self = Self(u32::MAX);

    /// Create an identifier from an input position.
    pub const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// The input position this identifier was assigned from.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::FRAME {
            f.write_str("frame")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Iso-oriented (axis-aligned) rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Horizontal extent (left, right).
    pub x: Interval,
    /// Vertical extent (bottom, top).
    pub y: Interval,
    /// Input-order identifier, used to break ties between coincident edges.
    pub id: RectId,
}

impl Rectangle {
    /// Create a rectangle from `x1 x2 y1 y2` bounds, as they appear in the input format.
    pub const fn new(id: RectId, x1: i64, x2: i64, y1: i64, y2: i64) -> Self {
        Self {
            x: Interval::new(x1, x2),
            y: Interval::new(y1, y2),
            id,
        }
    }

    /// Build rectangles from `[x1, x2, y1, y2]` rows, assigning ids by position.
    ///
    /// Every rectangle is validated; see [`Rectangle::validate`].
    ///
    /// # Errors
    ///
    /// Fails when a rectangle is degenerate or there are more rows than ids.
    pub fn from_bounds<I>(rows: I) -> Result<alloc::vec::Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = [i64; 4]>,
    {
        rows.into_iter()
            .enumerate()
            .map(|(i, [x1, x2, y1, y2])| {
                let idx = u32::try_from(i)
                    .ok()
                    .filter(|&v| v != RectId::FRAME.0)
                    .ok_or(ValidationError::TooManyRectangles { count: i })?;
                let r = Self::new(RectId::new(idx), x1, x2, y1, y2);
                r.validate()?;
                Ok(r)
            })
            .collect()
    }

    /// Check that both extents have positive length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Degenerate`] naming the offending rectangle.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.x.is_proper() && self.y.is_proper() {
            Ok(())
        } else {
            Err(ValidationError::Degenerate {
                id: self.id,
                x: self.x,
                y: self.y,
            })
        }
    }

    /// The LEFT and RIGHT sides of the rectangle.
    pub const fn vertical_edges(&self) -> [Edge; 2] {
        [
            Edge::new(EdgeKind::Left, self.x.bottom, self.y, self.id),
            Edge::new(EdgeKind::Right, self.x.top, self.y, self.id),
        ]
    }

    /// The BOTTOM and TOP sides of the rectangle.
    pub const fn horizontal_edges(&self) -> [Edge; 2] {
        [
            Edge::new(EdgeKind::Bottom, self.y.bottom, self.x, self.id),
            Edge::new(EdgeKind::Top, self.y.top, self.x, self.id),
        ]
    }
}

/// Which side of its rectangle an [`Edge`] is.
///
/// The declaration order makes LEFT sort before RIGHT at equal coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKind {
    /// Left side: the rectangle extends to the right of it.
    Left,
    /// Right side: the rectangle extends to the left of it.
    Right,
    /// Bottom side: the rectangle extends above it.
    Bottom,
    /// Top side: the rectangle extends below it.
    Top,
}

impl EdgeKind {
    /// The leaf tag this kind produces in an x-union tree, for vertical kinds.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
            Self::Bottom | Self::Top => None,
        }
    }

    /// True for TOP and BOTTOM.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Bottom => "BOTTOM",
            Self::Top => "TOP",
        })
    }
}

/// Tag of an x-union leaf: the kind of vertical edge it stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// A covered run starts at this coordinate.
    Left,
    /// A covered run ends at this coordinate.
    Right,
}

/// One side of a rectangle.
///
/// Ordered by fixed coordinate, then kind (LEFT before RIGHT), then span, then owner.
/// Field order matters: the derived ordering follows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Fixed coordinate: x for vertical edges, y for horizontal ones.
    pub coordinate: i64,
    /// Which side of the owner this is.
    pub kind: EdgeKind,
    /// Extent along the other axis.
    pub span: Interval,
    /// Rectangle the edge belongs to.
    pub owner: RectId,
}

impl Edge {
    /// Create an edge.
    pub const fn new(kind: EdgeKind, coordinate: i64, span: Interval, owner: RectId) -> Self {
        Self {
            coordinate,
            kind,
            span,
            owner,
        }
    }
}

/// Output boundary piece: a fixed coordinate and the interval it spans on the other axis.
///
/// Whether it is horizontal or vertical depends on which list it is stored in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineSegment {
    /// y for horizontal segments, x for vertical ones.
    pub coordinate: i64,
    /// Extent along the other axis.
    pub span: Interval,
}

impl LineSegment {
    /// Create a segment.
    pub const fn new(coordinate: i64, span: Interval) -> Self {
        Self { coordinate, span }
    }

    /// Endpoints `[x1, y1, x2, y2]` of the segment read as horizontal.
    pub const fn horizontal_endpoints(&self) -> [i64; 4] {
        [self.span.bottom, self.coordinate, self.span.top, self.coordinate]
    }

    /// Endpoints `[x1, y1, x2, y2]` of the segment read as vertical.
    pub const fn vertical_endpoints(&self) -> [i64; 4] {
        [self.coordinate, self.span.bottom, self.coordinate, self.span.top]
    }
}

// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for input validation and contour extraction.

use crate::types::{EdgeKind, Interval, RectId};

/// Input rejected before the stripes engine runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No rectangles were supplied.
    #[error("at least one rectangle is required")]
    Empty,

    /// A rectangle has an empty or reversed extent on some axis.
    #[error("rectangle {id} is degenerate: x = {x}, y = {y}")]
    Degenerate {
        /// Offending rectangle.
        id: RectId,
        /// Its horizontal extent.
        x: Interval,
        /// Its vertical extent.
        y: Interval,
    },

    /// More rectangles than identifiers can address.
    #[error("too many rectangles: {count}")]
    TooManyRectangles {
        /// Number of rectangles seen when ids ran out.
        count: usize,
    },

    /// The frame margin must leave at least one unit around the input.
    #[error("frame margin must be at least 1, got {margin}")]
    Margin {
        /// Requested margin.
        margin: i64,
    },

    /// Growing the bounding box by the margin leaves the `i64` range.
    #[error("frame around {bounds_x} x {bounds_y} overflows with margin {margin}")]
    FrameOverflow {
        /// Horizontal bounding extent before the margin.
        bounds_x: Interval,
        /// Vertical bounding extent before the margin.
        bounds_y: Interval,
        /// Requested margin.
        margin: i64,
    },
}

/// Errors produced while computing a contour.
///
/// Apart from [`ContourError::Invalid`], every variant signals a broken internal
/// invariant rather than bad input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContourError {
    /// The input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Some vertical edges never met their partner across the frame.
    #[error("{left} LEFT and {right} RIGHT edges found no partner")]
    UnmatchedEdges {
        /// Open LEFT edges left at the root.
        left: usize,
        /// Open RIGHT edges left at the root.
        right: usize,
    },

    /// No stripe has a boundary at the y-coordinate of a horizontal edge.
    #[error("no stripe borders the {kind} edge at y = {y}")]
    MissingStripe {
        /// Kind of the horizontal edge.
        kind: EdgeKind,
        /// Its y-coordinate.
        y: i64,
    },

    /// A vertical edge was handed to the horizontal contour walk.
    #[error("{kind} edge is not horizontal")]
    NotHorizontal {
        /// Kind of the rejected edge.
        kind: EdgeKind,
    },

    /// A contour vertex has no partner to form a vertical segment.
    #[error("contour vertex ({x}, {y}) has no vertical partner")]
    UnpairedVertex {
        /// x-coordinate of the vertex.
        x: i64,
        /// y-coordinate of the vertex.
        y: i64,
    },
}

// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding frame of the input.
//!
//! The frame bounds the recursion of the stripes engine. It is not part of the
//! contour: its margin guarantees an empty stripe below and above every rectangle.

use crate::error::ValidationError;
use crate::types::{Interval, RectId, Rectangle};

/// Units added on every side of the bounding box.
pub const FRAME_MARGIN: i64 = 2;

/// Smallest rectangle enclosing all inputs, grown by [`FRAME_MARGIN`] on each side.
///
/// # Errors
///
/// See [`compute_frame_with_margin`].
pub fn compute_frame(rects: &[Rectangle]) -> Result<Rectangle, ValidationError> {
    compute_frame_with_margin(rects, FRAME_MARGIN)
}

/// Smallest rectangle enclosing all inputs, grown by `margin` on each side.
///
/// Every rectangle is validated on the way.
///
/// # Errors
///
/// Fails on an empty input, a degenerate rectangle, a margin below 1, or a frame
/// that does not fit in `i64`.
pub fn compute_frame_with_margin(
    rects: &[Rectangle],
    margin: i64,
) -> Result<Rectangle, ValidationError> {
    if margin < 1 {
        return Err(ValidationError::Margin { margin });
    }
    let (first, rest) = rects.split_first().ok_or(ValidationError::Empty)?;
    first.validate()?;
    let mut bx = first.x;
    let mut by = first.y;
    for r in rest {
        r.validate()?;
        bx = Interval::new(bx.bottom.min(r.x.bottom), bx.top.max(r.x.top));
        by = Interval::new(by.bottom.min(r.y.bottom), by.top.max(r.y.top));
    }
    let grow = |i: Interval| {
        Some(Interval::new(
            i.bottom.checked_sub(margin)?,
            i.top.checked_add(margin)?,
        ))
    };
    match (grow(bx), grow(by)) {
        (Some(x), Some(y)) => Ok(Rectangle {
            x,
            y,
            id: RectId::FRAME,
        }),
        _ => Err(ValidationError::FrameOverflow {
            bounds_x: bx,
            bounds_y: by,
            margin,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_encloses_inputs_with_margin() {
        let rects = Rectangle::from_bounds([[0, 10, 0, 5], [-3, 4, 2, 9]]).unwrap();
        let frame = compute_frame(&rects).unwrap();
        assert_eq!(frame.x, Interval::new(-5, 12));
        assert_eq!(frame.y, Interval::new(-2, 11));
        assert_eq!(frame.id, RectId::FRAME);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(compute_frame(&[]), Err(ValidationError::Empty));
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let rects = [
            Rectangle::new(RectId::new(0), 0, 1, 0, 1),
            Rectangle::new(RectId::new(1), 0, 1, 5, 2),
        ];
        assert!(matches!(
            compute_frame(&rects),
            Err(ValidationError::Degenerate { id, .. }) if id == RectId::new(1)
        ));
    }

    #[test]
    fn margin_must_be_positive_and_fit() {
        let rects = Rectangle::from_bounds([[0, 1, 0, 1]]).unwrap();
        assert_eq!(
            compute_frame_with_margin(&rects, 0),
            Err(ValidationError::Margin { margin: 0 })
        );
        let huge = Rectangle::from_bounds([[0, i64::MAX - 1, 0, 1]]).unwrap();
        assert!(matches!(
            compute_frame(&huge),
            Err(ValidationError::FrameOverflow { margin: 2, .. })
        ));
    }
}

// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to Kurbo shapes, for drawing inputs and contours.

use alloc::vec::Vec;

use kurbo::{BezPath, Line, Rect};

use crate::contour::Contour;
use crate::types::{LineSegment, Rectangle};

#[allow(
    clippy::cast_precision_loss,
    reason = "Drawing coordinates; exactness beyond 2^53 is not needed."
)]
fn f(v: i64) -> f64 {
    v as f64
}

impl Rectangle {
    /// The rectangle as a Kurbo [`Rect`].
    pub fn to_kurbo(&self) -> Rect {
        Rect::new(f(self.x.bottom), f(self.y.bottom), f(self.x.top), f(self.y.top))
    }
}

impl LineSegment {
    /// The segment read as horizontal, as a Kurbo [`Line`].
    pub fn to_horizontal_line(&self) -> Line {
        let [x1, y1, x2, y2] = self.horizontal_endpoints();
        Line::new((f(x1), f(y1)), (f(x2), f(y2)))
    }

    /// The segment read as vertical, as a Kurbo [`Line`].
    pub fn to_vertical_line(&self) -> Line {
        let [x1, y1, x2, y2] = self.vertical_endpoints();
        Line::new((f(x1), f(y1)), (f(x2), f(y2)))
    }
}

impl Contour {
    /// Every segment as a Kurbo [`Line`], horizontal ones first.
    pub fn to_lines(&self) -> Vec<Line> {
        self.horizontal()
            .iter()
            .map(LineSegment::to_horizontal_line)
            .chain(self.vertical().iter().map(LineSegment::to_vertical_line))
            .collect()
    }

    /// The contour as one path of disconnected line subpaths.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for line in self.to_lines() {
            path.move_to(line.p0);
            path.line_to(line.p1);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Point};

    #[test]
    fn rectangle_maps_to_rect() {
        let r = Rectangle::from_bounds([[1, 4, -2, 3]]).unwrap()[0];
        assert_eq!(r.to_kurbo(), Rect::new(1.0, -2.0, 4.0, 3.0));
    }

    #[test]
    fn contour_path_has_one_subpath_per_segment() {
        let rects = Rectangle::from_bounds([[0, 10, 0, 5]]).unwrap();
        let c = Contour::compute(&rects).unwrap();
        let lines = c.to_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], Line::new((0.0, 0.0), (10.0, 0.0)));
        assert_eq!(lines[2], Line::new((0.0, 0.0), (0.0, 5.0)));

        let path = c.to_bez_path();
        let moves = path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 4);
        assert_eq!(path.elements()[1], PathEl::LineTo(Point::new(10.0, 0.0)));
    }
}

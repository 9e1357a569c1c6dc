// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Isocontour: compute the contour of a few rectangles and print it.

use isocontour::{Contour, Rectangle, run_dac};

fn main() {
    // A plus sign and a separate square, as [x1, x2, y1, y2].
    let rects = Rectangle::from_bounds([[0, 9, 3, 6], [3, 6, 0, 9], [12, 14, 0, 2]]).unwrap();

    let stripes = run_dac(&rects).unwrap();
    println!("frame: {:?}", stripes.frame());
    println!("stats: {:?}", stripes.stats());
    for (i, s) in stripes.stripes().iter().enumerate() {
        let xs: Vec<_> = stripes
            .leaves(i)
            .unwrap_or_default()
            .iter()
            .map(|l| l.x)
            .collect();
        println!("stripe {}: visible edges at {:?}", s.y, xs);
    }

    let contour = Contour::compute(&rects).unwrap();
    for [x1, y1, x2, y2] in contour.endpoints() {
        println!("({x1}, {y1}) -> ({x2}, {y2})");
    }
    println!(
        "{} segments, perimeter {}",
        contour.len(),
        contour.perimeter()
    );
}

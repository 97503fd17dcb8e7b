//! Two-stage polyline reduction: a cheap radial-distance pass followed by an iterative
//! Douglas-Peucker pass.
//!
//! Both stages compare against the squared tolerance so the hot loops stay free of square roots
//! (the radial pass measures linear distance against the same squared value).

use crate::geometry::{distance, sq_segment_distance};
use geo_types::Coord;

/// Drops points closer than the threshold to the last point that was kept.
///
/// The first point is always kept and so is the last one, even when it sits within the
/// threshold of its predecessor.
pub fn simplify_radial_distance(points: &[Coord<f64>], sq_tolerance: f64) -> Vec<Coord<f64>> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut prev = first;
    let mut out = vec![first];
    for &point in rest {
        if distance(point, prev) > sq_tolerance {
            out.push(point);
            prev = point;
        }
    }

    if let Some(&last) = rest.last() {
        if prev != last {
            out.push(last);
        }
    }
    out
}

/// Douglas-Peucker with an explicit work stack instead of recursion.
pub fn simplify_douglas_peucker(points: &[Coord<f64>], sq_tolerance: f64) -> Vec<Coord<f64>> {
    let len = points.len();
    if len <= 2 {
        return points.to_vec();
    }

    let mut markers = vec![false; len];
    markers[0] = true;
    markers[len - 1] = true;

    let mut stack = vec![(0usize, len - 1)];
    while let Some((first, last)) = stack.pop() {
        let mut max_sq_dist = 0.0;
        let mut index = first;

        for i in first + 1..last {
            let sq_dist = sq_segment_distance(points[i], points[first], points[last]);
            if sq_dist > max_sq_dist {
                index = i;
                max_sq_dist = sq_dist;
            }
        }

        if max_sq_dist > sq_tolerance {
            markers[index] = true;
            stack.push((first, index));
            stack.push((index, last));
        }
    }

    points
        .iter()
        .zip(markers)
        .filter_map(|(p, keep)| keep.then_some(*p))
        .collect()
}

/// Runs both stages. `high_quality` skips the radial prefilter.
pub fn simplify(points: &[Coord<f64>], sq_tolerance: f64, high_quality: bool) -> Vec<Coord<f64>> {
    if high_quality {
        simplify_douglas_peucker(points, sq_tolerance)
    } else {
        let filtered = simplify_radial_distance(points, sq_tolerance);
        simplify_douglas_peucker(&filtered, sq_tolerance)
    }
}

#[cfg(test)]
#[path = "simplify_tests.rs"]
mod tests;

//! Flattens nested rings into hole-free rings by bridging each hole into its container.
//!
//! Targets that only accept simple polygons cannot express a hole, so a ring that sits inside
//! another one is cut open and spliced into its container through a narrow slit. The slit is
//! kept open by recession stubs: points moved a short distance (an eighth of the trace width)
//! from each join vertex along its ring, so the merged outline never touches itself.
//!
//! Only one level of nesting is handled. A ring inside more than one other ring (an island in a
//! hole, or a hole shared by two overlapping siblings) is passed through as an independent ring
//! rather than bridged into the wrong parent.

use crate::config::ConversionConfig;
use crate::error::{ContourError, Result};
use crate::geometry::{distance, interpolate_toward, normalize_winding, point_in_polygon};
use geo_types::{Coord, LineString};
use log::{debug, trace};

/// Resolves one filled shape's candidate rings into a flat list of single rings.
///
/// Rings are normalized to forward winding first. The result holds the merged rings in merge
/// order followed by any ring that was contained more than once.
pub fn unpack(
    mut rings: Vec<LineString<f64>>,
    config: &ConversionConfig,
) -> Result<Vec<LineString<f64>>> {
    if let Some(index) = rings.iter().position(|r| r.0.is_empty()) {
        return Err(ContourError::EmptyRing { index });
    }

    debug!("Unpacking {} polygons", rings.len());

    for (i, ring) in rings.iter_mut().enumerate() {
        if normalize_winding(ring) {
            debug!("Polygon #{} was backwards, reversed", i);
        }
    }

    let counts = containment_counts(&rings);
    let mut candidates = Vec::with_capacity(rings.len());
    let mut extra = Vec::new();
    for (i, (ring, count)) in rings.into_iter().zip(counts).enumerate() {
        if count > 1 {
            debug!("Polygon #{} is inside {} others, leaving it unmerged", i, count);
            extra.push(ring);
        } else {
            candidates.push(ring);
        }
    }

    let mut candidates = candidates.into_iter();
    let Some(seed) = candidates.next() else {
        return Ok(extra);
    };

    let stub_length = config.stub_length();
    let mut merged = vec![seed];
    for candidate in candidates {
        merge_candidate(&mut merged, candidate, stub_length);
    }

    merged.extend(extra);
    Ok(merged)
}

/// For each ring, how many of the other rings contain its first vertex.
pub fn containment_counts(rings: &[LineString<f64>]) -> Vec<usize> {
    rings
        .iter()
        .enumerate()
        .map(|(j, ring)| {
            let probe = ring.0[0];
            rings
                .iter()
                .enumerate()
                .filter(|&(k, other)| k != j && point_in_polygon(probe, &other.0))
                .count()
        })
        .collect()
}

fn merge_candidate(merged: &mut Vec<LineString<f64>>, candidate: LineString<f64>, stub_length: f64) {
    let probe = candidate.0[0];
    let found = merged.iter().enumerate().find_map(|(i, existing)| {
        if point_in_polygon(probe, &existing.0) {
            Some((i, false))
        } else if point_in_polygon(existing.0[0], &candidate.0) {
            Some((i, true))
        } else {
            None
        }
    });

    let Some((slot, swapped)) = found else {
        merged.push(candidate);
        return;
    };

    let existing = std::mem::replace(&mut merged[slot], LineString::new(Vec::new()));
    let (outer, mut inner) = if swapped {
        (candidate, existing)
    } else {
        (existing, candidate)
    };

    // opposite winding keeps the combined outline from crossing itself
    inner.0.reverse();
    merged[slot] = splice(&outer.0, &inner.0, stub_length);
}

/// Indices of the closest outer/inner vertex pair. The first minimum in outer-major order wins.
pub fn nearest_vertex_pair(outer: &[Coord<f64>], inner: &[Coord<f64>]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut min_dist = f64::INFINITY;
    for (a, &o) in outer.iter().enumerate() {
        for (b, &i) in inner.iter().enumerate() {
            let d = distance(o, i);
            if d < min_dist {
                min_dist = d;
                best = (a, b);
            }
        }
    }
    best
}

/// Joins `inner` into `outer` at their nearest vertices.
///
/// The merged ring walks the outer ring up to and including the join vertex `O[m]`, crosses to
/// the inner join vertex `I[n]`, goes once around the inner ring, and comes back out just past
/// `O[m]`:
///
/// ```text
/// O[..m]  s(O[m]→O[m-1])  O[m]  I[n]  s(I[n]→I[n+1])  I[n+1..]  I[..n]
///         s(I[n]→I[n-1])  s(O[m]→O[m+1])  O[m+1..]
/// ```
///
/// where `s(a→b)` is `a` moved `stub_length` towards `b`. The return bridge runs between the two
/// trailing stubs, offset from the entry bridge `O[m]`-`I[n]`. A stub whose edge is degenerate or
/// shorter than `stub_length` is left out.
pub fn splice(outer: &[Coord<f64>], inner: &[Coord<f64>], stub_length: f64) -> LineString<f64> {
    let (m, n) = nearest_vertex_pair(outer, inner);
    trace!(
        "Bridging {}-vertex ring into {}-vertex ring at outer #{} / inner #{}",
        inner.len(),
        outer.len(),
        m,
        n
    );

    let mut out = Vec::with_capacity(outer.len() + inner.len() + 4);
    out.extend_from_slice(&outer[..m]);
    out.extend(recession_stub(outer, m, -1, stub_length));
    out.push(outer[m]);
    out.push(inner[n]);
    out.extend(recession_stub(inner, n, 1, stub_length));
    out.extend_from_slice(&inner[n + 1..]);
    out.extend_from_slice(&inner[..n]);
    out.extend(recession_stub(inner, n, -1, stub_length));
    out.extend(recession_stub(outer, m, 1, stub_length));
    out.extend_from_slice(&outer[m + 1..]);
    LineString::new(out)
}

// `at` moved towards its neighbour `step` places away, wrapping around the ring.
fn recession_stub(ring: &[Coord<f64>], at: usize, step: isize, amount: f64) -> Option<Coord<f64>> {
    let len = ring.len() as isize;
    let neighbour = (at as isize + step).rem_euclid(len) as usize;
    interpolate_toward(ring[at], ring[neighbour], amount)
}

#[cfg(test)]
#[path = "unpack_tests.rs"]
mod tests;

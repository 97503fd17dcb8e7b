use geo_types::{Coord, LineString};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Squared distance from `p` to the segment `a`-`b`.
pub fn sq_segment_distance(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    let mut x = a.x;
    let mut y = a.y;
    let dx = b.x - x;
    let dy = b.y - y;

    if dx != 0.0 || dy != 0.0 {
        let t = ((p.x - x) * dx + (p.y - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = b.x;
            y = b.y;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    let dx = p.x - x;
    let dy = p.y - y;
    dx * dx + dy * dy
}

/// Signed area of a ring in the y-down drawing frame.
///
/// The ring is closed implicitly. A ring that runs clockwise as drawn on screen, e.g.
/// (0,0) → (1,0) → (1,1) → (0,1), is negative; this is the "forward" winding every outer ring
/// is normalized to.
pub fn signed_area(ring: &[Coord<f64>]) -> f64 {
    let n = ring.len();
    let mut area = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        area += b.x * a.y - a.x * b.y;
    }
    area / 2.0
}

/// Even-odd ray casting test. Points on an edge may land either way.
pub fn point_in_polygon(point: Coord<f64>, ring: &[Coord<f64>]) -> bool {
    debug_assert!(!ring.is_empty(), "containment query against an empty ring");

    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for (i, pi) in ring.iter().enumerate() {
        let pj = ring[j];
        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Reverses a ring if it winds the wrong way. Returns whether it was reversed.
pub fn normalize_winding(ring: &mut LineString<f64>) -> bool {
    if signed_area(&ring.0) > 0.0 {
        ring.0.reverse();
        true
    } else {
        false
    }
}

/// Point `amount` along the segment from `a` towards `b`.
///
/// Returns `None` when the segment is degenerate or shorter than `amount`, so callers never see
/// a NaN coordinate. A zero `amount` also gives `None` rather than a copy of `a`.
pub fn interpolate_toward(a: Coord<f64>, b: Coord<f64>, amount: f64) -> Option<Coord<f64>> {
    if amount.is_nan() || amount <= 0.0 {
        return None;
    }
    let d = distance(a, b);
    if d.is_nan() || d <= 0.0 || amount > d {
        return None;
    }
    let delta = b - a;
    Some(a + delta * (amount / d))
}

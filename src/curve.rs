//! Continuous curves the sampler can walk.
//!
//! Anything with an arclength and a point-at-parameter evaluation can be converted. The
//! parameter runs over [0, 1] for the whole curve; a compound [`Path`] maps it onto its
//! segments in proportion to their lengths, so a path with several subpaths jumps between them
//! without any connecting geometry.

use crate::geometry::distance;
use geo::{EuclideanLength, LineInterpolatePoint};
use geo_types::{Coord, LineString};
use std::f64::consts::TAU;

/// Magic number for approximating a quarter circle with one cubic.
const KAPPA: f64 = 0.552_284_749_830_793_4;

const LENGTH_ERROR: f64 = 1e-12;
const LENGTH_MIN_DEPTH: u32 = 5;
const LENGTH_MAX_DEPTH: u32 = 20;

pub trait Curve {
    /// Total arclength in source units.
    fn length(&self) -> f64;

    /// Point at parameter `t` in [0, 1], or `None` if the curve cannot be evaluated there.
    fn point_at(&self, t: f64) -> Option<Coord<f64>>;
}

impl<C: Curve + ?Sized> Curve for &C {
    fn length(&self) -> f64 {
        (**self).length()
    }

    fn point_at(&self, t: f64) -> Option<Coord<f64>> {
        (**self).point_at(t)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    fn length(&self) -> f64 {
        (**self).length()
    }

    fn point_at(&self, t: f64) -> Option<Coord<f64>> {
        (**self).point_at(t)
    }
}

impl Curve for LineString<f64> {
    fn length(&self) -> f64 {
        self.euclidean_length()
    }

    fn point_at(&self, t: f64) -> Option<Coord<f64>> {
        self.line_interpolate_point(t).map(|p| p.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Coord<f64>, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Curve for Circle {
    fn length(&self) -> f64 {
        TAU * self.radius
    }

    fn point_at(&self, t: f64) -> Option<Coord<f64>> {
        let angle = t * TAU;
        Some(Coord {
            x: self.center.x + self.radius * angle.cos(),
            y: self.center.y + self.radius * angle.sin(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line {
        from: Coord<f64>,
        to: Coord<f64>,
    },
    Quadratic {
        from: Coord<f64>,
        ctrl: Coord<f64>,
        to: Coord<f64>,
    },
    Cubic {
        from: Coord<f64>,
        ctrl1: Coord<f64>,
        ctrl2: Coord<f64>,
        to: Coord<f64>,
    },
}

impl Segment {
    pub fn start(&self) -> Coord<f64> {
        match *self {
            Segment::Line { from, .. }
            | Segment::Quadratic { from, .. }
            | Segment::Cubic { from, .. } => from,
        }
    }

    pub fn end(&self) -> Coord<f64> {
        match *self {
            Segment::Line { to, .. } | Segment::Quadratic { to, .. } | Segment::Cubic { to, .. } => {
                to
            }
        }
    }

    /// Point at the segment's own parameter `t`.
    pub fn point(&self, t: f64) -> Coord<f64> {
        let mt = 1.0 - t;
        match *self {
            Segment::Line { from, to } => from + (to - from) * t,
            Segment::Quadratic { from, ctrl, to } => {
                from * (mt * mt) + ctrl * (2.0 * mt * t) + to * (t * t)
            }
            Segment::Cubic { from, ctrl1, ctrl2, to } => {
                from * (mt * mt * mt)
                    + ctrl1 * (3.0 * mt * mt * t)
                    + ctrl2 * (3.0 * mt * t * t)
                    + to * (t * t * t)
            }
        }
    }

    pub fn length(&self) -> f64 {
        match *self {
            Segment::Line { from, to } => distance(from, to),
            _ => self.arc_length(0.0, 1.0, self.start(), self.end(), 0),
        }
    }

    // Chord subdivision until the halves agree with the whole.
    fn arc_length(&self, t0: f64, t1: f64, p0: Coord<f64>, p1: Coord<f64>, depth: u32) -> f64 {
        let tm = 0.5 * (t0 + t1);
        let pm = self.point(tm);
        let whole = distance(p0, p1);
        let halves = distance(p0, pm) + distance(pm, p1);

        if depth >= LENGTH_MAX_DEPTH
            || (depth >= LENGTH_MIN_DEPTH && (halves - whole).abs() < LENGTH_ERROR)
        {
            halves
        } else {
            self.arc_length(t0, tm, p0, pm, depth + 1) + self.arc_length(tm, t1, pm, p1, depth + 1)
        }
    }
}

/// A sequence of segments, possibly spanning several disjoint subpaths.
#[derive(Clone, Debug, Default)]
pub struct Path {
    segments: Vec<Segment>,
    lengths: Vec<f64>,
    total: f64,
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        let lengths: Vec<f64> = segments.iter().map(Segment::length).collect();
        let total = lengths.iter().sum();
        Self { segments, lengths, total }
    }

    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of disjoint runs, counting a new one wherever a segment does not start where the
    /// previous one ended.
    pub fn subpath_count(&self) -> usize {
        if self.segments.is_empty() {
            return 0;
        }
        1 + self
            .segments
            .windows(2)
            .filter(|w| w[0].end() != w[1].start())
            .count()
    }
}

impl Curve for Path {
    fn length(&self) -> f64 {
        self.total
    }

    fn point_at(&self, t: f64) -> Option<Coord<f64>> {
        let last = self.segments.last()?;
        if !t.is_finite() {
            return None;
        }
        if t >= 1.0 {
            return Some(last.end());
        }
        if t <= 0.0 || self.total <= 0.0 {
            return Some(self.segments[0].start());
        }

        let target = t * self.total;
        let mut walked = 0.0;
        for (segment, &length) in self.segments.iter().zip(&self.lengths) {
            if length <= 0.0 {
                continue;
            }
            if walked + length >= target {
                return Some(segment.point((target - walked) / length));
            }
            walked += length;
        }
        Some(last.end())
    }
}

/// Incremental construction of a [`Path`] with SVG-style commands.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
    start: Option<Coord<f64>>,
    current: Option<Coord<f64>>,
}

impl PathBuilder {
    pub fn move_to(mut self, to: Coord<f64>) -> Self {
        self.start = Some(to);
        self.current = Some(to);
        self
    }

    pub fn line_to(mut self, to: Coord<f64>) -> Self {
        let from = self.pen();
        self.segments.push(Segment::Line { from, to });
        self.current = Some(to);
        self
    }

    pub fn quad_to(mut self, ctrl: Coord<f64>, to: Coord<f64>) -> Self {
        let from = self.pen();
        self.segments.push(Segment::Quadratic { from, ctrl, to });
        self.current = Some(to);
        self
    }

    pub fn cubic_to(mut self, ctrl1: Coord<f64>, ctrl2: Coord<f64>, to: Coord<f64>) -> Self {
        let from = self.pen();
        self.segments.push(Segment::Cubic { from, ctrl1, ctrl2, to });
        self.current = Some(to);
        self
    }

    /// Draws back to the start of the current subpath unless already there.
    pub fn close(self) -> Self {
        match (self.start, self.current) {
            (Some(start), Some(current)) if start != current => self.line_to(start),
            _ => self,
        }
    }

    /// Adds a full circle as its own closed subpath, built from four cubic quarter arcs.
    pub fn circle(self, center: Coord<f64>, radius: f64) -> Self {
        let k = radius * KAPPA;
        let c = center;
        let p = |x: f64, y: f64| Coord { x: c.x + x, y: c.y + y };
        self.move_to(p(radius, 0.0))
            .cubic_to(p(radius, k), p(k, radius), p(0.0, radius))
            .cubic_to(p(-k, radius), p(-radius, k), p(-radius, 0.0))
            .cubic_to(p(-radius, -k), p(-k, -radius), p(0.0, -radius))
            .cubic_to(p(k, -radius), p(radius, -k), p(radius, 0.0))
    }

    pub fn build(self) -> Path {
        Path::new(self.segments)
    }

    // Drawing without a prior move_to starts at the origin, as SVG renderers do.
    fn pen(&self) -> Coord<f64> {
        self.current.unwrap_or(Coord { x: 0.0, y: 0.0 })
    }
}

use crate::config::ConversionConfig;
use crate::curve::Curve;
use crate::error::Result;
use crate::geometry::distance;
use crate::sampler::sample_contour;
use crate::unpack::unpack;
use crate::utils::parallel::map_ordered;
use geo_types::{Coord, LineString};
use log::{debug, warn};

/// A sampled closed curve ends this close to its first sample.
const CLOSURE_EPSILON: f64 = 1e-9;

/// One drawable source object: a continuous curve plus its paint flags.
#[derive(Clone, Debug)]
pub struct Shape<C> {
    pub curve: C,
    pub filled: bool,
    pub stroked: bool,
}

impl<C: Curve> Shape<C> {
    pub fn new(curve: C, filled: bool, stroked: bool) -> Self {
        Self { curve, filled, stroked }
    }

    pub fn filled(curve: C) -> Self {
        Self::new(curve, true, false)
    }

    pub fn stroked(curve: C) -> Self {
        Self::new(curve, false, true)
    }

    /// Shapes with neither fill nor stroke (clip paths and the like) produce no output.
    pub fn is_drawable(&self) -> bool {
        self.filled || self.stroked
    }
}

/// Output for one shape, ready for a serializer.
///
/// Filled shapes hold hole-free rings with the first vertex repeated at the end. Stroked-only
/// shapes hold the open polylines as sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedShape {
    pub filled: bool,
    pub rings: Vec<LineString<f64>>,
}

/// Samples, simplifies and (for filled shapes) unpacks a single shape.
///
/// Returns `Ok(None)` for shapes that are not drawable.
pub fn convert_shape<C: Curve>(
    shape: &Shape<C>,
    config: &ConversionConfig,
) -> Result<Option<ConvertedShape>> {
    if !shape.is_drawable() {
        debug!("Skipping shape with neither fill nor stroke");
        return Ok(None);
    }

    let mut rings = sample_contour(&shape.curve, config)?;
    if shape.filled {
        // the t = 1 sample repeats t = 0 up to rounding; closure below re-adds it exactly
        for ring in &mut rings {
            drop_closing_sample(&mut ring.0);
        }
    }

    let before = rings.len();
    rings.retain(|ring| has_two_distinct_points(&ring.0));
    if rings.len() != before {
        debug!("Dropped {} degenerate rings", before - rings.len());
    }

    if shape.filled {
        rings = unpack(rings, config)?;
        for ring in &mut rings {
            let first = ring.0[0];
            ring.0.push(first);
        }
    }

    Ok(Some(ConvertedShape { filled: shape.filled, rings }))
}

/// Converts every shape, keeping source order and skipping shapes that are not drawable.
///
/// Shapes are independent, so with the `parallel` feature larger batches are spread across
/// threads.
pub fn convert_shapes<C: Curve + Sync>(
    shapes: &[Shape<C>],
    config: &ConversionConfig,
) -> Result<Vec<ConvertedShape>> {
    if shapes.is_empty() {
        warn!("No shapes to convert");
        return Ok(Vec::new());
    }

    config.validate()?;

    let results = map_ordered(shapes, |shape| convert_shape(shape, config));
    let mut out = Vec::with_capacity(results.len());
    for (i, result) in results.into_iter().enumerate() {
        debug!("Translated shape {} of {}", i + 1, shapes.len());
        if let Some(converted) = result? {
            out.push(converted);
        }
    }

    if out.is_empty() {
        warn!("No shapes with fills or strokes found");
    }
    Ok(out)
}

fn drop_closing_sample(points: &mut Vec<Coord<f64>>) {
    let closes = match points.as_slice() {
        [first, .., last] => points.len() > 2 && distance(*first, *last) <= CLOSURE_EPSILON,
        _ => false,
    };
    if closes {
        points.pop();
    }
}

fn has_two_distinct_points(points: &[Coord<f64>]) -> bool {
    match points.split_first() {
        Some((first, rest)) => rest.iter().any(|p| p != first),
        None => false,
    }
}

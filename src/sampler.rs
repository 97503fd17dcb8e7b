use crate::config::ConversionConfig;
use crate::curve::Curve;
use crate::error::{ContourError, Result};
use crate::geometry::distance;
use crate::simplify::simplify;
use geo_types::{Coord, LineString};
use log::debug;

/// Fewest divisions a curve is ever walked with.
pub const MIN_DIVISIONS: usize = 3;

/// Most divisions a single curve may be walked with.
pub const MAX_DIVISIONS: usize = 1 << 24;

/// Number of divisions used to walk a curve of the given arclength.
pub fn division_count(length: f64, subsampling: f64) -> usize {
    let divs = (length * subsampling).round();
    if divs < MIN_DIVISIONS as f64 {
        MIN_DIVISIONS
    } else {
        divs as usize
    }
}

/// Walks `curve` at a fixed parameter step and returns one simplified polyline per continuous
/// run of samples.
///
/// Samples are scaled into working units. A jump between consecutive samples of more than twice
/// the scaled step closes the current run; runs of fewer than two samples are dropped.
pub fn sample_contour<C: Curve + ?Sized>(
    curve: &C,
    config: &ConversionConfig,
) -> Result<Vec<LineString<f64>>> {
    config.validate()?;

    let length = curve.length();
    if !(length.is_finite() && length >= 0.0) {
        return Err(ContourError::InvalidCurve(format!(
            "arclength must be finite and non-negative, got {}",
            length
        )));
    }

    let divs = division_count(length, config.subsampling);
    if divs > MAX_DIVISIONS {
        return Err(ContourError::InvalidCurve(format!(
            "{} divisions exceeds the limit of {}",
            divs, MAX_DIVISIONS
        )));
    }
    let max_gap = length * 2.0 * config.scale / divs as f64;
    let sq_tolerance = config.sq_tolerance();

    let sample = |s: usize| -> Result<Coord<f64>> {
        let t = s as f64 / divs as f64;
        curve
            .point_at(t)
            .map(|p| p * config.scale)
            .ok_or_else(|| ContourError::InvalidCurve(format!("no point at parameter {}", t)))
    };

    let mut runs = Vec::new();
    let mut points: Vec<Coord<f64>> = Vec::new();
    let mut last = sample(0)?;

    for s in 0..=divs {
        let p = sample(s)?;
        if distance(p, last) > max_gap {
            if points.len() > 1 {
                runs.push(LineString::new(simplify(&points, sq_tolerance, config.high_quality)));
            }
            points.clear();
        }
        points.push(p);
        last = p;
    }

    if points.len() > 1 {
        runs.push(LineString::new(simplify(&points, sq_tolerance, config.high_quality)));
    }

    debug!(
        "Sampled curve of length {:.3} with {} divisions into {} runs",
        length,
        divs,
        runs.len()
    );

    Ok(runs)
}

use crate::error::{ContourError, Result};

/// Source units per millimetre assumed when the drawing carries no explicit unit.
pub const DEFAULT_SCALE: f64 = 1.0 / 90.0;

/// Settings shared by every stage of a conversion run.
///
/// A single value is built up front and passed by reference down the call chain; nothing in the
/// crate keeps its own copy of these numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionConfig {
    /// Multiplier from source coordinates to working units (millimetres).
    pub scale: f64,
    /// Simplification tolerance in working units. `None` falls back to a squared tolerance of 1.
    pub tolerance: Option<f64>,
    /// Skip the radial-distance prefilter and run Douglas-Peucker on every sample.
    pub high_quality: bool,
    /// Samples per source unit of arclength.
    pub subsampling: f64,
    /// Width of the outline trace; bridge recession stubs are one eighth of it.
    pub trace_width: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            tolerance: Some(0.1 * DEFAULT_SCALE),
            high_quality: false,
            subsampling: 0.1,
            trace_width: 0.01,
        }
    }
}

impl ConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_high_quality(mut self, high_quality: bool) -> Self {
        self.high_quality = high_quality;
        self
    }

    pub fn with_subsampling(mut self, subsampling: f64) -> Self {
        self.subsampling = subsampling;
        self
    }

    pub fn with_trace_width(mut self, trace_width: f64) -> Self {
        self.trace_width = trace_width;
        self
    }

    /// Squared tolerance used by both simplification stages.
    pub fn sq_tolerance(&self) -> f64 {
        match self.tolerance {
            Some(t) => t * t,
            None => 1.0,
        }
    }

    /// Distance a bridge join is recessed along its ring.
    pub fn stub_length(&self) -> f64 {
        self.trace_width / 8.0
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ContourError::InvalidConfig(format!(
                "scale must be finite and positive, got {}",
                self.scale
            )));
        }
        if !(self.subsampling.is_finite() && self.subsampling > 0.0) {
            return Err(ContourError::InvalidConfig(format!(
                "subsampling must be finite and positive, got {}",
                self.subsampling
            )));
        }
        if let Some(t) = self.tolerance {
            if !(t.is_finite() && t >= 0.0) {
                return Err(ContourError::InvalidConfig(format!(
                    "tolerance must be finite and non-negative, got {}",
                    t
                )));
            }
        }
        if !(self.trace_width.is_finite() && self.trace_width >= 0.0) {
            return Err(ContourError::InvalidConfig(format!(
                "trace width must be finite and non-negative, got {}",
                self.trace_width
            )));
        }
        Ok(())
    }
}

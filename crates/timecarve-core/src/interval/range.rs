//! Fractional range primitive and rounding helpers.

use serde::{Deserialize, Serialize};

/// A normalized range over an enclosing span. Both bounds are fractions
/// in `[0, 1]`; the enclosing span decides what a fraction means in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FracRange {
    pub start: f64,
    pub end: f64,
}

impl FracRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Width of the range. Negative for an inverted (corrupt) range.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Anything that occupies a fractional range on a timeline.
///
/// Lets the interval algorithms run over sections and segments alike
/// without caring about the rest of their fields.
pub trait Spanned {
    fn span(&self) -> FracRange;
    fn set_span(&mut self, span: FracRange);
}

impl Spanned for FracRange {
    fn span(&self) -> FracRange {
        *self
    }

    fn set_span(&mut self, span: FracRange) {
        *self = span;
    }
}

/// Round to 3 decimal places. Used for freshly created ranges and for
/// drag-emitted positions.
pub fn round3(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}

/// Round to 4 decimal places. Every stored boundary edit goes through this
/// so repeated edits do not accumulate floating point noise.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

//! Boundary-edit validation and clamping.
//!
//! Every edit to an interval boundary runs through [`resolve_edit`], which
//! favors silent correction over rejection: out-of-range values are clamped,
//! non-finite values become 0, and with overlap prevention enabled the edited
//! boundary is pushed off the immediate neighbors in list order.

use super::range::{round4, FracRange};

/// Minimum width an edit may leave behind when overlap prevention would
/// otherwise collapse the range.
pub const MIN_WIDTH: f64 = 0.01;

/// Which boundary the user edited. Decides which side the minimum-width
/// fallback moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Neighbor constraints for an edit, taken from list order (not from the
/// numeric ordering of the ranges).
#[derive(Debug, Clone, Copy, Default)]
pub struct EditContext {
    /// `end` of the predecessor in list order, if any.
    pub prev_end: Option<f64>,
    /// `start` of the successor in list order, if any.
    pub next_start: Option<f64>,
    /// Whether boundary edits are clamped against the neighbors.
    pub prevent_overlap: bool,
}

/// Correct a candidate `(start, end)` pair after one boundary was edited.
///
/// Both values are clamped into `[0, 1]` unconditionally. With overlap
/// prevention on, `start` may not cross the predecessor's end and `end` may
/// not cross the successor's start; an edit that would collapse the range is
/// backed off by [`MIN_WIDTH`]. With overlap prevention off, neighbors are
/// ignored but the edited boundary is still kept from inverting past the
/// other one (a zero-width range is allowed, an inverted one is not).
/// Results are rounded to 4 decimal places.
pub fn resolve_edit(start: f64, end: f64, edited: Bound, ctx: &EditContext) -> FracRange {
    let mut start = sanitize(start).clamp(0.0, 1.0);
    let mut end = sanitize(end).clamp(0.0, 1.0);

    if ctx.prevent_overlap {
        if let Some(prev_end) = ctx.prev_end {
            if start < prev_end {
                start = prev_end;
            }
        }
        if let Some(next_start) = ctx.next_start {
            if end > next_start {
                end = next_start;
            }
        }
        match edited {
            Bound::Start => {
                if start >= end {
                    start = (end - MIN_WIDTH).max(0.0);
                }
            }
            Bound::End => {
                if end <= start {
                    end = (start + MIN_WIDTH).min(1.0);
                }
            }
        }
    } else {
        match edited {
            Bound::Start => start = start.min(end),
            Bound::End => end = end.max(start),
        }
    }

    FracRange::new(round4(start), round4(end))
}

/// Convert an absolute-seconds edit into a fraction of the enclosing span.
/// A zero (or degenerate) span converts to 0.
pub fn seconds_to_fraction(seconds: f64, span_secs: f64) -> f64 {
    if span_secs > 0.0 {
        sanitize(seconds) / span_secs
    } else {
        0.0
    }
}

/// Malformed numeric input is treated as 0 before clamping.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(prev_end: Option<f64>, next_start: Option<f64>) -> EditContext {
        EditContext {
            prev_end,
            next_start,
            prevent_overlap: true,
        }
    }

    #[test]
    fn test_unit_range_clamp() {
        let range = resolve_edit(-0.5, 1.7, Bound::End, &ctx(None, None));
        assert_eq!(range, FracRange::new(0.0, 1.0));
    }

    #[test]
    fn test_end_clamped_to_successor_start() {
        // Raising the first item's end to 0.9 against a successor at 0.5
        // clamps right back to 0.5: no visible change.
        let range = resolve_edit(0.0, 0.9, Bound::End, &ctx(None, Some(0.5)));
        assert_eq!(range, FracRange::new(0.0, 0.5));
    }

    #[test]
    fn test_start_clamped_to_predecessor_end() {
        let range = resolve_edit(0.1, 0.8, Bound::Start, &ctx(Some(0.3), None));
        assert_eq!(range, FracRange::new(0.3, 0.8));
    }

    #[test]
    fn test_min_width_on_start_edit() {
        let range = resolve_edit(0.7, 0.5, Bound::Start, &ctx(None, None));
        assert_eq!(range, FracRange::new(0.49, 0.5));
    }

    #[test]
    fn test_min_width_on_end_edit() {
        let range = resolve_edit(0.5, 0.2, Bound::End, &ctx(None, None));
        assert_eq!(range, FracRange::new(0.5, 0.51));
    }

    #[test]
    fn test_min_width_stays_inside_unit_range() {
        let range = resolve_edit(0.0, 0.005, Bound::Start, &ctx(None, None));
        assert_eq!(range.start, 0.0);
        let range = resolve_edit(0.995, 0.5, Bound::End, &ctx(None, None));
        assert_eq!(range.end, 1.0);
    }

    #[test]
    fn test_overlap_allowed_skips_neighbors() {
        let relaxed = EditContext {
            prev_end: Some(0.4),
            next_start: Some(0.6),
            prevent_overlap: false,
        };
        let range = resolve_edit(0.1, 0.9, Bound::End, &relaxed);
        assert_eq!(range, FracRange::new(0.1, 0.9));
    }

    #[test]
    fn test_overlap_allowed_never_inverts() {
        let relaxed = EditContext::default();
        let range = resolve_edit(0.9, 0.3, Bound::Start, &relaxed);
        assert_eq!(range, FracRange::new(0.3, 0.3));
        let range = resolve_edit(0.6, 0.2, Bound::End, &relaxed);
        assert_eq!(range, FracRange::new(0.6, 0.6));
    }

    #[test]
    fn test_non_finite_input_treated_as_zero() {
        let range = resolve_edit(f64::NAN, 0.5, Bound::Start, &ctx(None, None));
        assert_eq!(range, FracRange::new(0.0, 0.5));
        let range = resolve_edit(0.2, f64::INFINITY, Bound::End, &ctx(None, None));
        assert_eq!(range, FracRange::new(0.2, 0.21));
    }

    #[test]
    fn test_results_rounded_to_four_decimals() {
        let range = resolve_edit(0.123456, 0.654321, Bound::Start, &ctx(None, None));
        assert_eq!(range, FracRange::new(0.1235, 0.6543));
    }

    #[test]
    fn test_seconds_to_fraction() {
        assert_eq!(seconds_to_fraction(30.0, 60.0), 0.5);
        assert_eq!(seconds_to_fraction(10.0, 0.0), 0.0);
        assert_eq!(seconds_to_fraction(f64::NAN, 60.0), 0.0);
    }

    #[test]
    fn test_idempotent_on_already_clamped_values() {
        let context = ctx(Some(0.2), Some(0.8));
        let first = resolve_edit(0.1, 0.7, Bound::Start, &context);
        let second = resolve_edit(first.start, first.end, Bound::Start, &context);
        assert_eq!(first, second);
    }
}

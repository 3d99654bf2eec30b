//! Normalized interval model.
//!
//! Pure functions over lists of fractional `{start, end}` ranges: boundary-edit
//! validation with optional overlap prevention, and the slot-gap-preserving
//! reorder used when an item swaps places with a neighbor.

pub mod clamp;
pub mod range;
pub mod reorder;

pub use clamp::{resolve_edit, seconds_to_fraction, Bound, EditContext, MIN_WIDTH};
pub use range::{round3, round4, FracRange, Spanned};
pub use reorder::{reorder_and_recalculate, Direction, MIN_DURATION};

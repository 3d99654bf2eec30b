//! # Timecarve Core Library
//!
//! Core logic for timecarve: decompose a fixed total duration into an
//! ordered list of sections, each holding an ordered list of segments, with
//! every boundary expressed as a fraction in `[0, 1]` of its parent's span.
//! All operations are available headlessly; GUIs and the CLI are thin
//! presentation layers over the same session store.
//!
//! ## Architecture
//!
//! - **Interval model**: pure validation, clamping and the
//!   slot-gap-preserving reorder over fractional ranges
//! - **Session store**: the owned two-tier store (sections and segments)
//!   routing every edit through the interval model
//! - **Drag surface**: a headless dual-handle drag state machine that turns
//!   pointer positions into boundary edits
//! - **Export**: write-only plain-text summary with derived seconds
//!
//! ## Key Components
//!
//! - [`Session`]: the owned store, one per editing session
//! - [`Command`] / [`EditCommand`]: the tagged input-event surface
//! - [`reorder_and_recalculate`]: the slot-gap-preserving swap
//! - [`DragController`]: the drag state machine

pub mod drag;
pub mod error;
pub mod export;
pub mod interval;
pub mod session;

pub use drag::{DragController, DragState, Handle, HandleEdit};
pub use error::{CoreError, ExportError};
pub use interval::{reorder_and_recalculate, Direction, FracRange, Spanned};
pub use session::{Command, EditCommand, LabelKind, Labels, Section, Segment, Session};

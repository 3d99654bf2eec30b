//! Session store.
//!
//! One `Session` owns the whole model for a logical editing session: the
//! total duration, the overlap policy, the terminology labels, and the
//! ordered sections with their ordered segments. All mutation goes through
//! the operations here, which route boundary edits into the interval model.
//! Every operation is synchronous and runs to completion; there is no
//! ambient or static state.

pub mod command;
pub mod item;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interval::{
    reorder_and_recalculate, resolve_edit, round3, seconds_to_fraction, Bound, Direction,
    EditContext, FracRange, Spanned,
};

pub use command::{Command, EditCommand};
pub use item::{LabelKind, Labels, Section, Segment};

/// Default width of a freshly added section.
pub const SECTION_DEFAULT_WIDTH: f64 = 0.1;
/// Default width of a freshly added segment.
pub const SEGMENT_DEFAULT_WIDTH: f64 = 0.2;

/// The owned, explicit store for one editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub total_duration_secs: f64,
    pub prevent_overlap: bool,
    pub labels: Labels,
    pub sections: Vec<Section>,
}

impl Session {
    /// Empty session with overlap prevention on and default terminology.
    pub fn new(total_duration_secs: f64) -> Self {
        Self {
            total_duration_secs: sanitize_duration(total_duration_secs),
            prevent_overlap: true,
            labels: Labels::default(),
            sections: Vec::new(),
        }
    }

    // ── Session-level settings ───────────────────────────────────────

    pub fn set_total_duration(&mut self, seconds: f64) {
        self.total_duration_secs = sanitize_duration(seconds);
    }

    pub fn set_overlap_policy(&mut self, enabled: bool) {
        self.prevent_overlap = enabled;
    }

    pub fn set_label(&mut self, kind: LabelKind, text: impl Into<String>) {
        match kind {
            LabelKind::Parent => self.labels.parent = text.into(),
            LabelKind::Child => self.labels.child = text.into(),
        }
    }

    // ── Derived seconds (read-only; never stored) ────────────────────

    /// Span of a section in seconds of the global duration.
    pub fn section_duration_secs(&self, section: &Section) -> f64 {
        ((section.end - section.start) * self.total_duration_secs).max(0.0)
    }

    /// A segment's `(start, end)` in seconds relative to its owning section.
    pub fn segment_seconds(&self, section: &Section, segment: &Segment) -> (f64, f64) {
        let span = self.section_duration_secs(section);
        (segment.start * span, segment.end * span)
    }

    // ── Section operations ───────────────────────────────────────────

    /// Append a section continuing right after the last one. Returns its id.
    pub fn add_section(&mut self) -> Uuid {
        let name = format!("{} {}", self.labels.parent, self.sections.len() + 1);
        let range = default_range(self.sections.last().map(|s| s.end), SECTION_DEFAULT_WIDTH);
        let section = Section::new(name, range);
        let id = section.id;
        self.sections.push(section);
        id
    }

    /// Identity-based removal. Neighbors keep their ranges; a gap may open.
    pub fn remove_section(&mut self, id: Uuid) {
        self.sections.retain(|s| s.id != id);
    }

    pub fn move_section(&mut self, index: usize, direction: Direction) {
        if let Some(reordered) = reorder_and_recalculate(&self.sections, index, direction) {
            self.sections = reordered;
        }
    }

    pub fn toggle_collapse(&mut self, id: Uuid) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.collapsed = !section.collapsed;
        }
    }

    pub fn update_section(&mut self, id: Uuid, edit: EditCommand) {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return;
        };
        let edit = match edit {
            EditCommand::Rename { name } => {
                self.sections[index].name = name;
                return;
            }
            other => other,
        };
        let range = resolve_edit_in(
            &self.sections,
            index,
            edit,
            self.total_duration_secs,
            self.prevent_overlap,
        );
        self.sections[index].set_span(range);
    }

    // ── Segment operations (scoped to one section) ───────────────────

    /// Append a segment to the given section. Returns its id, or `None`
    /// when the section does not exist.
    pub fn add_segment(&mut self, section_id: Uuid) -> Option<Uuid> {
        let child = self.labels.child.clone();
        let section = self.section_mut(section_id)?;
        let name = format!("{} {}", child, section.segments.len() + 1);
        let range = default_range(
            section.segments.last().map(|s| s.end),
            SEGMENT_DEFAULT_WIDTH,
        );
        let segment = Segment::new(name, range);
        let id = segment.id;
        section.segments.push(segment);
        Some(id)
    }

    pub fn remove_segment(&mut self, section_id: Uuid, id: Uuid) {
        if let Some(section) = self.section_mut(section_id) {
            section.segments.retain(|s| s.id != id);
        }
    }

    pub fn move_segment(&mut self, section_id: Uuid, index: usize, direction: Direction) {
        if let Some(section) = self.section_mut(section_id) {
            if let Some(reordered) = reorder_and_recalculate(&section.segments, index, direction) {
                section.segments = reordered;
            }
        }
    }

    pub fn update_segment(&mut self, section_id: Uuid, id: Uuid, edit: EditCommand) {
        let prevent_overlap = self.prevent_overlap;
        let Some(position) = self
            .sections
            .iter()
            .position(|s| s.id == section_id)
            .and_then(|si| {
                self.sections[si]
                    .segments
                    .iter()
                    .position(|c| c.id == id)
                    .map(|ci| (si, ci))
            })
        else {
            return;
        };
        let (section_index, index) = position;
        let edit = match edit {
            EditCommand::Rename { name } => {
                self.sections[section_index].segments[index].name = name;
                return;
            }
            other => other,
        };
        // Seconds-unit segment edits are relative to the enclosing section.
        let span_secs = self.section_duration_secs(&self.sections[section_index]);
        let segments = &mut self.sections[section_index].segments;
        let range = resolve_edit_in(segments, index, edit, span_secs, prevent_overlap);
        segments[index].set_span(range);
    }

    // ── Internals ────────────────────────────────────────────────────

    fn section_mut(&mut self, id: Uuid) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(60.0)
    }
}

/// Resolve one boundary edit against a list, using list order for the
/// neighbor constraints.
fn resolve_edit_in<T: Spanned>(
    items: &[T],
    index: usize,
    edit: EditCommand,
    span_secs: f64,
    prevent_overlap: bool,
) -> FracRange {
    let current = items[index].span();
    let (start, end, bound) = match edit {
        EditCommand::SetStart { value } => (value, current.end, Bound::Start),
        EditCommand::SetEnd { value } => (current.start, value, Bound::End),
        EditCommand::SetStartSeconds { seconds } => (
            seconds_to_fraction(seconds, span_secs),
            current.end,
            Bound::Start,
        ),
        EditCommand::SetEndSeconds { seconds } => (
            current.start,
            seconds_to_fraction(seconds, span_secs),
            Bound::End,
        ),
        // Renames are handled by the callers before timing resolution.
        EditCommand::Rename { .. } => (current.start, current.end, Bound::Start),
    };
    let ctx = EditContext {
        prev_end: index.checked_sub(1).map(|i| items[i].span().end),
        next_start: items.get(index + 1).map(|item| item.span().start),
        prevent_overlap,
    };
    resolve_edit(start, end, bound, &ctx)
}

/// Default range for a new item: continues right after `last_end`, clamped
/// into the unit range, 3-decimal rounded.
fn default_range(last_end: Option<f64>, width: f64) -> FracRange {
    let start = last_end.unwrap_or(0.0).clamp(0.0, 1.0);
    let end = (start + width).min(1.0);
    FracRange::new(round3(start), round3(end))
}

fn sanitize_duration(seconds: f64) -> f64 {
    if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    }
}

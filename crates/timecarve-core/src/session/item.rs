//! Section and segment types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interval::{FracRange, Spanned};

/// A top-level interval over normalized global time. Owns an ordered list
/// of segments whose fractions are relative to this section's span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub name: String,
    pub start: f64,
    pub end: f64,
    /// Pure visibility flag; never affects timing.
    pub collapsed: bool,
    pub segments: Vec<Segment>,
}

impl Section {
    pub fn new(name: impl Into<String>, range: FracRange) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start: range.start,
            end: range.end,
            collapsed: false,
            segments: Vec::new(),
        }
    }
}

impl Spanned for Section {
    fn span(&self) -> FracRange {
        FracRange::new(self.start, self.end)
    }

    fn set_span(&mut self, span: FracRange) {
        self.start = span.start;
        self.end = span.end;
    }
}

/// A nested interval over normalized time relative to its owning section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub id: Uuid,
    pub name: String,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn new(name: impl Into<String>, range: FracRange) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start: range.start,
            end: range.end,
        }
    }
}

impl Spanned for Segment {
    fn span(&self) -> FracRange {
        FracRange::new(self.start, self.end)
    }

    fn set_span(&mut self, span: FracRange) {
        self.start = span.start;
        self.end = span.end;
    }
}

/// User-configurable terminology for the two tiers. Feeds derived names for
/// new items and the labels in the export report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    pub parent: String,
    pub child: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            parent: "Section".to_string(),
            child: "Segment".to_string(),
        }
    }
}

/// Which of the two terminology labels to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    Parent,
    Child,
}

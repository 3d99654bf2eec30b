//! Tagged command surface.
//!
//! Every input event a presentation layer can send is a [`Command`] variant;
//! boundary and name edits are the nested [`EditCommand`]. The unit of a
//! numeric edit (fraction vs. seconds) is explicit in the variant rather
//! than inferred from a field-name suffix, and dispatch is exhaustive.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::item::LabelKind;
use super::Session;
use crate::interval::Direction;

/// One edit to a single interval, addressed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    /// Set the start boundary as a fraction of the enclosing span.
    SetStart {
        #[serde(deserialize_with = "lenient_f64")]
        value: f64,
    },
    /// Set the end boundary as a fraction of the enclosing span.
    SetEnd {
        #[serde(deserialize_with = "lenient_f64")]
        value: f64,
    },
    /// Set the start boundary in absolute seconds of the enclosing span.
    SetStartSeconds {
        #[serde(deserialize_with = "lenient_f64")]
        seconds: f64,
    },
    /// Set the end boundary in absolute seconds of the enclosing span.
    SetEndSeconds {
        #[serde(deserialize_with = "lenient_f64")]
        seconds: f64,
    },
    Rename { name: String },
}

/// An input event applied to a [`Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddSection,
    RemoveSection {
        id: Uuid,
    },
    MoveSection {
        index: usize,
        direction: Direction,
    },
    UpdateSection {
        id: Uuid,
        #[serde(flatten)]
        edit: EditCommand,
    },
    ToggleCollapse {
        id: Uuid,
    },
    AddSegment {
        section: Uuid,
    },
    RemoveSegment {
        section: Uuid,
        id: Uuid,
    },
    MoveSegment {
        section: Uuid,
        index: usize,
        direction: Direction,
    },
    UpdateSegment {
        section: Uuid,
        id: Uuid,
        #[serde(flatten)]
        edit: EditCommand,
    },
    SetTotalDuration {
        #[serde(deserialize_with = "lenient_f64")]
        seconds: f64,
    },
    SetOverlapPolicy {
        enabled: bool,
    },
    SetLabel {
        kind: LabelKind,
        text: String,
    },
}

impl Session {
    /// Apply one input event. Structurally impossible requests (unknown id,
    /// out-of-range index, boundary move) resolve to no-ops, never to errors.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AddSection => {
                self.add_section();
            }
            Command::RemoveSection { id } => self.remove_section(id),
            Command::MoveSection { index, direction } => self.move_section(index, direction),
            Command::UpdateSection { id, edit } => self.update_section(id, edit),
            Command::ToggleCollapse { id } => self.toggle_collapse(id),
            Command::AddSegment { section } => {
                self.add_segment(section);
            }
            Command::RemoveSegment { section, id } => self.remove_segment(section, id),
            Command::MoveSegment {
                section,
                index,
                direction,
            } => self.move_segment(section, index, direction),
            Command::UpdateSegment { section, id, edit } => self.update_segment(section, id, edit),
            Command::SetTotalDuration { seconds } => self.set_total_duration(seconds),
            Command::SetOverlapPolicy { enabled } => self.set_overlap_policy(enabled),
            Command::SetLabel { kind, text } => self.set_label(kind, text),
        }
    }
}

/// Accept a JSON number or a numeric string; malformed text becomes 0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(value) => value,
        Raw::Text(text) => text.trim().parse().unwrap_or(0.0),
    })
}

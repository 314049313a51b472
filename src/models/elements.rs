//! Score elements as seen by the selection filter
//!
//! Only the properties the filter needs are modelled: where an element sits
//! (tick and voice) and what kind of element it is.

use serde::{Deserialize, Serialize};

use crate::models::filter::SelectionFilterType;

/// Kinds of elements that can appear in a score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Note,
    Rest,
    Dynamic,
    Hairpin,
    Fingering,
    Lyrics,
    ChordSymbol,
    StaffText,
    Articulation,
    Slur,
    FiguredBass,
    Ottava,
    Pedal,
    TextLine,
    Arpeggio,
    Glissando,
    FretDiagram,
    Breath,
    Tremolo,
    GraceNote,
}

impl ElementKind {
    /// Filter category this kind belongs to
    ///
    /// Notes and rests have none; they are filtered by voice only.
    pub fn filter_type(self) -> Option<SelectionFilterType> {
        use SelectionFilterType as F;

        match self {
            ElementKind::Note | ElementKind::Rest => None,
            ElementKind::Dynamic => Some(F::Dynamic),
            ElementKind::Hairpin => Some(F::Hairpin),
            ElementKind::Fingering => Some(F::Fingering),
            ElementKind::Lyrics => Some(F::Lyrics),
            ElementKind::ChordSymbol => Some(F::ChordSymbol),
            ElementKind::StaffText => Some(F::OtherText),
            ElementKind::Articulation => Some(F::Articulation),
            ElementKind::Slur => Some(F::Slur),
            ElementKind::FiguredBass => Some(F::FiguredBass),
            ElementKind::Ottava => Some(F::Ottava),
            ElementKind::Pedal => Some(F::PedalLine),
            ElementKind::TextLine => Some(F::OtherLine),
            ElementKind::Arpeggio => Some(F::Arpeggio),
            ElementKind::Glissando => Some(F::Glissando),
            ElementKind::FretDiagram => Some(F::FretDiagram),
            ElementKind::Breath => Some(F::Breath),
            ElementKind::Tremolo => Some(F::Tremolo),
            ElementKind::GraceNote => Some(F::GraceNote),
        }
    }
}

/// A single element placed in the score
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreElement {
    /// Stable element id
    pub id: u32,

    /// Score position in ticks
    pub tick: u32,

    /// 0-based voice (0..=3)
    #[serde(default)]
    pub voice: u8,

    pub kind: ElementKind,
}

impl ScoreElement {
    pub fn new(id: u32, tick: u32, voice: u8, kind: ElementKind) -> Self {
        Self { id, tick, voice, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_and_rests_have_no_category() {
        assert_eq!(ElementKind::Note.filter_type(), None);
        assert_eq!(ElementKind::Rest.filter_type(), None);
    }

    #[test]
    fn test_staff_text_maps_to_other_text() {
        assert_eq!(
            ElementKind::StaffText.filter_type(),
            Some(SelectionFilterType::OtherText)
        );
    }

    #[test]
    fn test_deserialize_element_defaults_voice() {
        let element: ScoreElement =
            serde_json::from_str(r#"{"id":7,"tick":480,"kind":"chord_symbol"}"#).unwrap();
        assert_eq!(element.voice, 0);
        assert_eq!(element.kind, ElementKind::ChordSymbol);
    }
}

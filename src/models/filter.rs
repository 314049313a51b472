//! Selection filter categories and the filter bitmask
//!
//! Each category owns one bit of a [`FilterMask`]. A set bit means elements of
//! that category take part in range selections; a cleared bit filters them out.

use serde::{Deserialize, Serialize};

use crate::models::elements::ScoreElement;

/// Element categories that can be filtered out of a range selection
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum SelectionFilterType {
    FirstVoice = 1 << 0,
    SecondVoice = 1 << 1,
    ThirdVoice = 1 << 2,
    FourthVoice = 1 << 3,
    Dynamic = 1 << 4,
    Hairpin = 1 << 5,
    Fingering = 1 << 6,
    Lyrics = 1 << 7,
    ChordSymbol = 1 << 8,
    OtherText = 1 << 9,
    Articulation = 1 << 10,
    Slur = 1 << 11,
    FiguredBass = 1 << 12,
    Ottava = 1 << 13,
    PedalLine = 1 << 14,
    OtherLine = 1 << 15,
    Arpeggio = 1 << 16,
    Glissando = 1 << 17,
    FretDiagram = 1 << 18,
    Breath = 1 << 19,
    Tremolo = 1 << 20,
    GraceNote = 1 << 21,
}

impl SelectionFilterType {
    /// All categories in checklist order
    pub const ALL: [SelectionFilterType; 22] = [
        SelectionFilterType::FirstVoice,
        SelectionFilterType::SecondVoice,
        SelectionFilterType::ThirdVoice,
        SelectionFilterType::FourthVoice,
        SelectionFilterType::Dynamic,
        SelectionFilterType::Hairpin,
        SelectionFilterType::Fingering,
        SelectionFilterType::Lyrics,
        SelectionFilterType::ChordSymbol,
        SelectionFilterType::OtherText,
        SelectionFilterType::Articulation,
        SelectionFilterType::Slur,
        SelectionFilterType::FiguredBass,
        SelectionFilterType::Ottava,
        SelectionFilterType::PedalLine,
        SelectionFilterType::OtherLine,
        SelectionFilterType::Arpeggio,
        SelectionFilterType::Glissando,
        SelectionFilterType::FretDiagram,
        SelectionFilterType::Breath,
        SelectionFilterType::Tremolo,
        SelectionFilterType::GraceNote,
    ];

    /// The bit this category occupies in a [`FilterMask`]
    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Display label used for checklist rows and announcements
    pub fn label(self) -> &'static str {
        match self {
            SelectionFilterType::FirstVoice => "Voice 1",
            SelectionFilterType::SecondVoice => "Voice 2",
            SelectionFilterType::ThirdVoice => "Voice 3",
            SelectionFilterType::FourthVoice => "Voice 4",
            SelectionFilterType::Dynamic => "Dynamics",
            SelectionFilterType::Hairpin => "Hairpins",
            SelectionFilterType::Fingering => "Fingering",
            SelectionFilterType::Lyrics => "Lyrics",
            SelectionFilterType::ChordSymbol => "Chord Symbols",
            SelectionFilterType::OtherText => "Other Text",
            SelectionFilterType::Articulation => "Articulations",
            SelectionFilterType::Slur => "Slurs",
            SelectionFilterType::FiguredBass => "Figured Bass",
            SelectionFilterType::Ottava => "Ottava",
            SelectionFilterType::PedalLine => "Pedal Lines",
            SelectionFilterType::OtherLine => "Other Lines",
            SelectionFilterType::Arpeggio => "Arpeggios",
            SelectionFilterType::Glissando => "Glissandos",
            SelectionFilterType::FretDiagram => "Fretboard Diagrams",
            SelectionFilterType::Breath => "Breath Marks",
            SelectionFilterType::Tremolo => "Tremolo",
            SelectionFilterType::GraceNote => "Grace Notes",
        }
    }

    /// Voice category for a 0-based voice index (0..=3)
    pub fn for_voice(voice: u8) -> Option<SelectionFilterType> {
        match voice {
            0 => Some(SelectionFilterType::FirstVoice),
            1 => Some(SelectionFilterType::SecondVoice),
            2 => Some(SelectionFilterType::ThirdVoice),
            3 => Some(SelectionFilterType::FourthVoice),
            _ => None,
        }
    }
}

/// Bitmask of enabled [`SelectionFilterType`] categories
///
/// Serializes as its plain integer value so JavaScript sees a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct FilterMask(u32);

impl FilterMask {
    /// Every category bit set
    pub const FULL: u32 = (1 << SelectionFilterType::ALL.len()) - 1;

    /// No category selectable
    pub fn empty() -> Self {
        FilterMask(0)
    }

    /// Every category selectable
    pub fn all() -> Self {
        FilterMask(Self::FULL)
    }

    /// Build a mask from raw bits, dropping bits with no category
    pub fn from_bits(bits: u32) -> Self {
        FilterMask(bits & Self::FULL)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_set(self, category: SelectionFilterType) -> bool {
        self.0 & category.bit() != 0
    }

    /// Set or clear exactly one category bit
    pub fn set(&mut self, category: SelectionFilterType, enabled: bool) {
        if enabled {
            self.0 |= category.bit();
        } else {
            self.0 &= !category.bit();
        }
    }

    pub fn is_all(self) -> bool {
        self.0 == Self::FULL
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of enabled categories
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether elements in the given 0-based voice may be selected
    pub fn can_select_voice(self, voice: u8) -> bool {
        SelectionFilterType::for_voice(voice)
            .map(|category| self.is_set(category))
            .unwrap_or(false)
    }

    /// Whether an element passes both its voice filter and its category filter
    pub fn can_select(self, element: &ScoreElement) -> bool {
        if !self.can_select_voice(element.voice) {
            return false;
        }
        match element.kind.filter_type() {
            Some(category) => self.is_set(category),
            None => true,
        }
    }
}

impl Default for FilterMask {
    fn default() -> Self {
        FilterMask::all()
    }
}

impl From<u32> for FilterMask {
    fn from(bits: u32) -> Self {
        FilterMask::from_bits(bits)
    }
}

impl From<FilterMask> for u32 {
    fn from(mask: FilterMask) -> Self {
        mask.0
    }
}

//! Chord-quality and extension tagging from root-relative offsets
//!
//! Each rule is an independent predicate over the offsets present. Rules run
//! in table order and every matching rule appends its tag, so earlier rules
//! contribute the leftmost text.

use crate::pitch::PitchClass;

/// Set of semitone offsets above a root, as a 12-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OffsetSet(u16);

impl OffsetSet {
    /// Offsets of `tones` measured upward from `root`
    pub fn relative_to(root: PitchClass, tones: &[PitchClass]) -> Self {
        tones.iter().fold(Self::default(), |set, &pc| set.with(pc - root))
    }

    pub fn from_offsets(offsets: &[u8]) -> Self {
        offsets
            .iter()
            .fold(Self::default(), |set, &o| set.with(PitchClass::from(o)))
    }

    fn with(self, offset: PitchClass) -> Self {
        Self(self.0 | (1 << offset.value()))
    }

    pub fn has(self, offset: u8) -> bool {
        offset < 12 && self.0 & (1 << offset) != 0
    }

    pub fn lacks(self, offset: u8) -> bool {
        !self.has(offset)
    }

    pub fn has_all(self, offsets: &[u8]) -> bool {
        offsets.iter().all(|&o| self.has(o))
    }

    pub fn lacks_all(self, offsets: &[u8]) -> bool {
        offsets.iter().all(|&o| self.lacks(o))
    }
}

/// A single tagging rule
pub struct TagRule {
    pub tag: &'static str,
    pub applies: fn(OffsetSet) -> bool,
}

pub const TAG_RULES: &[TagRule] = &[
    TagRule { tag: "maj", applies: |s| s.has(4) && s.lacks_all(&[3, 10, 11]) && s.lacks(8) },
    TagRule { tag: "min", applies: |s| s.has(3) && s.lacks(4) && s.lacks(6) },
    TagRule { tag: "6", applies: |s| s.has(9) },
    TagRule { tag: "7", applies: |s| s.has(10) && s.lacks(5) },
    TagRule { tag: "maj7", applies: |s| s.has(11) },
    TagRule { tag: "b13", applies: |s| s.has_all(&[7, 8]) },
    TagRule {
        tag: "sus4",
        applies: |s| {
            ((s.has(2) || s.has(5)) && s.lacks_all(&[3, 4]) && s.has(7)) || s.has_all(&[5, 10])
        },
    },
    TagRule { tag: "sus2/4", applies: |s| s.has_all(&[2, 5]) },
    TagRule {
        tag: "sus2",
        applies: |s| s.lacks(5) && s.has(2) && s.lacks_all(&[3, 4]) && s.lacks(7),
    },
    TagRule {
        tag: "sus4",
        applies: |s| s.lacks(2) && s.has(5) && s.lacks_all(&[3, 4]) && s.lacks(7),
    },
    TagRule { tag: "add9", applies: |s| s.has_all(&[2, 3]) || s.has_all(&[2, 4]) },
    TagRule { tag: "add11", applies: |s| s.has_all(&[5, 3]) || s.has_all(&[5, 4]) },
    TagRule { tag: "b9", applies: |s| s.has(1) },
    TagRule { tag: "#9", applies: |s| s.has_all(&[3, 4]) },
    TagRule { tag: "#11", applies: |s| s.has(6) && s.lacks(5) && (s.has(7) || s.has(8)) },
    TagRule {
        tag: "b5",
        applies: |s| {
            s.has(6) && (s.lacks(7) || s.lacks(8)) && s.lacks(3) && s.lacks_all(&[7, 8])
        },
    },
    TagRule {
        tag: "#5",
        applies: |s| ((s.has(8) && s.lacks(7)) || s.has_all(&[8, 9])) && s.lacks(4),
    },
    TagRule { tag: "no3", applies: |s| s.lacks_all(&[2, 3, 4, 5]) },
    TagRule { tag: "no5", applies: |s| s.lacks_all(&[6, 7, 8]) },
    TagRule { tag: "dim", applies: |s| s.has_all(&[3, 6]) },
    TagRule { tag: "aug", applies: |s| s.has_all(&[4, 8]) },
];

/// Concatenate the tags of every matching rule, in rule order
pub fn functionality(offsets: OffsetSet) -> String {
    TAG_RULES
        .iter()
        .filter(|rule| (rule.applies)(offsets))
        .map(|rule| rule.tag)
        .collect()
}

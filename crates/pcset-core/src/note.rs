//! Enharmonic note names and sharp/flat spelling

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PcsetError, Result};
use crate::pitch::PitchClass;

/// One of the 17 accepted spellings of the twelve pitch classes.
///
/// The five black keys carry both a sharp and a flat name. `Cs` is the
/// internal spelling of `C#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    Cs,
    Db,
    D,
    Ds,
    Eb,
    E,
    F,
    Fs,
    Gb,
    G,
    Gs,
    Ab,
    A,
    As,
    Bb,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 17] = [
        Self::C, Self::Cs, Self::Db, Self::D, Self::Ds, Self::Eb, Self::E, Self::F, Self::Fs,
        Self::Gb, Self::G, Self::Gs, Self::Ab, Self::A, Self::As, Self::Bb, Self::B,
    ];

    const SHARPS: [NoteName; 12] = [
        Self::C, Self::Cs, Self::D, Self::Ds, Self::E, Self::F,
        Self::Fs, Self::G, Self::Gs, Self::A, Self::As, Self::B,
    ];

    const FLATS: [NoteName; 12] = [
        Self::C, Self::Db, Self::D, Self::Eb, Self::E, Self::F,
        Self::Gb, Self::G, Self::Ab, Self::A, Self::Bb, Self::B,
    ];

    pub fn pitch_class(self) -> PitchClass {
        let value: u8 = match self {
            Self::C => 0,
            Self::Cs | Self::Db => 1,
            Self::D => 2,
            Self::Ds | Self::Eb => 3,
            Self::E => 4,
            Self::F => 5,
            Self::Fs | Self::Gb => 6,
            Self::G => 7,
            Self::Gs | Self::Ab => 8,
            Self::A => 9,
            Self::As | Self::Bb => 10,
            Self::B => 11,
        };
        PitchClass::from(value)
    }

    /// Sharp spelling of the same pitch (identity for naturals and sharps)
    pub fn sharpen(self) -> Self {
        match self {
            Self::Db => Self::Cs,
            Self::Eb => Self::Ds,
            Self::Gb => Self::Fs,
            Self::Ab => Self::Gs,
            Self::Bb => Self::As,
            other => other,
        }
    }

    /// Flat spelling of the same pitch (identity for naturals and flats)
    pub fn flatten(self) -> Self {
        match self {
            Self::Cs => Self::Db,
            Self::Ds => Self::Eb,
            Self::Fs => Self::Gb,
            Self::Gs => Self::Ab,
            Self::As => Self::Bb,
            other => other,
        }
    }

    pub fn sharp_of(pc: PitchClass) -> Self {
        Self::SHARPS[pc.value() as usize]
    }

    pub fn flat_of(pc: PitchClass) -> Self {
        Self::FLATS[pc.value() as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cs => "C#",
            Self::Db => "Db",
            Self::D => "D",
            Self::Ds => "D#",
            Self::Eb => "Eb",
            Self::E => "E",
            Self::F => "F",
            Self::Fs => "F#",
            Self::Gb => "Gb",
            Self::G => "G",
            Self::Gs => "G#",
            Self::Ab => "Ab",
            Self::A => "A",
            Self::As => "A#",
            Self::Bb => "Bb",
            Self::B => "B",
        }
    }
}

impl From<NoteName> for PitchClass {
    fn from(name: NoteName) -> Self {
        name.pitch_class()
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = PcsetError;

    /// Accepts `C#`, `Cs`, `C♯`, `Db`, `D♭`. The letter may be lowercase.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('#', "s").replace('♯', "s").replace('♭', "b");
        let mut chars = normalized.chars();
        let Some(letter) = chars.next() else {
            return Err(PcsetError::UnknownNoteName(s.to_string()));
        };
        let key = format!("{}{}", letter.to_ascii_uppercase(), chars.as_str());

        let name = match key.as_str() {
            "C" => Self::C,
            "Cs" => Self::Cs,
            "Db" => Self::Db,
            "D" => Self::D,
            "Ds" => Self::Ds,
            "Eb" => Self::Eb,
            "E" => Self::E,
            "F" => Self::F,
            "Fs" => Self::Fs,
            "Gb" => Self::Gb,
            "G" => Self::G,
            "Gs" => Self::Gs,
            "Ab" => Self::Ab,
            "A" => Self::A,
            "As" => Self::As,
            "Bb" => Self::Bb,
            "B" => Self::B,
            _ => return Err(PcsetError::UnknownNoteName(s.to_string())),
        };
        Ok(name)
    }
}

/// Which enharmonic spelling to use when naming a computed pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    pub fn spell(self, pc: PitchClass) -> NoteName {
        match self {
            Self::Sharp => NoteName::sharp_of(pc),
            Self::Flat => NoteName::flat_of(pc),
        }
    }

    /// The spelling a name was written in; naturals count as sharp
    pub fn of(name: NoteName) -> Self {
        if name.flatten() == name && name.sharpen() != name { Self::Flat } else { Self::Sharp }
    }
}

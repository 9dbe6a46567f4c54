//! Root movement between chords and replayable cadence templates

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canon::zero_form;
use crate::chord::{recognize, Chord};
use crate::error::Result;
use crate::note::Spelling;
use crate::pitch::PitchClass;

/// Directed motion between two chord roots, taken the short way round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    Ascending(PitchClass),
    Descending(PitchClass),
    Unison,
    /// Six semitones, no shorter direction
    Tritone,
}

impl Movement {
    pub fn between(from: PitchClass, to: PitchClass) -> Self {
        let up = last_or_zero(&zero_form(&[from, to]));
        let down = last_or_zero(&zero_form(&[to, from]));

        if up < down {
            Self::Ascending(up)
        } else if down < up {
            Self::Descending(down)
        } else if up == PitchClass::C {
            Self::Unison
        } else {
            Self::Tritone
        }
    }

    /// Upward distance in semitones
    pub fn semitones(self) -> PitchClass {
        match self {
            Self::Ascending(n) => n,
            Self::Descending(n) => n.complement(),
            Self::Unison => PitchClass::C,
            Self::Tritone => PitchClass::TRITONE,
        }
    }
}

fn last_or_zero(seq: &[PitchClass]) -> PitchClass {
    seq.last().copied().unwrap_or_default()
}

pub fn to_movement(from: PitchClass, to: PitchClass) -> Movement {
    Movement::between(from, to)
}

pub fn from_movement(movement: Movement) -> PitchClass {
    movement.semitones()
}

/// A pair of chords reduced to functionality, root motion and destination shape
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub movement: Movement,
    /// Zero form of the destination chord's tones
    pub tones: Vec<PitchClass>,
}

/// A transition without its origin: where to go, independent of where from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cadence {
    pub functionality: String,
    pub movement: Movement,
    pub tones: Vec<PitchClass>,
}

impl From<Transition> for Cadence {
    fn from(transition: Transition) -> Self {
        Self {
            functionality: transition.to,
            movement: transition.movement,
            tones: transition.tones,
        }
    }
}

pub fn to_transition(from: &Chord, to: &Chord) -> Transition {
    Transition {
        from: from.functionality.clone(),
        to: to.functionality.clone(),
        movement: Movement::between(from.root_pitch(), to.root_pitch()),
        tones: zero_form(&to.tones),
    }
}

pub fn to_cadence(from: &Chord, to: &Chord) -> Cadence {
    to_transition(from, to).into()
}

/// Replay a cadence from a new origin root: the stored tones are moved to
/// `new_root` plus the cadence movement and recognized again.
pub fn from_cadence(spelling: Spelling, new_root: impl Into<PitchClass>, cadence: &Cadence) -> Result<Chord> {
    let offset = new_root.into() + cadence.movement.semitones();
    debug!(%offset, movement = ?cadence.movement, "replaying cadence");
    replay(spelling, offset, cadence)
}

/// Place the cadence's destination directly at `new_root`, ignoring its movement
pub fn transpose_cadence(
    spelling: Spelling,
    new_root: impl Into<PitchClass>,
    cadence: &Cadence,
) -> Result<Chord> {
    replay(spelling, new_root.into(), cadence)
}

fn replay(spelling: Spelling, offset: PitchClass, cadence: &Cadence) -> Result<Chord> {
    let tones: Vec<PitchClass> = cadence.tones.iter().map(|&t| t + offset).collect();
    recognize(spelling, &tones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PcsetError;
    use crate::note::NoteName;

    fn pc(v: i32) -> PitchClass {
        PitchClass::from(v)
    }

    #[test]
    fn test_movement_takes_shorter_direction() {
        assert_eq!(to_movement(pc(7), pc(0)), Movement::Ascending(pc(5)));
        assert_eq!(to_movement(pc(0), pc(7)), Movement::Descending(pc(5)));
        assert_eq!(to_movement(pc(11), pc(1)), Movement::Ascending(pc(2)));
        assert_eq!(to_movement(pc(4), pc(4)), Movement::Unison);
        assert_eq!(to_movement(pc(0), pc(6)), Movement::Tritone);
        assert_eq!(to_movement(pc(9), pc(3)), Movement::Tritone);
    }

    #[test]
    fn test_from_movement() {
        assert_eq!(from_movement(Movement::Ascending(pc(5))), pc(5));
        assert_eq!(from_movement(Movement::Descending(pc(5))), pc(7));
        assert_eq!(from_movement(Movement::Unison), pc(0));
        assert_eq!(from_movement(Movement::Tritone), pc(6));
    }

    #[test]
    fn test_transition_between_dominant_and_tonic() {
        let g = recognize(Spelling::Sharp, &[7, 11, 2]).unwrap();
        let c = recognize(Spelling::Sharp, &[0, 4, 7]).unwrap();
        let t = to_transition(&g, &c);
        assert_eq!(t.from, "maj");
        assert_eq!(t.to, "maj");
        assert_eq!(t.movement, Movement::Ascending(pc(5)));
        assert_eq!(t.tones, vec![pc(0), pc(7), pc(4)]);

        let cadence = to_cadence(&g, &c);
        assert_eq!(cadence, Cadence::from(t));
        assert_eq!(cadence.functionality, "maj");
    }

    #[test]
    fn test_from_cadence_moves_relative_to_new_root() {
        let g = recognize(Spelling::Sharp, &[7, 11, 2]).unwrap();
        let c = recognize(Spelling::Sharp, &[0, 4, 7]).unwrap();
        let cadence = to_cadence(&g, &c);

        // V -> I from D lands on G
        let resolved = from_cadence(Spelling::Sharp, NoteName::D, &cadence).unwrap();
        assert_eq!(resolved.root, NoteName::G);
        assert_eq!(resolved.functionality, "maj");
        assert_eq!(resolved.show(), "G maj");
    }

    #[test]
    fn test_transpose_cadence_ignores_movement() {
        let a = recognize(Spelling::Sharp, &[9, 0, 4]).unwrap();
        let d = recognize(Spelling::Sharp, &[2, 5, 9]).unwrap();
        let cadence = to_cadence(&a, &d);
        assert_eq!(cadence.functionality, "min");

        let placed = transpose_cadence(Spelling::Flat, pc(10), &cadence).unwrap();
        assert_eq!(placed.root, NoteName::Bb);
        assert_eq!(placed.show(), "Bb min");
    }

    #[test]
    fn test_empty_cadence_is_rejected() {
        let cadence = Cadence {
            functionality: String::new(),
            movement: Movement::Unison,
            tones: Vec::new(),
        };
        assert_eq!(transpose_cadence(Spelling::Sharp, pc(0), &cadence), Err(PcsetError::EmptyTones));
    }

    #[test]
    fn test_cadence_serializes() {
        let g = recognize(Spelling::Sharp, &[7, 11, 2]).unwrap();
        let c = recognize(Spelling::Sharp, &[0, 4, 7]).unwrap();
        let cadence = to_cadence(&g, &c);
        let json = serde_json::to_string(&cadence).unwrap();
        let back: Cadence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cadence);
    }
}

//! Chord recognition and naming
//!
//! Recognition takes a fundamental followed by candidate upper tones. Sets with
//! more than three pitch classes are first reduced to their most consonant
//! triad over the fundamental, which is then checked against the known triad
//! shapes to recover the real root and inversion.
//!
//! The reduction tries every pair of upper tones, so its cost grows with the
//! square of the tone count.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::canon::{inversions, prime_form, same_set, zero_form};
use crate::consonance::most_consonant;
use crate::error::{PcsetError, Result};
use crate::functionality::{functionality, OffsetSet};
use crate::note::{NoteName, Spelling};
use crate::pitch::PitchClass;
use crate::util::{choose, unique};

// ============================================================================
// Inversions and Triad Shapes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Inversion {
    #[default]
    Root,
    First,
    Second,
}

impl Inversion {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Root => "",
            Self::First => "_1stInv",
            Self::Second => "_2ndInv",
        }
    }

    fn from_functionality(tag: &str) -> Self {
        if tag.ends_with(Self::First.suffix()) {
            Self::First
        } else if tag.ends_with(Self::Second.suffix()) {
            Self::Second
        } else {
            Self::Root
        }
    }
}

/// Prime forms whose members are read as inversions of a triad
pub const ARCHETYPES: [[u8; 3]; 3] = [[0, 3, 7], [0, 2, 7], [0, 3, 6]];

/// A triad voicing seen from its bass
#[derive(Debug, Clone, Copy)]
pub struct TriadShape {
    /// Ascending offsets above the bass
    pub offsets: [u8; 3],
    /// Offset of the chord root above the bass
    pub root: u8,
    pub inversion: Inversion,
}

impl TriadShape {
    const fn new(offsets: [u8; 3], root: u8, inversion: Inversion) -> Self {
        Self { offsets, root, inversion }
    }

    fn matches(&self, zero_form: &[PitchClass]) -> bool {
        let mut sorted = zero_form.to_vec();
        sorted.sort();
        sorted.iter().map(|pc| pc.value()).eq(self.offsets)
    }
}

pub const TRIAD_SHAPES: [TriadShape; 12] = [
    // Major
    TriadShape::new([0, 4, 7], 0, Inversion::Root),
    TriadShape::new([0, 3, 8], 8, Inversion::First),
    TriadShape::new([0, 5, 9], 5, Inversion::Second),
    // Minor
    TriadShape::new([0, 3, 7], 0, Inversion::Root),
    TriadShape::new([0, 4, 9], 9, Inversion::First),
    TriadShape::new([0, 5, 8], 5, Inversion::Second),
    // Suspended fourth
    TriadShape::new([0, 5, 7], 0, Inversion::Root),
    TriadShape::new([0, 2, 7], 7, Inversion::First),
    TriadShape::new([0, 5, 10], 5, Inversion::Second),
    // Diminished
    TriadShape::new([0, 3, 6], 0, Inversion::Root),
    TriadShape::new([0, 3, 9], 9, Inversion::First),
    TriadShape::new([0, 6, 9], 6, Inversion::Second),
];

// ============================================================================
// Chord
// ============================================================================

/// A recognized chord. Ordering follows `(root, functionality, tones)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: NoteName,
    /// Quality and extension tag, followed by the inversion suffix if any
    pub functionality: String,
    /// The reduced triad: fundamental first, then the upper tones in descending order
    pub tones: Vec<PitchClass>,
    /// Spelling the chord was recognized with, reused for bass names
    #[serde(default)]
    pub spelling: Spelling,
}

impl Chord {
    pub fn root_pitch(&self) -> PitchClass {
        self.root.pitch_class()
    }

    /// The fundamental the chord was built from
    pub fn bass(&self) -> PitchClass {
        self.tones.first().copied().unwrap_or_else(|| self.root_pitch())
    }

    pub fn inversion(&self) -> Inversion {
        Inversion::from_functionality(&self.functionality)
    }

    /// Functionality tag without the inversion suffix
    pub fn base_functionality(&self) -> &str {
        let suffix = self.inversion().suffix();
        &self.functionality[..self.functionality.len() - suffix.len()]
    }

    /// Render with slash-chord conventions, e.g. `C maj/E`.
    ///
    /// Bass and relabelled roots use the spelling the chord was recognized with.
    pub fn show(&self) -> String {
        self.show_with(self.spelling)
    }

    /// Render with an explicit spelling for the bass name.
    ///
    /// Bass offsets are measured upward from the recovered root.
    pub fn show_with(&self, spelling: Spelling) -> String {
        let tag = self.base_functionality();
        let root = self.root_pitch();
        let slash = |up: i32| format!("{} {}/{}", self.root, tag, spelling.spell(root + PitchClass::from(up)));

        match self.inversion() {
            Inversion::First if tag.contains("maj") => slash(4),
            Inversion::First if tag.contains("min") || tag.contains("dim") => slash(3),
            Inversion::First if tag.contains("sus4") => {
                format!("{} sus2", spelling.spell(root + PitchClass::from(5)))
            }
            Inversion::Second if tag.contains("maj") || tag.contains("min") => slash(7),
            Inversion::Second if tag.contains("sus4") => slash(7),
            Inversion::Second if tag.contains("dim") => slash(6),
            _ => format!("{} {}", self.root, self.functionality),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

// ============================================================================
// Recognition
// ============================================================================

/// Recognize a chord from a fundamental followed by its upper tones.
///
/// Accepts anything convertible to a pitch class: raw integers (reduced mod
/// 12), `PitchClass` or `NoteName`.
///
/// # Example
/// ```
/// use pcset_core::{recognize, Spelling};
/// let chord = recognize(Spelling::Sharp, &[4, 0, 7]).unwrap();
/// assert_eq!(chord.show(), "C maj/E");
/// ```
pub fn recognize<T>(spelling: Spelling, tones: &[T]) -> Result<Chord>
where
    T: Copy + Into<PitchClass>,
{
    let pcs: Vec<PitchClass> = tones.iter().map(|&t| t.into()).collect();
    if pcs.is_empty() {
        return Err(PcsetError::EmptyTones);
    }

    let full = build_triad(&pcs);
    let triad = reduce_to_triad(full.clone());
    let (root, inversion) = locate_root(&triad);

    let offsets = OffsetSet::relative_to(root, &triad);
    let functionality = format!("{}{}", functionality(offsets), inversion.suffix());
    debug!(?full, ?triad, %root, %functionality, "recognized chord");

    Ok(Chord {
        root: spelling.spell(root),
        functionality,
        tones: triad,
        spelling,
    })
}

/// Fundamental followed by the distinct upper tones in descending order
fn build_triad(pcs: &[PitchClass]) -> Vec<PitchClass> {
    let root = pcs[0];
    let mut upper = pcs[1..].to_vec();
    upper.sort_by(|a, b| b.cmp(a));

    let mut anchored = Vec::with_capacity(pcs.len());
    anchored.push(root);
    anchored.extend(upper);
    zero_form(&anchored).into_iter().map(|pc| pc + root).collect()
}

/// Reduce to at most three pitch classes by keeping the most consonant
/// pair of upper tones over the fundamental
fn reduce_to_triad(tones: Vec<PitchClass>) -> Vec<PitchClass> {
    let max_passes = tones.len();
    let mut current = build_triad(&tones);

    for pass in 0..max_passes {
        if current.len() <= 3 {
            break;
        }

        let root = current[0];
        let candidates: Vec<Vec<PitchClass>> = choose(2, &unique(&current[1..]))
            .into_iter()
            .map(|pair| std::iter::once(root).chain(pair).collect())
            .collect();
        debug!(pass, candidates = candidates.len(), "reducing over-specified chord");

        // More than three tones always leaves at least one pair
        let Some(best) = most_consonant(&candidates) else { break };
        trace!(?best, "most consonant candidate");
        current = build_triad(&best);
    }

    debug_assert!(current.len() <= 3, "reduction left {} tones", current.len());
    current
}

/// Recover the root and inversion of a reduced triad
fn locate_root(triad: &[PitchClass]) -> (PitchClass, Inversion) {
    let bass = triad[0];
    let prime = prime_form(triad);
    let is_archetype = ARCHETYPES.iter().any(|archetype| {
        let archetype: Vec<PitchClass> = archetype.iter().map(|&v| PitchClass::from(v)).collect();
        same_set(&prime, &archetype)
    });
    if !is_archetype {
        return (bass, Inversion::Root);
    }

    let Some(first) = inversions(triad).into_iter().next() else {
        return (bass, Inversion::Root);
    };
    match TRIAD_SHAPES.iter().find(|shape| shape.matches(&first)) {
        Some(shape) => {
            trace!(offsets = ?shape.offsets, inversion = ?shape.inversion, "matched triad shape");
            (bass + PitchClass::from(shape.root), shape.inversion)
        }
        None => (bass, Inversion::Root),
    }
}

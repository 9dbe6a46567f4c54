//! pcset-core: Pitch-class set theory and chord recognition
//!
//! Every function here is pure and synchronous; all types are plain values
//! and can be shared freely across threads.

pub mod cadence;
pub mod canon;
pub mod chord;
pub mod consonance;
mod error;
pub mod functionality;
pub mod note;
pub mod pitch;
pub mod util;

pub use cadence::{
    from_cadence, from_movement, to_cadence, to_movement, to_transition, transpose_cadence,
    Cadence, Movement, Transition,
};
pub use canon::{interval_vector, inversions, normal_form, prime_form, rotations, zero_form, IntervalVector};
pub use chord::{recognize, Chord, Inversion, TriadShape, TRIAD_SHAPES};
pub use consonance::{dissonance_level, most_consonant, Dissonance};
pub use error::{PcsetError, Result};
pub use functionality::{functionality, OffsetSet, TagRule, TAG_RULES};
pub use note::{NoteName, Spelling};
pub use pitch::PitchClass;

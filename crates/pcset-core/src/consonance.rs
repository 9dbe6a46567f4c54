//! Hindemith-weighted dissonance scoring

use serde::{Deserialize, Serialize};

use crate::canon::interval_vector;
use crate::pitch::PitchClass;
use crate::util::count_elem;

/// Weight per interval class 1..=6
pub const INTERVAL_WEIGHTS: [i32; 6] = [16, 8, 4, 2, 1, 24];

/// Score given to sets whose interval content sits in a single class
pub const SINGLE_CLASS_SCORE: i32 = 27;

/// A dissonance score together with the tones it was computed from.
/// Lower is more consonant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dissonance {
    pub score: i32,
    pub tones: Vec<PitchClass>,
}

pub fn dissonance_level(tones: &[PitchClass]) -> Dissonance {
    let vector = interval_vector(tones);
    let empty_buckets = vector.iter().filter(|&&count| count == 0).count();

    let score = if empty_buckets == 5 {
        SINGLE_CLASS_SCORE
    } else {
        let weighted: i32 = vector
            .iter()
            .zip(INTERVAL_WEIGHTS)
            .map(|(&count, weight)| count as i32 * weight)
            .sum();
        // Bonus for a perfect fifth above the first tone
        match tones.first() {
            Some(&root) if count_elem(tones, &(root + PitchClass::FIFTH)) > 0 => weighted - 1,
            _ => weighted,
        }
    };

    Dissonance { score, tones: tones.to_vec() }
}

/// Tones of the lowest-scoring candidate; the earliest candidate wins ties.
///
/// Returns `None` when there are no candidates.
pub fn most_consonant(candidates: &[Vec<PitchClass>]) -> Option<Vec<PitchClass>> {
    candidates
        .iter()
        .map(|c| dissonance_level(c))
        .min_by_key(|d| d.score)
        .map(|d| d.tones)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(values: &[i32]) -> Vec<PitchClass> {
        values.iter().map(|&v| PitchClass::from(v)).collect()
    }

    #[test]
    fn test_major_triad_score() {
        // ic3 + ic4 + ic5 = 4 + 2 + 1, minus the fifth bonus
        assert_eq!(dissonance_level(&pcs(&[0, 4, 7])).score, 6);
    }

    #[test]
    fn test_fifth_bonus_is_relative_to_first_tone() {
        // Same set, but first tone is E: no B present
        assert_eq!(dissonance_level(&pcs(&[4, 0, 7])).score, 7);
    }

    #[test]
    fn test_single_class_sets_score_27() {
        assert_eq!(dissonance_level(&pcs(&[0, 4, 8])).score, SINGLE_CLASS_SCORE);
        assert_eq!(dissonance_level(&pcs(&[0, 7])).score, SINGLE_CLASS_SCORE);
        assert_eq!(dissonance_level(&pcs(&[0, 6])).score, SINGLE_CLASS_SCORE);
    }

    #[test]
    fn test_echoes_input() {
        let tones = pcs(&[7, 2, 11]);
        let level = dissonance_level(&tones);
        assert_eq!(level.tones, tones);
        assert_eq!(level, dissonance_level(&tones));
    }

    #[test]
    fn test_most_consonant_picks_lowest() {
        let candidates = vec![pcs(&[0, 4, 10]), pcs(&[0, 4, 7]), pcs(&[0, 7, 10])];
        assert_eq!(most_consonant(&candidates), Some(pcs(&[0, 4, 7])));
    }

    #[test]
    fn test_most_consonant_tie_goes_to_first() {
        let candidates = vec![pcs(&[0, 3, 7]), pcs(&[2, 5, 9])];
        assert_eq!(most_consonant(&candidates), Some(pcs(&[0, 3, 7])));
        assert_eq!(most_consonant(&[]), None);
    }
}

//! Set-class canonicalization: zero form, normal form, prime form, interval vector
//!
//! Sequences are ordered `PitchClass` slices. `rotations`, `zero_form` and
//! `inversions` keep the order they are given; `normal_form` and `prime_form`
//! read their input as an unordered set.
//!
//! Known limitation: the normal-form tie-break only looks at the last three
//! positions, so compaction is only canonical for sets of up to four pitch
//! classes. Larger sets get a deterministic but not necessarily canonical
//! answer.

use crate::pitch::PitchClass;
use crate::util::unique;

/// Histogram of interval classes 1..=6 (index 0 is interval class 1)
pub type IntervalVector = [u32; 6];

/// All `n` cyclic rotations; rotation `k` moves the first `k` elements to the end
pub fn rotations<T: Clone>(seq: &[T]) -> Vec<Vec<T>> {
    (0..seq.len())
        .map(|k| {
            let mut rotated = seq.to_vec();
            rotated.rotate_left(k);
            rotated
        })
        .collect()
}

/// Transpose so the first element is 0, then drop repeats.
///
/// Returns an empty vector for empty input.
pub fn zero_form(seq: &[PitchClass]) -> Vec<PitchClass> {
    let Some(&first) = seq.first() else {
        return Vec::new();
    };
    let shifted: Vec<PitchClass> = seq.iter().map(|&x| x - first).collect();
    unique(&shifted)
}

/// The zero form of every rotation, in rotation order
pub fn inversions(seq: &[PitchClass]) -> Vec<Vec<PitchClass>> {
    rotations(seq).iter().map(|r| zero_form(r)).collect()
}

/// Most compact rotation of the set.
///
/// Candidates are compared on their last element, then second-to-last, then
/// third-to-last; remaining ties go to the earliest rotation.
pub fn normal_form(seq: &[PitchClass]) -> Vec<PitchClass> {
    let mut set = unique(seq);
    set.sort();

    inversions(&set)
        .into_iter()
        .min_by_key(|candidate| compaction_key(candidate))
        .unwrap_or_default()
}

fn compaction_key(candidate: &[PitchClass]) -> [Option<PitchClass>; 3] {
    let from_end = |i: usize| candidate.len().checked_sub(i + 1).map(|idx| candidate[idx]);
    [from_end(0), from_end(1), from_end(2)]
}

/// The smaller-summing of the normal form and its mirror image.
/// The unmirrored form wins exact ties.
pub fn prime_form(seq: &[PitchClass]) -> Vec<PitchClass> {
    let normal = normal_form(seq);
    let complemented: Vec<PitchClass> = normal.iter().map(|pc| pc.complement()).collect();
    let mirrored = normal_form(&complemented);

    if sum(&mirrored) < sum(&normal) { mirrored } else { normal }
}

fn sum(seq: &[PitchClass]) -> u32 {
    seq.iter().map(|pc| pc.value() as u32).sum()
}

/// Interval-class histogram over every pair of the prime form
pub fn interval_vector(seq: &[PitchClass]) -> IntervalVector {
    let prime = prime_form(seq);
    let mut vector = [0u32; 6];

    for (i, &low) in prime.iter().enumerate() {
        for &high in &prime[i + 1..] {
            let ic = (high - low).interval_class();
            if ic > 0 {
                vector[ic as usize - 1] += 1;
            }
        }
    }
    vector
}

/// Order-insensitive comparison of two pitch-class sequences
pub fn same_set(a: &[PitchClass], b: &[PitchClass]) -> bool {
    let mut a = unique(a);
    let mut b = unique(b);
    a.sort();
    b.sort();
    a == b
}

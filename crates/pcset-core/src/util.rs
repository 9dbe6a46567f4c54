//! Small sequence helpers shared by the canonicalization and chord engines

use std::hash::Hash;

use itertools::Itertools;

/// Stable de-duplication: keeps the first occurrence of each value
pub fn unique<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    items.iter().cloned().unique().collect()
}

/// All `k`-element combinations of `items`, each in input order.
///
/// Combinations are produced in lexicographic order of their indices.
pub fn choose<T: Clone>(k: usize, items: &[T]) -> Vec<Vec<T>> {
    items.iter().cloned().combinations(k).collect()
}

pub fn count_elem<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().filter(|x| *x == value).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(unique::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_choose_pairs() {
        assert_eq!(
            choose(2, &[1, 2, 3, 4]),
            vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4], vec![3, 4]]
        );
    }

    #[test]
    fn test_choose_edges() {
        assert_eq!(choose(0, &[1, 2]), vec![Vec::<i32>::new()]);
        assert!(choose(3, &[1, 2]).is_empty());
        assert_eq!(choose(2, &[7, 9]), vec![vec![7, 9]]);
    }

    #[test]
    fn test_count_elem() {
        assert_eq!(count_elem(&[0, 4, 0, 7], &0), 2);
        assert_eq!(count_elem(&[0, 4, 7], &5), 0);
    }
}

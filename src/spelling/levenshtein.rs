//! Edit distance and similarity for suggestion scoring.

use std::cmp::min;

/// The Levenshtein distance between two strings: the minimum number of
/// single-character insertions, deletions, or substitutions turning one
/// into the other.
pub fn distance(s1: &str, s2: &str) -> usize {
    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();

    if chars1.is_empty() {
        return chars2.len();
    }
    if chars2.is_empty() {
        return chars1.len();
    }

    let mut matrix = vec![vec![0usize; chars2.len() + 1]; chars1.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=chars1.len() {
        for j in 1..=chars2.len() {
            let cost = usize::from(chars1[i - 1] != chars2[j - 1]);
            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[chars1.len()][chars2.len()]
}

/// Distance bounded by a threshold: `None` once it is certain the distance
/// exceeds `threshold`. Two rows of state, early exit per row — the fast
/// path for filtering many candidates.
pub fn distance_within(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();

    if chars1.len().abs_diff(chars2.len()) > threshold {
        return None;
    }
    if chars1.is_empty() {
        return Some(chars2.len());
    }
    if chars2.is_empty() {
        return Some(chars1.len());
    }

    let mut prev_row: Vec<usize> = (0..=chars2.len()).collect();
    let mut curr_row = vec![0usize; chars2.len() + 1];

    for i in 1..=chars1.len() {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=chars2.len() {
            let cost = usize::from(chars1[i - 1] != chars2[j - 1]);
            curr_row[j] = min(
                min(prev_row[j] + 1, curr_row[j - 1] + 1),
                prev_row[j - 1] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let result = prev_row[chars2.len()];
    (result <= threshold).then_some(result)
}

/// Normalized similarity in 0..1: 1.0 for identical strings, 0.0 for
/// strings sharing nothing.
pub fn ratio(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (distance(s1, s2) as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "a"), 1);
        assert_eq!(distance("a", ""), 1);
        assert_eq!(distance("a", "a"), 0);
        assert_eq!(distance("ab", "ac"), 1);
        assert_eq!(distance("abc", "def"), 3);
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("hello", "helo"), 1);
    }

    #[test]
    fn test_distance_within() {
        assert_eq!(distance_within("kitten", "sitting", 3), Some(3));
        assert_eq!(distance_within("kitten", "sitting", 2), None);
        assert_eq!(distance_within("hello", "hello", 0), Some(0));
        assert_eq!(distance_within("a", "abc", 1), None);
        assert_eq!(distance_within("a", "ab", 1), Some(1));
    }

    #[test]
    fn test_distance_within_agrees_with_distance() {
        let pairs = [("hello", "jello"), ("word", "world"), ("boop", "boot")];
        for (a, b) in pairs {
            assert_eq!(distance_within(a, b, 5), Some(distance(a, b)));
        }
    }

    #[test]
    fn test_ratio() {
        assert!((ratio("", "") - 1.0).abs() < 1e-9);
        assert!((ratio("abc", "abc") - 1.0).abs() < 1e-9);
        assert!((ratio("abc", "def") - 0.0).abs() < 1e-9);
        assert!(ratio("helo", "hello") > ratio("qqq", "the"));
    }
}

//! Levenshtein distance.

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`. Compares Unicode scalar values, unit cost each.
///
/// Keeps two DP rows, so memory is O(|b|).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", 0)]
    #[case("abc", "", 3)]
    #[case("", "abcd", 4)]
    #[case("kitten", "sitting", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("rohit sharma", "rohit sarma", 1)]
    #[case("café", "cafe", 1)]
    fn known_distances(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(edit_distance(a, b), expected);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("rahul.v@abc.in")]
    #[case("日本語")]
    fn distance_to_self_is_zero(#[case] s: &str) {
        assert_eq!(edit_distance(s, s), 0);
    }

    #[rstest]
    #[case("kitten", "sitting")]
    #[case("rohit@xyz.com", "rohit.sarma@xyz.com")]
    #[case("a", "bcdef")]
    fn distance_is_symmetric(#[case] a: &str, #[case] b: &str) {
        assert_eq!(edit_distance(a, b), edit_distance(b, a));
    }

    #[test]
    fn case_sensitive_by_itself() {
        assert_eq!(edit_distance("Rohit", "rohit"), 1);
    }
}

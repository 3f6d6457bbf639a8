//! Word-level substitution filter.
//!
//! Runs before ranking so that contractions and person reflections (e.g.
//! `"im"` -> `"you are"`) are already normalized when keywords are scored.
//! Every token is lowercased whether or not a substitution applies; this
//! keeps ranking and decomposition fully deterministic.

use crate::SubstitutionTable;

/// Tokenize `input` on whitespace, lowercase each token, replace it via the
/// table when mapped, and re-join with single spaces.
///
/// Substitution is applied once per token and never re-applied to its own
/// output, so the table cannot loop (`"you"` -> `"i"` alongside `"i"` ->
/// `"you"` is fine).
pub(crate) fn substitute(input: &str, table: &SubstitutionTable) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let lowered = word.to_lowercase();
            match table.get(&lowered) {
                Some(replacement) => replacement.to_string(),
                None => lowered,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SubstitutionTable {
        let mut t = SubstitutionTable::new();
        t.insert("im", "you are");
        t.insert("my", "your");
        t.insert("you", "i");
        t.insert("i", "you");
        t
    }

    #[test]
    fn substitutes_mapped_words() {
        assert_eq!(substitute("im sad", &table()), "you are sad");
    }

    #[test]
    fn lowercases_every_token() {
        assert_eq!(substitute("My Dog LIKES Walks", &table()), "your dog likes walks");
    }

    #[test]
    fn substitution_is_not_transitive() {
        // "i" maps to "you" exactly once; the produced "you" is not mapped
        // back to "i".
        assert_eq!(substitute("i like you", &table()), "you like i");
    }

    #[test]
    fn joins_with_single_spaces_and_no_trailing_boundary() {
        assert_eq!(substitute("  a   b  ", &table()), "a b");
    }

    #[test]
    fn deterministic_across_calls() {
        let t = table();
        let first = substitute("Im sure my answer is right", &t);
        let second = substitute("Im sure my answer is right", &t);
        assert_eq!(first, second);
    }
}

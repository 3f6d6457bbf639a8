//! Keyword ranking and clause selection.
//!
//! The input arrives pre-split into clauses (see `respond::split_clauses`).
//! Each clause is stripped of punctuation, run through the substitution
//! filter, and scored by the highest keyword rank among its words; the
//! highest-scoring clause wins, with ties going to the *earliest* clause.
//! Within the winning clause, words are ordered by rank descending, stable
//! with respect to their original left-to-right order, and every word is a
//! candidate keyword for decomposition (unranked words score 0 but still
//! participate).

use crate::engine::{debug_rules, substitute};
use crate::{RespondError, Script, SubstitutionTable};

/// Pick the clause to respond to and the keyword order to try against it.
///
/// Returns the cleaned, substituted clause plus its words sorted by rank
/// descending (stable on ties). Errors with [`RespondError::EmptyInput`]
/// when every clause is empty after cleaning.
pub(crate) fn rank(
    clauses: &[String],
    script: &Script,
    substitutions: &SubstitutionTable,
) -> Result<(String, Vec<String>), RespondError> {
    // Apostrophes are deliberately not stripped so contractions like "i'm"
    // survive long enough to be substituted.
    let punctuation = regex!(r##"[!"#$%&()*+,\-./:;<=>?@\[\]^_{|}~]"##);

    let mut best: Option<(u32, String, Vec<(u32, String)>)> = None;

    for (position, clause) in clauses.iter().enumerate() {
        let stripped = punctuation.replace_all(clause, "");
        let cleaned = substitute(&stripped, substitutions);
        if cleaned.is_empty() {
            continue;
        }

        let ranked: Vec<(u32, String)> = cleaned
            .split_whitespace()
            .map(|word| (script.rank_of(word), word.to_string()))
            .collect();
        let score = ranked.iter().map(|(rank, _)| *rank).max().unwrap_or(0);

        if debug_rules() {
            eprintln!("[rank] clause={position} score={score} text=\"{cleaned}\"");
        }

        // Strictly greater keeps the earliest clause on ties.
        if best.as_ref().is_none_or(|(top, _, _)| score > *top) {
            best = Some((score, cleaned, ranked));
        }
    }

    let Some((_, clause, mut ranked)) = best else {
        return Err(RespondError::EmptyInput);
    };

    // Stable sort keyed solely on rank, descending; equal ranks keep their
    // left-to-right clause order.
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    Ok((clause, ranked.into_iter().map(|(_, word)| word).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeywordDef, RuleDef, TagTable};

    fn script_with_ranks(ranks: &[(&str, u32)]) -> Script {
        let mut defs: Vec<KeywordDef> = ranks
            .iter()
            .map(|&(keyword, rank)| KeywordDef {
                keyword: keyword.to_string(),
                rank,
                rules: vec![RuleDef {
                    decomp: "0".to_string(),
                    reassembly: vec!["go on .".to_string()],
                }],
            })
            .collect();
        defs.push(entry! {
            keyword: "$",
            rank: 0,
            rules: [{ decomp: "0", reassembly: ["please go on ."] }],
        });
        defs.push(entry! {
            keyword: "^",
            rank: 0,
            rules: [{ decomp: "0", reassembly: ["you mentioned 1 ."] }],
        });
        Script::compile(defs, &TagTable::new()).unwrap()
    }

    fn clauses(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn picks_clause_with_highest_ranked_word() {
        let script = script_with_ranks(&[("computer", 50), ("sorry", 1)]);
        let (clause, _) = rank(
            &clauses(&["sorry about that", "the computer hates me"]),
            &script,
            &SubstitutionTable::new(),
        )
        .unwrap();
        assert_eq!(clause, "the computer hates me");
    }

    #[test]
    fn tie_break_chooses_earliest_clause() {
        let script = script_with_ranks(&[("alpha", 3), ("beta", 3)]);
        let (clause, _) = rank(
            &clauses(&["beta second words", "alpha first words"]),
            &script,
            &SubstitutionTable::new(),
        )
        .unwrap();
        assert_eq!(clause, "beta second words");
    }

    #[test]
    fn keywords_sorted_by_rank_descending_stable() {
        let script = script_with_ranks(&[("high", 9), ("mid", 5), ("also", 5)]);
        let (_, keywords) = rank(
            &clauses(&["mid also high plain"]),
            &script,
            &SubstitutionTable::new(),
        )
        .unwrap();
        // "mid" and "also" share a rank; original order is preserved between
        // them, and the unranked word comes last.
        assert_eq!(keywords, vec!["high", "mid", "also", "plain"]);
    }

    #[test]
    fn strips_punctuation_before_scoring() {
        let script = script_with_ranks(&[("computer", 50)]);
        let (clause, keywords) = rank(
            &clauses(&["computer!?"]),
            &script,
            &SubstitutionTable::new(),
        )
        .unwrap();
        assert_eq!(clause, "computer");
        assert_eq!(keywords, vec!["computer"]);
    }

    #[test]
    fn applies_substitutions_before_scoring() {
        let script = script_with_ranks(&[("your", 4)]);
        let mut substitutions = SubstitutionTable::new();
        substitutions.insert("my", "your");
        let (clause, keywords) =
            rank(&clauses(&["my dog"]), &script, &substitutions).unwrap();
        assert_eq!(clause, "your dog");
        assert_eq!(keywords[0], "your");
    }

    #[test]
    fn empty_clauses_are_skipped_not_chosen() {
        let script = script_with_ranks(&[("words", 1)]);
        let (clause, _) = rank(
            &clauses(&["...", "words remain"]),
            &script,
            &SubstitutionTable::new(),
        )
        .unwrap();
        assert_eq!(clause, "words remain");
    }

    #[test]
    fn all_empty_clauses_is_an_error() {
        let script = script_with_ranks(&[]);
        let err = rank(
            &clauses(&["?!", "..."]),
            &script,
            &SubstitutionTable::new(),
        )
        .unwrap_err();
        assert_eq!(err, RespondError::EmptyInput);
    }
}

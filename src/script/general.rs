//! Built-in language configuration: substitutions, tags, memory triggers and
//! exit words.
//!
//! The substitution table does double duty: it expands contractions
//! ("dont" -> "do not") and reflects person ("my" -> "your", "i" -> "you"),
//! so the doctor script's keywords and patterns are written against the
//! *reflected* text. Substitution is applied once per token, so the two
//! reflection directions cannot loop.

use std::collections::HashSet;

use crate::{SubstitutionTable, TagTable};

/// Inputs that end the interactive shell. Checked by the shell, not the
/// engine.
pub const EXIT_WORDS: &[&str] = &["goodbye", "bye", "quit", "exit"];

/// Default word substitutions applied before ranking.
pub fn default_substitutions() -> SubstitutionTable {
    let mut table = SubstitutionTable::new();

    // Contractions. Punctuation stripping deliberately keeps apostrophes,
    // so both the apostrophe and collapsed spellings must map.
    table.insert("don't", "do not");
    table.insert("dont", "do not");
    table.insert("can't", "can not");
    table.insert("cant", "can not");
    table.insert("won't", "will not");
    table.insert("wont", "will not");
    table.insert("i'm", "you are");
    table.insert("im", "you are");
    table.insert("i've", "you have");
    table.insert("ive", "you have");
    table.insert("i'd", "you would");
    table.insert("id", "you would");
    table.insert("you're", "i am");
    table.insert("youre", "i am");
    table.insert("you've", "i have");
    table.insert("youve", "i have");

    // Person reflection: the script matches against the reflected text.
    table.insert("i", "you");
    table.insert("me", "you");
    table.insert("my", "your");
    table.insert("mine", "yours");
    table.insert("myself", "yourself");
    table.insert("am", "are");
    table.insert("you", "i");
    table.insert("your", "my");
    table.insert("yours", "mine");
    table.insert("yourself", "myself");

    // Vocabulary normalization.
    table.insert("mom", "mother");
    table.insert("mum", "mother");
    table.insert("dad", "father");
    table.insert("machine", "computer");
    table.insert("machines", "computers");

    table
}

/// Default tags referenced by the doctor script's `@tag` patterns.
pub fn default_tags() -> TagTable {
    let mut tags = TagTable::new();
    tags.insert(
        "family",
        [
            "mother", "father", "sister", "brother", "wife", "husband", "children", "son",
            "daughter",
        ],
    );
    tags.insert("sad", ["sad", "unhappy", "depressed", "sick", "miserable"]);
    tags.insert("happy", ["happy", "glad", "better", "elated"]);
    tags
}

/// Keywords whose successful match also queues a deferred response.
///
/// "your" is the reflected form of the user's "my": possessive statements
/// tend to carry material worth returning to later.
pub fn default_memory_triggers() -> HashSet<String> {
    HashSet::from(["your".to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::substitute;

    #[test]
    fn reflection_is_single_pass_in_both_directions() {
        let table = default_substitutions();
        assert_eq!(substitute("i trust you", &table), "you trust i");
        assert_eq!(substitute("you trust i", &table), "i trust you");
    }

    #[test]
    fn contractions_expand_to_reflected_forms() {
        let table = default_substitutions();
        assert_eq!(substitute("im tired", &table), "you are tired");
        assert_eq!(substitute("dont go", &table), "do not go");
    }

    #[test]
    fn apostrophe_spellings_match_collapsed_spellings() {
        let table = default_substitutions();
        for (with, without) in [
            ("i'm", "im"),
            ("i've", "ive"),
            ("i'd", "id"),
            ("don't", "dont"),
            ("can't", "cant"),
            ("won't", "wont"),
            ("you're", "youre"),
            ("you've", "youve"),
        ] {
            assert_eq!(
                substitute(with, &table),
                substitute(without, &table),
                "`{with}` and `{without}` diverge"
            );
        }
    }

    #[test]
    fn memory_triggers_have_script_entries() {
        // Every trigger must be decomposable, otherwise it could never push.
        let script = crate::Script::compile(
            crate::doctor_definitions(),
            &default_tags(),
        )
        .unwrap();
        for trigger in default_memory_triggers() {
            assert_ne!(script.rank_of(&trigger), 0, "trigger `{trigger}` missing from script");
        }
    }
}

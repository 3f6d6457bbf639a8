//! Segment matcher for compiled decomposition patterns.
//!
//! A [`CompiledPattern`] is an ordered list of typed [`Segment`]s rather than
//! a regular-expression string, so matching is an explicit scanner over the
//! clause's words with no dependency on a regex dialect (and none of its
//! word-boundary escaping concerns).
//!
//! Matching semantics:
//!
//! - anchored at the start of the clause;
//! - case-insensitive, whole-word;
//! - every segment captures exactly one component, in segment order;
//! - a wildcard takes the *shortest* leading span that lets the rest of the
//!   pattern match, so `0 you 0` against "i think you are nice" captures
//!   `"i think"` and `"are nice"`;
//! - words remaining after the final segment do not fail the match.

use crate::{CompiledPattern, Segment};

impl CompiledPattern {
    /// Match this pattern against `clause`, returning one captured component
    /// per segment on success, `None` otherwise.
    pub fn matches(&self, clause: &str) -> Option<Vec<String>> {
        let words: Vec<&str> = clause.split_whitespace().collect();
        let mut components = Vec::with_capacity(self.segments.len());
        if match_from(&self.segments, &words, 0, &mut components) {
            Some(components)
        } else {
            None
        }
    }
}

/// Recursive descent over the segment list. `components` always holds the
/// captures for the segments consumed so far; failed branches pop their
/// capture before returning.
fn match_from(
    segments: &[Segment],
    words: &[&str],
    position: usize,
    components: &mut Vec<String>,
) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        // All segments consumed; trailing words are permitted.
        return true;
    };

    match segment {
        Segment::Wildcard => {
            // Shortest span first.
            for take in 0..=(words.len() - position) {
                components.push(words[position..position + take].join(" "));
                if match_from(rest, words, position + take, components) {
                    return true;
                }
                components.pop();
            }
            false
        }
        Segment::ExactCount(count) => {
            if position + count <= words.len() {
                components.push(words[position..position + count].join(" "));
                if match_from(rest, words, position + count, components) {
                    return true;
                }
                components.pop();
            }
            false
        }
        Segment::TagAlternation(synonyms) => {
            // An empty synonym set (unknown tag) never matches.
            if let Some(word) = words.get(position) {
                let lowered = word.to_lowercase();
                if synonyms.iter().any(|s| *s == lowered) {
                    components.push(word.to_string());
                    if match_from(rest, words, position + 1, components) {
                        return true;
                    }
                    components.pop();
                }
            }
            false
        }
        Segment::Literal(expected) => {
            if let Some(word) = words.get(position) {
                if word.to_lowercase() == *expected {
                    components.push(word.to_string());
                    if match_from(rest, words, position + 1, components) {
                        return true;
                    }
                    components.pop();
                }
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::TagTable;
    use crate::script::compile_pattern;

    fn pattern(notation: &str) -> crate::CompiledPattern {
        compile_pattern(notation, &TagTable::new())
    }

    #[test]
    fn wildcard_splits_around_literal() {
        let comps = pattern("0 you 0").matches("i think you are nice").unwrap();
        assert_eq!(comps, vec!["i think", "you", "are nice"]);
    }

    #[test]
    fn wildcard_matching_is_case_insensitive() {
        let comps = pattern("0 YOU 0").matches("I think You are nice").unwrap();
        assert_eq!(comps, vec!["I think", "You", "are nice"]);
    }

    #[test]
    fn wildcard_prefers_shortest_leading_span() {
        // Two candidate anchors; the earlier "you" must win.
        let comps = pattern("0 you 0").matches("you said you would").unwrap();
        assert_eq!(comps, vec!["", "you", "said you would"]);
    }

    #[test]
    fn literal_requires_whole_word() {
        assert!(pattern("0 you 0").matches("your words hurt").is_none());
    }

    #[test]
    fn anchored_at_clause_start() {
        assert!(pattern("hello 0").matches("well hello there").is_none());
        let comps = pattern("hello 0").matches("hello there").unwrap();
        assert_eq!(comps, vec!["hello", "there"]);
    }

    #[test]
    fn trailing_words_after_last_segment_are_allowed() {
        let comps = pattern("1 am").matches("i am very tired").unwrap();
        assert_eq!(comps, vec!["i", "am"]);
    }

    #[test]
    fn exact_count_captures_that_many_words() {
        let comps = pattern("2 0").matches("i am very tired").unwrap();
        assert_eq!(comps, vec!["i am", "very tired"]);
        assert!(pattern("5 0").matches("too short").is_none());
    }

    #[test]
    fn tag_matches_only_its_synonyms() {
        let mut tags = TagTable::new();
        tags.insert("family", ["mother", "father"]);

        let p = compile_pattern("@family 0", &tags);
        assert_eq!(p.matches("mother is strict").unwrap(), vec!["mother", "is strict"]);
        assert!(p.matches("uncle is strict").is_none());
    }

    #[test]
    fn unknown_tag_never_matches() {
        let p = pattern("@nosuchtag 0");
        assert!(p.matches("anything at all").is_none());
    }

    #[test]
    fn lone_wildcard_matches_everything_including_empty() {
        assert_eq!(pattern("0").matches("").unwrap(), vec![""]);
        assert_eq!(pattern("0").matches("a b c").unwrap(), vec!["a b c"]);
    }
}

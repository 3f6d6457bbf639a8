//! Pattern and template compilation, plus script-level validation.

use std::collections::HashMap;

use crate::{
    CompiledPattern, DecompRule, GENERIC_KEYWORD, KeywordDef, KeywordEntry, MEMORY_KEYWORD,
    Script, ScriptError, Segment, TagTable, Template, TemplateToken,
};

impl Script {
    /// Compile source definitions into a runnable script.
    ///
    /// Entry order is preserved; the first-occurrence index is built here so
    /// "first entry in source order wins" is explicit rather than a property
    /// of scan order. Configuration errors (missing sentinels, empty
    /// reassembly lists, out-of-range back-references) surface immediately.
    pub fn compile(defs: Vec<KeywordDef>, tags: &TagTable) -> Result<Script, ScriptError> {
        let mut entries = Vec::with_capacity(defs.len());

        for def in defs {
            let keyword = def.keyword.to_lowercase();
            let mut rules = Vec::with_capacity(def.rules.len());

            for (rule_index, rule) in def.rules.into_iter().enumerate() {
                if rule.reassembly.is_empty() {
                    return Err(ScriptError::EmptyReassembly {
                        keyword,
                        rule: rule_index,
                    });
                }

                let pattern = compile_pattern(&rule.decomp, tags);
                let reassembly = rule
                    .reassembly
                    .iter()
                    .map(|text| compile_template(text, pattern.segment_count(), &keyword))
                    .collect::<Result<Vec<_>, _>>()?;

                rules.push(DecompRule { pattern, reassembly, cursor: 0 });
            }

            entries.push(KeywordEntry { keyword, rank: def.rank, rules });
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.keyword.clone()).or_insert(position);
        }

        for sentinel in [GENERIC_KEYWORD, MEMORY_KEYWORD] {
            if !index.contains_key(sentinel) {
                return Err(ScriptError::MissingSentinel(sentinel));
            }
        }

        Ok(Script { entries, index })
    }
}

/// Compile decomposition notation into typed segments.
///
/// Notation is a space-separated token sequence, optionally wrapped in
/// parentheses: `(0 YOU 0)`. Token mapping:
///
/// - `0` -> [`Segment::Wildcard`]
/// - positive integer n -> [`Segment::ExactCount`] (n words)
/// - `@name` -> [`Segment::TagAlternation`] over the tag's synonyms
/// - anything else -> [`Segment::Literal`] (lowercased)
///
/// Invalid notation never errors. An unknown or empty tag name degrades to
/// an empty alternation, which simply never matches.
pub(crate) fn compile_pattern(notation: &str, tags: &TagTable) -> CompiledPattern {
    let body = notation.trim();
    let body = body.strip_prefix('(').unwrap_or(body);
    let body = body.strip_suffix(')').unwrap_or(body);

    let segments = body
        .split_whitespace()
        .map(|token| {
            if token.chars().all(|c| c.is_ascii_digit()) {
                // "00" and friends are not valid counts; treat them the way
                // the notation treats any other word.
                match token.parse::<usize>() {
                    Ok(0) if token == "0" => Segment::Wildcard,
                    Ok(n) if n > 0 => Segment::ExactCount(n),
                    _ => Segment::Literal(token.to_lowercase()),
                }
            } else if let Some(name) = token.strip_prefix('@') {
                let synonyms = tags.get(name).map(<[String]>::to_vec).unwrap_or_default();
                Segment::TagAlternation(synonyms)
            } else {
                Segment::Literal(token.to_lowercase())
            }
        })
        .collect();

    CompiledPattern { segments }
}

/// Compile one reassembly template string.
///
/// An all-digit token is a 1-based back-reference into the captured
/// components; anything else is a literal word. Since every pattern segment
/// captures exactly one component, back-references are validated here
/// against the pattern's segment count.
fn compile_template(
    text: &str,
    segment_count: usize,
    keyword: &str,
) -> Result<Template, ScriptError> {
    let mut tokens = Vec::new();

    for word in text.split_whitespace() {
        if word.chars().all(|c| c.is_ascii_digit()) {
            // Values too large for usize saturate; they are out of range
            // either way.
            let index = word.parse::<usize>().unwrap_or(usize::MAX);
            if index == 0 || index > segment_count {
                return Err(ScriptError::BackrefOutOfRange {
                    keyword: keyword.to_string(),
                    index,
                    components: segment_count,
                });
            }
            tokens.push(TemplateToken::Backref(index));
        } else {
            tokens.push(TemplateToken::Word(word.to_string()));
        }
    }

    Ok(Template { tokens })
}

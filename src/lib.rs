extern crate self as riposte;

use std::collections::HashMap;

#[macro_use]
mod macros;
mod api;
mod engine;
mod script;

pub use api::{Session, generate_response, reset_rotation};
pub use script::doctor::doctor_definitions;
pub use script::general::{
    EXIT_WORDS, default_memory_triggers, default_substitutions, default_tags,
};

/// Generic-fallback sentinel keyword. Its single rule matches unconditionally
/// and is the last resort when nothing else produced a response.
pub const GENERIC_KEYWORD: &str = "$";

/// Memory-generation sentinel keyword. Decomposing a clause under this
/// keyword produces the deferred response pushed onto the [`MemoryStack`].
pub const MEMORY_KEYWORD: &str = "^";

// --- Errors -----------------------------------------------------------------

/// Configuration errors in a script. These are fatal: a script that fails to
/// compile is unusable, and [`Script::compile`] surfaces them immediately.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// A required sentinel keyword (`$` or `^`) is absent.
    #[error("script is missing required sentinel keyword `{0}`")]
    MissingSentinel(&'static str),

    /// A decomposition rule has no reassembly templates at all.
    #[error("keyword `{keyword}` rule {rule} has an empty reassembly list")]
    EmptyReassembly { keyword: String, rule: usize },

    /// A reassembly template references a component its decomposition pattern
    /// can never capture. Back-references are 1-based, so index 0 is also out
    /// of range.
    #[error(
        "keyword `{keyword}` reassembly back-reference {index} is out of range \
         (pattern captures {components} components)"
    )]
    BackrefOutOfRange { keyword: String, index: usize, components: usize },
}

/// Errors that can escape response generation.
///
/// A keyword failing to match is *not* an error; it is ordinary control flow
/// (the engine moves on to the next ranked keyword, then to the memory stack,
/// then to the generic fallback).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RespondError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// Every clause of the input was empty after punctuation stripping, so
    /// there is nothing to rank. Callers should ask for clarification.
    #[error("input has no rankable content")]
    EmptyInput,
}

// --- Pattern model ----------------------------------------------------------

/// One segment of a compiled decomposition pattern.
///
/// Each segment captures exactly one component on a successful match, so a
/// pattern of n segments always yields n components, in segment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Notation `0`: a run of zero or more words, captured as one component.
    /// Takes the shortest span consistent with the rest of the pattern.
    Wildcard,
    /// A positive integer notation token: exactly that many words.
    ExactCount(usize),
    /// Notation `@name`: exactly one word drawn from the tag's synonym set.
    /// An unknown or empty tag name degrades to an empty set, which never
    /// matches.
    TagAlternation(Vec<String>),
    /// Any other notation token: that exact word, whole and case-insensitive.
    Literal(String),
}

/// A compiled decomposition pattern: an ordered sequence of [`Segment`]s.
///
/// Matching is anchored at the start of the clause and case-insensitive;
/// words after the final segment are permitted. The matcher lives in
/// `engine/pattern.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pub(crate) segments: Vec<Segment>,
}

impl CompiledPattern {
    /// Number of components a successful match will capture.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// One token of a reassembly template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    /// A literal word emitted as-is.
    Word(String),
    /// A 1-based back-reference to a captured component.
    Backref(usize),
}

/// A reassembly template: literal words mixed with back-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub(crate) tokens: Vec<TemplateToken>,
}

/// A decomposition rule: one pattern, its reassembly templates and the
/// round-robin rotation cursor.
///
/// The cursor is the only mutable run-time state in the rule engine besides
/// the memory stack. It lives for the session and advances by one (wrapping)
/// each time this rule matches, so k consecutive matches use each of k
/// templates exactly once before repeating.
#[derive(Debug, Clone)]
pub struct DecompRule {
    pub(crate) pattern: CompiledPattern,
    pub(crate) reassembly: Vec<Template>,
    pub(crate) cursor: usize,
}

/// A keyword with its salience rank and ordered decomposition rules.
#[derive(Debug, Clone)]
pub struct KeywordEntry {
    pub(crate) keyword: String,
    pub(crate) rank: u32,
    pub(crate) rules: Vec<DecompRule>,
}

impl KeywordEntry {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }
}

// --- Script source form ------------------------------------------------------

/// Source form of a keyword entry, before pattern compilation.
///
/// This is the shape script loaders hand to [`Script::compile`]; the `entry!`
/// macro in `src/macros.rs` builds these declaratively.
#[derive(Debug, Clone)]
pub struct KeywordDef {
    pub keyword: String,
    pub rank: u32,
    pub rules: Vec<RuleDef>,
}

/// Source form of a decomposition rule: pattern notation (e.g. `"0 you 0"`)
/// plus reassembly template strings (e.g. `"why do you 3 ?"`).
#[derive(Debug, Clone)]
pub struct RuleDef {
    pub decomp: String,
    pub reassembly: Vec<String>,
}

// --- Script ------------------------------------------------------------------

/// A compiled script: ordered keyword entries plus a first-occurrence index.
///
/// Entry order is significant and preserved from source order. Keywords need
/// not be unique; lookup always resolves to the *first* entry with that
/// keyword, and the index makes that explicit instead of relying on scan
/// order.
///
/// `Script` is `Clone` so that each conversational session can own an
/// independent copy of the rotation cursors. Never share one `Script` across
/// sessions.
#[derive(Debug, Clone)]
pub struct Script {
    pub(crate) entries: Vec<KeywordEntry>,
    pub(crate) index: HashMap<String, usize>,
}

impl Script {
    /// Rank of a word, via first-occurrence lookup. Words without an entry
    /// rank 0.
    pub fn rank_of(&self, word: &str) -> u32 {
        self.index.get(word).map(|&i| self.entries[i].rank).unwrap_or(0)
    }

    /// First entry for `keyword`, if any. Exact match against the stored
    /// (lowercase) keyword. Mutable because a matching rule advances its
    /// rotation cursor in place.
    pub(crate) fn entry_mut(&mut self, keyword: &str) -> Option<&mut KeywordEntry> {
        let idx = *self.index.get(keyword)?;
        Some(&mut self.entries[idx])
    }

    /// Zero every rule's rotation cursor.
    pub fn reset_rotation(&mut self) {
        for entry in &mut self.entries {
            for rule in &mut entry.rules {
                rule.cursor = 0;
            }
        }
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }
}

// --- Tables ------------------------------------------------------------------

/// Tag name (lowercased) to synonym set. Consumed only during pattern
/// compilation; never mutated afterward and safe to share across sessions.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    tags: HashMap<String, Vec<String>>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tag. Name and synonyms are lowercased on insertion.
    pub fn insert<I, S>(&mut self, name: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.insert(
            name.to_lowercase(),
            synonyms.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        );
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.tags.get(&name.to_lowercase()).map(Vec::as_slice)
    }
}

/// Input word to replacement mapping, applied once per token (no transitive
/// substitution). Replacements may be multi-word (e.g. `"im"` -> `"you are"`).
/// Read-only after load and safe to share across sessions.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    words: HashMap<String, String>,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str, replacement: &str) {
        self.words.insert(word.to_lowercase(), replacement.to_string());
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }
}

// --- Memory stack -------------------------------------------------------------

/// LIFO store of deferred responses, scoped to one session.
///
/// Pushed as a side effect of matching a memory-trigger keyword; popped only
/// when every ranked keyword yields no match. Unbounded within a session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStack {
    responses: Vec<String>,
}

impl MemoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, response: String) {
        self.responses.push(response);
    }

    /// Most recently pushed response first.
    pub fn pop(&mut self) -> Option<String> {
        self.responses.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }
}

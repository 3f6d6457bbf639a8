//! Script compilation and the built-in script.
//!
//! A script arrives as source definitions ([`KeywordDef`]/[`RuleDef`], with
//! decomposition patterns in the classic parenthesized notation) and is
//! compiled once at startup into the [`Script`] the engine runs against:
//!
//! ```text
//! KeywordDef { "you", rank 2, [ ("0 you are 0", [...]) ] }
//!        │
//!        │  Script::compile            (compile.rs)
//!        │    - notation -> typed segments
//!        │    - template strings -> Word/Backref tokens
//!        │    - validation: sentinels, reassembly, back-reference range
//!        v
//! Script { entries, first-occurrence index }
//! ```
//!
//! Compilation is the only place the [`TagTable`] is consulted; tags are
//! inlined into `TagAlternation` segments and the table is not retained.
//!
//! The built-in "doctor" script and its language configuration live in
//! `doctor.rs` and `general.rs`: a complete, compiled-in default so the
//! crate works out of the box. Loaders for on-disk script formats are
//! external; they only need to produce the same source definitions.
//!
//! [`KeywordDef`]: crate::KeywordDef
//! [`RuleDef`]: crate::RuleDef
//! [`Script`]: crate::Script
//! [`TagTable`]: crate::TagTable

#[path = "script/compile.rs"]
mod compile;
#[path = "script/doctor.rs"]
pub(crate) mod doctor;
#[path = "script/general.rs"]
pub(crate) mod general;

pub(crate) use compile::compile_pattern;

//! Response generation engine.
//!
//! This module is the operational core of the responder. It used to be easy
//! to treat "decompose and reassemble" as one blob; it is instead split into
//! focused submodules under `src/engine/` while keeping crate-internal paths
//! stable (for example `crate::engine::generate_response`).
//!
//! ## How the parts work together
//!
//! Producing a response for one input is a pipeline:
//!
//! ```text
//! input ── split_clauses ──────── (respond.rs)
//!             │
//!             v
//!        rank clauses ─────────── (rank.rs, substitute.rs)
//!          - strip punctuation
//!          - substitute + lowercase
//!          - score by keyword rank
//!             │
//!             v
//!        decompose/reassemble ─── (respond.rs, pattern.rs)
//!          - first matching rule per keyword
//!          - round-robin template rotation
//!          - memory push on trigger keywords
//!             │
//!             v
//!        fallbacks ────────────── (respond.rs)
//!          - pop memory stack, else generic `$`
//!             │
//!             v
//!        clean(text) ──────────── (format.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `pattern.rs`: the segment scanner that matches a [`CompiledPattern`]
//!   against a clause and captures components.
//! - `substitute.rs`: word-level substitution and canonical lowercasing.
//! - `rank.rs`: clause cleaning, keyword scoring and clause selection.
//! - `respond.rs`: decomposition, reassembly, the memory-stack protocol and
//!   the full `generate_response` pipeline.
//! - `format.rs`: final whitespace/punctuation cleanup.
//!
//! Determinism is a hard requirement throughout: same input, same script
//! state, same output. The only state mutated by a run is the per-rule
//! rotation cursor and the memory stack.
//!
//! ## Debugging
//!
//! Set `RIPOSTE_DEBUG_RULES=1` to print clause selection, rule matches,
//! cursor advances and memory traffic.
//!
//! [`CompiledPattern`]: crate::CompiledPattern

#[path = "engine/format.rs"]
mod format;
#[path = "engine/pattern.rs"]
mod pattern;
#[path = "engine/rank.rs"]
mod rank;
#[path = "engine/respond.rs"]
mod respond;
#[path = "engine/substitute.rs"]
mod substitute;

pub(crate) use format::clean;
pub(crate) use rank::rank;
#[allow(unused_imports)]
pub(crate) use respond::{decompose, generate_response, reassemble, split_clauses};
pub(crate) use substitute::substitute;

/// True when rule tracing is enabled via `RIPOSTE_DEBUG_RULES`.
pub(crate) fn debug_rules() -> bool {
    std::env::var_os("RIPOSTE_DEBUG_RULES").is_some()
}

//! Built-in "doctor" script: the classic Rogerian-therapist keyword set.
//!
//! Patterns are written against *reflected* text (see `general.rs`): a user
//! saying "i am sad" reaches the engine as "you are sad", so the first-person
//! keywords here are "you", "your" and friends. Back-references in the
//! reassembly templates are 1-based component indexes.
//!
//! Higher rank means more salient. `$` (generic fallback) and `^` (memory
//! generation) are the sentinels every script must carry.

use crate::KeywordDef;

/// Source definitions for the doctor script, ready for `Script::compile`
/// with [`default_tags`](crate::default_tags).
pub fn doctor_definitions() -> Vec<KeywordDef> {
    vec![
        entry! {
            keyword: "computer",
            rank: 50,
            rules: [{
                decomp: "0",
                reassembly: [
                    "do computers worry you ?",
                    "what do you think machines have to do with your problem ?",
                    "why do you mention computers ?",
                ],
            }],
        },
        entry! {
            keyword: "remember",
            rank: 5,
            rules: [
                {
                    decomp: "0 you remember 0",
                    reassembly: [
                        "do you often think of 4 ?",
                        "does thinking of 4 bring anything else to mind ?",
                        "what else do you remember ?",
                    ],
                },
                {
                    decomp: "0",
                    reassembly: ["why do you bring up memories just now ?"],
                },
            ],
        },
        entry! {
            keyword: "your",
            rank: 4,
            rules: [
                {
                    decomp: "0 your @family 0",
                    reassembly: [
                        "tell me more about your family .",
                        "how do you get along with your 3 ?",
                        "who else in your family 4 ?",
                    ],
                },
                {
                    decomp: "0 your 0",
                    reassembly: [
                        "why are you concerned about your 3 ?",
                        "tell me more about your 3 .",
                    ],
                },
            ],
        },
        entry! {
            keyword: "you",
            rank: 2,
            rules: [
                {
                    decomp: "0 you are @sad 0",
                    reassembly: [
                        "i am sorry to hear you are 4 .",
                        "do you think coming here will help you not to be 4 ?",
                        "what made you 4 ?",
                    ],
                },
                {
                    decomp: "0 you are @happy 0",
                    reassembly: [
                        "how have i helped you to be 4 ?",
                        "what makes you 4 just now ?",
                    ],
                },
                {
                    decomp: "0 you are 0",
                    reassembly: [
                        "what makes you think you are 4 ?",
                        "how long have you been 4 ?",
                        "do you enjoy being 4 ?",
                    ],
                },
                {
                    decomp: "0 you 0",
                    reassembly: [
                        "you say you 3 ?",
                        "why do you 3 ?",
                        "does it surprise you that you 3 ?",
                    ],
                },
            ],
        },
        entry! {
            keyword: "i",
            rank: 2,
            rules: [{
                decomp: "0 i 0",
                reassembly: [
                    "we were discussing you, not me .",
                    "why do you say that about me ?",
                    "what makes you think i 3 ?",
                ],
            }],
        },
        entry! {
            keyword: "hello",
            rank: 1,
            rules: [{
                decomp: "0 hello 0",
                reassembly: ["how do you do . please state your problem ."],
            }],
        },
        entry! {
            keyword: "sorry",
            rank: 1,
            rules: [{
                decomp: "0",
                reassembly: [
                    "please do not apologize .",
                    "apologies are not necessary .",
                    "what feelings do you have when you apologize ?",
                ],
            }],
        },
        entry! {
            keyword: "because",
            rank: 1,
            rules: [{
                decomp: "0",
                reassembly: [
                    "is that the real reason ?",
                    "what other reasons come to mind ?",
                    "does that reason seem to explain anything else ?",
                ],
            }],
        },
        entry! {
            keyword: "always",
            rank: 1,
            rules: [{
                decomp: "0",
                reassembly: [
                    "can you think of a specific example ?",
                    "when ?",
                    "really, always ?",
                ],
            }],
        },
        entry! {
            keyword: "yes",
            rank: 0,
            rules: [{
                decomp: "0",
                reassembly: ["you seem quite positive .", "i see .", "i understand ."],
            }],
        },
        entry! {
            keyword: "no",
            rank: 0,
            rules: [{
                decomp: "0",
                reassembly: [
                    "are you saying no just to be negative ?",
                    "why not ?",
                ],
            }],
        },
        entry! {
            keyword: "$",
            rank: 0,
            rules: [{
                decomp: "0",
                reassembly: [
                    "please go on .",
                    "what does that suggest to you ?",
                    "i see .",
                    "very interesting .",
                    "can you elaborate on that ?",
                ],
            }],
        },
        entry! {
            keyword: "^",
            rank: 0,
            rules: [{
                decomp: "0 your 0",
                reassembly: [
                    "earlier you said your 3 .",
                    "let us talk further about your 3 .",
                    "does that have anything to do with your 3 ?",
                ],
            }],
        },
    ]
}

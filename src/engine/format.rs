//! Final response cleanup.
//!
//! Reassembly joins tokens with single spaces, which leaves gaps before
//! punctuation ("go on .") and empty captures can leave doubled spaces.
//! This pass is purely textual and idempotent: `clean(clean(x)) == clean(x)`.

/// Collapse whitespace runs to single spaces and drop the space before a
/// terminal `?` `.` `!` or closing quote that is followed by whitespace or
/// the end of the string.
///
/// After whitespace collapsing, such a mark is exactly a standalone token, so
/// the rule becomes: glue standalone punctuation tokens onto the preceding
/// word. That formulation handles chains like `"? . !"` in a single pass,
/// which keeps the whole cleanup idempotent.
pub(crate) fn clean(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for word in input.split_whitespace() {
        let terminal_mark = matches!(word, "?" | "." | "!" | "\"");
        if !out.is_empty() && !terminal_mark {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(clean("what  does that\tsuggest   to you ?"), "what does that suggest to you?");
    }

    #[test]
    fn removes_space_before_terminal_punctuation() {
        assert_eq!(clean("please go on ."), "please go on.");
        assert_eq!(clean("really !"), "really!");
        assert_eq!(clean("you said \"maybe \" earlier"), "you said \"maybe\" earlier");
    }

    #[test]
    fn keeps_punctuation_attached_to_words() {
        assert_eq!(clean("a.b stays a.b"), "a.b stays a.b");
        assert_eq!(clean("really ?!"), "really ?!");
    }

    #[test]
    fn idempotent() {
        let cases = [
            "please go on .",
            "  doubled   spaces . everywhere ! ",
            "already clean.",
            "",
            "? . !",
            ". . .",
        ];
        for case in cases {
            let once = clean(case);
            assert_eq!(clean(&once), once, "clean not idempotent for {case:?}");
        }
    }
}

//! Decomposition, reassembly and the response pipeline.
//!
//! This module owns the rule engine proper: finding the first decomposition
//! rule that matches a clause, rotating through its reassembly templates,
//! and the memory-stack protocol that defers responses for later.
//!
//! A failed decomposition is ordinary control flow (`None`), never an error;
//! the pipeline walks the ranked keyword list until something matches, then
//! falls back to the memory stack and finally to the generic `$` entry.

use std::collections::HashSet;

use crate::engine::{clean, debug_rules, rank};
use crate::{
    GENERIC_KEYWORD, MEMORY_KEYWORD, MemoryStack, RespondError, Script, ScriptError,
    SubstitutionTable, Template, TemplateToken,
};

/// Split raw input into punctuation-delimited clauses.
///
/// Delimiters are `.` `,` `!` `?`, except one that ends the input (a final
/// "i am sad." should not produce an empty trailing clause; the dangling
/// mark is removed by punctuation stripping during ranking instead).
pub(crate) fn split_clauses(input: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let last_index = input.len().saturating_sub(1);

    for (index, ch) in input.char_indices() {
        if matches!(ch, '.' | ',' | '!' | '?') && index < last_index {
            clauses.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    clauses.push(current);

    clauses
}

/// Match `clause` against the first script entry for `keyword`.
///
/// Rules are tried in entry order; the first whose pattern matches wins and
/// there is no backtracking across rules. On a match the rule's rotation
/// cursor selects the template and then advances by one, wrapping, so
/// repeated hits on the same rule cycle through all its templates before any
/// repeats.
///
/// Returns `None` when the keyword has no entry or no rule matches.
pub(crate) fn decompose(
    script: &mut Script,
    keyword: &str,
    clause: &str,
) -> Option<(Vec<String>, Template)> {
    let entry = script.entry_mut(keyword)?;

    for (index, rule) in entry.rules.iter_mut().enumerate() {
        if let Some(components) = rule.pattern.matches(clause) {
            let template = rule.reassembly[rule.cursor].clone();
            rule.cursor = (rule.cursor + 1) % rule.reassembly.len();
            if debug_rules() {
                eprintln!(
                    "[decompose] keyword=\"{keyword}\" rule={index} next_cursor={} components={components:?}",
                    rule.cursor
                );
            }
            return Some((components, template));
        }
    }

    None
}

/// Render a template against its captured components.
///
/// Back-references are 1-based. An out-of-range reference is a configuration
/// error; `Script::compile` already rejects it, so hitting this at run time
/// means the script was built outside the compile path. `keyword` only feeds
/// that error's message.
pub(crate) fn reassemble(
    keyword: &str,
    components: &[String],
    template: &Template,
) -> Result<String, ScriptError> {
    let mut words = Vec::with_capacity(template.tokens.len());

    for token in &template.tokens {
        match token {
            TemplateToken::Word(word) => words.push(word.as_str()),
            TemplateToken::Backref(index) => {
                let component = index
                    .checked_sub(1)
                    .and_then(|i| components.get(i))
                    .ok_or_else(|| ScriptError::BackrefOutOfRange {
                        keyword: keyword.to_string(),
                        index: *index,
                        components: components.len(),
                    })?;
                words.push(component.as_str());
            }
        }
    }

    Ok(words.join(" "))
}

/// Generate one response for `input`.
///
/// This is the sole pipeline entry point; its only side effects are rotation
/// cursor advances inside `script` and pushes/pops on `memory`.
pub(crate) fn generate_response(
    input: &str,
    script: &mut Script,
    substitutions: &SubstitutionTable,
    memory: &mut MemoryStack,
    memory_triggers: &HashSet<String>,
) -> Result<String, RespondError> {
    let clauses = split_clauses(input);
    let (clause, keywords) = rank(&clauses, script, substitutions)?;

    let mut response = None;
    for keyword in &keywords {
        if let Some((components, template)) = decompose(script, keyword, &clause) {
            let text = reassemble(keyword, &components, &template)?;
            if memory_triggers.contains(keyword) {
                push_memory(script, &clause, memory)?;
            }
            response = Some(text);
            break;
        }
    }

    let response = match response {
        Some(text) => text,
        None => match memory.pop() {
            Some(remembered) => {
                if debug_rules() {
                    eprintln!("[memory] pop remaining={}", memory.len());
                }
                remembered
            }
            None => generic_response(script)?,
        },
    };

    Ok(clean(&response))
}

/// Decompose `clause` under the `^` sentinel and push the reassembled text.
///
/// Runs only as a side effect of a successful primary match on a memory
/// trigger. A `^` rule that does not match this particular clause pushes
/// nothing.
fn push_memory(
    script: &mut Script,
    clause: &str,
    memory: &mut MemoryStack,
) -> Result<(), RespondError> {
    if let Some((components, template)) = decompose(script, MEMORY_KEYWORD, clause) {
        memory.push(reassemble(MEMORY_KEYWORD, &components, &template)?);
        if debug_rules() {
            eprintln!("[memory] push depth={}", memory.len());
        }
    }
    Ok(())
}

/// The universal recovery response: decompose `$` against itself.
///
/// A well-formed script gives `$` an unconditional pattern, so this always
/// matches; a script where it cannot is misconfigured.
fn generic_response(script: &mut Script) -> Result<String, RespondError> {
    match decompose(script, GENERIC_KEYWORD, GENERIC_KEYWORD) {
        Some((components, template)) => {
            Ok(reassemble(GENERIC_KEYWORD, &components, &template)?)
        }
        None => Err(ScriptError::MissingSentinel(GENERIC_KEYWORD).into()),
    }
}

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::script::{doctor, general};
use crate::{MemoryStack, RespondError, Script, SubstitutionTable, engine};

static DOCTOR_SCRIPT: Lazy<Script> = Lazy::new(|| {
    Script::compile(doctor::doctor_definitions(), &general::default_tags())
        .expect("built-in doctor script is valid")
});

/// Generate one response for `input`.
///
/// This is the sole engine entry point. Side effects are confined to rule
/// rotation cursors inside `script` and pushes/pops on `memory`; everything
/// else is read-only, so `substitutions` and `memory_triggers` may be shared
/// between sessions while each session owns its `Script` and `MemoryStack`.
///
/// # Errors
///
/// [`RespondError::EmptyInput`] when the input has no rankable content (the
/// caller should ask for clarification), or a [`ScriptError`] for a script
/// misconfiguration that compilation could not see.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use riposte::{MemoryStack, Script, generate_response};
///
/// let mut script = Script::compile(
///     riposte::doctor_definitions(),
///     &riposte::default_tags(),
/// )
/// .unwrap();
/// let substitutions = riposte::default_substitutions();
/// let mut memory = MemoryStack::new();
/// let triggers: HashSet<String> = riposte::default_memory_triggers();
///
/// let reply = generate_response("i am sad", &mut script, &substitutions, &mut memory, &triggers)
///     .unwrap();
/// assert!(!reply.is_empty());
/// ```
///
/// [`ScriptError`]: crate::ScriptError
pub fn generate_response(
    input: &str,
    script: &mut Script,
    substitutions: &SubstitutionTable,
    memory: &mut MemoryStack,
    memory_triggers: &HashSet<String>,
) -> Result<String, RespondError> {
    engine::generate_response(input, script, substitutions, memory, memory_triggers)
}

/// Zero every decomposition rule's rotation cursor in `script`.
///
/// Supports an explicit user-issued reset; it does not touch the memory
/// stack.
pub fn reset_rotation(script: &mut Script) {
    script.reset_rotation();
}

/// One conversational session: a private copy of the script's rotation
/// cursors, a private memory stack, and the shared read-only tables.
///
/// Sessions are independent by construction; hosting several concurrent
/// conversations means one `Session` each, never a shared one.
#[derive(Debug, Clone)]
pub struct Session {
    script: Script,
    substitutions: SubstitutionTable,
    memory_triggers: HashSet<String>,
    memory: MemoryStack,
}

impl Session {
    /// Build a session around an already-compiled script.
    pub fn new(
        script: Script,
        substitutions: SubstitutionTable,
        memory_triggers: HashSet<String>,
    ) -> Self {
        Session { script, substitutions, memory_triggers, memory: MemoryStack::new() }
    }

    /// A session over the built-in doctor script and default language
    /// configuration.
    pub fn doctor() -> Self {
        Session::new(
            DOCTOR_SCRIPT.clone(),
            general::default_substitutions(),
            general::default_memory_triggers(),
        )
    }

    /// Respond to one input. One input produces exactly one output.
    pub fn respond(&mut self, input: &str) -> Result<String, RespondError> {
        engine::generate_response(
            input,
            &mut self.script,
            &self.substitutions,
            &mut self.memory,
            &self.memory_triggers,
        )
    }

    /// Reset template rotation to the start of every reassembly list.
    pub fn reset(&mut self) {
        self.script.reset_rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_session_answers_first_person_statements() {
        let mut session = Session::doctor();
        // "i am sad" reflects to "you are sad" and hits the @sad tag rule.
        let reply = session.respond("I am sad").unwrap();
        assert_eq!(reply, "i am sorry to hear you are sad.");
    }

    #[test]
    fn doctor_session_understands_apostrophe_contractions() {
        // "i'm" must reflect exactly like "im"; fresh sessions so rotation
        // cursors line up.
        let contracted = Session::doctor().respond("I'm sad").unwrap();
        let collapsed = Session::doctor().respond("im sad").unwrap();
        assert_eq!(contracted, "i am sorry to hear you are sad.");
        assert_eq!(contracted, collapsed);
    }

    #[test]
    fn doctor_session_rotates_templates() {
        let mut session = Session::doctor();
        let first = session.respond("I am sad").unwrap();
        let second = session.respond("I am sad").unwrap();
        assert_ne!(first, second);

        session.reset();
        assert_eq!(session.respond("I am sad").unwrap(), first);
    }

    #[test]
    fn doctor_session_prefers_salient_clause() {
        let mut session = Session::doctor();
        // "computer" outranks everything else in the second clause.
        let reply = session.respond("I am fine, this computer bothers me").unwrap();
        assert_eq!(reply, "do computers worry you?");
    }

    #[test]
    fn doctor_session_remembers_possessive_statements() {
        let mut session = Session::doctor();
        let direct = session.respond("my dog ran away").unwrap();
        assert!(direct.contains("your dog ran away"), "unexpected reply: {direct}");

        // Nothing in the next input matches any keyword, so the deferred
        // memory response surfaces.
        let deferred = session.respond("hmm").unwrap();
        assert!(deferred.contains("your dog ran away"), "unexpected reply: {deferred}");
    }

    #[test]
    fn empty_input_asks_for_clarification_via_error() {
        let mut session = Session::doctor();
        assert_eq!(session.respond("..."), Err(RespondError::EmptyInput));
    }

    #[test]
    fn sessions_do_not_share_rotation_state() {
        let mut a = Session::doctor();
        let mut b = Session::doctor();
        let first = a.respond("I am sad").unwrap();
        a.respond("I am sad").unwrap();
        // `b` still starts at cursor 0 even though `a` has advanced.
        assert_eq!(b.respond("I am sad").unwrap(), first);
    }

    #[test]
    fn free_function_matches_session_behavior() {
        let mut script = DOCTOR_SCRIPT.clone();
        let substitutions = general::default_substitutions();
        let mut memory = MemoryStack::new();
        let triggers = general::default_memory_triggers();

        let reply = generate_response(
            "I am sad", &mut script, &substitutions, &mut memory, &triggers,
        )
        .unwrap();
        assert_eq!(reply, "i am sorry to hear you are sad.");
    }
}

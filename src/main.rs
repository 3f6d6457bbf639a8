use riposte::{EXIT_WORDS, RespondError, Session};
use std::io::{self, BufRead, Write};

const PERSONA: &str = "Eliza";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut session = Session::doctor();

    if let Some(input) = config.input {
        // Single-shot mode: one response, no conversation loop.
        match session.respond(&input) {
            Ok(reply) => println!("{reply}"),
            Err(RespondError::EmptyInput) => {
                eprintln!("error: input has no words to respond to");
                std::process::exit(2);
            }
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(err) = run_repl(&mut session) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    say("Welcome.");
    loop {
        prompt()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        let lowered = input.to_lowercase();

        if EXIT_WORDS.contains(&lowered.as_str()) {
            break;
        }
        if lowered == "reset" {
            session.reset();
            say("Reset complete.");
            continue;
        }
        if !input.chars().any(char::is_alphabetic) {
            say("Please, use letters. I am human, after all.");
            continue;
        }

        match session.respond(input) {
            Ok(reply) => say(&reply),
            Err(RespondError::EmptyInput) => say("Please say that again, with words."),
            Err(err) => return Err(io::Error::other(err.to_string())),
        }
    }
    say("Goodbye.");

    Ok(())
}

fn say(text: &str) {
    println!("{PERSONA}: {text}");
}

fn prompt() -> io::Result<()> {
    print!("You: ");
    io::stdout().flush()
}

#[derive(Debug)]
struct CliConfig {
    input: Option<String>,
}

fn parse_args() -> Result<CliConfig, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("riposte {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                // strip_prefix removes the prefix exactly once, so a value
                // that itself starts with "--input=" survives intact.
                let value = arg.strip_prefix("--input=").unwrap_or_default();
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    Ok(CliConfig { input })
}

fn help_text() -> String {
    format!(
        "riposte {version}

ELIZA-style rule-driven conversational responder.

Usage:
  riposte                    Start an interactive conversation.
  riposte [--] <input...>    Respond once to <input> and exit.
  riposte --input <text>     Same, via an explicit flag.

In the interactive conversation:
  reset                      Restart template rotation from the beginning.
  {exits}   End the conversation.

Options:
  -i, --input <text>         Input text to respond to once.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or unusable input.
",
        version = env!("CARGO_PKG_VERSION"),
        exits = EXIT_WORDS.join(", "),
    )
}

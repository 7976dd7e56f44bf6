//! Interactive session command.

use super::generate::print_names;
use instaname::{
    GenerativeBackend, MAX_DESCRIPTION_CHARS, NameOrchestrator, NameSession, SessionAction,
    SessionUpdate,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Type a description to generate names.
  :regen   more names for the last description
  :list    show every name so far
  :help    show this help
  :quit    leave the session";

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Fresh description
    Submit(String),
    /// `:regen`
    Regenerate,
    /// `:list`
    List,
    /// `:help`
    Help,
    /// `:quit` or `:q`
    Quit,
    /// Unrecognized `:` command
    Unknown(String),
    /// Blank line
    Empty,
}

impl SessionCommand {
    /// Parses a line of input. Anything not starting with `:` is a description.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        match input {
            "" => SessionCommand::Empty,
            ":regen" | ":r" => SessionCommand::Regenerate,
            ":list" | ":l" => SessionCommand::List,
            ":help" | ":h" => SessionCommand::Help,
            ":quit" | ":q" => SessionCommand::Quit,
            other if other.starts_with(':') => SessionCommand::Unknown(other.to_string()),
            other => SessionCommand::Submit(other.to_string()),
        }
    }
}

/// Runs the interactive session until `:quit` or end of input.
#[tracing::instrument(skip_all)]
pub async fn run_session<B: GenerativeBackend>(
    orchestrator: &NameOrchestrator<B>,
) -> anyhow::Result<()> {
    let mut session = NameSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let action = match SessionCommand::parse(&line) {
            SessionCommand::Empty => continue,
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            SessionCommand::List => {
                if session.names().is_empty() {
                    println!("No names yet.");
                } else {
                    print_names(session.names());
                }
                continue;
            }
            SessionCommand::Unknown(command) => {
                println!("Unknown command {}. Type :help for commands.", command);
                continue;
            }
            SessionCommand::Regenerate => SessionAction::Regenerate,
            SessionCommand::Submit(description) => {
                println!(
                    "[{}/{}] Generating...",
                    description.chars().count(),
                    MAX_DESCRIPTION_CHARS
                );
                SessionAction::Submit(description)
            }
        };

        match session.run(orchestrator, action).await {
            Some(SessionUpdate::Populated { added, total }) => {
                println!("{} new, {} total", added, total);
                print_names(session.names());
            }
            Some(SessionUpdate::Failed(e)) => eprintln!("{}", e.user_message()),
            Some(SessionUpdate::Ignored) => {}
            None => println!("Nothing to regenerate yet. Enter a description first."),
        }
    }

    Ok(())
}

//! Generate command handler.

use instaname::{
    GenerationForm, GenerationResponse, GenerativeBackend, NameCandidate, NameOrchestrator,
};
use std::process::ExitCode;

/// Handles the `generate` command.
///
/// Prints the names, or the user-facing error message on stderr. With `json`
/// the response record is printed instead, for both outcomes.
#[tracing::instrument(skip_all, fields(excluded = exclude.len(), json = json))]
pub async fn handle_generate_command<B: GenerativeBackend>(
    orchestrator: &NameOrchestrator<B>,
    description: String,
    exclude: Vec<String>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let form = GenerationForm::for_description(description).with_existing_names(&exclude);
    let result = orchestrator.generate(&form).await;
    let response = GenerationResponse::from(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        match &response {
            GenerationResponse::Names { names } => print_names(names),
            GenerationResponse::Error { error } => eprintln!("{}", error),
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints candidates as a numbered list.
pub(crate) fn print_names(names: &[NameCandidate]) {
    for (i, candidate) in names.iter().enumerate() {
        println!("{:>3}. {}: {}", i + 1, candidate.name(), candidate.description());
    }
}

//! Name generation orchestration for instaname.
//!
//! The pipeline runs validator → prompt → schema-constrained client, wrapped
//! by [`NameOrchestrator`]. [`NameSession`] sits above the orchestrator and
//! accumulates names across regenerations without ever showing a duplicate.

mod client;
mod orchestrator;
mod prompt;
mod session;
mod validator;

pub use client::{NameGeneratorClient, names_schema};
pub use orchestrator::NameOrchestrator;
pub use prompt::{
    MAX_CANDIDATES, MIN_CANDIDATES, PROMPT_TEMPLATE, PROMPT_TEMPLATE_VERSION, build_prompt,
    exclusion_clause, render_prompt,
};
pub use session::{
    NameSession, PendingGeneration, SessionAction, SessionPhase, SessionUpdate, merge_batch,
};
pub use validator::{parse_existing_names, validate_form};

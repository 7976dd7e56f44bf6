//! Instaname: brand name generation backed by a schema-constrained LLM.
//!
//! This crate re-exports the workspace crates and adds the pieces a caller
//! needs to run them: layered configuration and tracing setup.
//!
//! # Example
//!
//! ```no_run
//! use instaname::{GenerationForm, InstanameConfig, NameOrchestrator};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InstanameConfig::load(None)?;
//! let orchestrator = NameOrchestrator::new(config.gemini_client()?);
//!
//! let form = GenerationForm::for_description("A modern clothing brand for teenagers.");
//! let batch = orchestrator.generate(&form).await?;
//! for candidate in &batch {
//!     println!("{}: {}", candidate.name(), candidate.description());
//! }
//! # Ok(())
//! # }
//! ```

mod observability;
mod settings;

pub use observability::{LogFormat, init_tracing};
pub use settings::{CONFIG_FILE_NAME, ENV_PREFIX, InstanameConfig};

pub use instaname_core::*;
pub use instaname_error::*;
pub use instaname_generation::*;
pub use instaname_interface::*;
pub use instaname_models::*;

//! Incremental merge controller for one UI session.
//!
//! A session moves between four phases:
//!
//! ```text
//! Idle ──submit──▶ Pending ──ok──▶ Populated ──regenerate──▶ PendingRegeneration
//!  ▲                  │                ▲                           │
//!  └──err, no names───┘                └─────────ok / err──────────┘
//!
//! Populated ──submit──▶ Pending ──ok──▶ Populated (replaced)
//!                          └────err───▶ Populated (unchanged)
//! ```
//!
//! A failed generation of either kind puts the session back where it was
//! before the action: names shown so far are only replaced by a successful
//! fresh submission.
//!
//! While a generation is pending every new action is ignored, which keeps at
//! most one request in flight per session.

use crate::NameOrchestrator;
use instaname_core::{GenerationForm, GenerationResult, NameBatch, NameCandidate};
use instaname_error::GenerationError;
use instaname_interface::GenerativeBackend;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SessionPhase {
    /// No names yet
    Idle,
    /// Fresh submission in flight; prior names stay until it succeeds
    Pending,
    /// Regeneration in flight; accumulated names stay visible
    PendingRegeneration,
    /// Names are displayed
    Populated,
}

impl SessionPhase {
    /// True while a generation is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionPhase::Pending | SessionPhase::PendingRegeneration)
    }
}

/// User actions that start a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Fresh submission; replaces everything shown so far once it succeeds
    Submit(String),
    /// Ask for more names for the last description
    Regenerate,
}

/// A generation the caller should dispatch, produced by [`NameSession::begin`].
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PendingGeneration {
    /// Form to hand to the orchestrator
    form: GenerationForm,
    /// Names sent as the exclusion list, oldest first
    excluded_names: Vec<String>,
    /// Whether this extends the current names
    regeneration: bool,
}

/// What [`NameSession::complete`] did with a result.
#[derive(Debug, Clone)]
pub enum SessionUpdate {
    /// Names were shown; `added` counts the new ones
    Populated {
        /// Candidates appended by this result
        added: usize,
        /// Candidates now displayed
        total: usize,
    },
    /// The generation failed; the session is back in its pre-call state
    Failed(GenerationError),
    /// No generation was pending, so the result was dropped
    Ignored,
}

/// Appends candidates whose name is not yet present, in arrival order.
///
/// Matching is exact and case-sensitive. Duplicates inside `batch` are
/// dropped too. Returns the number of candidates appended.
///
/// # Examples
///
/// ```
/// use instaname_core::{NameBatch, NameCandidate};
/// use instaname_generation::merge_batch;
///
/// let mut shown = vec![
///     NameCandidate::new("Stylo", "Wear your style."),
///     NameCandidate::new("Verve Wear", "Threads with attitude."),
/// ];
/// let batch = NameBatch::new(vec![
///     NameCandidate::new("Stylo", "Style, again."),
///     NameCandidate::new("Next Threads", "The future of fashion."),
/// ]).unwrap();
///
/// assert_eq!(merge_batch(&mut shown, batch), 1);
/// let names: Vec<_> = shown.iter().map(|c| c.name().as_str()).collect();
/// assert_eq!(names, vec!["Stylo", "Verve Wear", "Next Threads"]);
/// ```
pub fn merge_batch(accumulated: &mut Vec<NameCandidate>, batch: NameBatch) -> usize {
    let mut seen: HashSet<String> = accumulated.iter().map(|c| c.name().clone()).collect();
    let before = accumulated.len();

    for candidate in batch {
        if seen.insert(candidate.name().clone()) {
            accumulated.push(candidate);
        } else {
            debug!(name = %candidate.name(), "Dropping duplicate name");
        }
    }

    accumulated.len() - before
}

/// Accumulated state for one UI session.
///
/// Owned by a single caller. Use [`begin`](Self::begin) and
/// [`complete`](Self::complete) when dispatching yourself, or
/// [`run`](Self::run) to do both around an orchestrator call.
#[derive(Debug, Clone)]
pub struct NameSession {
    phase: SessionPhase,
    names: Vec<NameCandidate>,
    last_description: String,
    submitted_description: Option<String>,
    last_error: Option<GenerationError>,
}

impl Default for NameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSession {
    /// Creates an idle session with no names.
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            names: Vec::new(),
            last_description: String::new(),
            submitted_description: None,
            last_error: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Names in display order.
    pub fn names(&self) -> &[NameCandidate] {
        &self.names
    }

    /// Description behind the names currently shown.
    pub fn last_description(&self) -> &str {
        &self.last_description
    }

    /// Description of a fresh submission still in flight.
    pub fn submitted_description(&self) -> Option<&str> {
        self.submitted_description.as_deref()
    }

    /// Error from the most recent generation, cleared by the next success.
    pub fn last_error(&self) -> Option<&GenerationError> {
        self.last_error.as_ref()
    }

    /// Exclusion list for the next regeneration: every shown name, oldest first.
    pub fn exclusion_list(&self) -> Vec<String> {
        self.names.iter().map(|c| c.name().clone()).collect()
    }

    /// Starts a generation for `action`.
    ///
    /// Returns `None` when the action is ignored: anything while pending, or a
    /// regeneration with no names to extend. A submission leaves the names
    /// shown so far in place until its result arrives.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn begin(&mut self, action: SessionAction) -> Option<PendingGeneration> {
        if self.phase.is_pending() {
            warn!("Generation already in flight, ignoring action");
            return None;
        }

        match action {
            SessionAction::Submit(description) => {
                self.last_error = None;
                self.submitted_description = Some(description.clone());
                self.phase = SessionPhase::Pending;

                Some(PendingGeneration {
                    form: GenerationForm::for_description(description),
                    excluded_names: Vec::new(),
                    regeneration: false,
                })
            }
            SessionAction::Regenerate => {
                if self.phase != SessionPhase::Populated {
                    debug!("Nothing to regenerate");
                    return None;
                }
                let excluded_names = self.exclusion_list();
                self.last_error = None;
                self.phase = SessionPhase::PendingRegeneration;

                Some(PendingGeneration {
                    form: GenerationForm::for_description(self.last_description.clone())
                        .with_existing_names(&excluded_names),
                    excluded_names,
                    regeneration: true,
                })
            }
        }
    }

    /// Folds a generation result into the session.
    #[instrument(skip_all, fields(phase = %self.phase))]
    pub fn complete(&mut self, result: GenerationResult) -> SessionUpdate {
        match (self.phase, result) {
            (SessionPhase::Pending, Ok(batch)) => {
                let mut names = Vec::with_capacity(batch.len());
                let added = merge_batch(&mut names, batch);
                self.names = names;
                if let Some(description) = self.submitted_description.take() {
                    self.last_description = description;
                }
                self.phase = SessionPhase::Populated;
                info!(total = added, "Session populated");
                SessionUpdate::Populated {
                    added,
                    total: added,
                }
            }
            (SessionPhase::PendingRegeneration, Ok(batch)) => {
                let added = merge_batch(&mut self.names, batch);
                self.phase = SessionPhase::Populated;
                info!(added, total = self.names.len(), "Session extended");
                SessionUpdate::Populated {
                    added,
                    total: self.names.len(),
                }
            }
            (SessionPhase::Pending, Err(e)) => {
                self.submitted_description = None;
                self.phase = if self.names.is_empty() {
                    SessionPhase::Idle
                } else {
                    SessionPhase::Populated
                };
                debug!(phase = %self.phase, "Fresh submission failed, restored prior state");
                self.last_error = Some(e.clone());
                SessionUpdate::Failed(e)
            }
            (SessionPhase::PendingRegeneration, Err(e)) => {
                self.phase = SessionPhase::Populated;
                self.last_error = Some(e.clone());
                SessionUpdate::Failed(e)
            }
            (SessionPhase::Idle | SessionPhase::Populated, _) => {
                warn!("Received a result with no generation pending");
                SessionUpdate::Ignored
            }
        }
    }

    /// Runs `action` through `orchestrator` and folds in the result.
    ///
    /// Returns `None` when the action was ignored.
    pub async fn run<B: GenerativeBackend>(
        &mut self,
        orchestrator: &NameOrchestrator<B>,
        action: SessionAction,
    ) -> Option<SessionUpdate> {
        let pending = self.begin(action)?;
        let result = orchestrator.generate(pending.form()).await;
        Some(self.complete(result))
    }
}

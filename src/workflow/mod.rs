//! Highlight submission workflow
//!
//! The sequence from "user selects text" to "remote acknowledgment or
//! failure is surfaced", kept free of UI and I/O so it can be driven by the
//! TUI event loop and exercised directly in tests. Per invocation the
//! machine walks `Idle -> AwaitingDetails -> Submitting -> Idle`; there are
//! no retries and nothing is persisted along the way.

use crate::readwise::{HighlightDraft, ReadwiseError};

/// Notice shown when a submission is acknowledged
pub const NOTICE_SENT: &str = "Highlight sent to Readwise";
/// Notice shown for any rejected or failed submission
pub const NOTICE_FAILED: &str = "Failed to send highlight to Readwise";
/// Notice shown when the action is invoked with nothing selected
pub const NOTICE_NO_SELECTION: &str = "No text selected";

/// Details collected from the user for one highlight
///
/// All fields may be empty; the service's own requirements are not
/// enforced locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightDetails {
    pub title: String,
    pub author: String,
    pub category: String,
}

/// Terminal result of one submission attempt, surfaced once and discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The service acknowledged the highlight
    Sent,
    /// The attempt was rejected locally before any request was issued
    Rejected(String),
    /// The request was issued and failed, remotely or in transit
    TransportFailed,
}

impl SubmissionOutcome {
    /// Map a send result to an outcome
    ///
    /// Remote rejection and transport failure are deliberately collapsed;
    /// the user sees one generic failure notice either way.
    pub fn from_send_result(result: Result<(), ReadwiseError>) -> Self {
        match result {
            Ok(()) => Self::Sent,
            Err(_) => Self::TransportFailed,
        }
    }

    /// The notice to show the user for this outcome
    pub fn notice(&self) -> &str {
        match self {
            Self::Sent => NOTICE_SENT,
            Self::Rejected(reason) => reason,
            Self::TransportFailed => NOTICE_FAILED,
        }
    }

    /// Whether the notice should render as an error
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Sent)
    }
}

/// What the host should do after the action is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginAction {
    /// Selection captured; open the detail collector
    CollectDetails,
    /// Nothing usable selected; show the notice and stay idle
    Reject(SubmissionOutcome),
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    /// Selection captured at invocation time, waiting on the detail form
    AwaitingDetails {
        text: String,
    },
    Submitting,
}

/// Per-invocation submission state machine
///
/// The captured selection lives inside `AwaitingDetails` and is consumed by
/// [`SubmissionWorkflow::submit_details`], so the detail collector's
/// completion can only ever produce one draft.
#[derive(Debug, Default)]
pub struct SubmissionWorkflow {
    state: State,
}

impl SubmissionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke the action with the current selection
    ///
    /// Empty selections are rejected here; no detail collector opens and no
    /// request is ever issued for them.
    pub fn begin(&mut self, selection: &str) -> BeginAction {
        if selection.is_empty() {
            self.state = State::Idle;
            return BeginAction::Reject(SubmissionOutcome::Rejected(
                NOTICE_NO_SELECTION.to_string(),
            ));
        }

        self.state = State::AwaitingDetails { text: selection.to_string() };
        BeginAction::CollectDetails
    }

    /// The detail collector was dismissed without submitting
    ///
    /// Silent: the draft-to-be is dropped and no notice is emitted.
    pub fn cancel(&mut self) {
        if matches!(self.state, State::AwaitingDetails { .. }) {
            self.state = State::Idle;
        }
    }

    /// The detail collector fired with the user's field values
    ///
    /// Returns the draft to submit, combining the selection captured when
    /// the action was invoked with the collected details. Consumes the
    /// captured selection: a second call yields `None`.
    pub fn submit_details(&mut self, details: HighlightDetails) -> Option<HighlightDraft> {
        match std::mem::take(&mut self.state) {
            State::AwaitingDetails { text } => {
                self.state = State::Submitting;
                Some(HighlightDraft {
                    text,
                    title: details.title,
                    author: details.author,
                    category: details.category,
                })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// The outbound request resolved
    pub fn complete(&mut self, result: Result<(), ReadwiseError>) -> SubmissionOutcome {
        self.state = State::Idle;
        SubmissionOutcome::from_send_result(result)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    pub fn is_awaiting_details(&self) -> bool {
        matches!(self.state, State::AwaitingDetails { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, State::Submitting)
    }
}

//! Data models for Readwise API requests

use serde::Serialize;

/// A single highlight ready for submission
///
/// Ephemeral: built once per invocation from the captured selection and the
/// details form, serialized into the request body, then discarded. `text`
/// is always non-empty; the workflow never constructs a draft without a
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightDraft {
    /// Selected text, copied verbatim
    pub text: String,
    /// Source title, may be empty
    pub title: String,
    /// Source author, may be empty
    pub author: String,
    /// Readwise category (books, articles, tweets, podcasts), may be empty
    pub category: String,
}

/// Request body for the Readwise highlights endpoint
///
/// Readwise accepts a batch, but marginalia always sends exactly one
/// highlight per call.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitHighlights {
    /// Highlights to store
    pub highlights: Vec<HighlightDraft>,
}

impl SubmitHighlights {
    /// Wrap a single draft in the envelope
    pub fn single(draft: HighlightDraft) -> Self {
        Self { highlights: vec![draft] }
    }
}

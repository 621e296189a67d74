//! Readwise API integration

pub mod client;
pub mod error;
pub mod models;

pub use client::Client;
pub use error::ReadwiseError;
pub use models::{HighlightDraft, SubmitHighlights};

//! Marginalia - a terminal reader that sends highlighted text to Readwise
//!
//! Open a markdown or plain-text file, select the lines worth keeping, add
//! title/author/category, and marginalia submits the highlight to your
//! Readwise library.

pub mod app;
pub mod config;
pub mod document;
pub mod readwise;
pub mod theme;
pub mod ui;
pub mod workflow;

pub use app::App;
pub use config::Settings;
pub use theme::Theme;

//! Document loading and selection extraction

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A line-wise selection range, inclusive on both ends
///
/// Built from the visual-mode anchor and the cursor, in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    start: usize,
    end: usize,
}

impl SelectionRange {
    /// Create a normalized range from two line indices
    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self { start: anchor.min(cursor), end: anchor.max(cursor) }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether the given line index falls inside the selection
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

/// A loaded text or markdown document, displayed as raw lines
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Where the document was loaded from
    pub path: PathBuf,
    /// Document content, one entry per line
    pub lines: Vec<String>,
}

impl Document {
    /// Load a document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document from {:?}", path))?;

        let lines = contents.lines().map(str::to_string).collect();
        Ok(Self { path: path.to_path_buf(), lines })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Extract the selected text, lines joined with newlines
    ///
    /// Out-of-range lines are ignored; selecting in an empty document
    /// yields the empty string.
    pub fn selection_text(&self, range: SelectionRange) -> String {
        if self.lines.is_empty() {
            return String::new();
        }

        let end = range.end().min(self.lines.len() - 1);
        if range.start() > end {
            return String::new();
        }

        self.lines[range.start()..=end].join("\n")
    }
}

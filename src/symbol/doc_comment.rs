use serde::{Deserialize, Serialize};

/// A zero-based line/character position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A half-open range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// One line of a documentation comment.
///
/// `range` is only recorded when the comment was written in the same compilation unit as the symbol; inherited
/// comments carry text alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SourceRange>,
}

impl LineEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            range: None,
        }
    }

    pub fn with_range(mut self, range: SourceRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// A documentation comment and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocComment {
    /// File the comment was read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Module that wrote the comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub lines: Vec<LineEntry>,
}

impl DocComment {
    pub fn new(lines: Vec<LineEntry>) -> Self {
        Self {
            uri: None,
            module: None,
            lines,
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// The comment text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n")
    }

    /// `None` for an empty comment; otherwise whether the first line has a range.
    pub(crate) fn first_line_has_range(&self) -> Option<bool> {
        self.lines.first().map(|line| line.range.is_some())
    }
}

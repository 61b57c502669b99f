use crate::language::Language;
use serde::{Deserialize, Serialize};

/// A retrieval unit: a contiguous line range of one source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Exact text of the covered lines, terminators included
    pub content: String,

    /// Path relative to the repository root, `/`-separated
    pub filename: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,

    /// Language tag derived from the file extension
    pub language: Language,

    /// `{repo_id}:{filename}:{start_line}`, unique within one repository run
    pub chunk_id: String,
}

impl Chunk {
    /// Content length in characters, the unit of the size ceiling
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// An unlabelled piece of a file produced by one of the splitters.
///
/// Line numbers are 1-indexed and inclusive, in file-global coordinates
/// unless stated otherwise by the producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start_line: usize,
    pub end_line: usize,
    pub content: String,
}

impl Segment {
    /// Build a segment from the 0-indexed, end-exclusive line range `start..end`
    pub(crate) fn from_lines(lines: &[&str], start: usize, end: usize) -> Self {
        Self {
            start_line: start + 1,
            end_line: end,
            content: lines[start..end].concat(),
        }
    }

    /// Content length in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Shift line numbers by `offset` lines (re-anchoring a local split)
    #[must_use]
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        self.start_line += offset;
        self.end_line += offset;
        self
    }
}

/// Which strategy produced a file's chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkingPath {
    /// The file has no lines; nothing is emitted
    Empty,
    /// Below the small-file threshold: the whole file is one chunk
    SmallFile,
    /// Split on detected top-level definitions
    Structured,
    /// Fixed-size overlapping line windows
    Fallback,
}

impl ChunkingPath {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::SmallFile => "small_file",
            Self::Structured => "structured",
            Self::Fallback => "fallback",
        }
    }
}

/// Result of chunking a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedFile {
    pub path: ChunkingPath,
    pub line_count: usize,
    /// Chunks that exceeded the size ceiling and were re-split
    pub oversized: usize,
    pub chunks: Vec<Chunk>,
}

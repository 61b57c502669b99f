use repoqa_code_chunker::{ChunkedFile, Language};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics about one repository chunking run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of files that produced chunks
    pub files: usize,

    /// Number of chunks created
    pub chunks: usize,

    /// Total lines across chunked files
    pub total_lines: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,

    /// Files per language tag
    pub languages: BTreeMap<String, usize>,

    /// Files per chunking path (small_file / structured / fallback)
    pub paths: BTreeMap<String, usize>,

    /// Chunks that exceeded the size ceiling and were re-split
    pub oversized_resplit: usize,

    /// Selected files that were empty
    pub empty_files: usize,

    /// Files that could not be read
    pub errors: Vec<String>,
}

impl IndexStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, language: Language, file: &ChunkedFile) {
        self.files += 1;
        self.total_lines += file.line_count;
        self.chunks += file.chunks.len();
        self.oversized_resplit += file.oversized;
        *self
            .languages
            .entry(language.as_str().to_string())
            .or_insert(0) += 1;
        *self.paths.entry(file.path.as_str().to_string()).or_insert(0) += 1;
    }

    pub fn add_empty(&mut self) {
        self.empty_files += 1;
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }
}

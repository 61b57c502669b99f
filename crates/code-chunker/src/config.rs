use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Default line count below which a file is kept as a single chunk
pub const DEFAULT_SMALL_FILE_THRESHOLD: usize = 80;

/// Default window size (lines) for fallback splitting
pub const DEFAULT_FALLBACK_WINDOW_LINES: usize = 60;

/// Default overlap (lines) between consecutive fallback windows
pub const DEFAULT_FALLBACK_OVERLAP_LINES: usize = 10;

/// Default hard ceiling on chunk content, in characters (~1500 embedding tokens)
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 6000;

/// Configuration for code chunking behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Files with fewer lines than this become a single chunk
    pub small_file_threshold: usize,

    /// Window size in lines used by the fallback splitter and the size guard
    pub fallback_window_lines: usize,

    /// Lines shared by consecutive fallback windows (must be < window)
    pub fallback_overlap_lines: usize,

    /// Hard upper bound on chunk content length, in characters
    pub max_chunk_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            small_file_threshold: DEFAULT_SMALL_FILE_THRESHOLD,
            fallback_window_lines: DEFAULT_FALLBACK_WINDOW_LINES,
            fallback_overlap_lines: DEFAULT_FALLBACK_OVERLAP_LINES,
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

impl ChunkerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.small_file_threshold == 0 {
            return Err(ChunkerError::invalid_config(
                "small_file_threshold must be > 0",
            ));
        }

        if self.fallback_window_lines == 0 {
            return Err(ChunkerError::invalid_config(
                "fallback_window_lines must be > 0",
            ));
        }

        if self.fallback_overlap_lines >= self.fallback_window_lines {
            return Err(ChunkerError::invalid_config(format!(
                "fallback_overlap_lines ({}) must be smaller than fallback_window_lines ({})",
                self.fallback_overlap_lines, self.fallback_window_lines
            )));
        }

        if self.max_chunk_chars == 0 {
            return Err(ChunkerError::invalid_config("max_chunk_chars must be > 0"));
        }

        Ok(())
    }
}

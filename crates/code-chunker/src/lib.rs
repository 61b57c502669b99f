//! # RepoQA Code Chunker
//!
//! Splits one source file into retrieval chunks for repository question
//! answering.
//!
//! ## Strategy
//!
//! The chunker prefers semantic boundaries (function and class bodies) where
//! a lightweight line-start pattern recognizes them, always respects a hard
//! character ceiling per chunk, and degrades to overlapping line windows for
//! anything it cannot structure:
//!
//! ```text
//! File text
//!     │
//!     ├──> Empty?                    → no chunks
//!     ├──> Below small-file limit?   → one chunk, whole file
//!     ├──> Boundary pattern matches
//!     │    and yields > 1 segment?   → preamble + one chunk per definition
//!     └──> otherwise                 → fixed windows with overlap
//!              │
//!              └──> Size guard: re-split anything over the ceiling
//! ```
//!
//! ## Example
//!
//! ```rust
//! use repoqa_code_chunker::{Chunker, ChunkerConfig, Language};
//!
//! let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
//!
//! let code = "def greet(name):\n    return f\"hi {name}\"\n";
//! let file = chunker.chunk_text(code, "src/greet.py", Language::Python, "demo");
//!
//! for chunk in &file.chunks {
//!     println!("{} lines {}-{}", chunk.chunk_id, chunk.start_line, chunk.end_line);
//! }
//! ```

mod boundary;
mod chunker;
mod config;
mod definitions;
mod error;
mod guard;
mod language;
mod lines;
mod types;
mod window;

pub use boundary::{boundary_pattern, is_boundary};
pub use chunker::Chunker;
pub use config::{
    ChunkerConfig, DEFAULT_FALLBACK_OVERLAP_LINES, DEFAULT_FALLBACK_WINDOW_LINES,
    DEFAULT_MAX_CHUNK_CHARS, DEFAULT_SMALL_FILE_THRESHOLD,
};
pub use definitions::split_definitions;
pub use error::{ChunkerError, Result};
pub use guard::enforce_max_size;
pub use language::Language;
pub use lines::split_lines;
pub use types::{Chunk, ChunkedFile, ChunkingPath, Segment};
pub use window::split_windows;

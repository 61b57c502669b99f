//! # RepoQA Indexer
//!
//! Repository-level chunking for retrieval-augmented question answering.
//!
//! ## Pipeline
//!
//! ```text
//! Repository root
//!     │
//!     ├──> File Scanner (excluded dirs pruned, allow-listed extensions)
//!     │      └─> (path, language) pairs, lazily
//!     │
//!     ├──> Read + lossy UTF-8 decode, one file at a time
//!     │
//!     └──> Chunker (small file / definitions / windows + size guard)
//!            └─> Ordered chunks with `repo_id:filename:start_line` ids
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use repoqa_indexer::{chunk_repository, IndexerConfig};
//!
//! fn main() -> repoqa_indexer::Result<()> {
//!     let config = IndexerConfig::default();
//!     let chunks = chunk_repository("/path/to/checkout", "my-repo", &config)?;
//!
//!     println!("{} chunks", chunks.len());
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod repository;
mod scanner;
mod stats;

pub use config::IndexerConfig;
pub use error::{IndexerError, Result};
pub use repository::{chunk_repository, FileChunks, RepositoryChunker};
pub use scanner::{FileScanner, ScanOptions, SourceFile};
pub use stats::IndexStats;

pub use repoqa_code_chunker::{Chunk, ChunkerConfig, ChunkingPath, Language};

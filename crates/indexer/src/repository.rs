use crate::config::IndexerConfig;
use crate::error::{IndexerError, Result};
use crate::scanner::{FileScanner, SourceFile};
use crate::stats::IndexStats;
use repoqa_code_chunker::{Chunk, ChunkedFile, Chunker};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Chunks of one selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChunks {
    pub file: SourceFile,
    pub chunked: ChunkedFile,
}

enum FileOutcome {
    Chunked(FileChunks),
    Empty,
    Unreadable { file: SourceFile, error: String },
}

/// Chunks every eligible file under a repository root.
///
/// Files are read one at a time while iterating, so memory use does not grow
/// with the number of files unless the caller collects the chunks. The
/// repository tree is never written to.
pub struct RepositoryChunker {
    root: PathBuf,
    repo_id: String,
    scanner: FileScanner,
    chunker: Chunker,
}

impl RepositoryChunker {
    pub fn new(
        root: impl AsRef<Path>,
        repo_id: impl Into<String>,
        config: &IndexerConfig,
    ) -> Result<Self> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|e| IndexerError::InvalidPath(format!("{}: {e}", root.display())))?;
        if !root.is_dir() {
            return Err(IndexerError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        Ok(Self {
            scanner: FileScanner::new(&root, &config.scan),
            chunker: Chunker::new(config.chunker.clone())?,
            repo_id: repo_id.into(),
            root,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    /// Lazily chunk the repository, one file per item, in traversal order.
    ///
    /// Empty and unreadable files are skipped.
    pub fn files(&self) -> impl Iterator<Item = FileChunks> + '_ {
        self.scanner.iter().filter_map(move |file| match self.process(file) {
            FileOutcome::Chunked(file) => Some(file),
            FileOutcome::Empty | FileOutcome::Unreadable { .. } => None,
        })
    }

    /// Chunk the whole repository, returning every chunk in order plus run
    /// statistics. Never fails: a repository with nothing to index yields an
    /// empty vector.
    pub fn chunk_all(&self) -> (Vec<Chunk>, IndexStats) {
        self.chunk_files(self.scanner.iter())
    }

    fn chunk_files(&self, files: impl Iterator<Item = SourceFile>) -> (Vec<Chunk>, IndexStats) {
        let started = Instant::now();
        let mut stats = IndexStats::new();
        let mut chunks = Vec::new();

        for outcome in files.map(|file| self.process(file)) {
            match outcome {
                FileOutcome::Chunked(file) => {
                    stats.add_file(file.file.language, &file.chunked);
                    chunks.extend(file.chunked.chunks);
                }
                FileOutcome::Empty => stats.add_empty(),
                FileOutcome::Unreadable { file, error } => {
                    stats.add_error(format!("{}: {error}", file.relative_path));
                }
            }
        }

        stats.time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        log::info!(
            "Chunked {} files into {} chunks in {} ms ({} skipped)",
            stats.files,
            stats.chunks,
            stats.time_ms,
            stats.empty_files + stats.errors.len()
        );

        (chunks, stats)
    }

    fn process(&self, file: SourceFile) -> FileOutcome {
        let bytes = match std::fs::read(&file.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Skipping unreadable file {}: {e}", file.path.display());
                return FileOutcome::Unreadable {
                    file,
                    error: e.to_string(),
                };
            }
        };

        // Malformed bytes become U+FFFD instead of failing the file.
        let text = String::from_utf8_lossy(&bytes);
        let chunked =
            self.chunker
                .chunk_text(&text, &file.relative_path, file.language, &self.repo_id);

        if chunked.chunks.is_empty() {
            log::debug!("Skipping empty file {}", file.relative_path);
            return FileOutcome::Empty;
        }

        FileOutcome::Chunked(FileChunks { file, chunked })
    }
}

/// Chunk every eligible file under `root`, scoping ids with `repo_id`.
///
/// Fails only if `root` is not a readable directory or the configuration is
/// invalid.
pub fn chunk_repository(
    root: impl AsRef<Path>,
    repo_id: &str,
    config: &IndexerConfig,
) -> Result<Vec<Chunk>> {
    let repository = RepositoryChunker::new(root, repo_id, config)?;
    let (chunks, _) = repository.chunk_all();
    Ok(chunks)
}

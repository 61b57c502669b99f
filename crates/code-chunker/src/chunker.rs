use crate::boundary::boundary_pattern;
use crate::config::ChunkerConfig;
use crate::definitions::split_definitions;
use crate::error::Result;
use crate::guard::enforce_max_size;
use crate::language::Language;
use crate::lines::split_lines;
use crate::types::{Chunk, ChunkedFile, ChunkingPath, Segment};
use crate::window::split_windows;
use std::collections::HashMap;

/// Main chunker interface: turns one file's text into ordered chunks
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker, rejecting an invalid configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Chunk one file's decoded text.
    ///
    /// `filename` is the repository-relative path recorded on every chunk and
    /// `repo_id` scopes the chunk identifiers. An empty text yields no chunks.
    pub fn chunk_text(
        &self,
        text: &str,
        filename: &str,
        language: Language,
        repo_id: &str,
    ) -> ChunkedFile {
        let lines = split_lines(text);
        let (path, segments) = self.split(&lines, language);
        let (segments, oversized) = enforce_max_size(&lines, segments, &self.config);

        log::debug!(
            "{filename}: {} lines, {} path, {} chunks",
            lines.len(),
            path.as_str(),
            segments.len()
        );

        ChunkedFile {
            path,
            line_count: lines.len(),
            oversized,
            chunks: assign_ids(segments, filename, language, repo_id),
        }
    }

    /// Pick the small-file, structured or fallback path and split accordingly.
    ///
    /// The result has not been through the size guard yet.
    pub fn split(&self, lines: &[&str], language: Language) -> (ChunkingPath, Vec<Segment>) {
        if lines.is_empty() {
            return (ChunkingPath::Empty, Vec::new());
        }

        if lines.len() < self.config.small_file_threshold {
            return (
                ChunkingPath::SmallFile,
                vec![Segment::from_lines(lines, 0, lines.len())],
            );
        }

        if let Some(pattern) = boundary_pattern(language) {
            match split_definitions(lines, pattern) {
                Some(segments) if segments.len() > 1 => {
                    return (ChunkingPath::Structured, segments);
                }
                Some(_) => log::debug!("Single definition segment, falling back to windows"),
                None => {}
            }
        }

        (
            ChunkingPath::Fallback,
            split_windows(
                lines,
                self.config.fallback_window_lines,
                self.config.fallback_overlap_lines,
            ),
        )
    }
}

/// Label segments as chunks. A start line already taken in this file gets a
/// `~n` suffix so identifiers stay unique.
fn assign_ids(
    segments: Vec<Segment>,
    filename: &str,
    language: Language,
    repo_id: &str,
) -> Vec<Chunk> {
    let mut seen: HashMap<usize, usize> = HashMap::new();

    segments
        .into_iter()
        .map(|segment| {
            let repeats = seen.entry(segment.start_line).or_insert(0);
            let chunk_id = if *repeats == 0 {
                format!("{repo_id}:{filename}:{}", segment.start_line)
            } else {
                format!("{repo_id}:{filename}:{}~{repeats}", segment.start_line)
            };
            *repeats += 1;

            Chunk {
                content: segment.content,
                filename: filename.to_string(),
                start_line: segment.start_line,
                end_line: segment.end_line,
                language,
                chunk_id,
            }
        })
        .collect()
}

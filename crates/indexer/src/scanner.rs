use ignore::{DirEntry, WalkBuilder};
use repoqa_code_chunker::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Which files a repository run selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Directory names pruned before descent, at any depth
    pub excluded_dirs: BTreeSet<String>,

    /// Exact file names skipped (lock files)
    pub excluded_files: BTreeSet<String>,

    /// File name suffixes skipped (minified assets)
    pub excluded_suffixes: BTreeSet<String>,

    /// Extensions (without the dot) that are kept
    pub allowed_extensions: BTreeSet<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: to_set(EXCLUDED_DIRS),
            excluded_files: to_set(EXCLUDED_FILES),
            excluded_suffixes: to_set(EXCLUDED_SUFFIXES),
            allowed_extensions: to_set(ALLOWED_EXTENSIONS),
        }
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// A file selected for chunking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as reached from the scanner root
    pub path: PathBuf,

    /// Path relative to the root, `/`-separated on every platform
    pub relative_path: String,

    pub language: Language,
}

/// Scanner for finding source files in a repository
pub struct FileScanner {
    root: PathBuf,
    options: ScanOptions,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>, options: &ScanOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options: options.clone(),
        }
    }

    /// Lazily walk the tree, yielding eligible files in traversal order.
    ///
    /// Entries are visited sorted by file name within each directory, so the
    /// order is stable across runs and platforms. Nothing is read or written.
    pub fn iter(&self) -> impl Iterator<Item = SourceFile> + '_ {
        let excluded_dirs = self.options.excluded_dirs.clone();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder.filter_entry(move |entry| !is_excluded_dir(entry, &excluded_dirs));

        builder.build().filter_map(move |result| match result {
            Ok(entry) => self.select(&entry),
            Err(e) => {
                log::warn!("Failed to read entry: {e}");
                None
            }
        })
    }

    fn select(&self, entry: &DirEntry) -> Option<SourceFile> {
        let file_type = entry.file_type()?;
        let path = entry.path();
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if !is_file {
            return None;
        }

        let file_name = path.file_name()?.to_string_lossy();
        if self.options.excluded_files.contains(&*file_name) {
            log::debug!("Skipping lock file {}", path.display());
            return None;
        }
        let lowered = file_name.to_lowercase();
        if self
            .options
            .excluded_suffixes
            .iter()
            .any(|suffix| lowered.ends_with(&suffix.to_lowercase()))
        {
            log::debug!("Skipping minified asset {}", path.display());
            return None;
        }

        let ext = path.extension()?.to_str()?.to_lowercase();
        if !self.options.allowed_extensions.contains(&ext) {
            return None;
        }

        Some(SourceFile {
            path: path.to_path_buf(),
            relative_path: relative_path(path, &self.root),
            language: Language::from_extension(&ext),
        })
    }
}

fn is_excluded_dir(entry: &DirEntry, excluded: &BTreeSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|t| t.is_dir())
        && excluded.contains(&*entry.file_name().to_string_lossy())
}

/// Render `path` relative to `root` with forward slashes
fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

const EXCLUDED_DIRS: &[&str] = &[
    // VCS / editors
    ".git",
    ".idea",
    ".vscode",
    // dependency caches / virtualenvs
    "node_modules",
    "__pycache__",
    "venv",
    ".venv",
    "env",
    ".env",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    // build output
    "dist",
    "build",
    ".next",
    ".nuxt",
    "coverage",
];

const EXCLUDED_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "poetry.lock",
    "pnpm-lock.yaml",
    "Pipfile.lock",
    "composer.lock",
    "Gemfile.lock",
    "Cargo.lock",
];

const EXCLUDED_SUFFIXES: &[&str] = &[".min.js", ".min.css"];

const ALLOWED_EXTENSIONS: &[&str] = &[
    // Code
    "py", "js", "ts", "tsx", "jsx", "java", "go", "rs", "cpp", "c", "h", //
    // Web / docs
    "css", "html", "md", //
    // Config / data / scripts
    "json", "yaml", "yml", "sql", "sh",
];

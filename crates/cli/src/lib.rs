use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use repoqa_indexer::{IndexStats, IndexerConfig, RepositoryChunker};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "repoqa")]
#[command(about = "Split a repository into retrieval chunks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every chunk of a repository as a JSON array
    Chunk(ChunkArgs),

    /// Chunk a repository and print an upload summary
    Index(IndexArgs),

    /// Print the default configuration as TOML
    Config,
}

#[derive(Args)]
struct RepoArgs {
    /// Repository root
    path: PathBuf,

    /// Identifier prefixed to chunk ids (defaults to the root directory name)
    #[arg(long)]
    repo_id: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct ChunkArgs {
    #[command(flatten)]
    repo: RepoArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct IndexArgs {
    #[command(flatten)]
    repo: RepoArgs,
}

#[derive(Serialize)]
struct IndexSummary {
    repo_id: String,
    repo_name: String,
    files_processed: usize,
    chunks_created: usize,
    status: &'static str,
    stats: IndexStats,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Chunk(args) => run_chunk(args),
        Commands::Index(args) => run_index(args),
        Commands::Config => run_config(),
    }
}

fn run_chunk(args: ChunkArgs) -> Result<()> {
    let repository = open_repository(&args.repo)?;
    let (chunks, _) = repository.chunk_all();

    let output = if args.pretty {
        serde_json::to_string_pretty(&chunks)?
    } else {
        serde_json::to_string(&chunks)?
    };
    print_stdout(&output)
}

fn run_index(args: IndexArgs) -> Result<()> {
    let repository = open_repository(&args.repo)?;
    let (chunks, stats) = repository.chunk_all();

    if chunks.is_empty() {
        bail!("No code files found in repository.");
    }

    let summary = IndexSummary {
        repo_id: repository.repo_id().to_string(),
        repo_name: repo_name(repository.root()),
        files_processed: stats.files,
        chunks_created: chunks.len(),
        status: "chunked",
        stats,
    };
    print_stdout(&serde_json::to_string_pretty(&summary)?)
}

fn run_config() -> Result<()> {
    let toml = IndexerConfig::default().to_toml_string()?;
    print_stdout(toml.trim_end())
}

fn open_repository(args: &RepoArgs) -> Result<RepositoryChunker> {
    let config = match &args.config {
        Some(path) => IndexerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => IndexerConfig::default(),
    };

    let root = args
        .path
        .canonicalize()
        .with_context(|| format!("Repository path not found: {}", args.path.display()))?;
    let repo_id = args.repo_id.clone().unwrap_or_else(|| repo_name(&root));

    log::info!("Chunking {} as {repo_id}", root.display());
    RepositoryChunker::new(&root, repo_id, &config)
        .with_context(|| format!("Cannot chunk {}", root.display()))
}

fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use docfind_core::{Index, IndexConfig, QueryMode, StemAlgorithm};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docfind")]
#[command(about = "Build and query full-text index snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Boolean,
    Implicit,
}

#[derive(Subcommand)]
enum Commands {
    /// Index every .txt file under a directory into a snapshot
    Build {
        /// Directory of plain-text documents
        #[arg(long)]
        input: PathBuf,
        /// Output snapshot file
        #[arg(long)]
        output: PathBuf,
        /// Snowball stemmer language (e.g. english, portuguese)
        #[arg(long)]
        stemmer: Option<String>,
        /// File with one stopword per line
        #[arg(long)]
        stopwords: Option<PathBuf>,
    },
    /// Run a query against a snapshot and print matching document names
    Search {
        /// Snapshot file produced by `build`
        #[arg(long)]
        index: PathBuf,
        /// Query string (boolean: `a AND b OR NOT c`; implicit: bare terms)
        query: String,
        #[arg(long, value_enum, default_value = "boolean")]
        mode: Mode,
        /// Emit results as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print corpus statistics for a snapshot
    Stats {
        /// Snapshot file produced by `build`
        #[arg(long)]
        index: PathBuf,
        /// How many of the most frequent raw tokens to list
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output, stemmer, stopwords } => {
            build(&input, &output, stemmer.as_deref(), stopwords.as_deref())
        }
        Commands::Search { index, query, mode, json } => search(&index, &query, mode, json),
        Commands::Stats { index, top } => stats(&index, top),
    }
}

fn build(
    input: &Path,
    output: &Path,
    stemmer: Option<&str>,
    stopwords: Option<&Path>,
) -> Result<()> {
    if !input.is_dir() {
        bail!("input {} is not a directory", input.display());
    }
    let stemmer = stemmer.map(StemAlgorithm::parse).transpose()?;
    let stopwords = match stopwords {
        Some(path) => read_stopwords(path)?,
        None => HashSet::new(),
    };
    let mut index = Index::with_config(IndexConfig { stemmer, stopwords });

    let mut added = 0usize;
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let name = path
            .strip_prefix(input)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        index.add_document(&name, &contents);
        added += 1;
    }
    tracing::info!(added, terms = index.term_count(), "ingested documents");

    index.dump(output)
        .with_context(|| format!("writing snapshot {}", output.display()))?;
    println!(
        "indexed {} documents ({} terms) into {}",
        index.len(),
        index.term_count(),
        output.display()
    );
    Ok(())
}

fn read_stopwords(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading stopwords {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn search(index_path: &Path, query: &str, mode: Mode, json: bool) -> Result<()> {
    let index = Index::load(index_path)
        .with_context(|| format!("loading snapshot {}", index_path.display()))?;
    let mode = match mode {
        Mode::Boolean => QueryMode::Boolean,
        Mode::Implicit => QueryMode::ImplicitAnd,
    };
    let mut names: Vec<String> = index.find_with(query, mode)?.into_iter().collect();
    names.sort();

    if json {
        println!("{}", serde_json::to_string(&names)?);
    } else {
        for name in &names {
            println!("{name}");
        }
        eprintln!("{} documents matched", names.len());
    }
    Ok(())
}

fn stats(index_path: &Path, top: usize) -> Result<()> {
    let index = Index::load(index_path)
        .with_context(|| format!("loading snapshot {}", index_path.display()))?;
    println!("documents: {}", index.len());
    println!("terms:     {}", index.term_count());
    if top > 0 {
        println!("top {top} raw tokens:");
        for (token, count) in index.top_frequencies(top) {
            println!("{count:>10}  {token}");
        }
    }
    Ok(())
}

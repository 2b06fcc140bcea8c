//! aprender-recommend CLI: "books like this one" from a CSV catalog.
//!
//! Usage:
//!   aprender-recommend recommend --catalog books.csv --title "Dune"
//!   aprender-recommend recommend --catalog books.csv --title "Dune" -k 5 --json
//!   aprender-recommend inspect --catalog books.csv --title-column Book

use aprender_recommend::prelude::*;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// aprender-recommend - content-based recommendations from item descriptions
#[derive(Parser, Debug)]
#[command(name = "aprender-recommend")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend items similar to a title
    Recommend {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Title of the item to find neighbours for (exact match)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Number of recommendations
        #[arg(short, default_value_t = DEFAULT_TOP_K)]
        k: usize,

        /// Output as JSON with scores
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalog and its vocabulary
    Inspect {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Path to the CSV catalog
    #[arg(short, long, value_name = "FILE")]
    catalog: PathBuf,

    /// Header of the title column
    #[arg(long, default_value = "title")]
    title_column: String,

    /// Header of the description column
    #[arg(long, default_value = "description")]
    description_column: String,

    /// Field delimiter (single byte)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Keep English stop words in the vocabulary
    #[arg(long)]
    no_stop_words: bool,
}

impl CatalogArgs {
    fn load(&self) -> Result<IndexedCorpus> {
        if !self.delimiter.is_ascii() {
            return Err(RecommendError::invalid_config(
                "delimiter",
                self.delimiter,
                "an ASCII character",
            ));
        }
        let delimiter = self.delimiter as u8;

        let items = CsvCatalogReader::new()
            .with_title_column(self.title_column.as_str())
            .with_description_column(self.description_column.as_str())
            .with_delimiter(delimiter)
            .read_path(&self.catalog)?;

        let config = IndexConfig::default().with_stop_words(!self.no_stop_words);
        let corpus = IndexedCorpus::build_with(items, &config)?;
        info!(
            items = corpus.len(),
            vocabulary = corpus.vocabulary_size(),
            "index built"
        );
        Ok(corpus)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "aprender_recommend=debug"
    } else {
        "aprender_recommend=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_recommend<W: Write>(
    catalog: &CatalogArgs,
    title: &str,
    k: usize,
    json: bool,
    out: &mut W,
) -> Result<()> {
    // Reject blank input before paying for the index build.
    if title.trim().is_empty() {
        return Err(RecommendError::title_not_found(title));
    }

    let corpus = catalog.load()?;
    let ranked = recommend_scored(&corpus, title, k)?;
    debug!(title, results = ranked.len(), "ranked catalog");

    if json {
        serde_json::to_writer_pretty(&mut *out, &ranked).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Recommended for \"{title}\":")?;
        for (i, rec) in ranked.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, rec.title)?;
        }
    }
    Ok(())
}

fn cmd_inspect<W: Write>(catalog: &CatalogArgs, out: &mut W) -> Result<()> {
    let corpus = catalog.load()?;
    let empty = corpus
        .items()
        .iter()
        .filter(|item| !item.has_description())
        .count();

    writeln!(out, "Items:              {}", corpus.len())?;
    writeln!(out, "Vocabulary size:    {}", corpus.vocabulary_size())?;
    writeln!(out, "Empty descriptions: {empty}")?;
    Ok(())
}

/// Map an error to the message shown to the user and the exit code.
fn report(err: &RecommendError) -> (String, ExitCode) {
    match err {
        RecommendError::TitleNotFound { title } if title.trim().is_empty() => {
            ("Please enter a valid title.".to_string(), ExitCode::from(2))
        }
        RecommendError::TitleNotFound { title } => (
            format!("Title not found in catalog: {title}"),
            ExitCode::from(2),
        ),
        other => (format!("error: {other}"), ExitCode::from(1)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Recommend {
            catalog,
            title,
            k,
            json,
        } => cmd_recommend(catalog, title, *k, *json, &mut out),
        Commands::Inspect { catalog } => cmd_inspect(catalog, &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let (message, code) = report(&e);
            eprintln!("{message}");
            code
        }
    }
}

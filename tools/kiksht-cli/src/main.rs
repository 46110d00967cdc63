use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kiksht_lexicon::LexicalIndex;
use kiksht_resolver::{all_completions, describe, resolve_hover, Hover, Position};
use kiksht_tokenizer::PunctuationTrim;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "kiksht", author, version, about = "Completion and hover lookups against a Kiksht dictionary")]
struct Cli {
    /// Dictionary payload: a JSON object of entries
    #[arg(short, long, value_name = "FILE", env = "KIKSHT_DICTIONARY")]
    dictionary: PathBuf,

    /// Regex stripped from hovered tokens instead of the default punctuation rule
    #[arg(long, value_name = "REGEX")]
    punctuation: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every completion item, roots first
    Completions {
        /// Emit JSON instead of one line per item
        #[arg(long)]
        json: bool,
    },
    /// Describe the word under a cursor position
    Hover {
        /// Zero-based line
        #[arg(long)]
        line: usize,
        /// Zero-based character offset within the line
        #[arg(long)]
        character: usize,
        /// Buffer to read; stdin when omitted
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Describe a single word, punctuation already removed
    Lookup { word: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kiksht=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let index = load_index(&cli.dictionary)?;

    match &cli.command {
        Command::Completions { json } => {
            let items = all_completions(&index);
            debug!(items = items.len(), "rendered completions");
            if *json {
                serde_json::to_writer_pretty(&mut *out, &items)?;
                writeln!(out)?;
            } else {
                for item in &items {
                    writeln!(out, "{}\t{}", item.label, item.detail)?;
                }
            }
        }
        Command::Hover {
            line,
            character,
            file,
        } => {
            let trim = match &cli.punctuation {
                Some(pattern) => PunctuationTrim::new(pattern)?,
                None => PunctuationTrim::default(),
            };
            let buffer = match file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("failed to read buffer {}", path.display()))?,
                None => io::read_to_string(io::stdin()).context("failed to read buffer from stdin")?,
            };
            let hover = resolve_hover(&index, &buffer, Position::new(*line, *character), &trim);
            write_hover(out, hover)?;
        }
        Command::Lookup { word } => write_hover(out, describe(&index, word))?,
    }

    Ok(())
}

fn load_index(path: &Path) -> Result<LexicalIndex> {
    info!("reading dictionary from {}", path.display());
    let payload = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;

    let index = LexicalIndex::from_json(&payload)
        .with_context(|| format!("failed to index dictionary {}", path.display()))?;
    info!(entries = index.len(), forms = index.form_count(), "dictionary indexed");
    Ok(index)
}

fn write_hover(out: &mut impl Write, hover: Option<Hover>) -> Result<()> {
    match hover {
        Some(hover) => write!(out, "{}", hover.contents)?,
        None => debug!("no dictionary entry"),
    }
    Ok(())
}

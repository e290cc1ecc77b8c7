mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chess_openings::{builtin_catalog, OpeningBook};
use chess_pgn::{PgnGame, StringifyOptions};
use clap::{Parser, Subcommand};
use config::ToolConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pgn-tool")]
#[command(about = "Inspect and rewrite PGN chess games")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tag pairs of a game
    Tags {
        /// PGN file to read
        file: PathBuf,
    },
    /// Print the main-line moves
    Moves {
        /// PGN file to read
        file: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every variation as a full line from the start position
    Variations {
        /// PGN file to read
        file: PathBuf,
    },
    /// Write the game back out as PGN
    Stringify {
        /// PGN file to read
        file: PathBuf,
        /// Leave out comments
        #[arg(long)]
        no_annotations: bool,
        /// Leave out variations
        #[arg(long)]
        no_variations: bool,
        /// Leave out numeric annotation glyphs
        #[arg(long)]
        no_glyphs: bool,
    },
    /// Classify the game's opening
    Opening {
        /// PGN file to read
        file: PathBuf,
        /// Opening catalog to use instead of the configured or built-in one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ToolConfig::load().context("failed to load pgn-tool.toml")?;

    match cli.command {
        Commands::Tags { file } => {
            print!("{}", report::tags(&read_game(&file)?));
        }
        Commands::Moves { file, json } => {
            let game = read_game(&file)?;
            if json {
                println!("{}", report::moves_json(&game)?);
            } else {
                print!("{}", report::moves(&game));
            }
        }
        Commands::Variations { file } => {
            print!("{}", report::variations(&read_game(&file)?));
        }
        Commands::Stringify {
            file,
            no_annotations,
            no_variations,
            no_glyphs,
        } => {
            let game = read_game(&file)?;
            let options = stringify_options(config.stringify, no_glyphs, no_annotations, no_variations);
            print!("{}", game.to_pgn(&options));
        }
        Commands::Opening { file, catalog } => {
            let game = read_game(&file)?;
            let book = OpeningBook::new();
            match catalog.or(config.catalog) {
                Some(path) => {
                    book.load_file(&path)
                        .with_context(|| format!("failed to load catalog {}", path.display()))?;
                }
                None => {
                    tracing::debug!("using built-in opening catalog");
                    book.load(builtin_catalog());
                }
            }
            let sans = game.sans();
            println!("{}", report::opening(&book.identify(sans.as_slice())));
        }
    }

    Ok(())
}

fn read_game(path: &Path) -> Result<PgnGame> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    PgnGame::parse(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Applies the `--no-*` flags on top of the configured options.
fn stringify_options(
    base: StringifyOptions,
    no_glyphs: bool,
    no_annotations: bool,
    no_variations: bool,
) -> StringifyOptions {
    StringifyOptions {
        glyph_codes: base.glyph_codes && !no_glyphs,
        annotations: base.annotations && !no_annotations,
        variations: base.variations && !no_variations,
    }
}

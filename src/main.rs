use clap::Parser;
use std::fmt::Write;
use std::process::ExitCode;

use gridseek::errors::GridError;
use gridseek::grid::Grid;
use gridseek::preview::render_preview;
use gridseek::query::{self, WordResult};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Find words in a word-search grid
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Path to the grid file (comma-separated letters, one row per line)
    grid_file: String,

    /// Words to look for, comma-separated (e.g., "cat,dog,bird")
    words: String,

    /// Print the numbered grid before the results
    #[arg(short, long)]
    preview: bool,

    /// Enable debug logging (same as setting GRIDSEEK_DEBUG)
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the gridseek CLI.
///
/// Delegates to [`try_main`] and prints any error with its code and help
/// text before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("GRIDSEEK_DEBUG").is_ok();
    gridseek::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse the word list (an empty list is an error, before any file I/O).
/// 2. Load and normalize the grid file.
/// 3. Print the report (optional preview, then one line per word) on stdout.
/// 4. Print the processed-word count on stderr.
fn try_main(cli: &Cli) -> Result<(), GridError> {
    let words = query::require_word_list(&cli.words)?;

    let grid = Grid::load_from_path(&cli.grid_file)?;
    log::info!("Loaded {} grid.", grid.dimensions_label());

    let results = query::search_words(&grid, &words);
    print!("{}", render_report(&grid, &results, cli.preview));
    eprintln!("{}", processed_summary(results.len()));

    Ok(())
}

/// Everything the CLI prints on stdout: the preview (if asked for) and a
/// blank line, then `WORD<TAB>locations` per word.
fn render_report(grid: &Grid, results: &[WordResult], preview: bool) -> String {
    let mut report = String::new();

    // writing to a String never fails
    if preview {
        let _ = writeln!(&mut report, "{}", render_preview(grid));
        let _ = writeln!(&mut report);
    }
    for result in results {
        let _ = writeln!(&mut report, "{}\t{}", result.word, result.locations());
    }

    report
}

fn processed_summary(num_words: usize) -> String {
    format!("{num_words} word(s) processed.")
}

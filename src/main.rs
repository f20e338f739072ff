use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use boggle::dictionary::Dictionary;
use boggle::grid::Grid;
use boggle::solver;

/// Boggle puzzle solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the puzzle file (one row of letters per line, all rows the same length)
    puzzle: String,

    /// Path to the dictionary file (one word per line, each at least 2 characters)
    #[arg(short, long)]
    dictionary: String,
}

/// Entry point of the boggle CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("BOGGLE_DEBUG").is_ok();
    boggle::log::init_logger(debug_enabled);

    log::info!("Starting boggle solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting where available
        if let Some(solve_err) = e.downcast_ref::<solver::SolveError>() {
            eprintln!("Error: {}", solve_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the boggle CLI solver.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the dictionary and the puzzle grid from disk.
/// 3. Print the rendered puzzle on stdout.
/// 4. Solve, then print one `word\tx\ty\tpath` line per found word.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed grid, invalid
/// dictionary, missing file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the dictionary and the puzzle
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let grid = Grid::load_from_path(&cli.puzzle)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Show the puzzle being solved
    println!("{}", grid.render());

    // 3. Solve
    let t_solve = Instant::now();
    let found = solver::solve(&grid, &dictionary)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 4. Print each found word on stdout
    for record in &found {
        println!("{record}");
    }

    // 5. Print diagnostics (dictionary size, timings, number of results) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; solved in {:.3}s ({} words found).",
        dictionary.words.len(),
        load_secs,
        solve_secs,
        found.len()
    );

    Ok(())
}

//! `reskill`: picks the highest-impact set of courses that fits an hours budget.
//!
//! Set `RESKILL_LOG=debug` to see solver diagnostics.

use clap::Parser;
use reskill_knapsack::catalog::Catalog;
use reskill_knapsack::report::{CatalogTable, SolutionReport};
use reskill_knapsack::solver::SolverConfig;
use reskill_knapsack::verify::{Optimizer, Verdict};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "reskill", version, about = "Course selection under an hours budget (0/1 knapsack)")]
struct Args {
    /// JSON catalog of courses
    #[arg(short, long, value_name = "FILE", default_value = "courses_reskilling.json")]
    catalog: PathBuf,

    /// Hours available for study; prompted for when omitted
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    hours: Option<u64>,

    /// Fill tables and run both solvers with rayon (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Refuse instances whose DP table would exceed this many cells
    #[arg(long, value_name = "CELLS", default_value_t = SolverConfig::default().max_table_cells)]
    max_table_cells: u64,
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter_or("RESKILL_LOG", "warn")
        .write_style("RESKILL_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    log::debug!("arguments: {:?}", args);

    println!("{}", "=".repeat(70));
    println!("   Reskilling planner: 0/1 knapsack, two dynamic-programming solvers");
    println!("{}", "=".repeat(70));

    let catalog = match Catalog::load(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {}: {e}", args.catalog.display());
            return ExitCode::FAILURE;
        }
    };
    println!("Catalog loaded: {} courses.\n", catalog.len());
    println!("{}", CatalogTable(&catalog));

    let capacity = match args.hours {
        Some(h) => h as usize,
        None => match prompt_hours(&mut io::stdin().lock(), &mut io::stdout()) {
            Ok(Some(h)) => h,
            Ok(None) => {
                eprintln!("error: no hours budget given");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("error: cannot read hours budget: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    println!("\nComputing the best combination for {capacity} hours of study...");

    let config = SolverConfig::default()
        .with_parallel(args.parallel)
        .with_max_table_cells(args.max_table_cells);
    let run = match Optimizer::new(config).run(&catalog, capacity) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!();
    println!(
        "{}",
        SolutionReport {
            title: "RESULT - MEMOIZATION (top-down)",
            solution: &run.memoized,
        }
    );
    println!();
    println!(
        "{}",
        SolutionReport {
            title: "RESULT - TABULATION (bottom-up)",
            solution: &run.tabulated,
        }
    );
    println!("\n{}", run.verification);

    if run.verification.verdict == Verdict::Disagree {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Asks for a positive number of hours until one is entered.
///
/// Returns `Ok(None)` on end of input.
fn prompt_hours(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<usize>> {
    let mut line = String::new();
    loop {
        write!(output, "\nHow many hours do you have available for study? ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(h) if h > 0 => return Ok(Some(h)),
            Ok(_) => writeln!(output, "Please enter a positive number.")?,
            Err(_) if line.trim().starts_with('-') => {
                writeln!(output, "Please enter a positive number.")?
            }
            Err(_) => writeln!(output, "Enter a valid whole number.")?,
        }
    }
}

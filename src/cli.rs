//! Command dispatch for the `vitrine` binary.

use crate::analysis::{full_report, CatalogReport};
use crate::catalog::{sample_to_csv, GameCatalog};

/// Default subsample size when the CLI argument is absent or invalid.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;
/// Default RNG seed when the CLI argument is absent or invalid.
pub const DEFAULT_SEED: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Report,
    Sample,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("report") => Some(Command::Report),
        Some("sample") => Some(Command::Sample),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Report) => handle_report(args),
        Some(Command::Sample) => handle_sample(args),
        None => {
            eprintln!("usage: vitrine <report|sample>");
            2
        }
    }
}

fn handle_report(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: vitrine report <games.csv> [--table]");
        return 2;
    };
    let as_table = args.iter().any(|arg| arg == "--table");

    let catalog = match GameCatalog::from_path(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("load failed: {err}");
            return 1;
        }
    };
    let report = match full_report(&catalog) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("report failed: {err}");
            return 1;
        }
    };

    if as_table {
        print_table(&report);
        return 0;
    }
    match serde_json::to_string_pretty(&report) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize report: {err}");
            1
        }
    }
}

fn print_table(report: &CatalogReport) {
    println!("games\t{}", report.game_count);
    println!("free_pct\t{:.2}", report.free_paid.free_pct);
    println!("paid_pct\t{:.2}", report.free_paid.paid_pct);
    println!(
        "peak_release\t{} ({} releases)",
        report.peak_release.years, report.peak_release.releases
    );
    for bracket in &report.price_brackets {
        let genres: Vec<String> = bracket
            .genres
            .iter()
            .map(|entry| format!("{} {}", entry.genre, entry.games))
            .collect();
        println!("bracket\t{}\t{}", bracket.bracket, genres.join(", "));
    }
    for stats in &report.genre_prices {
        println!(
            "genre\t{}\tmean {:.2}\tmax {:.2}\tmin_paid {:.2}\tgames {}",
            stats.genre, stats.mean_price, stats.max_price, stats.min_paid_price, stats.games
        );
    }
}

fn handle_sample(args: &[String]) -> i32 {
    let (Some(source), Some(output)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: vitrine sample <games.csv> <output.csv> [size] [seed]");
        return 2;
    };
    let size = parse_usize_arg(args.get(4), "size", DEFAULT_SAMPLE_SIZE);
    let seed = parse_u64_arg(args.get(5), "seed", DEFAULT_SEED);

    let catalog = match GameCatalog::from_path(source) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("load failed: {err}");
            return 1;
        }
    };
    match sample_to_csv(&catalog, size, output, seed) {
        Ok(report) => {
            println!(
                "sample complete: rows={}, output='{}'",
                report.rows_written, report.output_path
            );
            0
        }
        Err(err) => {
            eprintln!("sample failed: {err}");
            1
        }
    }
}

fn parse_usize_arg(raw: Option<&String>, name: &str, default: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

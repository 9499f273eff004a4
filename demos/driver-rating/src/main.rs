//! Driver Rating Demo
//!
//! Interactive front end for the shipped fare/quality driver-rating
//! model. Each round reads a fare, a ride quality, and a show-curve
//! flag, prints the crisp rating, and on request sketches the aggregate
//! output curve as text bars.
//!
//! The inference core runs with zero rendering side effects; this binary
//! is one consumer of the curve data a rating call returns.

use std::io::{self, BufRead, Write};

use fuzzrate::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = DriverRatingModel::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Driver rating - fare in [0, 50], quality in [0, 10]. Empty line or 'q' quits.");

    loop {
        let Some(fare) = prompt_number(&mut lines, "Fare: ") else {
            break;
        };
        let Some(quality) = prompt_number(&mut lines, "Quality of ride (0-10): ") else {
            break;
        };
        let Some(show_curve) = prompt_flag(&mut lines, "Show the output curve? [y/N]: ") else {
            break;
        };

        match model.rate(fare, quality) {
            Ok(result) => {
                println!("Rating for driver: {:.2}", result.rating);
                if show_curve {
                    print_curve(model.engine().output().universe(), &result);
                }
            }
            Err(err) => println!("Cannot rate this ride: {err}"),
        }
    }
}

/// Prompts until a number is entered; `None` on EOF, an empty line, or 'q'.
fn prompt_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Option<f64> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let line = lines.next()?.ok()?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Reads a yes/no answer; defaults to no, `None` on EOF or 'q'.
fn prompt_flag(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Option<bool> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let line = lines.next()?.ok()?;
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return None;
    }
    Some(matches!(trimmed, "y" | "Y" | "yes" | "1"))
}

/// Sketches the aggregate curve over the rating universe.
fn print_curve(universe: &Universe, result: &RatingResult) {
    const WIDTH: f64 = 40.0;

    println!(
        "Aggregated membership (centroid at {:.2}, activation {:.2}):",
        result.rating, result.activation
    );
    for (y, mu) in universe.samples().iter().zip(&result.aggregate) {
        let bar = "#".repeat((mu * WIDTH).round() as usize);
        println!("{y:>5.1} | {bar}");
    }
}

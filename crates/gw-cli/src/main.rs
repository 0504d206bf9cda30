//! giveaway - mention-rule comment draw CLI
//!
//! Draws a winner from exported social-media comments. A comment earns one
//! ticket when it mentions exactly three different people, and every ticket
//! has the same chance of being picked.
//!
//! ## Quick Start
//!
//! ```bash
//! # Check which comments qualify
//! giveaway validate comments.csv --show-rejected
//!
//! # Draw a winner (reproducibly)
//! giveaway draw comments.csv --seed 2024
//!
//! # Write a Markdown result page
//! giveaway draw comments.csv --format markdown --output result.md
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

//! Rate command implementation: one-shot formula evaluation.

use anyhow::Result;
use mairate_core::compute_rating;

pub fn run(constant: f64, score: u32) -> Result<()> {
    let rating = compute_rating(constant, score);
    println!(
        "constant {:.1}, achievement {:.4}% -> rating {}",
        constant,
        f64::from(score) / 10000.0,
        rating
    );
    Ok(())
}

//! The rating formula: (difficulty constant, achievement) -> rating.

/// Achievement ceiling: anything at or above 100.50% rates as 100.50%.
pub const MAX_PERCENT: f64 = 100.50;

/// Rank coefficient table, ordered by threshold descending; the first
/// threshold the achievement is greater than or equal to wins.
///
/// Transcribed from the observed scoring rules, including the non-round
/// thresholds (100.4999, 98.99, 96.99, 79.99). Exactly 100.4999% selects
/// 22.2, and 96.99% selects 17.6 while 97.00% selects 20.0; those sharp
/// steps are real and must not be smoothed out.
pub const RANK_COEFFICIENTS: [(f64, f64); 23] = [
    (100.50, 22.4),
    (100.4999, 22.2),
    (100.00, 21.6),
    (99.99, 21.4),
    (99.50, 21.1),
    (99.00, 20.8),
    (98.99, 20.6),
    (98.00, 20.3),
    (97.00, 20.0),
    (96.99, 17.6),
    (94.00, 16.8),
    (90.00, 15.2),
    (80.00, 13.6),
    (79.99, 12.8),
    (75.00, 12.0),
    (70.00, 11.2),
    (60.00, 9.6),
    (50.00, 8.0),
    (40.00, 6.4),
    (30.00, 4.8),
    (20.00, 3.2),
    (10.00, 1.6),
    (0.00, 0.0),
];

/// Rank coefficient for a clamped achievement percentage.
pub fn rank_coefficient(percent: f64) -> f64 {
    for &(threshold, coefficient) in &RANK_COEFFICIENTS {
        if percent >= threshold {
            return coefficient;
        }
    }
    0.0
}

/// Compute the rating for one play.
///
/// `score` carries 4 implied decimal digits (985000 == 98.5000%) and is
/// clamped at 100.50% before the coefficient lookup. The result truncates
/// toward zero, it never rounds.
pub fn compute_rating(constant: f64, score: u32) -> u32 {
    let mut percent = f64::from(score) / 10000.0;
    if percent >= MAX_PERCENT {
        percent = MAX_PERCENT;
    }

    let coefficient = rank_coefficient(percent);
    (constant * (percent / 100.0) * coefficient) as u32
}

//! Placement engine: maps a test outcome (score, total) to a starting JLPT level.
//!
//! The bands are fixed product thresholds on the correct-answer percentage:
//!   < 20% → N5, < 40% → N4, < 60% → N3, < 80% → N2, >= 80% → N1.
//!
//! Pure function over two integers; the only failure mode is an empty test
//! (`total == 0`), which is rejected explicitly instead of letting the
//! division produce garbage.

use thiserror::Error;

use crate::domain::Level;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
  #[error("placement total must be positive (got 0)")]
  ZeroTotal,
}

/// Compute the starting level for a test outcome.
///
/// The percentage is compared as a real number, so e.g. 1/5 = 20.0 lands in
/// the N4 band rather than being truncated into N5.
pub fn starting_level(score: u32, total: u32) -> Result<Level, PlacementError> {
  if total == 0 {
    return Err(PlacementError::ZeroTotal);
  }
  let percentage = 100.0 * f64::from(score) / f64::from(total);
  let level = if percentage < 20.0 {
    Level::N5
  } else if percentage < 40.0 {
    Level::N4
  } else if percentage < 60.0 {
    Level::N3
  } else if percentage < 80.0 {
    Level::N2
  } else {
    Level::N1
  };
  Ok(level)
}

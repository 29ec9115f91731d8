//! Scoring module
//!
//! Each row removed by a sweep is worth one point. A lock that clears
//! nothing scores nothing. There is no level, combo or drop bonus.

/// Points contributed by one row during a sweep
pub const POINTS_PER_ROW: u32 = 1;

/// Points for a sweep that removed `rows_cleared` rows
pub fn score_for_sweep(rows_cleared: usize) -> u32 {
    (rows_cleared as u32).saturating_mul(POINTS_PER_ROW)
}

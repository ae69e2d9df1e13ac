//! Hour-desirability lookup for candidate slots.
//!
//! The table is a business rule, not a derived value: late morning is prime
//! time, early afternoon is next, edges of the workday trail off. Any change
//! here changes every recommendation the finder makes.

/// Desirability of a slot starting at the given wall-clock hour.
///
/// | Hours | Score |
/// |---|---|
/// | 10, 11 | 5 |
/// | 14, 15 | 4 |
/// | 9, 16 | 3 |
/// | 13, 17 | 2 |
/// | all others | 1 |
pub fn score_hour(hour: u32) -> u32 {
    match hour {
        10 | 11 => 5,
        14 | 15 => 4,
        9 | 16 => 3,
        13 | 17 => 2,
        _ => 1,
    }
}

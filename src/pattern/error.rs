// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,
    #[error("Pattern has odd length {0}; every byte needs two characters")]
    OddLength(usize),
    #[error("Invalid pattern token '{token}' at byte {index}")]
    InvalidToken { index: usize, token: String },
}

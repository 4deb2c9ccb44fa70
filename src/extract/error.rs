// Wed Jan 15 2026 - Alex

use crate::config::ConfigError;
use crate::dispatch::DecodeError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid signature: {0}")]
    Pattern(#[from] PatternError),
    #[error("Invalid matches count {count} from signature scan, expected exactly one")]
    MatchCount { count: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

// Tue Jan 13 2026 - Alex

pub mod error;
pub mod pattern;
pub mod scanner;
pub mod signature;

pub use error::PatternError;
pub use pattern::{Pattern, WILDCARD_TOKEN};
pub use scanner::{find_unique, scan};
pub use signature::{join_signature_lines, strip_whitespace};

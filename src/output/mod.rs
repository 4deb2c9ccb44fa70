// Tue Jan 13 2026 - Alex

pub mod json;

pub use json::{JsonError, JsonSerializer};

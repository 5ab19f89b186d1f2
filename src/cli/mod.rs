//! CLI command handlers

pub mod commands;

pub use commands::{detect, fill, headers, match_label, synonyms};

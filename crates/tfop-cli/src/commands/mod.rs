//! CLI commands

pub mod classify;
pub mod finalizer;
pub mod key;
pub mod matching;

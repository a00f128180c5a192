//! User-facing shells around the client layer
pub mod cli;

//! snaplink - client for a URL shortening service
//!
//! Submits long URLs to the backend, remembers the analytics token issued
//! for each short code, and fetches click statistics with that token.
//!
//! # Architecture
//! - `client`: backend protocol (`LinkClient`) and the HTTP transport seam
//! - `storage`: key/value store interface and the code → token `TokenStore`
//! - `config`: TOML + environment configuration
//! - `interfaces`: the command-line shell
//! - `system`: logging setup

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod system;
pub mod utils;

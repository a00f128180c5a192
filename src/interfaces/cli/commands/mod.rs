//! CLI command implementations
//!
//! The `render_*` functions build the text; the command functions print it.

mod generate;
mod link;
mod tokens;

pub use generate::*;
pub use link::*;
pub use tokens::*;

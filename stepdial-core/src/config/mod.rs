//! Configuration types
//!
//! Board-agnostic panel configuration and its `panel.toml` parser.

pub mod parser;
pub mod types;

pub use parser::{parse_config, ParseError};
pub use types::*;

//! Download and install registry
//!
//! Hardcoded download pages and install commands for the desktop client,
//! the CLI and the MCP bridge. There is no network access here: the values
//! must be kept in sync by hand with the pages they describe.

mod platform;
mod render;
mod types;

pub use platform::*;
pub use render::*;
pub use types::*;

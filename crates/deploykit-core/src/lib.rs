//! # Deploykit Core Library
//!
//! Pre-deployment checks for client profiles and the install-command
//! registry for the desktop client, CLI and bridge tooling.
//!
//! ## Modules
//!
//! - `catalog` - Known MCP integrations and their config fields
//! - `downloads` - Hardcoded download pages and install commands
//! - `validation` - Profile loading, rule sets and report rendering

pub mod catalog;
pub mod downloads;
pub mod validation;

// Re-export commonly used types
pub use catalog::{find_integration, IntegrationSpec, KNOWN_INTEGRATIONS};
pub use downloads::*;
pub use validation::*;

//! Client profile validation
//!
//! A profile is loaded as an untyped JSON value and checked by three
//! independent rule sets (client metadata, MCP integrations, bridge).
//! Rule failures are collected, never returned as `Err`, so one run
//! reports every problem in the document. Only loading can fail fast.

mod bridge;
mod client;
mod integrations;
mod loader;
mod report;

pub use bridge::validate_bridge;
pub use client::validate_client_metadata;
pub use integrations::validate_mcps;
pub use loader::{load_profile, ProfileError};
pub use report::render_report;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Collected outcome of validating a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Must be fixed before the profile can be used
    pub errors: Vec<String>,
    /// Informational only; never affect validity
    pub warnings: Vec<String>,
}

/// Overall outcome shown on the report's final line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    ValidWithWarnings,
    Invalid,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another report's errors and warnings after this one's
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        if !self.errors.is_empty() {
            Verdict::Invalid
        } else if !self.warnings.is_empty() {
            Verdict::ValidWithWarnings
        } else {
            Verdict::Valid
        }
    }
}

/// Validate an entire profile: client, then integrations, then bridge
pub fn validate_profile(profile: &Value) -> ValidationReport {
    let mut report = ValidationReport {
        errors: validate_client_metadata(profile),
        warnings: Vec::new(),
    };
    report.merge(validate_mcps(profile));
    report.merge(validate_bridge(profile));

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Profile validated"
    );
    report
}

/// Whether a value would count as set in a loosely-typed profile:
/// null, false, 0 and the empty string do not.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up a section that must be present and set
pub(crate) fn section<'a>(profile: &'a Value, key: &str) -> Option<&'a Value> {
    profile.get(key).filter(|v| is_truthy(v))
}

/// Optional fields treat explicit null the same as absent
pub(crate) fn optional<'a>(parent: &'a Value, key: &str) -> Option<&'a Value> {
    parent.get(key).filter(|v| !v.is_null())
}

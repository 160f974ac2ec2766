//! MCP integration rules

use serde_json::{Map, Value};
use tracing::debug;

use super::{is_truthy, ValidationReport};
use crate::catalog::find_integration;

/// Lower-cased markers left behind by unedited config templates
const PLACEHOLDER_MARKERS: [&str; 3] = ["example", "replace", "xxxxx"];

/// Check the `mcps` array. Each entry is validated independently.
pub fn validate_mcps(profile: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();

    let Some(mcps) = profile.get("mcps").and_then(Value::as_array) else {
        report.error("mcps field is required and must be an array");
        return report;
    };

    if mcps.is_empty() {
        report.warning("No MCPs configured - client will have no integrations");
    } else if !mcps.iter().any(is_enabled) {
        report.warning("No MCPs enabled - client will have no active integrations");
    }

    for (index, mcp) in mcps.iter().enumerate() {
        validate_entry(&format!("mcps[{}]", index), mcp, &mut report);
    }

    debug!(
        entries = mcps.len(),
        errors = report.errors.len(),
        "Validated MCP entries"
    );
    report
}

/// A mistyped but set `enabled` still counts, so its config gets checked
fn is_enabled(mcp: &Value) -> bool {
    mcp.get("enabled").is_some_and(is_truthy)
}

fn validate_entry(prefix: &str, mcp: &Value, report: &mut ValidationReport) {
    // Without a name there is nothing to key the catalog lookup on
    let name = match mcp.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name.as_str(),
        _ => {
            report.error(format!("{}.name is required and must be a string", prefix));
            return;
        }
    };

    if !mcp.get("enabled").is_some_and(Value::is_boolean) {
        report.error(format!("{}.enabled is required and must be a boolean", prefix));
    }

    let spec = find_integration(name);
    if spec.is_none() {
        report.warning(format!(
            "{}.name \"{}\" is not a recognized MCP server",
            prefix, name
        ));
    }

    // Disabled entries may carry partial config
    if !is_enabled(mcp) {
        return;
    }

    let Some(config) = mcp.get("config").and_then(Value::as_object) else {
        report.error(format!("{}.config is required when enabled=true", prefix));
        return;
    };

    if let Some(spec) = spec {
        for field in spec.required_fields {
            if !config.get(*field).is_some_and(is_truthy) {
                report.error(format!(
                    "{}.config.{} is required for {}",
                    prefix, field, name
                ));
            }
        }
    }

    for key in placeholder_keys(config) {
        report.error(format!(
            "{}.config.{} contains placeholder value - replace with real credential",
            prefix, key
        ));
    }
}

/// Config keys whose serialized value looks like template text.
///
/// Nested values are serialized whole, so a marker anywhere below a key
/// flags that top-level key.
fn placeholder_keys(config: &Map<String, Value>) -> impl Iterator<Item = &str> {
    config
        .iter()
        .filter(|(_, value)| {
            let text = value.to_string().to_lowercase();
            PLACEHOLDER_MARKERS.iter().any(|marker| text.contains(marker))
        })
        .map(|(key, _)| key.as_str())
}

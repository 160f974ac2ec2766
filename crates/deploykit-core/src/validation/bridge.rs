//! Bridge config rules

use serde_json::Value;

use super::{section, ValidationReport};

/// Check the `bridge` section
pub fn validate_bridge(profile: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();

    let Some(bridge) = section(profile, "bridge") else {
        report.error("Missing required field: bridge");
        return report;
    };

    match bridge.get("enabled").and_then(Value::as_bool) {
        Some(true) => {}
        Some(false) => report.warning(
            "bridge.enabled is false - Claude Desktop will not be able to delegate to Claude Code",
        ),
        None => report.error("bridge.enabled is required and must be a boolean"),
    }

    // Unlike `client.notes`, an explicit null debug flag is rejected
    if let Some(debug) = bridge.get("debug") {
        if !debug.is_boolean() {
            report.error("bridge.debug must be a boolean if provided");
        }
    }

    report
}

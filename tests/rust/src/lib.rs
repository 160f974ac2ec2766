//! Shared test utilities and fixtures for deploykit integration tests.

/// Profile document fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    /// Client section that passes every metadata rule
    pub fn valid_client() -> Value {
        json!({
            "name": "Acme Corp",
            "contact": "platform@acme.test",
            "deployment_date": "2025-11-07",
            "notes": "Phase one rollout"
        })
    }

    /// Enabled integration entry
    pub fn enabled_mcp(name: &str, config: Value) -> Value {
        json!({ "name": name, "enabled": true, "config": config })
    }

    /// Disabled integration entry with arbitrary config
    pub fn disabled_mcp(name: &str, config: Value) -> Value {
        json!({ "name": name, "enabled": false, "config": config })
    }

    /// Profile built from its three sections
    pub fn profile(client: Value, mcps: Value, bridge: Value) -> Value {
        json!({ "client": client, "mcps": mcps, "bridge": bridge })
    }

    /// Fully configured profile with no findings
    pub fn complete_profile() -> Value {
        profile(
            valid_client(),
            json!([
                enabled_mcp(
                    "asana-mcp-railway",
                    json!({ "endpoint": "https://asana-mcp.acme.test/sse", "session": "s-7f3a9" })
                ),
                enabled_mcp(
                    "hubspot-mcp-railway",
                    json!({ "endpoint": "https://hubspot-mcp.acme.test", "access_token": "pat-na1-0042" })
                ),
                disabled_mcp("neo4j-memory-mcp", json!({}))
            ]),
            json!({ "enabled": true, "debug": false }),
        )
    }

    /// Remove a top-level section from a profile
    pub fn without(mut profile: Value, section: &str) -> Value {
        if let Some(map) = profile.as_object_mut() {
            map.remove(section);
        }
        profile
    }
}

/// Temporary profile files
pub mod files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write content to a temporary `.json` file
    pub fn profile_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }
}

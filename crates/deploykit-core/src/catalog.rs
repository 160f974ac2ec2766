//! Known MCP integrations.
//!
//! Profiles may reference integrations outside this table; those are
//! reported as warnings, never errors.

/// Config field requirements for one known integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationSpec {
    pub name: &'static str,
    /// Keys that must be present (and non-empty) in an enabled integration's config
    pub required_fields: &'static [&'static str],
    pub optional_fields: &'static [&'static str],
}

pub const KNOWN_INTEGRATIONS: &[IntegrationSpec] = &[
    IntegrationSpec {
        name: "asana-mcp-railway",
        required_fields: &["endpoint", "session"],
        optional_fields: &[],
    },
    IntegrationSpec {
        name: "sharepoint-mcp-railway",
        required_fields: &["endpoint"],
        optional_fields: &["customer_sites"],
    },
    IntegrationSpec {
        name: "hubspot-mcp-railway",
        required_fields: &["endpoint", "access_token"],
        optional_fields: &[],
    },
    IntegrationSpec {
        name: "neo4j-cypher-mcp",
        required_fields: &["endpoint", "credentials"],
        optional_fields: &[],
    },
    IntegrationSpec {
        name: "neo4j-memory-mcp",
        required_fields: &["endpoint", "credentials"],
        optional_fields: &[],
    },
];

/// Look up a known integration by exact name
pub fn find_integration(name: &str) -> Option<&'static IntegrationSpec> {
    KNOWN_INTEGRATIONS.iter().find(|spec| spec.name == name)
}

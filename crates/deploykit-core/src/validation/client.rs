//! Client metadata rules

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::{optional, section};

lazy_static! {
    // Shape only; calendar validity is not checked. ASCII digits only.
    static ref DATE_REGEX: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

/// Check the `client` section. Every rule runs even if an earlier one failed.
pub fn validate_client_metadata(profile: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(client) = section(profile, "client") else {
        errors.push("Missing required field: client".to_string());
        return errors;
    };

    match client.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => {}
        _ => errors.push("client.name is required and must be a non-empty string".to_string()),
    }

    // Deliberately lenient email check
    match client.get("contact") {
        Some(Value::String(contact)) if !contact.is_empty() => {
            if !contact.contains('@') {
                errors.push("client.contact should be a valid email address".to_string());
            }
        }
        _ => errors.push("client.contact is required and must be a string".to_string()),
    }

    match client.get("deployment_date") {
        Some(Value::String(date)) if !date.is_empty() => {
            if !DATE_REGEX.is_match(date) {
                errors.push("client.deployment_date must be in YYYY-MM-DD format".to_string());
            }
        }
        _ => errors.push("client.deployment_date is required (format: YYYY-MM-DD)".to_string()),
    }

    if let Some(notes) = optional(client, "notes") {
        if !notes.is_string() {
            errors.push("client.notes must be a string if provided".to_string());
        }
    }

    errors
}

//! Human-readable validation report

use std::fmt::Write;
use std::path::Path;

use colored::{Color, Colorize};

use super::{ValidationReport, Verdict};

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Render the report printed by `validate-profile`.
///
/// With `color` false the output is plain text and fully deterministic.
pub fn render_report(path: &Path, report: &ValidationReport, color: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, path, report, color);
    out
}

fn write_report(
    out: &mut String,
    path: &Path,
    report: &ValidationReport,
    color: bool,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", paint("=== Validating Profile ===", Color::Cyan, color))?;
    writeln!(out, "File: {}", path.display())?;
    writeln!(out)?;

    write_section(out, "✗ Errors", &report.errors, Color::Red, color)?;
    write_section(out, "⚠ Warnings", &report.warnings, Color::Yellow, color)?;

    let (line, line_color) = match report.verdict() {
        Verdict::Valid => ("✓ Profile is valid!", Color::Green),
        Verdict::ValidWithWarnings => ("✓ Profile is valid (with warnings)", Color::Green),
        Verdict::Invalid => ("✗ Profile validation failed", Color::Red),
    };
    writeln!(out, "{}", paint(line, line_color, color))?;
    writeln!(out)
}

fn write_section(
    out: &mut String,
    title: &str,
    items: &[String],
    item_color: Color,
    color: bool,
) -> std::fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    let heading = format!("{} ({}):", title, items.len());
    writeln!(out, "{}", paint(&heading, item_color, color))?;
    for item in items {
        writeln!(out, "  {} {}", paint("•", item_color, color), item)?;
    }
    writeln!(out)
}

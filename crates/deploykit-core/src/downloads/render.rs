//! Plain-text summary of the download registry

use std::fmt::Write;

use super::types::DownloadInfo;

/// Format the registry as the human-readable summary printed by `download-urls`
pub fn render_download_info(info: &DownloadInfo) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_download_info(&mut out, info);
    out
}

fn write_download_info(out: &mut String, info: &DownloadInfo) -> std::fmt::Result {
    writeln!(out, "=== Claude Download URLs ===\n")?;

    writeln!(out, "Claude Desktop:")?;
    writeln!(out, "  Official page: {}", info.desktop.page)?;
    writeln!(out, "  Note: Visit page and download for your OS\n")?;

    let install = &info.code.install;
    writeln!(out, "Claude Code CLI:")?;
    for (label, command) in [
        ("Unix/macOS/WSL", install.unix),
        ("Windows PowerShell", install.windows_powershell),
        ("Windows CMD", install.windows_cmd),
        ("NPM (alternative)", install.npm),
    ] {
        writeln!(out, "  {}:", label)?;
        writeln!(out, "    {}", command)?;
    }
    writeln!(out, "  Documentation: {}\n", info.code.docs)?;

    writeln!(out, "Claude Code MCP Bridge:")?;
    writeln!(out, "  NPM Package: {}", info.bridge.npm)?;
    writeln!(out, "  GitHub: {}", info.bridge.github)?;
    writeln!(out, "  Install: {}\n", info.bridge.install)?;

    writeln!(out, "=== System Requirements ===")?;
    writeln!(out, "  Claude Desktop: {}", info.requirements.desktop)?;
    writeln!(out, "  Claude Code CLI: {}", info.requirements.code)?;
    writeln!(out, "  Node.js: {}\n", info.requirements.node)?;
    Ok(())
}

//! Install-command registry lookups.

use deploykit_core::{
    download_info, install_command, install_command_for_current_platform,
    install_command_for_key, install_command_for_os, render_download_info, InstallPlatform,
};
use pretty_assertions::assert_eq;

#[test]
fn windows_host_selects_powershell() {
    assert_eq!(
        install_command_for_os("windows"),
        download_info().code.install.windows_powershell
    );
}

#[test]
fn non_windows_hosts_select_unix() {
    for os in ["linux", "macos", "android", "netbsd"] {
        assert_eq!(install_command_for_os(os), download_info().code.install.unix);
    }
}

#[test]
fn current_platform_is_one_of_the_os_defaults() {
    let command = install_command_for_current_platform();
    assert!(
        command == install_command(InstallPlatform::WindowsPowerShell)
            || command == install_command(InstallPlatform::Unix)
    );
}

#[test]
fn every_key_resolves_to_distinct_command() {
    let commands: Vec<&str> = ["windows-ps", "windows-cmd", "unix", "npm"]
        .into_iter()
        .map(install_command_for_key)
        .collect();
    for (i, a) in commands.iter().enumerate() {
        for b in &commands[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn summary_mentions_bridge_and_requirements() {
    let text = render_download_info(download_info());
    assert!(text.contains("NPM Package: @magicturtle-s/claude-code-mcp-bridge"));
    assert!(text.contains("Claude Desktop: macOS 11+, Windows 10+"));
}

//! Install-command selection by platform

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::types::DOWNLOAD_INFO;

/// Install method for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallPlatform {
    #[serde(rename = "windows-ps")]
    WindowsPowerShell,
    WindowsCmd,
    Unix,
    Npm,
}

/// Returned when a platform key is not one of the registry keys
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown install platform: {0}")]
pub struct UnknownPlatform(pub String);

impl InstallPlatform {
    pub const ALL: [InstallPlatform; 4] = [
        InstallPlatform::WindowsPowerShell,
        InstallPlatform::WindowsCmd,
        InstallPlatform::Unix,
        InstallPlatform::Npm,
    ];

    /// Registry key for this platform
    pub fn key(&self) -> &'static str {
        match self {
            InstallPlatform::WindowsPowerShell => "windows-ps",
            InstallPlatform::WindowsCmd => "windows-cmd",
            InstallPlatform::Unix => "unix",
            InstallPlatform::Npm => "npm",
        }
    }

    /// Preferred install method for an OS name as reported by
    /// `std::env::consts::OS`. Windows gets PowerShell; macOS, Linux and
    /// everything else get the unix installer.
    pub fn for_os(os: &str) -> Self {
        if os == "windows" {
            InstallPlatform::WindowsPowerShell
        } else {
            InstallPlatform::Unix
        }
    }
}

impl fmt::Display for InstallPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InstallPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Install command for an explicit platform
pub fn install_command(platform: InstallPlatform) -> &'static str {
    let install = &DOWNLOAD_INFO.code.install;
    match platform {
        InstallPlatform::WindowsPowerShell => install.windows_powershell,
        InstallPlatform::WindowsCmd => install.windows_cmd,
        InstallPlatform::Unix => install.unix,
        InstallPlatform::Npm => install.npm,
    }
}

/// Install command for a registry key, falling back to unix for unknown keys
pub fn install_command_for_key(key: &str) -> &'static str {
    let platform = key.parse().unwrap_or(InstallPlatform::Unix);
    install_command(platform)
}

/// Install command for the given OS name
pub fn install_command_for_os(os: &str) -> &'static str {
    install_command(InstallPlatform::for_os(os))
}

/// Install command for the OS this binary was built for
pub fn install_command_for_current_platform() -> &'static str {
    install_command_for_os(std::env::consts::OS)
}

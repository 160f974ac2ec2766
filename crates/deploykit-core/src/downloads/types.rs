use serde::Serialize;

/// Everything the registry knows, as one serializable tree
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DownloadInfo {
    pub desktop: DesktopDownloads,
    pub code: CodeDownloads,
    pub bridge: BridgeDownloads,
    pub requirements: SystemRequirements,
}

/// Desktop client downloads. Installers are picked on the download page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DesktopDownloads {
    pub page: &'static str,
    pub windows: DesktopPlatform,
    pub mac: DesktopPlatform,
    pub linux: DesktopPlatform,
}

/// Per-OS guidance; there is no stable direct installer URL
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DesktopPlatform {
    pub note: &'static str,
}

/// CLI install commands, keyed by install method
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CodeDownloads {
    pub install: InstallCommands,
    pub docs: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct InstallCommands {
    /// Native installer for macOS, Linux and WSL (recommended)
    pub unix: &'static str,
    pub windows_powershell: &'static str,
    pub windows_cmd: &'static str,
    /// Package-manager alternative
    pub npm: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BridgeDownloads {
    pub npm: &'static str,
    pub github: &'static str,
    pub install: &'static str,
}

/// Minimum OS and runtime versions, as published
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SystemRequirements {
    pub desktop: &'static str,
    pub code: &'static str,
    pub node: &'static str,
}

/// Verified against the public download pages on 2025-11-07.
pub const DOWNLOAD_INFO: DownloadInfo = DownloadInfo {
    desktop: DesktopDownloads {
        page: "https://claude.com/download",
        windows: DesktopPlatform {
            note: "Visit claude.com/download and select Windows version",
        },
        mac: DesktopPlatform {
            note: "Visit claude.com/download and select macOS version",
        },
        linux: DesktopPlatform {
            note: "Visit claude.com/download if Linux version available",
        },
    },
    code: CodeDownloads {
        install: InstallCommands {
            unix: "curl -fsSL https://claude.ai/install.sh | bash",
            windows_powershell: "irm https://claude.ai/install.ps1 | iex",
            windows_cmd: "curl -fsSL https://claude.ai/install.cmd -o install.cmd && install.cmd && del install.cmd",
            npm: "npm install -g @anthropic-ai/claude-code",
        },
        docs: "https://docs.claude.com/en/docs/claude-code/setup",
    },
    bridge: BridgeDownloads {
        npm: "@magicturtle-s/claude-code-mcp-bridge",
        github: "https://github.com/MagicTurtle-s/claude-code-mcp-bridge",
        install: "npm install -g @magicturtle-s/claude-code-mcp-bridge",
    },
    requirements: SystemRequirements {
        desktop: "macOS 11+, Windows 10+",
        code: "macOS 10.15+, Ubuntu 20.04+, Debian 10+, Windows 10+ (with WSL/Git)",
        node: "18+ (for MCP Bridge)",
    },
};

/// Get the full registry
pub fn download_info() -> &'static DownloadInfo {
    &DOWNLOAD_INFO
}

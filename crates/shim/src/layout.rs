//! Packaging contract for a bundled install
//!
//! The installer places the shim, the runtime and the application side by
//! side. Every path the shim launches is one of these fixed subpaths joined
//! onto the install directory.

use std::path::{Path, PathBuf};

pub const RUNTIME_DIR: &str = "node";
pub const RUNTIME_EXE: &str = "node.exe";
pub const APP_DIR: &str = "app";
pub const APP_ENTRY: &str = "openclaw.mjs";

/// Relative locations of the runtime and the application entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub runtime_dir: &'static str,
    pub runtime_exe: &'static str,
    pub app_dir: &'static str,
    pub app_entry: &'static str,
}

impl Layout {
    /// The layout shipped by the WinClaw installer.
    pub const WINCLAW: Layout = Layout {
        runtime_dir: RUNTIME_DIR,
        runtime_exe: RUNTIME_EXE,
        app_dir: APP_DIR,
        app_entry: APP_ENTRY,
    };

    pub fn runtime_path(&self, install_dir: &Path) -> PathBuf {
        install_dir.join(self.runtime_dir).join(self.runtime_exe)
    }

    pub fn script_path(&self, install_dir: &Path) -> PathBuf {
        install_dir.join(self.app_dir).join(self.app_entry)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::WINCLAW
    }
}

//! Target assembly
//!
//! Composes the runtime and script paths from the install directory and the
//! packaging layout, and builds the child's argument vector. Nothing here
//! touches the filesystem: a missing runtime shows up later as a spawn error.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use tracing::debug;

use crate::context::InstallDir;
use crate::layout::Layout;

/// Fully assembled child invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Runtime executable, used as the child's program image
    pub runtime: PathBuf,
    /// Application entry point, always the child's first argument
    pub script: PathBuf,
    /// Caller arguments in their original order
    pub forwarded: Vec<OsString>,
}

impl LaunchPlan {
    pub fn assemble(
        install_dir: &InstallDir,
        layout: &Layout,
        forwarded: Vec<OsString>,
    ) -> Self {
        let runtime = layout.runtime_path(install_dir.as_path());
        let script = layout.script_path(install_dir.as_path());
        debug!(
            runtime = %runtime.display(),
            script = %script.display(),
            forwarded = forwarded.len(),
            "assembled launch plan"
        );

        Self {
            runtime,
            script,
            forwarded,
        }
    }

    /// Arguments handed to the runtime: the script path, then every caller
    /// argument verbatim.
    pub fn child_args(&self) -> impl Iterator<Item = &OsStr> {
        std::iter::once(self.script.as_os_str())
            .chain(self.forwarded.iter().map(OsString::as_os_str))
    }
}

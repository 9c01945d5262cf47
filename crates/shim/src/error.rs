use std::io;
use std::path::PathBuf;

use crate::exec::Phase;

/// Failures the shim reports itself. A child exiting non-zero is not one of
/// these: its code is passed through untouched.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    #[error("Failed to resolve install dir: {0}")]
    ResolveInstallDir(#[source] io::Error),
    #[error("Failed to start runtime {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed waiting for runtime: {0}")]
    Wait(#[source] io::Error),
}

impl ShimError {
    /// Phase of the launch in which the failure occurred.
    pub fn phase(&self) -> Phase {
        match self {
            ShimError::ResolveInstallDir(_) => Phase::Locating,
            ShimError::Spawn { .. } => Phase::Spawning,
            ShimError::Wait(_) => Phase::Running,
        }
    }

    /// Every shim-level failure exits 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

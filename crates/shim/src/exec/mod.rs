//! Launch orchestration
//!
//! One invocation walks `Locating → Assembling → Spawning → Running →
//! Terminated(code)`. Any failure before `Running` terminates with 1 after a
//! single line on stderr; once the runtime is running the shim only waits.

mod bootstrap;
mod status;

pub use self::status::{exit_code_from, FAILURE_EXIT_CODE};

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};

use tracing::{debug, debug_span};

use self::bootstrap::execute_command;
use crate::context::ShimContext;
use crate::error::ShimError;
use crate::layout::Layout;
use crate::resolver::LaunchPlan;

/// States of a single launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Locating,
    Assembling,
    Spawning,
    Running,
    Terminated(i32),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Locating => f.write_str("locating"),
            Phase::Assembling => f.write_str("assembling"),
            Phase::Spawning => f.write_str("spawning"),
            Phase::Running => f.write_str("running"),
            Phase::Terminated(code) => write!(f, "terminated({code})"),
        }
    }
}

/// Main shim execution function
///
/// Returns the child's exit code, or the failure that stopped the launch
/// before the child could run.
pub fn run_shim() -> Result<i32, ShimError> {
    run_shim_with(std::env::args_os(), &Layout::WINCLAW)
}

/// Run the shim for an explicit argument vector (argument zero included)
/// and packaging layout.
pub fn run_shim_with<I>(argv: I, layout: &Layout) -> Result<i32, ShimError>
where
    I: IntoIterator<Item = OsString>,
{
    let span = debug_span!("shim", version = env!("CARGO_PKG_VERSION"));
    let _enter = span.enter();

    debug!(phase = %Phase::Locating);
    let ctx = ShimContext::from_args(argv)?;

    debug!(phase = %Phase::Assembling);
    let plan = LaunchPlan::assemble(&ctx.install_dir, layout, ctx.args);

    debug!(phase = %Phase::Spawning);
    let status = execute_command(&plan)?;

    let code = exit_code_from(status);
    debug!(phase = %Phase::Terminated(code));
    Ok(code)
}

/// Run the shim and produce the process exit code, writing the one-line
/// diagnostic for shim-level failures.
pub fn run() -> i32 {
    let outcome = run_shim();
    report(outcome, &mut io::stderr().lock())
}

fn report<W: Write>(outcome: Result<i32, ShimError>, stderr: &mut W) -> i32 {
    match outcome {
        Ok(code) => code,
        Err(err) => {
            debug!(phase = %err.phase(), "launch failed");
            // Nothing more can be done if stderr itself is gone.
            let _ = writeln!(stderr, "{err}");
            let _ = stderr.flush();
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Locating.to_string(), "locating");
        assert_eq!(Phase::Terminated(42).to_string(), "terminated(42)");
    }

    #[test]
    fn test_report_passes_child_code_silently() {
        let mut stderr = Vec::new();

        assert_eq!(report(Ok(0), &mut stderr), 0);
        assert_eq!(report(Ok(42), &mut stderr), 42);
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_report_resolve_failure_is_one_line() {
        let mut stderr = Vec::new();
        let err = ShimError::ResolveInstallDir(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        ));

        let code = report(Err(err), &mut stderr);
        let text = String::from_utf8(stderr).unwrap();

        assert_eq!(code, 1);
        assert_eq!(text, "Failed to resolve install dir: No such file or directory\n");
    }

    #[test]
    fn test_report_spawn_failure_is_one_line() {
        let mut stderr = Vec::new();
        let err = ShimError::Spawn {
            program: PathBuf::from("node.exe"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert_eq!(report(Err(err), &mut stderr), 1);
        assert_eq!(stderr.iter().filter(|&&b| b == b'\n').count(), 1);
        assert!(stderr.ends_with(b"\n"));
    }

    #[test]
    fn test_missing_runtime_fails_in_spawning() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("winclaw.exe");

        let err = run_shim_with(vec![exe.into_os_string()], &Layout::WINCLAW).unwrap_err();

        assert_eq!(err.phase(), Phase::Spawning);
        assert_eq!(err.exit_code(), FAILURE_EXIT_CODE);
    }
}

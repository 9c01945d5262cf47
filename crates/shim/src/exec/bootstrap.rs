use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, trace};

use crate::error::ShimError;
use crate::resolver::LaunchPlan;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// No `CREATE_NO_WINDOW`, `DETACHED_PROCESS` or `CREATE_NEW_CONSOLE`: the
/// child attaches to the caller's console.
#[cfg(windows)]
const SHARE_CALLER_CONSOLE: u32 = 0;

/// Build the runtime command with all three standard streams inherited.
/// Environment and working directory are left as the shim received them.
pub(crate) fn build_command(plan: &LaunchPlan) -> Command {
    let mut cmd = Command::new(&plan.runtime);
    cmd.args(plan.child_args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    #[cfg(windows)]
    cmd.creation_flags(SHARE_CALLER_CONSOLE);

    cmd
}

/// Spawn the runtime and block until it terminates.
pub(crate) fn execute_command(plan: &LaunchPlan) -> Result<ExitStatus, ShimError> {
    let mut child = build_command(plan)
        .spawn()
        .map_err(|source| ShimError::Spawn {
            program: plan.runtime.clone(),
            source,
        })?;
    debug!(pid = child.id(), "runtime started");

    let status = child.wait().map_err(ShimError::Wait)?;
    trace!(?status, "runtime exited");
    Ok(status)
}

use std::process::ExitStatus;

/// Exit code for every shim-level failure and for a child that left no code.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Map the child's termination to the shim's own exit code.
///
/// A child that exited normally hands over its code unchanged. On Unix a
/// child killed by a signal has no code and collapses to 1; on Windows the
/// full 32-bit code round-trips through `i32`.
pub fn exit_code_from(status: ExitStatus) -> i32 {
    status.code().unwrap_or(FAILURE_EXIT_CODE)
}


#[cfg(all(test, windows))]
mod windows_tests {
    use super::*;
    use std::os::windows::process::ExitStatusExt;

    #[test]
    fn test_large_exit_codes_round_trip() {
        // STATUS_CONTROL_C_EXIT
        let status = ExitStatus::from_raw(0xC000_013A);
        assert_eq!(exit_code_from(status) as u32, 0xC000_013A);
    }
}

//! WinClaw launcher - runs `node/node.exe app/openclaw.mjs [args...]` from
//! the directory this executable is installed in.
//!
//! Ships as `winclaw.exe` so the application can be invoked on Windows
//! without a `.cmd` suffix. Arguments, stdio and the exit code all pass
//! straight through.

fn main() {
    #[cfg(feature = "diagnostics")]
    winclaw_shim::init_diagnostics();

    std::process::exit(winclaw_shim::run());
}

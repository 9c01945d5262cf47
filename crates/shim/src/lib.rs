//! WinClaw launcher shim
//!
//! Lets the bundled application run as a plain `winclaw` command on Windows.
//! The shim finds its own install directory, launches the bundled runtime on
//! the bundled application script, and gets out of the way.
//!
//! ## Architecture
//!
//! Each invocation:
//! 1. Locates the install directory from argument zero ([`context`])
//! 2. Assembles the runtime path, script path and child arguments ([`resolver`])
//! 3. Spawns the runtime with inherited stdio and waits for it ([`exec`])
//! 4. Exits with the runtime's exit code, or 1 on a shim-level failure
//!
//! ```text
//! <install-dir>/
//!   winclaw.exe
//!   node/node.exe
//!   app/openclaw.mjs
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! fn main() {
//!     std::process::exit(winclaw_shim::run());
//! }
//! ```

pub mod context;
pub mod error;
pub mod exec;
pub mod layout;
#[cfg(feature = "diagnostics")]
pub mod logger;
pub mod resolver;

pub use context::{InstallDir, ShimContext};
pub use error::ShimError;
pub use exec::{run, run_shim, run_shim_with, Phase};
pub use layout::Layout;
#[cfg(feature = "diagnostics")]
pub use logger::init_diagnostics;
pub use resolver::LaunchPlan;

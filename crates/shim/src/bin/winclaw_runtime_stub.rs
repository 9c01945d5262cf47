//! Stand-in for the bundled runtime, used by the integration tests.
//!
//! Installed as `node/node.exe` in a scratch install tree. Its behaviour is
//! picked from the environment it inherits through the shim:
//!
//! - `WINCLAW_STUB_MODE`: `silent` (default), `echo-args`, `exit`, `cat`,
//!   `stderr`, `cwd` or `env`
//! - `WINCLAW_STUB_EXIT_CODE`: exit code for `exit` mode
//! - `WINCLAW_STUB_ENV_KEY`: variable printed in `env` mode
//! - `WINCLAW_STUB_RECORD`: file that argv is appended to, one element per line

use anyhow::{bail, Context, Result};
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};

fn main() -> Result<()> {
    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    if let Some(record) = env::var_os("WINCLAW_STUB_RECORD") {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&record)
            .context("failed to open argv record")?;
        for arg in &args {
            writeln!(file, "{arg}").context("failed to record argv")?;
        }
    }

    let mode = env::var("WINCLAW_STUB_MODE").unwrap_or_else(|_| "silent".to_string());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode.as_str() {
        "silent" => {}
        "echo-args" => {
            for arg in &args {
                writeln!(out, "{arg}")?;
            }
        }
        "exit" => {
            let code = env::var("WINCLAW_STUB_EXIT_CODE")
                .context("WINCLAW_STUB_EXIT_CODE not set")?
                .parse::<i32>()
                .context("WINCLAW_STUB_EXIT_CODE is not an integer")?;
            out.flush()?;
            std::process::exit(code);
        }
        "cat" => {
            io::copy(&mut io::stdin().lock(), &mut out).context("failed to copy stdin")?;
        }
        "stderr" => {
            writeln!(out, "to stdout")?;
            out.flush()?;
            let mut err = io::stderr().lock();
            err.write_all(b"to stderr\n")?;
        }
        "cwd" => {
            writeln!(out, "{}", env::current_dir()?.display())?;
        }
        "env" => {
            let key = env::var("WINCLAW_STUB_ENV_KEY").context("WINCLAW_STUB_ENV_KEY not set")?;
            writeln!(out, "{}", env::var(&key).unwrap_or_default())?;
        }
        other => bail!("unknown stub mode: {other}"),
    }

    out.flush()?;
    Ok(())
}

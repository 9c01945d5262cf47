//! Self-location and invocation context
//!
//! The shim is anchored on the directory it was installed into, never on the
//! caller's working directory. This module turns the invocation path the OS
//! handed us in argument zero into that absolute install directory.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ShimError;

/// Absolute directory containing the running shim executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallDir(PathBuf);

impl InstallDir {
    /// Locate the install directory from argument zero.
    ///
    /// When argument zero has a directory part it is made absolute against
    /// the current working directory. A bare name (the shim was found via the
    /// executable search path) or a missing argument zero carries no usable
    /// directory, so the OS-reported image path is used instead.
    pub fn locate(invocation: Option<&OsStr>) -> Result<Self, ShimError> {
        match invocation.and_then(invocation_dir) {
            Some(dir) if dir.is_absolute() => Ok(Self(normalize_lexically(dir))),
            Some(dir) => {
                let cwd = env::current_dir().map_err(ShimError::ResolveInstallDir)?;
                trace!(cwd = %cwd.display(), "resolving relative invocation path");
                Self::absolute(resolve_against(dir, &cwd))
            }
            None => Self::from_current_exe(),
        }
    }

    /// Locate the install directory from the OS-reported executable image.
    pub fn from_current_exe() -> Result<Self, ShimError> {
        let exe = env::current_exe().map_err(ShimError::ResolveInstallDir)?;
        debug!(exe = %exe.display(), "falling back to current executable path");
        let dir = exe.parent().ok_or_else(|| {
            ShimError::ResolveInstallDir(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ))
        })?;
        if dir.is_absolute() {
            Ok(Self(normalize_lexically(dir)))
        } else {
            let cwd = env::current_dir().map_err(ShimError::ResolveInstallDir)?;
            Self::absolute(resolve_against(dir, &cwd))
        }
    }

    // Drive-relative paths (`C:foo`) survive a join with the working
    // directory; the OS resolves those against the per-drive directory.
    fn absolute(path: PathBuf) -> Result<Self, ShimError> {
        if path.is_absolute() {
            return Ok(Self(path));
        }
        std::path::absolute(&path)
            .map(|p| Self(normalize_lexically(&p)))
            .map_err(ShimError::ResolveInstallDir)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for InstallDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Everything the shim takes from its own process: where it lives and the
/// arguments to forward.
#[derive(Debug)]
pub struct ShimContext {
    pub install_dir: InstallDir,
    /// Caller arguments, program name excluded
    pub args: Vec<OsString>,
}

impl ShimContext {
    /// Build the context from the shim's own argument vector.
    pub fn from_args<I>(argv: I) -> Result<Self, ShimError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let invocation = argv.next();
        let install_dir = InstallDir::locate(invocation.as_deref())?;
        debug!(install_dir = %install_dir.as_path().display(), "located install dir");

        Ok(Self {
            install_dir,
            args: argv.collect(),
        })
    }

    pub fn from_env() -> Result<Self, ShimError> {
        Self::from_args(env::args_os())
    }
}

/// Directory part of an invocation path, or `None` for a bare file name.
fn invocation_dir(invocation: &OsStr) -> Option<&Path> {
    Path::new(invocation)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}

/// Join `dir` onto `cwd` unless it is already absolute, then fold `.` and
/// `..` components. Symlinks are left alone.
pub fn resolve_against(dir: &Path, cwd: &Path) -> PathBuf {
    normalize_lexically(&cwd.join(dir))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !out.pop() && !out.has_root() {
                    out.push(Component::ParentDir.as_os_str());
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

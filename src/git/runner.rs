//! Subprocess Plumbing
//!
//! Locates the `git` executable (once per process) and runs it
//! synchronously with captured output. Every other module goes through
//! [`run_git`]; nothing here interprets git's output beyond decoding it
//! as text.

use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
    sync::OnceLock,
};

use crate::errors::{GitError, Result};

/// Resolved path of the `git` executable, cached for the process
/// lifetime after the first successful lookup.
static GIT_EXECUTABLE: OnceLock<PathBuf> = OnceLock::new();

/// Captured output of a successfully exited `git` invocation.
#[derive(Debug)]
pub struct GitOutput {
    /// Standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8. Usually empty on
    /// success but git writes progress and hints here.
    pub stderr: String,
}

/// Returns the path to the `git` executable.
///
/// The search walks the `PATH` environment variable on the first call
/// and caches the result for the remainder of the process; subsequent
/// calls reuse the cached path without re-searching. A failed lookup is
/// not cached, so installing git mid-process is picked up by the next
/// call.
///
/// # Errors
///
/// Returns `GitError::ExecutableNotFound` if no executable named `git`
/// exists on the search path.
pub fn git_executable() -> Result<&'static Path> {
    if let Some(path) = GIT_EXECUTABLE.get() {
        return Ok(path.as_path());
    }

    let found = lookup_path("git").ok_or(GitError::ExecutableNotFound)?;

    // A concurrent caller may have won the race; get_or_init returns
    // whichever path was stored first.
    Ok(GIT_EXECUTABLE.get_or_init(|| found).as_path())
}

/// Runs `git` with the given arguments and working directory, waiting
/// for it to exit and capturing stdout and stderr separately.
///
/// An empty `dir` means "inherit the current directory" — this is what
/// [`Repo::open`](crate::Repo::open) relies on when resolving a
/// repository from the empty path.
///
/// The library never echoes stderr anywhere: on a non-zero exit the
/// captured text travels inside the returned error and the caller
/// decides whether and where to display it.
///
/// # Errors
///
/// * `GitError::ExecutableNotFound` - git is not installed
/// * `GitshimError::Io` - the process could not be spawned
/// * `GitError::CommandFailed` - git exited non-zero; carries the
///   rendered command line and the captured stderr
pub fn run_git(dir: &Path, args: &[&str]) -> Result<GitOutput> {
    let git = git_executable()?;

    let mut command = Command::new(git);
    command.args(args);

    if !dir.as_os_str().is_empty() {
        command.current_dir(dir);
    }

    let output = command.output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(GitOutput { stdout, stderr })
    } else {
        Err(GitError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            stderr,
        }
        .into())
    }
}

fn lookup_path(cmd: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;

    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(cmd);
        if is_executable(&candidate) {
            return Some(candidate);
        }

        #[cfg(windows)]
        for ext in ["exe", "bat", "cmd"] {
            let candidate = dir.join(format!("{cmd}.{ext}"));
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.is_file()
        && path
            .metadata()
            .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

//! Repository Handle
//!
//! Opening a repository by resolving its top-level directory, plus the
//! helpers for files that live directly under `.git/` (the marker files
//! the state detector and cherry-pick recovery rely on).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    GIT_ROOT,
    errors::Result,
    git::runner::{GitOutput, run_git},
};

/// Handle to a git working tree.
///
/// Holds the absolute top-level path of the working tree and uses it as
/// the working directory for every subsequent `git` invocation. The
/// handle is an immutable snapshot: nothing is cached, and every method
/// re-reads external state at the moment of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    path: PathBuf,
}

impl Repo {
    /// Opens the repository containing `path`.
    ///
    /// Resolves the top-level working-tree directory via
    /// `git rev-parse --show-toplevel`. The empty path means "the
    /// current directory", so `Repo::open("")` opens whatever
    /// repository the process is currently inside.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` is not inside a git repository
    /// - The `git` executable cannot be found or started
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitshim::Repo;
    ///
    /// let repo = Repo::open("/home/me/project/src")?;
    /// println!("top level: {}", repo.path().display());
    /// # Ok::<(), gitshim::GitshimError>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let output = run_git(path.as_ref(), &["rev-parse", "--show-toplevel"])?;

        Ok(Self {
            path: PathBuf::from(output.stdout.trim_end_matches(['\r', '\n'])),
        })
    }

    /// Wraps an already-known top-level path without invoking git.
    ///
    /// No validation is performed; the caller is trusted to pass the
    /// root of a working tree (as returned by a previous [`Repo::open`]
    /// or an equivalent resolution).
    pub fn from_toplevel(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The absolute top-level path of the working tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `git` with the working tree as its working directory.
    pub(crate) fn run(&self, args: &[&str]) -> Result<GitOutput> {
        run_git(&self.path, args)
    }

    /// Absolute path of a file under the repository's `.git` directory.
    #[must_use]
    pub fn git_file_path(&self, name: &str) -> PathBuf {
        self.path.join(GIT_ROOT).join(name)
    }

    /// Checks whether a named file exists under `.git/`.
    ///
    /// "Not found" is a normal negative result; any other filesystem
    /// error (permissions, I/O) propagates.
    ///
    /// # Errors
    ///
    /// Returns `GitshimError::Io` for filesystem errors other than
    /// `NotFound`.
    pub fn has_git_file(&self, name: &str) -> Result<bool> {
        match fs::metadata(self.git_file_path(name)) {
            Ok(_) => Ok(true),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error.into()),
        }
    }

    /// Removes a named file under `.git/` (marker cleanup).
    ///
    /// # Errors
    ///
    /// Returns `GitshimError::Io` if the file does not exist or cannot
    /// be removed.
    pub fn remove_git_file(&self, name: &str) -> Result<()> {
        fs::remove_file(self.git_file_path(name))?;

        Ok(())
    }

    /// Reads a named file under `.git/` and returns its trimmed
    /// contents.
    pub(crate) fn read_git_file(&self, name: &str) -> Result<String> {
        let contents = fs::read_to_string(self.git_file_path(name))?;

        Ok(contents.trim().to_string())
    }
}

//! # gitshim
//!
//! A thin library wrapper around the `git` command-line tool.
//!
//! This crate does not reimplement any part of git. It locates the `git`
//! executable once per process, shells out to it with a fixed working
//! directory, and parses a handful of textual outputs (porcelain status
//! lines, rev-parse results, commit parents) into typed values. It also
//! inspects marker files under a repository's `.git` directory to tell
//! whether an operation (rebase, merge, cherry-pick, revert, bisect) is
//! in progress.
//!
//! Everything is synchronous: each call blocks until the spawned `git`
//! process exits or the filesystem check completes. Errors are returned
//! as structured values carrying the captured stderr; the library never
//! writes to the process's own error stream.
//!
//! ```no_run
//! use gitshim::Repo;
//!
//! let repo = Repo::open(".")?;
//! for entry in repo.status()? {
//!     println!("{:?} {}", entry.index_status, entry.old_path);
//! }
//! # Ok::<(), gitshim::GitshimError>(())
//! ```

pub mod errors;
pub mod git;

pub use errors::{GitError, GitshimError, Result};
pub use git::{CherryPickOutcome, GitOutput, Oid, Repo, RepoState, StatusEntry, StatusFlag};

/// Metadata directory of a Git repository or submodule.
pub const GIT_ROOT: &str = ".git";

//! Git Operations Module
//!
//! Everything that talks to the external `git` binary or to the files
//! under `.git/`. Split into focused submodules: subprocess plumbing,
//! the repository handle, revision queries, status parsing, in-progress
//! state detection, and the mutating commands.

pub mod commit;
pub mod repository;
pub mod revision;
pub mod runner;
pub mod state;
pub mod status;

pub use commit::CherryPickOutcome;
pub use repository::Repo;
pub use revision::Oid;
pub use runner::{GitOutput, git_executable, run_git};
pub use state::RepoState;
pub use status::{StatusEntry, StatusFlag, parse_status, status_flag_for_char};

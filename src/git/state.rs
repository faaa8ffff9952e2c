//! Repository State Detection
//!
//! Classifies the repository's in-progress operation by probing marker
//! files under `.git/`. Git leaves these behind while a rebase, merge,
//! cherry-pick, revert, bisect, or `git am` run is underway and removes
//! them when the operation completes or aborts.

use crate::{errors::Result, git::repository::Repo};

/// The in-progress operation of a working tree, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    /// No operation in progress.
    None,
    RebaseInteractive,
    RebaseMerge,
    Rebase,
    ApplyMailbox,
    ApplyMailboxOrRebase,
    Merge,
    Revert,
    CherryPick,
    Bisect,
}

/// Marker files checked in order; the first one that exists wins.
///
/// The order is the detection precedence: more specific rebase markers
/// come before the generic `rebase-apply` directory, so a rebase that
/// also left `MERGE_HEAD`-style debris still reports as a rebase.
const STATE_MARKERS: &[(&str, RepoState)] = &[
    ("rebase-merge/interactive", RepoState::RebaseInteractive),
    ("rebase-merge", RepoState::RebaseMerge),
    ("rebase-apply/rebasing", RepoState::Rebase),
    ("rebase-apply/applying", RepoState::ApplyMailbox),
    ("rebase-apply", RepoState::ApplyMailboxOrRebase),
    ("MERGE_HEAD", RepoState::Merge),
    ("REVERT_HEAD", RepoState::Revert),
    ("CHERRY_PICK_HEAD", RepoState::CherryPick),
    ("BISECT_LOG", RepoState::Bisect),
];

impl Repo {
    /// Detects the repository's current in-progress operation.
    ///
    /// Walks the fixed marker table in precedence order and returns the
    /// state of the first marker present; [`RepoState::None`] when no
    /// marker exists. Purely a filesystem probe — no subprocess is
    /// spawned.
    ///
    /// # Errors
    ///
    /// Returns `GitshimError::Io` if a marker check fails for a reason
    /// other than the file being absent.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitshim::{Repo, RepoState};
    ///
    /// let repo = Repo::open("")?;
    /// if repo.state()? == RepoState::Merge {
    ///     println!("merge in progress");
    /// }
    /// # Ok::<(), gitshim::GitshimError>(())
    /// ```
    pub fn state(&self) -> Result<RepoState> {
        for (marker, state) in STATE_MARKERS {
            if self.has_git_file(marker)? {
                return Ok(*state);
            }
        }

        Ok(RepoState::None)
    }
}

//! Mutating Operations
//!
//! Thin pass-throughs over `git add`, `commit`, `reset` and
//! `cherry-pick`. None of these parse git's output; they succeed or
//! fail with the command. The one exception is [`Repo::cherry_pick`],
//! which turns an expected conflict into a normal outcome instead of an
//! error.

use crate::{
    errors::Result,
    git::{repository::Repo, revision::Oid, state::RepoState},
};

/// Result of a [`Repo::cherry_pick`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CherryPickOutcome {
    /// The commit applied cleanly (possibly as an empty commit).
    Applied,
    /// The pick stopped on conflicts; the repository is left in
    /// [`RepoState::CherryPick`] until the caller resolves and calls
    /// [`Repo::cherry_pick_continue`] or aborts.
    Conflict,
}

impl Repo {
    /// Stages a path via `git add -- <path>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails.
    pub fn add(&self, path: &str) -> Result<()> {
        self.run(&["add", "--", path])?;

        Ok(())
    }

    /// Creates a commit reusing the message and author metadata of
    /// another commit (`git commit -C <oid> --no-edit --allow-empty`).
    ///
    /// No editor is opened and an empty commit is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails.
    pub fn commit_reuse(&self, original: &Oid) -> Result<()> {
        self.run(&[
            "commit",
            "-C",
            original.as_str(),
            "--no-edit",
            "--allow-empty",
        ])?;

        Ok(())
    }

    /// Amends the current commit without opening an editor, allowing
    /// the amended commit to be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails.
    pub fn commit_amend(&self) -> Result<()> {
        self.run(&["commit", "--amend", "--no-edit", "--allow-empty"])?;

        Ok(())
    }

    /// Hard-resets the working tree and index to a commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails.
    pub fn reset_hard(&self, commit: &Oid) -> Result<()> {
        self.run(&["reset", "--hard", commit.as_str()])?;

        Ok(())
    }

    /// Attempts to cherry-pick a commit
    /// (`git cherry-pick --allow-empty <oid>`).
    ///
    /// A conflicting pick is an expected result, not an error: when the
    /// command fails and the repository then reports
    /// [`RepoState::CherryPick`], this returns
    /// [`CherryPickOutcome::Conflict`] and leaves the conflict in place
    /// for the caller to resolve. Any other failure — including a
    /// failure to determine the state afterwards — raises the original
    /// command error, which carries the captured stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails for any reason other
    /// than a conflict.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitshim::{CherryPickOutcome, Repo};
    ///
    /// let repo = Repo::open("")?;
    /// let commit = repo.rev_parse("some-branch")?;
    ///
    /// match repo.cherry_pick(&commit)? {
    ///     CherryPickOutcome::Applied => println!("picked {commit}"),
    ///     CherryPickOutcome::Conflict => {
    ///         println!("conflict while picking {}", repo.cherry_pick_head()?);
    ///     }
    /// }
    /// # Ok::<(), gitshim::GitshimError>(())
    /// ```
    pub fn cherry_pick(&self, commit: &Oid) -> Result<CherryPickOutcome> {
        match self.run(&["cherry-pick", "--allow-empty", commit.as_str()]) {
            Ok(_) => Ok(CherryPickOutcome::Applied),
            Err(error) => match self.state() {
                Ok(RepoState::CherryPick) => Ok(CherryPickOutcome::Conflict),
                // On any other state, or when the state probe itself
                // fails, the original error wins: it is the one that
                // carries the cherry-pick's stderr.
                Ok(_) | Err(_) => Err(error),
            },
        }
    }

    /// Continues an in-progress cherry-pick after conflict resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails (e.g. conflicts are
    /// still unresolved or no cherry-pick is in progress).
    pub fn cherry_pick_continue(&self) -> Result<()> {
        self.run(&["cherry-pick", "--continue"])?;

        Ok(())
    }

    /// Returns the commit currently being cherry-picked.
    ///
    /// Reads `.git/CHERRY_PICK_HEAD` directly — no subprocess — so a
    /// caller recovering from a conflict can learn which commit is
    /// mid-pick without another git invocation.
    ///
    /// # Errors
    ///
    /// Returns `GitshimError::Io` if the marker file does not exist or
    /// cannot be read.
    pub fn cherry_pick_head(&self) -> Result<Oid> {
        Ok(Oid::from(self.read_git_file("CHERRY_PICK_HEAD")?))
    }
}

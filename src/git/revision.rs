//! Revision Queries
//!
//! Resolving references to object identifiers and reading commit
//! parents. Object identifiers stay opaque: git reports them, this
//! module passes them through without validating their shape.

use std::fmt;

use crate::{errors::Result, git::repository::Repo};

/// Opaque object identifier (commit/tree/blob hash) as reported by git.
///
/// A distinct type rather than a bare `String` so identifiers cannot be
/// mixed up with arbitrary text, but no internal structure is assumed
/// or checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid(String);

impl Oid {
    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Oid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Oid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Repo {
    /// Resolves a reference or revision expression to an object
    /// identifier via `git rev-parse <rev>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the revision cannot be resolved or the git
    /// command fails to execute.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitshim::Repo;
    ///
    /// let repo = Repo::open("")?;
    /// let head = repo.rev_parse("HEAD")?;
    /// println!("HEAD is {head}");
    /// # Ok::<(), gitshim::GitshimError>(())
    /// ```
    pub fn rev_parse(&self, rev: &str) -> Result<Oid> {
        let output = self.run(&["rev-parse", rev])?;

        Ok(Oid::from(output.stdout.trim_end_matches('\n')))
    }

    /// Resolves a reference to its abbreviated symbolic name via
    /// `git rev-parse --abbrev-ref <rev>` — for `HEAD` this is the
    /// current branch name (or the commit hash when detached).
    ///
    /// # Errors
    ///
    /// Returns an error if the revision cannot be resolved or the git
    /// command fails to execute.
    pub fn rev_parse_abbrev(&self, rev: &str) -> Result<String> {
        let output = self.run(&["rev-parse", "--abbrev-ref", rev])?;

        Ok(output.stdout.trim_end_matches('\n').to_string())
    }

    /// Returns the ordered parent identifiers of a commit.
    ///
    /// Uses `git show --raw --no-patch --format=format:%P`, which
    /// prints the parent hashes on one whitespace-separated line. An
    /// initial commit has no parents and yields an empty vector; a
    /// merge commit yields two or more.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be shown or the git
    /// command fails to execute.
    pub fn parents(&self, commit: &Oid) -> Result<Vec<Oid>> {
        let output = self.run(&[
            "show",
            "--raw",
            "--no-patch",
            "--format=format:%P",
            commit.as_str(),
        ])?;

        Ok(parse_parent_line(&output.stdout))
    }
}

/// Splits a `%P` format line into individual parent identifiers.
fn parse_parent_line(line: &str) -> Vec<Oid> {
    line.split_whitespace().map(Oid::from).collect()
}

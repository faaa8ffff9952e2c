//! Git Status Parsing
//!
//! Machine-readable status via `git status --porcelain -uno` and the
//! line parser that turns its output into typed entries.
//!
//! Each porcelain line is `XY <path>` where `X` is the index column,
//! `Y` the working-tree column, and the path payload starts at byte 3.
//! Renames and copies carry `old -> new` in the payload.

use crate::{
    errors::{GitError, Result},
    git::repository::Repo,
};

/// One column of a porcelain status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Unmodified,
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    /// `U` — unmerged, or updated but unmerged, depending on column.
    UnmergedUpdated,
}

/// One changed path from `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// The path as tracked before the change (the only path for
    /// anything that is not a rename or copy).
    pub old_path: String,
    /// Destination path, present only for renames and copies where the
    /// payload reads `old -> new`.
    pub new_path: Option<String>,
    /// Status of the path in the index.
    pub index_status: StatusFlag,
    /// Status of the path in the working tree.
    pub work_tree_status: StatusFlag,
}

/// Maps one porcelain status character to its [`StatusFlag`].
///
/// # Errors
///
/// Returns `GitError::UnknownStatusFlag` naming the character when it
/// is not in the known set (space, `M`, `A`, `D`, `R`, `C`, `U`).
pub fn status_flag_for_char(c: char) -> Result<StatusFlag> {
    match c {
        ' ' => Ok(StatusFlag::Unmodified),
        'M' => Ok(StatusFlag::Modified),
        'A' => Ok(StatusFlag::Added),
        'D' => Ok(StatusFlag::Deleted),
        'R' => Ok(StatusFlag::Renamed),
        'C' => Ok(StatusFlag::Copied),
        'U' => Ok(StatusFlag::UnmergedUpdated),
        _ => Err(GitError::UnknownStatusFlag { flag: c }.into()),
    }
}

/// Parses complete `git status --porcelain` output.
///
/// Empty lines (including the trailing one after the final newline) are
/// skipped; everything else must be a well-formed porcelain line. Entry
/// order is git's output order.
///
/// # Errors
///
/// Returns an error if any line is shorter than 4 bytes or carries an
/// unrecognized status character. A single malformed line fails the
/// whole parse.
pub fn parse_status(output: &str) -> Result<Vec<StatusEntry>> {
    let mut entries = Vec::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }

        entries.push(parse_status_line(line)?);
    }

    Ok(entries)
}

fn parse_status_line(line: &str) -> Result<StatusEntry> {
    let bytes = line.as_bytes();

    // `XY path` needs at least the two columns, the separator, and one
    // payload byte. The boundary check also rejects a payload starting
    // mid-character, which no real porcelain line produces.
    if bytes.len() < 4 || !line.is_char_boundary(3) {
        return Err(GitError::StatusLineTooShort {
            line: line.to_string(),
        }
        .into());
    }

    let index_status = status_flag_for_char(bytes[0] as char)?;
    let work_tree_status = status_flag_for_char(bytes[1] as char)?;

    let payload = &line[3..];
    let (old_path, new_path) = match payload.split_once(" -> ") {
        Some((old, new)) => (old.to_string(), Some(new.to_string())),
        None => (payload.to_string(), None),
    };

    Ok(StatusEntry {
        old_path,
        new_path,
        index_status,
        work_tree_status,
    })
}

impl Repo {
    /// Lists changed paths via `git status --porcelain -uno`.
    ///
    /// Untracked files are excluded (`-uno`); entries come back in
    /// git's output order.
    ///
    /// # Errors
    ///
    /// Returns an error if the git command fails or any output line is
    /// malformed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitshim::{Repo, StatusFlag};
    ///
    /// let repo = Repo::open("")?;
    /// for entry in repo.status()? {
    ///     if entry.index_status == StatusFlag::Renamed {
    ///         println!(
    ///             "{} -> {}",
    ///             entry.old_path,
    ///             entry.new_path.as_deref().unwrap_or("?")
    ///         );
    ///     }
    /// }
    /// # Ok::<(), gitshim::GitshimError>(())
    /// ```
    pub fn status(&self) -> Result<Vec<StatusEntry>> {
        let output = self.run(&["status", "--porcelain", "-uno"])?;

        parse_status(&output.stdout)
    }
}

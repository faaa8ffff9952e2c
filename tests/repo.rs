//! Integration tests driving the real `git` binary against throwaway
//! repositories. Every test is skipped (with a note on stderr) when git
//! is not installed, so the unit suite stays runnable anywhere.

use std::{fs, path::Path, process::Command};

use gitshim::{CherryPickOutcome, Oid, Repo, RepoState, StatusFlag, git::git_executable};
use tempfile::TempDir;

/// A temporary working tree with identity configured, plus the handle
/// under test. Setup goes through raw `git` commands so the library is
/// only exercised by the assertions.
struct TestRepo {
    // Held for its Drop; the path is reachable through `repo`.
    _dir: TempDir,
    repo: Repo,
}

impl TestRepo {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();

        git(dir.path(), &["init", "-q"]);
        git(dir.path(), &["config", "user.email", "test@example.com"]);
        git(dir.path(), &["config", "user.name", "Test"]);
        git(dir.path(), &["config", "commit.gpgsign", "false"]);
        git(dir.path(), &["config", "core.editor", "true"]);

        let repo = Repo::open(dir.path()).unwrap();

        Self { _dir: dir, repo }
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.repo.path().join(name), contents).unwrap();
    }

    /// Stages everything and commits, returning the new commit id.
    fn commit_all(&self, message: &str) -> Oid {
        git(self.repo.path(), &["add", "-A"]);
        git(self.repo.path(), &["commit", "-q", "-m", message]);

        self.repo.rev_parse("HEAD").unwrap()
    }

    fn git(&self, args: &[&str]) {
        git(self.repo.path(), args);
    }
}

/// Runs a raw git command for test setup, panicking on failure.
fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "setup `git {args:?}` failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Returns true (and logs) when git is missing and the test should be
/// a no-op.
fn skip_without_git() -> bool {
    if git_executable().is_err() {
        eprintln!("skipping: git not installed");
        return true;
    }

    false
}

#[test]
fn open_resolves_toplevel_from_subdirectory() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "hello\n");
    test_repo.commit_all("initial");

    let subdir = test_repo.repo.path().join("sub/dir");
    fs::create_dir_all(&subdir).unwrap();

    let reopened = Repo::open(&subdir).unwrap();

    // Canonicalize both sides; on macOS the tempdir sits behind the
    // /private symlink.
    assert_eq!(
        fs::canonicalize(reopened.path()).unwrap(),
        fs::canonicalize(test_repo.repo.path()).unwrap()
    );
}

#[test]
fn open_outside_a_repository_fails() {
    if skip_without_git() {
        return;
    }

    let dir = TempDir::new().unwrap();

    assert!(Repo::open(dir.path()).is_err());
}

#[test]
fn rev_parse_abbrev_round_trips_through_rev_parse() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "hello\n");
    test_repo.commit_all("initial");

    let direct = test_repo.repo.rev_parse("HEAD").unwrap();
    let branch = test_repo.repo.rev_parse_abbrev("HEAD").unwrap();
    let via_branch = test_repo.repo.rev_parse(&branch).unwrap();

    assert_eq!(via_branch, direct);
    assert!(!branch.is_empty());
}

#[test]
fn parents_of_initial_second_and_merge_commits() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    let branch = {
        test_repo.write("f.txt", "one\n");
        let first = test_repo.commit_all("first");
        assert!(test_repo.repo.parents(&first).unwrap().is_empty());
        test_repo.repo.rev_parse_abbrev("HEAD").unwrap()
    };

    test_repo.write("f.txt", "two\n");
    let second = test_repo.commit_all("second");
    let first = test_repo.repo.rev_parse("HEAD~1").unwrap();
    assert_eq!(test_repo.repo.parents(&second).unwrap(), vec![first]);

    // A merge commit lists both parents, current branch first.
    test_repo.git(&["checkout", "-q", "-b", "side", "HEAD~1"]);
    test_repo.write("g.txt", "side\n");
    let side_tip = test_repo.commit_all("side work");

    test_repo.git(&["checkout", "-q", &branch]);
    test_repo.git(&["merge", "-q", "--no-ff", "-m", "merge side", "side"]);

    let merge = test_repo.repo.rev_parse("HEAD").unwrap();
    assert_eq!(
        test_repo.repo.parents(&merge).unwrap(),
        vec![second, side_tip]
    );
}

#[test]
fn status_reports_added_file_after_add() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "hello\n");
    test_repo.commit_all("initial");

    // Untracked files are excluded, so the new file only shows up once
    // it is staged.
    test_repo.write("new.txt", "fresh\n");
    assert!(test_repo.repo.status().unwrap().is_empty());

    test_repo.repo.add("new.txt").unwrap();

    let entries = test_repo.repo.status().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].old_path, "new.txt");
    assert_eq!(entries[0].new_path, None);
    assert_eq!(entries[0].index_status, StatusFlag::Added);
    assert_eq!(entries[0].work_tree_status, StatusFlag::Unmodified);
}

#[test]
fn status_reports_rename_with_both_paths() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("old.txt", "some contents to carry across the rename\n");
    test_repo.commit_all("initial");

    test_repo.git(&["mv", "old.txt", "new.txt"]);

    let entries = test_repo.repo.status().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].index_status, StatusFlag::Renamed);
    assert_eq!(entries[0].old_path, "old.txt");
    assert_eq!(entries[0].new_path.as_deref(), Some("new.txt"));
}

#[test]
fn clean_cherry_pick_applies() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "base\n");
    test_repo.commit_all("initial");
    let branch = test_repo.repo.rev_parse_abbrev("HEAD").unwrap();

    test_repo.git(&["checkout", "-q", "-b", "side"]);
    test_repo.write("g.txt", "side\n");
    let side_commit = test_repo.commit_all("add g");

    test_repo.git(&["checkout", "-q", &branch]);

    let outcome = test_repo.repo.cherry_pick(&side_commit).unwrap();

    assert_eq!(outcome, CherryPickOutcome::Applied);
    assert!(test_repo.repo.path().join("g.txt").exists());
    assert_eq!(test_repo.repo.state().unwrap(), RepoState::None);
}

#[test]
fn conflicting_cherry_pick_is_a_soft_failure() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "base\n");
    let base = test_repo.commit_all("base");
    let branch = test_repo.repo.rev_parse_abbrev("HEAD").unwrap();

    test_repo.write("f.txt", "ours\n");
    test_repo.commit_all("ours");

    test_repo.git(&["checkout", "-q", "-b", "side", base.as_str()]);
    test_repo.write("f.txt", "theirs\n");
    let theirs = test_repo.commit_all("theirs");

    test_repo.git(&["checkout", "-q", &branch]);

    // Both sides changed the same line of f.txt, so the pick must stop
    // on a conflict without raising an error.
    let outcome = test_repo.repo.cherry_pick(&theirs).unwrap();
    assert_eq!(outcome, CherryPickOutcome::Conflict);

    assert_eq!(test_repo.repo.state().unwrap(), RepoState::CherryPick);
    assert_eq!(test_repo.repo.cherry_pick_head().unwrap(), theirs);

    // Resolve in favour of the picked commit and continue.
    test_repo.write("f.txt", "theirs\n");
    test_repo.repo.add("f.txt").unwrap();
    test_repo.repo.cherry_pick_continue().unwrap();

    assert_eq!(test_repo.repo.state().unwrap(), RepoState::None);
    assert!(!test_repo.repo.has_git_file("CHERRY_PICK_HEAD").unwrap());
}

#[test]
fn cherry_picking_garbage_is_a_hard_failure() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "base\n");
    test_repo.commit_all("initial");

    let bogus = Oid::from("0000000000000000000000000000000000000000");

    assert!(test_repo.repo.cherry_pick(&bogus).is_err());
    assert_eq!(test_repo.repo.state().unwrap(), RepoState::None);
}

#[test]
fn commit_reuse_copies_the_original_message() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "one\n");
    let original = test_repo.commit_all("a very particular message");

    test_repo.write("f.txt", "two\n");
    test_repo.repo.add("f.txt").unwrap();
    test_repo.repo.commit_reuse(&original).unwrap();

    let head = test_repo.repo.rev_parse("HEAD").unwrap();
    assert_ne!(head, original);

    let output = Command::new("git")
        .args(["log", "-1", "--format=%s"])
        .current_dir(test_repo.repo.path())
        .output()
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "a very particular message"
    );
}

#[test]
fn commit_amend_folds_staged_changes_into_head() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "one\n");
    test_repo.commit_all("first");

    test_repo.write("f.txt", "two\n");
    let before_amend = test_repo.commit_all("second");
    let parents = test_repo.repo.parents(&before_amend).unwrap();

    test_repo.write("g.txt", "extra\n");
    test_repo.repo.add("g.txt").unwrap();
    test_repo.repo.commit_amend().unwrap();

    let amended = test_repo.repo.rev_parse("HEAD").unwrap();
    assert_ne!(amended, before_amend);
    // Amending rewrites the tip in place, keeping its parents.
    assert_eq!(test_repo.repo.parents(&amended).unwrap(), parents);
    assert!(test_repo.repo.status().unwrap().is_empty());
}

#[test]
fn reset_hard_moves_head_and_cleans_the_tree() {
    if skip_without_git() {
        return;
    }

    let test_repo = TestRepo::new();
    test_repo.write("f.txt", "one\n");
    let first = test_repo.commit_all("first");

    test_repo.write("f.txt", "two\n");
    test_repo.commit_all("second");

    test_repo.repo.reset_hard(&first).unwrap();

    assert_eq!(test_repo.repo.rev_parse("HEAD").unwrap(), first);
    assert_eq!(
        fs::read_to_string(test_repo.repo.path().join("f.txt")).unwrap(),
        "one\n"
    );
    assert!(test_repo.repo.status().unwrap().is_empty());
}

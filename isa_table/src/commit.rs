// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change detection and grouped artifact commit.
//!
//! The four group artifacts are staged next to their committed counterparts,
//! byte-compared, and then either all replace the committed set or all are
//! discarded. A partial commit is impossible in this protocol, so the group
//! can never drift out of sync with itself. The no-change path never opens a
//! committed file for writing, which keeps timestamps intact and downstream
//! incremental builds quiet.
//!
//! The test driver bypasses all of this: [`install_harness`] rewrites it
//! unconditionally and marks it executable.

use core::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::render::Artifact;

/// Suffix of staged, not-yet-committed artifact files.
const STAGE_SUFFIX: &str = ".tmp";

/// An I/O failure during staging, comparison, or commit.
#[derive(Debug)]
pub struct CommitError {
    op: &'static str,
    path: PathBuf,
    source: io::Error,
}

impl CommitError {
    fn new(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the path the failing operation was applied to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} {}", self.op, self.path.display())
    }
}

impl std::error::Error for CommitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Outcome of a group commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// At least one artifact changed; the whole group was replaced.
    Committed,
    /// No artifact changed; the committed set was left untouched.
    Unchanged,
}

/// Stages, compares, and commits the artifact group under `out_dir`.
///
/// Every artifact is first written to `<name>.tmp`. If any staged text
/// differs from its committed counterpart (an absent counterpart counts as
/// differing), every staged file is renamed over its counterpart; otherwise
/// every staged file is removed and the committed set keeps its timestamps.
///
/// # Errors
///
/// Returns a [`CommitError`] naming the failing path if the output directory
/// cannot be created or any stage, compare, rename, or cleanup step fails.
pub fn commit_group(out_dir: &Path, group: &[Artifact]) -> Result<CommitOutcome, CommitError> {
    fs::create_dir_all(out_dir).map_err(|e| CommitError::new("create", out_dir, e))?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(group.len());
    for artifact in group {
        let committed = out_dir.join(artifact.file_name);
        let tmp = out_dir.join(format!("{}{STAGE_SUFFIX}", artifact.file_name));
        fs::write(&tmp, artifact.text.as_bytes())
            .map_err(|e| CommitError::new("write", &tmp, e))?;
        staged.push((tmp, committed));
    }

    let mut changed = false;
    for (artifact, (_, committed)) in group.iter().zip(&staged) {
        if differs(committed, &artifact.text)? {
            changed = true;
            break;
        }
    }

    if changed {
        for (tmp, committed) in &staged {
            fs::rename(tmp, committed).map_err(|e| CommitError::new("rename", tmp, e))?;
        }
        Ok(CommitOutcome::Committed)
    } else {
        for (tmp, _) in &staged {
            fs::remove_file(tmp).map_err(|e| CommitError::new("remove", tmp, e))?;
        }
        Ok(CommitOutcome::Unchanged)
    }
}

/// Compares the artifact group against the committed files without writing.
///
/// Returns the file names that would change if committed now, in group
/// order. Empty means the committed set is up to date.
///
/// # Errors
///
/// Returns a [`CommitError`] if a committed file exists but cannot be read.
pub fn check_group(out_dir: &Path, group: &[Artifact]) -> Result<Vec<&'static str>, CommitError> {
    let mut drifted = Vec::new();
    for artifact in group {
        let committed = out_dir.join(artifact.file_name);
        if differs(&committed, &artifact.text)? {
            drifted.push(artifact.file_name);
        }
    }
    Ok(drifted)
}

/// Writes the test driver into `test_dir` and marks it executable.
///
/// The driver is not part of the diffed group; it is rewritten on every run.
/// Returns the installed path.
///
/// # Errors
///
/// Returns a [`CommitError`] if the directory, the write, or the permission
/// change fails.
pub fn install_harness(test_dir: &Path, harness: &Artifact) -> Result<PathBuf, CommitError> {
    fs::create_dir_all(test_dir).map_err(|e| CommitError::new("create", test_dir, e))?;
    let path = test_dir.join(harness.file_name);
    fs::write(&path, harness.text.as_bytes()).map_err(|e| CommitError::new("write", &path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .map_err(|e| CommitError::new("chmod", &path, e))?;
    }

    Ok(path)
}

/// Returns `true` if `committed` is absent or its bytes differ from `text`.
fn differs(committed: &Path, text: &str) -> Result<bool, CommitError> {
    match fs::read(committed) {
        Ok(old) => Ok(old != text.as_bytes()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(CommitError::new("read", committed, e)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::{CommitOutcome, check_group, commit_group, install_harness};
    use crate::render::Artifact;

    fn group(marker: &str) -> [Artifact; 4] {
        [
            Artifact {
                file_name: "opcode_gen.rs",
                text: format!("enum {marker}\n"),
            },
            Artifact {
                file_name: "handlers_gen.rs",
                text: format!("trait {marker}\n"),
            },
            Artifact {
                file_name: "dispatch_gen.rs",
                text: format!("dispatch {marker}\n"),
            },
            Artifact {
                file_name: "disasm_gen.rs",
                text: format!("disasm {marker}\n"),
            },
        ]
    }

    fn no_stage_files_left(dir: &Path) {
        for entry in fs::read_dir(dir).unwrap() {
            let name = entry.unwrap().file_name();
            assert!(
                !name.to_string_lossy().ends_with(".tmp"),
                "staged file left behind: {name:?}"
            );
        }
    }

    #[test]
    fn first_commit_writes_all_four() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = commit_group(dir.path(), &group("a")).unwrap();
        assert_eq!(outcome, CommitOutcome::Committed);
        for artifact in &group("a") {
            assert_eq!(
                fs::read_to_string(dir.path().join(artifact.file_name)).unwrap(),
                artifact.text
            );
        }
        no_stage_files_left(dir.path());
    }

    #[test]
    fn unchanged_rerun_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        commit_group(dir.path(), &group("a")).unwrap();

        let mtimes: Vec<_> = group("a")
            .iter()
            .map(|a| {
                fs::metadata(dir.path().join(a.file_name))
                    .unwrap()
                    .modified()
                    .unwrap()
            })
            .collect();

        let outcome = commit_group(dir.path(), &group("a")).unwrap();
        assert_eq!(outcome, CommitOutcome::Unchanged);

        for (artifact, before) in group("a").iter().zip(mtimes) {
            let after = fs::metadata(dir.path().join(artifact.file_name))
                .unwrap()
                .modified()
                .unwrap();
            assert_eq!(before, after, "{} was touched", artifact.file_name);
        }
        no_stage_files_left(dir.path());
    }

    #[test]
    fn one_changed_artifact_replaces_the_whole_group() {
        let dir = tempfile::tempdir().unwrap();
        commit_group(dir.path(), &group("a")).unwrap();

        let mut next = group("a");
        next[2].text = "dispatch b\n".to_owned();
        let outcome = commit_group(dir.path(), &next).unwrap();
        assert_eq!(outcome, CommitOutcome::Committed);

        for artifact in &next {
            assert_eq!(
                fs::read_to_string(dir.path().join(artifact.file_name)).unwrap(),
                artifact.text
            );
        }
        no_stage_files_left(dir.path());
    }

    #[test]
    fn absent_counterpart_counts_as_drift() {
        let dir = tempfile::tempdir().unwrap();
        commit_group(dir.path(), &group("a")).unwrap();
        fs::remove_file(dir.path().join("disasm_gen.rs")).unwrap();

        assert_eq!(
            check_group(dir.path(), &group("a")).unwrap(),
            ["disasm_gen.rs"]
        );
        assert_eq!(
            commit_group(dir.path(), &group("a")).unwrap(),
            CommitOutcome::Committed
        );
    }

    #[test]
    fn check_reports_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let drifted = check_group(dir.path(), &group("a")).unwrap();
        assert_eq!(drifted.len(), 4);
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());

        commit_group(dir.path(), &group("a")).unwrap();
        assert!(check_group(dir.path(), &group("a")).unwrap().is_empty());
    }

    #[test]
    fn harness_is_always_rewritten_and_executable() {
        let dir = tempfile::tempdir().unwrap();
        let harness = Artifact {
            file_name: "run.sh",
            text: "#!/bin/sh\n".to_owned(),
        };
        let path = install_harness(dir.path(), &harness).unwrap();
        let first = fs::metadata(&path).unwrap().modified().unwrap();

        // A second install rewrites even with identical content.
        let path = install_harness(dir.path(), &harness).unwrap();
        let second = fs::metadata(&path).unwrap().modified().unwrap();
        assert!(second >= first);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }
}

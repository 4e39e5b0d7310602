// scanner crate

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Folder does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Not a folder: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read folder {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whether `path` carries one of `extensions`.
///
/// Extensions may be given with or without the leading dot and are compared
/// case-insensitively.
pub fn has_workflow_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy();

    extensions.iter().any(|candidate| {
        candidate
            .as_ref()
            .trim_start_matches('.')
            .eq_ignore_ascii_case(&ext)
    })
}

/// List the workflow files directly inside `folder`.
///
/// Subdirectories are not descended into, and anything that is not a regular
/// file (after following symlinks) is skipped.
pub fn scan_folder<S: AsRef<str>>(
    folder: &Path,
    extensions: &[S],
) -> Result<Vec<PathBuf>, ScanError> {
    if !folder.exists() {
        return Err(ScanError::NotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(ScanError::NotADirectory(folder.to_path_buf()));
    }

    let unreadable = |source: io::Error| ScanError::Unreadable {
        path: folder.to_path_buf(),
        source,
    };

    let mut workflows = Vec::new();
    for entry in fs::read_dir(folder).map_err(unreadable)? {
        let entry_path = entry.map_err(unreadable)?.path();

        if entry_path.is_file() && has_workflow_extension(&entry_path, extensions) {
            workflows.push(entry_path);
        }
    }

    workflows.sort();
    Ok(workflows)
}

/// Scan every folder, failing on the first one that cannot be listed.
///
/// The result is sorted and duplicate paths are dropped. Paths are compared
/// by component, so `ci` and `ci/.` collapse to one entry, but `ci` and
/// `./ci` do not; folders are not canonicalized.
pub fn scan_folders<P, S>(folders: &[P], extensions: &[S]) -> Result<Vec<PathBuf>, ScanError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut workflows = BTreeSet::new();

    for folder in folders {
        let folder = folder.as_ref();
        let found = scan_folder(folder, extensions)?;
        logging::debug(&format!(
            "Found {} workflow file(s) in {}",
            found.len(),
            folder.display()
        ));
        workflows.extend(found);
    }

    Ok(workflows.into_iter().collect())
}

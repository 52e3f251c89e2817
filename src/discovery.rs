//! Per-directory child enumeration.
//!
//! One directory at a time: list entries, drop ignored names, sort by name,
//! classify each survivor as directory or not. The walk over the whole tree
//! lives in [`crate::rendering`]; this module owns the one step where the
//! filesystem can legitimately disappear out from under us.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::IgnoreSet;

/// One surviving entry of a listed directory.
#[derive(Debug, Clone)]
pub struct Child {
    /// Display form of the base name.
    pub name: String,
    /// Full path, for recursion into subdirectories.
    pub path: PathBuf,
    /// The platform's standard directory check on `path`. Follows symlinks;
    /// reports false when the check itself fails, so a broken link
    /// classifies as a non-directory.
    pub is_dir: bool,
}

/// List the direct children of `dir`, filtered and sorted.
///
/// ## Arguments
/// - `dir`: directory to enumerate
/// - `ignores`: names to drop, matched exactly against each base name
///
/// ## Returns
/// - `Ok(Some(children))`: filtered children in ascending name order
/// - `Ok(None)`: the directory does not exist (it vanished since being
///   listed by its parent, or is a dangling symlink) - the caller abandons
///   this branch and renders nothing for it
/// - `Err(..)`: any other listing failure. Only "missing at listing time"
///   is recoverable; permission and I/O errors stay fatal.
pub fn list_children(dir: &Path, ignores: &IgnoreSet) -> Result<Option<Vec<Child>>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to list '{}'", dir.display()));
        }
    };

    let mut children = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read an entry of '{}'", dir.display()))?;
        let file_name = entry.file_name();
        if ignores.contains(&file_name) {
            continue;
        }
        let path = entry.path();
        children.push(Child {
            name: file_name.to_string_lossy().into_owned(),
            is_dir: path.is_dir(),
            path,
        });
    }

    // Sort by name for deterministic output across runs.
    children.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Some(children))
}

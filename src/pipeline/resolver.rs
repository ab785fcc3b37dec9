// Locates cursor files under the search root and builds the theme manifest

use anyhow::{Context, Result};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Error;
use crate::logging::LogSink;
use crate::model::{CursorEntry, CursorRole, CursorRoleSet, THEME_VERSION, ThemeDescriptor};

/// Builds the manifest for `roles`, assuming every cursor file lives in the directory
/// that holds the default cursor. `search_root` should already be canonical.
pub fn resolve<S: LogSink>(
    theme_name: &str,
    roles: &CursorRoleSet,
    search_root: &Path,
    sink: &mut S,
) -> Result<ThemeDescriptor> {
    let base_dir = resolve_base_dir(roles.get(CursorRole::Default), search_root, sink)?;
    sink.info(format!("Using cursor directory {}", base_dir.display()));

    let cursors = roles.iter().map(|(role, raw)| {
        let input = as_input(raw, &base_dir, search_root);
        if !input.is_empty() {
            sink.debug(format!("{role}: {input}"));
        }
        CursorEntry::for_role(role, input)
    });

    // `new` drops roles whose input is empty.
    let theme = ThemeDescriptor::new(theme_name, THEME_VERSION, cursors.collect::<Vec<_>>());
    Ok(theme)
}

/// Directory containing the first file under `search_root` named like the default
/// cursor. Falls back to the nominal directory of that cursor, joined to `search_root`.
pub fn resolve_base_dir<S: LogSink>(
    nominal: &str,
    search_root: &Path,
    sink: &mut S,
) -> Result<PathBuf> {
    let fallback = match parent_of(nominal) {
        "" => search_root.to_path_buf(),
        parent => search_root.join(parent),
    };
    let file_name = file_name_of(nominal);

    if file_name.is_empty() {
        sink.warn("Scheme has no default cursor, cannot locate cursor files".to_string());
        return Ok(fallback);
    }

    match find_file(search_root, file_name)? {
        Some(found) => Ok(found
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| search_root.to_path_buf())),
        None => {
            let warning = Error::CursorFileNotFound {
                file_name: file_name.to_string(),
                search_root: search_root.to_path_buf(),
            };
            sink.warn(format!("{warning}, using {}", fallback.display()));
            Ok(fallback)
        }
    }
}

/// Walks in file-name order so repeated runs pick the same match. A symlink counts
/// when its target is a regular file.
fn find_file(root: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to search {}", root.display()))?;
        if entry.file_name() == file_name && entry.path().is_file() {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}

/// `raw`'s file name placed in `base_dir`, as a `./`-prefixed path when it falls
/// under `search_root`. An empty `raw` stays empty.
pub fn as_input(raw: &str, base_dir: &Path, search_root: &Path) -> String {
    let file_name = file_name_of(raw);
    if file_name.is_empty() {
        return String::new();
    }

    let path = base_dir.join(file_name);
    match path.strip_prefix(search_root) {
        Ok(relative) => format!("./{}", to_posix(relative)),
        Err(_) => to_posix(&path),
    }
}

fn file_name_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn parent_of(path: &str) -> &str {
    path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or_default()
}

fn to_posix(path: &Path) -> String {
    path.to_string_lossy().replace(MAIN_SEPARATOR, "/")
}

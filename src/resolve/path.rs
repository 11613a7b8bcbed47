//! Search-path lookup: the first owner-executable `entry/name` in `PATH` order.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::config::{EmptyPathEntry, Environment, Settings};
use crate::error::{Error, Result};
use crate::resolve::PathLookup;
use crate::resolve::types::Executable;

/// Same bound the kernel uses for nested symlinks (`MAXSYMLINKS`).
const MAX_LINK_HOPS: usize = 40;

/// Scans a captured `PATH` value for executables.
#[derive(Debug, Clone)]
pub struct PathSearch {
    path_var: Option<String>,
    empty_entries: EmptyPathEntry,
    follow_symlinks: bool,
}

impl PathSearch {
    /// Search over the given `PATH` value. `None` means `PATH` was unset, which
    /// only becomes an error once a scan is needed.
    pub fn new(path_var: Option<String>) -> Self {
        Self {
            path_var,
            empty_entries: EmptyPathEntry::default(),
            follow_symlinks: true,
        }
    }

    pub fn from_config(env: &Environment, settings: &Settings) -> Self {
        Self::new(env.path.clone())
            .empty_entries(settings.empty_path_entries)
            .follow_symlinks(settings.follow_symlinks)
    }

    pub fn empty_entries(mut self, policy: EmptyPathEntry) -> Self {
        self.empty_entries = policy;
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Directory entries in search order, after applying the empty-entry policy
    /// and tilde expansion.
    fn entries(&self) -> Result<Vec<PathBuf>> {
        let path_var = self.path_var.as_deref().ok_or(Error::MissingEnv("PATH"))?;
        let mut dirs = Vec::new();
        for entry in path_var.split(':') {
            if entry.is_empty() {
                match self.empty_entries {
                    EmptyPathEntry::Skip => {
                        log::debug!("skipping empty PATH entry");
                        continue;
                    }
                    EmptyPathEntry::CurrentDir => dirs.push(PathBuf::from(".")),
                }
            } else {
                dirs.push(PathBuf::from(shellexpand::tilde(entry).as_ref()));
            }
        }
        Ok(dirs)
    }

    fn matched(&self, path: PathBuf) -> Executable {
        let links = if self.follow_symlinks {
            follow_links(&path)
        } else {
            Vec::new()
        };
        Executable { path, links }
    }
}

impl PathLookup for PathSearch {
    fn find(&self, name: &str) -> Result<Option<Executable>> {
        // A name with a slash is a file path, never looked up in PATH
        if name.contains('/') {
            let candidate = PathBuf::from(name);
            if is_user_executable(&candidate) {
                log::debug!("{name} is a direct path to an executable");
                return Ok(Some(self.matched(candidate)));
            }
            return Ok(None);
        }

        for dir in self.entries()? {
            let candidate = dir.join(name);
            log::trace!("checking {}", candidate.display());
            if is_user_executable(&candidate) {
                log::debug!("{name} found at {}", candidate.display());
                return Ok(Some(self.matched(candidate)));
            }
        }
        Ok(None)
    }
}

/// A regular file (following symlinks, like `stat`) with the owner-execute bit.
/// Directories carry the x bit too and must not match.
fn is_user_executable(path: &Path) -> bool {
    fs::metadata(path)
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o100 != 0)
}

/// Each hop of the symlink chain starting at `path`. Relative link targets are
/// resolved against the directory holding the link. An unreadable link ends
/// the chain; the match itself stands.
fn follow_links(path: &Path) -> Vec<PathBuf> {
    let mut links = Vec::new();
    let mut current = path.to_path_buf();
    for _ in 0..MAX_LINK_HOPS {
        let Ok(meta) = fs::symlink_metadata(&current) else {
            break;
        };
        if !meta.file_type().is_symlink() {
            break;
        }
        let target = match fs::read_link(&current) {
            Ok(target) => target,
            Err(e) => {
                log::warn!("cannot read link {}: {e}", current.display());
                break;
            }
        };
        let next = match current.parent() {
            Some(parent) if target.is_relative() => parent.join(target),
            _ => target,
        };
        links.push(next.clone());
        current = next;
    }
    links
}

//! Types produced by the classifier and path search and consumed by the walker.

use std::path::PathBuf;

use serde::Serialize;

/// An alias definition as reported by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasMatch {
    /// The shell that reported the alias.
    pub shell: String,
    /// Full alias body, e.g. `ls --color=auto -la`.
    pub declaration: String,
    /// First whitespace-delimited token of `declaration`: the next name to resolve.
    pub target: String,
}

/// What the shell says a name is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    Builtin,
    Alias(AliasMatch),
    /// The shell gave no builtin or alias answer.
    None,
}

impl Classification {
    pub fn is_none(&self) -> bool {
        matches!(self, Classification::None)
    }
}

/// An executable found by path search.
///
/// `path` had the owner-executable bit set when it was checked. `links` holds
/// each symlink target followed from `path`, in order; the last entry (or
/// `path` itself when empty) is the real file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Executable {
    pub path: PathBuf,
    pub links: Vec<PathBuf>,
}

impl Executable {
    /// The file that is ultimately executed, after following any links.
    pub fn target(&self) -> &PathBuf {
        self.links.last().unwrap_or(&self.path)
    }
}

/// Result of resolving a single name.
///
/// `Classified` never carries [`Classification::None`]; a lookup that found
/// nothing is represented by the resolver returning `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "via", rename_all = "snake_case")]
pub enum Lookup {
    Classified(Classification),
    OnPath(Executable),
}

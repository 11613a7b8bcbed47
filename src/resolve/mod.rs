//! Single-name resolution: ask the shell first, fall back to the search path.

pub mod path;
pub mod shell;
pub mod types;

pub use path::PathSearch;
pub use shell::{ShellClassifier, parse_type_output};
pub use types::{AliasMatch, Classification, Executable, Lookup};

use crate::config::{Environment, Settings};
use crate::error::Result;

/// Asks something (normally an interactive shell) what a name is.
///
/// Implementations must not retain state between calls.
pub trait Classifier {
    fn classify(&self, name: &str) -> Result<Classification>;
}

/// Finds a name on the search path.
pub trait PathLookup {
    fn find(&self, name: &str) -> Result<Option<Executable>>;
}

/// Which sub-lookups [`Resolver::resolve`] should leave out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Skip {
    pub classify: bool,
    pub path: bool,
}

impl Skip {
    pub const NONE: Skip = Skip {
        classify: false,
        path: false,
    };
}

/// Combines a [`Classifier`] and a [`PathLookup`] into one lookup per name.
pub struct Resolver {
    classifier: Box<dyn Classifier>,
    path: Box<dyn PathLookup>,
}

impl Resolver {
    pub fn new(classifier: Box<dyn Classifier>, path: Box<dyn PathLookup>) -> Self {
        Self { classifier, path }
    }

    /// Resolver backed by the real shell and `PATH`, both taken from `env`.
    pub fn from_config(env: &Environment, settings: &Settings) -> Self {
        Self::new(
            Box::new(ShellClassifier::from_config(env, settings)),
            Box::new(PathSearch::from_config(env, settings)),
        )
    }

    /// Resolve one name. A shell answer (builtin or alias) wins and the path is
    /// then never searched. `Ok(None)` means neither lookup found anything.
    pub fn resolve(&self, name: &str, skip: Skip) -> Result<Option<Lookup>> {
        if !skip.classify {
            let classification = self.classifier.classify(name)?;
            if !classification.is_none() {
                return Ok(Some(Lookup::Classified(classification)));
            }
        }
        if !skip.path
            && let Some(executable) = self.path.find(name)?
        {
            return Ok(Some(Lookup::OnPath(executable)));
        }
        Ok(None)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FakePath, FakeShell};
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn resolver(shell: FakeShell, path: FakePath) -> (Resolver, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let shell_calls = shell.calls.clone();
        let path_calls = path.calls.clone();
        (
            Resolver::new(Box::new(shell), Box::new(path)),
            shell_calls,
            path_calls,
        )
    }

    #[test]
    fn builtin_skips_path() {
        let (r, _, path_calls) = resolver(
            FakeShell::default().builtin("cd"),
            FakePath::default().exe("cd", "/usr/bin/cd"),
        );
        assert_eq!(
            r.resolve("cd", Skip::NONE).unwrap(),
            Some(Lookup::Classified(Classification::Builtin))
        );
        assert_eq!(path_calls.get(), 0);
    }

    #[test]
    fn alias_skips_path() {
        let (r, _, path_calls) = resolver(
            FakeShell::default().alias("ls", "ls --color=auto"),
            FakePath::default().exe("ls", "/bin/ls"),
        );
        let lookup = r.resolve("ls", Skip::NONE).unwrap();
        assert!(matches!(
            lookup,
            Some(Lookup::Classified(Classification::Alias(_)))
        ));
        assert_eq!(path_calls.get(), 0);
    }

    #[test]
    fn falls_back_to_path() {
        let (r, shell_calls, path_calls) =
            resolver(FakeShell::default(), FakePath::default().exe("git", "/usr/bin/git"));
        let lookup = r.resolve("git", Skip::NONE).unwrap();
        assert_eq!(
            lookup,
            Some(Lookup::OnPath(Executable {
                path: PathBuf::from("/usr/bin/git"),
                links: Vec::new(),
            }))
        );
        assert_eq!(shell_calls.get(), 1);
        assert_eq!(path_calls.get(), 1);
    }

    #[test]
    fn nothing_found_is_none() {
        let (r, _, _) = resolver(FakeShell::default(), FakePath::default());
        assert_eq!(r.resolve("miss", Skip::NONE).unwrap(), None);
    }

    #[test]
    fn skip_classify_goes_straight_to_path() {
        let (r, shell_calls, _) = resolver(
            FakeShell::default().builtin("echo"),
            FakePath::default().exe("echo", "/bin/echo"),
        );
        let skip = Skip {
            classify: true,
            path: false,
        };
        assert!(matches!(
            r.resolve("echo", skip).unwrap(),
            Some(Lookup::OnPath(_))
        ));
        assert_eq!(shell_calls.get(), 0);
    }

    #[test]
    fn skip_path_leaves_only_shell() {
        let (r, _, path_calls) =
            resolver(FakeShell::default(), FakePath::default().exe("git", "/usr/bin/git"));
        let skip = Skip {
            classify: false,
            path: true,
        };
        assert_eq!(r.resolve("git", skip).unwrap(), None);
        assert_eq!(path_calls.get(), 0);
    }

    #[test]
    fn skip_both_finds_nothing() {
        let (r, shell_calls, path_calls) = resolver(
            FakeShell::default().builtin("cd"),
            FakePath::default().exe("cd", "/usr/bin/cd"),
        );
        let skip = Skip {
            classify: true,
            path: true,
        };
        assert_eq!(r.resolve("cd", skip).unwrap(), None);
        assert_eq!(shell_calls.get() + path_calls.get(), 0);
    }

    #[test]
    fn repeated_lookups_are_equal() {
        let (r, shell_calls, _) = resolver(
            FakeShell::default().alias("ll", "ls -alF"),
            FakePath::default(),
        );
        let first = r.resolve("ll", Skip::NONE).unwrap();
        let second = r.resolve("ll", Skip::NONE).unwrap();
        assert_eq!(first, second);
        assert_eq!(shell_calls.get(), 2);
    }
}

//! Classification through the user's interactive shell.
//!
//! Runs `<shell> -ic 'type <name>'` and pattern-matches the reply. The reply is
//! free text meant for humans, so only two shapes are recognised:
//!
//! - `cd is a shell builtin`
//! - ``ll is aliased to `ls -alF'``
//!
//! Everything else (functions, keywords, files, other shells' wording) reads
//! as [`Classification::None`].

use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{Environment, Settings};
use crate::error::{Error, Result};
use crate::resolve::Classifier;
use crate::resolve::types::{AliasMatch, Classification};

const BUILTIN_MARKER: &str = "is a shell builtin";

/// Group 1: the whole alias body between the backtick and the closing quote.
/// Group 2: its first whitespace-delimited token.
static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"is aliased to `(([^\s`']+)[^`]*)'").expect("alias pattern must compile")
});

/// The default [`Classifier`]: asks a real shell.
#[derive(Debug, Clone)]
pub struct ShellClassifier {
    shell: Option<String>,
}

impl ShellClassifier {
    /// `shell` is the value of `SHELL`; `None` fails on first use.
    pub fn new(shell: Option<String>) -> Self {
        Self { shell }
    }

    /// A non-empty `settings.shell` overrides `SHELL`.
    pub fn from_config(env: &Environment, settings: &Settings) -> Self {
        let shell = if settings.shell.is_empty() {
            env.shell.clone()
        } else {
            Some(shellexpand::tilde(&settings.shell).into_owned())
        };
        Self::new(shell)
    }

    fn shell(&self) -> Result<&str> {
        self.shell.as_deref().ok_or(Error::MissingEnv("SHELL"))
    }

    /// Run `type` in the shell and collect its stdout lines.
    fn run_type(&self, shell: &str, name: &str) -> Result<Vec<String>> {
        let quoted = shlex::try_quote(name).map_err(|_| Error::InvalidName(name.into()))?;
        let script = format!("type {quoted}");
        log::debug!("running {shell} -ic {script:?}");

        let output = Command::new(shell)
            .arg("-ic")
            .arg(&script)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                shell: shell.into(),
                script: script.clone(),
                source,
            })?;
        log::trace!("{shell} exited with {}", output.status);

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(String::from)
            .collect())
    }
}

impl Classifier for ShellClassifier {
    fn classify(&self, name: &str) -> Result<Classification> {
        let shell = self.shell()?;
        let lines = self.run_type(shell, name)?;
        let classification = parse_type_output(shell, &lines);
        log::debug!("{shell} classifies {name} as {classification:?}");
        Ok(classification)
    }
}

/// Scan `type` output in order; the first builtin or alias line decides.
pub fn parse_type_output<S: AsRef<str>>(shell: &str, lines: &[S]) -> Classification {
    for line in lines {
        let line = line.as_ref();
        if line.contains(BUILTIN_MARKER) {
            return Classification::Builtin;
        }
        if let Some(caps) = ALIAS_PATTERN.captures(line) {
            return Classification::Alias(AliasMatch {
                shell: shell.to_string(),
                declaration: caps[1].to_string(),
                target: caps[2].to_string(),
            });
        }
    }
    Classification::None
}

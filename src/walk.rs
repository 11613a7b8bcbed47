//! The resolution walk: follow a name through alias hops until something
//! terminal (builtin, executable, nothing, or a repeat) is reached.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{Environment, Settings};
use crate::error::Result;
use crate::resolve::{AliasMatch, Classification, Executable, Lookup, Resolver, Skip};

/// How one step of the walk ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Builtin,
    /// Continues the walk with `target`.
    Alias(AliasMatch),
    Executable(Executable),
    Unresolved,
    /// The name already went through a full lookup earlier in the walk.
    Cycle,
}

/// One name visited by the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionStep {
    pub name: String,
    /// Set once the lookup for `name` completed with a result.
    pub resolved: bool,
    /// Looked up on the search path only (the shell was not asked).
    pub path_only: bool,
    pub outcome: Option<Outcome>,
}

impl ResolutionStep {
    fn pending(name: &str) -> Self {
        Self {
            name: name.to_string(),
            resolved: false,
            path_only: false,
            outcome: None,
        }
    }

    fn skip(&self) -> Skip {
        Skip {
            classify: self.path_only,
            path: false,
        }
    }
}

/// Every step of one walk, in visiting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    pub steps: Vec<ResolutionStep>,
}

impl Walk {
    /// Outcome of the last step.
    pub fn terminal(&self) -> Option<&Outcome> {
        self.steps.last().and_then(|step| step.outcome.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name.as_str()).collect()
    }
}

/// Drives a [`Resolver`] across an alias chain.
pub struct Walker {
    resolver: Resolver,
    self_alias_via_path: bool,
}

impl Walker {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            self_alias_via_path: false,
        }
    }

    pub fn from_config(env: &Environment, settings: &Settings) -> Self {
        Self::new(Resolver::from_config(env, settings))
            .self_alias_via_path(settings.self_alias_via_path)
    }

    /// When set, an alias whose target is its own name (`alias ls='ls -l'`)
    /// continues with a path-only lookup of that name instead of ending in
    /// [`Outcome::Cycle`]. The shell does not re-expand such an alias, so the
    /// word runs as a regular command.
    pub fn self_alias_via_path(mut self, enabled: bool) -> Self {
        self.self_alias_via_path = enabled;
        self
    }

    /// Walk from `name` until a terminal outcome. Only fatal configuration
    /// errors are returned as `Err`.
    pub fn walk(&self, name: &str) -> Result<Walk> {
        let mut steps = vec![ResolutionStep::pending(name)];
        let mut seen: HashSet<String> = HashSet::new();

        loop {
            let Some(current) = steps.last_mut() else {
                break;
            };
            log::info!("looking for {}", current.name);

            // A path-only step can only end the walk, so it may repeat a name
            if !current.path_only && seen.contains(&current.name) {
                log::info!("{} was already resolved, aborting", current.name);
                current.outcome = Some(Outcome::Cycle);
                break;
            }

            let outcome = match self.resolver.resolve(&current.name, current.skip())? {
                None | Some(Lookup::Classified(Classification::None)) => {
                    log::info!("no match for {}", current.name);
                    current.outcome = Some(Outcome::Unresolved);
                    break;
                }
                Some(Lookup::Classified(Classification::Builtin)) => Outcome::Builtin,
                Some(Lookup::Classified(Classification::Alias(alias))) => Outcome::Alias(alias),
                Some(Lookup::OnPath(executable)) => Outcome::Executable(executable),
            };

            current.resolved = true;
            seen.insert(current.name.clone());
            let next = match &outcome {
                Outcome::Alias(alias) => {
                    log::info!("{} is an alias for {}", current.name, alias.target);
                    let mut step = ResolutionStep::pending(&alias.target);
                    step.path_only = self.self_alias_via_path && alias.target == current.name;
                    Some(step)
                }
                _ => None,
            };
            current.outcome = Some(outcome);

            match next {
                Some(step) => steps.push(step),
                None => break,
            }
        }

        Ok(Walk { steps })
    }
}

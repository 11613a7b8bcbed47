//! Human-readable and JSON rendering of a [`Walk`].

use crate::walk::{Outcome, Walk};

/// One line per event, in the order the walk produced them.
pub fn render(walk: &Walk) -> Vec<String> {
    let mut lines = Vec::new();
    for step in &walk.steps {
        let name = &step.name;
        lines.push(format!("looking for '{name}'"));
        match &step.outcome {
            Some(Outcome::Cycle) => {
                lines.push(format!("already searched for '{name}', aborting"));
            }
            Some(Outcome::Unresolved) | None => lines.push("no match".into()),
            Some(Outcome::Builtin) => {
                lines.push(format!("'{name}' is a shell builtin"));
                lines.push("done".into());
            }
            Some(Outcome::Alias(alias)) => lines.push(format!(
                "'{name}' is an alias for '{}' in shell '{}': '{}'",
                alias.target, alias.shell, alias.declaration
            )),
            Some(Outcome::Executable(exe)) => {
                if step.name.contains('/') {
                    lines.push(format!("'{name}' is a path"));
                } else {
                    lines.push(format!("'{name}' found in PATH as '{}'", exe.path.display()));
                }
                let mut from = exe.path.as_path();
                for to in &exe.links {
                    lines.push(format!(
                        "'{}' is a symlink to '{}'",
                        from.display(),
                        to.display()
                    ));
                    from = to.as_path();
                }
                lines.push(format!("'{}' is an executable", exe.target().display()));
                lines.push("done".into());
            }
        }
    }
    lines
}

/// The walk as pretty-printed JSON.
pub fn render_json(walk: &Walk) -> String {
    serde_json::to_string_pretty(walk).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{AliasMatch, Executable};
    use crate::walk::ResolutionStep;
    use std::path::PathBuf;

    fn step(name: &str, resolved: bool, outcome: Outcome) -> ResolutionStep {
        ResolutionStep {
            name: name.into(),
            resolved,
            path_only: false,
            outcome: Some(outcome),
        }
    }

    fn alias(declaration: &str) -> Outcome {
        Outcome::Alias(AliasMatch {
            shell: "/bin/bash".into(),
            declaration: declaration.into(),
            target: declaration.split_whitespace().next().unwrap().into(),
        })
    }

    #[test]
    fn builtin_lines() {
        let walk = Walk {
            steps: vec![step("type", true, Outcome::Builtin)],
        };
        assert_eq!(
            render(&walk),
            vec!["looking for 'type'", "'type' is a shell builtin", "done"]
        );
    }

    #[test]
    fn alias_chain_to_symlinked_executable() {
        let walk = Walk {
            steps: vec![
                step("ll", true, alias("ls -alF")),
                step(
                    "ls",
                    true,
                    Outcome::Executable(Executable {
                        path: PathBuf::from("/usr/bin/ls"),
                        links: vec![PathBuf::from("/bin/busybox")],
                    }),
                ),
            ],
        };
        assert_eq!(
            render(&walk),
            vec![
                "looking for 'll'",
                "'ll' is an alias for 'ls' in shell '/bin/bash': 'ls -alF'",
                "looking for 'ls'",
                "'ls' found in PATH as '/usr/bin/ls'",
                "'/usr/bin/ls' is a symlink to '/bin/busybox'",
                "'/bin/busybox' is an executable",
                "done",
            ]
        );
    }

    #[test]
    fn direct_path_lines() {
        let walk = Walk {
            steps: vec![step(
                "/usr/bin/uname",
                true,
                Outcome::Executable(Executable {
                    path: PathBuf::from("/usr/bin/uname"),
                    links: Vec::new(),
                }),
            )],
        };
        let lines = render(&walk);
        assert_eq!(lines[1], "'/usr/bin/uname' is a path");
        assert_eq!(lines[2], "'/usr/bin/uname' is an executable");
    }

    #[test]
    fn cycle_and_no_match_have_no_done() {
        let cycle = Walk {
            steps: vec![
                step("a", true, alias("b")),
                step("b", true, alias("a")),
                step("a", false, Outcome::Cycle),
            ],
        };
        let lines = render(&cycle);
        assert_eq!(lines.last().unwrap(), "already searched for 'a', aborting");
        assert!(!lines.contains(&"done".to_string()));

        let miss = Walk {
            steps: vec![step("miss", false, Outcome::Unresolved)],
        };
        assert_eq!(render(&miss), vec!["looking for 'miss'", "no match"]);
    }

    #[test]
    fn json_carries_outcome_tags() {
        let walk = Walk {
            steps: vec![step("cd", true, Outcome::Builtin)],
        };
        let value: serde_json::Value = serde_json::from_str(&render_json(&walk)).unwrap();
        assert_eq!(value["steps"][0]["name"], "cd");
        assert_eq!(value["steps"][0]["outcome"]["outcome"], "builtin");
    }
}

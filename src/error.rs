//! Fatal errors. Anything here aborts the whole run; "no match" and alias
//! cycles are walk outcomes, not errors.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable (`PATH` or `SHELL`) is not set.
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// The classification shell could not be started.
    #[error("failed to run '{shell} -ic {script}'")]
    Spawn {
        shell: String,
        script: String,
        #[source]
        source: std::io::Error,
    },

    /// The command name cannot be safely quoted for the shell.
    #[error("cannot pass command name {0:?} to the shell")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, Error>;

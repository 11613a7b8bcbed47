//! cmd-origin: find out what running a command name actually does.
//!
//! A name is first put to the user's interactive shell (`type <name>`). A
//! builtin ends the search; an alias is followed to the first word of its
//! body and the search repeats. Anything the shell does not claim is looked
//! up on `PATH`.
//!
//! # Architecture
//!
//! - **[`resolve`]** — Single-name lookup: shell classifier, path search, resolver.
//! - **[`walk`]** — Alias-chain walker with cycle detection.
//! - **[`report`]** — Line and JSON rendering of a finished walk.
//! - **[`config`]** — Embedded defaults + user overlay, captured environment.
//! - **[`logging`]** — `simplelog` setup for stderr and an optional log file.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Fatal error type.
pub mod error;
/// Logger installation.
pub mod logging;
/// Walk rendering.
pub mod report;
/// Shell classification, path search and their combination.
pub mod resolve;
/// The alias-chain walk.
pub mod walk;

pub use error::{Error, Result};
pub use walk::{Outcome, Walk, Walker};

use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

use crate::config::Settings;

/// Install the global logger: stderr at `Debug` when `verbose`, `Warn`
/// otherwise, plus an `Info` file log when `settings.log_file` is set.
/// Best-effort: failures are silently ignored (logging must never block a lookup).
pub fn init(verbose: bool, settings: &Settings) {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let term_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(file) = log_file(settings).and_then(open_append) {
        loggers.push(WriteLogger::new(LevelFilter::Info, config, file));
    }

    let _ = CombinedLogger::init(loggers);
}

fn log_file(settings: &Settings) -> Option<PathBuf> {
    if settings.log_file.is_empty() {
        return None;
    }
    Some(PathBuf::from(
        shellexpand::tilde(&settings.log_file).as_ref(),
    ))
}

fn open_append(path: PathBuf) -> Option<std::fs::File> {
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

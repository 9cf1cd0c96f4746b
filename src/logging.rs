use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use log::LevelFilter;

/// Logs go to `path` when given, filtered by RUST_LOG (default warn). With no
/// path no logger is installed, so nothing reaches the raw-mode terminal.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("initializing logger")
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn no_file_installs_nothing() {
        std::env::set_var("RUST_LOG", "braille_snake=debug");
        init_logging(None).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Off);
        assert!(!log::log_enabled!(target: "braille_snake::world", Level::Error));
    }
}

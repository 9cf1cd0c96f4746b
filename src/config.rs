use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

const DEFAULT_SLOW_MS: u64 = 125;
const DEFAULT_FAST_MS: u64 = 75;
const MAX_SLOW_MS: u64 = 60_000;

/// Snake on a 40x4 board, drawn as one line of braille in the terminal title.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Milliseconds per step for the shortest snake.
    #[arg(long = "slow-ms", value_name = "MILLISECONDS", default_value_t = DEFAULT_SLOW_MS)]
    pub slow_ms: u64,
    /// Milliseconds per step once the snake fills the board.
    #[arg(long = "fast-ms", value_name = "MILLISECONDS", default_value_t = DEFAULT_FAST_MS)]
    pub fast_ms: u64,
    /// Where the best score is kept. Defaults to the user data directory.
    #[arg(long = "best-file", value_name = "PATH")]
    pub best_file: Option<PathBuf>,
    /// Character shown instead of the blank braille glyph.
    #[arg(long = "blank-char", value_name = "CHAR")]
    pub blank_char: Option<char>,
    /// Seed for food placement.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write logs here (filtered by RUST_LOG).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fast interval must be at least 1ms")]
    ZeroFast,
    #[error("slow interval {0}ms is over the {max}ms limit", max = MAX_SLOW_MS)]
    TooSlow(u64),
    #[error("fast interval {fast}ms is slower than slow interval {slow}ms")]
    Inverted { fast: u64, slow: u64 },
}

/// Step interval bounds, validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speed {
    pub slow: Duration,
    pub fast: Duration,
}

impl Default for Speed {
    fn default() -> Self {
        Speed {
            slow: Duration::from_millis(DEFAULT_SLOW_MS),
            fast: Duration::from_millis(DEFAULT_FAST_MS),
        }
    }
}

impl Config {
    pub fn speed(&self) -> Result<Speed, ConfigError> {
        if self.fast_ms == 0 {
            return Err(ConfigError::ZeroFast);
        }
        if self.slow_ms > MAX_SLOW_MS {
            return Err(ConfigError::TooSlow(self.slow_ms));
        }
        if self.fast_ms > self.slow_ms {
            return Err(ConfigError::Inverted { fast: self.fast_ms, slow: self.slow_ms });
        }
        Ok(Speed {
            slow: Duration::from_millis(self.slow_ms),
            fast: Duration::from_millis(self.fast_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = Config::try_parse_from(["braille-snake"]).unwrap();
        assert_eq!(config.speed(), Ok(Speed::default()));
        assert_eq!(config.blank_char, None);
        assert_eq!(config.best_file, None);
    }

    #[test]
    fn flags_parse() {
        let config = Config::try_parse_from([
            "braille-snake", "--slow-ms", "200", "--fast-ms", "50",
            "--blank-char", "\u{2591}", "--seed", "9", "--best-file", "/tmp/best.json",
        ])
        .unwrap();
        let speed = config.speed().unwrap();
        assert_eq!(speed.slow, Duration::from_millis(200));
        assert_eq!(speed.fast, Duration::from_millis(50));
        assert_eq!(config.blank_char, Some('\u{2591}'));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.best_file, Some(PathBuf::from("/tmp/best.json")));
    }

    #[test]
    fn rejects_bad_speeds() {
        let inverted = Config::try_parse_from(["braille-snake", "--fast-ms", "300"]).unwrap();
        assert_eq!(inverted.speed(), Err(ConfigError::Inverted { fast: 300, slow: 125 }));

        let zero = Config::try_parse_from(["braille-snake", "--fast-ms", "0"]).unwrap();
        assert_eq!(zero.speed(), Err(ConfigError::ZeroFast));
    }

    #[test]
    fn rejects_huge_slow_interval() {
        let huge = Config::try_parse_from(["braille-snake", "--slow-ms", "18446744073709551615"]).unwrap();
        assert_eq!(huge.speed(), Err(ConfigError::TooSlow(u64::MAX)));

        let limit = Config::try_parse_from(["braille-snake", "--slow-ms", "60000"]).unwrap();
        assert_eq!(limit.speed().unwrap().slow, Duration::from_secs(60));
    }

    #[test]
    fn rejects_multi_char_blank() {
        assert!(Config::try_parse_from(["braille-snake", "--blank-char", "ab"]).is_err());
    }
}

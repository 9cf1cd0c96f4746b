use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use braille_snake::best_score::{BestScoreStore, JsonFileStore, MemoryStore};
use braille_snake::config::Config;
use braille_snake::game::SnakeGame;
use braille_snake::logging::init_logging;
use braille_snake::scheduler::Scheduler;
use braille_snake::term::TermManager;
use braille_snake::world::GameState;

fn main() -> Result<()> {
    let config = Config::parse();
    let speed = config.speed()?;
    init_logging(config.log_file.as_deref())?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = SnakeGame::new(
        GameState::new(rng),
        Scheduler::new(speed, Instant::now()),
        TermManager::new(config.blank_char),
        open_store(&config),
    );

    // Runs until the player quits; the loop restores the terminal on the way out
    game.play()
}

fn open_store(config: &Config) -> Box<dyn BestScoreStore> {
    let path = match &config.best_file {
        Some(path) => Ok(path.clone()),
        None => JsonFileStore::default_path(),
    };

    match path {
        Ok(path) => {
            let store = JsonFileStore::new(path);
            info!("best score file: {}", store.path().display());
            Box::new(store)
        }
        Err(err) => {
            warn!("best score will not be kept: {:#}", err);
            Box::new(MemoryStore::default())
        }
    }
}

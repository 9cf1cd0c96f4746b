use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "best_score.json";

/// Highest score so far and the board it was set on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub score: usize,
    pub grid: String,
}

impl BestScore {
    pub fn points(&self) -> String {
        if self.score == 1 {
            "1 point".to_string()
        } else {
            format!("{} points", self.score)
        }
    }
}

pub trait BestScoreStore {
    fn load(&self) -> Result<Option<BestScore>>;
    fn save(&mut self, best: &BestScore) -> Result<()>;
}

/// JSON file in the user's data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn default_path() -> Result<PathBuf> {
        let proj = ProjectDirs::from("com", "braille-snake", "BrailleSnake")
            .context("could not resolve project directories")?;
        Ok(proj.data_local_dir().join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<BestScore>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        match serde_json::from_str(&text) {
            Ok(best) => Ok(Some(best)),
            Err(err) => {
                warn!("ignoring corrupt best score file {}: {}", self.path.display(), err);
                Ok(None)
            }
        }
    }

    fn save(&mut self, best: &BestScore) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(best)?;
        fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// Keeps the record for this run only.
#[derive(Default)]
pub struct MemoryStore {
    pub best: Option<BestScore>,
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<BestScore>> {
        Ok(self.best.clone())
    }

    fn save(&mut self, best: &BestScore) -> Result<()> {
        self.best = Some(best.clone());
        Ok(())
    }
}

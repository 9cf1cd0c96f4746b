use std::borrow::Cow;

use anyhow::Result;

use crate::best_score::BestScore;
use crate::encoder::BRAILLE_BLANK;

/// Where the encoded board ends up.
pub trait Display {
    fn show(&mut self, grid_text: &str, score: usize) -> Result<()>;
    /// Pause state, shown until the next `show`.
    fn show_paused(&mut self, grid_text: &str, score: usize) -> Result<()>;
    fn show_best(&mut self, best: &BestScore) -> Result<()>;
}

pub fn status_line(grid_text: &str, score: usize) -> String {
    format!("|{}|[score:{}]", grid_text, score)
}

pub fn paused_line(grid_text: &str, score: usize) -> String {
    format!("{}[paused]", status_line(grid_text, score))
}

/// Swaps the blank braille glyph for `replacement`, for hosts that mangle it.
pub fn presentation_safe(text: &str, replacement: Option<char>) -> Cow<'_, str> {
    match replacement {
        Some(ch) if text.contains(BRAILLE_BLANK) => {
            Cow::Owned(text.replace(BRAILLE_BLANK, &ch.to_string()))
        }
        _ => Cow::Borrowed(text),
    }
}

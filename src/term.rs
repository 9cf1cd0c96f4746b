use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::event::{DisableFocusChange, EnableFocusChange, Event, KeyEventKind, poll, read};

use crate::best_score::BestScore;
use crate::display::{Display, paused_line, presentation_safe, status_line};

const TITLE_ROW: u16 = 1;
const BOARD_ROW: u16 = 3;
const BEST_ROW: u16 = 5;
const MESSAGE_ROW: u16 = 7;
const HELP_ROW: u16 = 9;
const LEFT: u16 = 2;

const PAUSED: &str = "Paused · Esc to resume";
const HELP: &str = "Arrows, WASD or HJKL to turn · Esc to pause · q or CTRL+C to quit";

/// Owns the terminal while the game runs. The board line goes to the window
/// title and is mirrored on screen.
pub struct TermManager {
    stdout: Stdout,
    blank_char: Option<char>,
    message: bool,
}

impl TermManager {
    pub fn new(blank_char: Option<char>) -> Self {
        TermManager { stdout: stdout(), blank_char, message: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, EnableFocusChange)
            .context("entering alternate screen")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("preparing screen")?;
        self.print_line(TITLE_ROW, "braille snake")?;
        self.print_line(HELP_ROW, HELP)?;
        self.flush()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("disabling raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, DisableFocusChange, LeaveAlternateScreen)
            .context("leaving alternate screen")?;
        Ok(())
    }

    /// Drains whatever input arrived since the last frame.
    pub fn read_events_queue(&self) -> Result<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            match read()? {
                Event::Key(ev) if ev.kind == KeyEventKind::Release => {}
                ev => events.push(ev),
            }
        }

        Ok(events)
    }

    fn show_message(&mut self, text: &str) -> Result<()> {
        self.message = true;
        self.print_line(MESSAGE_ROW, text)?;
        self.flush()
    }

    fn hide_message(&mut self) -> Result<()> {
        if !self.message {
            return Ok(());
        }
        self.message = false;
        self.print_line(MESSAGE_ROW, "")?;
        self.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn present(&mut self, line: &str) -> Result<()> {
        let line = presentation_safe(line, self.blank_char);
        queue!(self.stdout, SetTitle(&*line))?;
        self.print_line(BOARD_ROW, &line)?;
        self.flush()
    }

    fn print_line(&mut self, row: u16, text: &str) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(LEFT, row),
            terminal::Clear(ClearType::UntilNewLine),
            style::Print(text)
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("flushing terminal")
    }
}

impl Display for TermManager {
    fn show(&mut self, grid_text: &str, score: usize) -> Result<()> {
        self.hide_message()?;
        self.present(&status_line(grid_text, score))
    }

    fn show_paused(&mut self, grid_text: &str, score: usize) -> Result<()> {
        self.show_message(PAUSED)?;
        self.present(&paused_line(grid_text, score))
    }

    fn show_best(&mut self, best: &BestScore) -> Result<()> {
        let grid = presentation_safe(&best.grid, self.blank_char);
        let text = format!("Best: {}  |{}|", best.points(), grid);
        self.print_line(BEST_ROW, &text)?;
        self.flush()
    }
}

use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};

use crate::best_score::{BestScore, BestScoreStore};
use crate::display::Display;
use crate::scheduler::Scheduler;
use crate::snake::Direction::{self, *};
use crate::term::TermManager;
use crate::world::{Episode, GameState, Tick};

const FRAME_INTERVAL_MS: u64 = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct SnakeGame<D: Display> {
    state: GameState,
    scheduler: Scheduler,
    display: D,
    store: Box<dyn BestScoreStore>,
    best: Option<BestScore>,
    held: bool,
    unfocused: bool,
}

impl<D: Display> SnakeGame<D> {
    pub fn new(state: GameState, scheduler: Scheduler, display: D, store: Box<dyn BestScoreStore>) -> Self {
        SnakeGame { state, scheduler, display, store, best: None, held: false, unfocused: false }
    }

    /// Reads the stored record once and puts it on screen.
    pub fn load_best(&mut self) -> Result<()> {
        self.best = match self.store.load() {
            Ok(best) => best,
            Err(err) => {
                warn!("could not load best score: {:#}", err);
                None
            }
        };
        if let Some(best) = &self.best {
            self.display.show_best(best)?;
        }
        self.render()
    }

    pub fn handle_event(&mut self, event: &Event) -> Result<Control> {
        match event {
            ev @ Event::Key(_) if is_quit(ev) => return Ok(Control::Quit),
            Event::Key(KeyEvent { code: KeyCode::Esc, .. }) => self.toggle_pause()?,
            Event::Key(KeyEvent { code, .. }) => {
                if let Some(dir) = direction_for_key(code) {
                    self.state.change_direction(dir);
                }
            }
            Event::FocusLost => self.set_focused(false)?,
            Event::FocusGained => self.set_focused(true)?,
            _ => {}
        }
        Ok(Control::Continue)
    }

    /// Runs at most one step, if one is due.
    pub fn frame(&mut self, now: Instant) -> Result<()> {
        if !self.scheduler.frame(now, self.state.snake().len()) {
            return Ok(());
        }

        if let Tick::Crashed(episode) = self.state.update() {
            self.finish(episode)?;
        }
        self.render()
    }

    /// Esc holds the game until the next Esc, whatever focus does meanwhile.
    pub fn toggle_pause(&mut self) -> Result<()> {
        self.held = !self.held;
        self.sync_pause()
    }

    pub fn set_focused(&mut self, focused: bool) -> Result<()> {
        self.unfocused = !focused;
        self.sync_pause()
    }

    fn sync_pause(&mut self) -> Result<()> {
        let paused = self.held || self.unfocused;
        if paused == self.scheduler.is_paused() {
            return Ok(());
        }
        info!("{}", if paused { "paused" } else { "resumed" });
        self.scheduler.set_paused(paused);
        if paused {
            self.display.show_paused(&self.state.grid_text(), self.state.score())
        } else {
            self.render()
        }
    }

    pub fn best(&self) -> Option<&BestScore> {
        self.best.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn render(&mut self) -> Result<()> {
        self.display.show(&self.state.grid_text(), self.state.score())
    }

    fn finish(&mut self, episode: Episode) -> Result<()> {
        let record = match episode.new_record(self.best.as_ref()) {
            Some(record) => record,
            None => return Ok(()),
        };

        info!("new best score: {}", record.score);
        if let Err(err) = self.store.save(&record) {
            warn!("could not save best score: {:#}", err);
        }
        self.display.show_best(&record)?;
        self.best = Some(record);
        Ok(())
    }
}

impl SnakeGame<TermManager> {
    pub fn play(&mut self) -> Result<()> {
        guarded(self, |g| g.display.setup(), Self::run_loop, |g| g.display.restore())
    }

    fn run_loop(&mut self) -> Result<()> {
        self.load_best()?;

        loop {
            sleep(Duration::from_millis(FRAME_INTERVAL_MS));

            for event in self.display.read_events_queue()? {
                if self.handle_event(&event)? == Control::Quit {
                    return Ok(());
                }
            }

            self.frame(Instant::now())?;
        }
    }
}

/// Runs `body` between `setup` and `restore`. `restore` also runs when `setup`
/// fails part way, and the first error wins.
fn guarded<T>(
    target: &mut T,
    setup: fn(&mut T) -> Result<()>,
    body: fn(&mut T) -> Result<()>,
    restore: fn(&mut T) -> Result<()>,
) -> Result<()> {
    if let Err(err) = setup(target) {
        if let Err(restore_err) = restore(target) {
            warn!("could not restore terminal: {:#}", restore_err);
        }
        return Err(err);
    }
    let res = body(target);
    let restored = restore(target);
    res.and(restored)
}

pub fn direction_for_key(code: &KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(Left),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(Down),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(Right),
        _ => None,
    }
}

fn is_quit(ev: &Event) -> bool {
    match ev {
        Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers, .. }) => {
            modifiers.contains(KeyModifiers::CONTROL)
        }
        Event::Key(KeyEvent { code: KeyCode::Char('q'), .. }) => true,
        _ => false,
    }
}

use log::{debug, info};
use rand::rngs::StdRng;

use crate::best_score::BestScore;
use crate::encoder;
use crate::food::FoodPlacer;
use crate::grid::{Cell, Grid};
use crate::snake::{Direction, DirectionQueue, Snake};

pub const INITIAL_SNAKE_LENGTH: usize = 4;
const START_ROW: i32 = 2;

/// What one tick did.
#[derive(Debug, PartialEq, Eq)]
pub enum Tick {
    Moved,
    Ate,
    Crashed(Episode),
}

/// Summary of an episode that just ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub score: usize,
    pub turned: bool,
    pub grid_text: String,
}

impl Episode {
    /// The record this episode sets, if it beats `best` and the player ever turned.
    pub fn new_record(&self, best: Option<&BestScore>) -> Option<BestScore> {
        let best_score = best.map_or(0, |b| b.score);
        if self.score > 0 && self.score > best_score && self.turned {
            Some(BestScore { score: self.score, grid: self.grid_text.clone() })
        } else {
            None
        }
    }
}

pub struct GameState {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    queue: DirectionQueue,
    turned: bool,
    placer: FoodPlacer,
    rng: StdRng,
}

impl GameState {
    pub fn new(rng: StdRng) -> Self {
        Self::with_placer(rng, FoodPlacer::new())
    }

    pub fn with_placer(rng: StdRng, placer: FoodPlacer) -> Self {
        let mut state = GameState {
            grid: Grid::new(),
            snake: Snake::new(0, START_ROW, 1),
            direction: Direction::Right,
            queue: DirectionQueue::new(),
            turned: false,
            placer,
            rng,
        };
        state.start_episode();
        state
    }

    pub fn start_episode(&mut self) {
        self.grid = Grid::new();
        self.snake = Snake::new(INITIAL_SNAKE_LENGTH as i32 - 1, START_ROW, INITIAL_SNAKE_LENGTH);
        for &(x, y) in self.snake.body() {
            self.grid.set_cell_at(x, y, Cell::Snake);
        }
        self.direction = Direction::Right;
        self.queue = DirectionQueue::new();
        self.turned = false;
        self.placer.drop_food(&mut self.grid, &mut self.rng);
    }

    pub fn change_direction(&mut self, direction: Direction) {
        if !self.queue.request(direction, self.direction) {
            debug!("ignored turn {:?}", direction);
        }
        self.turned = true;
    }

    pub fn update(&mut self) -> Tick {
        if let Some(dir) = self.queue.next() {
            self.direction = dir;
        }

        let tail = self.snake.tail();
        let (x, y) = self.snake.next_head(self.direction);
        let target = self.grid.cell_at(x, y);

        let out_of_bounds = !Grid::in_rows(y);
        let hits_self = target == Cell::Snake && (x, y) != tail;

        if out_of_bounds || hits_self {
            let episode = self.end_episode();
            self.start_episode();
            return Tick::Crashed(episode);
        }

        let eats = target == Cell::Food;
        if !eats {
            self.snake.pop_tail();
            self.grid.set_cell_at(tail.0, tail.1, Cell::Empty);
        }

        self.grid.set_cell_at(x, y, Cell::Snake);
        self.snake.push_head((x, y));

        if eats {
            self.placer.drop_food(&mut self.grid, &mut self.rng);
            Tick::Ate
        } else {
            Tick::Moved
        }
    }

    pub fn score(&self) -> usize {
        self.snake.len() - INITIAL_SNAKE_LENGTH
    }

    pub fn grid_text(&self) -> String {
        encoder::encode(&self.grid)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn end_episode(&self) -> Episode {
        let episode = Episode {
            score: self.score(),
            turned: self.turned,
            grid_text: self.grid_text(),
        };
        info!("episode over: score {}, turned: {}", episode.score, episode.turned);
        episode
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, x: i32, y: i32, cell: Cell) {
        self.grid.set_cell_at(x, y, cell);
    }

    /// Replaces the board with `body` (head first) and nothing else.
    #[cfg(test)]
    pub(crate) fn lay_snake(&mut self, body: Vec<crate::Coords>, direction: Direction) {
        self.grid = Grid::new();
        for &(x, y) in body.iter() {
            self.grid.set_cell_at(x, y, Cell::Snake);
        }
        self.snake = Snake::from_body(body);
        self.direction = direction;
        self.queue = DirectionQueue::new();
    }

    #[cfg(test)]
    pub(crate) fn clear_food(&mut self) {
        if let Some((x, y)) = self.grid.food() {
            self.grid.set_cell_at(x, y, Cell::Empty);
        }
    }
}

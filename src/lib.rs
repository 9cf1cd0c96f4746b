//! Snake on a 40x4 board whose whole state fits in one line of braille.

pub mod best_score;
pub mod config;
pub mod display;
pub mod encoder;
pub mod food;
pub mod game;
pub mod grid;
pub mod logging;
pub mod scheduler;
pub mod snake;
pub mod term;
pub mod world;

/// Grid position. `x` is the column, `y` the row.
pub type Coords = (i32, i32);

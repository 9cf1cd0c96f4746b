use crate::grid::{Cell, Grid, GRID_WIDTH};

pub const BRAILLE_BASE: u32 = 0x2800;
pub const BRAILLE_BLANK: char = '\u{2800}';

// Braille dot numbering:
// (0,0)=1 (0,1)=2 (0,2)=4 (0,3)=64
// (1,0)=8 (1,1)=16 (1,2)=32 (1,3)=128
fn dot_bit(dx: i32, dy: i32) -> u8 {
    match (dx, dy) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0x00,
    }
}

/// A 2x4 block, indexed `[dx][dy]`.
pub type Block = [[bool; 4]; 2];

pub fn encode_block(block: &Block) -> char {
    let mut mask = 0u8;
    for dx in 0..2 {
        for dy in 0..4 {
            if block[dx][dy] {
                mask |= dot_bit(dx as i32, dy as i32);
            }
        }
    }
    // Every u8 offset from the base is a valid braille pattern
    char::from_u32(BRAILLE_BASE + mask as u32).unwrap_or(BRAILLE_BLANK)
}

pub fn decode_block(ch: char) -> Option<Block> {
    let mask = (ch as u32).checked_sub(BRAILLE_BASE).filter(|m| *m <= 0xFF)? as u8;
    let mut block = [[false; 4]; 2];
    for dx in 0..2 {
        for dy in 0..4 {
            block[dx][dy] = mask & dot_bit(dx as i32, dy as i32) != 0;
        }
    }
    Some(block)
}

/// One braille char per column pair, left to right.
pub fn encode(grid: &Grid) -> String {
    (0..GRID_WIDTH)
        .step_by(2)
        .map(|x| {
            let mut block = [[false; 4]; 2];
            for dx in 0..2 {
                for dy in 0..4 {
                    block[dx][dy] = grid.cell_at(x + dx as i32, dy as i32) != Cell::Empty;
                }
            }
            encode_block(&block)
        })
        .collect()
}

//! Line-oriented maze text format.
//!
//! One line per row, one character per cell:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | ` ` | open |
//! | `o` | start (open) |
//! | `*` | goal (open) |
//!
//! Empty lines are skipped, so files may carry leading or trailing blank
//! lines. Every other line must have the same width.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::geom::Pos;
use crate::grid::Grid;

pub const WALL: char = '#';
pub const OPEN: char = ' ';
pub const START: char = 'o';
pub const GOAL: char = '*';

/// Parse a maze from its text form.
pub fn parse_maze(s: &str) -> Result<Grid, LoadError> {
    let mut cells = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0usize;
    let mut start: Option<Pos> = None;
    let mut goal: Option<Pos> = None;

    for line in s.lines() {
        if line.is_empty() {
            continue;
        }
        let row = height;
        let mut found = 0usize;
        for (col, ch) in line.chars().enumerate() {
            let p = Pos::new(row as i32, col as i32);
            let open = match ch {
                WALL => false,
                OPEN => true,
                START => {
                    if let Some(first) = start {
                        return Err(LoadError::DuplicateStart { first, second: p });
                    }
                    start = Some(p);
                    true
                }
                GOAL => {
                    if let Some(first) = goal {
                        return Err(LoadError::DuplicateGoal { first, second: p });
                    }
                    goal = Some(p);
                    true
                }
                _ => return Err(LoadError::InvalidChar { ch, row, col }),
            };
            cells.push(open);
            found += 1;
        }
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(LoadError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }

    let Some(width) = width else {
        return Err(LoadError::Empty);
    };
    let start = start.ok_or(LoadError::MissingStart)?;
    let goal = goal.ok_or(LoadError::MissingGoal)?;
    Ok(Grid::new(width as i32, height as i32, cells, start, goal)?)
}

/// Read and parse a maze file.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let s = fs::read_to_string(path)?;
    parse_maze(&s)
}

impl Grid {
    /// Render the grid back into the text format accepted by
    /// [`parse_maze`]. When start and goal coincide the cell is written as
    /// the start marker, and the text no longer loads since it has no goal.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for row in 0..self.height() {
            for col in 0..self.width() {
                let p = Pos::new(row, col);
                let ch = if p == self.start() {
                    START
                } else if p == self.goal() {
                    GOAL
                } else if self.passable(p) {
                    OPEN
                } else {
                    WALL
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

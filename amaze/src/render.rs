//! Text rendering of a maze overlaid with search results.
//!
//! The search engine reports positions only; this is where they turn into
//! marker characters.

use amaze_core::{Grid, Pos};
use crossterm::style::{Color, Stylize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    Wall,
    Open,
    Explored,
    Path,
    Start,
    Goal,
}

impl Mark {
    fn glyph(self) -> char {
        match self {
            Mark::Wall => '#',
            Mark::Open => ' ',
            Mark::Explored => '@',
            Mark::Path => '%',
            Mark::Start => 'o',
            Mark::Goal => '*',
        }
    }

    fn color(self) -> Color {
        match self {
            Mark::Wall => Color::DarkGrey,
            Mark::Open => Color::Reset,
            Mark::Explored => Color::Blue,
            Mark::Path => Color::Yellow,
            Mark::Start => Color::Green,
            Mark::Goal => Color::Red,
        }
    }
}

/// Render `grid` with `explored` cells marked `@` and `path` cells marked
/// `%`. Start and goal keep their own markers. Later layers win, so a cell
/// on the path shows as path even though it was also explored.
pub fn render(grid: &Grid, explored: &[Pos], path: &[Pos], color: bool) -> String {
    let mut marks: Vec<Mark> = grid
        .iter()
        .map(|(_, open)| if open { Mark::Open } else { Mark::Wall })
        .collect();
    let mut paint = |p: Pos, m: Mark| {
        if let Some(i) = grid.index(p) {
            marks[i] = m;
        }
    };
    for &p in explored {
        paint(p, Mark::Explored);
    }
    for &p in path {
        paint(p, Mark::Path);
    }
    paint(grid.goal(), Mark::Goal);
    paint(grid.start(), Mark::Start);

    let width = grid.width() as usize;
    let mut out = String::with_capacity((width + 1) * grid.height() as usize);
    for row in marks.chunks(width) {
        for &m in row {
            if color {
                out.push_str(&m.glyph().with(m.color()).to_string());
            } else {
                out.push(m.glyph());
            }
        }
        out.push('\n');
    }
    out
}

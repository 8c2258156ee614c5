use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::geom::Coord;

/// A rectangular maze built from a two-color image.
///
/// `cells[y][x]` is true for a passable cell (white pixel) and false for a
/// wall (black pixel). Exactly two passable cells lie on the border: the
/// entry and exit openings, discovered during construction in border scan
/// order. A maze is immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
    start: Coord,
    end: Coord,
}

impl Maze {
    /// Build a maze from a row-major boolean grid (true = passable).
    ///
    /// Scans the border for openings and fails with [`MazeError::TooFewOpenings`]
    /// or [`MazeError::TooManyOpenings`] unless exactly two passable border
    /// cells exist. The first one found in scan order becomes the start, the
    /// second the end.
    pub fn new(cells: Vec<Vec<bool>>) -> Result<Self> {
        let height = cells.len();
        let width = cells.first().map_or(0, |row| row.len());

        let (start, end) = find_openings(&cells, width, height)?;

        Ok(Self {
            width,
            height,
            cells,
            start,
            end,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The entry opening (first passable border cell in scan order).
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The exit opening (second passable border cell in scan order).
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Whether the coordinate lies inside the maze and is not a wall.
    pub fn is_passable(&self, coord: Coord) -> bool {
        if coord.x < 0 || coord.y < 0 {
            return false;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y][x]
    }
}

/// Scan the border cells exactly once each, in a fixed order: top row, bottom
/// row, then the left and right columns with corners excluded. The first
/// passable cell becomes the start, the second the end; a third is an error.
fn find_openings(cells: &[Vec<bool>], width: usize, height: usize) -> Result<(Coord, Coord)> {
    let mut start: Option<Coord> = None;
    let mut end: Option<Coord> = None;

    let mut check = |x: usize, y: usize| -> Result<()> {
        if !cells[y][x] {
            return Ok(());
        }
        let coord = Coord::new(x as i32, y as i32);
        if start.is_none() {
            start = Some(coord);
        } else if end.is_none() {
            end = Some(coord);
        } else {
            return Err(MazeError::TooManyOpenings);
        }
        Ok(())
    };

    for x in 0..width {
        check(x, 0)?;
    }
    if height > 1 {
        for x in 0..width {
            check(x, height - 1)?;
        }
    }
    for y in 1..height.saturating_sub(1) {
        check(0, y)?;
    }
    if width > 1 {
        for y in 1..height.saturating_sub(1) {
            check(width - 1, y)?;
        }
    }

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(MazeError::TooFewOpenings),
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for &passable in row {
                write!(f, "{}", if passable { " " } else { "X" })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

//! Solver for mazes stored as two-color raster images.
//!
//! A maze image uses one pixel per cell: pure black for walls, pure white
//! for passages. The border must contain exactly two passable cells, the
//! entry and exit openings. [`util::parse_img`] turns a decoded image into a
//! validated [`Maze`], and [`Maze::solve`] finds a shortest path between the
//! openings with A* under a pluggable [`Heuristic`].
//!
//! ```no_run
//! use maze_solver::{util, Heuristic};
//!
//! # fn main() -> anyhow::Result<()> {
//! let img = image::open("maze.png")?;
//! let maze = util::parse_img(&img)?;
//! let path = maze.solve(Heuristic::Euclidean);
//! # Ok(())
//! # }
//! ```

mod error;
mod geom;
mod maze;
mod solve;
pub mod util;

pub use error::{MazeError, Result};
pub use geom::{Coord, Direction};
pub use maze::Maze;
pub use solve::Heuristic;

use thiserror::Error;

/// Errors raised while building a [`crate::Maze`] from pixel data.
///
/// Note that an unsolvable maze is *not* an error: a well-formed maze with no
/// route between its openings solves to an empty path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("pixel at ({x}, {y}) is neither pure black nor pure white: {rgba:?}")]
    InvalidPixelColor { x: u32, y: u32, rgba: [u8; 4] },

    #[error("fewer than two openings on the maze border")]
    TooFewOpenings,

    #[error("more than two openings on the maze border")]
    TooManyOpenings,
}

pub type Result<T> = std::result::Result<T, MazeError>;

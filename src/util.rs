use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use log::warn;

use crate::error::{MazeError, Result};
use crate::geom::Coord;
use crate::maze::Maze;

/// Wall pixels are pure black.
pub const WALL: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Passage pixels are pure white.
pub const PASSAGE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// The solution path is overlaid in pure red.
pub const PATH: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Parse a decoded two-color image into a [`Maze`].
///
/// Each pixel corresponds to one maze cell and must be exactly [`WALL`] or
/// [`PASSAGE`]; the first off-palette pixel encountered in row-major order
/// fails with [`MazeError::InvalidPixelColor`]. No scaling or color
/// tolerance is applied.
pub fn parse_img(img: &DynamicImage) -> Result<Maze> {
    let width = img.width() as usize;
    let height = img.height() as usize;

    let mut cells = vec![vec![false; width]; height];

    for row in 0..height {
        for col in 0..width {
            let p = img.get_pixel(col as u32, row as u32);

            cells[row][col] = if p == PASSAGE {
                true
            } else if p == WALL {
                false
            } else {
                return Err(MazeError::InvalidPixelColor {
                    x: col as u32,
                    y: row as u32,
                    rgba: p.0,
                });
            };
        }
    }

    Maze::new(cells)
}

/// Overlay a solution path onto the source image in [`PATH`] red.
///
/// Coordinates outside the image are ignored; painting over a wall pixel is
/// reported as a warning since it indicates a path that does not belong to
/// this image.
pub fn draw_path(img: &mut RgbaImage, path: &[Coord]) {
    for &coord in path {
        if coord.x < 0 || coord.y < 0 {
            continue;
        }
        let (x, y) = (coord.x as u32, coord.y as u32);
        if x >= img.width() || y >= img.height() {
            continue;
        }

        if *img.get_pixel(x, y) == WALL {
            warn!("path crosses a wall pixel at {}", coord);
        }
        img.put_pixel(x, y, PATH);
    }
}

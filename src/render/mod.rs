//! Offline visualisation of a [`PixelMatrix`](crate::PixelMatrix)
//!
//! Nothing here talks to hardware. Both renderers walk the 64x32 logical
//! panel and read each pixel back through the same address folding the
//! drawing operations use:
//! - ASCII dump, one character per LED
//! - Scaled RGB image for saving as PNG

/// Text dump, one character per LED
pub mod ascii;
/// Scaled RGB image preview
pub mod preview;

pub use ascii::render_ascii;
pub use preview::{MAX_PREVIEW_SCALE, PreviewOptions, render_rgb};

use crate::models::{Colour, PixelMatrix};
use crate::models::layout::{LOGICAL_ROWS, NUM_COLUMNS};

/// On/off state of the three planes at one logical pixel
pub(crate) fn pixel_planes(matrix: &PixelMatrix, row: u32, col: u32) -> [bool; 3] {
    Colour::ALL.map(|colour| matrix.get_pixel(colour, row, col))
}

/// Plane states for every logical pixel, indexed `[row][col]`
pub(crate) fn logical_frame(
    matrix: &PixelMatrix,
) -> [[[bool; 3]; NUM_COLUMNS as usize]; LOGICAL_ROWS as usize] {
    let mut frame = [[[false; 3]; NUM_COLUMNS as usize]; LOGICAL_ROWS as usize];
    for (row, line) in frame.iter_mut().enumerate() {
        for (col, px) in line.iter_mut().enumerate() {
            *px = pixel_planes(matrix, row as u32, col as u32);
        }
    }
    frame
}

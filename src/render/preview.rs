use super::logical_frame;
use crate::config;
use crate::models::PixelMatrix;
use crate::models::layout::{LOGICAL_ROWS, NUM_COLUMNS};
use image::RgbImage;
use rayon::prelude::*;

/// Largest accepted preview scale
pub const MAX_PREVIEW_SCALE: u32 = 64;

const OFF: [u8; 3] = [12, 12, 12];
const GRID: [u8; 3] = [0, 0, 0];

/// Scaling options for [`render_rgb`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Image pixels per LED along each axis, clamped to `1..=MAX_PREVIEW_SCALE`
    pub scale: u32,
    /// Draw a dark separator between LEDs (only when `scale >= 3`)
    pub grid: bool,
}

impl PreviewOptions {
    /// Options from `LED_PREVIEW_SCALE` and `LED_PREVIEW_GRID`
    pub fn from_env() -> Self {
        Self {
            scale: config::preview_scale(),
            grid: config::preview_grid(),
        }
    }
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            scale: 8,
            grid: true,
        }
    }
}

/// Render the panel as an RGB image of `64*scale` x `32*scale` pixels
///
/// Image rows are filled in parallel. The scale is clamped to
/// `1..=MAX_PREVIEW_SCALE`.
pub fn render_rgb(matrix: &PixelMatrix, options: PreviewOptions) -> RgbImage {
    let scale = options.scale.clamp(1, MAX_PREVIEW_SCALE);
    let grid = options.grid && scale >= 3;
    let width = NUM_COLUMNS * scale;
    let height = LOGICAL_ROWS * scale;
    let frame = logical_frame(matrix);

    let mut img = RgbImage::new(width, height);
    let stride = width as usize * 3;
    let buf: &mut [u8] = &mut img;

    buf.par_chunks_mut(stride).enumerate().for_each(|(y, line)| {
        let y = y as u32;
        let leds = &frame[(y / scale) as usize];
        let grid_row = grid && y % scale == scale - 1;
        for (x, px) in line.chunks_exact_mut(3).enumerate() {
            let x = x as u32;
            let rgb = if grid_row || (grid && x % scale == scale - 1) {
                GRID
            } else {
                match leds[(x / scale) as usize] {
                    [false, false, false] => OFF,
                    [r, g, b] => [r as u8 * 255, g as u8 * 255, b as u8 * 255],
                }
            };
            px.copy_from_slice(&rgb);
        }
    });

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Colour;

    #[test]
    fn test_dimensions() {
        let img = render_rgb(&PixelMatrix::new(), PreviewOptions { scale: 4, grid: false });
        assert_eq!(img.dimensions(), (256, 128));
        assert!(img.pixels().all(|p| p.0 == OFF));
    }

    #[test]
    fn test_lit_pixel_block() {
        let mut matrix = PixelMatrix::new();
        matrix.set_pixel(Colour::Red, 20, 40);
        matrix.set_pixel(Colour::Blue, 20, 40);

        let img = render_rgb(&matrix, PreviewOptions { scale: 4, grid: true });
        assert_eq!(img.get_pixel(160, 80).0, [255, 0, 255]);
        assert_eq!(img.get_pixel(162, 82).0, [255, 0, 255]);
        // Last column and row of each block is the separator
        assert_eq!(img.get_pixel(163, 80).0, GRID);
        assert_eq!(img.get_pixel(160, 83).0, GRID);
        assert_eq!(img.get_pixel(0, 0).0, OFF);
    }

    #[test]
    fn test_huge_scale_is_clamped() {
        let img = render_rgb(
            &PixelMatrix::new(),
            PreviewOptions {
                scale: 70_000_000,
                grid: true,
            },
        );
        assert_eq!(
            img.dimensions(),
            (64 * MAX_PREVIEW_SCALE, 32 * MAX_PREVIEW_SCALE)
        );
    }

    #[test]
    fn test_unit_scale_has_no_grid() {
        let mut matrix = PixelMatrix::new();
        matrix.set_pixel(Colour::Green, 0, 0);
        let img = render_rgb(&matrix, PreviewOptions { scale: 0, grid: true });
        assert_eq!(img.dimensions(), (64, 32));
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 0]);
    }
}

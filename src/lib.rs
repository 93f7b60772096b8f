//! led_matrix - bitplane pixel buffer for RGB LED matrix panels
//!
//! A 64x32 panel is stored as 16 scan rows. Each row holds a top-half and a
//! bottom-half line, each line holds red, green and blue bitplanes, and each
//! bitplane is two 32-bit words (left and right 32 columns). This is the
//! layout a scan-out driver shifts to the panel, so [`PixelMatrix`] keeps it
//! bit-exact and draws straight into it.
//!
//! ```
//! use led_matrix::{Colour, PixelMatrix};
//!
//! let mut matrix = PixelMatrix::new();
//! matrix.draw_horizontal(Colour::Red, 2, 24, 60);
//! matrix.draw_vertical(Colour::Blue, 6, 12, 14);
//! assert!(matrix.get_pixel(Colour::Red, 2, 40));
//! assert_eq!(matrix.lit_count(), 37 + 7);
//! ```
//!
//! Coordinates are never rejected. Anything outside the panel folds back
//! into storage (see [`PixelAddress`]).

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Runtime settings read from the environment
mod config;
/// Pixel trace switch
mod debug;
/// Panel layout and the pixel buffer (PixelMatrix, PixelAddress, Colour)
pub mod models;
/// ASCII and image previews
pub mod render;
/// Helpers for the command-line tools
pub mod tools;

pub use models::layout::{HALF_WIDTH, LOGICAL_ROWS, NUM_COLUMNS, NUM_ROWS, WORD_COUNT};
pub use models::{Colour, HorizontalHalf, PixelAddress, PixelMatrix, VerticalHalf};

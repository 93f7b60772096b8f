/// Panel geometry, colours and address translation
pub mod layout;
/// The bitplane buffer itself
pub mod matrix;

pub use layout::{Colour, HorizontalHalf, PixelAddress, VerticalHalf};
pub use matrix::{MatrixProperties, PixelMatrix, PixelRow, RgbRow};

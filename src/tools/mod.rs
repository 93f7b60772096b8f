//! Helpers shared by the command-line tools.

use crate::models::{Colour, PixelMatrix};
use crate::render::{PreviewOptions, render_rgb};
use std::path::Path;
use std::str::FromStr;

/// One drawing call, parsed from `colour:row:col`,
/// `colour:row:col_start:col_end` or `colour:row_start:row_end:col`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Single pixel
    Pixel {
        /// Colour plane
        colour: Colour,
        /// Logical row
        row: u32,
        /// Logical column
        col: u32,
    },
    /// Horizontal run, inclusive
    Horizontal {
        /// Colour plane
        colour: Colour,
        /// Logical row
        row: u32,
        /// First column
        col_start: u32,
        /// Last column
        col_end: u32,
    },
    /// Vertical run, inclusive
    Vertical {
        /// Colour plane
        colour: Colour,
        /// First row
        row_start: u32,
        /// Last row
        row_end: u32,
        /// Logical column
        col: u32,
    },
}

impl DrawCommand {
    /// Parse a pixel argument (`colour:row:col`)
    pub fn parse_pixel(s: &str) -> Result<Self, String> {
        let (colour, n) = split_args::<2>(s)?;
        Ok(DrawCommand::Pixel {
            colour,
            row: n[0],
            col: n[1],
        })
    }

    /// Parse a horizontal line argument (`colour:row:col_start:col_end`)
    pub fn parse_horizontal(s: &str) -> Result<Self, String> {
        let (colour, n) = split_args::<3>(s)?;
        Ok(DrawCommand::Horizontal {
            colour,
            row: n[0],
            col_start: n[1],
            col_end: n[2],
        })
    }

    /// Parse a vertical line argument (`colour:row_start:row_end:col`)
    pub fn parse_vertical(s: &str) -> Result<Self, String> {
        let (colour, n) = split_args::<3>(s)?;
        Ok(DrawCommand::Vertical {
            colour,
            row_start: n[0],
            row_end: n[1],
            col: n[2],
        })
    }

    /// Run the command against a matrix
    pub fn apply(&self, matrix: &mut PixelMatrix) {
        match *self {
            DrawCommand::Pixel { colour, row, col } => matrix.set_pixel(colour, row, col),
            DrawCommand::Horizontal {
                colour,
                row,
                col_start,
                col_end,
            } => matrix.draw_horizontal(colour, row, col_start, col_end),
            DrawCommand::Vertical {
                colour,
                row_start,
                row_end,
                col,
            } => matrix.draw_vertical(colour, row_start, row_end, col),
        }
    }
}

fn split_args<const N: usize>(s: &str) -> Result<(Colour, [u32; N]), String> {
    let mut parts = s.split(':');
    let colour = Colour::from_str(parts.next().unwrap_or(""))?;
    let mut values = [0u32; N];
    for slot in values.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| format!("'{}': expected colour and {} numbers", s, N))?;
        *slot = part
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("'{}': bad number '{}': {}", s, part, e))?;
    }
    if parts.next().is_some() {
        return Err(format!("'{}': expected colour and {} numbers", s, N));
    }
    Ok((colour, values))
}

/// Commands replayed by the demonstration driver, in order
///
/// The matrix is cleared after the first two, so only the vertical line
/// remains lit at the end.
pub fn demo_sequence(matrix: &mut PixelMatrix) {
    DrawCommand::Pixel {
        colour: Colour::Red,
        row: 6,
        col: 40,
    }
    .apply(matrix);
    DrawCommand::Horizontal {
        colour: Colour::Red,
        row: 2,
        col_start: 24,
        col_end: 60,
    }
    .apply(matrix);
    matrix.clear();
    DrawCommand::Vertical {
        colour: Colour::Red,
        row_start: 6,
        row_end: 12,
        col: 14,
    }
    .apply(matrix);
}

/// Save a PNG preview using the environment-configured options
pub fn save_preview<P: AsRef<Path>>(matrix: &PixelMatrix, path: P) -> image::ImageResult<()> {
    save_preview_with(matrix, path, PreviewOptions::from_env())
}

/// Save a PNG preview with explicit options
pub fn save_preview_with<P: AsRef<Path>>(
    matrix: &PixelMatrix,
    path: P,
    options: PreviewOptions,
) -> image::ImageResult<()> {
    render_rgb(matrix, options).save(path)
}

/// Hex dump of the storage words, one physical row per line
///
/// Each line lists top red/green/blue then bottom red/green/blue, with the
/// left and right words of a plane joined by `:`.
pub fn format_words(matrix: &PixelMatrix) -> String {
    let mut out = String::new();
    for (i, row) in matrix.rows().iter().enumerate() {
        out.push_str(&format!("{:2}:", i));
        for half in [&row.top, &row.bottom] {
            for plane in [&half.red, &half.green, &half.blue] {
                out.push_str(&format!(" {:08x}:{:08x}", plane[0], plane[1]));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            DrawCommand::parse_pixel("red:6:40"),
            Ok(DrawCommand::Pixel {
                colour: Colour::Red,
                row: 6,
                col: 40
            })
        );
        assert_eq!(
            DrawCommand::parse_horizontal("g:2:24:60"),
            Ok(DrawCommand::Horizontal {
                colour: Colour::Green,
                row: 2,
                col_start: 24,
                col_end: 60
            })
        );
        assert!(DrawCommand::parse_vertical("blue:6:12").is_err());
        assert!(DrawCommand::parse_pixel("red:6:40:1").is_err());
        assert!(DrawCommand::parse_pixel("red:x:1").is_err());
        assert!(DrawCommand::parse_pixel("pink:1:1").is_err());
    }

    #[test]
    fn test_demo_sequence() {
        let mut matrix = PixelMatrix::new();
        demo_sequence(&mut matrix);
        assert_eq!(matrix.lit_count(), 7);
        for row in 6..=12 {
            assert!(matrix.get_pixel(Colour::Red, row, 14));
        }
        assert!(!matrix.get_pixel(Colour::Red, 6, 40));
        assert!(!matrix.get_pixel(Colour::Red, 2, 30));
    }

    #[test]
    fn test_format_words() {
        let mut matrix = PixelMatrix::new();
        matrix.set_pixel(Colour::Red, 6, 40);
        let dump = format_words(&matrix);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines[6].starts_with(" 6: 00000000:00000100 "));
    }
}

//! Panel geometry and the logical-to-physical address translation.

use std::fmt;

/// Physical rows of storage (each row drives one top and one bottom line)
pub const NUM_ROWS: usize = 16;
/// Logical columns across the whole panel
pub const NUM_COLUMNS: u32 = 64;
/// Columns covered by one 32-bit half-word
pub const HALF_WIDTH: u32 = 32;
/// Logical rows that map onto a distinct (row, half) pair
pub const LOGICAL_ROWS: u32 = 32;
/// Storage words per physical row: 2 halves x 3 colours x 2 sides
pub const WORDS_PER_ROW: usize = 12;
/// Storage words in the whole buffer
pub const WORD_COUNT: usize = NUM_ROWS * WORDS_PER_ROW;

/// Colour channel, one bitplane each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Red plane
    Red,
    /// Green plane
    Green,
    /// Blue plane
    Blue,
}

impl Colour {
    /// All colours in storage order
    pub const ALL: [Colour; 3] = [Colour::Red, Colour::Green, Colour::Blue];

    /// Lower-case name, as printed by the pixel trace
    pub fn name(&self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Colour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Colour::Red),
            "g" | "green" => Ok(Colour::Green),
            "b" | "blue" => Ok(Colour::Blue),
            other => Err(format!("unknown colour '{}'", other)),
        }
    }
}

/// Top/bottom panel half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalHalf {
    /// Logical rows 0..16
    Top,
    /// Logical rows 16..32
    Bottom,
}

impl VerticalHalf {
    fn from_row(row: u32) -> Self {
        if row >= NUM_ROWS as u32 {
            VerticalHalf::Bottom
        } else {
            VerticalHalf::Top
        }
    }
}

/// Left/right word within a bitplane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalHalf {
    /// Columns 0..32
    Left,
    /// Columns 32..64
    Right,
}

impl HorizontalHalf {
    fn from_column(col: u32) -> Self {
        if col >= HALF_WIDTH {
            HorizontalHalf::Right
        } else {
            HorizontalHalf::Left
        }
    }

    /// Index into a bitplane's two words
    pub fn index(&self) -> usize {
        match self {
            HorizontalHalf::Left => 0,
            HorizontalHalf::Right => 1,
        }
    }
}

/// Storage location of one logical pixel bit
///
/// Resolution never fails. Coordinates outside the 32x64 panel fold back
/// into storage: `row % 16` picks the physical row while `row >= 16` alone
/// picks the half, so every row from 16 upwards lands in the bottom half.
/// Columns behave the same way with `col % 32` and `col >= 32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelAddress {
    /// Physical row, 0..16
    pub row_index: usize,
    /// Top or bottom half record
    pub half: VerticalHalf,
    /// Left or right word of the bitplane
    pub side: HorizontalHalf,
    /// Bit within the word, 0..32
    pub bit: u32,
}

impl PixelAddress {
    /// Translate a logical (row, column) pair
    pub fn resolve(row: u32, col: u32) -> Self {
        Self {
            row_index: (row % NUM_ROWS as u32) as usize,
            half: VerticalHalf::from_row(row),
            side: HorizontalHalf::from_column(col),
            bit: col % HALF_WIDTH,
        }
    }

    /// Single-bit mask for this pixel within its word
    pub fn mask(&self) -> u32 {
        1 << self.bit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_quadrants() {
        let a = PixelAddress::resolve(6, 40);
        assert_eq!(a.row_index, 6);
        assert_eq!(a.half, VerticalHalf::Top);
        assert_eq!(a.side, HorizontalHalf::Right);
        assert_eq!(a.bit, 8);
        assert_eq!(a.mask(), 1 << 8);

        let b = PixelAddress::resolve(31, 0);
        assert_eq!(b.row_index, 15);
        assert_eq!(b.half, VerticalHalf::Bottom);
        assert_eq!(b.side, HorizontalHalf::Left);
        assert_eq!(b.bit, 0);
    }

    #[test]
    fn test_resolve_folds_out_of_range() {
        // Rows past 31 re-alias onto 0..16 but always in the bottom half
        let a = PixelAddress::resolve(35, 70);
        assert_eq!(a.row_index, 3);
        assert_eq!(a.half, VerticalHalf::Bottom);
        assert_eq!(a.side, HorizontalHalf::Right);
        assert_eq!(a.bit, 6);

        let max = PixelAddress::resolve(u32::MAX, u32::MAX);
        assert_eq!(max.row_index, 15);
        assert_eq!(max.bit, 31);
        assert_eq!(max.mask(), 0x8000_0000);
    }

    #[test]
    fn test_colour_parse() {
        assert_eq!("RED".parse::<Colour>(), Ok(Colour::Red));
        assert_eq!("g".parse::<Colour>(), Ok(Colour::Green));
        assert!("purple".parse::<Colour>().is_err());
        assert_eq!(Colour::Blue.to_string(), "blue");
    }
}

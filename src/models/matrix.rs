use super::layout::{
    Colour, HALF_WIDTH, LOGICAL_ROWS, NUM_COLUMNS, NUM_ROWS, PixelAddress, VerticalHalf,
    WORD_COUNT,
};
use crate::debug::{debug_enabled, pixel_trace};
use std::fmt;

/// Three independent bitplanes for one half-row, two words per plane
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelRow {
    /// Red plane: `[left, right]`
    pub red: [u32; 2],
    /// Green plane: `[left, right]`
    pub green: [u32; 2],
    /// Blue plane: `[left, right]`
    pub blue: [u32; 2],
}

impl PixelRow {
    /// Words of one colour plane
    pub fn plane(&self, colour: Colour) -> &[u32; 2] {
        match colour {
            Colour::Red => &self.red,
            Colour::Green => &self.green,
            Colour::Blue => &self.blue,
        }
    }

    /// Mutable words of one colour plane
    pub fn plane_mut(&mut self, colour: Colour) -> &mut [u32; 2] {
        match colour {
            Colour::Red => &mut self.red,
            Colour::Green => &mut self.green,
            Colour::Blue => &mut self.blue,
        }
    }

    /// Words in memory order
    pub fn words(&self) -> [u32; 6] {
        [
            self.red[0],
            self.red[1],
            self.green[0],
            self.green[1],
            self.blue[0],
            self.blue[1],
        ]
    }
}

/// One physical scan row: a top-half line and a bottom-half line
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbRow {
    /// Line in the top half of the panel
    pub top: PixelRow,
    /// Line in the bottom half of the panel
    pub bottom: PixelRow,
}

impl RgbRow {
    /// Half-row record selected by `half`
    pub fn half(&self, half: VerticalHalf) -> &PixelRow {
        match half {
            VerticalHalf::Top => &self.top,
            VerticalHalf::Bottom => &self.bottom,
        }
    }

    /// Mutable half-row record selected by `half`
    pub fn half_mut(&mut self, half: VerticalHalf) -> &mut PixelRow {
        match half {
            VerticalHalf::Top => &mut self.top,
            VerticalHalf::Bottom => &mut self.bottom,
        }
    }
}

/// Bitplane pixel buffer for a 64x32 RGB LED panel
///
/// Storage is a fixed array of 16 [`RgbRow`]s, laid out exactly as the scan
/// driver reads it. A pixel is one bit in one word; drawing only ever ORs
/// bits in, so nothing short of [`PixelMatrix::clear`] turns a pixel off.
///
/// The buffer has no interior locking. Share it behind a `Mutex` if more
/// than one thread draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    rows: [RgbRow; NUM_ROWS],
}

impl PixelMatrix {
    /// Create a blank matrix (all pixels off)
    pub fn new() -> Self {
        Self {
            rows: [RgbRow::default(); NUM_ROWS],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.rows.fill(RgbRow::default());
    }

    /// Turn on one pixel of one colour
    ///
    /// Out-of-range coordinates are folded into storage, see
    /// [`PixelAddress`]. Setting a pixel that is already on changes nothing.
    pub fn set_pixel(&mut self, colour: Colour, row: u32, col: u32) {
        if debug_enabled() {
            eprintln!("{}", pixel_trace(colour, row, col));
        }

        let addr = PixelAddress::resolve(row, col);
        self.rows[addr.row_index]
            .half_mut(addr.half)
            .plane_mut(colour)[addr.side.index()] |= addr.mask();
    }

    /// Read one pixel back, using the same folding as [`set_pixel`](Self::set_pixel)
    pub fn get_pixel(&self, colour: Colour, row: u32, col: u32) -> bool {
        let addr = PixelAddress::resolve(row, col);
        let word = self.rows[addr.row_index].half(addr.half).plane(colour)[addr.side.index()];
        word & addr.mask() != 0
    }

    /// Draw columns `col_start..=col_end` on `row`
    ///
    /// Ranges only run upwards; `col_start > col_end` draws nothing.
    pub fn draw_horizontal(&mut self, colour: Colour, row: u32, col_start: u32, col_end: u32) {
        for col in col_start..=col_end {
            self.set_pixel(colour, row, col);
        }
    }

    /// Draw rows `row_start..=row_end` on `col`
    pub fn draw_vertical(&mut self, colour: Colour, row_start: u32, row_end: u32, col: u32) {
        for row in row_start..=row_end {
            self.set_pixel(colour, row, col);
        }
    }

    /// Backing storage, in driver order
    pub fn rows(&self) -> &[RgbRow; NUM_ROWS] {
        &self.rows
    }

    /// Every storage word in driver order: row, then top/bottom, then
    /// red/green/blue, then left/right
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows
            .iter()
            .flat_map(|row| [row.top, row.bottom])
            .flat_map(|half| half.words())
    }

    /// Copy of the storage as a flat word array
    pub fn to_words(&self) -> [u32; WORD_COUNT] {
        let mut out = [0u32; WORD_COUNT];
        for (slot, word) in out.iter_mut().zip(self.words()) {
            *slot = word;
        }
        out
    }

    /// True when no pixel of any colour is on
    pub fn is_blank(&self) -> bool {
        self.words().all(|w| w == 0)
    }

    /// Number of set bits across all planes
    pub fn lit_count(&self) -> u32 {
        self.words().map(u32::count_ones).sum()
    }

    /// Static dimensions of the buffer
    pub fn properties(&self) -> MatrixProperties {
        MatrixProperties {
            rows: NUM_ROWS,
            logical_rows: LOGICAL_ROWS,
            columns: NUM_COLUMNS,
            half_width: HALF_WIDTH,
            colours: Colour::ALL.len(),
            words: WORD_COUNT,
        }
    }

    /// Print [`properties`](Self::properties) to stdout
    pub fn print_properties(&self) {
        println!("{}", self.properties());
    }
}

impl Default for PixelMatrix {
    fn default() -> Self {
        Self::new()
    }
}

/// Dimension metadata reported by [`PixelMatrix::properties`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixProperties {
    /// Physical storage rows
    pub rows: usize,
    /// Logical rows with a distinct half selector
    pub logical_rows: u32,
    /// Logical columns
    pub columns: u32,
    /// Columns per half-word
    pub half_width: u32,
    /// Colour planes
    pub colours: usize,
    /// Total 32-bit storage words
    pub words: usize,
}

impl fmt::Display for MatrixProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pixel matrix: {} rows x 2 halves ({}x{} logical), {} colour planes, {} words",
            self.rows, self.columns, self.logical_rows, self.colours, self.words
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_matrix() {
        let mut matrix = PixelMatrix::new();
        assert!(matrix.is_blank());

        matrix.set_pixel(Colour::Red, 6, 40);
        assert!(matrix.get_pixel(Colour::Red, 6, 40));
        assert!(!matrix.get_pixel(Colour::Red, 6, 39));
        assert_eq!(matrix.rows()[6].top.red, [0, 1 << 8]);
        assert_eq!(matrix.lit_count(), 1);

        matrix.clear();
        assert!(!matrix.get_pixel(Colour::Red, 6, 40));
        assert!(matrix.is_blank());
    }

    #[test]
    fn test_colour_selects_plane() {
        let mut matrix = PixelMatrix::new();
        matrix.set_pixel(Colour::Green, 20, 3);
        matrix.set_pixel(Colour::Blue, 20, 3);

        let bottom = matrix.rows()[4].bottom;
        assert_eq!(bottom.red, [0, 0]);
        assert_eq!(bottom.green, [1 << 3, 0]);
        assert_eq!(bottom.blue, [1 << 3, 0]);
    }

    #[test]
    fn test_words_driver_order() {
        let mut matrix = PixelMatrix::new();
        matrix.set_pixel(Colour::Red, 0, 0); // word 0
        matrix.set_pixel(Colour::Blue, 0, 63); // top blue right: word 5
        matrix.set_pixel(Colour::Green, 16, 32); // bottom green right: word 6 + 3
        matrix.set_pixel(Colour::Red, 1, 1); // next row: word 12

        let words = matrix.to_words();
        assert_eq!(words.len(), WORD_COUNT);
        assert_eq!(words[0], 1);
        assert_eq!(words[5], 1 << 31);
        assert_eq!(words[9], 1);
        assert_eq!(words[12], 1 << 1);
        assert_eq!(words.iter().filter(|&&w| w != 0).count(), 4);
    }

    #[test]
    fn test_repr_c_layout() {
        assert_eq!(std::mem::size_of::<PixelRow>(), 6 * 4);
        assert_eq!(std::mem::size_of::<RgbRow>(), 12 * 4);
        assert_eq!(std::mem::size_of::<[RgbRow; NUM_ROWS]>(), WORD_COUNT * 4);
    }

    #[test]
    fn test_range_to_max_terminates() {
        let mut matrix = PixelMatrix::new();
        matrix.draw_horizontal(Colour::Red, 0, u32::MAX - 1, u32::MAX);
        // Both fold onto the right word, bits 30 and 31
        assert!(matrix.get_pixel(Colour::Red, 0, 63));
        assert!(matrix.get_pixel(Colour::Red, 0, 62));
        assert!(!matrix.get_pixel(Colour::Red, 0, 31));
        assert_eq!(matrix.lit_count(), 2);
    }

    #[test]
    fn test_properties() {
        let props = PixelMatrix::new().properties();
        assert_eq!(props.rows, 16);
        assert_eq!(props.columns, 64);
        assert_eq!(props.words, 192);
        assert!(props.to_string().contains("16 rows"));
    }
}

use super::logical_frame;
use crate::models::PixelMatrix;

fn glyph(planes: [bool; 3]) -> char {
    match planes {
        [false, false, false] => '.',
        [true, false, false] => 'R',
        [false, true, false] => 'G',
        [false, false, true] => 'B',
        [true, true, false] => 'Y',
        [true, false, true] => 'M',
        [false, true, true] => 'C',
        [true, true, true] => 'W',
    }
}

/// Render the panel as 32 lines of 64 characters
///
/// `.` is off, `R`/`G`/`B` a single plane, `Y`/`M`/`C` two planes and `W`
/// all three.
pub fn render_ascii(matrix: &PixelMatrix) -> String {
    let frame = logical_frame(matrix);
    let mut out = String::with_capacity(frame.len() * (frame[0].len() + 1));
    for line in frame.iter() {
        out.extend(line.iter().copied().map(glyph));
        out.push('\n');
    }
    out
}

// Demonstration driver: build one matrix and replay the demo sequence
use led_matrix::PixelMatrix;
use led_matrix::render::render_ascii;
use led_matrix::tools::demo_sequence;

fn main() {
    let mut matrix = PixelMatrix::new();
    matrix.print_properties();

    demo_sequence(&mut matrix);

    print!("{}", render_ascii(&matrix));
    println!("Lit pixels: {}", matrix.lit_count());
}

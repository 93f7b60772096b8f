use clap::{Args, Parser, Subcommand};
use led_matrix::PixelMatrix;
use led_matrix::render::{MAX_PREVIEW_SCALE, PreviewOptions, render_ascii};
use led_matrix::tools::{DrawCommand, demo_sequence, format_words, save_preview, save_preview_with};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "matrixtool", version, about = "LED matrix buffer tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay the demonstration sequence and print the panel
    Demo,
    /// Draw and print the panel as text
    Ascii {
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Draw and save a PNG preview
    Preview {
        #[command(flatten)]
        draw: DrawArgs,
        #[arg(long)]
        out: PathBuf,
        /// Image pixels per LED, 1 to 64 (overrides LED_PREVIEW_SCALE)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PREVIEW_SCALE as i64))]
        scale: Option<u32>,
    },
    /// Draw and print the raw storage words
    Words {
        #[command(flatten)]
        draw: DrawArgs,
    },
}

#[derive(Args)]
struct DrawArgs {
    /// Pixel as colour:row:col
    #[arg(long = "pixel", value_parser = DrawCommand::parse_pixel)]
    pixels: Vec<DrawCommand>,
    /// Horizontal line as colour:row:col_start:col_end
    #[arg(long = "hline", value_parser = DrawCommand::parse_horizontal)]
    hlines: Vec<DrawCommand>,
    /// Vertical line as colour:row_start:row_end:col
    #[arg(long = "vline", value_parser = DrawCommand::parse_vertical)]
    vlines: Vec<DrawCommand>,
}

impl DrawArgs {
    // Falls back to the demo sequence when no command is given
    fn build(&self) -> PixelMatrix {
        let mut matrix = PixelMatrix::new();
        let commands: Vec<&DrawCommand> = self
            .pixels
            .iter()
            .chain(&self.hlines)
            .chain(&self.vlines)
            .collect();
        if commands.is_empty() {
            demo_sequence(&mut matrix);
        } else {
            for cmd in commands {
                cmd.apply(&mut matrix);
            }
        }
        matrix
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo => demo_cmd(),
        Command::Ascii { draw } => print!("{}", render_ascii(&draw.build())),
        Command::Preview { draw, out, scale } => preview_cmd(&draw.build(), &out, scale),
        Command::Words { draw } => print!("{}", format_words(&draw.build())),
    }
}

fn demo_cmd() {
    let mut matrix = PixelMatrix::new();
    matrix.print_properties();
    demo_sequence(&mut matrix);
    print!("{}", render_ascii(&matrix));
    println!("Lit pixels: {}", matrix.lit_count());
}

fn preview_cmd(matrix: &PixelMatrix, out: &Path, scale: Option<u32>) {
    let result = match scale {
        Some(scale) => {
            let options = PreviewOptions {
                scale,
                ..PreviewOptions::from_env()
            };
            save_preview_with(matrix, out, options)
        }
        None => save_preview(matrix, out),
    };
    match result {
        Ok(()) => println!("Wrote {} ({} lit pixels)", out.display(), matrix.lit_count()),
        Err(err) => eprintln!("Failed to write preview {}: {}", out.display(), err),
    }
}

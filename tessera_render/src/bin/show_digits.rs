// Tile a batch of flattened images into one mosaic PNG.
//
// Usage:
//   show_digits <json-file> [--out PATH] [--grid S | R,C] [--spacing N]
//     [--channels N] [--scale N] [--no-normalize] [--config PATH]
//
// The input is a JSON array of rows, one flattened square tile per row. With
// no --grid, a square grid is inferred when the tile count is a perfect
// square below 625.

use std::path::Path;

use tessera_render::args::{output_path, positional, render_config};
use tessera_render::pipeline::render_tiles;
use tessera_render::{RenderError, init_logging};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let Some(input) = positional(&args) else {
        print_usage();
        return;
    };
    if let Err(e) = run(input, &args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(input: &str, args: &[String]) -> Result<(), RenderError> {
    let config = render_config(args)?;
    let output = output_path(args, input)?;
    let (width, height) = render_tiles(Path::new(input), &output, &config)?;
    println!("Wrote {width}x{height} mosaic to {}", output.display());
    Ok(())
}

fn print_usage() {
    println!("Usage:");
    println!("  show_digits <json-file> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --out <PATH>        Output PNG (default: input with .png extension)");
    println!("  --grid <S|R,C>      Grid shape (default: inferred square)");
    println!("  --spacing <N>       Pixels between tiles (default: 1)");
    println!("  --channels <N>      Planes per tile row (default: 1)");
    println!("  --scale <N>         Integer upscaling factor (default: 1)");
    println!("  --no-normalize      Clamp values to [0, 1] instead of stretching");
    println!("  --config <PATH>     JSON render config; flags override it");
}

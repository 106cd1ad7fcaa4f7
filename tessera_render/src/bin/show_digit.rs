// Render one flattened square image (e.g. a 784-value MNIST digit) as PNG.
//
// Usage:
//   show_digit <json-file> [--out PATH] [--scale N] [--no-normalize] [--config PATH]

use std::path::Path;

use tessera_render::args::{output_path, positional, render_config};
use tessera_render::pipeline::render_image;
use tessera_render::{RenderError, init_logging};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let Some(input) = positional(&args) else {
        println!("Usage:");
        println!("  show_digit <json-file> [--out PATH] [--scale N] [--no-normalize]");
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
    let (width, height) = render_image(Path::new(input), &output, &config)?;
    println!("Wrote {width}x{height} image to {}", output.display());
    Ok(())
}

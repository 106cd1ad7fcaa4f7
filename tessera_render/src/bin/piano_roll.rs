// Render a one-hot note sequence as a piano-roll PNG.
//
// Usage:
//   piano_roll <json-file> [--out PATH] [--scale N] [--no-normalize]
//
// The input is a JSON array of time steps, each an equal-length key vector
// (as written by convert_music). Time runs left to right; high notes are at
// the top.

use std::path::Path;

use tessera_render::args::{output_path, positional, render_config};
use tessera_render::pipeline::render_piano_roll;
use tessera_render::{RenderError, init_logging};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let Some(input) = positional(&args) else {
        println!("Usage:");
        println!("  piano_roll <json-file> [--out PATH] [--scale N] [--no-normalize]");
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
    let (width, height) = render_piano_roll(Path::new(input), &output, &config)?;
    println!("Wrote {width}x{height} piano roll to {}", output.display());
    Ok(())
}

// Convert note-tuple corpora into one-hot piano-key corpora.
//
// Usage:
//   convert_music <corpus.json>...
//   convert_music --known
//
// Each input maps split names to sequences of time steps, each step listing
// the MIDI notes sounding (21..=108). The output keeps that nesting with an
// 88-element 0/1 vector per step, written next to the input
// (`name.notes.json` -> `name.json`, otherwise `name.rolls.json`).
//
// --known converts `<name>.notes.json` in the current directory for each of
// the four benchmark corpora, skipping any that are missing.

use std::path::PathBuf;

use tessera_music::corpus::KNOWN_CORPORA;
use tessera_music::notes::pitch_name;
use tessera_render::pipeline::{convert_corpus_file, roll_output_path};
use tessera_render::{RenderError, init_logging};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<PathBuf> = if args.iter().any(|a| a == "--known") {
        KNOWN_CORPORA
            .iter()
            .map(|name| PathBuf::from(format!("{name}.notes.json")))
            .filter(|path| {
                let exists = path.exists();
                if !exists {
                    log::warn!("skipping {}: not found", path.display());
                }
                exists
            })
            .collect()
    } else {
        args.iter().map(PathBuf::from).collect()
    };

    if inputs.is_empty() {
        println!("Usage:");
        println!("  convert_music <corpus.json>...");
        println!("  convert_music --known");
        return;
    }

    let mut failed = false;
    for input in &inputs {
        if let Err(e) = convert(input) {
            eprintln!("Error converting {}: {e}", input.display());
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn convert(input: &std::path::Path) -> Result<(), RenderError> {
    let output = roll_output_path(input);
    let stats = convert_corpus_file(input, &output)?;
    let range = match (stats.lowest, stats.highest) {
        (Some(lo), Some(hi)) => format!("{}-{}", pitch_name(lo), pitch_name(hi)),
        _ => "silent".to_string(),
    };
    println!(
        "{} -> {}: {} sequences, {} steps ({} silent), range {}",
        input.display(),
        output.display(),
        stats.sequences,
        stats.steps,
        stats.silent_steps,
        range
    );
    Ok(())
}

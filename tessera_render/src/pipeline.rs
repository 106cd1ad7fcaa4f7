// File-to-file pipelines behind the binaries.
//
// Each function is one command: load JSON, build an array, and either save
// a PNG or write converted JSON. Kept in the library so the integration
// tests drive exactly what the binaries run.

use std::path::{Path, PathBuf};

use tessera_mosaic::{Canvas, layout};
use tessera_music::corpus::{CorpusStats, NoteCorpus, convert_corpus};
use tessera_music::piano_roll::piano_roll;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::image_out::save_png;
use crate::loader::{load_batch, load_image, load_sequence};

/// Lay out a JSON batch of flattened tiles and save the mosaic.
pub fn render_tiles(
    input: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<(u32, u32), RenderError> {
    let batch = load_batch(input)?;
    let canvas = layout(batch.view(), &config.layout_options()?)?;
    save_png(&canvas, output, config)
}

/// Save one flattened square image.
pub fn render_image(
    input: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<(u32, u32), RenderError> {
    let canvas = Canvas::from(load_image(input)?);
    save_png(&canvas, output, config)
}

/// Save a one-hot sequence as a piano roll (time left to right, high notes
/// on top).
pub fn render_piano_roll(
    input: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<(u32, u32), RenderError> {
    let steps = load_sequence(input)?;
    let canvas = Canvas::from(piano_roll(&steps)?);
    save_png(&canvas, output, config)
}

/// Convert a note-tuple corpus file into a one-hot corpus file.
pub fn convert_corpus_file(input: &Path, output: &Path) -> Result<CorpusStats, RenderError> {
    let corpus = NoteCorpus::load(input)?;
    let stats = corpus.stats();
    convert_corpus(&corpus)?.save(output)?;
    Ok(stats)
}

/// Where `convert_corpus_file` writes by default: `name.notes.json` becomes
/// `name.json`, anything else `name.rolls.json`.
pub fn roll_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let converted = match name.strip_suffix(".notes.json") {
        Some(base) => format!("{base}.json"),
        None => {
            let stem = name.strip_suffix(".json").unwrap_or(&name);
            format!("{stem}.rolls.json")
        }
    };
    input.with_file_name(converted)
}

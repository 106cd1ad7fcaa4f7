// tessera_render — loaders, PNG output and command-line tools.
//
// Glue around the two array crates: `tessera_mosaic` lays out tile batches,
// `tessera_music` builds piano rolls and one-hot corpora. This crate reads
// their JSON inputs, writes PNG images via the `image` crate, and hosts the
// binaries in `src/bin/`:
//
// - show_digits:   tile a JSON batch of flattened images into one mosaic.
// - show_digit:    render a single flattened square image.
// - piano_roll:    render a one-hot note sequence.
// - convert_music: convert note-tuple corpora to one-hot corpora.
//
// Module overview:
// - config.rs:    RenderConfig (JSON file + defaults).
// - loader.rs:    JSON → TileBatch / square image / step sequence.
// - image_out.rs: Canvas → 8-bit image → PNG.
// - pipeline.rs:  One function per command, file in → file out.
// - args.rs:      Flag parsing shared by the binaries.
// - error.rs:     RenderError.

pub mod args;
pub mod config;
pub mod error;
pub mod image_out;
pub mod loader;
pub mod pipeline;

pub use config::RenderConfig;
pub use error::RenderError;

/// Install the `env_logger` backend, defaulting to `info` unless `RUST_LOG`
/// says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

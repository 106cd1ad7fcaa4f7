// Errors for loading, rendering and the command-line tools.

use thiserror::Error;

use tessera_mosaic::MosaicError;
use tessera_music::{CorpusError, NoteError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Mosaic(#[from] MosaicError),
    #[error(transparent)]
    Note(#[from] NoteError),
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("cannot render {0} channels (supported: 1, 2, 3, 4)")]
    UnsupportedChannels(usize),
    #[error("image of {width}x{height} pixels is too large")]
    TooLarge { width: usize, height: usize },
    #[error("{0}")]
    BadArgument(String),
}

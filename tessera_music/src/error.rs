// Error types for note encoding and corpus conversion.

use thiserror::Error;

use crate::notes::Note;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("note {note} is outside the piano range 21..=108")]
    OutOfRange { note: Note },
    #[error("step {step} has {found} keys, expected {expected}")]
    RaggedSequence {
        step: usize,
        expected: usize,
        found: usize,
    },
    #[error("sequence has no time steps")]
    EmptySequence,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("corpus JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("split '{split}', sequence {sequence}: {source}")]
    Note {
        split: String,
        sequence: usize,
        #[source]
        source: NoteError,
    },
}

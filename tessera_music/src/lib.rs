// tessera_music — polyphonic note corpora as arrays.
//
// Converts corpora of note tuples (the MIDI notes sounding at each time step
// of each sequence) into one-hot 88-key vectors, and turns a single
// sequence into a piano-roll array that the renderer can save as an image.
//
// Module overview:
// - notes.rs:      Piano key range, one-hot encode/decode, pitch names.
// - corpus.rs:     NoteCorpus / RollCorpus JSON types, parallel conversion,
//                  corpus statistics.
// - piano_roll.rs: (keys × steps) arrays with the highest key on top.
// - error.rs:      NoteError and CorpusError.

pub mod corpus;
pub mod error;
pub mod notes;
pub mod piano_roll;

pub use error::{CorpusError, NoteError};

// One-hot piano-key vectors.
//
// A time step of a polyphonic piece is the set of MIDI notes sounding at
// that step. It is encoded as an 88-element 0/1 vector, one slot per piano
// key from A0 (MIDI 21) to C8 (MIDI 108). Notes are read as plain signed
// integers, so any value outside that range (negative, or beyond a byte) is
// rejected as out of range rather than clipped.

use crate::error::NoteError;

/// MIDI number of the lowest piano key (A0).
pub const LOWEST_NOTE: u8 = 21;
/// MIDI number of the highest piano key (C8).
pub const HIGHEST_NOTE: u8 = 108;
/// Number of piano keys.
pub const KEY_COUNT: usize = (HIGHEST_NOTE - LOWEST_NOTE) as usize + 1;

/// A MIDI note number as it appears in a corpus file.
pub type Note = i64;

/// 0/1 activity per key, index 0 = A0.
pub type NoteVector = Vec<u8>;

/// Encode the notes sounding at one time step. An empty step is silence.
pub fn encode_step(notes: &[Note]) -> Result<NoteVector, NoteError> {
    let mut out = vec![0u8; KEY_COUNT];
    for &note in notes {
        out[key_index(note)?] = 1;
    }
    Ok(out)
}

/// The notes active in a one-hot vector, ascending.
pub fn decode_step(vector: &[u8]) -> Vec<Note> {
    vector
        .iter()
        .zip(LOWEST_NOTE..=HIGHEST_NOTE)
        .filter(|&(&on, _)| on != 0)
        .map(|(_, note)| Note::from(note))
        .collect()
}

/// Slot of `note` in a `NoteVector`.
pub fn key_index(note: Note) -> Result<usize, NoteError> {
    let lowest = Note::from(LOWEST_NOTE);
    if !(lowest..=Note::from(HIGHEST_NOTE)).contains(&note) {
        return Err(NoteError::OutOfRange { note });
    }
    Ok((note - lowest) as usize)
}

/// Scientific pitch name for a MIDI number (e.g. 21 → "A0", 60 → "C4").
pub fn pitch_name(note: Note) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
    ];
    let octave = note.div_euclid(12) - 1;
    format!("{}{}", NAMES[note.rem_euclid(12) as usize], octave)
}

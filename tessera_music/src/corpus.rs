// Whole-corpus conversion from note tuples to one-hot piano rolls.
//
// A corpus is a JSON object mapping split names ("test", "train", "valid")
// to lists of sequences; each sequence is a list of time steps; each step is
// the list of MIDI notes sounding at that step:
//
//     {"train": [[[60, 64, 67], [62], []], ...], "test": [...], ...}
//
// `convert_corpus` keeps that nesting and replaces every step with its
// 88-key `NoteVector`. Split names are preserved as-is. Sequences within a
// split are converted in parallel with rayon; output order always matches
// input order, and the reported error is the first one in input order.

use std::collections::BTreeMap;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, NoteError};
use crate::notes::{HIGHEST_NOTE, LOWEST_NOTE, Note, NoteVector, encode_step};

/// Base names of the four polyphonic benchmark corpora.
pub const KNOWN_CORPORA: [&str; 4] = ["JSB-Chorales", "MuseData", "Nottingham", "Piano-midi.de"];

/// Sequences of note tuples, keyed by split name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCorpus {
    pub splits: BTreeMap<String, Vec<Vec<Vec<Note>>>>,
}

/// Sequences of one-hot key vectors, keyed by split name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollCorpus {
    pub splits: BTreeMap<String, Vec<Vec<NoteVector>>>,
}

impl NoteCorpus {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let data = std::fs::read_to_string(path)?;
        let corpus: NoteCorpus = serde_json::from_str(&data)?;
        log::info!(
            "loaded {} split(s) from {}",
            corpus.splits.len(),
            path.display()
        );
        Ok(corpus)
    }

    pub fn stats(&self) -> CorpusStats {
        let mut stats = CorpusStats::default();
        for sequences in self.splits.values() {
            stats.sequences += sequences.len();
            for step in sequences.iter().flatten() {
                stats.steps += 1;
                if step.is_empty() {
                    stats.silent_steps += 1;
                }
                for &note in step {
                    stats.lowest = Some(stats.lowest.map_or(note, |lo| lo.min(note)));
                    stats.highest = Some(stats.highest.map_or(note, |hi| hi.max(note)));
                }
            }
        }
        stats
    }
}

impl RollCorpus {
    /// Write as compact JSON.
    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

/// Counts over every split of a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub sequences: usize,
    pub steps: usize,
    pub silent_steps: usize,
    /// Lowest note present, if any step is non-empty.
    pub lowest: Option<Note>,
    pub highest: Option<Note>,
}

impl CorpusStats {
    /// True if every note fits on the piano keyboard.
    pub fn in_piano_range(&self) -> bool {
        self.lowest.is_none_or(|lo| lo >= Note::from(LOWEST_NOTE))
            && self.highest.is_none_or(|hi| hi <= Note::from(HIGHEST_NOTE))
    }
}

/// Encode every step of one sequence.
pub fn encode_sequence(sequence: &[Vec<Note>]) -> Result<Vec<NoteVector>, NoteError> {
    sequence.iter().map(|step| encode_step(step)).collect()
}

/// Convert a whole corpus. Fails on the first out-of-range note.
pub fn convert_corpus(corpus: &NoteCorpus) -> Result<RollCorpus, CorpusError> {
    let mut splits = BTreeMap::new();
    for (name, sequences) in &corpus.splits {
        let encoded: Vec<Result<Vec<NoteVector>, NoteError>> = sequences
            .par_iter()
            .map(|sequence| encode_sequence(sequence))
            .collect();
        let mut rolls = Vec::with_capacity(encoded.len());
        for (index, result) in encoded.into_iter().enumerate() {
            rolls.push(result.map_err(|source| CorpusError::Note {
                split: name.clone(),
                sequence: index,
                source,
            })?);
        }
        log::debug!("split '{}': {} sequence(s) encoded", name, rolls.len());
        splits.insert(name.clone(), rolls);
    }
    Ok(RollCorpus { splits })
}

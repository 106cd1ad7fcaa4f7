// Piano-roll arrays for sequence visualization.
//
// A sequence of per-step key vectors becomes a (keys × steps) array: time
// runs left to right, and the row order is flipped so the highest key is
// row 0 (top of the image) and the lowest key is the last row.

use ndarray::Array2;

use crate::error::NoteError;

/// Stack `steps` as columns, highest key on top.
pub fn piano_roll(steps: &[Vec<f64>]) -> Result<Array2<f64>, NoteError> {
    let keys = steps.first().ok_or(NoteError::EmptySequence)?.len();
    if let Some((step, found)) = steps
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != keys)
    {
        return Err(NoteError::RaggedSequence {
            step,
            expected: keys,
            found,
        });
    }
    Ok(Array2::from_shape_fn((keys, steps.len()), |(row, col)| {
        steps[col][keys - 1 - row]
    }))
}

/// `piano_roll` for integer one-hot vectors as produced by `encode_step`.
pub fn piano_roll_from_keys(steps: &[Vec<u8>]) -> Result<Array2<f64>, NoteError> {
    let steps: Vec<Vec<f64>> = steps
        .iter()
        .map(|step| step.iter().map(|&k| f64::from(k)).collect())
        .collect();
    piano_roll(&steps)
}

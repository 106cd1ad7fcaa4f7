// Owned tile batches.
//
// `layout()` works on any `ArrayView2<f64>`. `TileBatch` is the owned form
// that loaders build from nested rows, checking that every row has the same
// length so that the (N, L) shape is well defined.

use ndarray::{Array2, ArrayView2};

use crate::error::ShapeError;

/// N flattened tiles, one per row.
#[derive(Debug, Clone, PartialEq)]
pub struct TileBatch {
    data: Array2<f64>,
}

impl TileBatch {
    /// Build a batch from nested rows. Every row must have the length of
    /// the first one.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(ShapeError::RaggedRows {
                row,
                expected,
                found,
            });
        }
        let data = Array2::from_shape_fn((rows.len(), expected), |(i, j)| rows[i][j]);
        Ok(TileBatch { data })
    }

    pub fn tile_count(&self) -> usize {
        self.data.nrows()
    }

    pub fn row_length(&self) -> usize {
        self.data.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}

// Grid shape resolution.
//
// A caller may pass no grid shape (infer a square one from the tile count),
// a single side length (broadcast to a square grid), or an explicit
// (rows, cols) pair. Each step is a named function returning `Result` so
// every failure maps to one `ConfigurationError` variant.
//
// Grids with more cells than tiles are allowed; the extra cells stay
// background. Grids with fewer cells than tiles are rejected rather than
// silently dropping tiles.

use crate::error::ConfigurationError;

/// Inferred square grids must have a side strictly below this.
pub const INFER_SIDE_LIMIT: usize = 25;

/// Requested arrangement of tile cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridShape {
    /// `side × side` grid.
    Square(usize),
    /// Explicit rows and columns.
    Rect { rows: usize, cols: usize },
}

impl GridShape {
    /// Build a grid shape from a list of dimensions. One element is a square
    /// grid, two are (rows, cols); anything else is rejected.
    pub fn from_dims(dims: &[usize]) -> Result<Self, ConfigurationError> {
        match *dims {
            [side] => Ok(GridShape::Square(side)),
            [rows, cols] => Ok(GridShape::Rect { rows, cols }),
            _ => Err(ConfigurationError::InvalidGridRank(dims.len())),
        }
    }

    /// `(rows, cols)` with a square side broadcast to both axes.
    pub fn dims(self) -> (usize, usize) {
        match self {
            GridShape::Square(side) => (side, side),
            GridShape::Rect { rows, cols } => (rows, cols),
        }
    }
}

impl From<usize> for GridShape {
    fn from(side: usize) -> Self {
        GridShape::Square(side)
    }
}

impl From<(usize, usize)> for GridShape {
    fn from((rows, cols): (usize, usize)) -> Self {
        GridShape::Rect { rows, cols }
    }
}

/// Integer square root of `n` if `n` is a perfect square.
pub fn exact_sqrt(n: usize) -> Option<usize> {
    let root = n.isqrt();
    (root * root == n).then_some(root)
}

/// Infer a square grid for `tile_count` tiles.
pub fn infer_grid(tile_count: usize) -> Result<GridShape, ConfigurationError> {
    match exact_sqrt(tile_count) {
        Some(side) if side < INFER_SIDE_LIMIT => Ok(GridShape::Square(side)),
        _ => Err(ConfigurationError::Unresolvable {
            tile_count,
            limit: INFER_SIDE_LIMIT,
        }),
    }
}

/// Resolve an optional grid hint into concrete `(rows, cols)` for
/// `tile_count` tiles.
pub fn resolve_grid(
    hint: Option<GridShape>,
    tile_count: usize,
) -> Result<(usize, usize), ConfigurationError> {
    let shape = match hint {
        Some(shape) => shape,
        None => infer_grid(tile_count)?,
    };
    let (rows, cols) = shape.dims();
    if rows == 0 || cols == 0 {
        return Err(ConfigurationError::ZeroGrid { rows, cols });
    }
    if rows.saturating_mul(cols) < tile_count {
        return Err(ConfigurationError::GridTooSmall {
            rows,
            cols,
            tile_count,
        });
    }
    Ok((rows, cols))
}

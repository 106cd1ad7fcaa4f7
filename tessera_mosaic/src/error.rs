// Error taxonomy for the layout engine.
//
// Two families, both local validation failures surfaced straight to the
// caller: `ShapeError` (the tile data cannot be read as square tiles) and
// `ConfigurationError` (the grid or channel parameters cannot be resolved).
// `MosaicError` is the union returned by `layout()`.

use thiserror::Error;

/// The tile data does not describe equal-size square tiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("row length {row_length} is not divisible by channel count {channel_count}")]
    NotDivisible {
        row_length: usize,
        channel_count: usize,
    },
    #[error("per-channel tile length {tile_length} is not a perfect square")]
    NotSquare { tile_length: usize },
    #[error("tiles have zero pixels")]
    EmptyTile,
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The grid shape or channel layout cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(
        "cannot infer a square grid for {tile_count} tiles (need a perfect square below {limit}²); pass a grid shape"
    )]
    Unresolvable { tile_count: usize, limit: usize },
    #[error("grid shape must have 1 or 2 elements, got {0}")]
    InvalidGridRank(usize),
    #[error("grid shape {rows}x{cols} has a zero-sized axis")]
    ZeroGrid { rows: usize, cols: usize },
    #[error("grid shape {rows}x{cols} holds fewer cells than the {tile_count} tiles")]
    GridTooSmall {
        rows: usize,
        cols: usize,
        tile_count: usize,
    },
    #[error("channel count must be at least 1")]
    ZeroChannels,
    #[error(
        "a {rows}x{cols} grid of {tile_size}x{tile_size} tiles with spacing {spacing} is too large to allocate"
    )]
    CanvasTooLarge {
        rows: usize,
        cols: usize,
        tile_size: usize,
        spacing: usize,
    },
}

/// Any failure from the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MosaicError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

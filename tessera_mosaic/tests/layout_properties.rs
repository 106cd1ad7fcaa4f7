// End-to-end properties of the layout engine.
//
// Exercises `layout()` through the public API only: grid inference over the
// whole supported range, reading every tile back out of the canvas at its
// computed cell, per-channel equivalence with single-channel layouts, and
// the error taxonomy for bad shapes and grids.

use ndarray::{Array2, Axis, s};
use tessera_mosaic::{
    BACKGROUND, Canvas, ConfigurationError, GridShape, LayoutOptions, MosaicError, MosaicGeometry,
    ShapeError, TileBatch, layout,
};

/// Distinct, exactly representable values per (tile, pixel).
fn numbered_tiles(count: usize, row_length: usize) -> Array2<f64> {
    Array2::from_shape_fn((count, row_length), |(i, j)| (i * row_length + j) as f64 / 1024.0)
}

#[test]
fn every_small_perfect_square_infers_its_root() {
    for side in 1..25 {
        let tiles = Array2::<f64>::zeros((side * side, 1));
        let canvas = layout(tiles.view(), &LayoutOptions::default()).unwrap();
        // Tiles are 1x1 with spacing 1: 2 * side - 1 pixels per axis.
        assert_eq!(canvas.dims(), (2 * side - 1, 2 * side - 1), "side {side}");
    }
}

#[test]
fn large_or_non_square_counts_require_a_grid() {
    for count in [10, 625, 900] {
        let tiles = Array2::<f64>::zeros((count, 4));
        let err = layout(tiles.view(), &LayoutOptions::default()).unwrap_err();
        assert!(
            matches!(
                err,
                MosaicError::Configuration(ConfigurationError::Unresolvable { .. })
            ),
            "count {count}: {err:?}"
        );
    }
}

#[test]
fn tiles_read_back_bit_identical() {
    let tiles = numbered_tiles(7, 9);
    let options = LayoutOptions::default()
        .with_grid(GridShape::Rect { rows: 3, cols: 3 })
        .with_spacing(2);
    let canvas = layout(tiles.view(), &options).unwrap();
    let geometry = MosaicGeometry::resolve(7, 9, &options).unwrap();
    let plane = canvas.channel(0).unwrap();

    for (index, row) in tiles.axis_iter(Axis(0)).enumerate() {
        let cell = geometry.tile_view(plane, index).unwrap();
        let flat: Vec<f64> = cell.iter().copied().collect();
        assert_eq!(flat, row.to_vec(), "tile {index}");
    }
    // The two unused cells at the end of the last row are pure background.
    for index in 7..9 {
        let cell = geometry.tile_view(plane, index).unwrap();
        assert!(cell.iter().all(|&v| v == BACKGROUND));
    }
}

#[test]
fn placement_is_row_major() {
    // Tile i is filled with the value i; its cell must sit at
    // row i / cols, column i % cols.
    let tiles = Array2::from_shape_fn((6, 4), |(i, _)| i as f64);
    let canvas = layout(
        tiles.view(),
        &LayoutOptions::default().with_grid(GridShape::Rect { rows: 2, cols: 3 }),
    )
    .unwrap();
    let plane = canvas.channel(0).unwrap();
    assert_eq!(plane.dim(), (5, 8));
    assert_eq!(plane[[0, 0]], 0.0);
    assert_eq!(plane[[0, 3]], 1.0);
    assert_eq!(plane[[0, 6]], 2.0);
    assert_eq!(plane[[3, 0]], 3.0);
    assert_eq!(plane[[3, 3]], 4.0);
    assert_eq!(plane[[4, 7]], 5.0);
}

#[test]
fn each_channel_matches_its_single_channel_layout() {
    let tile_length = 16;
    let tiles = numbered_tiles(4, 3 * tile_length);
    let options = LayoutOptions::default().with_spacing(1);
    let canvas = layout(tiles.view(), &options.with_channels(3)).unwrap();
    assert_eq!(canvas.shape(), &[9, 9, 3]);

    for channel in 0..3 {
        let start = channel * tile_length;
        let sub = tiles.slice(s![.., start..start + tile_length]);
        let Canvas::Plane(expected) = layout(sub, &options).unwrap() else {
            panic!("single-channel layout returned a stacked canvas");
        };
        assert_eq!(canvas.channel(channel).unwrap(), expected, "channel {channel}");
    }
}

#[test]
fn three_element_grid_is_rejected() {
    assert_eq!(
        GridShape::from_dims(&[2, 2, 2]),
        Err(ConfigurationError::InvalidGridRank(3))
    );
}

#[test]
fn per_channel_length_without_integer_root_is_a_shape_error() {
    let tiles = Array2::<f64>::zeros((4, 3 * 5));
    assert_eq!(
        layout(tiles.view(), &LayoutOptions::default().with_channels(3)),
        Err(MosaicError::Shape(ShapeError::NotSquare { tile_length: 5 }))
    );
    assert_eq!(
        layout(tiles.view(), &LayoutOptions::default().with_channels(4)),
        Err(MosaicError::Shape(ShapeError::NotDivisible {
            row_length: 15,
            channel_count: 4
        }))
    );
}

#[test]
fn grid_smaller_than_batch_is_rejected() {
    let tiles = Array2::<f64>::zeros((5, 4));
    assert_eq!(
        layout(
            tiles.view(),
            &LayoutOptions::default().with_grid(GridShape::Square(2))
        ),
        Err(MosaicError::Configuration(ConfigurationError::GridTooSmall {
            rows: 2,
            cols: 2,
            tile_count: 5
        }))
    );
}

#[test]
fn huge_grid_or_spacing_is_an_error_not_a_panic() {
    let tiles = Array2::<f64>::zeros((1, 4));
    for options in [
        LayoutOptions::default().with_grid(GridShape::Square(1 << 62)),
        LayoutOptions::default()
            .with_grid(GridShape::Square(1))
            .with_spacing(usize::MAX),
        LayoutOptions::default()
            .with_grid(GridShape::Rect { rows: 1, cols: 4 })
            .with_spacing(usize::MAX / 2),
    ] {
        assert!(matches!(
            layout(tiles.view(), &options),
            Err(MosaicError::Configuration(ConfigurationError::CanvasTooLarge { .. }))
        ));
    }
}

#[test]
fn batch_from_rows_feeds_layout() {
    let rows = vec![vec![0.0, 0.25, 0.5, 0.75]; 4];
    let batch = TileBatch::from_rows(&rows).unwrap();
    let canvas = layout(batch.view(), &LayoutOptions::default()).unwrap();
    assert_eq!(canvas.dims(), (5, 5));
    assert_eq!(canvas.channel(0).unwrap()[[4, 4]], 0.75);
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (1..=8usize)
        .map(|side| {
            std::thread::spawn(move || {
                let tiles = numbered_tiles(side * side, 9);
                let canvas = layout(tiles.view(), &LayoutOptions::default()).unwrap();
                (side, canvas.dims())
            })
        })
        .collect();
    for handle in handles {
        let (side, dims) = handle.join().unwrap();
        assert_eq!(dims, (4 * side - 1, 4 * side - 1));
    }
}

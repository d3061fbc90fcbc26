// tests/layout_tests.rs

use svg_spritesheet::{layout, Error, Sprite};

fn sprites(dims: &[(u32, u32)]) -> Vec<Sprite> {
    dims.iter()
        .enumerate()
        .map(|(i, &(w, h))| Sprite::new(format!("s{}", i), w, h))
        .collect()
}

#[test]
fn grid_shape_matches_count() {
    let mut one = sprites(&[(8, 8)]);
    let plan = layout::plan(&mut one).unwrap();
    assert_eq!((plan.columns, plan.rows), (1, 1));

    let mut four = sprites(&[(8, 8); 4]);
    let plan = layout::plan(&mut four).unwrap();
    assert_eq!((plan.columns, plan.rows), (2, 2));

    let mut five = sprites(&[(8, 8); 5]);
    let plan = layout::plan(&mut five).unwrap();
    assert_eq!((plan.columns, plan.rows), (2, 3));
}

#[test]
fn cell_size_is_true_maximum() {
    let mut mixed = sprites(&[(4, 16), (10, 3), (7, 7)]);
    let plan = layout::plan(&mut mixed).unwrap();
    assert_eq!(plan.cell_width, 10);
    assert_eq!(plan.cell_height, 16);
    // Pasting never clips: every sprite fits its cell.
    for s in &mixed {
        assert!(s.width <= plan.cell_width && s.height <= plan.cell_height);
    }
}

#[test]
fn offsets_stay_in_bounds_and_cells_are_unique() {
    let mut five = sprites(&[(6, 4), (3, 9), (5, 5), (2, 2), (6, 9)]);
    let plan = layout::plan(&mut five).unwrap();

    let mut cells: Vec<(u32, u32)> = Vec::new();
    for s in &five {
        assert!(s.x + s.width <= plan.width());
        assert!(s.y + s.height <= plan.height());
        assert_eq!(s.x % plan.cell_width, 0);
        assert_eq!(s.y % plan.cell_height, 0);
        cells.push((s.x, s.y));
    }
    cells.sort_unstable();
    cells.dedup();
    assert_eq!(cells.len(), 5, "two sprites were assigned the same cell");
}

#[test]
fn offsets_follow_collection_order() {
    let mut four = sprites(&[(8, 8); 4]);
    layout::plan(&mut four).unwrap();
    let offsets: Vec<(u32, u32)> = four.iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(offsets, vec![(0, 0), (8, 0), (0, 8), (8, 8)]);
}

#[test]
fn empty_collection_is_an_error() {
    let mut none: Vec<Sprite> = Vec::new();
    assert!(matches!(layout::plan(&mut none), Err(Error::NoSprites)));
}

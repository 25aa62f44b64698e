//! End-to-end pipelines over the generation steps.
//!
//! These run steps through `Pipeline::run`, so tile validation, the shared
//! RNG and warning collection are all exercised together.

use delve_core::{Coordinate, Dimension, Grid, Room, Tile, TileSet};
use delve_step::{Modifier, Pipeline, PipelineError, StepError};
use delve_steps::{
    Automaton, BinarySplit, CellTree, Denoise, Exit, Loot, MindlessWanderer, Path, RectCell,
    RegionDetect, Run, Trim,
};
use delve_test_utils::{count_tile, empty_grid, grid_to_ascii, seeded_rng, tiles};

// ---------- Helpers ----------

fn run(pipeline: &Pipeline, w: i32, h: i32, seed: u64) -> Result<Grid<Tile>, PipelineError> {
    let set = tiles();
    let mut rng = seeded_rng(seed);
    pipeline.run(empty_grid(&set, w, h), &set, &mut rng).map(|r| r.grid)
}

fn region_count(grid: &Grid<Tile>) -> usize {
    let set = tiles();
    let mut rng = seeded_rng(0);
    let mut ctx = delve_step::StepContext::new(&set, &mut rng);
    RegionDetect::detect(grid, &mut ctx).len()
}

// ---------- Scenarios ----------

#[test]
fn room_then_trim_leaves_only_the_room() {
    let pipeline = Pipeline::new()
        .with(Run::new(|grid, _| {
            let room = Room::new(Coordinate::new(2, 2), Dimension::new(4, 4), Tile::open("Floor"));
            grid.merge(&room.tiles())?;
            Ok(())
        }))
        .with(Trim::new(0));
    let grid = run(&pipeline, 10, 10, 0).unwrap();
    assert_eq!(grid.dimension(), Dimension::new(4, 4));
    assert_eq!(count_tile(&grid, &Tile::open("Floor")), 16);
}

#[test]
fn straight_path_has_no_detours() {
    let pipeline = Pipeline::new().with(Path::new(Coordinate::new(0, 0), Coordinate::new(5, 0)));
    let grid = run(&pipeline, 10, 10, 3).unwrap();
    let mut keys: Vec<_> = grid.keys().copied().collect();
    keys.sort_by_key(|c| c.x);
    let expected: Vec<_> = (0..=5).map(|x| Coordinate::new(x, 0)).collect();
    assert_eq!(keys, expected);
    assert!(grid.iter().all(|(_, t)| t == &Tile::open("Floor")));
}

// ---------- Full pipelines ----------

#[test]
fn bsp_dungeon_is_connected_with_one_exit() {
    let bsp = BinarySplit::builder()
        .modifier(Modifier::room(Loot::builder().items(["gold", "potion"]).build().unwrap()))
        .modifier(Modifier::room(Exit::default()))
        .build()
        .unwrap();
    let pipeline = Pipeline::new()
        .with(bsp)
        .with(Denoise::smoothing())
        .with(Trim::new(1));
    let set = tiles();
    let mut rng = seeded_rng(2024);
    let report = pipeline.run(empty_grid(&set, 80, 50), &set, &mut rng).unwrap();

    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(count_tile(&report.grid, &Tile::open("Exit")), 1);
    assert_eq!(region_count(&report.grid), 1);
    // Trim(1) leaves a one-cell default border.
    let rows = grid_to_ascii(&set, &report.grid);
    assert!(rows[0].chars().all(|g| g == '#'));
    assert!(rows[rows.len() - 1].chars().all(|g| g == '#'));
}

#[test]
fn cell_tree_rooms_are_chained() {
    let pipeline = Pipeline::new().with(CellTree::builder().max_rooms(6).build().unwrap());
    let grid = run(&pipeline, 70, 50, 11).unwrap();
    assert!(!grid.is_empty());
    assert_eq!(region_count(&grid), 1);
}

#[test]
fn rect_cells_form_one_cluster() {
    let pipeline = Pipeline::new().with(RectCell::builder().rooms(8, 12).build().unwrap());
    let grid = run(&pipeline, 60, 60, 5).unwrap();
    assert!(grid.len() >= 25);
    assert_eq!(region_count(&grid), 1);
}

#[test]
fn caves_joined_by_region_detect() {
    let pipeline = Pipeline::new()
        .with(Automaton::builder().generations(4).build().unwrap())
        .with(RegionDetect::connecting());
    let grid = run(&pipeline, 40, 30, 8).unwrap();
    let set = tiles();
    // Every cell is explicit after the automaton.
    assert_eq!(grid.len(), 40 * 30);
    assert!(count_tile(&grid, set.primary()) > 0);
    // Explicit wall cells are not part of any region.
    assert_eq!(region_count(&grid), 1);
}

#[test]
fn wanderer_then_exit() {
    let pipeline = Pipeline::new()
        .with(MindlessWanderer::default())
        .with(Exit::default())
        .with(Trim::new(2));
    let grid = run(&pipeline, 50, 40, 21).unwrap();
    assert_eq!(count_tile(&grid, &Tile::open("Exit")), 1);
    assert!(grid.len() > 1);
}

// ---------- Determinism ----------

#[test]
fn same_seed_same_dungeon() {
    let build = || {
        Pipeline::new()
            .with(BinarySplit::builder().build().unwrap())
            .with(MindlessWanderer::builder().allow_separation(true).build().unwrap())
            .with(Denoise::default())
    };
    let a = run(&build(), 60, 40, 77).unwrap();
    let b = run(&build(), 60, 40, 77).unwrap();
    let c = run(&build(), 60, 40, 78).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

// ---------- Errors ----------

#[test]
fn unknown_tile_aborts_before_any_step_runs() {
    let pipeline = Pipeline::new()
        .with(Trim::new(0))
        .with(Exit::new("stairs"));
    let err = run(&pipeline, 10, 10, 0).unwrap_err();
    assert!(matches!(err, PipelineError::UnknownTile { index: 1, .. }), "{err}");
}

#[test]
fn path_outside_grid_is_config_error() {
    let pipeline = Pipeline::new().with(Path::new(Coordinate::new(0, 0), Coordinate::new(30, 0)));
    match run(&pipeline, 10, 10, 0).unwrap_err() {
        PipelineError::StepFailed { name, reason, .. } => {
            assert_eq!(name, "Path");
            assert!(matches!(reason, StepError::InvalidConfig { .. }), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn whole_grid_modifier_is_skipped_with_warning() {
    let bsp = BinarySplit::builder()
        .modifier(Modifier::step(Trim::new(0)))
        .build()
        .unwrap();
    let set = tiles();
    let mut rng = seeded_rng(1);
    let report = Pipeline::new()
        .with(bsp)
        .run(empty_grid(&set, 60, 40), &set, &mut rng)
        .unwrap();
    assert_eq!(report.grid.dimension(), Dimension::new(60, 40));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Trim"));
}

#[test]
fn skipped_modifier_with_unbound_tile_is_not_fatal() {
    let bsp = BinarySplit::builder()
        .modifier(Modifier::step(Exit::new("stairs")))
        .build()
        .unwrap();
    let set = tiles();
    let mut rng = seeded_rng(1);
    let report = Pipeline::new()
        .with(bsp)
        .run(empty_grid(&set, 60, 40), &set, &mut rng)
        .unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Exit"), "{}", report.warnings[0]);
}

//! Dungeons generated end to end through the orchestrator and rendered.

use delve_core::{CharTileSet, Coordinate, Dimension, Tile};
use delve_engine::{ConsoleRenderer, Dungeon, DungeonConfig, DungeonError, RenderError};
use delve_step::{Modifier, Pipeline};
use delve_steps::{BinarySplit, Denoise, Exit, Loot, MindlessWanderer, Run, Trim};

fn config(seed: u64) -> DungeonConfig {
    DungeonConfig {
        name: "Test Keep".to_string(),
        dimension: Dimension::new(60, 40),
        seed: Some(seed),
        log_steps: false,
    }
}

fn bsp_pipeline() -> Pipeline {
    let bsp = BinarySplit::builder()
        .modifier(Modifier::room(Loot::builder().items(["gold", "potion"]).build().unwrap()))
        .modifier(Modifier::room(Exit::default()))
        .build()
        .unwrap();
    Pipeline::new().with(bsp).with(Denoise::default())
}

fn render(dungeon: &Dungeon<CharTileSet>) -> String {
    let mut renderer = ConsoleRenderer::new(Vec::new());
    dungeon.render(&mut renderer).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn rendered_dungeon_has_one_doubled_line_per_row() {
    let mut dungeon = Dungeon::new(config(3), CharTileSet::standard()).unwrap();
    dungeon.apply(&bsp_pipeline()).unwrap();
    let text = render(&dungeon);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 40);
    assert!(lines.iter().all(|l| l.chars().count() == 120));
    assert_eq!(text.matches(">>").count(), 1);
}

#[test]
fn same_seed_renders_identically() {
    let mut a = Dungeon::new(config(99), CharTileSet::standard()).unwrap();
    let mut b = Dungeon::new(config(99), CharTileSet::standard()).unwrap();
    for d in [&mut a, &mut b] {
        d.apply(&bsp_pipeline()).unwrap();
        d.apply(&Pipeline::new().with(MindlessWanderer::default())).unwrap();
    }
    assert_eq!(render(&a), render(&b));
}

#[test]
fn overdub_builds_on_previous_runs() {
    let mut dungeon = Dungeon::new(config(5), CharTileSet::standard()).unwrap();
    let first = dungeon.apply(&Pipeline::new().with(MindlessWanderer::default())).unwrap();
    let second = dungeon.apply(&Pipeline::new().with(MindlessWanderer::default())).unwrap();
    assert_eq!(second.cells_before, first.cells_after);
    assert!(second.cells_after >= first.cells_after);
}

#[test]
fn trim_resizes_the_dungeon() {
    let mut dungeon = Dungeon::new(config(1), CharTileSet::standard()).unwrap();
    let pipeline = Pipeline::new()
        .with(Run::new(|grid, _| {
            grid.set(Coordinate::new(10, 10), Tile::open("Floor"))?;
            grid.set(Coordinate::new(12, 11), Tile::open("Floor"))?;
            Ok(())
        }))
        .with(Trim::new(1));
    dungeon.apply(&pipeline).unwrap();
    assert_eq!(dungeon.dimension(), Dimension::new(5, 4));
    let expected = ["##########", "##..######", "######..##", "##########"];
    assert_eq!(render(&dungeon).lines().collect::<Vec<_>>(), expected);
}

#[test]
fn unbound_tile_fails_to_render() {
    let mut dungeon = Dungeon::new(config(1), CharTileSet::standard()).unwrap();
    let pipeline = Pipeline::new().with(Run::new(|grid, _| {
        grid.set(Coordinate::new(0, 0), Tile::open("Lava"))?;
        Ok(())
    }));
    dungeon.apply(&pipeline).unwrap();
    let mut renderer = ConsoleRenderer::new(Vec::new());
    let err = dungeon.render(&mut renderer).unwrap_err();
    assert!(matches!(err, DungeonError::Render(RenderError::UnboundTile { .. })), "{err}");
}

#[test]
fn warnings_are_reported_in_metrics() {
    let mut dungeon = Dungeon::new(config(1), CharTileSet::standard()).unwrap();
    let metrics = dungeon.apply(&Pipeline::new().with(Exit::default())).unwrap();
    assert_eq!(metrics.steps, 1);
    assert_eq!(metrics.warnings.len(), 1);
    assert!(dungeon.grid().is_empty());
}

//! Generate a dungeon and print it.
//!
//! ```text
//! cargo run --example generate -- [bsp|cells|caves|walk] [seed]
//! RUST_LOG=debug cargo run --example generate -- caves 7
//! ```

use delve::prelude::*;
use tracing_subscriber::EnvFilter;

fn pipeline(kind: &str) -> Result<Pipeline, String> {
    let loot = || Loot::builder().items(["gold", "potion"]).max_loot(8).build();
    let pipeline = match kind {
        "bsp" => Pipeline::new()
            .with(
                BinarySplit::builder()
                    .modifier(Modifier::room(loot()?))
                    .modifier(Modifier::room(Exit::default()))
                    .build()?,
            )
            .with(Denoise::smoothing()),
        "cells" => Pipeline::new()
            .with(
                CellTree::builder()
                    .max_rooms(8)
                    .randomness(0.2)
                    .modifier(Modifier::room(Exit::default()))
                    .build()?,
            )
            .with(Trim::new(1)),
        "caves" => Pipeline::new()
            .with(Automaton::builder().generations(6).build()?)
            .with(RegionDetect::connecting())
            .with(Exit::default()),
        "walk" => Pipeline::new()
            .with(MindlessWanderer::builder().wanderers(6).max_lifetime(300).build()?)
            .with(Denoise::smoothing())
            .with(loot()?)
            .with(Exit::default())
            .with(Trim::new(1)),
        other => return Err(format!("unknown generator '{other}'; try bsp, cells, caves or walk")),
    };
    Ok(pipeline)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "bsp".to_string());
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?;

    let config = DungeonConfig {
        name: format!("The {kind} Depths"),
        dimension: Dimension::new(60, 36),
        seed,
        ..DungeonConfig::default()
    };
    let mut dungeon = Dungeon::new(config, CharTileSet::standard())?;
    let metrics = dungeon.apply(&pipeline(&kind)?)?;
    for warning in &metrics.warnings {
        eprintln!("warning: {warning}");
    }

    dungeon.render(&mut ConsoleRenderer::stdout())?;
    eprintln!(
        "{} (seed {}): {} cells in {} us",
        dungeon.name(),
        dungeon.seed(),
        metrics.cells_after,
        metrics.total_us
    );
    Ok(())
}

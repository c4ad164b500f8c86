//! Wildreach demo — generate a world, walk a few cells, dump the current
//! location as ASCII, then exercise the eviction path.

use tracing::info;
use tracing_subscriber::prelude::*;

use wildreach::generator::SpawnHook;
use wildreach::{World, settings};

/// Spawn collaborator that just logs requests. A game would route these into
/// its entity runtime.
#[derive(Default)]
struct LoggingSpawns {
    spawned: Vec<(String, (i32, i32))>,
}

impl SpawnHook for LoggingSpawns {
    fn spawn(&mut self, kind: &str, local: (i32, i32), world: (i32, i32)) {
        info!("spawn {} at {:?} in location {:?}", kind, local, world);
        self.spawned.push((kind.to_string(), local));
    }

    fn is_occupied(&self, local: (i32, i32)) -> bool {
        self.spawned.iter().any(|(_, pos)| *pos == local)
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let world_settings = settings::load_settings();
    if let Err(e) = world_settings.validate() {
        eprintln!("invalid settings: {e}");
        std::process::exit(1);
    }

    let mut world = World::new(world_settings.clone());
    let mut spawns = LoggingSpawns::default();

    // Visit a diagonal of cells, then settle in the middle.
    for i in 0..4 {
        if let Err(e) = world.set_current_location(i, i, &mut spawns) {
            eprintln!("visit failed: {e}");
            return;
        }
    }
    let cx = world_settings.width_in_locations / 2;
    let cy = world_settings.height_in_locations / 2;
    if let Err(e) = world.set_current_location(cx, cy, &mut spawns) {
        eprintln!("visit failed: {e}");
        return;
    }

    if let Some(loc) = world.current_location() {
        println!(
            "current location {:?}: {:?}/{:?}, difficulty {}{}",
            loc.world_pos,
            loc.meta.structure,
            loc.meta.biome,
            loc.meta.difficulty,
            loc.meta.name.as_deref().map(|n| format!(" ({n})")).unwrap_or_default(),
        );
        for row in loc.render_rows() {
            println!("{row}");
        }
    }

    info!("{} locations loaded, {} entities spawned", world.loaded_location_count(), spawns.spawned.len());
    world.unload_all_except_current();
    info!("after eviction: {} locations loaded", world.loaded_location_count());

    settings::save_settings(&world_settings);
}

//! Test suite — one file per subsystem. All tests run on fixed seeds so
//! generation is reproducible and assertions are exact.

pub mod catalog;
pub mod cave;
pub mod layout;
pub mod settings;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{Biome, BiomeCatalog, StructureCatalog, StructureType};
use crate::generator::SpawnHook;
use crate::location::{Location, LocationMeta};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fresh location with stock metadata for direct generator tests.
pub fn make_location(structure: StructureType, biome: Biome, width: i32, height: i32) -> Location {
    let mut meta = LocationMeta::new(structure, biome);
    meta.difficulty = 3;
    Location::new((0, 0), width, height, meta)
}

pub fn catalogs() -> (BiomeCatalog, StructureCatalog) {
    (BiomeCatalog::standard(), StructureCatalog::standard())
}

/// Spawn collaborator that records requests and reports recorded positions
/// as occupied.
#[derive(Default)]
pub struct RecordingSpawns {
    pub spawned: Vec<(String, (i32, i32))>,
}

impl SpawnHook for RecordingSpawns {
    fn spawn(&mut self, kind: &str, local: (i32, i32), world: (i32, i32)) {
        let _ = world;
        self.spawned.push((kind.to_string(), local));
    }

    fn is_occupied(&self, local: (i32, i32)) -> bool {
        self.spawned.iter().any(|(_, pos)| *pos == local)
    }
}

/// All walkable tiles reachable from `start` over 4-adjacency.
pub fn reachable_from(loc: &Location, start: (i32, i32)) -> hashbrown::HashSet<(i32, i32)> {
    pathfinding::prelude::bfs_reach(start, |&(x, y)| {
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .filter(|&(nx, ny)| loc.is_walkable(nx, ny))
            .collect::<Vec<_>>()
    })
    .collect()
}

/// Every walkable position in a location.
pub fn walkable_positions(loc: &Location) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..loc.height {
        for x in 0..loc.width {
            if loc.is_walkable(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

//! Cave generation: the cellular automaton must settle into a single
//! 4-connected walkable region after the flood-fill repair pass.

use super::{RecordingSpawns, catalogs, make_location, reachable_from, rng, walkable_positions};
use crate::catalog::{Biome, StructureType};
use crate::generator::{self, NoSpawns};
use crate::tile::TileKind;

#[test]
fn walkable_area_is_one_connected_component() {
    let (biomes, structures) = catalogs();
    let mut any_open = false;
    for seed in 0..15 {
        let mut loc = make_location(StructureType::Cave, Biome::Mountain, 40, 40);
        let mut r = rng(seed);
        generator::generate(&mut loc, &biomes, &structures, &mut r, &mut NoSpawns);

        let open = walkable_positions(&loc);
        if open.is_empty() {
            continue;
        }
        any_open = true;
        let reached = reachable_from(&loc, open[0]);
        assert_eq!(
            reached.len(),
            open.len(),
            "seed {seed}: {} of {} walkable tiles unreachable",
            open.len() - reached.len(),
            open.len()
        );
        // Every walkable tile, not just most, is in the fill.
        for pos in &open {
            assert!(reached.contains(pos), "seed {seed}: {pos:?} stranded");
        }
    }
    assert!(any_open, "no cave produced any open space across fifteen seeds");
}

#[test]
fn connectivity_holds_from_any_start_tile() {
    let (biomes, structures) = catalogs();
    let mut loc = make_location(StructureType::Cave, Biome::Forest, 36, 36);
    let mut r = rng(99);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut NoSpawns);

    let open = walkable_positions(&loc);
    assert!(!open.is_empty());
    // Flood fill from the middle and the last tile agree with the first.
    for &start in [open[0], open[open.len() / 2], open[open.len() - 1]].iter() {
        assert_eq!(reachable_from(&loc, start).len(), open.len());
    }
}

#[test]
fn caves_contain_only_cave_kinds() {
    let (biomes, structures) = catalogs();
    let mut loc = make_location(StructureType::Cave, Biome::Forest, 36, 36);
    let mut r = rng(3);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut NoSpawns);
    for y in 0..loc.height {
        for x in 0..loc.width {
            let k = loc.kind(x, y);
            assert!(
                matches!(k, TileKind::Floor | TileKind::Wall | TileKind::Water),
                "unexpected {k:?} in cave"
            );
        }
    }
}

#[test]
fn cave_creatures_land_on_open_unoccupied_tiles() {
    let (biomes, structures) = catalogs();
    let mut loc = make_location(StructureType::Cave, Biome::Mountain, 40, 40);
    let mut hook = RecordingSpawns::default();
    let mut r = rng(17);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut hook);

    let mut seen = hashbrown::HashSet::new();
    for (_, pos) in &hook.spawned {
        assert!(loc.is_walkable(pos.0, pos.1));
        assert!(seen.insert(*pos));
    }
}

//! Room placement and the settlement-style layouts: towns, ruins, faction
//! bases, wilderness overlays.

use super::{RecordingSpawns, catalogs, make_location, rng, walkable_positions};
use crate::catalog::{Biome, StructureType};
use crate::generator::{self, NoSpawns, Room, place_rooms};
use crate::tile::TileKind;

#[test]
fn room_minimums_are_enforced() {
    let r = Room::new(5, 5, 1, 0);
    assert!(r.width >= 3 && r.height >= 3);
    assert!(r.contains(5, 5));
    assert!(!r.contains(4, 5));
}

#[test]
fn accepted_rooms_never_overlap_even_buffered() {
    let loc = make_location(StructureType::Dungeon, Biome::Forest, 60, 60);
    for seed in 0..20 {
        let mut r = rng(seed);
        let rooms = place_rooms(&loc, 12, &mut r);
        assert!(!rooms.is_empty());
        for i in 0..rooms.len() {
            for j in (i + 1)..rooms.len() {
                assert!(
                    !rooms[i].intersects(&rooms[j], 1),
                    "seed {}: rooms {:?} and {:?} overlap with buffer",
                    seed,
                    rooms[i],
                    rooms[j]
                );
            }
        }
        // Rooms stay inside the outer wall ring.
        for room in &rooms {
            assert!(room.x >= 1 && room.y >= 1);
            assert!(room.x + room.width <= loc.width - 1);
            assert!(room.y + room.height <= loc.height - 1);
        }
    }
}

#[test]
fn town_has_buildings_doors_and_npcs() {
    let mut loc = make_location(StructureType::Town, Biome::Forest, 50, 50);
    let (biomes, structures) = catalogs();
    let mut hook = RecordingSpawns::default();
    let mut r = rng(42);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut hook);

    let mut walls = 0;
    let mut veg = 0;
    for y in 0..loc.height {
        for x in 0..loc.width {
            match loc.kind(x, y) {
                TileKind::Wall => walls += 1,
                TileKind::Vegetation => veg += 1,
                _ => {}
            }
        }
    }
    assert!(walls > 0, "town should have building walls");
    assert!(veg > 0, "town should have scattered vegetation");
    assert!(!hook.spawned.is_empty(), "town should be populated");
    // NPC spawns land on walkable, previously-unoccupied tiles.
    let mut seen = hashbrown::HashSet::new();
    for (kind, pos) in &hook.spawned {
        assert!(kind == "villager" || kind == "shopkeeper");
        assert!(loc.is_walkable(pos.0, pos.1), "{kind} at non-walkable {pos:?}");
        assert!(seen.insert(*pos), "double-booked tile {pos:?}");
    }
}

#[test]
fn ruins_are_decayed_and_overgrown() {
    let mut loc = make_location(StructureType::Ruins, Biome::Forest, 50, 50);
    let (biomes, structures) = catalogs();
    let mut r = rng(43);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut NoSpawns);

    let mut walls = 0;
    let mut veg = 0;
    let mut water = 0;
    for y in 0..loc.height {
        for x in 0..loc.width {
            match loc.kind(x, y) {
                TileKind::Wall => walls += 1,
                TileKind::Vegetation => veg += 1,
                TileKind::Water => water += 1,
                _ => {}
            }
        }
    }
    assert!(walls > 0, "ruins keep some walls");
    assert!(veg > 0, "ruins are overgrown");
    assert!(water > 0, "ruins pool water");
}

#[test]
fn faction_base_is_walled_with_a_single_top_entrance() {
    let mut loc = make_location(StructureType::FactionBase, Biome::Barren, 48, 48);
    let (biomes, structures) = catalogs();
    let mut hook = RecordingSpawns::default();
    let mut r = rng(44);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut hook);

    // Entrance doorway at the top-center edge.
    assert_eq!(loc.kind(loc.width / 2, 0), TileKind::DoorOpen);

    // The rest of the outer ring is solid wall.
    for x in 0..loc.width {
        if x != loc.width / 2 {
            assert_eq!(loc.kind(x, 0), TileKind::Wall, "breach at ({x}, 0)");
        }
        assert_eq!(loc.kind(x, loc.height - 1), TileKind::Wall);
    }
    for y in 1..loc.height - 1 {
        assert_eq!(loc.kind(0, y), TileKind::Wall);
        assert_eq!(loc.kind(loc.width - 1, y), TileKind::Wall);
    }

    // The courtyard center stays open.
    let (cx, cy) = loc.center();
    assert!(loc.is_walkable(cx, cy), "courtyard should be open");

    assert!(!hook.spawned.is_empty(), "guards should be posted");
    for (kind, pos) in &hook.spawned {
        assert_eq!(kind, "guard");
        assert!(loc.is_walkable(pos.0, pos.1));
    }
}

#[test]
fn wilderness_overlays_touch_floor_only() {
    let mut loc = make_location(StructureType::Wilderness, Biome::Forest, 50, 50);
    let (biomes, structures) = catalogs();
    let mut hook = RecordingSpawns::default();
    let mut r = rng(45);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut hook);

    let mut veg = 0;
    let mut water = 0;
    let mut walls = 0;
    for y in 0..loc.height {
        for x in 0..loc.width {
            match loc.kind(x, y) {
                TileKind::Vegetation => veg += 1,
                TileKind::Water => water += 1,
                TileKind::Wall => walls += 1,
                TileKind::Floor | TileKind::Void => {}
                other => panic!("unexpected {other:?} in wilderness"),
            }
        }
    }
    let area = (loc.width * loc.height) as f64;
    assert!(veg as f64 > area * 0.3, "vegetation should dominate ({veg})");
    assert!(water > 0 && walls > 0);
    assert!(hook.spawned.len() >= 10, "wildlife should be scattered");
    assert!(!walkable_positions(&loc).is_empty());
}

#[test]
fn dry_biome_wilderness_skips_missing_surfaces() {
    // Barren has neither water nor vegetation; the overlays must no-op
    // rather than write default tiles.
    let mut loc = make_location(StructureType::Wilderness, Biome::Barren, 40, 40);
    let (biomes, structures) = catalogs();
    let mut r = rng(46);
    generator::generate(&mut loc, &biomes, &structures, &mut r, &mut NoSpawns);
    for y in 0..loc.height {
        for x in 0..loc.width {
            let k = loc.kind(x, y);
            assert!(
                k == TileKind::Floor || k == TileKind::Wall,
                "unexpected {k:?} in barren wilderness"
            );
        }
    }
}

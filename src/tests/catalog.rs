//! Catalog behavior: total fallback, transition rules, environment blending,
//! difficulty-gated spawn tables, tile variant selection.

use super::{catalogs, rng};
use crate::catalog::{Biome, Humidity, StructureType, Temperature};
use crate::tile::TileKind;

#[test]
fn descriptor_lookup_never_fails() {
    let (biomes, _) = catalogs();
    // The default biome has no dedicated entry; it resolves to the fallback.
    let def = biomes.descriptor(Biome::Default);
    assert_eq!(def.biome, Biome::Default);
    // Known biomes resolve to themselves.
    assert_eq!(biomes.descriptor(Biome::Volcanic).biome, Biome::Volcanic);
}

#[test]
fn structure_lookup_covers_every_type() {
    let (_, structures) = catalogs();
    for s in [
        StructureType::Dungeon,
        StructureType::Town,
        StructureType::Ruins,
        StructureType::FactionBase,
        StructureType::Wilderness,
        StructureType::Cave,
    ] {
        assert_eq!(structures.descriptor(s).structure, s);
    }
    assert!(structures.descriptor(StructureType::Town).has_shops);
    assert!(structures.descriptor(StructureType::FactionBase).organized);
}

#[test]
fn every_biome_carries_a_populated_spawn_table() {
    let (biomes, _) = catalogs();
    for b in [
        Biome::Default,
        Biome::Forest,
        Biome::Desert,
        Biome::Tundra,
        Biome::Snow,
        Biome::Mountain,
        Biome::Swamp,
        Biome::Jungle,
        Biome::Beach,
        Biome::Barren,
        Biome::Volcanic,
    ] {
        let def = biomes.descriptor(b);
        assert!(!def.spawns.is_empty(), "{b:?} has an empty spawn table");
        assert!(def.spawns.iter().any(|e| !e.is_item), "{b:?} has no enemies to roll");
    }
}

#[test]
fn transition_rules() {
    let (biomes, _) = catalogs();
    // Same biome always blends.
    assert!(biomes.can_transition(Biome::Desert, Biome::Desert));
    // Listed neighbors blend, unlisted pairs don't.
    assert!(biomes.can_transition(Biome::Forest, Biome::Mountain));
    assert!(!biomes.can_transition(Biome::Forest, Biome::Volcanic));
    // The default biome blends with anything, in either direction.
    assert!(biomes.can_transition(Biome::Default, Biome::Volcanic));
    assert!(biomes.can_transition(Biome::Snow, Biome::Default));
}

#[test]
fn environment_blend_lerps_numeric_and_snaps_categorical() {
    let (biomes, _) = catalogs();
    let at0 = biomes.blend_environments(Biome::Snow, Biome::Desert, 0.0);
    let at1 = biomes.blend_environments(Biome::Snow, Biome::Desert, 1.0);
    assert_eq!(at0.temperature, Temperature::Freezing);
    assert_eq!(at1.temperature, Temperature::Hot);
    assert_eq!(at0.humidity, Humidity::Normal);
    assert_eq!(at1.humidity, Humidity::Arid);

    let mid = biomes.blend_environments(Biome::Snow, Biome::Desert, 0.5);
    // Ties snap toward the destination biome.
    assert_eq!(mid.temperature, Temperature::Hot);

    let snow = biomes.descriptor(Biome::Snow).environment;
    let desert = biomes.descriptor(Biome::Desert).environment;
    let expected = snow.light + (desert.light - snow.light) * 0.5;
    assert!((mid.light - expected).abs() < 1e-6);

    // Factor is clamped, not trusted.
    let over = biomes.blend_environments(Biome::Snow, Biome::Desert, 2.5);
    assert!((over.light - desert.light).abs() < 1e-6);
}

#[test]
fn spawn_table_respects_difficulty_gates() {
    let (biomes, _) = catalogs();
    let mut r = rng(5);
    // Volcanic's easiest entry needs difficulty 2; nothing qualifies at 1.
    assert_eq!(biomes.roll_spawn(Biome::Volcanic, 1, &mut r), None);
    // At difficulty 5 something always qualifies.
    for _ in 0..50 {
        let pick = biomes.roll_spawn(Biome::Volcanic, 5, &mut r);
        assert!(matches!(pick, Some("magma_hound") | Some("ash_crawler")));
    }
    // Items never come out of the enemy roll.
    for _ in 0..50 {
        assert_ne!(biomes.roll_spawn(Biome::Forest, 5, &mut r), Some("herb_bundle"));
    }
}

#[test]
fn tile_selection_stays_inside_the_biome_sets() {
    let (biomes, _) = catalogs();
    let def = biomes.descriptor(Biome::Forest).clone();
    let mut r = rng(6);
    for _ in 0..200 {
        let floor = biomes.random_floor_tile(Biome::Forest, &mut r);
        assert_eq!(floor.kind, TileKind::Floor);
        assert!(floor.sprite == def.floor.primary || def.floor.variants.contains(&floor.sprite));

        let wall = biomes.random_wall_tile(Biome::Forest, &mut r);
        assert_eq!(wall.kind, TileKind::Wall);
        assert!(wall.sprite == def.wall.primary || def.wall.variants.contains(&wall.sprite));
    }
}

#[test]
fn dry_biomes_have_no_water_or_vegetation() {
    let (biomes, _) = catalogs();
    let mut r = rng(7);
    assert!(biomes.water_tile(Biome::Desert).is_none());
    assert!(biomes.water_tile(Biome::Barren).is_none());
    assert!(biomes.random_vegetation_tile(Biome::Snow, &mut r).is_none());
    assert!(biomes.water_tile(Biome::Forest).is_some());
}

#[test]
fn weather_roll_is_always_from_the_biome_table() {
    let (biomes, _) = catalogs();
    let mut r = rng(8);
    for _ in 0..100 {
        let w = biomes.pick_weather(Biome::Desert, &mut r);
        assert!(matches!(w, crate::catalog::Weather::Clear | crate::catalog::Weather::Sandstorm));
    }
}

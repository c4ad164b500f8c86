//! Catalogs — shared read-only reference data for biomes and structural types.
//! Built once at startup (`::standard()`) and passed by reference into the
//! generator; lookups always fall back to a default entry so generation stays
//! resilient against incomplete data.

use hashbrown::HashMap;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::tile::{Tile, TileKind, Tint};

/// Probability of picking a listed variant over the primary tile.
pub const VARIANT_CHANCE: f32 = 0.25;

// ============================================================================
// BIOME IDENTIFIERS
// ============================================================================

/// Environmental theme of a location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Default,
    Forest,
    Desert,
    Tundra,
    Snow,
    Mountain,
    Swamp,
    Jungle,
    Beach,
    Barren,
    Volcanic,
}

/// Surface class a tile write belongs to. Drives per-surface tints and
/// transition blending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Floor,
    Wall,
    Water,
    Vegetation,
}

// ============================================================================
// ENVIRONMENT
// ============================================================================

/// Categorical temperature band. Blending snaps, never interpolates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperature {
    Freezing,
    Cold,
    #[default]
    Temperate,
    Warm,
    Hot,
}

/// Categorical humidity band. Blending snaps, never interpolates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Humidity {
    Arid,
    #[default]
    Normal,
    Humid,
}

/// Environmental stats attached to a biome. Numeric fields are in [0, 1]
/// and interpolate linearly during transitions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EnvironmentStats {
    pub temperature: Temperature,
    pub humidity: Humidity,
    /// Ambient light level.
    pub light: f32,
    /// How far sight lines reach, as a fraction of the maximum.
    pub visibility: f32,
    pub fire_resist: f32,
    pub cold_resist: f32,
}

impl Default for EnvironmentStats {
    fn default() -> Self {
        Self {
            temperature: Temperature::Temperate,
            humidity: Humidity::Normal,
            light: 0.8,
            visibility: 0.8,
            fire_resist: 0.0,
            cold_resist: 0.0,
        }
    }
}

/// Weather states a biome can roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Storm,
    Snowfall,
    Fog,
    Sandstorm,
    AshFall,
}

// ============================================================================
// BIOME DESCRIPTOR
// ============================================================================

/// Primary tile plus optional visual variants for one surface.
#[derive(Clone, Copy, Debug)]
pub struct TileSet {
    pub primary: u16,
    pub variants: &'static [u16],
}

impl TileSet {
    pub const fn solo(primary: u16) -> Self {
        Self { primary, variants: &[] }
    }
}

/// Weighted spawn-table entry, gated by location difficulty.
#[derive(Clone, Copy, Debug)]
pub struct SpawnEntry {
    pub entity: &'static str,
    pub weight: f32,
    pub min_difficulty: u8,
    pub max_difficulty: u8,
    pub is_item: bool,
}

impl SpawnEntry {
    pub const fn enemy(entity: &'static str, weight: f32, min: u8, max: u8) -> Self {
        Self { entity, weight, min_difficulty: min, max_difficulty: max, is_item: false }
    }
    pub const fn item(entity: &'static str, weight: f32, min: u8, max: u8) -> Self {
        Self { entity, weight, min_difficulty: min, max_difficulty: max, is_item: true }
    }
}

/// Full descriptor for one biome.
#[derive(Clone, Debug)]
pub struct BiomeDef {
    pub biome: Biome,
    pub floor: TileSet,
    pub wall: TileSet,
    pub water: Option<u16>,
    pub vegetation: Option<TileSet>,
    pub floor_tint: Option<Tint>,
    pub wall_tint: Option<Tint>,
    pub water_tint: Option<Tint>,
    pub vegetation_tint: Option<Tint>,
    pub environment: EnvironmentStats,
    pub weather: &'static [(Weather, f32)],
    /// Biomes this one may blend into without looking incongruous.
    pub transitions: &'static [Biome],
    pub spawns: &'static [SpawnEntry],
}

impl BiomeDef {
    pub fn tint_for(&self, surface: Surface) -> Option<Tint> {
        match surface {
            Surface::Floor => self.floor_tint,
            Surface::Wall => self.wall_tint,
            Surface::Water => self.water_tint,
            Surface::Vegetation => self.vegetation_tint,
        }
    }
}

// ============================================================================
// BIOME CATALOG
// ============================================================================

/// All biome descriptors. Constructed once, read-only thereafter.
pub struct BiomeCatalog {
    defs: HashMap<Biome, BiomeDef>,
    fallback: BiomeDef,
}

impl BiomeCatalog {
    /// The stock catalog. Sprite indices address the external tileset:
    /// each biome owns a 10-wide block starting at `base`.
    pub fn standard() -> Self {
        let mut defs = HashMap::new();
        for def in standard_biome_defs() {
            defs.insert(def.biome, def);
        }
        let fallback = default_biome_def();
        Self { defs, fallback }
    }

    /// Descriptor lookup. Unknown biomes fall back to the default descriptor,
    /// never fails.
    pub fn descriptor(&self, biome: Biome) -> &BiomeDef {
        self.defs.get(&biome).unwrap_or(&self.fallback)
    }

    /// Floor tile for a biome, sometimes a listed variant.
    pub fn random_floor_tile(&self, biome: Biome, rng: &mut StdRng) -> Tile {
        let def = self.descriptor(biome);
        let sprite = pick_from_set(&def.floor, rng);
        themed(TileKind::Floor, sprite, def.floor_tint)
    }

    /// Wall tile for a biome, sometimes a listed variant.
    pub fn random_wall_tile(&self, biome: Biome, rng: &mut StdRng) -> Tile {
        let def = self.descriptor(biome);
        let sprite = pick_from_set(&def.wall, rng);
        themed(TileKind::Wall, sprite, def.wall_tint)
    }

    /// Water tile, or None for biomes without standing water.
    pub fn water_tile(&self, biome: Biome) -> Option<Tile> {
        let def = self.descriptor(biome);
        def.water.map(|sprite| themed(TileKind::Water, sprite, def.water_tint))
    }

    /// Vegetation tile, or None for bare biomes.
    pub fn random_vegetation_tile(&self, biome: Biome, rng: &mut StdRng) -> Option<Tile> {
        let def = self.descriptor(biome);
        def.vegetation
            .as_ref()
            .map(|set| themed(TileKind::Vegetation, pick_from_set(set, rng), def.vegetation_tint))
    }

    /// True if `from` may blend into `to`: same biome, listed transition, or
    /// either side is the default biome.
    pub fn can_transition(&self, from: Biome, to: Biome) -> bool {
        if from == to || from == Biome::Default || to == Biome::Default {
            return true;
        }
        self.descriptor(from).transitions.contains(&to)
    }

    /// Blend environment stats by `factor` in [0, 1]. Numeric stats lerp;
    /// categorical stats snap to whichever side the factor is closer to,
    /// ties going to `to`.
    pub fn blend_environments(&self, from: Biome, to: Biome, factor: f32) -> EnvironmentStats {
        let a = self.descriptor(from).environment;
        let b = self.descriptor(to).environment;
        let t = factor.clamp(0.0, 1.0);
        let lerp = |x: f32, y: f32| x + (y - x) * t;
        EnvironmentStats {
            temperature: if t >= 0.5 { b.temperature } else { a.temperature },
            humidity: if t >= 0.5 { b.humidity } else { a.humidity },
            light: lerp(a.light, b.light),
            visibility: lerp(a.visibility, b.visibility),
            fire_resist: lerp(a.fire_resist, b.fire_resist),
            cold_resist: lerp(a.cold_resist, b.cold_resist),
        }
    }

    /// Roll the weather table for a biome.
    pub fn pick_weather(&self, biome: Biome, rng: &mut StdRng) -> Weather {
        let table = self.descriptor(biome).weather;
        weighted_pick(table.iter().map(|&(w, wt)| (w, wt)), rng).unwrap_or_default()
    }

    /// Roll the spawn table for a biome at a given difficulty. Entries outside
    /// their difficulty gate are excluded from the roll. None when nothing in
    /// the table qualifies.
    pub fn roll_spawn(&self, biome: Biome, difficulty: u8, rng: &mut StdRng) -> Option<&'static str> {
        let eligible = self
            .descriptor(biome)
            .spawns
            .iter()
            .filter(|e| !e.is_item && difficulty >= e.min_difficulty && difficulty <= e.max_difficulty);
        weighted_pick(eligible.map(|e| (e.entity, e.weight)), rng)
    }
}

fn themed(kind: TileKind, sprite: u16, tint: Option<Tint>) -> Tile {
    let tile = Tile::new(kind).with_sprite(sprite);
    match tint {
        Some(t) => tile.with_tint(t),
        None => tile,
    }
}

fn pick_from_set(set: &TileSet, rng: &mut StdRng) -> u16 {
    if !set.variants.is_empty() && rng.random::<f32>() < VARIANT_CHANCE {
        set.variants[rng.random_range(0..set.variants.len())]
    } else {
        set.primary
    }
}

/// Weighted roll: pick in 0..total, walk entries until the roll is spent.
fn weighted_pick<T>(entries: impl Iterator<Item = (T, f32)>, rng: &mut StdRng) -> Option<T> {
    let entries: Vec<(T, f32)> = entries.filter(|(_, w)| *w > 0.0).collect();
    let total: f32 = entries.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return None;
    }
    let mut roll = rng.random_range(0.0..total);
    let mut iter = entries.into_iter();
    let mut last = None;
    for (value, weight) in iter.by_ref() {
        if roll < weight {
            return Some(value);
        }
        roll -= weight;
        last = Some(value);
    }
    last
}

// ============================================================================
// STOCK BIOME DATA
// ============================================================================

const DEFAULT_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("rat", 1.0, 1, 10),
    SpawnEntry::item("scrap", 0.3, 1, 10),
];

const FOREST_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("wolf", 1.0, 1, 6),
    SpawnEntry::enemy("boar", 0.8, 1, 4),
    SpawnEntry::enemy("bandit", 0.5, 2, 8),
    SpawnEntry::enemy("forest_troll", 0.2, 5, 10),
    SpawnEntry::item("herb_bundle", 0.4, 1, 10),
];

const DESERT_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("scorpion", 1.0, 1, 6),
    SpawnEntry::enemy("sand_viper", 0.7, 2, 7),
    SpawnEntry::enemy("dust_wraith", 0.2, 6, 10),
    SpawnEntry::item("sun_crystal", 0.2, 3, 10),
];

const TUNDRA_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("ice_wolf", 1.0, 1, 7),
    SpawnEntry::enemy("frost_elk", 0.6, 1, 5),
    SpawnEntry::enemy("wendigo", 0.15, 7, 10),
];

const SNOW_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("snow_leopard", 0.8, 2, 8),
    SpawnEntry::enemy("ice_elemental", 0.3, 5, 10),
    SpawnEntry::item("frozen_relic", 0.1, 4, 10),
];

const MOUNTAIN_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("mountain_goat", 0.8, 1, 4),
    SpawnEntry::enemy("harpy", 0.5, 3, 8),
    SpawnEntry::enemy("stone_golem", 0.2, 6, 10),
    SpawnEntry::item("iron_ore", 0.5, 1, 10),
];

const SWAMP_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("bog_lurker", 0.9, 2, 8),
    SpawnEntry::enemy("giant_leech", 1.0, 1, 5),
    SpawnEntry::enemy("hag", 0.15, 6, 10),
    SpawnEntry::item("murk_root", 0.3, 1, 10),
];

const JUNGLE_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("panther", 0.9, 2, 7),
    SpawnEntry::enemy("poison_frog", 1.0, 1, 4),
    SpawnEntry::enemy("jungle_stalker", 0.3, 5, 10),
];

const BEACH_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("crab", 1.0, 1, 3),
    SpawnEntry::enemy("siren", 0.2, 5, 10),
    SpawnEntry::item("driftwood", 0.4, 1, 10),
];

const BARREN_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("vulture", 0.8, 1, 5),
    SpawnEntry::enemy("bone_scavenger", 0.6, 3, 9),
];

const VOLCANIC_SPAWNS: &[SpawnEntry] = &[
    SpawnEntry::enemy("magma_hound", 0.8, 4, 10),
    SpawnEntry::enemy("ash_crawler", 1.0, 2, 8),
    SpawnEntry::enemy("fire_elemental", 0.3, 7, 10),
    SpawnEntry::item("obsidian_shard", 0.3, 3, 10),
];

fn default_biome_def() -> BiomeDef {
    BiomeDef {
        biome: Biome::Default,
        floor: TileSet { primary: 10, variants: &[11, 12] },
        wall: TileSet { primary: 14, variants: &[15] },
        water: Some(18),
        vegetation: Some(TileSet { primary: 19, variants: &[] }),
        floor_tint: None,
        wall_tint: None,
        water_tint: None,
        vegetation_tint: None,
        environment: EnvironmentStats::default(),
        weather: &[(Weather::Clear, 0.8), (Weather::Rain, 0.2)],
        transitions: &[],
        spawns: DEFAULT_SPAWNS,
    }
}

fn standard_biome_defs() -> Vec<BiomeDef> {
    vec![
        BiomeDef {
            biome: Biome::Forest,
            floor: TileSet { primary: 20, variants: &[21, 22, 23] },
            wall: TileSet { primary: 24, variants: &[25] },
            water: Some(28),
            vegetation: Some(TileSet { primary: 29, variants: &[30, 31] }),
            floor_tint: Some([0.75, 0.95, 0.70, 1.0]),
            wall_tint: None,
            water_tint: None,
            vegetation_tint: Some([0.60, 0.90, 0.55, 1.0]),
            environment: EnvironmentStats {
                temperature: Temperature::Temperate,
                humidity: Humidity::Normal,
                light: 0.7,
                visibility: 0.6,
                fire_resist: 0.0,
                cold_resist: 0.1,
            },
            weather: &[(Weather::Clear, 0.6), (Weather::Rain, 0.3), (Weather::Fog, 0.1)],
            transitions: &[Biome::Mountain, Biome::Swamp, Biome::Jungle, Biome::Beach],
            spawns: FOREST_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Desert,
            floor: TileSet { primary: 40, variants: &[41, 42] },
            wall: TileSet { primary: 44, variants: &[45] },
            water: None,
            vegetation: Some(TileSet { primary: 49, variants: &[50] }),
            floor_tint: Some([1.0, 0.95, 0.70, 1.0]),
            wall_tint: Some([0.95, 0.85, 0.60, 1.0]),
            water_tint: None,
            vegetation_tint: None,
            environment: EnvironmentStats {
                temperature: Temperature::Hot,
                humidity: Humidity::Arid,
                light: 1.0,
                visibility: 1.0,
                fire_resist: 0.2,
                cold_resist: -0.2,
            },
            weather: &[(Weather::Clear, 0.8), (Weather::Sandstorm, 0.2)],
            transitions: &[Biome::Barren, Biome::Beach, Biome::Mountain],
            spawns: DESERT_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Tundra,
            floor: TileSet { primary: 60, variants: &[61] },
            wall: TileSet { primary: 64, variants: &[] },
            water: Some(68),
            vegetation: Some(TileSet { primary: 69, variants: &[] }),
            floor_tint: Some([0.85, 0.90, 0.95, 1.0]),
            wall_tint: None,
            water_tint: Some([0.70, 0.85, 1.0, 1.0]),
            vegetation_tint: None,
            environment: EnvironmentStats {
                temperature: Temperature::Cold,
                humidity: Humidity::Normal,
                light: 0.8,
                visibility: 0.9,
                fire_resist: -0.1,
                cold_resist: 0.3,
            },
            weather: &[(Weather::Clear, 0.5), (Weather::Snowfall, 0.4), (Weather::Fog, 0.1)],
            transitions: &[Biome::Snow, Biome::Mountain, Biome::Forest],
            spawns: TUNDRA_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Snow,
            floor: TileSet { primary: 70, variants: &[71, 72] },
            wall: TileSet { primary: 74, variants: &[75] },
            water: Some(78),
            vegetation: None,
            floor_tint: Some([0.95, 0.97, 1.0, 1.0]),
            wall_tint: Some([0.85, 0.90, 1.0, 1.0]),
            water_tint: Some([0.65, 0.80, 1.0, 1.0]),
            vegetation_tint: None,
            environment: EnvironmentStats {
                temperature: Temperature::Freezing,
                humidity: Humidity::Normal,
                light: 0.9,
                visibility: 0.7,
                fire_resist: -0.2,
                cold_resist: 0.4,
            },
            weather: &[(Weather::Snowfall, 0.6), (Weather::Clear, 0.3), (Weather::Storm, 0.1)],
            transitions: &[Biome::Tundra, Biome::Mountain],
            spawns: SNOW_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Mountain,
            floor: TileSet { primary: 90, variants: &[91] },
            wall: TileSet { primary: 94, variants: &[95, 96] },
            water: Some(98),
            vegetation: Some(TileSet { primary: 99, variants: &[] }),
            floor_tint: None,
            wall_tint: Some([0.80, 0.78, 0.75, 1.0]),
            water_tint: None,
            vegetation_tint: None,
            environment: EnvironmentStats {
                temperature: Temperature::Cold,
                humidity: Humidity::Arid,
                light: 0.9,
                visibility: 1.0,
                fire_resist: 0.0,
                cold_resist: 0.2,
            },
            weather: &[(Weather::Clear, 0.6), (Weather::Storm, 0.2), (Weather::Snowfall, 0.2)],
            transitions: &[Biome::Forest, Biome::Tundra, Biome::Snow, Biome::Barren],
            spawns: MOUNTAIN_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Swamp,
            floor: TileSet { primary: 110, variants: &[111, 112] },
            wall: TileSet { primary: 114, variants: &[] },
            water: Some(118),
            vegetation: Some(TileSet { primary: 119, variants: &[120] }),
            floor_tint: Some([0.70, 0.75, 0.55, 1.0]),
            wall_tint: None,
            water_tint: Some([0.45, 0.55, 0.40, 1.0]),
            vegetation_tint: Some([0.55, 0.65, 0.40, 1.0]),
            environment: EnvironmentStats {
                temperature: Temperature::Warm,
                humidity: Humidity::Humid,
                light: 0.5,
                visibility: 0.4,
                fire_resist: 0.1,
                cold_resist: 0.0,
            },
            weather: &[(Weather::Fog, 0.4), (Weather::Rain, 0.3), (Weather::Clear, 0.3)],
            transitions: &[Biome::Forest, Biome::Jungle],
            spawns: SWAMP_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Jungle,
            floor: TileSet { primary: 130, variants: &[131, 132] },
            wall: TileSet { primary: 134, variants: &[] },
            water: Some(138),
            vegetation: Some(TileSet { primary: 139, variants: &[140, 141] }),
            floor_tint: Some([0.60, 0.85, 0.50, 1.0]),
            wall_tint: None,
            water_tint: None,
            vegetation_tint: Some([0.45, 0.80, 0.40, 1.0]),
            environment: EnvironmentStats {
                temperature: Temperature::Hot,
                humidity: Humidity::Humid,
                light: 0.4,
                visibility: 0.3,
                fire_resist: 0.1,
                cold_resist: -0.1,
            },
            weather: &[(Weather::Rain, 0.5), (Weather::Storm, 0.2), (Weather::Clear, 0.3)],
            transitions: &[Biome::Swamp, Biome::Forest, Biome::Beach],
            spawns: JUNGLE_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Beach,
            floor: TileSet { primary: 150, variants: &[151] },
            wall: TileSet { primary: 154, variants: &[] },
            water: Some(158),
            vegetation: Some(TileSet { primary: 159, variants: &[] }),
            floor_tint: Some([1.0, 0.97, 0.80, 1.0]),
            wall_tint: None,
            water_tint: Some([0.55, 0.80, 1.0, 1.0]),
            vegetation_tint: None,
            environment: EnvironmentStats {
                temperature: Temperature::Warm,
                humidity: Humidity::Humid,
                light: 1.0,
                visibility: 1.0,
                fire_resist: 0.0,
                cold_resist: 0.0,
            },
            weather: &[(Weather::Clear, 0.7), (Weather::Rain, 0.2), (Weather::Storm, 0.1)],
            transitions: &[Biome::Forest, Biome::Jungle, Biome::Desert],
            spawns: BEACH_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Barren,
            floor: TileSet { primary: 170, variants: &[171] },
            wall: TileSet { primary: 174, variants: &[] },
            water: None,
            vegetation: None,
            floor_tint: Some([0.75, 0.70, 0.62, 1.0]),
            wall_tint: None,
            water_tint: None,
            vegetation_tint: None,
            environment: EnvironmentStats {
                temperature: Temperature::Warm,
                humidity: Humidity::Arid,
                light: 0.9,
                visibility: 1.0,
                fire_resist: 0.1,
                cold_resist: 0.0,
            },
            weather: &[(Weather::Clear, 0.7), (Weather::Sandstorm, 0.3)],
            transitions: &[Biome::Desert, Biome::Mountain, Biome::Volcanic],
            spawns: BARREN_SPAWNS,
        },
        BiomeDef {
            biome: Biome::Volcanic,
            floor: TileSet { primary: 190, variants: &[191, 192] },
            wall: TileSet { primary: 194, variants: &[195] },
            water: Some(198), // lava pools share the water slot
            vegetation: None,
            floor_tint: Some([0.60, 0.45, 0.40, 1.0]),
            wall_tint: Some([0.45, 0.35, 0.32, 1.0]),
            water_tint: Some([1.0, 0.45, 0.15, 1.0]),
            vegetation_tint: None,
            environment: EnvironmentStats {
                temperature: Temperature::Hot,
                humidity: Humidity::Arid,
                light: 0.6,
                visibility: 0.5,
                fire_resist: 0.4,
                cold_resist: -0.3,
            },
            weather: &[(Weather::AshFall, 0.5), (Weather::Clear, 0.5)],
            transitions: &[Biome::Barren],
            spawns: VOLCANIC_SPAWNS,
        },
    ]
}

// ============================================================================
// STRUCTURAL TYPES
// ============================================================================

/// Layout archetype of a location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureType {
    Dungeon,
    Town,
    Ruins,
    FactionBase,
    #[default]
    Wilderness,
    Cave,
}

/// Generation-density parameters for one structural type.
#[derive(Clone, Copy, Debug)]
pub struct StructureDef {
    pub structure: StructureType,
    /// Rooms per 1000 tiles, roughly.
    pub room_density: f32,
    pub corridor_density: f32,
    /// Organized layouts place rooms on a grid instead of sampling.
    pub organized: bool,
    pub has_npcs: bool,
    pub has_shops: bool,
    pub danger: f32,
}

/// All structural-type descriptors. Constructed once, read-only thereafter.
pub struct StructureCatalog {
    defs: HashMap<StructureType, StructureDef>,
    fallback: StructureDef,
}

impl StructureCatalog {
    pub fn standard() -> Self {
        let list = [
            StructureDef { structure: StructureType::Dungeon, room_density: 8.0, corridor_density: 1.0, organized: false, has_npcs: false, has_shops: false, danger: 1.5 },
            StructureDef { structure: StructureType::Town, room_density: 10.0, corridor_density: 0.0, organized: false, has_npcs: true, has_shops: true, danger: 0.3 },
            StructureDef { structure: StructureType::Ruins, room_density: 6.0, corridor_density: 0.2, organized: false, has_npcs: false, has_shops: false, danger: 1.2 },
            StructureDef { structure: StructureType::FactionBase, room_density: 9.0, corridor_density: 0.5, organized: true, has_npcs: true, has_shops: false, danger: 1.3 },
            StructureDef { structure: StructureType::Wilderness, room_density: 0.0, corridor_density: 0.0, organized: false, has_npcs: false, has_shops: false, danger: 1.0 },
            StructureDef { structure: StructureType::Cave, room_density: 0.0, corridor_density: 0.0, organized: false, has_npcs: false, has_shops: false, danger: 1.4 },
        ];
        let mut defs = HashMap::new();
        for def in list {
            defs.insert(def.structure, def);
        }
        let fallback = defs[&StructureType::Wilderness];
        Self { defs, fallback }
    }

    /// Descriptor lookup with wilderness fallback.
    pub fn descriptor(&self, structure: StructureType) -> &StructureDef {
        self.defs.get(&structure).unwrap_or(&self.fallback)
    }
}

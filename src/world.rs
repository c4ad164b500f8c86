//! World — the sparse outer grid of locations. Owns the lazy-create/evict
//! lifecycle, the deterministic per-cell structure/biome resolution, and the
//! single "current" location pointer, which is never bulk-evicted.

use hashbrown::HashMap;
use noise::{NoiseFn, Simplex};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::catalog::{Biome, BiomeCatalog, StructureCatalog, StructureType};
use crate::generator::{self, NoSpawns, SpawnHook};
use crate::location::{Location, LocationMeta};
use crate::settings::WorldSettings;

/// Names handed to generated towns, in hash order per cell.
const TOWN_NAMES: [&str; 12] = [
    "Ashford", "Brackwater", "Coldmere", "Duskwell", "Eastmarch", "Fenwick",
    "Grimsby", "Hollowbrook", "Ironvale", "Larkspur", "Mirefield", "Northwatch",
];

// Weighted structural-type table for cells without an explicit override.
const STRUCTURE_WEIGHTS: [(StructureType, f32); 6] = [
    (StructureType::Wilderness, 0.70),
    (StructureType::Cave, 0.10),
    (StructureType::Ruins, 0.08),
    (StructureType::Dungeon, 0.06),
    (StructureType::Town, 0.03),
    (StructureType::FactionBase, 0.03),
];

/// Sparse 2-D grid of locations keyed by integer world coordinates.
/// At most one location instance exists per coordinate; creation and eviction
/// only ever happen through this type's methods.
pub struct World {
    pub settings: WorldSettings,
    biomes: BiomeCatalog,
    structures: StructureCatalog,
    locations: HashMap<(i32, i32), Location>,
    current: Option<(i32, i32)>,
    /// Jitters the latitude banding so biome borders aren't straight rows.
    jitter: Simplex,
}

impl World {
    pub fn new(settings: WorldSettings) -> Self {
        let jitter = Simplex::new(settings.seed as u32);
        Self {
            settings,
            biomes: BiomeCatalog::standard(),
            structures: StructureCatalog::standard(),
            locations: HashMap::new(),
            current: None,
            jitter,
        }
    }

    pub fn biomes(&self) -> &BiomeCatalog {
        &self.biomes
    }

    pub fn structures(&self) -> &StructureCatalog {
        &self.structures
    }

    /// Strict range check against the outer grid dimensions.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.settings.width_in_locations && y < self.settings.height_in_locations
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Cached location for a cell, generating it on first visit. Out-of-range
    /// coordinates are a caller bug and fail; generation itself never does.
    pub fn get_or_create_location(
        &mut self,
        x: i32,
        y: i32,
        hook: &mut dyn SpawnHook,
    ) -> Result<&Location, &'static str> {
        self.get_or_create_location_as(x, y, None, None, hook)
    }

    /// Like [`Self::get_or_create_location`] but with explicit structural type
    /// and/or biome overriding the per-cell resolution.
    pub fn get_or_create_location_as(
        &mut self,
        x: i32,
        y: i32,
        structure: Option<StructureType>,
        biome: Option<Biome>,
        hook: &mut dyn SpawnHook,
    ) -> Result<&Location, &'static str> {
        if !self.in_bounds(x, y) {
            return Err("location out of bounds");
        }
        let key = (x, y);
        if !self.locations.contains_key(&key) {
            let structure = structure.unwrap_or_else(|| self.peek_structure(x, y));
            let biome = biome.unwrap_or_else(|| self.peek_biome(x, y));

            let mut meta = LocationMeta::new(structure, biome);
            meta.environment = self.biomes.descriptor(biome).environment;
            meta.difficulty = self.difficulty_at(x, y, structure);
            if structure == StructureType::Town {
                let idx = (cell_seed(self.settings.seed, x, y) % TOWN_NAMES.len() as u64) as usize;
                meta.name = Some(TOWN_NAMES[idx].to_string());
            }

            let mut loc = Location::new(key, self.settings.location_width, self.settings.location_height, meta);
            let mut rng = self.cell_rng(x, y);
            generator::generate(&mut loc, &self.biomes, &self.structures, &mut rng, hook);
            info!(
                "created location ({}, {}): {:?}/{:?}, difficulty {}",
                x, y, structure, biome, loc.meta.difficulty
            );
            self.locations.insert(key, loc);
        }
        Ok(&self.locations[&key])
    }

    /// Get-or-create a cell and move the current pointer to it.
    pub fn set_current_location(
        &mut self,
        x: i32,
        y: i32,
        hook: &mut dyn SpawnHook,
    ) -> Result<(), &'static str> {
        self.get_or_create_location(x, y, hook)?;
        self.current = Some((x, y));
        Ok(())
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.current.and_then(|key| self.locations.get(&key))
    }

    pub fn current_location_mut(&mut self) -> Option<&mut Location> {
        self.current.and_then(|key| self.locations.get_mut(&key))
    }

    pub fn location(&self, x: i32, y: i32) -> Option<&Location> {
        self.locations.get(&(x, y))
    }

    pub fn location_mut(&mut self, x: i32, y: i32) -> Option<&mut Location> {
        self.locations.get_mut(&(x, y))
    }

    /// Drop a cached location. Refuses (no-op, returns false) when the cell
    /// is the current location.
    pub fn unload_location(&mut self, x: i32, y: i32) -> bool {
        if self.current == Some((x, y)) {
            return false;
        }
        self.locations.remove(&(x, y)).is_some()
    }

    /// Drop every cached location except the current one.
    pub fn unload_all_except_current(&mut self) {
        let before = self.locations.len();
        let keep = self.current;
        self.locations.retain(|key, _| Some(*key) == keep);
        info!("unloaded {} locations, {} kept", before - self.locations.len(), self.locations.len());
    }

    pub fn loaded_location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn loaded_locations(&self) -> Vec<(i32, i32)> {
        self.locations.keys().copied().collect()
    }

    // ------------------------------------------------------------------
    // Per-cell resolution
    // ------------------------------------------------------------------

    /// Deterministic rng for one cell: same world seed and coordinates always
    /// produce the same stream, so a regenerated cell matches its first visit.
    pub fn cell_rng(&self, x: i32, y: i32) -> StdRng {
        StdRng::seed_from_u64(cell_seed(self.settings.seed, x, y))
    }

    /// Structural type a cell resolves to without an override. Weighted roll
    /// from the cell's own rng, stable across repeated calls.
    pub fn peek_structure(&self, x: i32, y: i32) -> StructureType {
        let mut rng = self.cell_rng(x, y);
        use rand::Rng;
        let total: f32 = STRUCTURE_WEIGHTS.iter().map(|(_, w)| w).sum();
        let mut roll = rng.random_range(0.0..total);
        for (structure, weight) in STRUCTURE_WEIGHTS {
            if roll < weight {
                return structure;
            }
            roll -= weight;
        }
        StructureType::Wilderness
    }

    /// Biome a cell resolves to without an override: latitude-style banding
    /// (north cold, center temperate, south hot) jittered by seeded noise so
    /// band borders wander, then a weighted pick inside the band.
    pub fn peek_biome(&self, x: i32, y: i32) -> Biome {
        let h = self.settings.height_in_locations.max(1) as f64;
        let latitude = (y as f64 + 0.5) / h;
        let wobble = self.jitter.get([x as f64 * 0.35, y as f64 * 0.35]) * 0.12;
        let latitude = (latitude + wobble).clamp(0.0, 1.0);

        let band: &[(Biome, f32)] = if latitude < 0.25 {
            &[(Biome::Tundra, 0.45), (Biome::Snow, 0.35), (Biome::Mountain, 0.20)]
        } else if latitude < 0.70 {
            &[
                (Biome::Forest, 0.40),
                (Biome::Mountain, 0.15),
                (Biome::Swamp, 0.15),
                (Biome::Jungle, 0.15),
                (Biome::Beach, 0.15),
            ]
        } else {
            &[(Biome::Desert, 0.50), (Biome::Barren, 0.30), (Biome::Volcanic, 0.20)]
        };

        // Advance past the structure roll so the two picks are independent.
        let mut rng = self.cell_rng(x, y);
        use rand::Rng;
        let _ = rng.random::<f32>();
        let total: f32 = band.iter().map(|(_, w)| w).sum();
        let mut roll = rng.random_range(0.0..total);
        for &(biome, weight) in band {
            if roll < weight {
                return biome;
            }
            roll -= weight;
        }
        Biome::Default
    }

    /// Difficulty 1-10: grows with distance from the world center, scaled by
    /// the structural type's danger multiplier.
    fn difficulty_at(&self, x: i32, y: i32, structure: StructureType) -> u8 {
        let cx = self.settings.width_in_locations as f32 / 2.0;
        let cy = self.settings.height_in_locations as f32 / 2.0;
        let dx = (x as f32 + 0.5 - cx) / cx.max(1.0);
        let dy = (y as f32 + 0.5 - cy) / cy.max(1.0);
        let dist = (dx * dx + dy * dy).sqrt().min(1.0);
        let danger = self.structures.descriptor(structure).danger;
        let raw = 1.0 + dist * 9.0 * danger;
        (raw as u8).clamp(1, 10)
    }
}

/// Mix the world seed with cell coordinates. Splitmix-style multiply/xor so
/// neighboring cells land far apart in seed space.
fn cell_seed(seed: u64, x: i32, y: i32) -> u64 {
    let mut z = seed
        ^ (x as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (y as u32 as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Convenience for callers that only want terrain: get-or-create with no
/// entity spawns.
impl World {
    pub fn get_or_create_terrain(&mut self, x: i32, y: i32) -> Result<&Location, &'static str> {
        self.get_or_create_location(x, y, &mut NoSpawns)
    }
}

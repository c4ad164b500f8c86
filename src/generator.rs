//! Location generation — fills an empty location's tile grid according to its
//! structural type. Stateless: all state lives in the location, the catalogs,
//! and the explicit rng threaded through every call so regeneration of the
//! same cell is reproducible.

use hashbrown::HashSet;
use pathfinding::prelude::bfs_reach;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::catalog::{BiomeCatalog, StructureCatalog, StructureType};
use crate::location::Location;
use crate::tile::TileKind;

/// Minimum room edge, walls excluded. Rooms never have zero area.
pub const ROOM_MIN_SIZE: i32 = 3;
/// Maximum room edge for sampled (non-organized) layouts.
pub const ROOM_MAX_SIZE: i32 = 9;
/// Rejection-sampling budget for room placement.
const ROOM_PLACE_ATTEMPTS: i32 = 200;
/// Retry budget per scattered spawn.
const SPAWN_ATTEMPTS: i32 = 20;

// Cellular automaton tuning (cave layouts).
const CAVE_SEED_DENSITY: f32 = 0.45;
const CAVE_AUTOMATON_STEPS: usize = 4;
const CAVE_BIRTH_LIMIT: u32 = 5;

// ============================================================================
// SPAWN BOUNDARY
// ============================================================================

/// Entity-spawn boundary. The generator requests spawns through this and
/// never creates or owns entity records itself.
pub trait SpawnHook {
    /// Spawn an entity of `kind` at a local tile position within the location
    /// at `world` grid coordinates.
    fn spawn(&mut self, kind: &str, local: (i32, i32), world: (i32, i32));
    /// True if an entity already occupies the local position.
    fn is_occupied(&self, local: (i32, i32)) -> bool;
}

/// Null implementation for callers that only want terrain.
pub struct NoSpawns;

impl SpawnHook for NoSpawns {
    fn spawn(&mut self, _kind: &str, _local: (i32, i32), _world: (i32, i32)) {}
    fn is_occupied(&self, _local: (i32, i32)) -> bool {
        false
    }
}

// ============================================================================
// ROOMS
// ============================================================================

/// Axis-aligned room rectangle in local tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width: width.max(ROOM_MIN_SIZE), height: height.max(ROOM_MIN_SIZE) }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    /// Overlap test with both rectangles expanded by `buffer` tiles.
    pub fn intersects(&self, other: &Room, buffer: i32) -> bool {
        self.x - buffer < other.x + other.width + buffer
            && self.x + self.width + buffer > other.x - buffer
            && self.y - buffer < other.y + other.height + buffer
            && self.y + self.height + buffer > other.y - buffer
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Fill a location's tile grid in place according to its structural type.
/// Entity population is requested through `hook`; spawn attempts that fail
/// their retry budget are skipped silently.
pub fn generate(
    loc: &mut Location,
    biomes: &BiomeCatalog,
    structures: &StructureCatalog,
    rng: &mut StdRng,
    hook: &mut dyn SpawnHook,
) {
    let structure = loc.meta.structure;
    match structure {
        StructureType::Dungeon => generate_dungeon(loc, biomes, structures, rng, hook),
        StructureType::Town => generate_town(loc, biomes, structures, rng, hook),
        StructureType::Ruins => generate_ruins(loc, biomes, structures, rng, hook),
        StructureType::FactionBase => generate_faction_base(loc, biomes, rng, hook),
        StructureType::Wilderness => generate_wilderness(loc, biomes, rng, hook),
        StructureType::Cave => generate_cave(loc, biomes, rng, hook),
    }
    debug!(
        "generated {:?}/{:?} at {:?}: {}x{}, {} walkable",
        structure,
        loc.meta.biome,
        loc.world_pos,
        loc.width,
        loc.height,
        loc.walkable_count()
    );
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// Fill every tile with a biome-selected floor.
fn fill_floor(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng) {
    let biome = loc.meta.biome;
    for y in 0..loc.height {
        for x in 0..loc.width {
            let tile = biomes.random_floor_tile(biome, rng);
            loc.set_tile(x, y, tile);
        }
    }
}

/// Fill every tile with a biome-selected wall.
fn fill_wall(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng) {
    let biome = loc.meta.biome;
    for y in 0..loc.height {
        for x in 0..loc.width {
            let tile = biomes.random_wall_tile(biome, rng);
            loc.set_tile(x, y, tile);
        }
    }
}

fn set_floor(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, x: i32, y: i32) {
    let tile = biomes.random_floor_tile(loc.meta.biome, rng);
    loc.set_tile(x, y, tile);
}

fn set_wall(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, x: i32, y: i32) {
    let tile = biomes.random_wall_tile(loc.meta.biome, rng);
    loc.set_tile(x, y, tile);
}

/// Room count derived from the structural type's density and the grid area.
fn room_count(loc: &Location, density: f32, rng: &mut StdRng) -> i32 {
    let area = (loc.width * loc.height) as f32;
    let base = ((area / 1000.0) * density).max(3.0) as i32;
    rng.random_range(base..=base + (base / 2).max(1))
}

/// Place up to `count` rooms by rejection sampling: random rectangles,
/// discarding any candidate that overlaps an accepted room expanded by a
/// one-tile buffer. Attempt-bounded, same shape as settlement placement.
pub(crate) fn place_rooms(loc: &Location, count: i32, rng: &mut StdRng) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::new();
    let mut attempts = 0;
    while (rooms.len() as i32) < count && attempts < ROOM_PLACE_ATTEMPTS {
        attempts += 1;
        let max_w = ROOM_MAX_SIZE.min(loc.width - 2);
        let max_h = ROOM_MAX_SIZE.min(loc.height - 2);
        if max_w < ROOM_MIN_SIZE || max_h < ROOM_MIN_SIZE {
            break;
        }
        let w = rng.random_range(ROOM_MIN_SIZE..=max_w);
        let h = rng.random_range(ROOM_MIN_SIZE..=max_h);
        let x = rng.random_range(1..=(loc.width - w - 1).max(1));
        let y = rng.random_range(1..=(loc.height - h - 1).max(1));
        let candidate = Room::new(x, y, w, h);
        if rooms.iter().all(|r| !candidate.intersects(r, 1)) {
            rooms.push(candidate);
        }
    }
    if (rooms.len() as i32) < count {
        warn!("room placement: only {}/{} rooms fit at {:?}", rooms.len(), count, loc.world_pos);
    }
    rooms
}

/// Carve a room's interior to biome floor.
fn carve_room(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            set_floor(loc, biomes, rng, x, y);
        }
    }
}

/// Carve an L-shaped corridor between two points, horizontal-then-vertical or
/// vertical-then-horizontal chosen at random.
fn carve_corridor(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, from: (i32, i32), to: (i32, i32)) {
    let (x1, y1) = from;
    let (x2, y2) = to;
    let horizontal_first = rng.random::<f32>() < 0.5;
    let (corner_x, corner_y) = if horizontal_first { (x2, y1) } else { (x1, y2) };

    for x in x1.min(corner_x)..=x1.max(corner_x) {
        set_floor(loc, biomes, rng, x, y1);
    }
    for y in y1.min(corner_y)..=y1.max(corner_y) {
        set_floor(loc, biomes, rng, corner_x, y);
    }
    for x in corner_x.min(x2)..=corner_x.max(x2) {
        set_floor(loc, biomes, rng, x, corner_y);
    }
    for y in corner_y.min(y2)..=corner_y.max(y2) {
        set_floor(loc, biomes, rng, x2, y);
    }
}

/// Place doors on a room's perimeter ring. A candidate is a walkable opening
/// in the ring whose two perpendicular neighbors are wall, i.e. where a
/// corridor punches through. Each candidate converts with probability `chance`.
fn place_doors(loc: &mut Location, rng: &mut StdRng, room: &Room, chance: f32, kind: TileKind) {
    let x0 = room.x - 1;
    let y0 = room.y - 1;
    let x1 = room.x + room.width;
    let y1 = room.y + room.height;

    let try_door = |loc: &mut Location, rng: &mut StdRng, x: i32, y: i32, across_walls: bool| {
        if !loc.is_walkable(x, y) {
            return;
        }
        let walled = if across_walls {
            loc.kind(x - 1, y) == TileKind::Wall && loc.kind(x + 1, y) == TileKind::Wall
        } else {
            loc.kind(x, y - 1) == TileKind::Wall && loc.kind(x, y + 1) == TileKind::Wall
        };
        if walled && rng.random::<f32>() < chance {
            loc.set_kind(x, y, kind);
        }
    };

    // Top and bottom edges: door sits between walls to its left and right.
    for x in room.x..room.x + room.width {
        try_door(loc, rng, x, y0, true);
        try_door(loc, rng, x, y1, true);
    }
    // Left and right edges: walls above and below.
    for y in room.y..room.y + room.height {
        try_door(loc, rng, x0, y, false);
        try_door(loc, rng, x1, y, false);
    }
}

/// Request `count` spawns inside a room, rejecting occupied or blocked tiles.
/// Runs out of retries silently; partial population is acceptable.
fn populate_room(
    loc: &Location,
    biomes: &BiomeCatalog,
    rng: &mut StdRng,
    hook: &mut dyn SpawnHook,
    room: &Room,
    count: i32,
    fallback: &str,
) {
    for _ in 0..count {
        let mut placed = false;
        for _ in 0..SPAWN_ATTEMPTS {
            let x = rng.random_range(room.x..room.x + room.width);
            let y = rng.random_range(room.y..room.y + room.height);
            if !loc.is_walkable(x, y) || hook.is_occupied((x, y)) {
                continue;
            }
            let kind = biomes
                .roll_spawn(loc.meta.biome, loc.meta.difficulty, rng)
                .unwrap_or(fallback);
            hook.spawn(kind, (x, y), loc.world_pos);
            placed = true;
            break;
        }
        if !placed {
            break;
        }
    }
}

/// Request `count` spawns of one fixed entity kind inside a room. Settlement
/// occupants (villagers, guards) come from the structural type, not the biome
/// spawn table.
fn populate_room_with(
    loc: &Location,
    rng: &mut StdRng,
    hook: &mut dyn SpawnHook,
    room: &Room,
    count: i32,
    kind: &str,
) {
    for _ in 0..count {
        for _ in 0..SPAWN_ATTEMPTS {
            let x = rng.random_range(room.x..room.x + room.width);
            let y = rng.random_range(room.y..room.y + room.height);
            if loc.is_walkable(x, y) && !hook.is_occupied((x, y)) {
                hook.spawn(kind, (x, y), loc.world_pos);
                break;
            }
        }
    }
}

/// Scatter `count` spawns anywhere walkable in the location.
fn populate_scattered(
    loc: &Location,
    biomes: &BiomeCatalog,
    rng: &mut StdRng,
    hook: &mut dyn SpawnHook,
    count: i32,
    fallback: &str,
) {
    for _ in 0..count {
        for _ in 0..SPAWN_ATTEMPTS {
            let x = rng.random_range(0..loc.width);
            let y = rng.random_range(0..loc.height);
            if !loc.is_walkable(x, y) || hook.is_occupied((x, y)) {
                continue;
            }
            let kind = biomes
                .roll_spawn(loc.meta.biome, loc.meta.difficulty, rng)
                .unwrap_or(fallback);
            hook.spawn(kind, (x, y), loc.world_pos);
            break;
        }
    }
}

// ============================================================================
// DUNGEON
// ============================================================================

/// Classic rooms-and-corridors dungeon: solid fill, buffered room placement,
/// L-corridors between consecutive room centers, stairs in the first and last
/// rooms, probabilistic doors, enemies in every interior room but the first.
fn generate_dungeon(
    loc: &mut Location,
    biomes: &BiomeCatalog,
    structures: &StructureCatalog,
    rng: &mut StdRng,
    hook: &mut dyn SpawnHook,
) {
    let def = *structures.descriptor(StructureType::Dungeon);
    fill_wall(loc, biomes, rng);

    let count = room_count(loc, def.room_density, rng);
    let rooms = place_rooms(loc, count, rng);
    for room in &rooms {
        carve_room(loc, biomes, rng, room);
    }
    for pair in rooms.windows(2) {
        carve_corridor(loc, biomes, rng, pair[0].center(), pair[1].center());
    }

    if let Some(first) = rooms.first() {
        let (x, y) = first.center();
        loc.set_kind(x, y, TileKind::StairsUp);
    }
    if let Some(last) = rooms.last() {
        let (mut x, y) = last.center();
        // A single room holds both stairways; nudge the exit off the entry.
        if rooms.len() == 1 {
            x += 1;
        }
        loc.set_kind(x, y, TileKind::StairsDown);
    }

    for room in &rooms {
        place_doors(loc, rng, room, 0.3, TileKind::DoorClosed);
    }

    // First room is reserved for the player's arrival.
    for room in rooms.iter().skip(1) {
        let enemies = rng.random_range(2..=4);
        populate_room(loc, biomes, rng, hook, room, enemies, "skeleton");
    }
}

// ============================================================================
// TOWN
// ============================================================================

/// Open settlement: floor fill, buildings as closed rectangles with walls on
/// the perimeter and floor inside, generous doors, light vegetation, NPCs.
fn generate_town(
    loc: &mut Location,
    biomes: &BiomeCatalog,
    structures: &StructureCatalog,
    rng: &mut StdRng,
    hook: &mut dyn SpawnHook,
) {
    let def = *structures.descriptor(StructureType::Town);
    fill_floor(loc, biomes, rng);

    let count = room_count(loc, def.room_density, rng);
    let buildings = place_rooms(loc, count, rng);
    for b in &buildings {
        carve_building(loc, biomes, rng, b, 0.8);
    }

    scatter_vegetation(loc, biomes, rng, 0.1);

    for (i, b) in buildings.iter().enumerate() {
        let npcs = rng.random_range(1..=2);
        let interior = Room { x: b.x + 1, y: b.y + 1, width: b.width - 2, height: b.height - 2 };
        if interior.width < 1 || interior.height < 1 {
            continue;
        }
        // The first building gets the shopkeeper.
        let kind = if def.has_shops && i == 0 { "shopkeeper" } else { "villager" };
        populate_room_with(loc, rng, hook, &interior, npcs, kind);
    }
}

/// A closed building: wall ring on the rectangle perimeter, floor inside,
/// one door on a random edge with probability `door_chance`.
fn carve_building(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, b: &Room, door_chance: f32) {
    for y in b.y..b.y + b.height {
        for x in b.x..b.x + b.width {
            let on_edge = x == b.x || y == b.y || x == b.x + b.width - 1 || y == b.y + b.height - 1;
            if on_edge {
                set_wall(loc, biomes, rng, x, y);
            } else {
                set_floor(loc, biomes, rng, x, y);
            }
        }
    }
    if rng.random::<f32>() < door_chance {
        // Random non-corner cell on a random edge.
        let (dx, dy) = match rng.random_range(0..4) {
            0 => (rng.random_range(b.x + 1..b.x + b.width - 1), b.y),
            1 => (rng.random_range(b.x + 1..b.x + b.width - 1), b.y + b.height - 1),
            2 => (b.x, rng.random_range(b.y + 1..b.y + b.height - 1)),
            _ => (b.x + b.width - 1, rng.random_range(b.y + 1..b.y + b.height - 1)),
        };
        loc.set_kind(dx, dy, TileKind::DoorOpen);
    }
}

// ============================================================================
// RUINS
// ============================================================================

/// Decayed settlement: room perimeters keep each wall tile independently with
/// ~60% probability, then overgrowth and pooled water reclaim the floor.
fn generate_ruins(
    loc: &mut Location,
    biomes: &BiomeCatalog,
    structures: &StructureCatalog,
    rng: &mut StdRng,
    hook: &mut dyn SpawnHook,
) {
    let def = *structures.descriptor(StructureType::Ruins);
    fill_floor(loc, biomes, rng);

    let count = room_count(loc, def.room_density, rng);
    let rooms = place_rooms(loc, count, rng);
    for b in &rooms {
        for y in b.y..b.y + b.height {
            for x in b.x..b.x + b.width {
                let on_edge = x == b.x || y == b.y || x == b.x + b.width - 1 || y == b.y + b.height - 1;
                if on_edge && rng.random::<f32>() < 0.6 {
                    set_wall(loc, biomes, rng, x, y);
                }
            }
        }
    }

    scatter_vegetation(loc, biomes, rng, 0.3);
    scatter_water(loc, biomes, rng, 0.1);

    for room in &rooms {
        let enemies = rng.random_range(1..=3);
        populate_room(loc, biomes, rng, hook, room, enemies, "ghoul");
    }
}

// ============================================================================
// FACTION BASE
// ============================================================================

/// Organized compound: one large perimeter room, an interior 3x3 grid of
/// walled buildings with the center left as an open courtyard, a single
/// entrance doorway at the top-center edge, guards in every building.
fn generate_faction_base(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, hook: &mut dyn SpawnHook) {
    fill_wall(loc, biomes, rng);

    // Large perimeter room: everything inside the outer wall ring.
    let interior = Room::new(1, 1, loc.width - 2, loc.height - 2);
    carve_room(loc, biomes, rng, &interior);

    // Entrance doorway at the top-center edge.
    let entrance_x = loc.width / 2;
    loc.set_kind(entrance_x, 0, TileKind::DoorOpen);

    // 3x3 grid of buildings, center cell stays open courtyard.
    let cell_w = interior.width / 3;
    let cell_h = interior.height / 3;
    let mut guard_rooms: Vec<Room> = Vec::new();
    for gy in 0..3 {
        for gx in 0..3 {
            if gx == 1 && gy == 1 {
                continue;
            }
            let cx = interior.x + gx * cell_w;
            let cy = interior.y + gy * cell_h;
            // Leave a one-tile walkway around each building inside its cell.
            let b = Room::new(cx + 1, cy + 1, (cell_w - 2).max(ROOM_MIN_SIZE), (cell_h - 2).max(ROOM_MIN_SIZE));
            if b.x + b.width >= interior.x + interior.width || b.y + b.height >= interior.y + interior.height {
                continue;
            }
            carve_building(loc, biomes, rng, &b, 0.9);
            guard_rooms.push(Room { x: b.x + 1, y: b.y + 1, width: b.width - 2, height: b.height - 2 });
        }
    }

    for room in &guard_rooms {
        if room.width < 1 || room.height < 1 {
            continue;
        }
        let guards = rng.random_range(1..=2);
        populate_room_with(loc, rng, hook, room, guards, "guard");
    }
}

// ============================================================================
// WILDERNESS
// ============================================================================

/// Open terrain: independent per-tile overlays on floor only (heavy
/// vegetation, moderate water, light rocky outcrops), then scattered wildlife.
fn generate_wilderness(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, hook: &mut dyn SpawnHook) {
    fill_floor(loc, biomes, rng);

    scatter_vegetation(loc, biomes, rng, 0.5);
    scatter_water(loc, biomes, rng, 0.2);
    for y in 0..loc.height {
        for x in 0..loc.width {
            if loc.kind(x, y) == TileKind::Floor && rng.random::<f32>() < 0.1 {
                set_wall(loc, biomes, rng, x, y);
            }
        }
    }

    let count = rng.random_range(10..=15);
    populate_scattered(loc, biomes, rng, hook, count, "wolf");
}

/// Per-tile vegetation overlay on floor tiles only. No-op for biomes without
/// a vegetation set.
fn scatter_vegetation(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, density: f32) {
    for y in 0..loc.height {
        for x in 0..loc.width {
            if loc.kind(x, y) == TileKind::Floor && rng.random::<f32>() < density {
                if let Some(tile) = biomes.random_vegetation_tile(loc.meta.biome, rng) {
                    loc.set_tile(x, y, tile);
                }
            }
        }
    }
}

/// Per-tile water overlay on floor tiles only. No-op for dry biomes.
fn scatter_water(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, density: f32) {
    for y in 0..loc.height {
        for x in 0..loc.width {
            if loc.kind(x, y) == TileKind::Floor && rng.random::<f32>() < density {
                if let Some(tile) = biomes.water_tile(loc.meta.biome) {
                    loc.set_tile(x, y, tile);
                }
            }
        }
    }
}

// ============================================================================
// CAVE
// ============================================================================

/// Organic cavern: cellular automaton over a seeded wall field, then a
/// flood-fill repair pass that guarantees the walkable area is one
/// 4-connected region. Disconnected pockets become wall, never an error.
fn generate_cave(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng, hook: &mut dyn SpawnHook) {
    let w = loc.width as usize;
    let h = loc.height as usize;

    // Seed: true = wall.
    let mut cells: Vec<bool> = (0..w * h).map(|_| rng.random::<f32>() < CAVE_SEED_DENSITY).collect();

    for _ in 0..CAVE_AUTOMATON_STEPS {
        let mut next = vec![false; w * h];
        for y in 0..h {
            for x in 0..w {
                let walls = wall_neighbors(&cells, w, h, x as i32, y as i32);
                // >= birth limit grows caverns; == 0 fills isolated pillar holes.
                next[y * w + x] = walls >= CAVE_BIRTH_LIMIT || walls == 0;
            }
        }
        cells = next;
    }

    for y in 0..loc.height {
        for x in 0..loc.width {
            if cells[y as usize * w + x as usize] {
                set_wall(loc, biomes, rng, x, y);
            } else {
                set_floor(loc, biomes, rng, x, y);
            }
        }
    }

    repair_connectivity(loc, biomes, rng);
    scatter_water(loc, biomes, rng, 0.05);

    let count = rng.random_range(15..=25);
    populate_scattered(loc, biomes, rng, hook, count, "cave_bat");
}

/// 8-neighborhood wall count with out-of-bounds counted as wall.
fn wall_neighbors(cells: &[bool], w: usize, h: usize, x: i32, y: i32) -> u32 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                count += 1;
            } else if cells[ny as usize * w + nx as usize] {
                count += 1;
            }
        }
    }
    count
}

/// Flood-fill from the first walkable tile in reading order over 4-adjacency,
/// then convert every walkable tile the fill never reached back to wall.
/// Postcondition: the walkable area is a single connected region.
fn repair_connectivity(loc: &mut Location, biomes: &BiomeCatalog, rng: &mut StdRng) {
    let mut seed = None;
    'scan: for y in 0..loc.height {
        for x in 0..loc.width {
            if loc.is_walkable(x, y) {
                seed = Some((x, y));
                break 'scan;
            }
        }
    }
    let Some(seed) = seed else { return };

    let reached: HashSet<(i32, i32)> = bfs_reach(seed, |&(x, y)| {
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .filter(|&(nx, ny)| loc.is_walkable(nx, ny))
            .collect::<Vec<_>>()
    })
    .collect();

    let mut sealed = 0;
    for y in 0..loc.height {
        for x in 0..loc.width {
            if loc.is_walkable(x, y) && !reached.contains(&(x, y)) {
                set_wall(loc, biomes, rng, x, y);
                sealed += 1;
            }
        }
    }
    if sealed > 0 {
        debug!("cave repair at {:?}: sealed {} unreachable tiles", loc.world_pos, sealed);
    }
}

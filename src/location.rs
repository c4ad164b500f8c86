//! Location — one rectangular tile area of the world, addressed from the
//! outer world grid by integer coordinates. Owns its tiles and metadata but
//! no entities.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Biome, EnvironmentStats, StructureType};
use crate::tile::{Tile, TileKind, TileVisual};

/// Resolved metadata for a generated location.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationMeta {
    pub structure: StructureType,
    pub biome: Biome,
    pub environment: EnvironmentStats,
    pub name: Option<String>,
    /// 1 (tame) to 10 (lethal). Gates spawn-table entries.
    pub difficulty: u8,
}

impl LocationMeta {
    pub fn new(structure: StructureType, biome: Biome) -> Self {
        Self {
            structure,
            biome,
            environment: EnvironmentStats::default(),
            name: None,
            difficulty: 1,
        }
    }
}

/// A rectangular tile grid. Tiles are stored row-major in a flat vec;
/// all access is bounds-checked, with absent sentinels (not errors) outside
/// the grid so neighbor checks near edges stay branch-light.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub world_pos: (i32, i32),
    pub width: i32,
    pub height: i32,
    tiles: Vec<Tile>,
    pub meta: LocationMeta,
}

impl Location {
    pub fn new(world_pos: (i32, i32), width: i32, height: i32, meta: LocationMeta) -> Self {
        let w = width.max(1);
        let h = height.max(1);
        Self {
            world_pos,
            width: w,
            height: h,
            tiles: vec![Tile::default(); (w * h) as usize],
            meta,
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Tile at (x, y), or None outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// Write a tile. No-op outside the grid.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles[idx] = tile;
        }
    }

    /// Write a tile by structural kind with canonical properties.
    pub fn set_kind(&mut self, x: i32, y: i32, kind: TileKind) {
        self.set_tile(x, y, Tile::new(kind));
    }

    /// Bulk-initialize every tile to one kind.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    pub fn kind(&self, x: i32, y: i32) -> TileKind {
        self.tile(x, y).map(|t| t.kind).unwrap_or(TileKind::Void)
    }

    /// False outside the grid or on a non-walkable kind.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|t| t.walkable)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.walkable).count()
    }

    /// Random walkable tile, sampled up to 100 times. None on a map solid
    /// enough that the budget runs out; never loops forever.
    pub fn random_walkable_position(&self, rng: &mut StdRng) -> Option<(i32, i32)> {
        for _ in 0..100 {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            if self.is_walkable(x, y) {
                return Some((x, y));
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // External boundaries
    // ------------------------------------------------------------------

    /// Render-layer tuple for a tile, or None outside the grid.
    pub fn visual(&self, x: i32, y: i32) -> Option<TileVisual> {
        self.tile(x, y).map(|t| TileVisual::for_tile(t, x, y))
    }

    /// Collision value for the movement-query layer: 0 passable, 1 solid.
    /// Out-of-range positions read as solid.
    pub fn collision(&self, x: i32, y: i32) -> u8 {
        self.tile(x, y).map(|t| t.collision()).unwrap_or(1)
    }

    /// Glyph rows for terminal rendering.
    pub fn render_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.kind(x, y).glyph()).collect())
            .collect()
    }
}

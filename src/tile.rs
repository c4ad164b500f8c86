//! Tile model — structural kinds, canonical passability, and the
//! visual/collision tuples consumed by external presentation layers.

use serde::{Deserialize, Serialize};

/// RGBA color, each channel in [0, 1].
pub type Tint = [f32; 4];

pub const TINT_NONE: Tint = [1.0, 1.0, 1.0, 1.0];

// ============================================================================
// TILE KIND
// ============================================================================

/// Structural kind of a tile. Walkability and transparency derive from this
/// and are never set independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Void,
    Floor,
    Wall,
    DoorOpen,
    DoorClosed,
    StairsUp,
    StairsDown,
    Water,
    Vegetation,
    Obstacle,
}

impl TileKind {
    /// Canonical passability. Water is shallow and wadeable; closed doors
    /// open on bump, so the movement layer treats them as passable.
    pub fn walkable(self) -> bool {
        matches!(
            self,
            TileKind::Floor
                | TileKind::DoorOpen
                | TileKind::DoorClosed
                | TileKind::StairsUp
                | TileKind::StairsDown
                | TileKind::Water
                | TileKind::Vegetation
        )
    }

    /// Canonical sight transparency. Vegetation blocks sight, low obstacles don't.
    pub fn transparent(self) -> bool {
        !matches!(self, TileKind::Wall | TileKind::DoorClosed | TileKind::Vegetation | TileKind::Void)
    }

    /// Fallback sprite index when no biome-specific tile applies.
    pub fn default_sprite(self) -> u16 {
        match self {
            TileKind::Void => 0,
            TileKind::Floor => 1,
            TileKind::Wall => 2,
            TileKind::DoorOpen => 80,
            TileKind::DoorClosed => 81,
            TileKind::StairsUp => 82,
            TileKind::StairsDown => 83,
            TileKind::Water => 84,
            TileKind::Vegetation => 85,
            TileKind::Obstacle => 86,
        }
    }

    /// Map glyph for terminal rendering.
    pub fn glyph(self) -> char {
        match self {
            TileKind::Void => ' ',
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::DoorOpen => '/',
            TileKind::DoorClosed => '+',
            TileKind::StairsUp => '<',
            TileKind::StairsDown => '>',
            TileKind::Water => '~',
            TileKind::Vegetation => '"',
            TileKind::Obstacle => '%',
        }
    }
}

// ============================================================================
// TILE
// ============================================================================

/// One cell of a location grid.
/// `walkable`/`transparent` are cached from the kind at construction so the
/// collision boundary is a plain field read in hot query loops.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub walkable: bool,
    pub transparent: bool,
    /// Sprite/tint selector for the external tile-presentation layer.
    pub sprite: u16,
    pub tint: Tint,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            walkable: kind.walkable(),
            transparent: kind.transparent(),
            sprite: kind.default_sprite(),
            tint: TINT_NONE,
        }
    }

    pub fn with_sprite(mut self, sprite: u16) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    /// Replace the structural kind, re-deriving passability. Sprite and tint
    /// are kept only when the kind is unchanged.
    pub fn set_kind(&mut self, kind: TileKind) {
        if self.kind != kind {
            self.sprite = kind.default_sprite();
        }
        self.kind = kind;
        self.walkable = kind.walkable();
        self.transparent = kind.transparent();
    }

    /// Binary collision value for the external movement-query layer.
    /// 0 = passable, 1 = solid.
    pub fn collision(&self) -> u8 {
        if self.walkable { 0 } else { 1 }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::new(TileKind::Void)
    }
}

// ============================================================================
// RENDER BOUNDARY
// ============================================================================

/// Per-tile tuple for the external presentation layer. The core makes no
/// assumption about how the consumer draws it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileVisual {
    pub sprite: u16,
    /// Quarter-turn count, 0-3.
    pub orientation: u8,
    pub mirror: bool,
    pub tint: Tint,
}

impl TileVisual {
    /// Derive the visual tuple for a tile at a grid position. Orientation and
    /// mirroring vary by position hash so repeated sprites don't band, the
    /// same trick as alternating terrain tiles by cell index.
    pub fn for_tile(tile: &Tile, x: i32, y: i32) -> Self {
        let h = (x as u32).wrapping_mul(0x9E37_79B9) ^ (y as u32).wrapping_mul(0x85EB_CA6B);
        // Only decorative kinds get rotated/mirrored; structure stays upright.
        let decorative = matches!(tile.kind, TileKind::Vegetation | TileKind::Water | TileKind::Floor);
        Self {
            sprite: tile.sprite,
            orientation: if decorative { (h & 3) as u8 } else { 0 },
            mirror: decorative && (h >> 2) & 1 == 1,
            tint: tile.tint,
        }
    }
}

/// Linear interpolation between two tints.
pub fn lerp_tint(a: Tint, b: Tint, t: f32) -> Tint {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

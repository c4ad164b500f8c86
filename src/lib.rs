//! Wildreach — procedural location generation and lifecycle management for a
//! tile-based roguelike world.
//!
//! The world is a sparse outer grid of locations, lazily generated on first
//! visit and evicted on demand. Each location is themed by a biome catalog,
//! laid out by one of six structural-type algorithms, and guaranteed
//! traversable. Entities, rendering, and input live outside this crate and
//! are reached only through the narrow spawn/visual/collision boundaries.

// ============================================================================
// MODULES
// ============================================================================

pub mod catalog;
pub mod generator;
pub mod location;
pub mod settings;
pub mod tile;
pub mod transition;
pub mod world;

pub use catalog::{Biome, BiomeCatalog, StructureCatalog, StructureType};
pub use generator::{NoSpawns, SpawnHook};
pub use location::{Location, LocationMeta};
pub use settings::WorldSettings;
pub use tile::{Tile, TileKind, TileVisual};
pub use world::World;

#[cfg(test)]
mod tests;

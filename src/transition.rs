//! Biome transition blending — pure functions that blend tiles, tints, and
//! environment values for positions near a location's edge, so adjacent
//! biomes meet without a hard seam.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Biome, BiomeCatalog, Surface};
use crate::tile::{Tile, Tint, lerp_tint};

/// Blend-factor shaping curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCurve {
    #[default]
    Linear,
    /// Smoothstep: 3t^2 - 2t^3.
    Smooth,
    /// t^2, holds the from-side longer.
    Sharp,
}

/// Which location edge a position sits near.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    North,
    South,
    West,
    East,
}

/// Blend factor in [0, 1] for a position `distance` tiles into a transition
/// zone of `zone_width` tiles. Monotone in `distance`; 0 at the zone's outer
/// edge, 1 at its inner edge.
pub fn transition_factor(distance: f32, zone_width: f32, curve: TransitionCurve) -> f32 {
    if zone_width <= 0.0 {
        return 1.0;
    }
    let t = (distance.clamp(0.0, zone_width)) / zone_width;
    match curve {
        TransitionCurve::Linear => t,
        TransitionCurve::Smooth => t * t * (3.0 - 2.0 * t),
        TransitionCurve::Sharp => t * t,
    }
}

/// Tile for a position blending from one biome into another. Below 0.3 the
/// from-side wins outright, above 0.7 the to-side does; in between the side
/// is sampled with probability `factor`. Walls never randomize: a speckled
/// wall line reads as damage, so they snap to the dominant side.
pub fn transition_tile(
    catalog: &BiomeCatalog,
    from: Biome,
    to: Biome,
    factor: f32,
    surface: Surface,
    rng: &mut StdRng,
) -> Tile {
    let factor = factor.clamp(0.0, 1.0);
    let use_to = match surface {
        Surface::Wall => factor > 0.5,
        _ => {
            if factor < 0.3 {
                false
            } else if factor > 0.7 {
                true
            } else {
                rng.random::<f32>() < factor
            }
        }
    };
    let biome = if use_to { to } else { from };
    match surface {
        Surface::Floor => catalog.random_floor_tile(biome, rng),
        Surface::Wall => catalog.random_wall_tile(biome, rng),
        Surface::Water => catalog
            .water_tile(biome)
            .or_else(|| catalog.water_tile(if use_to { from } else { to }))
            .unwrap_or_else(|| catalog.random_floor_tile(biome, rng)),
        Surface::Vegetation => catalog
            .random_vegetation_tile(biome, rng)
            .unwrap_or_else(|| catalog.random_floor_tile(biome, rng)),
    }
}

/// Blended tint for a surface between two biomes. Linear RGBA interpolation
/// when both sides define a tint; a single-sided tint passes through
/// unmodified; None when neither side tints the surface.
pub fn transition_tint(
    catalog: &BiomeCatalog,
    from: Biome,
    to: Biome,
    factor: f32,
    surface: Surface,
) -> Option<Tint> {
    let a = catalog.descriptor(from).tint_for(surface);
    let b = catalog.descriptor(to).tint_for(surface);
    match (a, b) {
        (Some(a), Some(b)) => Some(lerp_tint(a, b, factor)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Which edge (if any) a position is within `edge_width` tiles of, and the
/// distance into that zone (0 at the border itself). The nearest edge wins
/// when a corner position is inside two zones.
pub fn edge_transition(x: i32, y: i32, width: i32, height: i32, edge_width: i32) -> Option<(Edge, i32)> {
    if edge_width <= 0 || x < 0 || y < 0 || x >= width || y >= height {
        return None;
    }
    let candidates = [
        (Edge::North, y),
        (Edge::South, height - 1 - y),
        (Edge::West, x),
        (Edge::East, width - 1 - x),
    ];
    candidates
        .into_iter()
        .filter(|&(_, d)| d < edge_width)
        .min_by_key(|&(_, d)| d)
}

use bevy::prelude::*;
use hexx::{Hex, HexLayout, shapes};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::math;

use super::GardenConfig;

/// Offset applied to noise samples for the flower count, so that it does not
/// track plant presence.
const COUNT_NOISE_OFFSET: f64 = 97.0;

/// Where a flower plant goes and how many flowers it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantSite {
    /// Hex cell the plant occupies.
    pub hex: Hex,
    /// World-space XZ position of the plant.
    pub pos: Vec2,
    /// Number of flowers on the plant.
    pub flowers: u32,
}

/// Chooses plant sites on a hex grid clipped to a disc of `diameter`.
///
/// Cells whose presence noise falls below `plant_threshold` stay empty.
pub fn plant_sites(g: &GardenConfig, diameter: f32) -> Vec<PlantSite> {
    let layout = HexLayout {
        scale: Vec2::splat(g.cell_spacing),
        ..default()
    };
    let fbm: Fbm<Perlin> = Fbm::new(g.noise_seed).set_octaves(g.noise_octaves);
    let radius = diameter / 2.0;
    let (min, max) = (g.min_flowers.min(g.max_flowers), g.max_flowers.max(g.min_flowers));

    let mut sites = Vec::new();
    for hex in shapes::hexagon(Hex::ZERO, g.rings) {
        let pos = layout.hex_to_world_pos(hex);
        if pos.length() > radius {
            continue;
        }

        let sx = pos.x as f64 / g.noise_scale;
        let sy = pos.y as f64 / g.noise_scale;
        if fbm.get([sx, sy]) < g.plant_threshold {
            continue;
        }

        let count_noise = fbm.get([sx + COUNT_NOISE_OFFSET, sy + COUNT_NOISE_OFFSET]);
        let flowers = math::map_noise_to_range(count_noise, min as f32, max as f32)
            .round()
            .clamp(min as f32, max as f32) as u32;

        sites.push(PlantSite { hex, pos, flowers });
    }
    sites
}

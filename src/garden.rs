//! Demo garden: a flower area filled with noise-placed plants on a hex grid.
//!
//! Spawns the `FlowerArea` root, a ground disc, one `FlowerPlant` per chosen
//! hex cell, flowers around each plant and a nectar trigger per flower. The
//! area plugin indexes it at `PostStartup`.

mod garden_layout;
mod startup_systems;
mod systems;

pub use garden_layout::{PlantSite, plant_sites};

use bevy::prelude::*;

use crate::GameState;

/// Garden layout, noise and geometry parameters.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct GardenConfig {
    /// Number of hex rings considered around the origin.
    pub rings: u32,
    /// Hex size in world-units.
    pub cell_spacing: f32,
    /// Seed for the placement noise generator.
    pub noise_seed: u32,
    /// Number of octaves for placement noise.
    pub noise_octaves: usize,
    /// Spatial scale divisor for noise sampling.
    pub noise_scale: f64,
    /// Cells whose noise falls below this stay empty.
    pub plant_threshold: f64,
    /// Fewest flowers on a plant.
    pub min_flowers: u32,
    /// Most flowers on a plant.
    pub max_flowers: u32,
    /// Distance of flower heads from the plant's stem.
    pub flower_spread: f32,
    /// Height of flower heads above the plant's base.
    pub flower_height: f32,
    /// Background clear color.
    pub clear_color: Color,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            rings: 4,
            cell_spacing: 2.0,
            noise_seed: 7,
            noise_octaves: 3,
            noise_scale: 6.0,
            plant_threshold: -0.2,
            min_flowers: 2,
            max_flowers: 5,
            flower_spread: 0.35,
            flower_height: 0.9,
            clear_color: Color::srgb(0.53, 0.75, 0.92),
        }
    }
}

/// Spawns the demo garden and its keyboard controls.
pub struct GardenPlugin(pub GardenConfig);

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GardenConfig>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(
                Startup,
                (startup_systems::spawn_garden, startup_systems::spawn_camera),
            )
            .add_systems(
                Update,
                (systems::reset_on_key, systems::reindex_on_key)
                    .before(crate::area::FlowerAreaSet::Index)
                    .run_if(in_state(GameState::Running)),
            );
    }
}

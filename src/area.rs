//! Flower area: indexes the flowers living under an area root and resets them.
//!
//! The hierarchy is `FlowerArea` → (`FlowerPlant` | plain node)* → `Flower`,
//! where each `Flower` may point at a separate nectar trigger entity. The
//! index is built once when a `FlowerArea` appears (startup areas at
//! `PostStartup`, later ones at the next `Update`) and rebuilt on
//! [`IndexFlowerAreas`].

mod entities;
mod systems;

pub use entities::{
    AreaRng, AreaScene, Flower, FlowerArea, FlowerPlant, FlowerReset, IndexFlowerAreas,
    NectarTrigger, ResetFlowers,
};

use bevy::prelude::*;

/// Pipeline ordering for flower area update systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlowerAreaSet {
    /// Rebuilds indexes requested through [`IndexFlowerAreas`].
    Index,
    /// Applies [`ResetFlowers`] requests.
    Reset,
}

/// Per-plugin configuration for flower areas.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct FlowerAreaConfig {
    /// Diameter of the playable area in world-units.
    pub diameter: f32,
    /// Max plant tilt around X and Z on reset (degrees).
    pub plant_tilt_degrees: f32,
    /// Max plant spin around Y on reset (degrees).
    pub plant_yaw_degrees: f32,
    /// Nectar held by a freshly reset flower.
    pub full_nectar: f32,
    /// Seed for [`AreaRng`]. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Writes a global [`ResetFlowers`] every this many seconds.
    ///
    /// Ignored unless finite and positive.
    pub auto_reset_secs: Option<f32>,
}

impl Default for FlowerAreaConfig {
    fn default() -> Self {
        Self {
            diameter: 20.0,
            plant_tilt_degrees: 5.0,
            plant_yaw_degrees: 180.0,
            full_nectar: 1.0,
            seed: None,
            auto_reset_secs: None,
        }
    }
}

/// Flower discovery, nectar lookup and randomized resets.
pub struct FlowerAreaPlugin(pub FlowerAreaConfig);

impl Plugin for FlowerAreaPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FlowerAreaConfig>()
            .register_type::<FlowerArea>()
            .register_type::<FlowerPlant>()
            .register_type::<Flower>()
            .register_type::<NectarTrigger>()
            .insert_resource(self.0.clone())
            .insert_resource(AreaRng::seeded(self.0.seed))
            .add_message::<IndexFlowerAreas>()
            .add_message::<ResetFlowers>()
            .configure_sets(Update, (FlowerAreaSet::Index, FlowerAreaSet::Reset).chain())
            .add_systems(PostStartup, systems::index_new_areas)
            .add_systems(
                Update,
                (systems::index_new_areas, systems::handle_index_requests)
                    .chain()
                    .in_set(FlowerAreaSet::Index),
            )
            .add_systems(
                Update,
                systems::handle_reset_requests.in_set(FlowerAreaSet::Reset),
            );

        match self.0.auto_reset_secs {
            Some(secs) if secs.is_finite() && secs > 0.0 => {
                app.insert_resource(systems::AutoReset(Timer::from_seconds(
                    secs,
                    TimerMode::Repeating,
                )))
                .add_systems(
                    Update,
                    systems::tick_auto_reset.before(FlowerAreaSet::Reset),
                );
            }
            Some(secs) => {
                warn!("auto reset disabled: {secs} is not a positive number of seconds");
            }
            None => {}
        }
    }
}

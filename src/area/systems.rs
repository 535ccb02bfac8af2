//! Indexing and reset systems for flower areas.

use bevy::prelude::*;

use super::entities::{AreaScene, FlowerArea, FlowerReset, IndexFlowerAreas, ResetFlowers};

/// Repeating timer behind `FlowerAreaConfig::auto_reset_secs`.
#[derive(Resource)]
pub struct AutoReset(pub Timer);

/// Builds the index of each newly added area.
///
/// Runs at `PostStartup` for areas spawned during startup and every `Update`
/// for areas spawned later.
pub fn index_new_areas(
    mut areas: Query<(Entity, &mut FlowerArea), Added<FlowerArea>>,
    scene: AreaScene,
) {
    for (root, mut area) in &mut areas {
        area.build_index(root, &scene);
    }
}

/// Rebuilds the areas named by [`IndexFlowerAreas`] requests.
pub fn handle_index_requests(
    mut requests: MessageReader<IndexFlowerAreas>,
    mut areas: Query<(Entity, &mut FlowerArea)>,
    scene: AreaScene,
) {
    for request in requests.read() {
        match request.area {
            None => {
                for (root, mut area) in &mut areas {
                    area.build_index(root, &scene);
                }
            }
            Some(root) => {
                let Ok((_, mut area)) = areas.get_mut(root) else {
                    warn!("index request for {root}, which is not a flower area");
                    continue;
                };
                area.build_index(root, &scene);
            }
        }
    }
}

/// Applies [`ResetFlowers`] requests.
pub fn handle_reset_requests(
    mut requests: MessageReader<ResetFlowers>,
    areas: Query<(Entity, &FlowerArea)>,
    mut reset: FlowerReset,
) {
    for request in requests.read() {
        match request.area {
            None => {
                for (_, area) in &areas {
                    area.reset_flowers(&mut reset);
                }
            }
            Some(root) => {
                let Ok((_, area)) = areas.get(root) else {
                    warn!("reset request for {root}, which is not a flower area");
                    continue;
                };
                area.reset_flowers(&mut reset);
            }
        }
    }
}

/// Writes a global [`ResetFlowers`] each time the [`AutoReset`] timer fires.
pub fn tick_auto_reset(
    time: Res<Time>,
    mut timer: ResMut<AutoReset>,
    mut writer: MessageWriter<ResetFlowers>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        info!("periodic flower reset");
        writer.write(ResetFlowers::default());
    }
}

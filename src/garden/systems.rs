use bevy::prelude::*;

use crate::area::{IndexFlowerAreas, ResetFlowers};

/// `R` resets every flower area.
pub fn reset_on_key(keys: Res<ButtonInput<KeyCode>>, mut writer: MessageWriter<ResetFlowers>) {
    if keys.just_pressed(KeyCode::KeyR) {
        writer.write(ResetFlowers::default());
    }
}

/// `I` rebuilds every flower area's index.
pub fn reindex_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    mut writer: MessageWriter<IndexFlowerAreas>,
) {
    if keys.just_pressed(KeyCode::KeyI) {
        writer.write(IndexFlowerAreas::default());
    }
}

//! Flower area viewer.
//!
//! Spawns a demo garden inside a flower area. `R` resets the flowers, `I`
//! rebuilds the index, Tab toggles the world inspector, Esc quits.

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
#[cfg(feature = "native")]
use clap::Parser;

use flower_area::GameState;
#[cfg(feature = "native")]
use flower_area::math;
use flower_area::area::{FlowerAreaConfig, FlowerAreaPlugin};
use flower_area::garden::{GardenConfig, GardenPlugin};

/// Command-line overrides for the demo garden.
#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(version, about = "Flower area viewer")]
struct Args {
    /// Seed for plant rotations and garden layout (folded to 32 bits for the layout noise).
    #[arg(long)]
    seed: Option<u64>,
    /// Hex rings of candidate plant sites.
    #[arg(long)]
    rings: Option<u32>,
    /// Reset all flowers every N seconds.
    #[arg(long, value_name = "SECS")]
    auto_reset: Option<f32>,
}

/// Default configs with any command-line overrides applied.
#[cfg(feature = "native")]
fn configs() -> (FlowerAreaConfig, GardenConfig) {
    let args = Args::parse();
    let mut area_cfg = FlowerAreaConfig::default();
    let mut garden_cfg = GardenConfig::default();
    if let Some(seed) = args.seed {
        area_cfg.seed = Some(seed);
        garden_cfg.noise_seed = math::fold_seed(seed);
    }
    if let Some(rings) = args.rings {
        garden_cfg.rings = rings;
    }
    area_cfg.auto_reset_secs = args.auto_reset;
    (area_cfg, garden_cfg)
}

#[cfg(not(feature = "native"))]
fn configs() -> (FlowerAreaConfig, GardenConfig) {
    (FlowerAreaConfig::default(), GardenConfig::default())
}

fn main() {
    let (area_cfg, garden_cfg) = configs();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Flower Area".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(FlowerAreaPlugin(area_cfg))
    .add_plugins(GardenPlugin(garden_cfg))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        };
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

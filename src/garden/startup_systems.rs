use bevy::prelude::*;

use super::GardenConfig;
use super::garden_layout::plant_sites;
use crate::area::{Flower, FlowerArea, FlowerAreaConfig, FlowerPlant, NectarTrigger};

// ── Startup ─────────────────────────────────────────────────────────

/// Spawns the [`FlowerArea`] root with ground, plants, flowers and nectar triggers.
pub fn spawn_garden(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GardenConfig>,
    area_cfg: Res<FlowerAreaConfig>,
) {
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.28, 0.45, 0.2),
        perceptual_roughness: 0.9,
        ..default()
    });
    let stem_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.15, 0.55, 0.2),
        ..default()
    });
    let petal_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.3),
        ..default()
    });

    let ground_mesh = meshes.add(Circle::new(area_cfg.diameter / 2.0));
    let stem_mesh = meshes.add(Cylinder::new(0.05, cfg.flower_height));
    let head_mesh = meshes.add(Sphere::new(0.12));

    let area_entity = commands
        .spawn((
            Name::new("FlowerArea"),
            FlowerArea::default(),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let ground = commands
        .spawn((
            Name::new("Ground"),
            Mesh3d(ground_mesh),
            MeshMaterial3d(ground_material),
            Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        ))
        .id();
    commands.entity(area_entity).add_child(ground);

    let sites = plant_sites(&cfg, area_cfg.diameter);
    let mut flower_total = 0;

    for site in &sites {
        let (q, r) = (site.hex.x, site.hex.y);
        let plant = commands
            .spawn((
                FlowerPlant,
                Name::new(format!("FlowerPlant({q},{r})")),
                Transform::from_xyz(site.pos.x, 0.0, site.pos.y),
                Visibility::default(),
            ))
            .id();
        commands.entity(area_entity).add_child(plant);

        let stem = commands
            .spawn((
                Name::new(format!("Stem({q},{r})")),
                Mesh3d(stem_mesh.clone()),
                MeshMaterial3d(stem_material.clone()),
                Transform::from_xyz(0.0, cfg.flower_height / 2.0, 0.0),
            ))
            .id();
        commands.entity(plant).add_child(stem);

        for i in 0..site.flowers {
            let angle = i as f32 / site.flowers as f32 * std::f32::consts::TAU;
            let offset = Vec3::new(
                angle.cos() * cfg.flower_spread,
                cfg.flower_height,
                angle.sin() * cfg.flower_spread,
            );

            let nectar = commands
                .spawn((
                    NectarTrigger,
                    Name::new(format!("Nectar({q},{r})#{i}")),
                    Transform::from_xyz(0.0, 0.1, 0.0),
                    Visibility::default(),
                ))
                .id();
            let flower = commands
                .spawn((
                    Flower::new(Some(nectar)),
                    Name::new(format!("Flower({q},{r})#{i}")),
                    Mesh3d(head_mesh.clone()),
                    MeshMaterial3d(petal_material.clone()),
                    Transform::from_translation(offset),
                ))
                .id();
            commands.entity(flower).add_child(nectar);
            commands.entity(plant).add_child(flower);
        }
        flower_total += site.flowers;
    }

    info!(
        "spawned garden: {} plants, {flower_total} flowers",
        sites.len()
    );
}

/// Spawns a camera overlooking the area and a sun light.
pub fn spawn_camera(mut commands: Commands, area_cfg: Res<FlowerAreaConfig>) {
    let d = area_cfg.diameter;
    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Transform::from_xyz(0.0, d * 0.6, d * 0.8).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight::default(),
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

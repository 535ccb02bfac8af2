use bevy::ecs::system::SystemParam;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::FlowerAreaConfig;
use crate::math;

/// Marker for flower-plant group entities. Resets rotate these as a unit.
#[derive(Component, Reflect, Default)]
pub struct FlowerPlant;

/// Marker for nectar trigger entities referenced by [`Flower::nectar`].
#[derive(Component, Reflect, Default)]
pub struct NectarTrigger;

/// A single flower holding a refillable amount of nectar.
#[derive(Component, Reflect, Clone, Debug)]
pub struct Flower {
    /// Trigger entity whose contacts mean "feeding at this flower".
    pub nectar: Option<Entity>,
    /// Nectar left, in `[0, full]`.
    pub nectar_amount: f32,
}

impl Default for Flower {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Flower {
    /// Full flower with the given trigger.
    pub fn new(nectar: Option<Entity>) -> Self {
        Self {
            nectar,
            nectar_amount: 1.0,
        }
    }

    /// True while any nectar remains.
    pub fn has_nectar(&self) -> bool {
        self.nectar_amount > 0.0
    }

    /// Removes up to `amount` nectar and returns how much was actually taken.
    pub fn feed(&mut self, amount: f32) -> f32 {
        let taken = amount.clamp(0.0, self.nectar_amount.max(0.0));
        self.nectar_amount -= taken;
        taken
    }

    /// Refills to `full`.
    pub fn reset(&mut self, full: f32) {
        self.nectar_amount = full;
    }
}

/// Root of a flower area. Holds the index built from its descendants.
///
/// Invariant: every value in the nectar lookup is also in `flowers`, and each
/// nectar trigger maps to exactly one flower.
#[derive(Component, Reflect, Default, Debug)]
pub struct FlowerArea {
    plants: Vec<Entity>,
    flowers: Vec<Entity>,
    nectar_flowers: HashMap<Entity, Entity>,
}

/// Read-only hierarchy access needed to index an area.
#[derive(SystemParam)]
pub struct AreaScene<'w, 's> {
    /// Child lists of every node.
    pub children: Query<'w, 's, &'static Children>,
    /// Nodes tagged as flower plants.
    pub plants: Query<'w, 's, (), With<FlowerPlant>>,
    /// Nodes carrying a flower.
    pub flowers: Query<'w, 's, &'static Flower>,
}

/// Mutable state touched by [`FlowerArea::reset_flowers`].
#[derive(SystemParam)]
pub struct FlowerReset<'w, 's> {
    /// Plant transforms to re-randomize.
    pub plants: Query<'w, 's, &'static mut Transform, With<FlowerPlant>>,
    /// Flowers to refill.
    pub flowers: Query<'w, 's, &'static mut Flower>,
    /// Source of plant rotations.
    pub rng: ResMut<'w, AreaRng>,
    /// Rotation limits and refill amount.
    pub cfg: Res<'w, FlowerAreaConfig>,
}

impl FlowerArea {
    /// All flower plants found by the last index build, in traversal order.
    pub fn plants(&self) -> &[Entity] {
        &self.plants
    }

    /// All flowers found by the last index build, in traversal order.
    pub fn flowers(&self) -> &[Entity] {
        &self.flowers
    }

    /// Number of nectar triggers in the lookup.
    pub fn nectar_count(&self) -> usize {
        self.nectar_flowers.len()
    }

    /// Repopulates plants, flowers and the nectar lookup from `root`'s subtree.
    ///
    /// Plants are recursed into. A flower node is registered and its own
    /// children are not searched. Any other node is recursed into.
    pub fn build_index(&mut self, root: Entity, scene: &AreaScene) {
        self.plants.clear();
        self.flowers.clear();
        self.nectar_flowers.clear();

        self.collect(root, scene);

        debug!(
            "indexed flower area {root}: {} plants, {} flowers, {} nectar triggers",
            self.plants.len(),
            self.flowers.len(),
            self.nectar_flowers.len()
        );
    }

    fn collect(&mut self, parent: Entity, scene: &AreaScene) {
        let Ok(children) = scene.children.get(parent) else {
            return;
        };
        let children: &[Entity] = children;
        for &child in children {
            if scene.plants.contains(child) {
                self.plants.push(child);
                self.collect(child, scene);
            } else if let Ok(flower) = scene.flowers.get(child) {
                self.register_flower(child, flower.nectar);
            } else {
                self.collect(child, scene);
            }
        }
    }

    fn register_flower(&mut self, flower: Entity, nectar: Option<Entity>) {
        if !self.flowers.contains(&flower) {
            self.flowers.push(flower);
        }

        let Some(nectar) = nectar else { return };
        if self.nectar_flowers.contains_key(&nectar) {
            warn!("duplicate nectar trigger {nectar} ignored for flower {flower}");
            return;
        }
        self.nectar_flowers.insert(nectar, flower);
    }

    /// Flower owning the `nectar` trigger.
    ///
    /// `None` input yields `None` silently; an unknown trigger is logged.
    pub fn flower_for_nectar(&self, nectar: Option<Entity>) -> Option<Entity> {
        let nectar = nectar?;
        let flower = self.nectar_flowers.get(&nectar).copied();
        if flower.is_none() {
            error!("nectar trigger {nectar} not found in flower area");
        }
        flower
    }

    /// Gives every plant a fresh random rotation and refills every flower.
    ///
    /// Membership of the index is untouched. Entities that have since been
    /// despawned are skipped.
    pub fn reset_flowers(&self, reset: &mut FlowerReset) {
        let FlowerReset {
            plants,
            flowers,
            rng,
            cfg,
        } = reset;

        for &plant in &self.plants {
            let Ok(mut transform) = plants.get_mut(plant) else {
                debug!("skipping plant {plant}: no transform");
                continue;
            };
            transform.rotation = math::random_plant_rotation(
                &mut rng.0,
                cfg.plant_tilt_degrees,
                cfg.plant_yaw_degrees,
            );
        }

        for &flower in &self.flowers {
            if let Ok(mut f) = flowers.get_mut(flower) {
                f.reset(cfg.full_nectar);
            }
        }
    }
}

/// Random source for plant rotations.
#[derive(Resource)]
pub struct AreaRng(pub StdRng);

impl AreaRng {
    /// Seeded when `seed` is given, OS-seeded otherwise.
    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

/// Request to rebuild an area's index. `None` rebuilds every area.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct IndexFlowerAreas {
    /// Area root to rebuild.
    pub area: Option<Entity>,
}

/// Request to reset an area's plants and flowers. `None` resets every area.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetFlowers {
    /// Area root to reset.
    pub area: Option<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(n: u32) -> Vec<Entity> {
        let mut world = World::new();
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn feed_takes_at_most_what_is_left() {
        let mut flower = Flower::default();
        assert!((flower.feed(0.25) - 0.25).abs() < 1e-6);
        assert!((flower.feed(5.0) - 0.75).abs() < 1e-6);
        assert!(!flower.has_nectar());
        assert_eq!(flower.feed(1.0), 0.0);
    }

    #[test]
    fn negative_feed_takes_nothing() {
        let mut flower = Flower::default();
        assert_eq!(flower.feed(-1.0), 0.0);
        assert_eq!(flower.nectar_amount, 1.0);
    }

    #[test]
    fn reset_refills() {
        let mut flower = Flower::default();
        flower.feed(1.0);
        flower.reset(1.0);
        assert!(flower.has_nectar());
        assert_eq!(flower.nectar_amount, 1.0);
    }

    #[test]
    fn duplicate_nectar_keeps_first_flower() {
        let e = entities(3);
        let (first, second, nectar) = (e[0], e[1], e[2]);
        let mut area = FlowerArea::default();
        area.register_flower(first, Some(nectar));
        area.register_flower(second, Some(nectar));

        assert_eq!(area.flowers(), &[first, second]);
        assert_eq!(area.nectar_count(), 1);
        assert_eq!(area.flower_for_nectar(Some(nectar)), Some(first));
    }

    #[test]
    fn flower_registered_once() {
        let e = entities(2);
        let mut area = FlowerArea::default();
        area.register_flower(e[0], Some(e[1]));
        area.register_flower(e[0], Some(e[1]));
        assert_eq!(area.flowers(), &[e[0]]);
        assert_eq!(area.nectar_count(), 1);
    }

    #[test]
    fn flower_without_trigger_is_listed_but_not_looked_up() {
        let e = entities(1);
        let mut area = FlowerArea::default();
        area.register_flower(e[0], None);
        assert_eq!(area.flowers(), &[e[0]]);
        assert_eq!(area.nectar_count(), 0);
    }

    #[test]
    fn lookup_of_none_or_unknown_is_none() {
        let e = entities(3);
        let mut area = FlowerArea::default();
        area.register_flower(e[0], Some(e[1]));
        assert_eq!(area.flower_for_nectar(None), None);
        assert_eq!(area.flower_for_nectar(Some(e[2])), None);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        use rand::Rng;
        let a: u64 = AreaRng::seeded(Some(9)).0.random();
        let b: u64 = AreaRng::seeded(Some(9)).0.random();
        assert_eq!(a, b);
    }
}

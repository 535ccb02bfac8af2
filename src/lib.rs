#![warn(missing_docs)]
//! Flower areas for Bevy scenes.
//!
//! A [`FlowerArea`](area::FlowerArea) indexes the flower plants and flowers in
//! its subtree, maps nectar triggers back to their flowers, and re-randomizes
//! plant orientation on reset. [`garden`] builds a demo scene around it.

pub mod area;
pub mod garden;
pub mod math;

use bevy::prelude::*;

/// Application-wide game state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal play: keyboard controls active.
    #[default]
    Running,
    /// Debug overlay active (Tab to toggle).
    Debugging,
}

//! Level domain: spawning the playable level and reloading it after death.

mod spawn;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{GameState, ReloadLevelEvent};
use crate::level::spawn::spawn_level;
use crate::movement::MovementTuning;

/// Marker for everything a reload tears down and rebuilds
#[derive(Component, Debug)]
pub struct LevelEntity;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_initial_level)
            .add_systems(Update, reload_level.run_if(in_state(GameState::Playing)));
    }
}

fn spawn_initial_level(mut commands: Commands, tuning: Res<MovementTuning>) {
    spawn_level(&mut commands, &tuning);
}

/// Despawn the current level and build a fresh copy in its place.
fn reload_level(
    mut commands: Commands,
    mut reload_events: MessageReader<ReloadLevelEvent>,
    tuning: Res<MovementTuning>,
    level_query: Query<Entity, With<LevelEntity>>,
) {
    // Several reloads in one frame still rebuild once
    if reload_events.read().count() == 0 {
        return;
    }

    let despawned = level_query.iter().count();
    for entity in &level_query {
        commands.entity(entity).despawn();
    }
    debug!("Despawned {} level entities", despawned);

    spawn_level(&mut commands, &tuning);
}

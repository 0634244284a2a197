//! Hazards domain: spikes and other contact hazards that kill the player.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{ControllerEffectEvent, Effect, MotionController, write_effects};

/// Marker for hazard sensors (spikes)
#[derive(Component, Debug)]
pub struct Hazard;

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            kill_on_hazard_contact.run_if(in_state(GameState::Playing)),
        );
    }
}

/// Each contact that starts between a hazard and a character kills it once.
pub(crate) fn kill_on_hazard_contact(
    mut collision_events: MessageReader<CollisionStart>,
    mut effect_events: MessageWriter<ControllerEffectEvent>,
    hazard_query: Query<(), With<Hazard>>,
    mut controller_query: Query<&mut MotionController>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hazard_entity, victim_entity) in pairs {
            if hazard_query.get(hazard_entity).is_err() {
                continue;
            }

            let Ok(mut controller) = controller_query.get_mut(victim_entity) else {
                continue;
            };

            debug!("Hazard {:?} touched {:?}", hazard_entity, victim_entity);
            let mut effects: Vec<Effect> = Vec::new();
            controller.die(&mut effects);
            write_effects(&mut effect_events, victim_entity, effects);
        }
    }
}

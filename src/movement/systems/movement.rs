//! Movement domain: drives each controller against its avian body.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::systems::ground::ShapeCastGroundProbe;
use crate::movement::{
    ControllerEffectEvent, Effect, Facing, FootstepEvent, MotionController, MovementInput, Player,
};

pub(crate) fn drive_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut effect_events: MessageWriter<ControllerEffectEvent>,
    mut query: Query<
        (
            Entity,
            &mut MotionController,
            &Transform,
            &Collider,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, transform, collider, mut velocity, mut gravity_scale, mut sprite) in
        &mut query
    {
        if !controller.is_alive() {
            continue;
        }

        controller.sync_from_body(velocity.0, gravity_scale.0);

        let probe = ShapeCastGroundProbe::new(
            &spatial_query,
            collider,
            transform.translation.truncate(),
            controller.tuning().ground_check_distance,
            controller.tuning().ground_mask,
            entity,
        );

        let mut effects: Vec<Effect> = Vec::new();
        controller.tick(&input, &probe, &mut effects, dt);

        let state = controller.state();
        velocity.0 = state.velocity;
        gravity_scale.0 = state.gravity_scale;
        sprite.flip_x = state.facing == Facing::Left;

        write_effects(&mut effect_events, entity, effects);
    }
}

pub(crate) fn handle_footsteps(
    mut footsteps: MessageReader<FootstepEvent>,
    mut effect_events: MessageWriter<ControllerEffectEvent>,
    query: Query<&MotionController>,
) {
    for event in footsteps.read() {
        let Ok(controller) = query.get(event.entity) else {
            continue;
        };

        let mut effects: Vec<Effect> = Vec::new();
        controller.notify_footstep(&mut effects);
        write_effects(&mut effect_events, event.entity, effects);
    }
}

pub(crate) fn write_effects(
    writer: &mut MessageWriter<ControllerEffectEvent>,
    entity: Entity,
    effects: Vec<Effect>,
) {
    for effect in effects {
        writer.write(ControllerEffectEvent { entity, effect });
    }
}

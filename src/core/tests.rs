//! Core domain: tests for the deferred reload countdown and the
//! hazard death to level reload flow.

use std::time::Duration;

use avian2d::prelude::CollisionStart;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use super::systems::{schedule_reloads, tick_pending_reload};
use super::{PendingReload, ReloadLevelEvent};
use crate::hazards::{Hazard, kill_on_hazard_contact};
use crate::movement::{
    ControllerEffectEvent, Effect, MotionController, MovementTuning, SoundKind, VisualState,
};

#[test]
fn test_pending_reload_fires_after_delay() {
    let mut pending = PendingReload::new(1.0);

    assert!(!pending.tick(0.25));
    assert!(!pending.tick(0.25));
    assert!(!pending.tick(0.25));
    assert!(pending.tick(0.25));
}

#[test]
fn test_pending_reload_overshoot_still_fires() {
    let mut pending = PendingReload::new(1.0);

    assert!(pending.tick(1.5));
    assert!(pending.remaining < 0.0);
}

#[test]
fn test_pending_reload_negative_delay_is_immediate() {
    let mut pending = PendingReload::new(-3.0);

    assert_eq!(pending.remaining, 0.0);
    assert!(pending.tick(0.0));
}

/// Everything the flow published, in order.
#[derive(Resource, Default)]
struct Recorded {
    effects: Vec<Effect>,
    reloads: usize,
}

fn record_messages(
    mut effects: MessageReader<ControllerEffectEvent>,
    mut reloads: MessageReader<ReloadLevelEvent>,
    mut recorded: ResMut<Recorded>,
) {
    recorded.effects.extend(effects.read().map(|event| event.effect));
    recorded.reloads += reloads.read().count();
}

/// Headless app with the hazard and reload systems, fed by hand-written
/// contact messages instead of a physics step.
fn create_flow_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    app.init_resource::<Recorded>()
        .add_message::<CollisionStart>()
        .add_message::<ControllerEffectEvent>()
        .add_message::<ReloadLevelEvent>()
        .add_systems(
            Update,
            (kill_on_hazard_contact, schedule_reloads, record_messages).chain(),
        );
    app
}

fn contact(collider1: Entity, collider2: Entity) -> CollisionStart {
    CollisionStart {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    }
}

fn spawn_player(app: &mut App) -> Entity {
    app.world_mut()
        .spawn(MotionController::new(MovementTuning::default()))
        .id()
}

fn count(recorded: &Recorded, effect: Effect) -> usize {
    recorded.effects.iter().filter(|e| **e == effect).count()
}

#[test]
fn test_several_spike_contacts_in_one_frame_kill_once() {
    let mut app = create_flow_app();
    let player = spawn_player(&mut app);
    let spike_a = app.world_mut().spawn(Hazard).id();
    let spike_b = app.world_mut().spawn(Hazard).id();
    let floor = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(contact(spike_a, player));
    app.world_mut().write_message(contact(player, spike_b));
    app.world_mut().write_message(contact(spike_a, player));
    app.world_mut().write_message(contact(spike_a, floor));
    app.update();

    let recorded = app.world().resource::<Recorded>();
    assert_eq!(count(recorded, Effect::PlaySound(SoundKind::Death)), 1);
    assert_eq!(count(recorded, Effect::SetVisualState(VisualState::Die)), 1);
    assert_eq!(count(recorded, Effect::ScheduleReload { delay: 1.0 }), 1);
    assert_eq!(recorded.effects.len(), 3);

    assert_eq!(
        app.world().get_resource::<PendingReload>(),
        Some(&PendingReload::new(1.0))
    );
    let controller = app.world().get::<MotionController>(player).unwrap();
    assert!(!controller.is_alive());
}

#[test]
fn test_contact_in_later_frame_does_not_kill_again() {
    let mut app = create_flow_app();
    let player = spawn_player(&mut app);
    let spike = app.world_mut().spawn(Hazard).id();

    app.world_mut().write_message(contact(spike, player));
    app.update();
    app.world_mut().write_message(contact(spike, player));
    app.update();
    app.update();

    let recorded = app.world().resource::<Recorded>();
    assert_eq!(count(recorded, Effect::PlaySound(SoundKind::Death)), 1);
    assert_eq!(count(recorded, Effect::ScheduleReload { delay: 1.0 }), 1);
}

#[test]
fn test_reload_request_while_pending_is_ignored() {
    let mut app = create_flow_app();
    let player = spawn_player(&mut app);
    let spike = app.world_mut().spawn(Hazard).id();

    app.world_mut().write_message(contact(spike, player));
    app.update();

    let other = app.world_mut().spawn_empty().id();
    app.world_mut().write_message(ControllerEffectEvent {
        entity: other,
        effect: Effect::ScheduleReload { delay: 5.0 },
    });
    app.update();

    let pending = app.world().resource::<PendingReload>();
    assert_eq!(pending.remaining, 1.0);
}

#[test]
fn test_hazard_death_reloads_level_exactly_once() {
    let mut app = create_flow_app();
    app.add_systems(Update, tick_pending_reload.after(schedule_reloads));
    let player = spawn_player(&mut app);
    let spike = app.world_mut().spawn(Hazard).id();

    app.world_mut().write_message(contact(spike, player));
    for _ in 0..12 {
        app.update();
    }

    assert_eq!(app.world().resource::<Recorded>().reloads, 1);
    assert!(app.world().get_resource::<PendingReload>().is_none());
}

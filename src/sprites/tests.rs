//! Sprites domain: tests for animation playback.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use super::{
    AnimationController, AnimationFinished, FrameAdvance, apply_visual_state, hide_after_death,
    update_animation_frames,
};
use crate::movement::{ControllerEffectEvent, Effect, FootstepEvent, VisualState};

#[test]
fn test_set_state_resets_playback() {
    let mut anim = AnimationController::default();
    anim.current_frame = 3;
    anim.frame_timer = 0.1;

    anim.set_state(VisualState::Walk);

    assert_eq!(anim.state, VisualState::Walk);
    assert_eq!(anim.previous_state, VisualState::Idle);
    assert_eq!(anim.current_frame, 0);
    assert_eq!(anim.frame_timer, 0.0);
    assert!(anim.looping);
}

#[test]
fn test_set_same_state_keeps_frame() {
    let mut anim = AnimationController::default();
    anim.current_frame = 2;

    anim.set_state(VisualState::Idle);

    assert_eq!(anim.current_frame, 2);
}

#[test]
fn test_walk_cycle_raises_footsteps_on_footfall_frames() {
    let mut anim = AnimationController::default();
    anim.set_state(VisualState::Walk);
    anim.frame_duration = 0.25;

    let steps: Vec<bool> = (0..8).map(|_| anim.advance(0.25).footstep).collect();

    // Frames visited: 1, 2, 3, 0, 1, 2, 3, 0
    assert_eq!(
        steps,
        vec![false, true, false, true, false, true, false, true]
    );
}

#[test]
fn test_idle_never_raises_footsteps() {
    let mut anim = AnimationController::default();
    anim.frame_duration = 0.25;

    assert!((0..8).all(|_| !anim.advance(0.25).footstep));
}

#[test]
fn test_die_animation_finishes_once_and_holds_last_frame() {
    let mut anim = AnimationController::default();
    anim.set_state(VisualState::Die);
    anim.frame_duration = 0.25;

    let results: Vec<FrameAdvance> = (0..6).map(|_| anim.advance(0.25)).collect();

    assert_eq!(results.iter().filter(|r| r.finished).count(), 1);
    assert!(results[3].finished);
    assert!(anim.finished);
    assert_eq!(anim.current_frame, 3);
}

#[test]
fn test_partial_frame_time_accumulates() {
    let mut anim = AnimationController::default();
    anim.frame_duration = 0.25;

    anim.advance(0.125);
    assert_eq!(anim.current_frame, 0);
    anim.advance(0.125);
    assert_eq!(anim.current_frame, 1);
}

#[test]
fn test_finished_death_animation_hides_only_the_dead_sprite() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    app.add_message::<ControllerEffectEvent>()
        .add_message::<FootstepEvent>()
        .add_message::<AnimationFinished>()
        .add_systems(
            Update,
            (apply_visual_state, update_animation_frames, hide_after_death).chain(),
        );

    let dead = app
        .world_mut()
        .spawn((AnimationController::default(), Visibility::Visible))
        .id();
    let idle = app
        .world_mut()
        .spawn((AnimationController::default(), Visibility::Visible))
        .id();

    app.world_mut().write_message(ControllerEffectEvent {
        entity: dead,
        effect: Effect::SetVisualState(VisualState::Die),
    });
    app.update();
    assert_eq!(app.world().get::<Visibility>(dead), Some(&Visibility::Visible));

    for _ in 0..8 {
        app.update();
    }

    assert_eq!(app.world().get::<Visibility>(dead), Some(&Visibility::Hidden));
    assert_eq!(app.world().get::<Visibility>(idle), Some(&Visibility::Visible));
}

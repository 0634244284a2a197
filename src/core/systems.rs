//! Core domain: boot flow, deferred reload and camera setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::ReloadLevelEvent;
use crate::core::resources::PendingReload;
use crate::core::state::GameState;
use crate::movement::{ControllerEffectEvent, Effect};

pub(crate) fn start_playing(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

/// Turn reload requests from controllers into a single pending countdown.
pub(crate) fn schedule_reloads(
    mut commands: Commands,
    mut effects: MessageReader<ControllerEffectEvent>,
    pending: Option<Res<PendingReload>>,
) {
    let mut already_pending = pending.is_some();

    for event in effects.read() {
        let Effect::ScheduleReload { delay } = event.effect else {
            continue;
        };

        if already_pending {
            debug!("Reload already pending, ignoring request from {:?}", event.entity);
            continue;
        }

        commands.insert_resource(PendingReload::new(delay));
        already_pending = true;
        info!("Level reload scheduled in {}s", delay);
    }
}

pub(crate) fn tick_pending_reload(
    mut commands: Commands,
    time: Res<Time>,
    pending: Option<ResMut<PendingReload>>,
    mut reload_events: MessageWriter<ReloadLevelEvent>,
) {
    let Some(mut pending) = pending else {
        return;
    };

    if pending.tick(time.delta_secs()) {
        commands.remove_resource::<PendingReload>();
        reload_events.write(ReloadLevelEvent);
        info!("Reloading level");
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

//! Audio domain: one-shot sound effects requested by controllers.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{ControllerEffectEvent, Effect, SoundKind};

/// Clips for every sound a controller can ask for.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    pub jump: Handle<AudioSource>,
    pub dash: Handle<AudioSource>,
    pub footstep: Handle<AudioSource>,
    pub death: Handle<AudioSource>,
}

impl SoundBank {
    pub fn clip(&self, sound: SoundKind) -> Handle<AudioSource> {
        match sound {
            SoundKind::Jump => self.jump.clone(),
            SoundKind::Dash => self.dash.clone(),
            SoundKind::Footstep => self.footstep.clone(),
            SoundKind::Death => self.death.clone(),
        }
    }
}

/// Asset path for each sound, relative to assets/.
pub fn sound_path(sound: SoundKind) -> &'static str {
    match sound {
        SoundKind::Jump => "sounds/jump.ogg",
        SoundKind::Dash => "sounds/dash.ogg",
        SoundKind::Footstep => "sounds/footstep.ogg",
        SoundKind::Death => "sounds/death.ogg",
    }
}

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_systems(Startup, load_sound_bank)
            .add_systems(Update, play_requested_sounds);
    }
}

fn load_sound_bank(mut bank: ResMut<SoundBank>, asset_server: Res<AssetServer>) {
    bank.jump = asset_server.load(sound_path(SoundKind::Jump));
    bank.dash = asset_server.load(sound_path(SoundKind::Dash));
    bank.footstep = asset_server.load(sound_path(SoundKind::Footstep));
    bank.death = asset_server.load(sound_path(SoundKind::Death));
    debug!("Sound bank loading");
}

/// Spawn a self-despawning player for each requested sound.
fn play_requested_sounds(
    mut commands: Commands,
    mut effect_events: MessageReader<ControllerEffectEvent>,
    bank: Res<SoundBank>,
) {
    for event in effect_events.read() {
        let Effect::PlaySound(sound) = event.effect else {
            continue;
        };

        commands.spawn((AudioPlayer::new(bank.clip(sound)), PlaybackSettings::DESPAWN));
    }
}

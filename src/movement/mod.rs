//! Movement domain: motion controller, dash ability and their bevy wiring.

mod components;
mod controller;
mod dash;
mod effects;
mod events;
mod resources;
mod systems;


pub use components::{Facing, GameLayer, Ground, Player, VisualState};
pub use controller::{CharacterState, MotionController};
pub use dash::{DashAbility, DashPhase};
pub use effects::{Effect, EffectSink, GroundProbe, SoundKind};
pub use events::{ControllerEffectEvent, FootstepEvent};
pub use resources::{MovementInput, MovementTuning};

pub(crate) use systems::write_effects;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{drive_controllers, handle_footsteps, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<ControllerEffectEvent>()
            .add_message::<FootstepEvent>()
            .add_systems(
                Update,
                (read_input, drive_controllers, handle_footsteps)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

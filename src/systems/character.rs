use hecs::World;
use sdl2::keyboard::Scancode;

use crate::components::{AnimationPlayer, Body, Facing, Invulnerability};
use crate::engine::input::InputState;
use crate::fsm::StateMachine;
use crate::states::{StateCtx, StateId};

/// Key that triggers the dash action from idle or move.
const DASH_KEY: Scancode = Scancode::Space;

/// Drive every character's state machine for one simulation tick.
///
/// Runs **before** `physics_step`: the blocked flags a state observes are
/// the ones the previous tick's physics produced. The input snapshot is
/// taken once per tick and handed to the hooks by value, so a state that
/// samples it at entry and again at exit sees two independent reads.
pub fn character_state_system(world: &mut World, input: &InputState, dt: f32) {
    let snapshot = input.snapshot();
    let dash_requested = input.just_pressed(DASH_KEY);

    for (_entity, (fsm, body, facing, invulnerability, animation)) in world.query_mut::<(
        &mut StateMachine,
        &mut Body,
        &mut Facing,
        &mut Invulnerability,
        &mut AnimationPlayer,
    )>() {
        let mut ctx = StateCtx {
            input: snapshot,
            dt,
            body,
            facing,
            invulnerability,
            animation,
        };

        if dash_requested && fsm.state_id() != StateId::Dash {
            fsm.set_state(StateId::Dash, &mut ctx);
        }

        fsm.update(&mut ctx);
    }
}

use crate::components::AnimationKey;

use super::{zero_velocity, StateCtx, StateId};

/// Standing still. Entry stops the body and shows the directional idle
/// clip; update hands off to MOVE as soon as any direction is held.
pub(crate) struct IdleState;

impl IdleState {
    pub(crate) fn on_enter(&mut self, ctx: &mut StateCtx) {
        zero_velocity(ctx.body);
        ctx.animation.play(AnimationKey::Idle(ctx.facing.0));
    }

    pub(crate) fn on_update(&mut self, ctx: &mut StateCtx) -> Option<StateId> {
        if ctx.input.any_held() {
            Some(StateId::Move)
        } else {
            None
        }
    }
}

//! Behavioral states of the character.
//!
//! Each state is an independent variant with `on_enter` / `on_update` /
//! `on_exit` hooks, dispatched through [`CharacterState`]. Transition logic
//! lives inside the states themselves; the machine in `crate::fsm` only
//! applies the requests.

mod dash;
mod idle;
mod moving;

use glam::Vec2;

use crate::components::{AnimationPlayer, Body, Facing, Invulnerability};
use crate::engine::input::InputSnapshot;

use dash::DashState;
use idle::IdleState;
use moving::MoveState;

/// Identifies a behavioral state. Transition requests name their successor
/// by id; the machine constructs the variant fresh on entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateId {
    Idle,
    Move,
    Dash,
}

/// Exclusive view of one character handed to a state hook for one call.
///
/// Rebuilt by the driving system every tick: `input` is that tick's sample
/// of the directional holds and `body.blocked` is what the previous tick's
/// physics step reported.
pub struct StateCtx<'a> {
    pub input: InputSnapshot,
    /// Seconds elapsed since the previous tick.
    pub dt: f32,
    pub body: &'a mut Body,
    pub facing: &'a mut Facing,
    pub invulnerability: &'a mut Invulnerability,
    pub animation: &'a mut AnimationPlayer,
}

impl StateCtx<'_> {
    pub(crate) fn dt_ms(&self) -> f32 {
        self.dt * 1000.0
    }
}

/// Active state variant. Constructed fresh on every entry, so
/// per-activation data (the dash countdown) cannot leak between
/// activations of the same state.
pub(crate) enum CharacterState {
    Idle(IdleState),
    Move(MoveState),
    Dash(DashState),
}

impl CharacterState {
    pub(crate) fn new(id: StateId) -> Self {
        match id {
            StateId::Idle => Self::Idle(IdleState),
            StateId::Move => Self::Move(MoveState),
            StateId::Dash => Self::Dash(DashState::new()),
        }
    }

    pub(crate) fn id(&self) -> StateId {
        match self {
            Self::Idle(_) => StateId::Idle,
            Self::Move(_) => StateId::Move,
            Self::Dash(_) => StateId::Dash,
        }
    }

    pub(crate) fn on_enter(&mut self, ctx: &mut StateCtx) {
        match self {
            Self::Idle(state) => state.on_enter(ctx),
            Self::Move(_) => {}
            Self::Dash(state) => state.on_enter(ctx),
        }
    }

    pub(crate) fn on_update(&mut self, ctx: &mut StateCtx) -> Option<StateId> {
        match self {
            Self::Idle(state) => state.on_update(ctx),
            Self::Move(state) => state.on_update(ctx),
            Self::Dash(state) => state.on_update(ctx),
        }
    }

    pub(crate) fn on_exit(&mut self, ctx: &mut StateCtx) {
        match self {
            Self::Idle(_) | Self::Move(_) => {}
            Self::Dash(state) => state.on_exit(ctx),
        }
    }
}

/// Shared helper: states reset velocity on transition boundaries they don't
/// control.
pub(crate) fn zero_velocity(body: &mut Body) {
    if let Some(body) = body.dynamic_mut() {
        body.velocity = Vec2::ZERO;
    }
}

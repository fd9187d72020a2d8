use log::debug;

use crate::states::{CharacterState, StateCtx, StateId};

/// Single-active-state controller over the character states.
///
/// Transitions run exit-then-enter, and a request naming the already-active
/// state is ignored, so a state's resources are acquired and released
/// exactly once per activation. States request transitions by returning a
/// successor id from `on_update`; external code (the dash trigger, cutscene
/// logic) requests them through [`set_state`](Self::set_state).
pub struct StateMachine {
    current: CharacterState,
}

impl StateMachine {
    /// Start in Idle. The initial state's `on_enter` is not run; spawn code
    /// owns the initial velocity and animation. Every transition after that
    /// pairs exit and enter.
    pub fn new() -> Self {
        Self {
            current: CharacterState::new(StateId::Idle),
        }
    }

    pub fn state_id(&self) -> StateId {
        self.current.id()
    }

    /// Request a transition. The outgoing state's `on_exit` runs before the
    /// incoming variant is constructed and entered.
    pub fn set_state(&mut self, next: StateId, ctx: &mut StateCtx) {
        if self.current.id() == next {
            return;
        }
        debug!("state {:?} -> {:?}", self.current.id(), next);

        self.current.on_exit(ctx);
        self.current = CharacterState::new(next);
        self.current.on_enter(ctx);
    }

    /// Drive the active state for one tick and apply its transition request,
    /// if any.
    pub fn update(&mut self, ctx: &mut StateCtx) {
        if let Some(next) = self.current.on_update(ctx) {
            self.set_state(next, ctx);
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

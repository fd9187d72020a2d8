use glam::Vec2;

use crate::components::{AnimationKey, Direction, DynamicBody};
use crate::config::{PLAYER_DASH_DURATION_MS, PLAYER_DASH_SPEED};
use crate::engine::time::OneShot;

use super::{zero_velocity, StateCtx, StateId};

/// Fixed-length burst of speed in one cardinal direction.
///
/// Entry resolves the direction from the entry-tick input (vertical beats
/// horizontal, falling back to the persisted facing), fires the body along
/// that axis at dash speed, and arms a one-shot countdown. The burst ends
/// when the countdown fires, or early when the body reports a blocked axis,
/// in which case the velocity is bounced back at half speed and the
/// countdown is cancelled before the end routine runs. The successor state
/// is resolved from whatever input is held on the tick the dash ends, not
/// from the entry input.
pub(crate) struct DashState {
    timer: Option<OneShot>,
}

impl DashState {
    pub(crate) fn new() -> Self {
        Self { timer: None }
    }

    pub(crate) fn on_enter(&mut self, ctx: &mut StateCtx) {
        let Some(body) = ctx.body.dynamic_mut() else {
            return;
        };

        let direction = ctx.input.priority_direction().unwrap_or(ctx.facing.0);
        ctx.facing.0 = direction;

        // Dash reuses the walk clips; there is no dedicated dash animation.
        ctx.animation.play(AnimationKey::Walk(direction));
        ctx.invulnerability.0 = true;

        body.velocity = Vec2::ZERO;
        match direction {
            Direction::Up => body.velocity.y = -PLAYER_DASH_SPEED,
            Direction::Down => body.velocity.y = PLAYER_DASH_SPEED,
            Direction::Left => {
                body.velocity.x = -PLAYER_DASH_SPEED;
                body.flip_x = true;
            }
            Direction::Right => {
                body.velocity.x = PLAYER_DASH_SPEED;
                body.flip_x = false;
            }
        }

        body.on_collide = true;
        self.timer = Some(OneShot::after_ms(PLAYER_DASH_DURATION_MS));
    }

    pub(crate) fn on_update(&mut self, ctx: &mut StateCtx) -> Option<StateId> {
        let Some(body) = ctx.body.dynamic() else {
            return None;
        };

        // Contact wins any race with the countdown: it is checked first and
        // cancels the countdown before the end routine runs.
        if body.blocked.any() {
            return self.wall_collision(ctx);
        }

        let dt_ms = ctx.dt_ms();
        if let Some(timer) = self.timer.as_mut() {
            if timer.tick(dt_ms) {
                return Some(self.end_dash(ctx));
            }
        }

        None
    }

    /// Early termination on contact with a solid.
    fn wall_collision(&mut self, ctx: &mut StateCtx) -> Option<StateId> {
        let Some(body) = ctx.body.dynamic_mut() else {
            return None;
        };

        bounce_back(body);

        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
        Some(self.end_dash(ctx))
    }

    /// Shared terminal routine for natural expiry and wall collision.
    /// Re-samples the current tick's input to pick the successor, so a held
    /// direction flows straight into movement with no idle frame.
    fn end_dash(&mut self, ctx: &mut StateCtx) -> StateId {
        self.timer = None;
        ctx.invulnerability.0 = false;
        if let Some(body) = ctx.body.dynamic_mut() {
            body.on_collide = false;
        }
        zero_velocity(ctx.body);

        if ctx.input.any_held() {
            StateId::Move
        } else {
            StateId::Idle
        }
    }

    /// Nothing armed in `on_enter` may outlive the state: a forced
    /// transition out mid-dash still cancels the countdown and clears the
    /// flags the entry set.
    pub(crate) fn on_exit(&mut self, ctx: &mut StateCtx) {
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
        ctx.invulnerability.0 = false;
        if let Some(body) = ctx.body.dynamic_mut() {
            body.on_collide = false;
        }
    }
}

/// Damped reversal on wall contact: half the speed, opposite sign, both
/// axes. Deliberately lossy rather than a full reflection.
fn bounce_back(body: &mut DynamicBody) {
    body.velocity *= -0.5;
}

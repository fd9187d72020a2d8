use glam::Vec2;

use crate::components::{AnimationKey, Direction};
use crate::config::PLAYER_WALK_SPEED;

use super::{StateCtx, StateId};

/// Prioritized cardinal walking. The direction is re-resolved from input
/// every tick and persisted to `Facing`, which is what the dash falls back
/// on when it is entered without a direction held.
pub(crate) struct MoveState;

impl MoveState {
    pub(crate) fn on_update(&mut self, ctx: &mut StateCtx) -> Option<StateId> {
        let Some(direction) = ctx.input.priority_direction() else {
            return Some(StateId::Idle);
        };

        let Some(body) = ctx.body.dynamic_mut() else {
            return None;
        };

        ctx.facing.0 = direction;
        body.velocity = match direction {
            Direction::Up => Vec2::new(0.0, -PLAYER_WALK_SPEED),
            Direction::Down => Vec2::new(0.0, PLAYER_WALK_SPEED),
            Direction::Left => {
                body.flip_x = true;
                Vec2::new(-PLAYER_WALK_SPEED, 0.0)
            }
            Direction::Right => {
                body.flip_x = false;
                Vec2::new(PLAYER_WALK_SPEED, 0.0)
            }
        };
        ctx.animation.play(AnimationKey::Walk(direction));

        None
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::components::{AnimationPlayer, Body, DynamicBody, Facing, Invulnerability};
    use crate::engine::input::InputSnapshot;

    fn ctx_parts() -> (Body, Facing, Invulnerability, AnimationPlayer) {
        (
            Body::Dynamic(DynamicBody::new()),
            Facing(Direction::Down),
            Invulnerability(false),
            AnimationPlayer::default(),
        )
    }

    #[test]
    fn walks_along_the_prioritized_axis() {
        let (mut body, mut facing, mut invulnerability, mut animation) = ctx_parts();
        let mut ctx = StateCtx {
            input: InputSnapshot {
                up: true,
                right: true,
                ..InputSnapshot::default()
            },
            dt: 1.0 / 60.0,
            body: &mut body,
            facing: &mut facing,
            invulnerability: &mut invulnerability,
            animation: &mut animation,
        };

        let next = MoveState.on_update(&mut ctx);
        assert_eq!(next, None);
        assert_eq!(facing.0, Direction::Up);
        assert_eq!(
            body.dynamic().unwrap().velocity,
            Vec2::new(0.0, -PLAYER_WALK_SPEED)
        );
    }

    #[test]
    fn releasing_everything_requests_idle() {
        let (mut body, mut facing, mut invulnerability, mut animation) = ctx_parts();
        let mut ctx = StateCtx {
            input: InputSnapshot::default(),
            dt: 1.0 / 60.0,
            body: &mut body,
            facing: &mut facing,
            invulnerability: &mut invulnerability,
            animation: &mut animation,
        };

        assert_eq!(MoveState.on_update(&mut ctx), Some(StateId::Idle));
    }

    #[test]
    fn horizontal_walk_sets_mirroring() {
        let (mut body, mut facing, mut invulnerability, mut animation) = ctx_parts();
        let mut ctx = StateCtx {
            input: InputSnapshot {
                left: true,
                ..InputSnapshot::default()
            },
            dt: 1.0 / 60.0,
            body: &mut body,
            facing: &mut facing,
            invulnerability: &mut invulnerability,
            animation: &mut animation,
        };

        MoveState.on_update(&mut ctx);
        assert!(body.dynamic().unwrap().flip_x);
    }
}

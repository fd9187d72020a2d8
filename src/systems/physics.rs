use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Aabb, BlockedFlags, Body, CollisionEvent, Position, Solid};

fn overlaps(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> bool {
    (a_pos.x - b_pos.x).abs() < a_half.x + b_half.x
        && (a_pos.y - b_pos.y).abs() < a_half.y + b_half.y
}

/// Integrate dynamic bodies and separate them from solids one axis at a
/// time. On contact the position is clamped flush to the obstructing solid
/// and the blocked flag for the direction of travel is set. Velocity is
/// left untouched: velocity policy belongs to the behavior layer, which is
/// what keeps the dash's bounce-back impulse observable.
///
/// Returns one contact event per overlap for bodies whose collision-notify
/// flag is enabled.
pub fn physics_step(world: &mut World, dt: f32) -> Vec<CollisionEvent> {
    // Snapshot the solids first (drops the borrow), then mutate the movers.
    let solids: Vec<(Entity, Vec2, Vec2)> = world
        .query::<(&Position, &Aabb)>()
        .with::<&Solid>()
        .iter()
        .map(|(entity, (position, aabb))| (entity, position.0, aabb.half_extents))
        .collect();

    let mut events = Vec::new();

    for (entity, (position, aabb, body)) in
        world.query_mut::<(&mut Position, &Aabb, &mut Body)>()
    {
        let Some(body) = body.dynamic_mut() else {
            continue;
        };
        body.blocked = BlockedFlags::default();

        position.0.x += body.velocity.x * dt;
        for &(solid, solid_pos, solid_half) in &solids {
            if !overlaps(position.0, aabb.half_extents, solid_pos, solid_half) {
                continue;
            }
            if body.velocity.x > 0.0 {
                position.0.x = solid_pos.x - solid_half.x - aabb.half_extents.x;
                body.blocked.right = true;
            } else if body.velocity.x < 0.0 {
                position.0.x = solid_pos.x + solid_half.x + aabb.half_extents.x;
                body.blocked.left = true;
            }
            if body.on_collide {
                events.push(CollisionEvent {
                    entity_a: entity,
                    entity_b: solid,
                });
            }
        }

        // Screen space: up is negative y.
        position.0.y += body.velocity.y * dt;
        for &(solid, solid_pos, solid_half) in &solids {
            if !overlaps(position.0, aabb.half_extents, solid_pos, solid_half) {
                continue;
            }
            if body.velocity.y > 0.0 {
                position.0.y = solid_pos.y - solid_half.y - aabb.half_extents.y;
                body.blocked.down = true;
            } else if body.velocity.y < 0.0 {
                position.0.y = solid_pos.y + solid_half.y + aabb.half_extents.y;
                body.blocked.up = true;
            }
            if body.on_collide {
                events.push(CollisionEvent {
                    entity_a: entity,
                    entity_b: solid,
                });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::DynamicBody;

    fn spawn_wall(world: &mut World, position: Vec2, half_extents: Vec2) -> Entity {
        world.spawn((Position(position), Aabb { half_extents }, Solid))
    }

    fn spawn_mover(world: &mut World, position: Vec2, velocity: Vec2) -> Entity {
        let mut body = DynamicBody::new();
        body.velocity = velocity;
        world.spawn((
            Position(position),
            Aabb {
                half_extents: Vec2::new(8.0, 8.0),
            },
            Body::Dynamic(body),
        ))
    }

    #[test]
    fn rightward_contact_clamps_flush_and_flags_right() {
        let mut world = World::new();
        spawn_wall(&mut world, Vec2::new(100.0, 0.0), Vec2::new(10.0, 10.0));
        let mover = spawn_mover(&mut world, Vec2::new(80.0, 0.0), Vec2::new(200.0, 0.0));

        physics_step(&mut world, 0.1);

        let position = world.get::<&Position>(mover).unwrap();
        assert_eq!(position.0.x, 82.0);
        drop(position);

        let body = world.get::<&Body>(mover).unwrap();
        let body = body.dynamic().unwrap();
        assert!(body.blocked.right);
        assert!(!body.blocked.left);
        // Separation clamps position only; velocity is the states' business.
        assert_eq!(body.velocity, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn upward_contact_flags_up() {
        let mut world = World::new();
        spawn_wall(&mut world, Vec2::new(0.0, -50.0), Vec2::new(40.0, 10.0));
        let mover = spawn_mover(&mut world, Vec2::new(0.0, -20.0), Vec2::new(0.0, -200.0));

        physics_step(&mut world, 0.1);

        let body = world.get::<&Body>(mover).unwrap();
        assert!(body.dynamic().unwrap().blocked.up);
        drop(body);
        let position = world.get::<&Position>(mover).unwrap();
        assert_eq!(position.0.y, -32.0);
    }

    #[test]
    fn flags_reset_once_clear_of_contact() {
        let mut world = World::new();
        spawn_wall(&mut world, Vec2::new(100.0, 0.0), Vec2::new(10.0, 10.0));
        let mover = spawn_mover(&mut world, Vec2::new(80.0, 0.0), Vec2::new(200.0, 0.0));

        physics_step(&mut world, 0.1);
        assert!(world
            .get::<&Body>(mover)
            .unwrap()
            .dynamic()
            .unwrap()
            .blocked
            .right);

        // Reverse away from the wall: the stale flag must not survive.
        world
            .get::<&mut Body>(mover)
            .unwrap()
            .dynamic_mut()
            .unwrap()
            .velocity = Vec2::new(-100.0, 0.0);
        physics_step(&mut world, 0.1);
        assert!(!world
            .get::<&Body>(mover)
            .unwrap()
            .dynamic()
            .unwrap()
            .blocked
            .right);
    }

    #[test]
    fn events_are_gated_on_the_notify_flag() {
        let mut world = World::new();
        let wall = spawn_wall(&mut world, Vec2::new(100.0, 0.0), Vec2::new(10.0, 10.0));
        let mover = spawn_mover(&mut world, Vec2::new(80.0, 0.0), Vec2::new(200.0, 0.0));

        let events = physics_step(&mut world, 0.1);
        assert!(events.is_empty());

        world
            .get::<&mut Body>(mover)
            .unwrap()
            .dynamic_mut()
            .unwrap()
            .on_collide = true;
        // Still pressing into the wall: now the contact is reported.
        let events = physics_step(&mut world, 0.1);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entity_a, mover);
        assert_eq!(events[0].entity_b, wall);
    }

    #[test]
    fn static_bodies_are_skipped() {
        let mut world = World::new();
        spawn_wall(&mut world, Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let statue = world.spawn((
            Position(Vec2::new(0.0, 0.0)),
            Aabb {
                half_extents: Vec2::new(8.0, 8.0),
            },
            Body::Static,
        ));

        physics_step(&mut world, 0.1);
        let position = world.get::<&Position>(statue).unwrap();
        assert_eq!(position.0, Vec2::ZERO);
    }
}

use glam::Vec2;
use hecs::Entity;
use log::trace;

/// 4-way facing used by movement, dash, and animation keys.
///
/// Screen-space convention throughout the crate: +x is right, +y is down,
/// so `Up` maps to negative y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Animation-key suffix, e.g. the `UP` in `WALK_UP`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

/// Last facing persisted on the entity. Move and dash overwrite it each time
/// they resolve a direction; it is the fallback dash direction when no input
/// is held at entry.
pub struct Facing(pub Direction);

/// Per-axis contact flags recomputed by the physics step each tick.
/// True means the last movement step on that axis was obstructed by a solid.
#[derive(Clone, Copy, Default)]
pub struct BlockedFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl BlockedFlags {
    pub fn any(self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Moving body: velocity plus the per-tick contact state and the two flags
/// read by collaborators (collision notification for the physics step,
/// horizontal mirroring for the sprite renderer).
pub struct DynamicBody {
    pub velocity: Vec2,
    pub blocked: BlockedFlags,
    /// When set, the physics step emits a [`CollisionEvent`] per contact.
    pub on_collide: bool,
    /// Horizontal sprite mirroring; set by states on left/right movement.
    pub flip_x: bool,
}

impl DynamicBody {
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            blocked: BlockedFlags::default(),
            on_collide: false,
            flip_x: false,
        }
    }
}

impl Default for DynamicBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Physics body attached to an entity. States act only on the dynamic kind;
/// the static arm makes a misconfigured entity a silent no-op rather than a
/// runtime fault.
pub enum Body {
    Dynamic(DynamicBody),
    Static,
}

impl Body {
    pub fn dynamic(&self) -> Option<&DynamicBody> {
        match self {
            Self::Dynamic(body) => Some(body),
            Self::Static => None,
        }
    }

    pub fn dynamic_mut(&mut self) -> Option<&mut DynamicBody> {
        match self {
            Self::Dynamic(body) => Some(body),
            Self::Static => None,
        }
    }
}

/// World-space position (center of the entity's collision box).
pub struct Position(pub Vec2);

/// Axis-aligned collision box, stored as half extents around [`Position`].
pub struct Aabb {
    pub half_extents: Vec2,
}

/// Marker: immovable solid. Dynamic bodies separate against these.
pub struct Solid;

/// Damage immunity flag. The dash state holds it true for its duration;
/// the combat collaborator reads it.
pub struct Invulnerability(pub bool);

/// Names an animation clip. Dash reuses the directional walk clips, so there
/// is no dedicated dash key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationKey {
    Idle(Direction),
    Walk(Direction),
}

impl AnimationKey {
    pub fn name(self) -> String {
        match self {
            Self::Idle(direction) => format!("IDLE_{}", direction.label()),
            Self::Walk(direction) => format!("WALK_{}", direction.label()),
        }
    }
}

/// Playback collaborator stand-in: records the requested clip so the
/// renderer (out of scope here) can pick it up. Re-requesting the clip that
/// is already playing is ignored rather than restarting it.
#[derive(Default)]
pub struct AnimationPlayer {
    current: Option<AnimationKey>,
}

impl AnimationPlayer {
    pub fn play(&mut self, key: AnimationKey) {
        if self.current == Some(key) {
            return;
        }
        trace!("animation {}", key.name());
        self.current = Some(key);
    }

    pub fn current(&self) -> Option<AnimationKey> {
        self.current
    }
}

/// Contact produced by the physics step for bodies with collision
/// notification enabled. `entity_a` is the moving body, `entity_b` the solid
/// it hit.
pub struct CollisionEvent {
    pub entity_a: Entity,
    pub entity_b: Entity,
}

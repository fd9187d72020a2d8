//! Character tuning constants.

/// Dash burst speed, world units per second.
pub const PLAYER_DASH_SPEED: f32 = 200.0;

/// Dash burst length, milliseconds.
pub const PLAYER_DASH_DURATION_MS: f32 = 300.0;

/// Ground movement speed, world units per second.
pub const PLAYER_WALK_SPEED: f32 = 80.0;

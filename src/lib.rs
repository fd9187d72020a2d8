//! Character action core for a top-down 2D game: a single-active-state
//! machine (idle / move / dash) over a `hecs` world, with the dash state's
//! timed, collision-interruptible burst as the centerpiece.
//!
//! A game loop drives it as: poll [`engine::input::InputState`], run
//! [`systems::character_state_system`], then [`systems::physics_step`]. The
//! blocked flags the states observe each tick are the ones the previous
//! tick's physics produced.

pub mod components;
pub mod config;
pub mod engine;
pub mod fsm;
pub mod states;
pub mod systems;

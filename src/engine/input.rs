use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

use crate::components::Direction;

/// Discrete input edge surfaced to the tick loop. Holds are answered by
/// [`InputState::is_key_held`]; edges live here.
pub enum InputEvent {
    KeyPressed(Scancode),
    KeyReleased(Scancode),
}

pub struct InputState {
    pub keys: HashSet<Scancode>,
    /// Edges from the current frame only; cleared by [`update`](Self::update).
    pub events: Vec<InputEvent>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            events: Vec::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    self.keys.insert(sc);
                    self.events.push(InputEvent::KeyPressed(sc));
                }
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    self.keys.remove(&sc);
                    self.events.push(InputEvent::KeyReleased(sc));
                }
                _ => {}
            }
        }
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    pub fn just_pressed(&self, sc: Scancode) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, InputEvent::KeyPressed(pressed) if *pressed == sc))
    }

    /// The four directional holds as seen this tick. WASD and the arrow keys
    /// are equivalent.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            up: self.is_key_held(Scancode::W) || self.is_key_held(Scancode::Up),
            down: self.is_key_held(Scancode::S) || self.is_key_held(Scancode::Down),
            left: self.is_key_held(Scancode::A) || self.is_key_held(Scancode::Left),
            right: self.is_key_held(Scancode::D) || self.is_key_held(Scancode::Right),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// The directional holds sampled at one tick. States receive this by value
/// and it is rebuilt every tick, so a dash that samples it at entry and
/// again at exit sees two independent reads, never a cached replay.
#[derive(Clone, Copy, Default)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSnapshot {
    pub fn any_held(self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Collapse the holds to a single direction under the fixed priority
    /// UP > DOWN > LEFT > RIGHT (vertical beats horizontal).
    pub fn priority_direction(self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

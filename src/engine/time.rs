/// Single-fire countdown measured in milliseconds, advanced explicitly by
/// the tick loop that owns it.
///
/// `tick` reports the expiry exactly once. `cancel` is final: once invoked,
/// the countdown can never report a fire, even if it was already past its
/// deadline when the cancel landed.
pub struct OneShot {
    remaining_ms: f32,
    fired: bool,
    cancelled: bool,
}

impl OneShot {
    pub fn after_ms(delay_ms: f32) -> Self {
        Self {
            remaining_ms: delay_ms,
            fired: false,
            cancelled: false,
        }
    }

    /// Advance by `dt_ms`. Returns true on the tick the countdown expires
    /// and false on every other call.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.fired || self.cancelled {
            return false;
        }
        self.remaining_ms -= dt_ms;
        if self.remaining_ms <= 0.0 {
            self.fired = true;
            return true;
        }
        false
    }

    /// Suppress the countdown permanently.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

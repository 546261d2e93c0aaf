pub const WINDUP_MS: u32 = 300;
pub const FLIGHT_MS: u32 = 600;

/// Fixed delays of one throw: windup pose, then projectile flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrowTimings {
    pub windup_ms: u32,
    pub flight_ms: u32,
}

impl ThrowTimings {
    pub const fn new(windup_ms: u32, flight_ms: u32) -> Self {
        Self {
            windup_ms,
            flight_ms,
        }
    }

    pub const fn total_ms(&self) -> u32 {
        self.windup_ms.saturating_add(self.flight_ms)
    }
}

impl Default for ThrowTimings {
    fn default() -> Self {
        Self::new(WINDUP_MS, FLIGHT_MS)
    }
}

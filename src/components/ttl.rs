//! Tick-counted time-to-live.
//!
//! Owners call [`Ttl::tick`] once per update; it reports expiry on the update
//! that consumes the last remaining tick. A `Ttl::new(3)` therefore expires on
//! its third tick. The owner decides what expiry means (particles and timed
//! text nodes report [`Lifecycle::Expired`](crate::objects::Lifecycle) and the
//! room drops them).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ttl {
    /// Ticks left before expiry.
    pub remaining: u32,
}

impl Ttl {
    pub fn new(ticks: u32) -> Self {
        Ttl { remaining: ticks }
    }

    /// Consume one tick. Returns true once the lifetime is used up.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_on_last_tick() {
        let mut ttl = Ttl::new(3);
        assert!(!ttl.tick());
        assert!(!ttl.tick());
        assert!(ttl.tick());
        assert!(ttl.expired());
    }

    #[test]
    fn zero_lifetime_expires_immediately() {
        let mut ttl = Ttl::new(0);
        assert!(ttl.expired());
        assert!(ttl.tick());
    }
}

//! Wall-clock tick counter for auto-play.

/// Default auto-play period.
pub const TIMER_PERIOD_MS: u32 = 100;

/// Counts timer periods elapsed since `start`.
///
/// [`TickClock::poll`] is called whenever the host gets a chance to run
/// (after a sleep, after a render). It reports the latest tick number at
/// most once; ticks that elapsed while the previous update was still being
/// applied are folded into that single report instead of being queued.
#[derive(Debug, Clone)]
pub struct TickClock {
    period_ms: f64,
    started_at_ms: f64,
    last_tick: u64,
    coalesced: u64,
}

impl TickClock {
    pub fn start(period_ms: u32, now_ms: f64) -> Self {
        Self {
            period_ms: f64::from(period_ms.max(1)),
            started_at_ms: now_ms,
            last_tick: 0,
            coalesced: 0,
        }
    }

    /// Latest tick number if a new one has elapsed since the last poll.
    pub fn poll(&mut self, now_ms: f64) -> Option<u64> {
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        let tick = (elapsed / self.period_ms).floor() as u64;
        if tick <= self.last_tick {
            return None;
        }
        let skipped = tick - self.last_tick - 1;
        if skipped > 0 {
            self.coalesced += skipped;
            log::debug!("timer: coalesced {} late ticks into tick {}", skipped, tick);
        }
        self.last_tick = tick;
        Some(tick)
    }

    /// Timer state: number of the last reported tick.
    pub fn tick_count(&self) -> u64 {
        self.last_tick
    }

    /// Ticks dropped because the host polled late.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_in_order() {
        let mut clock = TickClock::start(100, 1_000.0);
        assert_eq!(clock.poll(1_050.0), None);
        assert_eq!(clock.poll(1_100.0), Some(1));
        assert_eq!(clock.poll(1_150.0), None);
        assert_eq!(clock.poll(1_210.0), Some(2));
        assert_eq!(clock.tick_count(), 2);
        assert_eq!(clock.coalesced(), 0);
    }

    #[test]
    fn test_slow_poll_coalesces() {
        let mut clock = TickClock::start(100, 0.0);
        assert_eq!(clock.poll(450.0), Some(4));
        assert_eq!(clock.coalesced(), 3);
        assert_eq!(clock.poll(460.0), None);
        assert_eq!(clock.poll(500.0), Some(5));
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut clock = TickClock::start(100, 500.0);
        assert_eq!(clock.poll(200.0), None);
        assert_eq!(clock.poll(600.0), Some(1));
    }
}

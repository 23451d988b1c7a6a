use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, after clamping.
    pub dt: Duration,

    /// Sum of all clamped deltas since the clock was created or reset.
    pub elapsed: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Delta time in milliseconds, the unit animation durations are expressed in.
    #[inline]
    pub fn dt_ms(&self) -> f64 {
        self.dt.as_secs_f64() * 1000.0
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the process is paused
/// by the debugger, backgrounded, or stalls. The same clamps apply to real-time
/// ticks and to deterministic `advance` steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: Duration,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents an animation from jumping straight to its end after a stall
    pub fn new() -> Self {
        Self::with_clamps(
            Duration::from_micros(100), // 0.0001s
            Duration::from_millis(250), // 0.25s
        )
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: Duration::ZERO,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline and the accumulated elapsed time.
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// Advances the clock from the monotonic system clock.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.step(dt)
    }

    /// Advances the clock by a caller-supplied delta.
    ///
    /// Used to drive animations at a fixed rate, independent of wall time.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        self.last = Instant::now();
        self.step(dt)
    }

    fn step(&mut self, dt: Duration) -> FrameTime {
        let dt = dt.clamp(self.dt_min, self.dt_max);
        self.elapsed += dt;

        let ft = FrameTime {
            dt,
            elapsed: self.elapsed,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn advance_accumulates_elapsed_and_counts_frames() {
        let mut clock = FrameClock::new();
        let a = clock.advance(ms(16));
        let b = clock.advance(ms(16));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert_eq!(b.elapsed, ms(32));
    }

    #[test]
    fn advance_clamps_long_stalls() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::from_secs(5));
        assert_eq!(ft.dt, ms(250));
    }

    #[test]
    fn advance_clamps_zero_dt() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::ZERO);
        assert_eq!(ft.dt, Duration::from_micros(100));
    }

    #[test]
    fn tick_measures_wall_time_within_clamps() {
        let mut clock = FrameClock::with_clamps(ms(5), ms(50));
        let a = clock.tick();
        std::thread::sleep(ms(1));
        let b = clock.tick();
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        for ft in [a, b] {
            assert!(ft.dt >= ms(5) && ft.dt <= ms(50));
        }
        assert_eq!(b.elapsed, a.dt + b.dt);
    }

    #[test]
    fn reset_clears_elapsed() {
        let mut clock = FrameClock::with_clamps(ms(1), ms(100));
        clock.advance(ms(40));
        clock.reset();
        let ft = clock.advance(ms(10));
        assert_eq!(ft.elapsed, ms(10));
    }

    #[test]
    fn dt_ms_converts() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(ms(20));
        assert!((ft.dt_ms() - 20.0).abs() < 1e-9);
    }
}

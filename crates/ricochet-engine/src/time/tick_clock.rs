use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous frame, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the frame.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// Engine ticks to run this frame.
    pub ticks_due: u32,
}

/// Frame clock with optional fixed-rate tick pacing.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// produce a burst of catch-up ticks. Even so, at most `max_ticks_per_frame`
/// ticks are scheduled per frame; any backlog beyond that is dropped.
#[derive(Debug, Clone)]
pub struct TickClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    step: Option<Duration>,
    accumulator: Duration,
    max_ticks_per_frame: u32,
}

impl TickClock {
    /// One tick per frame.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            step: None,
            accumulator: Duration::ZERO,
            max_ticks_per_frame: 8,
        }
    }

    /// Switches to fixed-rate ticking at `hz` ticks per second.
    ///
    /// `None`, or a non-positive / non-finite rate, keeps one tick per frame.
    pub fn with_tick_rate(mut self, hz: Option<f32>) -> Self {
        self.step = match hz {
            Some(hz) if hz.is_finite() && hz > 0.0 => {
                Some(Duration::from_secs_f64(1.0 / hz as f64))
            }
            Some(hz) => {
                log::warn!("ignoring invalid tick rate {hz}; ticking once per frame");
                None
            }
            None => None,
        };
        self.accumulator = Duration::ZERO;
        self
    }

    pub fn with_max_ticks_per_frame(mut self, max: u32) -> Self {
        self.max_ticks_per_frame = max.max(1);
        self
    }

    /// Resets the baseline, e.g. after the surface was reconfigured.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        self.last = now;
        self.accumulator = Duration::ZERO;
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ticks_due = match self.step {
            None => 1,
            Some(step) => self.drain_accumulator(dt, step),
        };

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
            ticks_due,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    fn drain_accumulator(&mut self, dt: Duration, step: Duration) -> u32 {
        self.accumulator += dt;

        let mut due = 0;
        while self.accumulator >= step && due < self.max_ticks_per_frame {
            self.accumulator -= step;
            due += 1;
        }

        if self.accumulator >= step {
            log::debug!("dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        due
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

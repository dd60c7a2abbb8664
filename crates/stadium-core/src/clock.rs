use instant::Instant;

/// Clock reading for one frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock was created.
    pub now: f32,
    pub dt: f32,
}

impl FrameTime {
    pub fn new(now: f32, dt: f32) -> Self {
        Self { now, dt }
    }
}

pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        FrameTime {
            now: (now - self.start).as_secs_f32(),
            dt: dt.as_secs_f32(),
        }
    }
}

/// Opens at most once per `interval` seconds.
#[derive(Clone, Copy, Debug)]
pub struct IntervalGate {
    interval: f32,
    last: f32,
}

impl IntervalGate {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            last: 0.0,
        }
    }

    pub fn ready(&mut self, now: f32) -> bool {
        if now - self.last >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

use std::time::{Duration, Instant};

/// Sleep-based frame pacer.
/// Holds each frame to at least `tick` and reports the elapsed wall time as
/// the frame delta, clamped so a stall never produces one huge step.
pub struct FramePacer {
    tick: Duration,
    max_delta: Duration,
    last: Instant,
    frame_count: u64,
}

impl FramePacer {
    pub fn new(tick: Duration, max_delta: Duration) -> Self {
        Self {
            tick,
            max_delta,
            last: Instant::now(),
            frame_count: 0,
        }
    }

    pub fn from_millis(tick_ms: u64, max_delta_ms: u64) -> Self {
        Self::new(Duration::from_millis(tick_ms), Duration::from_millis(max_delta_ms))
    }

    /// Block until a full tick has passed since the previous frame, then
    /// return the delta in seconds.
    pub fn wait(&mut self) -> f32 {
        let target = self.last + self.tick;
        let now = Instant::now();
        if now < target {
            std::thread::sleep(target - now);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        self.frame_count += 1;
        self.clamp(elapsed)
    }

    /// Delta in seconds for a measured frame time.
    pub fn clamp(&self, elapsed: Duration) -> f32 {
        elapsed.min(self.max_delta).as_secs_f32()
    }

    /// Restart timing from now, e.g. after a long load.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Opaque handle for a scheduled frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(i64);

impl FrameHandle {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

/// Animation-frame scheduling capability.
///
/// When a requested frame fires, the implementation must call
/// [`ScrollWatcher::on_frame`](crate::ScrollWatcher::on_frame) with a monotonic timestamp in
/// milliseconds.
pub trait FrameScheduler {
    /// Schedules one frame tick. Returns `None` if the host could not schedule it.
    fn request_frame(&self) -> Option<FrameHandle>;

    fn cancel_frame(&self, handle: FrameHandle);
}

/// A frame scheduled by [`FallbackFrameClock`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackFrame {
    /// How long to defer before firing, in milliseconds.
    pub delay_ms: f64,
    /// The timestamp to report when the frame fires.
    pub timestamp: f64,
}

/// Timer-based frame cadence for hosts without a native animation-frame API.
///
/// Approximates 60Hz: each frame is deferred until one interval after the previous frame's
/// timestamp. Timestamps are strictly increasing even if the host clock steps backwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackFrameClock {
    interval_ms: f64,
    last_time: Option<f64>,
}

impl FallbackFrameClock {
    pub const FRAME_INTERVAL_MS: f64 = 16.0;

    pub fn new() -> Self {
        Self::with_interval(Self::FRAME_INTERVAL_MS)
    }

    /// Non-positive intervals fall back to [`Self::FRAME_INTERVAL_MS`].
    pub fn with_interval(interval_ms: f64) -> Self {
        let interval_ms = if interval_ms > 0.0 {
            interval_ms
        } else {
            Self::FRAME_INTERVAL_MS
        };
        Self {
            interval_ms,
            last_time: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn next_frame(&mut self, now_ms: f64) -> FallbackFrame {
        let Some(last) = self.last_time else {
            self.last_time = Some(now_ms);
            return FallbackFrame {
                delay_ms: 0.0,
                timestamp: now_ms,
            };
        };

        let delay_ms = (self.interval_ms - (now_ms - last)).max(0.0);
        let timestamp = (now_ms + delay_ms).max(last + self.interval_ms);
        self.last_time = Some(timestamp);
        FallbackFrame {
            delay_ms,
            timestamp,
        }
    }
}

impl Default for FallbackFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// When the initial measurement pass runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialPass {
    /// Wait for the first `Load`/`PageShow` event, or the first motion event if that comes
    /// sooner.
    #[default]
    OnLoad,
    /// Schedule a frame tick at construction. Use this when the document is already loaded.
    NextFrame,
}

/// Configuration for [`crate::ScrollWatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatcherOptions {
    pub initial_pass: InitialPass,

    /// Whether a resize also schedules a pass.
    ///
    /// The viewport size is always refreshed synchronously on resize, before any pass runs.
    pub resize_schedules_pass: bool,

    /// Decimal places kept by `percent_in_viewport` and `percent_covering_viewport`.
    pub percent_precision: u32,
}

impl WatcherOptions {
    pub fn new() -> Self {
        Self {
            initial_pass: InitialPass::OnLoad,
            resize_schedules_pass: false,
            percent_precision: 2,
        }
    }

    pub fn with_initial_pass(mut self, initial_pass: InitialPass) -> Self {
        self.initial_pass = initial_pass;
        self
    }

    pub fn with_resize_schedules_pass(mut self, resize_schedules_pass: bool) -> Self {
        self.resize_schedules_pass = resize_schedules_pass;
        self
    }

    /// Precision is capped at 12 decimal places.
    pub fn with_percent_precision(mut self, percent_precision: u32) -> Self {
        self.percent_precision = percent_precision.min(12);
        self
    }

    pub(crate) fn round_percent(&self, value: f64) -> f64 {
        let mut scale = 1.0f64;
        for _ in 0..self.percent_precision.min(12) {
            scale *= 10.0;
        }
        // `value` is clamped to [0, 1], so truncating after adding one half rounds half up.
        let scaled = value.clamp(0.0, 1.0) * scale + 0.5;
        (scaled as u64) as f64 / scale
    }
}

impl Default for WatcherOptions {
    fn default() -> Self {
        Self::new()
    }
}

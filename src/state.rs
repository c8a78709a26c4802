use crate::Size;

/// A lightweight, serializable snapshot of the current scroll position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub at_top: bool,
    pub at_bottom: bool,
}

/// A combined snapshot of frame timing, viewport size and scroll position.
///
/// Useful for analytics or debugging overlays that want one value per pass without holding on
/// to the watcher.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub timestamp: f64,
    pub prev_timestamp: f64,
    pub viewport: Size,
    pub scroll: ScrollState,
}

impl FrameState {
    pub fn time_diff(&self) -> f64 {
        self.timestamp - self.prev_timestamp
    }
}

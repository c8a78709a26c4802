use crate::key::ElementKey;
use crate::{Geometry, ScrollMetrics, Size};

/// Layout-reading capability of the host environment.
///
/// A browser adapter implements this over the DOM; tests implement it over fixed fixtures.
/// Every call is assumed to be synchronous and may force a reflow, which is why the watcher
/// memoizes [`measure`](Self::measure) per pass.
pub trait Layout {
    type Element;
    /// Identity of an element. Keys must not keep their element alive.
    type Key: ElementKey;

    fn key(&self, element: &Self::Element) -> Self::Key;

    /// Performs one layout read of `element`.
    fn measure(&self, element: &Self::Element) -> Geometry;

    /// The root element whose scroll metrics represent the watched container.
    fn document_root(&self) -> &Self::Element;

    /// Viewport dimensions (`innerWidth || root.clientWidth`, same for height).
    fn viewport_size(&self) -> Size;

    fn scroll_metrics(&self) -> ScrollMetrics;
}

//! Visibility and coverage math over a measured [`Geometry`] and the viewport [`Size`].
//!
//! All inputs are the host's sub-pixel coordinates. Nothing here rounds; percentage rounding is
//! applied by the watcher according to [`crate::WatcherOptions::percent_precision`].

use crate::{Coverage, Geometry, Size};

/// `false` if the box lies entirely above, below, left or right of the viewport.
pub fn is_in_viewport(rect: &Geometry, viewport: Size) -> bool {
    !(rect.bottom <= 0.0
        || rect.top >= viewport.height
        || rect.left >= viewport.width
        || rect.right <= 0.0)
}

/// Vertical overlap between the box and the viewport, never negative.
pub fn pixels_in_viewport(rect: &Geometry, viewport: Size) -> f64 {
    let vh = viewport.height;
    let pixels = if rect.top <= 0.0 && rect.bottom >= vh {
        vh
    } else if rect.top >= 0.0 {
        rect.height.min(vh - rect.top)
    } else {
        (rect.height + rect.top).max(0.0)
    };
    pixels.max(0.0)
}

/// Visible share of the box: pixels in viewport over `min(viewport height, box height)`.
///
/// A box taller than the viewport that fills it reports `1.0`. Zero-sized boxes or viewports
/// report `0.0`.
pub fn percent_in_viewport(rect: &Geometry, viewport: Size) -> f64 {
    let denom = viewport.height.min(rect.height);
    if denom <= 0.0 {
        return 0.0;
    }
    (pixels_in_viewport(rect, viewport) / denom).clamp(0.0, 1.0)
}

/// Share of the viewport height covered by the box.
pub fn percent_covering_viewport(rect: &Geometry, viewport: Size) -> f64 {
    if viewport.height <= 0.0 {
        return 0.0;
    }
    (pixels_in_viewport(rect, viewport) / viewport.height).clamp(0.0, 1.0)
}

pub fn coverage(rect: &Geometry, viewport: Size) -> Coverage {
    let vertical = rect.top <= 0.0 && rect.bottom >= viewport.height;
    let horizontal = rect.left <= 0.0 && rect.right >= viewport.width;
    Coverage {
        vertical,
        horizontal,
        both: vertical && horizontal,
        either: vertical || horizontal,
    }
}

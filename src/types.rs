/// Bounding geometry of an element as reported by one layout read.
///
/// Edges are sub-pixel client coordinates relative to the viewport; offset metrics are the
/// integer `offset*` values relative to the element's offset parent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub offset_top: i32,
    pub offset_left: i32,
    pub offset_width: i32,
    pub offset_height: i32,
}

impl Geometry {
    /// Builds a geometry from its top-left corner and size, with offsets mirroring the box.
    pub fn from_box(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            right: left + width,
            bottom: top + height,
            left,
            width,
            height,
            offset_top: top as i32,
            offset_left: left as i32,
            offset_width: width as i32,
            offset_height: height as i32,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Whether an element's box fully spans the viewport on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    pub vertical: bool,
    pub horizontal: bool,
    pub both: bool,
    pub either: bool,
}

/// Scroll metrics of the watched target and its document root.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Target scroll offsets (`pageXOffset`/`pageYOffset` for the window).
    pub scroll_left: f64,
    pub scroll_top: f64,
    /// Target border widths (`clientLeft`/`clientTop`); zero for the window.
    pub client_left: f64,
    pub client_top: f64,
    pub root_scroll_top: f64,
    pub root_scroll_height: f64,
    pub root_client_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Scroll,
    Resize,
    TouchMove,
    /// Platform-prefixed pointer motion (`MSPointerMove`).
    PointerMove,
    Load,
    PageShow,
}

impl EventKind {
    /// Events registered on the watched target for the lifetime of a watcher.
    pub const LISTENED: [EventKind; 4] = [
        EventKind::Scroll,
        EventKind::Resize,
        EventKind::TouchMove,
        EventKind::PointerMove,
    ];

    /// Document readiness signals that may trigger the initial pass.
    pub const READY: [EventKind; 2] = [EventKind::Load, EventKind::PageShow];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::TouchMove => "touchmove",
            Self::PointerMove => "MSPointerMove",
            Self::Load => "load",
            Self::PageShow => "pageshow",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "scroll" => Self::Scroll,
            "resize" => Self::Resize,
            "touchmove" => Self::TouchMove,
            "MSPointerMove" | "pointermove" => Self::PointerMove,
            "load" => Self::Load,
            "pageshow" => Self::PageShow,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether events of this kind go through the throttle and pass pipeline.
    pub fn is_motion(self) -> bool {
        matches!(self, Self::Scroll | Self::TouchMove | Self::PointerMove)
    }
}

/// The event a pass was triggered by.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub kind: EventKind,
    /// Host timestamp of the event in milliseconds.
    pub time_stamp: f64,
}

impl Event {
    pub fn new(kind: EventKind, time_stamp: f64) -> Self {
        Self { kind, time_stamp }
    }
}

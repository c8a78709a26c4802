use scroll_watcher::{Error, Geometry, Layout, Result, ScrollMetrics, Size};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, Window};

use crate::ElementIds;

/// What a watcher listens to for scroll events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WatchTarget {
    /// The window; scroll offsets come from `scrollX`/`scrollY`.
    #[default]
    Window,
    /// A scrollable element; scroll offsets come from its `scrollLeft`/`scrollTop`.
    Element(Element),
}

/// Live DOM reads for one watch target.
#[derive(Debug)]
pub struct DomLayout {
    window: Window,
    target: WatchTarget,
    root: Element,
    ids: ElementIds,
}

impl DomLayout {
    pub fn new(window: Window, target: WatchTarget, ids: ElementIds) -> Result<Self> {
        let document = match &target {
            WatchTarget::Window => window.document(),
            WatchTarget::Element(el) => el.owner_document(),
        };
        let root = document
            .ok_or(Error::MissingCapability("document"))?
            .document_element()
            .ok_or(Error::MissingCapability("document.documentElement"))?;
        Ok(Self {
            window,
            target,
            root,
            ids,
        })
    }

    pub fn target(&self) -> &WatchTarget {
        &self.target
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn event_target(&self) -> &EventTarget {
        match &self.target {
            WatchTarget::Window => self.window.as_ref(),
            WatchTarget::Element(el) => el.as_ref(),
        }
    }
}

/// `innerWidth || clientWidth`: a missing or zero window extent falls back to the root's.
pub(crate) fn viewport_extent(inner: Option<f64>, client: i32) -> f64 {
    match inner {
        Some(v) if v > 0.0 => v,
        _ => client as f64,
    }
}

impl Layout for DomLayout {
    type Element = Element;
    type Key = u32;

    fn key(&self, element: &Element) -> u32 {
        self.ids.id(element)
    }

    fn measure(&self, element: &Element) -> Geometry {
        let r = element.get_bounding_client_rect();
        let (offset_top, offset_left, offset_width, offset_height) =
            match element.dyn_ref::<HtmlElement>() {
                Some(html) => (
                    html.offset_top(),
                    html.offset_left(),
                    html.offset_width(),
                    html.offset_height(),
                ),
                None => (0, 0, 0, 0),
            };
        Geometry {
            top: r.top(),
            right: r.right(),
            bottom: r.bottom(),
            left: r.left(),
            width: r.width(),
            height: r.height(),
            offset_top,
            offset_left,
            offset_width,
            offset_height,
        }
    }

    fn document_root(&self) -> &Element {
        &self.root
    }

    fn viewport_size(&self) -> Size {
        let width = viewport_extent(
            self.window.inner_width().ok().and_then(|v| v.as_f64()),
            self.root.client_width(),
        );
        let height = viewport_extent(
            self.window.inner_height().ok().and_then(|v| v.as_f64()),
            self.root.client_height(),
        );
        Size::new(width, height)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let (scroll_left, scroll_top, client_left, client_top) = match &self.target {
            WatchTarget::Window => (
                self.window.scroll_x().unwrap_or(0.0),
                self.window.scroll_y().unwrap_or(0.0),
                0.0,
                0.0,
            ),
            WatchTarget::Element(el) => (
                el.scroll_left() as f64,
                el.scroll_top() as f64,
                el.client_left() as f64,
                el.client_top() as f64,
            ),
        };
        let root_scroll_top = match &self.target {
            WatchTarget::Window => scroll_top,
            WatchTarget::Element(_) => self.root.scroll_top() as f64,
        };
        ScrollMetrics {
            scroll_left,
            scroll_top,
            client_left,
            client_top,
            root_scroll_top,
            root_scroll_height: self.root.scroll_height() as f64,
            root_client_height: self.root.client_height() as f64,
        }
    }
}

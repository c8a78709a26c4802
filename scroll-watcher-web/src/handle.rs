use std::rc::Weak;

use js_sys::{Object, Reflect};
use scroll_watcher::{Coverage, Geometry, Size};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::DomScrollWatcher;

/// The watcher as JS callbacks see it: their first argument, next to the event.
///
/// Queries run against the current pass snapshot. After the watcher dies or is dropped the
/// handle reports nothing visible, zero offsets and `undefined` for geometry.
#[wasm_bindgen]
pub struct JsScrollWatcher {
    inner: Weak<DomScrollWatcher>,
}

impl JsScrollWatcher {
    pub(crate) fn new(inner: Weak<DomScrollWatcher>) -> Self {
        Self { inner }
    }

    fn with<T>(&self, detached: T, f: impl FnOnce(&DomScrollWatcher) -> T) -> T {
        match self.inner.upgrade() {
            Some(watcher) if !watcher.is_dead() => f(&watcher),
            _ => detached,
        }
    }
}

#[wasm_bindgen]
impl JsScrollWatcher {
    #[wasm_bindgen(js_name = inViewport)]
    pub fn in_viewport(&self, element: &Element, min_percent: Option<f64>) -> bool {
        self.with(false, |w| w.in_viewport(element, min_percent))
    }

    #[wasm_bindgen(js_name = pixelsInViewport)]
    pub fn pixels_in_viewport(&self, element: &Element) -> f64 {
        self.with(0.0, |w| w.pixels_in_viewport(element))
    }

    #[wasm_bindgen(js_name = percentInViewport)]
    pub fn percent_in_viewport(&self, element: &Element) -> f64 {
        self.with(0.0, |w| w.percent_in_viewport(element))
    }

    #[wasm_bindgen(js_name = percentCoveringViewport)]
    pub fn percent_covering_viewport(&self, element: &Element) -> f64 {
        self.with(0.0, |w| w.percent_covering_viewport(element))
    }

    /// `{ vertical, horizontal, both, either }`.
    #[wasm_bindgen(js_name = coveringViewport)]
    pub fn covering_viewport(&self, element: &Element) -> JsValue {
        self.with(JsValue::UNDEFINED, |w| {
            coverage_object(&w.covering_viewport(element))
        })
    }

    pub fn rect(&self, element: &Element) -> JsValue {
        self.with(JsValue::UNDEFINED, |w| geometry_object(&w.rect(element)))
    }

    #[wasm_bindgen(js_name = prevRect)]
    pub fn prev_rect(&self, element: &Element) -> JsValue {
        self.with(JsValue::UNDEFINED, |w| {
            w.prev_rect(element)
                .map_or(JsValue::UNDEFINED, |rect| geometry_object(&rect))
        })
    }

    #[wasm_bindgen(js_name = removeCurrentCallback)]
    pub fn remove_current_callback(&self) -> bool {
        self.with(false, |w| w.remove_current_callback())
    }

    /// `{ width, height }`.
    #[wasm_bindgen(getter)]
    pub fn viewport(&self) -> JsValue {
        self.with(JsValue::UNDEFINED, |w| size_object(w.viewport()))
    }

    #[wasm_bindgen(getter = timeDiff)]
    pub fn time_diff(&self) -> f64 {
        self.with(0.0, |w| w.time_diff())
    }

    #[wasm_bindgen(getter = atTop)]
    pub fn at_top(&self) -> bool {
        self.with(false, |w| w.at_top())
    }

    #[wasm_bindgen(getter = atBottom)]
    pub fn at_bottom(&self) -> bool {
        self.with(false, |w| w.at_bottom())
    }

    #[wasm_bindgen(getter = scrollLeft)]
    pub fn scroll_left(&self) -> i32 {
        self.with(0, |w| w.scroll_left())
    }

    #[wasm_bindgen(getter = scrollTop)]
    pub fn scroll_top(&self) -> i32 {
        self.with(0, |w| w.scroll_top())
    }

    #[wasm_bindgen(getter = isDead)]
    pub fn is_dead(&self) -> bool {
        self.with(true, |_| false)
    }
}

impl core::fmt::Debug for JsScrollWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JsScrollWatcher")
            .field("dead", &self.is_dead())
            .finish()
    }
}

pub(crate) fn js_object(fields: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (name, value) in fields {
        let _ = Reflect::set(&obj, &JsValue::from_str(name), value);
    }
    obj.into()
}

fn geometry_object(rect: &Geometry) -> JsValue {
    js_object(&[
        ("top", rect.top.into()),
        ("right", rect.right.into()),
        ("bottom", rect.bottom.into()),
        ("left", rect.left.into()),
        ("width", rect.width.into()),
        ("height", rect.height.into()),
        ("offsetTop", rect.offset_top.into()),
        ("offsetLeft", rect.offset_left.into()),
        ("offsetWidth", rect.offset_width.into()),
        ("offsetHeight", rect.offset_height.into()),
    ])
}

fn coverage_object(coverage: &Coverage) -> JsValue {
    js_object(&[
        ("vertical", coverage.vertical.into()),
        ("horizontal", coverage.horizontal.into()),
        ("both", coverage.both.into()),
        ("either", coverage.either.into()),
    ])
}

fn size_object(size: Size) -> JsValue {
    js_object(&[("width", size.width.into()), ("height", size.height.into())])
}

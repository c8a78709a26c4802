use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Object, WeakMap};
use scroll_watcher::{Error, Result};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Stable `u32` ids for DOM elements, stored in a JS `WeakMap`.
///
/// Clones share the same map and counter.
#[derive(Clone, Debug)]
pub struct ElementIds {
    map: WeakMap,
    next: Rc<Cell<u32>>,
}

impl ElementIds {
    pub fn new() -> Result<Self> {
        if !crate::has_property(&js_sys::global(), "WeakMap") {
            return Err(Error::MissingCapability("WeakMap"));
        }
        Ok(Self {
            map: WeakMap::new(),
            next: Rc::new(Cell::new(1)),
        })
    }

    /// Returns the element's id, assigning a fresh one on first sight.
    pub fn id(&self, element: &Element) -> u32 {
        let key: &Object = element.as_ref();
        if let Some(id) = self.map.get(key).as_f64() {
            return id as u32;
        }
        let id = self.next.get();
        self.next.set(id.wrapping_add(1));
        self.map.set(key, &JsValue::from(id));
        wtrace!(id, "ElementIds::assign");
        id
    }
}

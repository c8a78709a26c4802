use js_sys::{Function, Reflect};
use scroll_watcher::{Error, Event, Result};
use wasm_bindgen::{JsCast, JsValue};

use crate::handle::js_object;
use crate::{DomCallback, JsScrollWatcher};

/// Wraps a JS function, or an object with a callable `handleEvent`, as a [`DomCallback`].
///
/// The JS side is called as `(watcher, { type, timeStamp })`, with `watcher` exposing the
/// visibility queries for the running pass. Exceptions it throws are logged and do not stop the
/// rest of the pass.
///
/// Every call produces a new callback identity; keep the returned value to remove it later.
pub fn js_callback(value: JsValue, watcher: JsScrollWatcher) -> Result<DomCallback> {
    let watcher = JsValue::from(watcher);

    if let Some(f) = value.dyn_ref::<Function>() {
        let f = f.clone();
        return Ok(DomCallback::new(move |_, event: &Event| {
            invoke(&f, &JsValue::UNDEFINED, &watcher, event)
        }));
    }

    if value.is_object() {
        let handle_event = Reflect::get(&value, &JsValue::from_str("handleEvent"))
            .ok()
            .and_then(|m| m.dyn_into::<Function>().ok());
        if let Some(f) = handle_event {
            return Ok(DomCallback::new(move |_, event: &Event| {
                invoke(&f, &value, &watcher, event)
            }));
        }
    }

    wwarn!("js_callback: not a function or EventListener object");
    Err(Error::InvalidCallback)
}

fn invoke(f: &Function, this: &JsValue, watcher: &JsValue, event: &Event) {
    if let Err(_err) = f.call2(this, watcher, &event_object(event)) {
        wwarn!(error = ?_err, kind = event.kind.name(), "callback threw");
    }
}

fn event_object(event: &Event) -> JsValue {
    js_object(&[
        ("type", JsValue::from_str(event.kind.name())),
        ("timeStamp", JsValue::from_f64(event.time_stamp)),
    ])
}

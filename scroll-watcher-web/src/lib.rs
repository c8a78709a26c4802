//! Browser bindings for [`scroll_watcher`].
//!
//! [`WatchContext`] owns the per-document services: the element id registry (a JS `WeakMap`, so
//! entries never keep elements alive) and the geometry cache shared by every watcher it creates.
//! Each [`DomWatcher`] reads layout through [`DomLayout`], schedules passes through
//! [`DomFrameScheduler`] and listens for scroll, resize, touch and pointer events on its target.
//! JS callbacks are called with a [`JsScrollWatcher`] handle and the event.
//!
//! ```no_run
//! use scroll_watcher_web::{WatchContext, WatchTarget};
//!
//! # fn main() -> scroll_watcher_web::Result<()> {
//! let ctx = WatchContext::new()?;
//! let watcher = ctx.watch(WatchTarget::Window)?;
//! watcher.add(scroll_watcher_web::DomCallback::new(|w, _event| {
//!     let _ = w.at_bottom();
//! }));
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod context;
mod handle;
mod ids;
mod js_callback;
mod layout;
mod scheduler;
mod watcher;

#[cfg(test)]
mod tests;

pub use context::WatchContext;
pub use handle::JsScrollWatcher;
pub use ids::ElementIds;
pub use js_callback::js_callback;
pub use layout::{DomLayout, WatchTarget};
pub use scheduler::DomFrameScheduler;
pub use scroll_watcher::{Error, Result};
pub use watcher::{DomCallback, DomScrollWatcher, DomWatcher};

use wasm_bindgen::JsValue;

pub(crate) fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

pub(crate) fn host_error(err: JsValue) -> Error {
    Error::Host(format!("{err:?}"))
}

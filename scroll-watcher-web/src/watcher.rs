use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scroll_watcher::{
    Callback, Event, EventKind, Result, ScrollWatcher, SharedGeometryCache, WatcherOptions,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, Window};

use crate::{DomFrameScheduler, DomLayout, JsScrollWatcher, js_callback};

pub type DomScrollWatcher = ScrollWatcher<DomLayout, DomFrameScheduler>;
pub type DomCallback = Callback<DomScrollWatcher>;

/// Maps a DOM event to a watcher event; unknown types are dropped.
pub(crate) fn to_event(name: &str, time_stamp: f64) -> Option<Event> {
    EventKind::from_name(name).map(|kind| Event::new(kind, time_stamp))
}

struct Listeners {
    target: EventTarget,
    window: Window,
    on_event: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listeners {
    fn attach(target: EventTarget, window: Window, watcher: &Rc<DomScrollWatcher>) -> Result<Self> {
        let weak = Rc::downgrade(watcher);
        let on_event = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(watcher) = weak.upgrade() else {
                return;
            };
            if let Some(event) = to_event(&event.type_(), event.time_stamp()) {
                watcher.handle_event(&event);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        let listeners = Self {
            target,
            window,
            on_event,
        };
        // On failure `listeners` drops here after detaching what was added.
        for kind in EventKind::LISTENED {
            listeners
                .target
                .add_event_listener_with_callback(kind.name(), listeners.callback())
                .map_err(crate::host_error)?;
        }
        for kind in EventKind::READY {
            listeners
                .window
                .add_event_listener_with_callback(kind.name(), listeners.callback())
                .map_err(crate::host_error)?;
        }
        Ok(listeners)
    }

    fn callback(&self) -> &js_sys::Function {
        self.on_event.as_ref().unchecked_ref()
    }

    fn detach(&self) {
        for kind in EventKind::LISTENED {
            let _ = self
                .target
                .remove_event_listener_with_callback(kind.name(), self.callback());
        }
        for kind in EventKind::READY {
            let _ = self
                .window
                .remove_event_listener_with_callback(kind.name(), self.callback());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// A [`DomScrollWatcher`] wired to the DOM: event listeners on its target and window, frames
/// from [`DomFrameScheduler`].
///
/// Dropping it behaves like [`DomWatcher::die`].
pub struct DomWatcher {
    watcher: Rc<DomScrollWatcher>,
    listeners: RefCell<Option<Listeners>>,
}

impl DomWatcher {
    pub(crate) fn new(
        layout: DomLayout,
        cache: SharedGeometryCache<u32>,
        options: WatcherOptions,
    ) -> Result<Self> {
        let window = layout.window().clone();
        let target = layout.event_target().clone();
        let watcher = Rc::new_cyclic(|weak: &Weak<DomScrollWatcher>| {
            let weak = weak.clone();
            let scheduler = DomFrameScheduler::new(window.clone(), move |ts| {
                if let Some(watcher) = weak.upgrade() {
                    watcher.on_frame(ts);
                }
            });
            ScrollWatcher::new(layout, scheduler, cache, options)
        });
        let listeners = Listeners::attach(target, window, &watcher)?;
        wdebug!("DomWatcher::new");
        Ok(Self {
            watcher,
            listeners: RefCell::new(Some(listeners)),
        })
    }

    pub fn watcher(&self) -> &DomScrollWatcher {
        &self.watcher
    }

    pub fn add(&self, callback: DomCallback) -> &Self {
        self.watcher.add(callback);
        self
    }

    pub fn once(&self, callback: DomCallback) -> &Self {
        self.watcher.once(callback);
        self
    }

    pub fn remove(&self, callback: &DomCallback) -> bool {
        self.watcher.remove(callback)
    }

    /// Handle passed to JS callbacks as their first argument.
    pub fn js_handle(&self) -> JsScrollWatcher {
        JsScrollWatcher::new(Rc::downgrade(&self.watcher))
    }

    /// Registers a JS function or `EventListener` object. Returns the callback for removal.
    pub fn add_js(&self, value: JsValue) -> Result<DomCallback> {
        let callback = js_callback(value, self.js_handle())?;
        self.watcher.add(callback.clone());
        Ok(callback)
    }

    pub fn once_js(&self, value: JsValue) -> Result<DomCallback> {
        let callback = js_callback(value, self.js_handle())?;
        self.watcher.once(callback.clone());
        Ok(callback)
    }

    /// Detaches the DOM listeners and kills the watcher. Idempotent.
    pub fn die(&self) {
        drop(self.listeners.borrow_mut().take());
        self.watcher.die();
    }

    pub fn is_dead(&self) -> bool {
        self.watcher.is_dead()
    }
}

impl Drop for DomWatcher {
    fn drop(&mut self) {
        self.die();
    }
}

impl core::fmt::Debug for DomWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomWatcher")
            .field("watcher", &self.watcher)
            .field("attached", &self.listeners.borrow().is_some())
            .finish()
    }
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Reflect};
use scroll_watcher::{FallbackFrameClock, FrameHandle, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Prefixes tried, in order, after the standard names.
pub(crate) const VENDOR_PREFIXES: [&str; 4] = ["webkit", "moz", "ms", "o"];

/// Window property names of the request function and the candidate cancel functions for
/// `prefix`. An empty prefix gives the standard names.
pub(crate) fn frame_api_names(prefix: &str) -> (String, Vec<String>) {
    if prefix.is_empty() {
        return (
            "requestAnimationFrame".to_owned(),
            vec!["cancelAnimationFrame".to_owned()],
        );
    }
    (
        format!("{prefix}RequestAnimationFrame"),
        vec![
            format!("{prefix}CancelAnimationFrame"),
            format!("{prefix}CancelRequestAnimationFrame"),
        ],
    )
}

struct NativeFrames {
    request: Function,
    cancel: Function,
}

impl NativeFrames {
    /// The first prefix that provides both a request and a cancel function wins.
    fn lookup(window: &Window) -> Option<Self> {
        core::iter::once("")
            .chain(VENDOR_PREFIXES)
            .find_map(|prefix| {
                let (request, cancels) = frame_api_names(prefix);
                let request = window_function(window, &request)?;
                let cancel = cancels
                    .iter()
                    .find_map(|name| window_function(window, name))?;
                Some(Self { request, cancel })
            })
    }
}

fn window_function(window: &Window, name: &str) -> Option<Function> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Frame ticks from `requestAnimationFrame` (or a vendor-prefixed variant), or from
/// `setTimeout` paced by a [`FallbackFrameClock`] where neither exists.
///
/// The scheduler does not know about the watcher; `on_tick` receives the frame timestamp.
pub struct DomFrameScheduler {
    window: Window,
    native: Option<NativeFrames>,
    on_frame: Closure<dyn FnMut(f64)>,
    on_timeout: Closure<dyn FnMut()>,
    clock: RefCell<FallbackFrameClock>,
    timeout_timestamp: Rc<Cell<f64>>,
}

impl DomFrameScheduler {
    pub fn new(window: Window, on_tick: impl Fn(f64) + 'static) -> Self {
        let native = NativeFrames::lookup(&window);
        let on_tick: Rc<dyn Fn(f64)> = Rc::new(on_tick);
        let timeout_timestamp = Rc::new(Cell::new(0.0));

        let tick = Rc::clone(&on_tick);
        let on_frame = Closure::wrap(Box::new(move |ts: f64| tick(ts)) as Box<dyn FnMut(f64)>);

        let ts = Rc::clone(&timeout_timestamp);
        let on_timeout = Closure::wrap(Box::new(move || on_tick(ts.get())) as Box<dyn FnMut()>);

        wdebug!(native = native.is_some(), "DomFrameScheduler::new");
        Self {
            window,
            native,
            on_frame,
            on_timeout,
            clock: RefCell::new(FallbackFrameClock::new()),
            timeout_timestamp,
        }
    }

    /// Whether frames come from the host's animation-frame API rather than timers.
    pub fn is_native(&self) -> bool {
        self.native.is_some()
    }
}

impl FrameScheduler for DomFrameScheduler {
    fn request_frame(&self) -> Option<FrameHandle> {
        if let Some(native) = &self.native {
            return match native.request.call1(self.window.as_ref(), self.on_frame.as_ref()) {
                Ok(id) => id.as_f64().map(|id| FrameHandle::new(id as i64)),
                Err(_err) => {
                    wwarn!(error = ?_err, "requestAnimationFrame failed");
                    None
                }
            };
        }

        let frame = self.clock.borrow_mut().next_frame(js_sys::Date::now());
        self.timeout_timestamp.set(frame.timestamp);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.on_timeout.as_ref().unchecked_ref(),
                frame.delay_ms.ceil() as i32,
            ) {
            Ok(id) => Some(FrameHandle::new(id.into())),
            Err(_err) => {
                wwarn!(error = ?_err, "setTimeout failed");
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        match &self.native {
            Some(native) => {
                let id = JsValue::from_f64(handle.raw() as f64);
                if let Err(_err) = native.cancel.call1(self.window.as_ref(), &id) {
                    wwarn!(error = ?_err, "cancelAnimationFrame failed");
                }
            }
            None => self.window.clear_timeout_with_handle(handle.raw() as i32),
        }
    }
}

impl core::fmt::Debug for DomFrameScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomFrameScheduler")
            .field("native", &self.native.is_some())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

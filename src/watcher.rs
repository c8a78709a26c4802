use core::cell::{Cell, RefCell};

use crate::callback::CallbackQueue;
use crate::visibility;
use crate::{
    Callback, Coverage, Event, EventKind, FrameHandle, FrameScheduler, FrameState, Geometry,
    InitialPass, Layout, ScrollState, SharedGeometryCache, Size, WatcherOptions,
};

/// Throttling state of a [`ScrollWatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatcherState {
    /// No frame requested, no pass executing.
    Idle,
    /// A frame tick has been requested and has not fired yet.
    Pending,
    /// A pass is executing.
    Running,
    /// [`ScrollWatcher::die`] has been called.
    Dead,
}

/// Coordinates scroll-driven callbacks and viewport visibility queries for one scrollable
/// target.
///
/// The watcher is headless:
/// - Your adapter forwards host events to [`handle_event`](Self::handle_event).
/// - The injected [`FrameScheduler`] calls [`on_frame`](Self::on_frame) when a requested frame
///   fires.
/// - Geometry comes from the injected [`Layout`] and is memoized per pass in a
///   [`SharedGeometryCache`] that every watcher of a document can share.
///
/// All methods take `&self` so callbacks, which receive `&ScrollWatcher`, can register and
/// remove callbacks or query geometry while a pass runs.
pub struct ScrollWatcher<L: Layout, S: FrameScheduler> {
    layout: L,
    scheduler: S,
    cache: SharedGeometryCache<L::Key>,
    options: WatcherOptions,

    queue: RefCell<CallbackQueue<Self>>,
    current: RefCell<Option<Callback<Self>>>,

    running: Cell<bool>,
    dead: Cell<bool>,
    initial_pending: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
    pending_event: Cell<Option<Event>>,

    timestamp: Cell<f64>,
    prev_timestamp: Cell<f64>,
    viewport: Cell<Size>,
    passes: Cell<u64>,
}

struct PassGuard<'a, L: Layout, S: FrameScheduler> {
    watcher: &'a ScrollWatcher<L, S>,
}

impl<L: Layout, S: FrameScheduler> Drop for PassGuard<'_, L, S> {
    fn drop(&mut self) {
        self.watcher.current.borrow_mut().take();
        self.watcher.running.set(false);
    }
}

struct PendingGuard<'a> {
    pending: &'a Cell<Option<FrameHandle>>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending.set(None);
    }
}

impl<L: Layout, S: FrameScheduler> ScrollWatcher<L, S> {
    /// Creates a watcher over `layout`, reading the viewport size immediately.
    ///
    /// With [`InitialPass::NextFrame`] a frame tick is requested right away; otherwise the
    /// initial pass waits for a `Load`/`PageShow` event or the first motion event.
    pub fn new(
        layout: L,
        scheduler: S,
        cache: SharedGeometryCache<L::Key>,
        options: WatcherOptions,
    ) -> Self {
        let viewport = layout.viewport_size();
        wdebug!(
            width = viewport.width,
            height = viewport.height,
            initial_pass = ?options.initial_pass,
            "ScrollWatcher::new"
        );
        let w = Self {
            layout,
            scheduler,
            cache,
            options,
            queue: RefCell::new(CallbackQueue::new()),
            current: RefCell::new(None),
            running: Cell::new(false),
            dead: Cell::new(false),
            initial_pending: Cell::new(true),
            pending: Cell::new(None),
            pending_event: Cell::new(None),
            timestamp: Cell::new(0.0),
            prev_timestamp: Cell::new(0.0),
            viewport: Cell::new(viewport),
            passes: Cell::new(0),
        };
        if w.options.initial_pass == InitialPass::NextFrame {
            w.schedule(Event::new(EventKind::Load, 0.0));
        }
        w
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn cache(&self) -> &SharedGeometryCache<L::Key> {
        &self.cache
    }

    pub fn options(&self) -> &WatcherOptions {
        &self.options
    }

    pub fn state(&self) -> WatcherState {
        if self.dead.get() {
            WatcherState::Dead
        } else if self.running.get() {
            WatcherState::Running
        } else if self.pending.get().is_some() {
            WatcherState::Pending
        } else {
            WatcherState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn is_dead(&self) -> bool {
        self.dead.get()
    }

    /// Whether the initial pass has not run yet.
    pub fn initial_pass_pending(&self) -> bool {
        self.initial_pending.get()
    }

    /// Number of completed passes.
    pub fn passes(&self) -> u64 {
        self.passes.get()
    }

    // --- events -------------------------------------------------------------------------------

    /// Routes a host event.
    ///
    /// Resize refreshes the viewport size synchronously. Motion events request a frame unless
    /// one is already pending. Readiness events only request the initial pass.
    pub fn handle_event(&self, event: &Event) {
        if self.dead.get() {
            return;
        }
        match event.kind {
            EventKind::Resize => {
                self.refresh_viewport();
                if self.options.resize_schedules_pass {
                    self.schedule(*event);
                }
            }
            EventKind::Load | EventKind::PageShow => {
                if self.initial_pending.get() {
                    self.schedule(*event);
                } else {
                    wtrace!(kind = ?event.kind, "initial pass already ran");
                }
            }
            EventKind::Scroll | EventKind::TouchMove | EventKind::PointerMove => {
                self.schedule(*event);
            }
        }
    }

    fn schedule(&self, event: Event) {
        if self.pending.get().is_some() {
            wtrace!(kind = ?event.kind, "coalesced into pending frame");
            return;
        }
        match self.scheduler.request_frame() {
            Some(handle) => {
                wtrace!(kind = ?event.kind, handle = handle.raw(), "frame requested");
                self.pending_event.set(Some(event));
                self.pending.set(Some(handle));
            }
            None => {
                wwarn!(kind = ?event.kind, "frame scheduler refused request");
            }
        }
    }

    /// Frame-tick entry point, called by the scheduler with the frame timestamp (ms).
    ///
    /// Ticks that arrive without a pending request, or while a pass is running, are ignored.
    pub fn on_frame(&self, timestamp: f64) {
        if self.dead.get() {
            return;
        }
        if self.pending.get().is_none() {
            wtrace!(timestamp, "stray frame tick");
            return;
        }
        if self.running.get() {
            wtrace!(timestamp, "frame tick during a pass ignored");
            return;
        }
        self.prev_timestamp.set(self.timestamp.get());
        self.timestamp.set(timestamp);
        let event = self
            .pending_event
            .take()
            .unwrap_or(Event::new(EventKind::Scroll, timestamp));
        // Cleared after the pass so events raised by callbacks fold into it.
        let _pending = PendingGuard {
            pending: &self.pending,
        };
        self.run(&event);
    }

    /// Executes one pass: rotates the geometry cache, then invokes every queued callback once.
    ///
    /// Re-entrant calls while a pass is running are ignored.
    pub fn run(&self, event: &Event) {
        if self.dead.get() {
            return;
        }
        if self.running.get() {
            wtrace!("re-entrant pass ignored");
            return;
        }
        self.running.set(true);
        let _guard = PassGuard { watcher: self };

        self.initial_pending.set(false);
        self.cache.rotate();

        let callbacks = self.queue.borrow().snapshot();
        wtrace!(kind = ?event.kind, callbacks = callbacks.len(), "pass");

        for callback in callbacks {
            // Removed earlier in this pass.
            if !self.queue.borrow().contains(&callback) {
                continue;
            }
            *self.current.borrow_mut() = Some(callback.clone());
            callback.invoke(self, event);

            let run_once = self.queue.borrow().run_once(&callback);
            if run_once == Some(true) {
                self.remove_current_callback();
            }
            self.current.borrow_mut().take();
        }

        self.passes.set(self.passes.get().saturating_add(1));
    }

    /// Re-reads the viewport dimensions from the layout.
    pub fn refresh_viewport(&self) {
        let size = self.layout.viewport_size();
        wtrace!(width = size.width, height = size.height, "viewport refreshed");
        self.viewport.set(size);
    }

    // --- callbacks ----------------------------------------------------------------------------

    /// Registers `callback` to run on every pass.
    ///
    /// Registering a callback that is already queued clears its fire-once flag.
    pub fn add(&self, callback: Callback<Self>) -> &Self {
        self.enqueue(callback, false);
        self
    }

    /// Registers `callback` to run on the next pass only.
    pub fn once(&self, callback: Callback<Self>) -> &Self {
        self.enqueue(callback, true);
        self
    }

    fn enqueue(&self, callback: Callback<Self>, run_once: bool) {
        if self.dead.get() {
            wwarn!(run_once, "callback registered on a dead watcher");
            return;
        }
        self.queue.borrow_mut().insert(callback, run_once);
    }

    /// Returns `true` if `callback` was queued and has been removed.
    pub fn remove(&self, callback: &Callback<Self>) -> bool {
        self.queue.borrow_mut().remove(callback)
    }

    /// Removes the callback currently being invoked, if any.
    pub fn remove_current_callback(&self) -> bool {
        let current = self.current.borrow_mut().take();
        match current {
            Some(callback) => {
                self.remove(&callback);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, callback: &Callback<Self>) -> bool {
        self.queue.borrow().contains(callback)
    }

    pub fn callback_count(&self) -> usize {
        self.queue.borrow().len()
    }

    // --- geometry -----------------------------------------------------------------------------

    /// Geometry of `element` in the current pass, measured at most once per pass.
    pub fn rect(&self, element: &L::Element) -> Geometry {
        let key = self.layout.key(element);
        self.cache.rect(&key, || self.layout.measure(element))
    }

    /// Geometry of `element` from the previous pass, or `None` if it was not measured then.
    pub fn prev_rect(&self, element: &L::Element) -> Option<Geometry> {
        let key = self.layout.key(element);
        self.cache.prev_rect(&key)
    }

    /// Geometry of the document root.
    pub fn viewport_rect(&self) -> Geometry {
        self.rect(self.layout.document_root())
    }

    pub fn viewport(&self) -> Size {
        self.viewport.get()
    }

    /// Whether any part of `element` is inside the viewport, and, with `min_percent`, whether
    /// at least that share of it is visible.
    pub fn in_viewport(&self, element: &L::Element, min_percent: Option<f64>) -> bool {
        let rect = self.rect(element);
        if !visibility::is_in_viewport(&rect, self.viewport()) {
            return false;
        }
        match min_percent {
            Some(min) => self.percent_in_viewport(element) >= min,
            None => true,
        }
    }

    pub fn pixels_in_viewport(&self, element: &L::Element) -> f64 {
        visibility::pixels_in_viewport(&self.rect(element), self.viewport())
    }

    /// Visible share of `element` in `[0, 1]`, rounded to `percent_precision` decimal places.
    ///
    /// The denominator is `min(viewport height, element height)`.
    pub fn percent_in_viewport(&self, element: &L::Element) -> f64 {
        let raw = visibility::percent_in_viewport(&self.rect(element), self.viewport());
        self.options.round_percent(raw)
    }

    /// Share of the viewport height covered by `element`, rounded like
    /// [`percent_in_viewport`](Self::percent_in_viewport).
    pub fn percent_covering_viewport(&self, element: &L::Element) -> f64 {
        let raw = visibility::percent_covering_viewport(&self.rect(element), self.viewport());
        self.options.round_percent(raw)
    }

    pub fn covering_viewport(&self, element: &L::Element) -> Coverage {
        visibility::coverage(&self.rect(element), self.viewport())
    }

    // --- scroll state -------------------------------------------------------------------------

    pub fn timestamp(&self) -> f64 {
        self.timestamp.get()
    }

    pub fn prev_timestamp(&self) -> f64 {
        self.prev_timestamp.get()
    }

    /// Milliseconds between the current and the previous pass.
    pub fn time_diff(&self) -> f64 {
        self.timestamp.get() - self.prev_timestamp.get()
    }

    pub fn at_top(&self) -> bool {
        self.layout.scroll_metrics().root_scroll_top <= 0.0
    }

    /// Within one pixel of the bottom, to absorb sub-pixel scroll offsets.
    pub fn at_bottom(&self) -> bool {
        let m = self.layout.scroll_metrics();
        (m.root_scroll_height - m.root_scroll_top - m.root_client_height).abs() < 1.0
    }

    /// Horizontal scroll offset of the target, less its left border.
    pub fn scroll_left(&self) -> i32 {
        let m = self.layout.scroll_metrics();
        m.scroll_left as i32 - m.client_left as i32
    }

    /// Vertical scroll offset of the target, less its top border.
    pub fn scroll_top(&self) -> i32 {
        let m = self.layout.scroll_metrics();
        m.scroll_top as i32 - m.client_top as i32
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            scroll_left: self.scroll_left() as f64,
            scroll_top: self.scroll_top() as f64,
            at_top: self.at_top(),
            at_bottom: self.at_bottom(),
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            timestamp: self.timestamp(),
            prev_timestamp: self.prev_timestamp(),
            viewport: self.viewport(),
            scroll: self.scroll_state(),
        }
    }

    // --- teardown -----------------------------------------------------------------------------

    /// Cancels any pending frame and drops every registered callback.
    ///
    /// The watcher ignores all further events and frame ticks. A pass that is already running
    /// completes, skipping callbacks it has not reached yet. Calling `die` again does nothing.
    pub fn die(&self) {
        if self.dead.replace(true) {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.pending_event.set(None);
        let queue = self.queue.replace(CallbackQueue::new());
        let current = self.current.borrow_mut().take();
        wdebug!(callbacks = queue.len(), passes = self.passes.get(), "ScrollWatcher::die");
        drop(queue);
        drop(current);
    }
}

impl<L: Layout, S: FrameScheduler> Drop for ScrollWatcher<L, S> {
    fn drop(&mut self) {
        self.die();
    }
}

impl<L: Layout, S: FrameScheduler> core::fmt::Debug for ScrollWatcher<L, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollWatcher")
            .field("state", &self.state())
            .field("callbacks", &self.callback_count())
            .field("viewport", &self.viewport.get())
            .field("timestamp", &self.timestamp.get())
            .field("prev_timestamp", &self.prev_timestamp.get())
            .field("passes", &self.passes.get())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

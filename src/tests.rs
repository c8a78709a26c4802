use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct El(u32);

const ROOT: El = El(0);

struct MockLayout {
    root: El,
    rects: RefCell<HashMap<u32, Geometry>>,
    reads: Cell<usize>,
    viewport: Cell<Size>,
    metrics: Cell<ScrollMetrics>,
}

impl MockLayout {
    fn new(width: f64, height: f64) -> Self {
        let layout = Self {
            root: ROOT,
            rects: RefCell::new(HashMap::new()),
            reads: Cell::new(0),
            viewport: Cell::new(Size::new(width, height)),
            metrics: Cell::new(ScrollMetrics::default()),
        };
        layout.place(ROOT, Geometry::from_box(0.0, 0.0, width, height * 10.0));
        layout
    }

    fn place(&self, el: El, rect: Geometry) {
        self.rects.borrow_mut().insert(el.0, rect);
    }
}

impl Layout for MockLayout {
    type Element = El;
    type Key = u32;

    fn key(&self, element: &El) -> u32 {
        element.0
    }

    fn measure(&self, element: &El) -> Geometry {
        self.reads.set(self.reads.get() + 1);
        self.rects
            .borrow()
            .get(&element.0)
            .copied()
            .unwrap_or_default()
    }

    fn document_root(&self) -> &El {
        &self.root
    }

    fn viewport_size(&self) -> Size {
        self.viewport.get()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }
}

#[derive(Default)]
struct MockScheduler {
    next: Cell<i64>,
    requested: RefCell<Vec<FrameHandle>>,
    cancelled: RefCell<Vec<FrameHandle>>,
    refuse: Cell<bool>,
}

impl FrameScheduler for MockScheduler {
    fn request_frame(&self) -> Option<FrameHandle> {
        if self.refuse.get() {
            return None;
        }
        let id = self.next.get() + 1;
        self.next.set(id);
        let handle = FrameHandle::new(id);
        self.requested.borrow_mut().push(handle);
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.cancelled.borrow_mut().push(handle);
    }
}

type W = ScrollWatcher<MockLayout, MockScheduler>;

fn watcher(width: f64, height: f64) -> W {
    watcher_with(width, height, WatcherOptions::default())
}

fn watcher_with(width: f64, height: f64, options: WatcherOptions) -> W {
    ScrollWatcher::new(
        MockLayout::new(width, height),
        MockScheduler::default(),
        SharedGeometryCache::new(),
        options,
    )
}

fn scroll() -> Event {
    Event::new(EventKind::Scroll, 0.0)
}

fn requests(w: &W) -> usize {
    w.scheduler().requested.borrow().len()
}

fn counter(w: &W, once: bool) -> (Callback<W>, Rc<Cell<u32>>) {
    let hits = Rc::new(Cell::new(0u32));
    let h = Rc::clone(&hits);
    let cb: Callback<W> = Callback::new(move |_, _| h.set(h.get() + 1));
    if once {
        w.once(cb.clone());
    } else {
        w.add(cb.clone());
    }
    (cb, hits)
}

fn tick(w: &W, timestamp: f64) {
    w.handle_event(&scroll());
    w.on_frame(timestamp);
}

#[test]
fn rect_is_read_once_per_pass_across_callbacks() {
    let w = watcher(200.0, 100.0);
    let el = El(1);
    w.layout().place(el, Geometry::from_box(0.0, 50.0, 100.0, 100.0));

    let seen = Rc::new(RefCell::new(Vec::new()));
    for _ in 0..3 {
        let seen = Rc::clone(&seen);
        w.add(Callback::new(move |w: &W, _| {
            seen.borrow_mut().push(w.rect(&El(1)));
            seen.borrow_mut().push(w.rect(&El(1)));
        }));
    }

    tick(&w, 16.0);
    assert_eq!(w.layout().reads.get(), 1);
    assert_eq!(seen.borrow().len(), 6);
    assert!(seen.borrow().iter().all(|r| *r == seen.borrow()[0]));

    tick(&w, 32.0);
    assert_eq!(w.layout().reads.get(), 2);
    assert_eq!(w.cache().reads(), 2);
}

#[test]
fn prev_rect_reports_the_previous_pass() {
    let w = watcher(200.0, 100.0);
    let el = El(1);
    w.layout().place(el, Geometry::from_box(0.0, 50.0, 100.0, 100.0));

    let prev = Rc::new(RefCell::new(Vec::new()));
    let p = Rc::clone(&prev);
    w.add(Callback::new(move |w: &W, _| {
        w.rect(&El(1));
        p.borrow_mut().push(w.prev_rect(&El(1)).map(|r| r.top));
    }));

    tick(&w, 16.0);
    w.layout().place(el, Geometry::from_box(0.0, 30.0, 100.0, 100.0));
    tick(&w, 32.0);

    assert_eq!(*prev.borrow(), [None, Some(50.0)]);
    assert_eq!(w.rect(&el).top, 30.0);
    assert_eq!(w.prev_rect(&El(99)), None);
}

#[test]
fn scroll_events_coalesce_into_one_pass() {
    let w = watcher(200.0, 100.0);
    let (_, hits) = counter(&w, false);
    assert_eq!(w.state(), WatcherState::Idle);

    for _ in 0..10 {
        w.handle_event(&scroll());
        w.handle_event(&Event::new(EventKind::TouchMove, 1.0));
    }
    assert_eq!(requests(&w), 1);
    assert_eq!(w.state(), WatcherState::Pending);

    w.on_frame(16.0);
    assert_eq!(hits.get(), 1);
    assert_eq!(w.passes(), 1);
    assert_eq!(w.state(), WatcherState::Idle);

    w.handle_event(&Event::new(EventKind::PointerMove, 20.0));
    assert_eq!(requests(&w), 2);
}

#[test]
fn pass_receives_the_first_coalesced_event() {
    let w = watcher(200.0, 100.0);
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let k = Rc::clone(&kinds);
    w.add(Callback::new(move |_: &W, e: &Event| k.borrow_mut().push(e.kind)));

    w.handle_event(&Event::new(EventKind::TouchMove, 1.0));
    w.handle_event(&scroll());
    w.on_frame(16.0);
    assert_eq!(*kinds.borrow(), [EventKind::TouchMove]);
}

#[test]
fn stray_frame_tick_is_ignored() {
    let w = watcher(200.0, 100.0);
    let (_, hits) = counter(&w, false);
    w.on_frame(16.0);
    assert_eq!(hits.get(), 0);
    assert_eq!(w.timestamp(), 0.0);
}

#[test]
fn events_raised_during_a_pass_do_not_schedule_another() {
    let w = watcher(200.0, 100.0);
    let (_, hits) = counter(&w, false);
    w.add(Callback::new(|w: &W, _| {
        assert_eq!(w.state(), WatcherState::Running);
        w.handle_event(&Event::new(EventKind::Scroll, 5.0));
    }));

    tick(&w, 16.0);
    assert_eq!(hits.get(), 1);
    assert_eq!(requests(&w), 1);
    assert_eq!(w.state(), WatcherState::Idle);
}

#[test]
fn re_entrant_run_is_a_no_op() {
    let w = watcher(200.0, 100.0);
    let (_, hits) = counter(&w, false);
    w.add(Callback::new(|w: &W, e| w.run(e)));

    tick(&w, 16.0);
    assert_eq!(hits.get(), 1);
    assert_eq!(w.passes(), 1);
}

#[test]
fn frame_tick_during_a_pass_is_ignored() {
    let w = watcher(200.0, 100.0);
    let (_, hits) = counter(&w, false);
    let seen = Rc::new(Cell::new((0.0, 0.0)));
    let s = Rc::clone(&seen);
    w.add(Callback::new(move |w: &W, _| {
        w.on_frame(999.0);
        assert_eq!(w.state(), WatcherState::Running);
        s.set((w.timestamp(), w.prev_timestamp()));
    }));

    // A scroll raised after the nested tick still folds into the running pass.
    w.add(Callback::new(|w: &W, _| {
        w.handle_event(&scroll());
    }));

    tick(&w, 16.0);
    assert_eq!(seen.get(), (16.0, 0.0));
    assert_eq!(hits.get(), 1);
    assert_eq!(w.passes(), 1);
    assert_eq!(requests(&w), 1);
    assert_eq!(w.timestamp(), 16.0);
    assert_eq!(w.state(), WatcherState::Idle);
}

#[test]
fn resize_refreshes_viewport_without_a_pass() {
    let w = watcher(200.0, 100.0);
    w.layout().viewport.set(Size::new(320.0, 480.0));
    assert_eq!(w.viewport(), Size::new(200.0, 100.0));

    w.handle_event(&Event::new(EventKind::Resize, 0.0));
    assert_eq!(w.viewport(), Size::new(320.0, 480.0));
    assert_eq!(requests(&w), 0);
    assert_eq!(w.state(), WatcherState::Idle);
}

#[test]
fn resize_can_schedule_a_pass() {
    let w = watcher_with(
        200.0,
        100.0,
        WatcherOptions::new().with_resize_schedules_pass(true),
    );
    let el = El(1);
    w.layout().place(el, Geometry::from_box(0.0, 150.0, 100.0, 100.0));

    let seen = Rc::new(Cell::new(false));
    let s = Rc::clone(&seen);
    w.add(Callback::new(move |w: &W, _| s.set(w.in_viewport(&El(1), None))));

    w.layout().viewport.set(Size::new(200.0, 400.0));
    w.handle_event(&Event::new(EventKind::Resize, 0.0));
    assert_eq!(requests(&w), 1);
    w.on_frame(16.0);
    assert!(seen.get());
}

#[test]
fn initial_pass_waits_for_load_and_runs_once() {
    let w = watcher(200.0, 100.0);
    let (_, hits) = counter(&w, false);
    assert!(w.initial_pass_pending());
    assert_eq!(requests(&w), 0);

    w.handle_event(&Event::new(EventKind::Load, 0.0));
    w.handle_event(&Event::new(EventKind::PageShow, 0.0));
    w.on_frame(10.0);
    assert_eq!(hits.get(), 1);
    assert!(!w.initial_pass_pending());

    w.handle_event(&Event::new(EventKind::PageShow, 0.0));
    assert_eq!(requests(&w), 1);
}

#[test]
fn first_scroll_stands_in_for_the_initial_pass() {
    let w = watcher(200.0, 100.0);
    tick(&w, 16.0);
    assert!(!w.initial_pass_pending());

    w.handle_event(&Event::new(EventKind::Load, 20.0));
    assert_eq!(requests(&w), 1);
}

#[test]
fn next_frame_initial_pass_is_requested_at_construction() {
    let w = watcher_with(
        200.0,
        100.0,
        WatcherOptions::new().with_initial_pass(InitialPass::NextFrame),
    );
    assert_eq!(requests(&w), 1);
    assert_eq!(w.state(), WatcherState::Pending);

    let (_, hits) = counter(&w, false);
    w.on_frame(16.0);
    assert_eq!(hits.get(), 1);
    assert!(!w.initial_pass_pending());
}

#[test]
fn refused_frame_request_leaves_watcher_idle() {
    let w = watcher(200.0, 100.0);
    w.scheduler().refuse.set(true);
    w.handle_event(&scroll());
    assert_eq!(w.state(), WatcherState::Idle);

    w.scheduler().refuse.set(false);
    w.handle_event(&scroll());
    assert_eq!(w.state(), WatcherState::Pending);
}

#[test]
fn pixels_in_viewport_boundaries() {
    let w = watcher(200.0, 100.0);
    let above = El(1);
    let spanning = El(2);
    let below = El(3);
    let straddling = El(4);
    let scrolled_past = El(5);
    w.layout().place(above, Geometry::from_box(0.0, -100.0, 100.0, 100.0));
    w.layout().place(spanning, Geometry::from_box(0.0, -50.0, 100.0, 200.0));
    w.layout().place(below, Geometry::from_box(0.0, 100.0, 100.0, 100.0));
    w.layout().place(straddling, Geometry::from_box(0.0, 50.0, 100.0, 100.0));
    w.layout().place(scrolled_past, Geometry::from_box(0.0, -30.0, 100.0, 50.0));

    assert_eq!(w.rect(&above).bottom, 0.0);
    assert_eq!(w.pixels_in_viewport(&above), 0.0);
    assert_eq!(w.pixels_in_viewport(&spanning), 100.0);
    assert_eq!(w.pixels_in_viewport(&below), 0.0);
    assert_eq!(w.pixels_in_viewport(&straddling), 50.0);
    assert_eq!(w.pixels_in_viewport(&scrolled_past), 20.0);
}

#[test]
fn end_to_end_pixels_after_one_pass() {
    let w = watcher(100.0, 100.0);
    let el = El(7);
    w.layout().place(el, Geometry::from_box(0.0, 50.0, 100.0, 100.0));

    let pixels = Rc::new(Cell::new(-1.0));
    let p = Rc::clone(&pixels);
    w.add(Callback::new(move |w: &W, _| p.set(w.pixels_in_viewport(&El(7)))));
    w.handle_event(&Event::new(EventKind::Load, 0.0));
    w.on_frame(16.0);

    assert_eq!(pixels.get(), 50.0);
    assert_eq!(w.percent_in_viewport(&el), 0.5);
}

#[test]
fn in_viewport_rejects_boxes_outside_each_edge() {
    let w = watcher(200.0, 100.0);
    let left = El(1);
    let right = El(2);
    let inside = El(3);
    let flat = El(4);
    w.layout().place(left, Geometry::from_box(-50.0, 10.0, 50.0, 50.0));
    w.layout().place(right, Geometry::from_box(200.0, 10.0, 50.0, 50.0));
    w.layout().place(inside, Geometry::from_box(10.0, 10.0, 50.0, 50.0));
    w.layout().place(flat, Geometry::from_box(10.0, 10.0, 50.0, 0.0));

    assert!(!w.in_viewport(&left, None));
    assert!(!w.in_viewport(&right, None));
    assert!(w.in_viewport(&inside, None));
    assert!(w.in_viewport(&flat, None));

    let pct = w.percent_in_viewport(&flat);
    assert!(pct.is_finite());
    assert_eq!(pct, 0.0);
}

#[test]
fn in_viewport_with_min_percent() {
    let w = watcher(200.0, 100.0);
    let el = El(1);
    // 15 of 30 pixels visible.
    w.layout().place(el, Geometry::from_box(0.0, 85.0, 100.0, 30.0));

    assert!(w.in_viewport(&el, Some(0.5)));
    assert!(!w.in_viewport(&el, Some(0.51)));
}

#[test]
fn percent_in_viewport_uses_smaller_of_element_and_viewport() {
    let w = watcher(200.0, 100.0);
    let tall = El(1);
    let third = El(2);
    w.layout().place(tall, Geometry::from_box(0.0, -10.0, 100.0, 300.0));
    w.layout().place(third, Geometry::from_box(0.0, 90.0, 100.0, 30.0));

    assert_eq!(w.percent_in_viewport(&tall), 1.0);
    assert_eq!(w.percent_in_viewport(&third), 0.33);
    assert_eq!(w.percent_covering_viewport(&tall), 1.0);
    assert_eq!(w.percent_covering_viewport(&third), 0.1);

    let precise = watcher_with(200.0, 100.0, WatcherOptions::new().with_percent_precision(3));
    precise
        .layout()
        .place(third, Geometry::from_box(0.0, 90.0, 100.0, 30.0));
    assert_eq!(precise.percent_in_viewport(&third), 0.333);
}

#[test]
fn covering_viewport_per_axis() {
    let w = watcher(200.0, 100.0);
    let column = El(1);
    let banner = El(2);
    let backdrop = El(3);
    w.layout().place(column, Geometry::from_box(10.0, -10.0, 50.0, 300.0));
    w.layout().place(banner, Geometry::from_box(0.0, 10.0, 200.0, 20.0));
    w.layout().place(backdrop, Geometry::from_box(-5.0, -5.0, 300.0, 300.0));

    let c = w.covering_viewport(&column);
    assert!(c.vertical && !c.horizontal && !c.both && c.either);
    let b = w.covering_viewport(&banner);
    assert!(!b.vertical && b.horizontal && !b.both && b.either);
    let d = w.covering_viewport(&backdrop);
    assert!(d.both && d.either);
}

#[test]
fn remove_missing_callback_returns_false() {
    let w = watcher(200.0, 100.0);
    let (_, _) = counter(&w, false);
    let stranger: Callback<W> = Callback::new(|_, _| {});

    assert_eq!(w.callback_count(), 1);
    assert!(!w.remove(&stranger));
    assert_eq!(w.callback_count(), 1);
}

#[test]
fn adding_twice_keeps_one_entry() {
    let w = watcher(200.0, 100.0);
    let (cb, hits) = counter(&w, true);
    w.add(cb.clone());
    assert_eq!(w.callback_count(), 1);

    tick(&w, 16.0);
    tick(&w, 32.0);
    assert_eq!(hits.get(), 2);
    assert!(w.remove(&cb));
    assert!(!w.contains(&cb));
}

#[test]
fn once_callback_fires_once_even_when_removing_itself() {
    let w = watcher(200.0, 100.0);
    let hits = Rc::new(Cell::new(0u32));
    let h = Rc::clone(&hits);
    w.once(Callback::new(move |w: &W, _| {
        h.set(h.get() + 1);
        assert!(w.remove_current_callback());
    }));

    tick(&w, 16.0);
    tick(&w, 32.0);
    tick(&w, 48.0);
    assert_eq!(hits.get(), 1);
    assert_eq!(w.callback_count(), 0);
    assert!(!w.remove_current_callback());
}

struct SelfRemovingHandler {
    hits: Cell<u32>,
}

impl EventHandler<W> for SelfRemovingHandler {
    fn handle_event(&self, watcher: &W, _event: &Event) {
        self.hits.set(self.hits.get() + 1);
        if self.hits.get() == 2 {
            watcher.remove_current_callback();
        }
    }
}

#[test]
fn handler_objects_are_invoked_and_can_remove_themselves() {
    let w = watcher(200.0, 100.0);
    let handler = Rc::new(SelfRemovingHandler { hits: Cell::new(0) });
    let (_, plain) = counter(&w, false);
    w.add(Callback::handler(handler.clone()));
    let (_, tail) = counter(&w, false);

    for i in 1..=4 {
        tick(&w, 16.0 * i as f64);
    }
    assert_eq!(handler.hits.get(), 2);
    assert_eq!(plain.get(), 4);
    assert_eq!(tail.get(), 4);
}

#[test]
fn once_callback_leaves_queue_after_first_pass() {
    let w = watcher(200.0, 100.0);
    let (_, once_hits) = counter(&w, true);
    let (_, keep_hits) = counter(&w, false);
    assert_eq!(w.callback_count(), 2);

    tick(&w, 16.0);
    assert_eq!(w.callback_count(), 1);
    tick(&w, 32.0);

    assert_eq!(once_hits.get(), 1);
    assert_eq!(keep_hits.get(), 2);
}

#[test]
fn callbacks_removed_mid_pass_are_skipped_and_added_ones_wait() {
    let w = watcher(200.0, 100.0);
    let (victim, victim_hits) = {
        let hits = Rc::new(Cell::new(0u32));
        let h = Rc::clone(&hits);
        (Callback::<W>::new(move |_, _| h.set(h.get() + 1)), hits)
    };
    let (late, late_hits) = {
        let hits = Rc::new(Cell::new(0u32));
        let h = Rc::clone(&hits);
        (Callback::<W>::new(move |_, _| h.set(h.get() + 1)), hits)
    };

    let (v, l) = (victim.clone(), late.clone());
    w.once(Callback::new(move |w: &W, _| {
        w.remove(&v);
        w.add(l.clone());
    }));
    w.add(victim);
    let (_, tail) = counter(&w, false);

    tick(&w, 16.0);
    assert_eq!(victim_hits.get(), 0);
    assert_eq!(late_hits.get(), 0);
    assert_eq!(tail.get(), 1);

    tick(&w, 32.0);
    assert_eq!(late_hits.get(), 1);
    assert_eq!(tail.get(), 2);
}

#[test]
fn die_is_idempotent_and_cancels_pending_frame() {
    let w = watcher(200.0, 100.0);
    let (_, hits) = counter(&w, false);
    w.handle_event(&scroll());

    w.die();
    w.die();
    assert_eq!(w.state(), WatcherState::Dead);
    assert_eq!(*w.scheduler().cancelled.borrow(), [FrameHandle::new(1)]);
    assert_eq!(w.callback_count(), 0);

    w.on_frame(16.0);
    w.handle_event(&scroll());
    assert_eq!(hits.get(), 0);
    assert_eq!(requests(&w), 1);

    w.add(Callback::new(|_, _| {}));
    assert_eq!(w.callback_count(), 0);
}

#[test]
fn die_during_a_pass_skips_remaining_callbacks() {
    let w = watcher(200.0, 100.0);
    w.add(Callback::new(|w: &W, _| w.die()));
    let (_, tail) = counter(&w, false);

    tick(&w, 16.0);
    assert_eq!(tail.get(), 0);
    assert!(w.is_dead());
    assert!(!w.is_running());
}

#[test]
fn panicking_callback_does_not_wedge_the_watcher() {
    let w = watcher(200.0, 100.0);
    let boom = Rc::new(Cell::new(true));
    let b = Rc::clone(&boom);
    w.add(Callback::new(move |_: &W, _| {
        if b.get() {
            panic!("callback failure");
        }
    }));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| tick(&w, 16.0)));
    assert!(result.is_err());
    assert!(!w.is_running());
    assert_eq!(w.state(), WatcherState::Idle);

    boom.set(false);
    w.run(&scroll());
    assert_eq!(w.passes(), 1);
}

#[test]
fn time_diff_tracks_consecutive_frames() {
    let w = watcher(200.0, 100.0);
    tick(&w, 16.0);
    tick(&w, 48.5);
    assert_eq!(w.prev_timestamp(), 16.0);
    assert_eq!(w.time_diff(), 32.5);
    assert_eq!(w.frame_state().time_diff(), 32.5);
}

#[test]
fn scroll_state_reads_live_metrics() {
    let w = watcher(200.0, 100.0);
    assert!(w.at_top());

    w.layout().metrics.set(ScrollMetrics {
        scroll_left: 12.7,
        scroll_top: 900.4,
        client_left: 0.0,
        client_top: 2.0,
        root_scroll_top: 900.4,
        root_scroll_height: 1000.0,
        root_client_height: 100.0,
    });
    assert!(!w.at_top());
    assert!(w.at_bottom());
    assert_eq!(w.scroll_left(), 12);
    assert_eq!(w.scroll_top(), 898);

    let state = w.scroll_state();
    assert_eq!(state.scroll_top, 898.0);
    assert!(state.at_bottom);
}

#[test]
fn viewport_rect_measures_document_root() {
    let w = watcher(200.0, 100.0);
    let root = w.viewport_rect();
    assert_eq!(root.width, 200.0);
    assert_eq!(root.height, 1000.0);
    w.viewport_rect();
    assert_eq!(w.layout().reads.get(), 1);
}

#[test]
fn shared_cache_amortizes_reads_across_watchers() {
    let cache = SharedGeometryCache::new();
    let a = ScrollWatcher::new(
        MockLayout::new(200.0, 100.0),
        MockScheduler::default(),
        cache.clone(),
        WatcherOptions::default(),
    );
    let b = ScrollWatcher::new(
        MockLayout::new(200.0, 100.0),
        MockScheduler::default(),
        cache.clone(),
        WatcherOptions::default(),
    );
    assert!(a.cache().ptr_eq(b.cache()));

    a.layout()
        .place(El(1), Geometry::from_box(0.0, 20.0, 10.0, 10.0));
    a.rect(&El(1));
    assert_eq!(b.rect(&El(1)).top, 20.0);
    assert_eq!(b.layout().reads.get(), 0);

    // A pass on one watcher rotates the generation for both.
    tick(&a, 16.0);
    assert_eq!(cache.len(), 0);
    assert_eq!(b.prev_rect(&El(1)).map(|r| r.top), Some(20.0));
}

#[test]
fn geometry_cache_generations() {
    let mut cache = GeometryCache::<u32>::new();
    let mut reads = 0;
    let mut measure = |top: f64| {
        reads += 1;
        Geometry::from_box(0.0, top, 1.0, 1.0)
    };

    assert_eq!(cache.rect(&1, || measure(5.0)).top, 5.0);
    assert_eq!(cache.rect(&1, || measure(9.0)).top, 5.0);
    assert_eq!(cache.reads(), 1);

    cache.rotate();
    assert!(cache.is_empty());
    assert_eq!(cache.prev_rect(&1).map(|r| r.top), Some(5.0));
    assert_eq!(cache.generation(), 1);

    cache.rect(&2, || measure(1.0));
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.prev_len(), 1);
    drop(measure);
    assert_eq!(reads, 2);
}

#[test]
fn fallback_clock_paces_at_sixty_hertz() {
    let mut clock = FallbackFrameClock::new();
    let first = clock.next_frame(1000.0);
    assert_eq!(first.delay_ms, 0.0);
    assert_eq!(first.timestamp, 1000.0);

    let soon = clock.next_frame(1004.0);
    assert_eq!(soon.delay_ms, 12.0);
    assert_eq!(soon.timestamp, 1016.0);

    let late = clock.next_frame(1100.0);
    assert_eq!(late.delay_ms, 0.0);
    assert_eq!(late.timestamp, 1100.0);

    let backwards = clock.next_frame(900.0);
    assert!(backwards.timestamp > late.timestamp);
    assert_eq!(backwards.timestamp, 1116.0);

    assert_eq!(
        FallbackFrameClock::with_interval(0.0).interval_ms(),
        FallbackFrameClock::FRAME_INTERVAL_MS
    );
}

#[test]
fn event_kind_names() {
    for kind in EventKind::LISTENED.iter().chain(EventKind::READY.iter()) {
        assert_eq!(EventKind::from_name(kind.name()), Some(*kind));
    }
    assert_eq!(
        EventKind::from_name("pointermove"),
        Some(EventKind::PointerMove)
    );
    assert_eq!(EventKind::from_name("click"), None);
    assert!(EventKind::TouchMove.is_motion());
    assert!(!EventKind::Resize.is_motion());
}

// Example: drive a watcher headlessly with a fixed layout and a manual frame clock.
use std::cell::{Cell, RefCell};

use scroll_watcher::{
    Callback, Event, EventKind, FallbackFrameClock, FrameHandle, FrameScheduler, Geometry,
    Layout, ScrollMetrics, ScrollWatcher, SharedGeometryCache, Size, WatcherOptions,
};

struct Page {
    root: usize,
    scroll_top: Cell<f64>,
    boxes: Vec<(f64, f64)>, // (document top, height)
}

impl Layout for Page {
    type Element = usize;
    type Key = usize;

    fn key(&self, element: &usize) -> usize {
        *element
    }

    fn measure(&self, element: &usize) -> Geometry {
        let (top, height) = self.boxes[*element];
        Geometry::from_box(0.0, top - self.scroll_top.get(), 320.0, height)
    }

    fn document_root(&self) -> &usize {
        &self.root
    }

    fn viewport_size(&self) -> Size {
        Size::new(320.0, 480.0)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.scroll_top.get(),
            root_scroll_top: self.scroll_top.get(),
            root_scroll_height: 2000.0,
            root_client_height: 480.0,
            ..ScrollMetrics::default()
        }
    }
}

#[derive(Default)]
struct ManualFrames {
    requested: Cell<i64>,
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self) -> Option<FrameHandle> {
        self.requested.set(self.requested.get() + 1);
        Some(FrameHandle::new(self.requested.get()))
    }

    fn cancel_frame(&self, _handle: FrameHandle) {}
}

type Watcher = ScrollWatcher<Page, ManualFrames>;

fn main() {
    let page = Page {
        root: 0,
        scroll_top: Cell::new(0.0),
        boxes: vec![(0.0, 2000.0), (300.0, 200.0), (900.0, 120.0)],
    };
    let watcher = Watcher::new(
        page,
        ManualFrames::default(),
        SharedGeometryCache::new(),
        WatcherOptions::default(),
    );

    let log = RefCell::new(Vec::new());
    let log = std::rc::Rc::new(log);
    let sink = log.clone();
    watcher.add(Callback::new(move |w: &Watcher, e: &Event| {
        for el in 1..=2 {
            sink.borrow_mut().push(format!(
                "t={} kind={:?} el={el} visible={} percent={} moved={:?}",
                w.timestamp(),
                e.kind,
                w.in_viewport(&el, None),
                w.percent_in_viewport(&el),
                w.prev_rect(&el).map(|prev| prev.top - w.rect(&el).top),
            ));
        }
    }));

    let mut clock = FallbackFrameClock::new();
    let mut now = 0.0;
    for scroll_top in [0.0, 250.0, 600.0] {
        watcher.layout().scroll_top.set(scroll_top);
        // A burst of scroll events coalesces into one frame.
        for _ in 0..5 {
            watcher.handle_event(&Event::new(EventKind::Scroll, now));
        }
        let frame = clock.next_frame(now);
        now = frame.timestamp + 4.0;
        watcher.on_frame(frame.timestamp);
    }

    for line in log.borrow().iter() {
        println!("{line}");
    }
    println!(
        "frames_requested={} passes={} at_bottom={}",
        watcher.scheduler().requested.get(),
        watcher.passes(),
        watcher.at_bottom()
    );
}

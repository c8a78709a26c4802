use std::rc::Weak;

use scroll_watcher::{EventKind, InitialPass};

use crate::JsScrollWatcher;
use crate::context::initial_pass_for;
use crate::layout::viewport_extent;
use crate::scheduler::{VENDOR_PREFIXES, frame_api_names};
use crate::watcher::to_event;

#[test]
fn viewport_extent_prefers_window_size() {
    assert_eq!(viewport_extent(Some(1024.0), 1000), 1024.0);
}

#[test]
fn viewport_extent_falls_back_to_root_client_size() {
    assert_eq!(viewport_extent(Some(0.0), 1000), 1000.0);
    assert_eq!(viewport_extent(None, 768), 768.0);
}

#[test]
fn dom_event_names_map_to_kinds() {
    let e = to_event("scroll", 12.5).unwrap();
    assert_eq!(e.kind, EventKind::Scroll);
    assert_eq!(e.time_stamp, 12.5);
    assert_eq!(to_event("MSPointerMove", 0.0).unwrap().kind, EventKind::PointerMove);
    assert_eq!(to_event("pageshow", 0.0).unwrap().kind, EventKind::PageShow);
    assert!(to_event("click", 0.0).is_none());
}

#[test]
fn loaded_documents_schedule_the_initial_pass_immediately() {
    assert_eq!(initial_pass_for(true), InitialPass::NextFrame);
    assert_eq!(initial_pass_for(false), InitialPass::OnLoad);
}

#[test]
fn window_is_the_default_target() {
    assert_eq!(crate::WatchTarget::default(), crate::WatchTarget::Window);
}

#[test]
fn standard_frame_api_names_come_first() {
    let (request, cancels) = frame_api_names("");
    assert_eq!(request, "requestAnimationFrame");
    assert_eq!(cancels, ["cancelAnimationFrame"]);
    assert_eq!(VENDOR_PREFIXES, ["webkit", "moz", "ms", "o"]);
}

#[test]
fn prefixed_frame_api_names_include_legacy_cancel() {
    let (request, cancels) = frame_api_names("webkit");
    assert_eq!(request, "webkitRequestAnimationFrame");
    assert_eq!(
        cancels,
        ["webkitCancelAnimationFrame", "webkitCancelRequestAnimationFrame"]
    );
    assert_eq!(frame_api_names("moz").0, "mozRequestAnimationFrame");
}

#[test]
fn js_handle_without_a_live_watcher_reports_nothing() {
    let handle = JsScrollWatcher::new(Weak::new());
    assert!(handle.is_dead());
    assert_eq!(handle.time_diff(), 0.0);
    assert!(!handle.at_top());
    assert!(!handle.at_bottom());
    assert_eq!(handle.scroll_left(), 0);
    assert_eq!(handle.scroll_top(), 0);
    assert!(!handle.remove_current_callback());
}

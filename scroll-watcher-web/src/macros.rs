macro_rules! wtrace {
    ($($tt:tt)*) => {
        scroll_watcher::__log!(trace, "scroll_watcher_web", $($tt)*)
    };
}

macro_rules! wdebug {
    ($($tt:tt)*) => {
        scroll_watcher::__log!(debug, "scroll_watcher_web", $($tt)*)
    };
}

macro_rules! wwarn {
    ($($tt:tt)*) => {
        scroll_watcher::__log!(warn, "scroll_watcher_web", $($tt)*)
    };
}

#[doc(hidden)]
#[macro_export]
#[cfg(feature = "tracing")]
macro_rules! __log {
    ($level:ident, $target:literal, $($tt:tt)*) => {
        $crate::__tracing::$level!(target: $target, $($tt)*)
    };
}

#[doc(hidden)]
#[macro_export]
#[cfg(not(feature = "tracing"))]
macro_rules! __log {
    ($($tt:tt)*) => {};
}

macro_rules! wtrace {
    ($($tt:tt)*) => {
        $crate::__log!(trace, "scroll_watcher", $($tt)*)
    };
}

macro_rules! wdebug {
    ($($tt:tt)*) => {
        $crate::__log!(debug, "scroll_watcher", $($tt)*)
    };
}

macro_rules! wwarn {
    ($($tt:tt)*) => {
        $crate::__log!(warn, "scroll_watcher", $($tt)*)
    };
}

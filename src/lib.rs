//! A headless scroll watcher: batched viewport visibility checks driven by animation frames.
//!
//! For browser bindings (DOM layout reads, `requestAnimationFrame`, event listeners), see the
//! `scroll-watcher-web` crate.
//!
//! The core coalesces high-frequency scroll/touch/pointer events into one pass per animation
//! frame, memoizes element geometry so every callback in a pass sees the same snapshot with a
//! single layout read per element, and keeps the previous pass's snapshot for diffing.
//!
//! It is host-agnostic. An adapter is expected to provide:
//! - a [`Layout`] that measures elements and reports viewport and scroll metrics
//! - a [`FrameScheduler`] that calls [`ScrollWatcher::on_frame`] when a frame fires
//! - host events, forwarded to [`ScrollWatcher::handle_event`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;

#[macro_use]
mod macros;

mod cache;
mod callback;
mod error;
mod key;
mod layout;
mod options;
mod scheduler;
mod state;
mod types;
pub mod visibility;
mod watcher;

#[cfg(test)]
mod tests;

pub use cache::{GeometryCache, SharedGeometryCache};
pub use callback::{Callback, EventHandler};
pub use error::{Error, Result};
pub use key::ElementKey;
pub use layout::Layout;
pub use options::{InitialPass, WatcherOptions};
pub use scheduler::{FallbackFrame, FallbackFrameClock, FrameHandle, FrameScheduler};
pub use state::{FrameState, ScrollState};
pub use types::{Coverage, Event, EventKind, Geometry, ScrollMetrics, Size};
pub use watcher::{ScrollWatcher, WatcherState};

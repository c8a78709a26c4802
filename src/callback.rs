use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::Event;

/// An object that receives watcher events through a `handle_event` member.
pub trait EventHandler<W: ?Sized> {
    fn handle_event(&self, watcher: &W, event: &Event);
}

/// A registered observer: either a plain closure or an [`EventHandler`] object.
///
/// Identity is the address of the shared allocation, so clones of one `Callback` compare equal
/// and can be used to remove it again.
pub enum Callback<W: ?Sized> {
    Fn(Rc<dyn Fn(&W, &Event)>),
    Handler(Rc<dyn EventHandler<W>>),
}

impl<W: ?Sized> Callback<W> {
    pub fn new(f: impl Fn(&W, &Event) + 'static) -> Self {
        Self::Fn(Rc::new(f))
    }

    pub fn handler(handler: Rc<dyn EventHandler<W>>) -> Self {
        Self::Handler(handler)
    }

    pub fn invoke(&self, watcher: &W, event: &Event) {
        match self {
            Self::Fn(f) => f(watcher, event),
            Self::Handler(h) => h.handle_event(watcher, event),
        }
    }

    fn addr(&self) -> *const () {
        match self {
            Self::Fn(f) => Rc::as_ptr(f) as *const (),
            Self::Handler(h) => Rc::as_ptr(h) as *const (),
        }
    }

    /// Whether `self` and `other` refer to the same registered observer.
    pub fn same(&self, other: &Self) -> bool {
        core::ptr::eq(self.addr(), other.addr())
    }
}

impl<W: ?Sized> Clone for Callback<W> {
    fn clone(&self) -> Self {
        match self {
            Self::Fn(f) => Self::Fn(Rc::clone(f)),
            Self::Handler(h) => Self::Handler(Rc::clone(h)),
        }
    }
}

impl<W: ?Sized> PartialEq for Callback<W> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<W: ?Sized> Eq for Callback<W> {}

impl<W: ?Sized> core::fmt::Debug for Callback<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fn(_) => f.write_str("Callback::Fn(..)"),
            Self::Handler(_) => f.write_str("Callback::Handler(..)"),
        }
    }
}

struct QueueEntry<W: ?Sized> {
    callback: Callback<W>,
    run_once: bool,
}

/// Registered callbacks in insertion order, unique by identity.
pub(crate) struct CallbackQueue<W: ?Sized> {
    entries: Vec<QueueEntry<W>>,
}

impl<W: ?Sized> CallbackQueue<W> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts `callback`, or updates its fire-once flag if it is already queued.
    pub(crate) fn insert(&mut self, callback: Callback<W>, run_once: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.callback.same(&callback)) {
            entry.run_once = run_once;
            return;
        }
        self.entries.push(QueueEntry { callback, run_once });
    }

    pub(crate) fn remove(&mut self, callback: &Callback<W>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !e.callback.same(callback));
        self.entries.len() < before
    }

    pub(crate) fn contains(&self, callback: &Callback<W>) -> bool {
        self.entries.iter().any(|e| e.callback.same(callback))
    }

    /// `None` if `callback` is not queued.
    pub(crate) fn run_once(&self, callback: &Callback<W>) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.callback.same(callback))
            .map(|e| e.run_once)
    }

    /// Callbacks in iteration order, detached from the queue so it can change mid-pass.
    pub(crate) fn snapshot(&self) -> Vec<Callback<W>> {
        self.entries.iter().map(|e| e.callback.clone()).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<W: ?Sized> core::fmt::Debug for CallbackQueue<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CallbackQueue")
            .field("len", &self.entries.len())
            .finish()
    }
}

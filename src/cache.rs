use alloc::rc::Rc;
use core::cell::RefCell;

use crate::Geometry;
use crate::key::{ElementKey, KeyRectMap};

/// Two generations of memoized element geometry.
///
/// The current generation is write-once per element: the first [`rect`](Self::rect) call for a
/// key performs the layout read, later calls return the stored record. [`rotate`](Self::rotate)
/// moves the current generation to "previous" and starts an empty one.
///
/// Entries are keyed by element identity and never hold the element itself. Only elements
/// measured during the current and the previous pass are retained.
#[derive(Clone, Debug)]
pub struct GeometryCache<K> {
    current: KeyRectMap<K>,
    previous: KeyRectMap<K>,
    reads: u64,
    generation: u64,
}

impl<K: ElementKey> GeometryCache<K> {
    pub fn new() -> Self {
        Self {
            current: KeyRectMap::<K>::new(),
            previous: KeyRectMap::<K>::new(),
            reads: 0,
            generation: 0,
        }
    }

    /// Returns the cached geometry for `key`, calling `measure` on a miss.
    pub fn rect(&mut self, key: &K, measure: impl FnOnce() -> Geometry) -> Geometry {
        if let Some(rect) = self.current.get(key) {
            return *rect;
        }
        let rect = measure();
        self.reads = self.reads.saturating_add(1);
        self.current.insert(key.clone(), rect);
        rect
    }

    /// Returns the current-generation geometry for `key` without measuring.
    pub fn get(&self, key: &K) -> Option<Geometry> {
        self.current.get(key).copied()
    }

    /// Returns the geometry captured during the previous generation.
    pub fn prev_rect(&self, key: &K) -> Option<Geometry> {
        self.previous.get(key).copied()
    }

    pub fn rotate(&mut self) {
        self.previous = core::mem::take(&mut self.current);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Discards the current generation. The previous generation is kept.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn prev_len(&self) -> usize {
        self.previous.len()
    }

    /// Total layout reads performed through this cache.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Number of rotations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<K: ElementKey> Default for GeometryCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A geometry cache shared by every watcher observing the same document.
///
/// Cloning is cheap and yields a handle to the same cache, so layout reads made by one watcher
/// during a frame are reused by the others.
#[derive(Debug)]
pub struct SharedGeometryCache<K> {
    inner: Rc<RefCell<GeometryCache<K>>>,
}

impl<K> Clone for SharedGeometryCache<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K: ElementKey> SharedGeometryCache<K> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(GeometryCache::new())),
        }
    }

    pub fn rect(&self, key: &K, measure: impl FnOnce() -> Geometry) -> Geometry {
        if let Some(rect) = self.inner.borrow().get(key) {
            return rect;
        }
        // Measure outside the borrow: the host may re-enter the cache while reading layout.
        let rect = measure();
        let mut cache = self.inner.borrow_mut();
        cache.rect(key, || rect)
    }

    pub fn prev_rect(&self, key: &K) -> Option<Geometry> {
        self.inner.borrow().prev_rect(key)
    }

    pub fn rotate(&self) {
        self.inner.borrow_mut().rotate();
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn prev_len(&self) -> usize {
        self.inner.borrow().prev_len()
    }

    pub fn reads(&self) -> u64 {
        self.inner.borrow().reads()
    }

    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation()
    }

    /// Whether `self` and `other` are handles to the same cache.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<K: ElementKey> Default for SharedGeometryCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::Geometry;

#[cfg(feature = "std")]
pub(crate) type KeyRectMap<K> = HashMap<K, Geometry>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyRectMap<K> = BTreeMap<K, Geometry>;

/// Bound for element identity keys used by the geometry cache.
#[cfg(feature = "std")]
pub trait ElementKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ElementKey for K {}

/// Bound for element identity keys used by the geometry cache.
#[cfg(not(feature = "std"))]
pub trait ElementKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ElementKey for K {}

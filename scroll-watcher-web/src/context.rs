use js_sys::Reflect;
use scroll_watcher::{Error, InitialPass, Result, SharedGeometryCache, WatcherOptions};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::{DomLayout, DomWatcher, ElementIds, WatchTarget};

/// Per-document services shared by the watchers it creates.
///
/// Construction checks the host capabilities the watchers rely on and fails with
/// [`Error::MissingCapability`] when one is absent.
#[derive(Clone, Debug)]
pub struct WatchContext {
    window: Window,
    document: Document,
    ids: ElementIds,
    cache: SharedGeometryCache<u32>,
}

impl WatchContext {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::MissingCapability("window"))?;
        let document = window
            .document()
            .ok_or(Error::MissingCapability("document"))?;
        if !crate::has_property(window.as_ref(), "addEventListener") {
            return Err(Error::MissingCapability("addEventListener"));
        }
        let ids = ElementIds::new()?;
        wdebug!("WatchContext::new");
        Ok(Self {
            window,
            document,
            ids,
            cache: SharedGeometryCache::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn cache(&self) -> &SharedGeometryCache<u32> {
        &self.cache
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// `document.readyState == "complete"`.
    pub fn is_loaded(&self) -> bool {
        Reflect::get(&self.document, &JsValue::from_str("readyState"))
            .ok()
            .and_then(|v| v.as_string())
            .is_some_and(|state| state == "complete")
    }

    /// Defaults, with the initial pass on the next frame if the document has already loaded.
    pub fn default_options(&self) -> WatcherOptions {
        WatcherOptions::new().with_initial_pass(initial_pass_for(self.is_loaded()))
    }

    pub fn watch(&self, target: WatchTarget) -> Result<DomWatcher> {
        self.watch_with_options(target, self.default_options())
    }

    pub fn watch_with_options(
        &self,
        target: WatchTarget,
        options: WatcherOptions,
    ) -> Result<DomWatcher> {
        let layout = DomLayout::new(self.window.clone(), target, self.ids.clone())?;
        DomWatcher::new(layout, self.cache.clone(), options)
    }
}

pub(crate) fn initial_pass_for(loaded: bool) -> InitialPass {
    if loaded {
        InitialPass::NextFrame
    } else {
        InitialPass::OnLoad
    }
}

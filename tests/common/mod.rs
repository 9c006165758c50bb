//! Shared mock capabilities for integration tests.

use std::sync::{Arc, Mutex};

use deeplink_router::dispatch::{
    HandlerContext, Navigator, PrefetchCache, PrefetchError, PrefetchFuture,
};

/// Records every navigation call instead of driving a stack.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pushed_paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(op, _)| op == "push")
            .map(|(_, path)| path)
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(("push".to_string(), path.to_string()));
    }

    fn replace(&self, path: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(("replace".to_string(), path.to_string()));
    }
}

/// Navigator that panics on use; exercises the dispatch failure boundary.
#[allow(dead_code)]
pub struct PanickingNavigator;

impl Navigator for PanickingNavigator {
    fn push(&self, _path: &str) {
        panic!("navigation stack unavailable");
    }

    fn replace(&self, _path: &str) {
        panic!("navigation stack unavailable");
    }
}

/// What the scripted cache does with each prefetch.
#[derive(Clone, Copy)]
pub enum CacheMode {
    Warm,
    Fail,
}

/// Prefetch capability with scripted behavior and a call log.
pub struct ScriptedCache {
    mode: CacheMode,
    keys: Mutex<Vec<String>>,
}

impl ScriptedCache {
    pub fn new(mode: CacheMode) -> Self {
        Self {
            mode,
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl PrefetchCache for ScriptedCache {
    fn prefetch(&self, key: &str) -> PrefetchFuture<'_> {
        self.keys.lock().unwrap().push(key.to_string());
        let mode = self.mode;
        let key = key.to_string();
        Box::pin(async move {
            match mode {
                CacheMode::Warm => Ok(()),
                CacheMode::Fail => Err(PrefetchError(format!("backend unavailable for {key}"))),
            }
        })
    }
}

/// Context over a recording navigator and a scripted cache.
pub fn recording_context(
    mode: CacheMode,
    authenticated: bool,
) -> (Arc<RecordingNavigator>, Arc<ScriptedCache>, HandlerContext) {
    let navigator = Arc::new(RecordingNavigator::default());
    let cache = Arc::new(ScriptedCache::new(mode));
    let context = HandlerContext::new(navigator.clone(), cache.clone(), authenticated);
    (navigator, cache, context)
}

//! Shared application state populated during startup.
//!
//! The context is passed explicitly to whichever component needs the
//! bootstrap document; there is no process-wide global.

use serde_json::Value;
use std::sync::RwLock;

/// Application context holding the bootstrap document slot.
///
/// The slot is unset until the loader stores a successfully fetched
/// document; it is never cleared afterwards.
#[derive(Debug, Default)]
pub struct AppContext {
    basic: RwLock<Option<Value>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the bootstrap document. Startup normally runs once; a repeated
    /// load replaces the previous document and is logged.
    pub fn set_basic(&self, value: Value) {
        let mut slot = self.basic.write().unwrap();
        if slot.is_some() {
            tracing::warn!("bootstrap document replaced by a repeated load");
        }
        *slot = Some(value);
    }

    /// The bootstrap document, or None while startup has not completed.
    pub fn basic(&self) -> Option<Value> {
        self.basic.read().unwrap().clone()
    }

    /// True once a bootstrap document has been stored.
    pub fn has_basic(&self) -> bool {
        self.basic.read().unwrap().is_some()
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::Message;

/// Per-session messages that survive one redirect and are drained on read.
#[derive(Clone, Debug, Default)]
pub struct FlashStore {
    inner: Arc<Mutex<HashMap<String, Vec<Message>>>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, session_id: &str, message: Message) {
        let mut store = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        store.entry(session_id.to_string()).or_default().push(message);
    }

    pub fn take(&self, session_id: &str) -> Vec<Message> {
        let mut store = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        store.remove(session_id).unwrap_or_default()
    }
}

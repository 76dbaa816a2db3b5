use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::Value;

struct Entry {
    payload: Value,
    fetched_at: Instant,
}

/// In-memory cache of raw upstream payloads, keyed by request path.
///
/// Freshness is evaluated at read time. Stale entries are never swept;
/// they stay in the map until the next successful fetch for the same key
/// overwrites them, so memory grows with the number of distinct keys seen.
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The cached payload for `key`, if it is still within the freshness
    /// window.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        (entry.fetched_at.elapsed() < self.ttl).then(|| entry.payload.clone())
    }

    /// Store `payload` under `key`, replacing any previous entry.
    pub fn insert(&self, key: &str, payload: Value) {
        let entry = Entry {
            payload,
            fetched_at: Instant::now(),
        };
        self.entries.lock().unwrap().insert(key.to_string(), entry);
    }
}

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A successful upstream body together with the time it was received.
#[derive(Debug, Clone)]
struct CachedBody {
    body: String,
    fetched_at: DateTime<Utc>,
}

/// Time-bounded memo of upstream bodies, keyed by the full request URL.
///
/// An entry is served while it is younger than `ttl`; a `ttl` of zero disables
/// caching entirely. Only successful bodies are ever stored.
#[derive(Debug)]
pub(crate) struct ResponseCache {
    ttl: TimeDelta,
    entries: RwLock<HashMap<String, CachedBody>>,
}

impl ResponseCache {
    pub(crate) fn new(ttl: TimeDelta) -> Self {
        Self { ttl, entries: RwLock::new(HashMap::new()) }
    }

    pub(crate) fn ttl(&self) -> TimeDelta { self.ttl }

    fn is_fresh(&self, entry: &CachedBody, now: DateTime<Utc>) -> bool {
        now - entry.fetched_at < self.ttl
    }

    /// Returns the cached body for `url` if it has not expired at `now`.
    pub(crate) async fn lookup(&self, url: &str, now: DateTime<Utc>) -> Option<String> {
        if self.ttl <= TimeDelta::zero() {
            return None;
        }
        let entries = self.entries.read().await;
        entries.get(url).filter(|e| self.is_fresh(e, now)).map(|e| e.body.clone())
    }

    /// Stores `body` for `url`, replacing any previous entry and dropping expired ones.
    pub(crate) async fn store(&self, url: &str, body: &str, now: DateTime<Utc>) {
        if self.ttl <= TimeDelta::zero() {
            return;
        }
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| self.is_fresh(e, now));
        entries.insert(url.to_string(), CachedBody { body: body.to_string(), fetched_at: now });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://api.open-notify.org/iss-now.json";

    fn t0() -> DateTime<Utc> { DateTime::from_timestamp(1_700_000_000, 0).unwrap() }

    #[tokio::test]
    async fn serves_body_within_ttl_only() {
        let cache = ResponseCache::new(TimeDelta::seconds(60));
        assert_eq!(cache.lookup(URL, t0()).await, None);

        cache.store(URL, "{\"a\":1}", t0()).await;
        assert_eq!(cache.lookup(URL, t0() + TimeDelta::seconds(59)).await.as_deref(), Some("{\"a\":1}"));
        assert_eq!(cache.lookup(URL, t0() + TimeDelta::seconds(60)).await, None);
    }

    #[tokio::test]
    async fn entries_are_keyed_by_url() {
        let cache = ResponseCache::new(TimeDelta::seconds(60));
        cache.store(URL, "position", t0()).await;
        assert_eq!(cache.lookup("http://api.open-notify.org/astros.json", t0()).await, None);
    }

    #[tokio::test]
    async fn newer_store_replaces_older_entry() {
        let cache = ResponseCache::new(TimeDelta::seconds(60));
        cache.store(URL, "old", t0()).await;
        cache.store(URL, "new", t0() + TimeDelta::seconds(30)).await;
        assert_eq!(cache.lookup(URL, t0() + TimeDelta::seconds(80)).await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn zero_ttl_disables_caching() {
        let cache = ResponseCache::new(TimeDelta::zero());
        cache.store(URL, "body", t0()).await;
        assert_eq!(cache.lookup(URL, t0()).await, None);
    }
}

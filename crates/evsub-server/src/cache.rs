//! Process-lifetime cache of successful subsidy extractions.
//!
//! All entries share one generation timestamp: a lookup is a hit only while
//! the last successful `put` (for any key) is younger than the TTL. A `put`
//! restarts the generation without clearing older keys, so entries written in
//! an earlier generation become servable again whenever any key is refreshed.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheHit {
    pub amount_won: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Generation {
    updated_at: Option<DateTime<Utc>>,
    entries: HashMap<(String, String), u64>,
}

#[derive(Debug)]
pub struct ResultCache {
    ttl: TimeDelta,
    inner: Mutex<Generation>,
}

impl ResultCache {
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            inner: Mutex::new(Generation::default()),
        }
    }

    /// Builds a cache from a TTL in seconds, saturating absurd values.
    #[must_use]
    pub fn with_ttl_secs(ttl_secs: u64) -> Self {
        let secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self::new(TimeDelta::try_seconds(secs).unwrap_or(TimeDelta::MAX))
    }

    pub async fn get(&self, region: &str, trim: &str) -> Option<CacheHit> {
        self.get_at(region, trim, Utc::now()).await
    }

    /// Upserts the amount and starts a new generation. Returns the new
    /// generation timestamp.
    pub async fn put(&self, region: &str, trim: &str, amount_won: u64) -> DateTime<Utc> {
        self.put_at(region, trim, amount_won, Utc::now()).await
    }

    pub async fn get_at(&self, region: &str, trim: &str, now: DateTime<Utc>) -> Option<CacheHit> {
        let generation = self.inner.lock().await;
        let updated_at = generation.updated_at?;
        if now.signed_duration_since(updated_at) >= self.ttl {
            return None;
        }
        let amount_won = *generation
            .entries
            .get(&(region.to_owned(), trim.to_owned()))?;
        Some(CacheHit {
            amount_won,
            updated_at,
        })
    }

    pub async fn put_at(
        &self,
        region: &str,
        trim: &str,
        amount_won: u64,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        let mut generation = self.inner.lock().await;
        generation.updated_at = Some(now);
        generation
            .entries
            .insert((region.to_owned(), trim.to_owned()), amount_won);
        now
    }
}

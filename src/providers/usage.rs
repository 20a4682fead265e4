//! In-memory usage/entitlement service with a daily request quota.
//!
//! Persistence is out of scope for this core; the trait seam lets a real
//! entitlement backend slot in without touching the engine.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;

use crate::providers::{UsageDecision, UsageService};
use crate::types::UsageInfo;

pub const DEFAULT_DAILY_LIMIT: u32 = 50;

struct Counters {
    day: NaiveDate,
    counts: HashMap<String, u32>,
}

pub struct InMemoryUsageService {
    daily_limit: u32,
    state: Mutex<Counters>,
}

impl InMemoryUsageService {
    pub fn new(daily_limit: u32) -> Self {
        Self {
            daily_limit,
            state: Mutex::new(Counters {
                day: Utc::now().date_naive(),
                counts: HashMap::new(),
            }),
        }
    }

    fn key(requester: &str, action: &str) -> String {
        format!("{requester}:{action}")
    }

    fn info(&self, used: u32) -> UsageInfo {
        UsageInfo {
            requests_used: used,
            daily_limit: self.daily_limit,
            remaining: self.daily_limit.saturating_sub(used),
        }
    }
}

impl Default for InMemoryUsageService {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_LIMIT)
    }
}

#[async_trait]
impl UsageService for InMemoryUsageService {
    async fn can_perform(&self, requester: &str, action: &str) -> Result<UsageDecision> {
        let mut state = self.state.lock().await;
        let today = Utc::now().date_naive();
        if state.day != today {
            state.day = today;
            state.counts.clear();
        }
        let used = *state.counts.get(&Self::key(requester, action)).unwrap_or(&0);
        Ok(UsageDecision {
            allowed: used < self.daily_limit,
            usage: self.info(used),
        })
    }

    async fn increment(&self, requester: &str, action: &str) -> Result<UsageInfo> {
        let mut state = self.state.lock().await;
        let entry = state.counts.entry(Self::key(requester, action)).or_insert(0);
        *entry += 1;
        let used = *entry;
        Ok(self.info(used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn quota_exhausts_after_limit() {
        let service = InMemoryUsageService::new(2);
        for _ in 0..2 {
            let decision = service.can_perform("angler", "recommend").await.unwrap();
            assert!(decision.allowed);
            service.increment("angler", "recommend").await.unwrap();
        }
        let decision = service.can_perform("angler", "recommend").await.unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.usage.remaining, 0);
    }

    #[tokio::test]
    async fn requesters_are_isolated() {
        let service = InMemoryUsageService::new(1);
        service.increment("a", "recommend").await.unwrap();
        let other = service.can_perform("b", "recommend").await.unwrap();
        assert!(other.allowed);
    }
}

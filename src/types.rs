use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::FlyPattern;
use crate::conditions::ConditionInput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub fly: FlyPattern,
    pub confidence: u8,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageInfo {
    pub requests_used: u32,
    pub daily_limit: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub conditions: ConditionInput,
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub suggestions: Vec<Suggestion>,
    pub usage: Option<UsageInfo>,
    pub can_perform: bool,
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResponse {
    pub fn success(
        suggestions: Vec<Suggestion>,
        usage: Option<UsageInfo>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            suggestions,
            usage,
            can_perform: true,
            error: None,
            generated_at: now,
        }
    }

    pub fn failure(error: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            suggestions: Vec::new(),
            usage: None,
            can_perform: false,
            error: Some(error.into()),
            generated_at: now,
        }
    }

    pub fn quota_exhausted(usage: UsageInfo, now: DateTime<Utc>) -> Self {
        Self {
            suggestions: Vec::new(),
            usage: Some(usage),
            can_perform: false,
            error: None,
            generated_at: now,
        }
    }
}

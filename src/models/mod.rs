use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Check-in/check-out pair for one run. Derived once at startup so every
/// target sees the same dates even if the run crosses midnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateWindow {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

impl DateWindow {
    /// One-night window starting today (UTC).
    pub fn tonight() -> Self {
        Self::starting(Utc::now().date_naive())
    }

    /// One-night window starting on the given date.
    pub fn starting(checkin: NaiveDate) -> Self {
        Self {
            checkin,
            checkout: checkin + Duration::days(1),
        }
    }

    pub fn checkin_str(&self) -> String {
        self.checkin.format("%Y-%m-%d").to_string()
    }

    pub fn checkout_str(&self) -> String {
        self.checkout.format("%Y-%m-%d").to_string()
    }
}

/// Outcome for a single booking site.
///
/// Either `price` carries the lowest number found (it may still be `None`
/// when the page rendered but nothing plausible matched), or `error`
/// carries a short diagnostic and `price` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResult {
    pub site: String,
    pub name: String,
    pub url: String,
    pub price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SiteResult {
    pub fn ok(site: &str, name: &str, url: String, price: Option<u32>) -> Self {
        Self {
            site: site.to_string(),
            name: name.to_string(),
            url,
            price,
            error: None,
        }
    }

    pub fn failed(site: &str, name: &str, url: String, error: String) -> Self {
        Self {
            site: site.to_string(),
            name: name.to_string(),
            url,
            price: None,
            error: Some(error),
        }
    }
}

/// The single JSON artifact summarizing one run. Each run fully replaces
/// the previous snapshot; history is the file store's problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub updated_at: DateTime<Utc>,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub results: Vec<SiteResult>,
}

impl RunSnapshot {
    pub fn new(window: DateWindow, results: Vec<SiteResult>) -> Self {
        Self {
            updated_at: Utc::now(),
            checkin: window.checkin,
            checkout: window.checkout,
            results,
        }
    }

    /// Write the snapshot as pretty-printed JSON, replacing any previous
    /// file atomically (temp file + rename in the same directory).
    pub async fn persist(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        Ok(())
    }
}

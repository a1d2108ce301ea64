use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::AvatarStyle;

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

pub fn validate_uuid(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}

/// Hands out fresh identifiers and remembers every one it issued.
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark ids that already exist (seed data) so they are never reissued.
    pub fn reserve<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.issued.extend(ids.into_iter().map(str::to_string));
    }

    pub fn next_id(&mut self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

/// Deterministic placeholder-image URL keyed by `name`.
pub fn avatar_url(style: &AvatarStyle, name: &str) -> String {
    let mut url = format!(
        "{}?name={}&background={}&color={}",
        style.base_url,
        urlencoding::encode(name),
        style.background,
        style.foreground
    );
    if let Some(size) = style.size {
        url.push_str(&format!("&size={}", size));
    }
    url
}

pub fn parse_timestamp(timestamp: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("Invalid timestamp {:?}: {}", timestamp, e))
}

/// Coarse relative age of `timestamp` as seen at `now`.
pub fn format_time_ago(timestamp: &str, now: DateTime<Utc>) -> anyhow::Result<String> {
    let created = parse_timestamp(timestamp)?;
    let minutes = (now - created).num_minutes();

    Ok(if minutes < 1 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{} mins ago", minutes)
    } else if minutes < 1440 {
        format!("{} hours ago", minutes / 60)
    } else {
        format!("{} days ago", minutes / 1440)
    })
}

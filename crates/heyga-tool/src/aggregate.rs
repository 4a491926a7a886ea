//! Row aggregation
//!
//! One report row per unique combination of the six dimensions comes
//! back from the service; callers want one row per value of a single
//! dimension with the view counts summed.

use heyga_core::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single analytics record: six descriptive dimensions and a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyticsRow {
    pub url: String,
    pub title: String,
    pub referrer: String,
    pub city: String,
    pub country: String,
    pub browser: String,
    pub views: u64,
}

/// The dimension to group rows by.
///
/// The browser dimension is carried on every row but is not offered as
/// a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Url,
    Title,
    Referrer,
    City,
    Country,
}

impl GroupKey {
    pub const ALL: [GroupKey; 5] = [
        GroupKey::Url,
        GroupKey::Title,
        GroupKey::Referrer,
        GroupKey::City,
        GroupKey::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKey::Url => "url",
            GroupKey::Title => "title",
            GroupKey::Referrer => "referrer",
            GroupKey::City => "city",
            GroupKey::Country => "country",
        }
    }

    fn field<'a>(&self, row: &'a AnalyticsRow) -> &'a str {
        match self {
            GroupKey::Url => &row.url,
            GroupKey::Title => &row.title,
            GroupKey::Referrer => &row.referrer,
            GroupKey::City => &row.city,
            GroupKey::Country => &row.country,
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GroupKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                Error::config_error(format!(
                    "unknown group key '{s}', expected one of: url, title, referrer, city, country"
                ))
            })
    }
}

/// Group rows by the value of one dimension and sum views per group.
///
/// Groups appear in the order their key value first occurred. Rows whose
/// key field is empty or whitespace-only are skipped entirely; their
/// views contribute to no group. The first row of a group donates all
/// non-views fields, later rows only add to the sum — callers relying
/// on drop-in compatibility depend on this.
pub fn reduce_rows_by(rows: &[AnalyticsRow], key: GroupKey) -> Vec<AnalyticsRow> {
    let mut groups: Vec<AnalyticsRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let group_key = key.field(row);
        if group_key.trim().is_empty() {
            continue;
        }

        let slot = *index.entry(group_key.to_string()).or_insert_with(|| {
            groups.push(AnalyticsRow {
                views: 0,
                ..row.clone()
            });
            groups.len() - 1
        });

        groups[slot].views += row.views;
    }

    groups
}

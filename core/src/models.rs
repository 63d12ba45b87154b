use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking mode accepted by the top-feeds endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedMode {
    #[default]
    Hot,
    New,
    TopYear,
    TopMonth,
    TopWeek,
    TopToday,
    TopAllTime,
}

impl FeedMode {
    pub const ALL: [FeedMode; 7] = [
        FeedMode::Hot,
        FeedMode::New,
        FeedMode::TopYear,
        FeedMode::TopMonth,
        FeedMode::TopWeek,
        FeedMode::TopToday,
        FeedMode::TopAllTime,
    ];

    /// Path segment used by the upstream API
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedMode::Hot => "hot",
            FeedMode::New => "new",
            FeedMode::TopYear => "top_year",
            FeedMode::TopMonth => "top_month",
            FeedMode::TopWeek => "top_week",
            FeedMode::TopToday => "top_today",
            FeedMode::TopAllTime => "top_all_time",
        }
    }
}

impl fmt::Display for FeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedMode::ALL
            .iter()
            .find(|mode| mode.as_str() == s)
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = FeedMode::ALL.iter().map(|m| m.as_str()).collect();
                format!("unknown feed mode `{}` (expected one of: {})", s, names.join(", "))
            })
    }
}

//! Relative posted-time parsing ("5 minutes ago" → minutes).

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_RELATIVE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(second|minute|hour|day|week|month)s?\s*ago").unwrap()
});

/// Posted time of a job, either converted to minutes ago or kept verbatim
/// when the text is not a recognized relative time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostedTime {
    Minutes(i64),
    Raw(String),
}

impl PostedTime {
    pub fn minutes(&self) -> Option<i64> {
        match self {
            PostedTime::Minutes(m) => Some(*m),
            PostedTime::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, PostedTime::Raw(_))
    }

    /// Ascending by minutes; raw values sort after every numeric value and
    /// compare equal to each other so a stable sort keeps their order.
    pub fn cmp_minutes(&self, other: &PostedTime) -> Ordering {
        match (self.minutes(), other.minutes()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for PostedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostedTime::Minutes(m) => write!(f, "{}", m),
            PostedTime::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

fn unit_minutes(unit: &str) -> Option<f64> {
    match unit {
        "second" => Some(1.0 / 60.0),
        "minute" => Some(1.0),
        "hour" => Some(60.0),
        "day" => Some(60.0 * 24.0),
        "week" => Some(60.0 * 24.0 * 7.0),
        // 30-day month
        "month" => Some(60.0 * 24.0 * 30.0),
        _ => None,
    }
}

/// Converts a relative time description into whole minutes ago.
///
/// Text that does not contain `<n> <unit> ago` is returned unchanged as
/// [`PostedTime::Raw`]. Values too large to represent are treated the same.
pub fn parse_posted_minutes(raw: &str) -> PostedTime {
    let Some(caps) = RE_RELATIVE_TIME.captures(raw) else {
        return PostedTime::Raw(raw.to_string());
    };

    let value = match caps[1].parse::<u64>() {
        Ok(v) => v,
        Err(e) => {
            log::debug!("Posted time value out of range in '{}': {}", raw, e);
            return PostedTime::Raw(raw.to_string());
        }
    };

    let unit = caps[2].to_lowercase();
    let Some(multiplier) = unit_minutes(&unit) else {
        return PostedTime::Raw(raw.to_string());
    };

    let minutes = (value as f64 * multiplier).round();
    if !minutes.is_finite() || minutes >= i64::MAX as f64 {
        log::debug!("Posted time '{}' overflows minute range", raw);
        return PostedTime::Raw(raw.to_string());
    }

    PostedTime::Minutes(minutes as i64)
}

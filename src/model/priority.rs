use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Urgency of a todo item.
///
/// Variants are declared from least to most urgent, so the derived `Ord`
/// gives `High > Medium > Low`. The canonical display string of each level
/// is its name, and unknown strings always resolve to [`Priority::Medium`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All levels in declaration order. This is not the ranking order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Canonical display strings in declaration order, for selection menus.
    pub fn all_values() -> [&'static str; 3] {
        Self::ALL.map(Priority::as_str)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Total conversion from optional text.
    ///
    /// Matching is exact and case-sensitive. Anything else, including an
    /// empty string or `None`, yields `Medium`.
    pub fn from_string(value: Option<&str>) -> Self {
        match value {
            Some("Low") => Priority::Low,
            Some("High") => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Sort key where lower means more urgent: High 0, Medium 1, Low 2.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Rank of a raw priority string as stored in a record.
    pub fn rank_of(value: &str) -> u8 {
        Self::from_string(Some(value)).rank()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_string(Some(s)))
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::from_string(Some(&value))
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, serialized by its three-letter short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based position in the calendar (`Jan` is 0).
    pub fn index0(self) -> usize {
        self as usize
    }

    /// Returns the month at a zero-based calendar position, wrapping modulo 12.
    pub fn from_index0(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Converts a chrono month number (1..=12).
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Month {
    type Err = CoreError;

    /// Accepts exactly the short names produced by `short_name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.short_name() == trimmed)
            .ok_or_else(|| {
                CoreError::Validation("month".to_string(), format!("unknown month `{trimmed}`"))
            })
    }
}

/// A named window selector over the period series.
///
/// Parsing is permissive: any token that is not recognized selects the whole
/// series, exactly like `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeToken {
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    Ytd,
    #[default]
    All,
}

impl RangeToken {
    pub const ALL_TOKENS: [RangeToken; 5] = [
        RangeToken::Last7Days,
        RangeToken::Last30Days,
        RangeToken::Last90Days,
        RangeToken::Ytd,
        RangeToken::All,
    ];

    /// Parses a boundary token, falling back to `All` for anything unrecognized.
    pub fn parse_lenient(token: &str) -> Self {
        match token.trim() {
            "7d" => RangeToken::Last7Days,
            "30d" => RangeToken::Last30Days,
            "90d" => RangeToken::Last90Days,
            "ytd" => RangeToken::Ytd,
            _ => RangeToken::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RangeToken::Last7Days => "7d",
            RangeToken::Last30Days => "30d",
            RangeToken::Last90Days => "90d",
            RangeToken::Ytd => "ytd",
            RangeToken::All => "all",
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeToken {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// Trend direction of a KPI relative to the previous period.
///
/// `Flat` marks a change that could not be derived (zero baseline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Flat => '→',
        }
    }
}

/// Colour scheme preference of the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interprets a stored preference. Only `"light"` selects the light theme.
    pub fn from_stored(value: &str) -> Self {
        if value.trim() == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Productivity status of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Productivity {
    High,
    Medium,
}

impl Productivity {
    pub fn label(self) -> &'static str {
        match self {
            Productivity::High => "High",
            Productivity::Medium => "Medium",
        }
    }
}

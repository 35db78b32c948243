//! View models handed to the team member list widget.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::team_member::{StatusSummary, TeamMember};
use crate::models::team_member::MemberPage;

/// Rows per page when the caller does not ask for a specific size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Role shown for every member; the backend does not track roles yet.
pub const MEMBER_ROLE: &str = "maintainer";

/// Parameters of a single page fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    /// Opaque filter object forwarded to the backend.
    pub filters: Option<Value>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            filters: None,
        }
    }
}

impl PageQuery {
    pub fn new(page: usize) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// A member row as rendered by the list widget.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub avatar: String,
    pub username: String,
}

impl From<TeamMember> for ViewMember {
    fn from(member: TeamMember) -> Self {
        let username = member.username().to_string();
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            phone: member.phone,
            role: MEMBER_ROLE.to_string(),
            status: member.status,
            avatar: String::new(),
            username,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

/// Aggregate tile shown above the member table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub title: String,
    pub stats: String,
    pub avatar_icon: String,
    pub avatar_color: String,
    pub trend: Trend,
    pub trend_number: String,
}

impl StatSummary {
    fn tile(title: &str, count: u64, avatar_icon: &str, avatar_color: &str) -> Self {
        Self {
            title: title.to_string(),
            stats: count.to_string(),
            avatar_icon: avatar_icon.to_string(),
            avatar_color: avatar_color.to_string(),
            trend: Trend::Neutral,
            trend_number: "100%".to_string(),
        }
    }

    fn with_share(mut self, count: u64, total: u64) -> Self {
        let (trend, trend_number) = share_of(count, total);
        self.trend = trend;
        self.trend_number = trend_number;
        self
    }

    /// The four fixed tiles: all, active, pending and inactive users.
    pub fn tiles(total: u64, summary: &StatusSummary) -> Vec<Self> {
        vec![
            Self::tile("All Users", total, "ri-user-add-line", "error"),
            Self::tile("Active Users", summary.active, "ri-user-follow-line", "success")
                .with_share(summary.active, total),
            Self::tile("Pending Users", summary.pending, "ri-user-search-line", "warning")
                .with_share(summary.pending, total),
            Self::tile("Inactive Users", summary.inactive, "ri-user-search-line", "secondary")
                .with_share(summary.inactive, total),
        ]
    }
}

/// Percentage of `count` in `total` with two decimals, with its trend.
///
/// Rounds like `Number.prototype.toFixed(2)`: the exact value of the double
/// is rounded half away from zero, so 23/160 reads `14.37%`. A zero total
/// yields `"0%"`.
pub fn share_of(count: u64, total: u64) -> (Trend, String) {
    if total == 0 {
        return (Trend::Negative, "0%".to_string());
    }

    let hundredths = to_hundredths(count as f64 / total as f64 * 100.0);
    let trend = if hundredths >= 5_000 {
        Trend::Positive
    } else {
        Trend::Negative
    };

    (trend, format!("{}.{:02}%", hundredths / 100, hundredths % 100))
}

/// Rounds a non-negative double to hundredths from its exact decimal expansion.
fn to_hundredths(value: f64) -> u64 {
    // 1074 fractional digits cover every finite f64 exactly.
    let exact = format!("{value:.1074}");
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));

    let whole: u64 = whole.parse().unwrap_or(0);
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().unwrap_or(0) >= 5;

    whole * 100 + tenths * 10 + hundredths + u64::from(round_up)
}

/// Payload of a page fetch consumed by the list widget.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub members: Vec<ViewMember>,
    pub total_records: u64,
    pub stats_data: Vec<StatSummary>,
    /// 0-based page index.
    pub page: usize,
}

impl PageResult {
    /// The value returned whenever a fetch fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reshapes one backend page requested as the 1-based `page`.
    pub fn from_page(data: MemberPage, page: usize) -> Self {
        let stats_data = StatSummary::tiles(data.total_docs, &data.status_summary);
        Self {
            members: data.docs.into_iter().map(ViewMember::from).collect(),
            total_records: data.total_docs,
            stats_data,
            page: page.saturating_sub(1),
        }
    }
}

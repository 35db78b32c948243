//! Query string accepted by the page-fetch endpoint.

use serde::Deserialize;
use serde_json::Value;

use crate::dto::team_members::{DEFAULT_PAGE_SIZE, PageQuery};
use crate::forms::FormError;

/// Raw `?page=&rowsPerPage=&search=&filters=` parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembersQueryForm {
    pub page: Option<usize>,
    #[serde(alias = "pageSize")]
    pub rows_per_page: Option<usize>,
    pub search: Option<String>,
    /// JSON object encoded as a string.
    pub filters: Option<String>,
}

impl TryFrom<TeamMembersQueryForm> for PageQuery {
    type Error = FormError;

    fn try_from(form: TeamMembersQueryForm) -> Result<Self, Self::Error> {
        let filters = match form.filters.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match serde_json::from_str::<Value>(raw)? {
                Value::Null => None,
                value => Some(value),
            },
        };

        let query = PageQuery::new(form.page.unwrap_or(1))
            .page_size(form.rows_per_page.unwrap_or(DEFAULT_PAGE_SIZE))
            .search(form.search.unwrap_or_default());

        Ok(match filters {
            Some(filters) => query.filters(filters),
            None => query,
        })
    }
}

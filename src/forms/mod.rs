//! Form definitions backing the team member routes.

use thiserror::Error;

pub mod team_members;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid filters: {0}")]
    InvalidFilters(#[from] serde_json::Error),
}

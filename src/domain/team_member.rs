//! Team member records as owned by the external team-member service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decodes `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Raw team member record returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl TeamMember {
    /// Local part of the email, i.e. everything before the first `@`.
    ///
    /// Emails without `@` are returned whole; no validation is performed.
    pub fn username(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }
}

/// Per-status totals reported alongside a page of members.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inactive: u64,
}

/// Free-form member fields forwarded verbatim on create and update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct TeamMemberPayload(pub Map<String, Value>);

/// Free-form status change forwarded verbatim, usually `{"status": "..."}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct StatusPayload(pub Map<String, Value>);

/// Uniform `{success, ...}` outcome of a mutation.
///
/// Any extra fields the backend replies with are kept as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ActionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActionResult {
    /// The bare `{"success": false}` reply used when a call fails.
    pub fn failure() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn member(email: &str) -> TeamMember {
        TeamMember {
            id: "1".to_string(),
            name: "Ann".to_string(),
            email: email.to_string(),
            ..TeamMember::default()
        }
    }

    #[test]
    fn username_is_local_part_of_email() {
        assert_eq!(member("ann@x.com").username(), "ann");
        assert_eq!(member("a@b@c").username(), "a");
    }

    #[test]
    fn username_without_at_sign_is_whole_email() {
        assert_eq!(member("not-an-email").username(), "not-an-email");
        assert_eq!(member("").username(), "");
    }

    #[test]
    fn member_deserializes_from_backend_shape() {
        let raw = json!({
            "_id": "64f0",
            "name": "Ann",
            "email": "ann@x.com",
            "phone": "1",
            "status": "active",
            "createdAt": "2024-01-01"
        });

        let member: TeamMember = serde_json::from_value(raw).unwrap();

        assert_eq!(member.id, "64f0");
        assert_eq!(member.status, "active");
    }

    #[test]
    fn null_phone_and_status_read_as_empty() {
        let raw = json!({
            "_id": "1",
            "name": "Ann",
            "email": "ann@x.com",
            "phone": null,
            "status": null
        });

        let member: TeamMember = serde_json::from_value(raw).unwrap();

        assert_eq!(member.phone, "");
        assert_eq!(member.status, "");
    }

    #[test]
    fn null_counts_read_as_zero() {
        let raw = json!({"active": 1, "pending": null, "inactive": null});

        let summary: StatusSummary = serde_json::from_value(raw).unwrap();

        assert_eq!(
            summary,
            StatusSummary {
                active: 1,
                pending: 0,
                inactive: 0,
            }
        );
    }

    #[test]
    fn member_without_email_is_rejected() {
        let raw = json!({"_id": "1", "name": "Ann"});

        assert!(serde_json::from_value::<TeamMember>(raw).is_err());
    }

    #[test]
    fn action_result_keeps_extra_fields() {
        let raw = json!({"success": true, "message": "deleted", "data": {"_id": "42"}});

        let result: ActionResult = serde_json::from_value(raw.clone()).unwrap();

        assert!(result.success);
        assert_eq!(result.extra["message"], "deleted");
        assert_eq!(serde_json::to_value(&result).unwrap(), raw);
    }

    #[test]
    fn failure_serializes_to_bare_flag() {
        assert_eq!(
            serde_json::to_value(ActionResult::failure()).unwrap(),
            json!({"success": false})
        );
    }
}

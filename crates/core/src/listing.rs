//! Listing lifecycle rules shared by franchises, businesses, and
//! advertisements.
//!
//! A listing is always in exactly one of three states: `pending` (awaiting
//! moderation, the initial state), `active` (visible to public reads), or
//! `inactive` (hidden, soft-deleted). The `is_active` flag persisted and
//! serialized next to the status is *derived* from the status, never set
//! independently, so the two can't disagree.
//!
//! A moderator may move a listing to any of the three states at any time;
//! there is no forward-only workflow. Every transition is idempotent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length for listing names and advertisement titles (characters).
pub const MAX_NAME_LENGTH: usize = 200;

/// Moderation state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Newly submitted, awaiting a moderation decision.
    Pending,
    /// Approved and visible to public listing queries.
    Active,
    /// Hidden from public queries (soft-deleted or moderation-rejected).
    Inactive,
}

/// All valid listing status strings, in wire form.
pub const VALID_STATUSES: &[&str] = &["pending", "active", "inactive"];

impl ListingStatus {
    /// Return the wire/database representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Active => "active",
            ListingStatus::Inactive => "inactive",
        }
    }

    /// Whether a listing in this status is visible to public reads.
    ///
    /// This is the single source of truth for the `is_active` column:
    /// `active` listings are visible, `pending` and `inactive` are not.
    pub fn is_active(self) -> bool {
        matches!(self, ListingStatus::Active)
    }

    /// Derive a status from a bare visibility flag.
    ///
    /// Franchise status updates carry only `is_active` on the wire:
    /// `true` maps to `active`, `false` to `inactive`.
    pub fn from_active_flag(is_active: bool) -> Self {
        if is_active {
            ListingStatus::Active
        } else {
            ListingStatus::Inactive
        }
    }

    /// Parse a wire status string.
    pub fn parse(status: &str) -> Result<Self, CoreError> {
        match status {
            "pending" => Ok(ListingStatus::Pending),
            "active" => Ok(ListingStatus::Active),
            "inactive" => Ok(ListingStatus::Inactive),
            other => Err(CoreError::Validation(format!(
                "Invalid listing status '{}'. Must be one of: {:?}",
                other, VALID_STATUSES
            ))),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a status-update request body into a single target status.
///
/// Legacy clients send `status` and `is_active` as independent fields.
/// The rules here keep them coherent:
///
/// - `status` alone: parsed and used; `is_active` is derived.
/// - `status` plus `is_active`: the flag must agree with the status,
///   otherwise the request is rejected rather than persisting a
///   contradictory pair.
/// - `is_active` alone: `true` -> `active`, `false` -> `inactive`
///   (the franchise wire shape).
/// - Neither: rejected.
pub fn resolve_status_patch(
    status: Option<&str>,
    is_active: Option<bool>,
) -> Result<ListingStatus, CoreError> {
    match (status, is_active) {
        (Some(s), None) => ListingStatus::parse(s),
        (Some(s), Some(flag)) => {
            let parsed = ListingStatus::parse(s)?;
            if parsed.is_active() != flag {
                return Err(CoreError::Validation(format!(
                    "Status '{}' conflicts with is_active={}",
                    parsed, flag
                )));
            }
            Ok(parsed)
        }
        (None, Some(flag)) => Ok(ListingStatus::from_active_flag(flag)),
        (None, None) => Err(CoreError::Validation(
            "Either status or is_active must be provided".to_string(),
        )),
    }
}

/// Validate a listing name or advertisement title.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn all_statuses_round_trip_through_parse() {
        for s in VALID_STATUSES {
            let parsed = ListingStatus::parse(s).unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(ListingStatus::parse("draft").is_err());
        assert!(ListingStatus::parse("ACTIVE").is_err());
        assert!(ListingStatus::parse("").is_err());
    }

    #[test]
    fn only_active_is_visible() {
        assert!(ListingStatus::Active.is_active());
        assert!(!ListingStatus::Pending.is_active());
        assert!(!ListingStatus::Inactive.is_active());
    }

    #[test]
    fn active_flag_derives_active_or_inactive() {
        assert_eq!(
            ListingStatus::from_active_flag(true),
            ListingStatus::Active
        );
        assert_eq!(
            ListingStatus::from_active_flag(false),
            ListingStatus::Inactive
        );
    }

    #[test]
    fn patch_with_status_only_resolves() {
        assert_eq!(
            resolve_status_patch(Some("active"), None).unwrap(),
            ListingStatus::Active
        );
        assert_eq!(
            resolve_status_patch(Some("pending"), None).unwrap(),
            ListingStatus::Pending
        );
    }

    #[test]
    fn patch_with_agreeing_pair_resolves() {
        assert_eq!(
            resolve_status_patch(Some("active"), Some(true)).unwrap(),
            ListingStatus::Active
        );
        assert_eq!(
            resolve_status_patch(Some("inactive"), Some(false)).unwrap(),
            ListingStatus::Inactive
        );
        assert_eq!(
            resolve_status_patch(Some("pending"), Some(false)).unwrap(),
            ListingStatus::Pending
        );
    }

    #[test]
    fn patch_with_conflicting_pair_is_rejected() {
        assert_matches!(
            resolve_status_patch(Some("active"), Some(false)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            resolve_status_patch(Some("pending"), Some(true)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            resolve_status_patch(Some("inactive"), Some(true)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn patch_with_flag_only_resolves() {
        assert_eq!(
            resolve_status_patch(None, Some(true)).unwrap(),
            ListingStatus::Active
        );
        assert_eq!(
            resolve_status_patch(None, Some(false)).unwrap(),
            ListingStatus::Inactive
        );
    }

    #[test]
    fn empty_patch_is_rejected() {
        assert!(resolve_status_patch(None, None).is_err());
    }

    #[test]
    fn name_validation() {
        assert!(validate_name("Acme Corp").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }
}

//! Inquiry triage rules, derived classification, and moderation filtering.
//!
//! Inquiries are contact-form submissions, optionally attached to a
//! franchise or a business (never both). The attachment is classified into
//! a derived kind -- `franchise`, `business`, or `general` -- computed from
//! the foreign keys, never stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length for the free-text message field (characters).
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Triage status
// ---------------------------------------------------------------------------

/// All valid inquiry status strings, in wire form.
pub const VALID_STATUSES: &[&str] = &["pending", "replied", "closed"];

/// Triage state of an inquiry.
///
/// Every pairwise transition is allowed; a moderator may re-open a closed
/// inquiry by setting it back to `pending` or `replied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Awaiting a first response (the initial state).
    Pending,
    /// A moderator has responded.
    Replied,
    /// No further action expected.
    Closed,
}

impl InquiryStatus {
    /// Return the wire/database representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryStatus::Pending => "pending",
            InquiryStatus::Replied => "replied",
            InquiryStatus::Closed => "closed",
        }
    }

    /// Parse a wire inquiry status string.
    pub fn parse(status: &str) -> Result<Self, CoreError> {
        match status {
            "pending" => Ok(InquiryStatus::Pending),
            "replied" => Ok(InquiryStatus::Replied),
            "closed" => Ok(InquiryStatus::Closed),
            other => Err(CoreError::Validation(format!(
                "Invalid inquiry status '{}'. Must be one of: {:?}",
                other, VALID_STATUSES
            ))),
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Derived kind
// ---------------------------------------------------------------------------

/// Derived classification of an inquiry's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryKind {
    /// Attached to a franchise listing.
    Franchise,
    /// Attached to a business listing.
    Business,
    /// Not attached to any listing.
    General,
}

impl InquiryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryKind::Franchise => "franchise",
            InquiryKind::Business => "business",
            InquiryKind::General => "general",
        }
    }

    pub fn parse(kind: &str) -> Result<Self, CoreError> {
        match kind {
            "franchise" => Ok(InquiryKind::Franchise),
            "business" => Ok(InquiryKind::Business),
            "general" => Ok(InquiryKind::General),
            other => Err(CoreError::Validation(format!(
                "Invalid inquiry type '{}'. Must be one of: [\"franchise\", \"business\", \"general\"]",
                other
            ))),
        }
    }
}

/// Classify an inquiry by its foreign keys.
///
/// `franchise_id` set -> `franchise`; `business_id` set -> `business`;
/// neither -> `general`. [`validate_target`] guarantees both are never set
/// at once, so the match order is not load-bearing.
pub fn derived_kind(franchise_id: Option<DbId>, business_id: Option<DbId>) -> InquiryKind {
    match (franchise_id, business_id) {
        (Some(_), _) => InquiryKind::Franchise,
        (None, Some(_)) => InquiryKind::Business,
        (None, None) => InquiryKind::General,
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate that at most one of `franchise_id` / `business_id` is set.
pub fn validate_target(
    franchise_id: Option<DbId>,
    business_id: Option<DbId>,
) -> Result<(), CoreError> {
    if franchise_id.is_some() && business_id.is_some() {
        return Err(CoreError::Validation(
            "An inquiry may reference a franchise or a business, not both".to_string(),
        ));
    }
    Ok(())
}

/// Minimal structural email check: nonempty local and domain parts around
/// a single `@`, with a dot somewhere in the domain.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{}'",
            email
        )));
    }
    Ok(())
}

/// Validate a non-optional free-text field (name, subject, message).
pub fn validate_required_text(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    if value.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_MESSAGE_LENGTH
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Moderation filter
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// An empty (or whitespace-only) term matches everything.
pub fn search_matches(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

/// Immutable filter parameters for the inquiry moderation view.
///
/// Built fresh from the request's query string on every call -- filter
/// state is never retained between requests. `None` in any field means
/// "don't filter on this dimension" (the UI's "all" selection).
#[derive(Debug, Clone, Default)]
pub struct InquiryFilter {
    /// Substring matched against name OR email OR subject.
    pub search: Option<String>,
    /// Exact triage status.
    pub status: Option<InquiryStatus>,
    /// Derived target kind.
    pub kind: Option<InquiryKind>,
}

impl InquiryFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Empty strings and the literal `"all"` are treated as absent.
    /// Unknown status or kind values are rejected.
    pub fn from_params(
        search: Option<&str>,
        status: Option<&str>,
        kind: Option<&str>,
    ) -> Result<Self, CoreError> {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let status = match status.map(str::trim).filter(|s| !s.is_empty() && *s != "all") {
            Some(s) => Some(InquiryStatus::parse(s)?),
            None => None,
        };
        let kind = match kind.map(str::trim).filter(|s| !s.is_empty() && *s != "all") {
            Some(s) => Some(InquiryKind::parse(s)?),
            None => None,
        };
        Ok(Self {
            search,
            status,
            kind,
        })
    }

    /// Whether an inquiry with the given fields passes the filter.
    ///
    /// All active dimensions must match (conjunction); the search term is
    /// a disjunction across name, email, and subject.
    pub fn matches(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        status: &str,
        franchise_id: Option<DbId>,
        business_id: Option<DbId>,
    ) -> bool {
        if let Some(term) = &self.search {
            if !search_matches(term, &[name, email, subject]) {
                return false;
            }
        }
        if let Some(wanted) = self.status {
            if status != wanted.as_str() {
                return false;
            }
        }
        if let Some(wanted) = self.kind {
            if derived_kind(franchise_id, business_id) != wanted {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

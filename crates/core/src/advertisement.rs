//! Advertisement payment status values.
//!
//! Payment processing itself is an external collaborator; this module only
//! tracks where an advertisement sits in the paid lifecycle. Transitions
//! are unrestricted (a refund may be recorded from any state).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All valid payment status strings, in wire form.
pub const VALID_PAYMENT_STATUSES: &[&str] = &["unpaid", "paid", "refunded"];

/// Payment state of an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment recorded yet (the default for new advertisements).
    Unpaid,
    /// Payment received.
    Paid,
    /// Payment returned to the advertiser.
    Refunded,
}

impl PaymentStatus {
    /// Return the wire/database representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    /// Parse a wire payment status string.
    pub fn parse(status: &str) -> Result<Self, CoreError> {
        match status {
            "unpaid" => Ok(PaymentStatus::Unpaid),
            "paid" => Ok(PaymentStatus::Paid),
            "refunded" => Ok(PaymentStatus::Refunded),
            other => Err(CoreError::Validation(format!(
                "Invalid payment status '{}'. Must be one of: {:?}",
                other, VALID_PAYMENT_STATUSES
            ))),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

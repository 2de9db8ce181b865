//! Booking status lifecycle values.
//!
//! The `status` column on `bookings` is free text: the backend only ever
//! writes `pending` (on creation), and the status-update endpoint accepts any
//! value a caller sends. Transition legality is intentionally NOT enforced,
//! and `completed_at` is never cleared when a booking later moves away from
//! `completed` -- both are preserved behaviors of the shipped system.

/// Parsed form of a booking's `status` column.
///
/// Only `Pending` and `Completed` carry meaning for the ledger: `Completed`
/// is what triggers the one-time `completed_at` stamp. Every other value
/// (`in-progress`, `cancelled`, or anything else a caller sends) is carried
/// through verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Completed,
    Other(String),
}

impl BookingStatus {
    /// Parse a raw status string. Never fails; unrecognized values become
    /// [`BookingStatus::Other`]. Matching is exact and case-sensitive, the
    /// same comparison the completion stamp uses.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }

    /// The exact string stored in the `status` column.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Whether setting this status stamps `completed_at`.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_known_values() {
        assert_eq!(BookingStatus::parse("pending"), BookingStatus::Pending);
        assert_eq!(BookingStatus::parse("completed"), BookingStatus::Completed);
    }

    #[test]
    fn parse_preserves_unknown_values_verbatim() {
        let status = BookingStatus::parse("in-progress");
        assert_eq!(status, BookingStatus::Other("in-progress".to_string()));
        assert_eq!(status.as_str(), "in-progress");

        // Even values that look like typos of known ones pass through.
        let status = BookingStatus::parse("Completed");
        assert_matches!(status, BookingStatus::Other(_));
        assert_eq!(status.as_str(), "Completed");
        assert!(!status.is_completed(), "matching is case-sensitive");
    }

    #[test]
    fn as_str_round_trips() {
        for raw in ["pending", "completed", "cancelled", ""] {
            assert_eq!(BookingStatus::parse(raw).as_str(), raw);
        }
    }

    #[test]
    fn only_completed_stamps() {
        assert!(BookingStatus::parse("completed").is_completed());
        assert!(!BookingStatus::parse("pending").is_completed());
        assert!(!BookingStatus::parse("cancelled").is_completed());
    }
}
